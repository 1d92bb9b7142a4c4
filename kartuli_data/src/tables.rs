//! Static substitution tables consulted during slug generation.
//!
//! Two independent tables: [`latin_substitute`] spells known Unicode
//! symbols in ASCII, [`georgian_substitute`] folds the other Georgian
//! script forms down to modern Mkhedruli. A slugify call consults exactly
//! one of them.

/// ASCII spelling for a Unicode character, if one is known.
///
/// Covers letters that compatibility decomposition cannot fold (ß, æ, ø
/// and friends are unique codepoints, not composed) plus common
/// typographic punctuation. Accented letters like é are left to the NFKD
/// pass.
pub fn latin_substitute(ch: char) -> Option<&'static str> {
    let ascii = match ch {
        'Æ' => "AE",
        'æ' => "ae",
        'Œ' => "OE",
        'œ' => "oe",
        'ß' => "ss",
        'Ð' | 'Đ' => "D",
        'ð' | 'đ' => "d",
        'Þ' => "TH",
        'þ' => "th",
        'Ħ' => "H",
        'ħ' => "h",
        'ı' => "i",
        'Ł' => "L",
        'ł' => "l",
        'Ŋ' => "NG",
        'ŋ' => "ng",
        'Ø' => "O",
        'ø' => "o",
        'Ŧ' => "T",
        'ŧ' => "t",
        'ĸ' => "k",

        // typographic punctuation
        '–' | '—' | '―' => "-",
        '‘' | '’' | '‚' => "'",
        '“' | '”' | '„' | '«' | '»' => "\"",
        '…' => "...",
        '•' => "*",
        '©' => "(c)",
        '®' => "(r)",
        '™' => "(tm)",

        _ => return None,
    };
    Some(ascii)
}

/// Modern Mkhedruli equivalent of a Georgian letter written in another
/// script form, if the character is one.
///
/// Asomtavruli (U+10A0..U+10C5), Mtavruli (U+1C90..U+1CBA, the all-caps
/// form), and Nuskhuri (U+2D00..U+2D25) letters sit at fixed offsets from
/// their Mkhedruli counterparts, so the fold is arithmetic per block.
pub fn georgian_substitute(ch: char) -> Option<char> {
    let code = ch as u32;
    let mkhedruli = match code {
        0x10A0..=0x10C5 | 0x10C7 | 0x10CD => code + 0x30, // Asomtavruli
        0x1C90..=0x1CBA | 0x1CBD..=0x1CBF => code - 0xBC0, // Mtavruli
        0x2D00..=0x2D25 | 0x2D27 | 0x2D2D => code - 0x1C30, // Nuskhuri
        _ => return None,
    };
    char::from_u32(mkhedruli)
}
