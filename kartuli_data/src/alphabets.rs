//! The Georgian alphabet and the default romanization paired with it.

/// The 33 letters of the modern Georgian (Mkhedruli) alphabet, in
/// traditional order.
pub const MKHEDRULI: &str = "აბგდევზთიკლმნოპჟრსტუფქღყშჩცძწჭხჯჰ";

/// Romanization letters of the national system, positionally paired with
/// [`MKHEDRULI`].
///
/// Letters may be more than one character (`zh`, `gh`, `ts`, ...). Several
/// Georgian letters share a romanization (both თ and ტ become `t`); reverse
/// lookups resolve such duplicates to the later pairing.
pub const NATIONAL: [&str; 33] = [
    "a", "b", "g", "d", "e", "v", "z", "t", "i", "k", "l", "m", "n", "o", "p", "zh", "r", "s", "t",
    "u", "p", "k", "gh", "y", "sh", "ch", "ts", "dz", "ts", "ch", "kh", "j", "h",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_and_romanization_pair_up() {
        assert_eq!(MKHEDRULI.chars().count(), NATIONAL.len());
    }

    #[test]
    fn romanization_letters_are_nonempty() {
        assert!(NATIONAL.iter().all(|letter| !letter.is_empty()));
    }
}
