//! CLI entry point for the kartuli toolkit.
//! Usage: kartuli translit "მე მიყვარს ანი"

use std::path::PathBuf;
use std::{env, process};

use anyhow::Result;
use colored::Colorize;
use kartuli::{Direction, Fallback, Romanizer, SlugOptions, SlugTable, load_scheme};
use log::info;

const USAGE: &str = "Usage:
  kartuli translit [--to-georgian] [--space | --fallback <value>] [--scheme <file.toml>] <text>...
  kartuli slug [--translit] [--georgian-table] [--lower] [--no-collapse] [--scheme <file.toml>] <text>...
  kartuli alphabet [--scheme <file.toml>]";

const COMMANDS: [&str; 3] = ["translit", "slug", "alphabet"];

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    // Accept either:
    // 1) cargo run: <bin> -- <cmd> <args>
    // 2) direct:    <bin> <cmd> <args>
    let rest: Vec<String> = match args.as_slice() {
        [_, flag, cmd, tail @ ..] if flag == "--" && COMMANDS.contains(&cmd.as_str()) => {
            let mut v = vec![cmd.clone()];
            v.extend_from_slice(tail);
            v
        },
        [_, cmd, tail @ ..] if COMMANDS.contains(&cmd.as_str()) => {
            let mut v = vec![cmd.clone()];
            v.extend_from_slice(tail);
            v
        },
        _ => {
            eprintln!("{USAGE}");
            process::exit(2);
        },
    };

    match rest[0].as_str() {
        "translit" => run_translit(&rest[1..]),
        "slug" => run_slug(&rest[1..]),
        "alphabet" => run_alphabet(&rest[1..]),
        _ => unreachable!("command list checked above"),
    }
}

/// Pull a `--scheme <file>` flag out of the argument list, if present, and
/// build the romanizer to use for this invocation.
fn romanizer_from_flag(scheme: Option<&PathBuf>) -> Result<Romanizer> {
    match scheme {
        Some(path) => load_scheme(path),
        None => Ok(Romanizer::national()),
    }
}

fn run_translit(args: &[String]) -> Result<()> {
    let mut direction = Direction::ToLatin;
    let mut fallback = Fallback::PassThrough;
    let mut scheme: Option<PathBuf> = None;
    let mut words: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--to-georgian" => direction = Direction::ToGeorgian,
            "--space" => fallback = Fallback::Space,
            "--fallback" => {
                let Some(value) = args.get(i + 1) else {
                    eprintln!("--fallback requires a value");
                    process::exit(2);
                };
                fallback = Fallback::Literal(value.clone());
                i += 1;
            },
            "--scheme" => {
                let Some(path) = args.get(i + 1) else {
                    eprintln!("--scheme requires a filepath");
                    process::exit(2);
                };
                scheme = Some(PathBuf::from(path));
                i += 1;
            },
            word => words.push(word.to_string()),
        }
        i += 1;
    }
    if words.is_empty() {
        eprintln!("{USAGE}");
        process::exit(2);
    }

    let romanizer = romanizer_from_flag(scheme.as_ref())?;
    let text = words.join(" ");
    info!("transliterating {} characters ({direction:?})", text.chars().count());
    println!("{}", romanizer.transliterate(&text, direction, &fallback));
    Ok(())
}

fn run_slug(args: &[String]) -> Result<()> {
    let mut options = SlugOptions::default();
    let mut scheme: Option<PathBuf> = None;
    let mut words: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--translit" => options.transliterate = true,
            "--georgian-table" => options.table = SlugTable::Georgian,
            "--lower" => options.lowercase = true,
            "--no-collapse" => options.collapse = false,
            "--scheme" => {
                let Some(path) = args.get(i + 1) else {
                    eprintln!("--scheme requires a filepath");
                    process::exit(2);
                };
                scheme = Some(PathBuf::from(path));
                i += 1;
            },
            word => words.push(word.to_string()),
        }
        i += 1;
    }
    if words.is_empty() {
        eprintln!("{USAGE}");
        process::exit(2);
    }

    let romanizer = romanizer_from_flag(scheme.as_ref())?;
    let text = words.join(" ");
    info!("slugifying {} characters", text.chars().count());
    println!("{}", romanizer.slugify(&text, &options));
    Ok(())
}

fn run_alphabet(args: &[String]) -> Result<()> {
    let mut scheme: Option<PathBuf> = None;
    let mut i = 0;
    while i < args.len() {
        if args[i] == "--scheme" {
            let Some(path) = args.get(i + 1) else {
                eprintln!("--scheme requires a filepath");
                process::exit(2);
            };
            scheme = Some(PathBuf::from(path));
            i += 1;
        }
        i += 1;
    }

    let romanizer = romanizer_from_flag(scheme.as_ref())?;
    println!("{}", "Georgian alphabet pairing".bright_yellow().underline());
    for (georgian, latin) in romanizer
        .georgian_alphabet()
        .chars()
        .zip(romanizer.latin_letters())
    {
        println!("  {}  {}", georgian.to_string().bright_blue().bold(), latin);
    }
    Ok(())
}
