// This file is part of yash, an extended POSIX shell.
// Copyright (C) 2026 WATANABE Yuki

//! Prints the options and operands given on the command line.
//!
//! ```sh
//! cargo run --example options -- -a1 -f file.txt -x operand
//! ```

use yash_getopt::Scanner;
use yash_getopt::model::{OptionSpec, OptionType, Outcome};

const SPEC: &str = ":hva1f:";

fn synopsis() -> String {
    let mut synopsis = String::from("Usage : example");
    for (option, r#type) in OptionSpec::from(SPEC).options() {
        match r#type {
            OptionType::TakesArgument => synopsis += &format!(" [-{option} <filename>]"),
            _ => synopsis += &format!(" [-{option}]"),
        }
    }
    synopsis += " [non-option-arguments]";
    synopsis
}

fn usage_error() {
    eprintln!("{}", synopsis());
    eprintln!("For help : example -h");
}

fn usage_full() {
    println!("{}", synopsis());
    println!("    -h Display this help text");
    println!("    -v Display the program version number");
    println!("    -a Set the 'a' flag for the program");
    println!("    -1 Set the '1' flag for the program");
    println!("    -f Specify the filename to operate on");
    println!("non-option-arguments : other arguments not parsed by getopt()");
}

fn main() {
    let args = std::env::args().collect::<Vec<_>>();
    let mut scanner = Scanner::new();
    scanner.set_opterr(false);

    loop {
        match scanner.next(&args, SPEC) {
            Outcome::EndOfOptions => break,
            Outcome::UnknownOption(c) => {
                eprintln!("Error : unknown option '{c}'");
                usage_error();
            }
            Outcome::MissingArgument(c) => {
                eprintln!("Error : missing argument to option '{c}'");
                usage_error();
            }
            Outcome::OptionChar('h') => usage_full(),
            Outcome::OptionChar('v') => println!("Version 1.01"),
            Outcome::OptionChar('f') => {
                let file = scanner.optarg().unwrap_or_default();
                println!("You supplied the filename \"{file}\"");
            }
            Outcome::OptionChar(c) => println!("You supplied the option flag '{c}'"),
        }
    }
    println!();

    let operands = scanner.operands(&args);
    if !operands.is_empty() {
        println!("non-option argv elements : {}", operands.join(" "));
    }
}
