// This file is part of yash, an extended POSIX shell.
// Copyright (C) 2026 WATANABE Yuki

//! This crate provides an option scanner that follows the POSIX `getopt`
//! contract.
//!
//! The scanner examines the arguments given to a program one option at a time.
//! Every call to [`Scanner::next`] classifies the next option character as:
//!
//! - an option listed in the option specification
//!   ([`OptionChar`](model::Outcome::OptionChar)),
//! - an option not listed in the specification
//!   ([`UnknownOption`](model::Outcome::UnknownOption)),
//! - an option that requires an argument that is not given
//!   ([`MissingArgument`](model::Outcome::MissingArgument)), or
//! - the end of the options ([`EndOfOptions`](model::Outcome::EndOfOptions)).
//!
//! The option specification is a string of option characters, each of which may
//! be followed by a colon to indicate that the option takes an argument. The
//! argument is either the rest of the argument containing the option (`-fvalue`)
//! or the next argument (`-f value`). A colon at the beginning of the
//! specification makes the scanner report a missing argument with `:` instead
//! of `?` and suppresses diagnostic messages.
//!
//! The scanner never reorders the arguments. It stops at the first argument
//! that is not an option, at a lone hyphen (`-`), or just after a double hyphen
//! (`--`). The index of the first operand is then available from
//! [`Scanner::optind`].
//!
//! ```
//! use yash_getopt::Scanner;
//! use yash_getopt::model::Outcome;
//!
//! let args = ["prog", "-av", "-f", "file.txt", "-", "-v"];
//! let mut scanner = Scanner::new();
//! let mut flags = String::new();
//! let mut file = None;
//! loop {
//!     match scanner.next(&args, "af:v") {
//!         Outcome::OptionChar('f') => file = scanner.optarg(),
//!         Outcome::OptionChar(c) => flags.push(c),
//!         Outcome::UnknownOption(_) | Outcome::MissingArgument(_) => unreachable!(),
//!         Outcome::EndOfOptions => break,
//!     }
//! }
//! assert_eq!(flags, "av");
//! assert_eq!(file, Some("file.txt"));
//! assert_eq!(scanner.operands(&args), ["-", "-v"]);
//! ```
//!
//! Long options, optional option arguments, and argument permutation are not
//! supported.
//!
//! The [`global`] module provides the classic interface where the scanner
//! state is shared by the whole process.

pub mod global;
pub mod model;
pub mod report;
mod scanner;

pub use self::scanner::Scanner;
