// This file is part of yash, an extended POSIX shell.
// Copyright (C) 2026 WATANABE Yuki

//! Classic `getopt` interface with process-wide state
//!
//! This module mirrors the global variables of the POSIX `getopt` function.
//! The cursor, `opterr`, and `optopt` live in one process-wide state shared by
//! all callers, so code ported from C can keep its structure:
//!
//! ```
//! use yash_getopt::global;
//!
//! let args = ["prog", "-v", "-f", "file", "operand"];
//! global::reset();
//! let mut file = None;
//! while let Some(c) = global::getopt(&args, "vf:").code {
//!     match c {
//!         'v' => (),
//!         'f' => file = global::last_optarg(),
//!         _ => return,
//!     }
//! }
//! assert_eq!(file.as_deref(), Some("file"));
//! assert_eq!(&args[global::optind()..], ["operand"]);
//! ```
//!
//! Only one scan may be in progress at a time. The state is protected by a
//! mutex, so concurrent calls do not corrupt it, but two scans interleaving
//! their calls will move each other's cursor. Prefer a
//! [`Scanner`](crate::Scanner) where the structure of the code allows it.
//!
//! Diagnostics are printed to the standard error.

use crate::Scanner;
use crate::model::{Cursor, OptionSpec, UNKNOWN_OPTION};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug)]
struct State {
    cursor: Cursor,
    opterr: bool,
    optopt: char,
    optarg: Option<String>,
}

impl State {
    const fn new() -> Self {
        State {
            cursor: Cursor::new(),
            opterr: true,
            optopt: UNKNOWN_OPTION,
            optarg: None,
        }
    }
}

static STATE: Mutex<State> = Mutex::new(State::new());

fn state() -> MutexGuard<'static, State> {
    STATE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Result of [`getopt`]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Getopt<'a> {
    /// Value the classic `getopt` function returns
    ///
    /// `None` means the end of the options, which `getopt` reports as `-1`.
    /// See [`Outcome::code`](crate::model::Outcome::code) for the other
    /// values.
    pub code: Option<char>,

    /// Argument to the option, borrowed from the scanned arguments
    pub optarg: Option<&'a str>,
}

/// Scans the next option using the process-wide state.
///
/// This function behaves like [`Scanner::next`] on a scanner that keeps its
/// state between calls. The option argument is returned in the result; a copy
/// of it is also kept for [`last_optarg`].
pub fn getopt<'a, T>(args: &'a [T], spec: &str) -> Getopt<'a>
where
    T: AsRef<str>,
{
    let mut state = state();
    let mut scanner = Scanner::new();
    scanner.cursor = state.cursor;
    scanner.opterr = state.opterr;
    scanner.optopt = state.optopt;

    let outcome = scanner.next(args, spec);

    state.cursor = scanner.cursor;
    state.optopt = scanner.optopt;
    state.optarg = scanner.optarg.map(str::to_owned);
    Getopt {
        code: outcome.code(OptionSpec::from(spec)),
        optarg: scanner.optarg,
    }
}

/// Returns the index of the next argument to scan.
#[must_use]
pub fn optind() -> usize {
    state().cursor.index()
}

/// Moves the scan to the start of the argument at `index`.
///
/// Set the index to 1 to start scanning a new argument vector.
pub fn set_optind(index: usize) {
    state().cursor.set_index(index);
}

/// Returns whether diagnostics are printed.
#[must_use]
pub fn opterr() -> bool {
    state().opterr
}

/// Enables or disables diagnostics.
pub fn set_opterr(opterr: bool) {
    state().opterr = opterr;
}

/// Returns the option character that caused the last error.
#[must_use]
pub fn optopt() -> char {
    state().optopt
}

/// Returns a copy of the argument to the last scanned option.
#[must_use]
pub fn last_optarg() -> Option<String> {
    state().optarg.clone()
}

/// Restores the initial state.
pub fn reset() {
    *state() = State::new();
}
