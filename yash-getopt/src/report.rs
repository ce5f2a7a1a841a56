// This file is part of yash, an extended POSIX shell.
// Copyright (C) 2026 WATANABE Yuki

//! Diagnostic messages for option errors
//!
//! When the scanner encounters an [error](Error), it hands a [`Diagnostic`] to
//! a [`Sink`], which is responsible for presenting it. The default sink,
//! [`Stderr`], prints the message to the standard error. A closure taking a
//! `&Diagnostic` can be used as a sink as well.
//!
//! The message has the form `<program> : <problem> '-<option>'`, where
//! `<program>` is the file name of the running executable as returned by
//! [`program_name`], or [`FALLBACK_PROGRAM_NAME`] if it is not available.

use crate::model::Error;
use std::fmt::{self, Display, Formatter};
use std::io::Write as _;
use std::path::Path;

/// Label used in place of the program name when the name cannot be
/// determined
pub const FALLBACK_PROGRAM_NAME: &str = "Error";

/// Diagnostic message about an option error
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Diagnostic<'a> {
    /// Name of the program that received the options
    pub program: &'a str,
    /// Kind of the error
    pub error: Error,
    /// Option character that caused the error
    pub option: char,
}

/// Formats the diagnostic as a single line without a trailing newline.
impl Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {} '-{}'", self.program, self.error, self.option)
    }
}

/// Destination of diagnostic messages
pub trait Sink {
    /// Presents the diagnostic.
    ///
    /// Diagnostics are best-effort: implementations should not fail or panic
    /// if the message cannot be delivered.
    fn emit(&mut self, diagnostic: &Diagnostic<'_>);
}

impl<F> Sink for F
where
    F: FnMut(&Diagnostic<'_>),
{
    fn emit(&mut self, diagnostic: &Diagnostic<'_>) {
        self(diagnostic)
    }
}

/// Sink that prints diagnostics to the standard error
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Stderr;

impl Sink for Stderr {
    fn emit(&mut self, diagnostic: &Diagnostic<'_>) {
        let mut stderr = std::io::stderr().lock();
        if let Err(e) = writeln!(stderr, "{diagnostic}") {
            log::debug!("cannot print diagnostic: {e}");
        }
    }
}

/// Returns the short name of the running program.
///
/// The name is the last path component of the first argument the process was
/// started with. Returns `None` if the process has no arguments or the first
/// argument has no file name component.
#[must_use]
pub fn program_name() -> Option<String> {
    let arg0 = std::env::args_os().next()?;
    short_name(Path::new(&arg0))
}

fn short_name(path: &Path) -> Option<String> {
    let name = path.file_name()?;
    Some(name.to_string_lossy().into_owned())
}
