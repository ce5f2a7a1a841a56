// This file is part of yash, an extended POSIX shell.
// Copyright (C) 2026 WATANABE Yuki

//! Defines [`Scanner`].

use crate::model::{Cursor, Error, OptionSpec, Outcome, Scan, UNKNOWN_OPTION, step};
use crate::report::{Diagnostic, FALLBACK_PROGRAM_NAME, Sink, Stderr, program_name};

/// Option scanner
///
/// A scanner holds the [cursor](Cursor) and the result fields of an ongoing
/// scan. Call [`next`](Self::next) repeatedly with the same arguments and
/// option specification until it returns [`Outcome::EndOfOptions`]; the
/// remaining arguments are then available from [`operands`](Self::operands).
///
/// The result fields correspond to the variables of the classic `getopt`
/// interface:
///
/// | Method | Variable | Meaning |
/// |--------|----------|---------|
/// | [`optarg`](Self::optarg) | `optarg` | Argument to the last option |
/// | [`optind`](Self::optind) | `optind` | Index of the next argument |
/// | [`opterr`](Self::opterr) | `opterr` | Whether diagnostics are printed |
/// | [`optopt`](Self::optopt) | `optopt` | Option that caused the last error |
///
/// The option argument is a slice of the arguments passed to `next`, so the
/// arguments must outlive the scanner's use of it. One scanner should be used
/// for one argument vector at a time; call [`reset`](Self::reset) before
/// scanning another.
///
/// Diagnostics are sent to the sink `S`, which is [`Stderr`] by default.
#[derive(Clone, Debug)]
pub struct Scanner<'a, S = Stderr> {
    pub(crate) cursor: Cursor,
    pub(crate) optarg: Option<&'a str>,
    pub(crate) opterr: bool,
    pub(crate) optopt: char,
    program_name: Option<String>,
    sink: S,
}

impl Default for Scanner<'_, Stderr> {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner<'_, Stderr> {
    /// Creates a scanner that prints diagnostics to the standard error.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(Stderr)
    }
}

impl<'a, S: Sink> Scanner<'a, S> {
    /// Creates a scanner that sends diagnostics to the given sink.
    #[must_use]
    pub fn with_sink(sink: S) -> Self {
        Scanner {
            cursor: Cursor::new(),
            optarg: None,
            opterr: true,
            optopt: UNKNOWN_OPTION,
            program_name: None,
            sink,
        }
    }

    /// Scans the next option.
    ///
    /// `args[0]` is the program name and is not scanned. See [`step`] for how
    /// arguments are classified.
    ///
    /// This method updates [`optarg`](Self::optarg) and
    /// [`optind`](Self::optind). If the outcome is an error,
    /// [`optopt`](Self::optopt) is set to the offending option character and,
    /// if [`opterr`](Self::opterr) is true and the specification does not
    /// start with a colon, a diagnostic is sent to the sink.
    pub fn next<'s, T>(&mut self, args: &'a [T], spec: impl Into<OptionSpec<'s>>) -> Outcome
    where
        T: AsRef<str>,
    {
        let spec = spec.into();
        let Scan { outcome, argument } = step(&mut self.cursor, args, spec);
        log::trace!(
            "scanned {outcome:?} with {:?}, next index {}",
            spec.as_raw(),
            self.cursor.index()
        );

        self.optarg = argument;
        match outcome {
            Outcome::UnknownOption(option) => self.fail(spec, Error::UnknownOption, option),
            Outcome::MissingArgument(option) => self.fail(spec, Error::MissingArgument, option),
            Outcome::EndOfOptions | Outcome::OptionChar(_) => (),
        }
        outcome
    }

    fn fail(&mut self, spec: OptionSpec, error: Error, option: char) {
        self.optopt = option;
        if !self.opterr || spec.reports_missing_argument() {
            return;
        }

        let resolved;
        let program = match &self.program_name {
            Some(name) => name.as_str(),
            None => {
                resolved = program_name();
                resolved.as_deref().unwrap_or(FALLBACK_PROGRAM_NAME)
            }
        };
        log::debug!("reporting {error} for option {option:?}");
        self.sink.emit(&Diagnostic {
            program,
            error,
            option,
        });
    }

    /// Returns the argument to the last scanned option.
    ///
    /// This is `None` unless the last call to [`next`](Self::next) returned
    /// an option that takes an argument.
    #[inline]
    #[must_use]
    pub fn optarg(&self) -> Option<&'a str> {
        self.optarg
    }

    /// Returns the index of the next argument to scan.
    ///
    /// After [`next`](Self::next) returns [`Outcome::EndOfOptions`], this is
    /// the index of the first operand.
    #[inline]
    #[must_use]
    pub fn optind(&self) -> usize {
        self.cursor.index()
    }

    /// Moves the scan to the start of the argument at `index`.
    ///
    /// Setting the index to 1 starts a new scan.
    pub fn set_optind(&mut self, index: usize) {
        self.cursor.set_index(index);
    }

    /// Returns whether diagnostics are sent to the sink.
    #[inline]
    #[must_use]
    pub fn opterr(&self) -> bool {
        self.opterr
    }

    /// Enables or disables diagnostics. They are enabled by default.
    pub fn set_opterr(&mut self, opterr: bool) {
        self.opterr = opterr;
    }

    /// Returns the option character that caused the last error.
    ///
    /// The initial value is [`UNKNOWN_OPTION`].
    #[inline]
    #[must_use]
    pub fn optopt(&self) -> char {
        self.optopt
    }

    /// Returns the current position of the scan.
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Overrides the program name used in diagnostics.
    ///
    /// By default, the name is determined by
    /// [`program_name`](crate::report::program_name).
    pub fn set_program_name<N: Into<String>>(&mut self, name: N) {
        self.program_name = Some(name.into());
    }

    /// Returns the arguments that follow the scanned options.
    ///
    /// The result is meaningful after [`next`](Self::next) has returned
    /// [`Outcome::EndOfOptions`].
    #[must_use]
    pub fn operands<'b, T>(&self, args: &'b [T]) -> &'b [T] {
        args.get(self.cursor.index()..).unwrap_or_default()
    }

    /// Prepares the scanner for a new argument vector.
    ///
    /// The diagnostic settings are retained.
    pub fn reset(&mut self) {
        self.cursor.reset();
        self.optarg = None;
        self.optopt = UNKNOWN_OPTION;
    }

    /// Returns a reference to the sink.
    #[inline]
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the scanner and returns the sink.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }
}
