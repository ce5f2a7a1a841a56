// This file is part of yash, an extended POSIX shell.
// Copyright (C) 2026 WATANABE Yuki

//! Main domain model of the option scanner
//!
//! This module contains the pure part of the scanner: the [option
//! specification](OptionSpec), the [cursor](Cursor) that records how far the
//! scan has progressed, and the [`step`] function that advances the cursor by
//! one option. Nothing in this module performs I/O. Printing diagnostics and
//! keeping the result fields is left to [`Scanner`](crate::Scanner).

use thiserror::Error;

/// Character returned in place of an option that is not in the specification
pub const UNKNOWN_OPTION: char = '?';

/// Character returned for a missing option argument when the option
/// specification starts with a colon
pub const MISSING_ARGUMENT: char = ':';

/// Type of an option
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OptionType {
    /// Option without an argument
    NoArgument,
    /// Option that takes an argument
    TakesArgument,
    /// Option not listed in the option specification
    Unknown,
}

/// Option specification
///
/// The specification is a string of option characters. A character followed
/// by a colon (`:`) is an option that takes an argument. If the string starts
/// with a colon, a missing option argument is reported with
/// [`MISSING_ARGUMENT`] rather than [`UNKNOWN_OPTION`] and no diagnostic
/// message is printed.
///
/// The colon itself can never be an option character.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct OptionSpec<'a> {
    raw: &'a str,
}

/// Creates an option specification from a raw string representation.
impl<'a, S: AsRef<str> + ?Sized> From<&'a S> for OptionSpec<'a> {
    #[inline(always)]
    fn from(raw: &'a S) -> Self {
        Self { raw: raw.as_ref() }
    }
}

impl<'a> OptionSpec<'a> {
    /// Returns the raw string representation of the option specification.
    #[inline(always)]
    #[must_use]
    pub fn as_raw(&self) -> &'a str {
        self.raw
    }

    /// Tests whether the specification starts with a colon.
    ///
    /// In this mode, a missing option argument is reported as
    /// [`MISSING_ARGUMENT`] and diagnostic messages are suppressed.
    #[inline]
    #[must_use]
    pub fn reports_missing_argument(&self) -> bool {
        self.raw.starts_with(':')
    }

    /// Returns the type of the option.
    #[must_use]
    pub fn judge(&self, option: char) -> OptionType {
        if option == ':' {
            return OptionType::Unknown;
        }

        let mut iter = self.raw.chars();
        match iter.find(|&c| c == option) {
            None => OptionType::Unknown,
            Some(c) => {
                debug_assert_eq!(c, option);
                if iter.next() == Some(':') {
                    OptionType::TakesArgument
                } else {
                    OptionType::NoArgument
                }
            }
        }
    }

    /// Returns an iterator over the options declared in the specification.
    ///
    /// The iterator yields the option characters in the order they appear,
    /// each paired with [`OptionType::NoArgument`] or
    /// [`OptionType::TakesArgument`].
    #[must_use]
    pub fn options(&self) -> Options<'a> {
        Options {
            chars: self.raw.chars().peekable(),
        }
    }
}

/// Iterator returned by [`OptionSpec::options`]
#[derive(Clone, Debug)]
pub struct Options<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl Iterator for Options<'_> {
    type Item = (char, OptionType);

    fn next(&mut self) -> Option<(char, OptionType)> {
        loop {
            let option = self.chars.next()?;
            if option == ':' {
                continue;
            }
            let r#type = if self.chars.peek() == Some(&':') {
                OptionType::TakesArgument
            } else {
                OptionType::NoArgument
            };
            return Some((option, r#type));
        }
    }
}

/// Position of the scan in the argument vector
///
/// The cursor has two coordinates. The index points to the argument that is
/// being examined. The offset is the byte offset of the next option character
/// in that argument. The offset is zero when the scan is at the boundary
/// between arguments, and is always reset to zero when an argument has been
/// consumed.
///
/// Once the scan reaches the end of the options, the cursor is finished and
/// stays where it is until it is [reset](Self::reset) or
/// [moved](Self::set_index).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Cursor {
    index: usize,
    offset: usize,
    finished: bool,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

impl Cursor {
    /// Creates a cursor ready to scan a new argument vector.
    ///
    /// The index is 1 so that the first argument (the program name) is
    /// skipped.
    #[must_use]
    pub const fn new() -> Self {
        Self::at(1)
    }

    /// Creates a cursor at the start of the argument at `index`.
    #[must_use]
    pub const fn at(index: usize) -> Self {
        Self {
            index,
            offset: 0,
            finished: false,
        }
    }

    /// Returns the index of the next argument to examine.
    ///
    /// After the scan has finished, this is the index of the first operand,
    /// or the number of arguments if there are no operands.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the byte offset of the next option character in the current
    /// argument, or zero at an argument boundary.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Tests whether the cursor is between two arguments.
    #[inline]
    #[must_use]
    pub const fn is_at_token_boundary(&self) -> bool {
        self.offset == 0
    }

    /// Tests whether the scan has reached the end of the options.
    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Moves the cursor to the start of the argument at `index`.
    pub fn set_index(&mut self, index: usize) {
        *self = Self::at(index);
    }

    /// Rewinds the cursor to scan a new argument vector.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[must_use]
    fn end<'a>(&mut self) -> Scan<'a> {
        self.offset = 0;
        self.finished = true;
        Scan {
            outcome: Outcome::EndOfOptions,
            argument: None,
        }
    }

    fn finish_argument(&mut self, count: usize) {
        self.index += count;
        self.offset = 0;
    }

    /// Moves past `option`, finishing the argument if nothing remains.
    fn pass(&mut self, option: char, remainder: &str) {
        if remainder.is_empty() {
            self.finish_argument(1);
        } else {
            self.offset += option.len_utf8();
        }
    }
}

/// Error that may occur when parsing an option
///
/// The `Display` implementation gives the wording used in diagnostic
/// messages.
#[derive(Clone, Copy, Debug, Eq, Error, Hash, PartialEq)]
pub enum Error {
    /// The option is not listed in the option specification.
    #[error("invalid option")]
    UnknownOption,
    /// The option takes an argument but the argument is missing.
    #[error("argument required for option")]
    MissingArgument,
}

/// Classification of one scanned option
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Outcome {
    /// There are no more options to scan.
    EndOfOptions,
    /// An option listed in the option specification
    OptionChar(char),
    /// An option not listed in the option specification
    UnknownOption(char),
    /// An option that requires an argument that is not given
    MissingArgument(char),
}

impl Outcome {
    /// Returns the scanned option character, if any.
    #[must_use]
    pub fn option(&self) -> Option<char> {
        match *self {
            Outcome::EndOfOptions => None,
            Outcome::OptionChar(c) | Outcome::UnknownOption(c) | Outcome::MissingArgument(c) => {
                Some(c)
            }
        }
    }

    /// Returns the error this outcome represents, if any.
    #[must_use]
    pub fn error(&self) -> Option<Error> {
        match self {
            Outcome::UnknownOption(_) => Some(Error::UnknownOption),
            Outcome::MissingArgument(_) => Some(Error::MissingArgument),
            Outcome::EndOfOptions | Outcome::OptionChar(_) => None,
        }
    }

    /// Returns the value the classic `getopt` function would return.
    ///
    /// `None` stands for the end of options. An unknown option yields
    /// [`UNKNOWN_OPTION`]. A missing argument yields [`MISSING_ARGUMENT`] if
    /// the specification starts with a colon and [`UNKNOWN_OPTION`]
    /// otherwise.
    #[must_use]
    pub fn code(&self, spec: OptionSpec) -> Option<char> {
        match *self {
            Outcome::EndOfOptions => None,
            Outcome::OptionChar(c) => Some(c),
            Outcome::UnknownOption(_) => Some(UNKNOWN_OPTION),
            Outcome::MissingArgument(_) if spec.reports_missing_argument() => {
                Some(MISSING_ARGUMENT)
            }
            Outcome::MissingArgument(_) => Some(UNKNOWN_OPTION),
        }
    }
}

/// Result of a single [`step`]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Scan<'a> {
    /// Classification of the scanned option
    pub outcome: Outcome,

    /// Argument to the option
    ///
    /// This is a slice of one of the scanned arguments. It is `Some` only if
    /// the outcome is an [`OptionChar`](Outcome::OptionChar) that takes an
    /// argument.
    pub argument: Option<&'a str>,
}

/// Scans the next option in the arguments.
///
/// The first argument, `args[0]`, is normally the program name and is skipped
/// by starting the cursor at index 1. Scanning ends at the first argument that
/// does not start with a hyphen, at a lone hyphen (`-`), or just after a
/// double hyphen (`--`). Once the end is reached, the cursor is
/// [finished](Cursor::is_finished) and calling this function again with the
/// same cursor keeps returning [`Outcome::EndOfOptions`].
///
/// Options packed in one argument (`-abc`) are returned one by one. An option
/// that takes an argument uses the rest of the current argument if it is not
/// empty, or the whole next argument otherwise.
///
/// If the cursor does not match the arguments (for example, because the
/// arguments were changed between calls), the scan ends with
/// [`Outcome::EndOfOptions`].
#[must_use]
pub fn step<'a, S>(cursor: &mut Cursor, args: &'a [S], spec: OptionSpec) -> Scan<'a>
where
    S: AsRef<str>,
{
    if cursor.finished {
        return cursor.end();
    }
    let Some(arg) = args.get(cursor.index).map(S::as_ref) else {
        return cursor.end();
    };

    if cursor.is_at_token_boundary() {
        if arg == "--" {
            cursor.finish_argument(1);
            return cursor.end();
        }
        if !arg.starts_with('-') || arg == "-" {
            return cursor.end();
        }
        cursor.offset = 1;
    }

    let Some(mut chars) = arg.get(cursor.offset..).map(str::chars) else {
        return cursor.end();
    };
    let Some(option) = chars.next() else {
        return cursor.end();
    };
    let remainder = chars.as_str();

    match spec.judge(option) {
        OptionType::Unknown => {
            cursor.pass(option, remainder);
            Scan {
                outcome: Outcome::UnknownOption(option),
                argument: None,
            }
        }

        OptionType::NoArgument => {
            cursor.pass(option, remainder);
            Scan {
                outcome: Outcome::OptionChar(option),
                argument: None,
            }
        }

        OptionType::TakesArgument => {
            if !remainder.is_empty() {
                cursor.finish_argument(1);
                Scan {
                    outcome: Outcome::OptionChar(option),
                    argument: Some(remainder),
                }
            } else if let Some(next) = args.get(cursor.index + 1) {
                cursor.finish_argument(2);
                Scan {
                    outcome: Outcome::OptionChar(option),
                    argument: Some(next.as_ref()),
                }
            } else {
                cursor.finish_argument(1);
                Scan {
                    outcome: Outcome::MissingArgument(option),
                    argument: None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn judge_options_without_arguments() {
        let spec = OptionSpec::from("abc:def");
        assert_eq!(spec.judge('a'), OptionType::NoArgument);
        assert_eq!(spec.judge('b'), OptionType::NoArgument);
        assert_eq!(spec.judge('d'), OptionType::NoArgument);
        assert_eq!(spec.judge('e'), OptionType::NoArgument);
        assert_eq!(spec.judge('f'), OptionType::NoArgument);
    }

    #[test]
    fn judge_options_that_take_argument() {
        let spec = OptionSpec::from(":abc:de:f:");
        assert_eq!(spec.judge('c'), OptionType::TakesArgument);
        assert_eq!(spec.judge('e'), OptionType::TakesArgument);
        assert_eq!(spec.judge('f'), OptionType::TakesArgument);
    }

    #[test]
    fn judge_unknown_options() {
        let spec = OptionSpec::from("abc:df:");
        assert_eq!(spec.judge('x'), OptionType::Unknown);
        assert_eq!(spec.judge('e'), OptionType::Unknown);

        // Colon is always unknown
        assert_eq!(spec.judge(':'), OptionType::Unknown);
        assert_eq!(OptionSpec::from(":").judge(':'), OptionType::Unknown);
    }

    #[test]
    fn leading_colon_mode() {
        assert!(OptionSpec::from(":a").reports_missing_argument());
        assert!(OptionSpec::from(":").reports_missing_argument());
        assert!(!OptionSpec::from("a:").reports_missing_argument());
        assert!(!OptionSpec::from("").reports_missing_argument());
    }

    #[test]
    fn options_in_spec() {
        let options = OptionSpec::from(":hva1f:").options().collect::<Vec<_>>();
        assert_eq!(
            options,
            [
                ('h', OptionType::NoArgument),
                ('v', OptionType::NoArgument),
                ('a', OptionType::NoArgument),
                ('1', OptionType::NoArgument),
                ('f', OptionType::TakesArgument),
            ]
        );
        assert_eq!(OptionSpec::from("").options().next(), None);
    }

    #[test]
    fn outcome_codes() {
        let plain = OptionSpec::from("a:");
        let colon = OptionSpec::from(":a:");
        assert_eq!(Outcome::EndOfOptions.code(plain), None);
        assert_eq!(Outcome::OptionChar('a').code(plain), Some('a'));
        assert_eq!(Outcome::UnknownOption('x').code(plain), Some('?'));
        assert_eq!(Outcome::UnknownOption('x').code(colon), Some('?'));
        assert_eq!(Outcome::MissingArgument('a').code(plain), Some('?'));
        assert_eq!(Outcome::MissingArgument('a').code(colon), Some(':'));
    }

    #[test]
    fn outcome_accessors() {
        assert_eq!(Outcome::EndOfOptions.option(), None);
        assert_eq!(Outcome::EndOfOptions.error(), None);
        assert_eq!(Outcome::OptionChar('a').option(), Some('a'));
        assert_eq!(Outcome::OptionChar('a').error(), None);
        assert_eq!(Outcome::UnknownOption('x').option(), Some('x'));
        assert_eq!(
            Outcome::UnknownOption('x').error(),
            Some(Error::UnknownOption)
        );
        assert_eq!(Outcome::MissingArgument('f').option(), Some('f'));
        assert_eq!(
            Outcome::MissingArgument('f').error(),
            Some(Error::MissingArgument)
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(Error::UnknownOption.to_string(), "invalid option");
        assert_eq!(
            Error::MissingArgument.to_string(),
            "argument required for option"
        );
    }

    const END: Scan<'static> = Scan {
        outcome: Outcome::EndOfOptions,
        argument: None,
    };

    fn option(c: char) -> Scan<'static> {
        Scan {
            outcome: Outcome::OptionChar(c),
            argument: None,
        }
    }

    #[test]
    fn step_with_no_arguments_but_program_name() {
        let mut cursor = Cursor::new();
        assert_eq!(step(&mut cursor, &["prog"], "a".into()), END);
        assert_eq!(cursor.index(), 1);
        assert!(cursor.is_finished());

        let mut cursor = Cursor::new();
        assert_eq!(step(&mut cursor, &[] as &[&str], "a".into()), END);
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn step_with_single_hyphen() {
        let mut cursor = Cursor::new();
        assert_eq!(step(&mut cursor, &["prog", "-"], "a".into()), END);
        assert_eq!(cursor.index(), 1);

        let mut cursor = Cursor::at(3);
        let args = ["prog", "-a", "-a", "-"];
        assert_eq!(step(&mut cursor, &args, "a".into()), END);
        assert_eq!(cursor.index(), 3);
    }

    #[test]
    fn step_with_non_option_argument() {
        let mut cursor = Cursor::new();
        assert_eq!(step(&mut cursor, &["prog", ""], "a".into()), END);
        assert_eq!(cursor.index(), 1);

        let mut cursor = Cursor::new();
        let args = ["prog", "abc", "-a"];
        assert_eq!(step(&mut cursor, &args, "a".into()), END);
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn step_with_double_hyphen_separator() {
        let mut cursor = Cursor::new();
        let args = ["prog", "--", "-a"];
        assert_eq!(step(&mut cursor, &args, "a".into()), END);
        assert_eq!(cursor.index(), 2);

        // The argument after the separator is an operand.
        assert_eq!(step(&mut cursor, &args, "a".into()), END);
        assert_eq!(cursor.index(), 2);

        let mut cursor = Cursor::new();
        let args = ["prog", "-a", "--"];
        assert_eq!(step(&mut cursor, &args, "a".into()), option('a'));
        assert_eq!(step(&mut cursor, &args, "a".into()), END);
        assert_eq!(cursor.index(), 3);
    }

    #[test]
    fn step_with_single_option() {
        let mut cursor = Cursor::new();
        assert_eq!(step(&mut cursor, &["prog", "-a"], "a".into()), option('a'));
        assert_eq!(cursor, Cursor::at(2));
    }

    #[test]
    fn step_with_many_options_in_single_argument() {
        let args = ["prog", "-abc", "x"];
        let mut cursor = Cursor::new();

        assert_eq!(step(&mut cursor, &args, "abc".into()), option('a'));
        assert_eq!((cursor.index(), cursor.offset()), (1, 2));
        assert!(!cursor.is_at_token_boundary());

        assert_eq!(step(&mut cursor, &args, "abc".into()), option('b'));
        assert_eq!((cursor.index(), cursor.offset()), (1, 3));

        assert_eq!(step(&mut cursor, &args, "abc".into()), option('c'));
        assert_eq!(cursor, Cursor::at(2));

        assert_eq!(step(&mut cursor, &args, "abc".into()), END);
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn step_with_many_option_arguments() {
        let args = ["prog", "-a", "-b", "-c"];
        let mut cursor = Cursor::new();
        assert_eq!(step(&mut cursor, &args, "abc".into()), option('a'));
        assert_eq!(step(&mut cursor, &args, "abc".into()), option('b'));
        assert_eq!(step(&mut cursor, &args, "abc".into()), option('c'));
        assert_eq!(cursor, Cursor::at(4));
        assert_eq!(step(&mut cursor, &args, "abc".into()), END);
    }

    #[test]
    fn step_with_unknown_option() {
        let mut cursor = Cursor::new();
        assert_eq!(
            step(&mut cursor, &["prog", "-x"], "a".into()),
            Scan {
                outcome: Outcome::UnknownOption('x'),
                argument: None,
            }
        );
        assert_eq!(cursor, Cursor::at(2));

        let mut cursor = Cursor::new();
        assert_eq!(
            step(&mut cursor, &["prog", "-a"], "".into()),
            Scan {
                outcome: Outcome::UnknownOption('a'),
                argument: None,
            }
        );
        assert_eq!(cursor, Cursor::at(2));
    }

    #[test]
    fn step_with_unknown_option_in_packed_argument() {
        let args = ["prog", "-axb"];
        let mut cursor = Cursor::new();
        assert_eq!(step(&mut cursor, &args, "ab".into()), option('a'));
        assert_eq!(
            step(&mut cursor, &args, "ab".into()).outcome,
            Outcome::UnknownOption('x')
        );
        assert_eq!((cursor.index(), cursor.offset()), (1, 3));
        assert_eq!(step(&mut cursor, &args, "ab".into()), option('b'));
        assert_eq!(cursor, Cursor::at(2));
    }

    #[test]
    fn step_with_colon_as_option() {
        let args = ["prog", "-:"];
        let mut cursor = Cursor::new();
        assert_eq!(
            step(&mut cursor, &args, ":a:".into()).outcome,
            Outcome::UnknownOption(':')
        );
        assert_eq!(cursor, Cursor::at(2));
    }

    #[test]
    fn step_with_option_argument_in_same_argument() {
        let mut cursor = Cursor::new();
        assert_eq!(
            step(&mut cursor, &["prog", "-abc"], "a:bc".into()),
            Scan {
                outcome: Outcome::OptionChar('a'),
                argument: Some("bc"),
            }
        );
        assert_eq!(cursor, Cursor::at(2));

        let args = ["prog", "-cba", "x"];
        let mut cursor = Cursor::new();
        assert_eq!(step(&mut cursor, &args, "ab:c".into()), option('c'));
        assert_eq!(
            step(&mut cursor, &args, "ab:c".into()),
            Scan {
                outcome: Outcome::OptionChar('b'),
                argument: Some("a"),
            }
        );
        assert_eq!(cursor, Cursor::at(2));
    }

    #[test]
    fn step_with_option_argument_in_next_argument() {
        let mut cursor = Cursor::new();
        assert_eq!(
            step(&mut cursor, &["prog", "-a", "bc"], "a:bc".into()),
            Scan {
                outcome: Outcome::OptionChar('a'),
                argument: Some("bc"),
            }
        );
        assert_eq!(cursor, Cursor::at(3));

        // The next argument is used even if it looks like an option.
        let mut cursor = Cursor::at(2);
        assert_eq!(
            step(&mut cursor, &["prog", "-a", "-b", "-c"], "ab:c".into()),
            Scan {
                outcome: Outcome::OptionChar('b'),
                argument: Some("-c"),
            }
        );
        assert_eq!(cursor, Cursor::at(4));
    }

    #[test]
    fn option_argument_borrows_from_arguments() {
        let args = vec![String::from("prog"), String::from("-fvalue")];
        let mut cursor = Cursor::new();
        let scan = step(&mut cursor, &args, "f:".into());
        let argument = scan.argument.unwrap();
        assert_eq!(argument, "value");
        assert!(std::ptr::eq(argument.as_ptr(), args[1][2..].as_ptr()));
    }

    #[test]
    fn step_with_missing_option_argument() {
        let mut cursor = Cursor::new();
        assert_eq!(
            step(&mut cursor, &["prog", "-a"], "a:".into()),
            Scan {
                outcome: Outcome::MissingArgument('a'),
                argument: None,
            }
        );
        assert_eq!(cursor, Cursor::at(2));

        let args = ["prog", "-ab"];
        let mut cursor = Cursor::new();
        assert_eq!(step(&mut cursor, &args, ":ab:".into()), option('a'));
        assert_eq!(
            step(&mut cursor, &args, ":ab:".into()).outcome,
            Outcome::MissingArgument('b')
        );
        assert_eq!(cursor, Cursor::at(2));
    }

    #[test]
    fn step_with_non_ascii_options() {
        let args = ["prog", "-αβ", "-γ"];
        let spec = OptionSpec::from("αβγ");
        let mut cursor = Cursor::new();
        assert_eq!(step(&mut cursor, &args, spec), option('α'));
        assert_eq!((cursor.index(), cursor.offset()), (1, 3));
        assert_eq!(step(&mut cursor, &args, spec), option('β'));
        assert_eq!(step(&mut cursor, &args, spec), option('γ'));
        assert_eq!(cursor, Cursor::at(3));
    }

    #[test]
    fn step_after_end_of_options() {
        let args = ["prog", "-a", "operand"];
        let mut cursor = Cursor::new();
        assert_eq!(step(&mut cursor, &args, "a".into()), option('a'));
        for _ in 0..3 {
            assert_eq!(step(&mut cursor, &args, "a".into()), END);
            assert_eq!(cursor.index(), 2);
            assert!(cursor.is_at_token_boundary());
        }
    }

    #[test]
    fn step_with_too_large_index() {
        let mut cursor = Cursor::at(usize::MAX);
        assert_eq!(step(&mut cursor, &["prog", "-a"], "a".into()), END);
        assert_eq!(cursor.index(), usize::MAX);
    }

    #[test]
    fn step_with_stale_offset() {
        let mut cursor = Cursor::new();
        let _ = step(&mut cursor, &["prog", "-ab"], "ab".into());
        assert_eq!(cursor.offset(), 2);

        // The arguments changed under the cursor.
        assert_eq!(step(&mut cursor, &["prog", "-a"], "ab".into()), END);
        assert!(cursor.is_at_token_boundary());

        // The offset falls inside a multi-byte character.
        let mut cursor = Cursor::new();
        let _ = step(&mut cursor, &["prog", "-ab"], "ab".into());
        assert_eq!(step(&mut cursor, &["prog", "-α"], "ab".into()), END);
        assert!(cursor.is_at_token_boundary());
    }

    #[test]
    fn cursor_reset() {
        let args = ["prog", "-a"];
        let mut cursor = Cursor::new();
        let _ = step(&mut cursor, &args, "a".into());
        let _ = step(&mut cursor, &args, "a".into());
        assert!(cursor.is_finished());

        cursor.reset();
        assert_eq!(cursor, Cursor::default());
        assert_eq!(step(&mut cursor, &args, "a".into()), option('a'));

        cursor.set_index(1);
        assert_eq!(cursor, Cursor::at(1));
        assert_eq!(step(&mut cursor, &args, "a".into()), option('a'));
    }
}
