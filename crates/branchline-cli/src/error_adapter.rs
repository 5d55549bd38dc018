//! Error adapter for converting BranchlineError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! JSON parse errors point into the input with a labeled span; every other
//! error is reported with a `branchline::<kind>` code and, where a fix is
//! obvious, a help line.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use branchline::{BranchlineError, ValidationError};

/// Adapter for a JSON parse error with its source text.
pub struct ParseAdapter<'a> {
    err: &'a serde_json::Error,
    src: &'a str,
}

impl<'a> ParseAdapter<'a> {
    /// Create a new parse adapter.
    pub fn new(err: &'a serde_json::Error, src: &'a str) -> Self {
        Self { err, src }
    }

    /// Byte span of the reported position, if the error carries one.
    fn span(&self) -> Option<SourceSpan> {
        let offset = line_column_to_offset(self.src, self.err.line(), self.err.column())?;
        let len = usize::from(offset < self.src.len());
        Some(SourceSpan::new(offset.into(), len))
    }
}

impl fmt::Debug for ParseAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for ParseAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid diagram description: {}", self.err)
    }
}

impl std::error::Error for ParseAdapter<'_> {}

impl MietteDiagnostic for ParseAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("branchline::parse"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.err.is_data() {
            Some(Box::new(
                "required fields are title, start, weeks, width, height and branches",
            ))
        } else {
            None
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span()?;
        Some(Box::new(std::iter::once(LabeledSpan::new_primary_with_span(
            Some("here".to_string()),
            span,
        ))))
    }
}

/// Adapter for non-parse [`BranchlineError`] variants.
///
/// This adapter handles errors that don't carry source locations, such as
/// I/O errors, validation errors, layout errors, and export errors.
pub struct ErrorAdapter<'a>(pub &'a BranchlineError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            BranchlineError::Io(_) => "branchline::io",
            BranchlineError::Parse { .. } => "branchline::parse",
            BranchlineError::Validation(_) => "branchline::validation",
            BranchlineError::Config(_) => "branchline::config",
            BranchlineError::Layout(_) => "branchline::layout",
            BranchlineError::Export(_) => "branchline::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            BranchlineError::Validation(err) => match err {
                ValidationError::UnknownMergeBranch { .. }
                | ValidationError::UnknownReleaseBranch { .. } => {
                    "every merge and release must name a branch listed under `branches`"
                }
                ValidationError::ParentCycle(_) => "a branch cannot descend from itself",
                ValidationError::InvalidWeeks(_) => "`weeks` must be at least 1",
                _ => return None,
            },
            BranchlineError::Layout(_) => "increase `width` or `height`, or show fewer weeks",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a parse diagnostic or a non-diagnostic error,
/// providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A parse error with source location information.
    Parse(ParseAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Parse(p) => fmt::Display::fmt(p, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Parse(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Parse(p) => p.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Parse(p) => p.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Parse(p) => p.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Parse(p) => p.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert serde_json's 1-based line and column into a byte offset.
///
/// Returns `None` when the error has no position (line 0).
fn line_column_to_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let line_start: usize = src.split_inclusive('\n').take(line - 1).map(str::len).sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}

/// Convert a [`BranchlineError`] into a list of reportable errors.
///
/// [`BranchlineError::Parse`] becomes a diagnostic pointing into the source;
/// every other variant becomes a single plain [`Reportable::Error`].
pub fn to_reportables(err: &BranchlineError) -> Vec<Reportable<'_>> {
    match err {
        BranchlineError::Parse { err: parse_err, src } => {
            vec![Reportable::Parse(ParseAdapter::new(parse_err, src))]
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_error(src: &str) -> BranchlineError {
        let err = serde_json::from_str::<serde_json::Value>(src).unwrap_err();
        BranchlineError::new_parse_error(err, src)
    }

    #[test]
    fn test_line_column_to_offset() {
        let src = "ab\ncde\nf";
        assert_eq!(line_column_to_offset(src, 1, 1), Some(0));
        assert_eq!(line_column_to_offset(src, 2, 2), Some(4));
        assert_eq!(line_column_to_offset(src, 3, 1), Some(7));
        assert_eq!(line_column_to_offset(src, 3, 9), Some(8));
        assert_eq!(line_column_to_offset(src, 0, 0), None);
    }

    #[test]
    fn test_parse_error_has_label() {
        let err = parse_error("{\n  \"title\": ]\n}");

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        match &reportables[0] {
            Reportable::Parse(p) => {
                let labels: Vec<_> = p.labels().unwrap().collect();
                assert_eq!(labels.len(), 1);
                // The stray `]` on line 2
                assert_eq!(labels[0].offset(), 13);
                assert!(p.source_code().is_some());
                assert_eq!(p.code().unwrap().to_string(), "branchline::parse");
            }
            Reportable::Error(_) => panic!("Expected Parse"),
        }
    }

    #[test]
    fn test_validation_error() {
        let err = BranchlineError::Validation(ValidationError::UnknownMergeBranch {
            branch: "ghost".to_string(),
            from: "ghost".to_string(),
            to: "main".to_string(),
        });

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.code().unwrap().to_string(), "branchline::validation");
                assert!(e.help().is_some());
                assert!(e.labels().is_none());
            }
            Reportable::Parse(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_codes_per_variant() {
        let cases = [
            (BranchlineError::Config("bad".to_string()), "branchline::config"),
            (BranchlineError::Layout("tiny".to_string()), "branchline::layout"),
            (
                BranchlineError::Io(std::io::Error::other("disk")),
                "branchline::io",
            ),
        ];

        for (err, code) in cases {
            let reportables = to_reportables(&err);
            assert_eq!(reportables[0].code().unwrap().to_string(), code);
        }
    }
}
