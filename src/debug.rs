//! Debug facilities.
use nom::error::{VerboseError, VerboseErrorKind};
use std::{fmt::Debug, io};

use crate::{graph::GraphError, parser::ParseError, validation::ValidationError};

// Error types and From<...> implementations

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Graph initialization error")]
    GraphError(GraphError),
    #[error("Invalid graph description")]
    ValidationError(ValidationError),
    #[error("Error while parsing input with graph description")]
    ParseError(Vec<VerboseErrorKind>),
    #[error("Error while reading graph description")]
    IoError(io::Error),
}

impl From<GraphError> for Error {
    fn from(ge: GraphError) -> Self {
        Self::GraphError(ge)
    }
}

impl From<ValidationError> for Error {
    fn from(ve: ValidationError) -> Self {
        Self::ValidationError(ve)
    }
}

fn handle_nom_verbose_error<E: Debug>(
    should_print: bool,
    verbose: VerboseError<E>,
) -> Vec<VerboseErrorKind> {
    verbose
        .errors
        .into_iter()
        .map(|(msg, kind)| {
            if should_print {
                eprintln!("{:?}", msg);
            }
            kind
        })
        .collect()
}

impl<'a> From<nom::Err<ParseError<'a>>> for Error {
    fn from(pe: nom::Err<ParseError<'a>>) -> Self {
        match pe {
            nom::Err::Error(verbose) | nom::Err::Failure(verbose) => {
                Self::ParseError(handle_nom_verbose_error(true, verbose))
            }
            nom::Err::Incomplete(_) => unreachable!(),
        }
    }
}

impl From<io::Error> for Error {
    fn from(ie: io::Error) -> Self {
        Self::IoError(ie)
    }
}

// Debug macros that allow to time single expressions

#[macro_export]
macro_rules! time {
    ($i:ident, $ret:ident, $exp:expr) => {
        let before = std::time::Instant::now();
        let $ret = $exp;
        let $i = before.elapsed();
    };
}

#[macro_export]
macro_rules! parse_single_line {
    ($ret:ident, $exp:expr) => {
        let (res, $ret) = $exp?;
        eof::<crate::parser::Input<'_>, crate::parser::ParseError<'_>>(res)?;
    };
}

#[macro_export]
macro_rules! get_line {
    ($ret:ident, $lines:ident) => {
        let $ret = $lines.next().unwrap_or_else(|| {
            Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "Unexpected EOF!",
            ))
        })?;
    };
}

#[macro_export]
macro_rules! get_line_parse {
    ($lines:ident, $ret:ident, $exp:expr) => {
        crate::get_line!(line, $lines);
        let (res, $ret) = $exp(&line)?;
        eof::<crate::parser::Input<'_>, crate::parser::ParseError<'_>>(res)?;
    };
}

#[macro_export]
macro_rules! get_line_recognize {
    ($lines:ident, $exp:expr) => {
        crate::get_line!(line, $lines);
        let (res, _) = $exp(&line)?;
        eof::<crate::parser::Input<'_>, crate::parser::ParseError<'_>>(res)?;
    };
}
