#![warn(rust_2018_idioms)]

//! Library to colour the vertices of simple
//! graphs with a fixed budget of colours such
//! that no edge connects two equal colours.
//!
//! Raw graph descriptions are checked by
//! [validate] first; only a [ValidatedGraph]
//! can be handed to a [ColoringStrategy].
//!
//! ```
//! use kcolor::{validate, Backtracking, ColoringStrategy, DEFAULT_COLOR_BUDGET};
//!
//! let validated = validate(5, &[(0, 1), (0, 2), (1, 4), (2, 4)], false)?;
//! let outcome = Backtracking::new().solve(&validated, DEFAULT_COLOR_BUDGET);
//!
//! let coloring = outcome.coloring().expect("4 colours suffice here");
//! assert!(coloring.check(&validated, DEFAULT_COLOR_BUDGET));
//! # Ok::<(), kcolor::ValidationError>(())
//! ```

pub mod graph;

pub mod validation;
pub use validation::{validate, RawEdge, ValidatedGraph, ValidationError};

pub mod coloring;
pub use coloring::Coloring;

pub mod solver;
pub use solver::{
    solve_all, Backtracking, ColorBudget, ColoringStrategy, Outcome, DEFAULT_COLOR_BUDGET,
};

pub mod parser;
pub use parser::parse_txt_input;

pub mod statistics;
pub use statistics::SearchStatistics;

mod debug;
pub use debug::Error;
