//! The `compare` function is the kernel of the application: it takes the
//! already-read lines of each input file and returns the finished report
//! text. The `args` module parses the command line, and the `operands`
//! module hides filesystem details (directory scanning, line reading,
//! atomic report writing).
//!
//! The pipeline inside `compare`: `parse` pulls codes and expanded ranges
//! out of one line, `extract` folds a whole file into its code set,
//! `signature` groups every code by the exact set of files containing it,
//! and `report` renders the groups in a deterministic order.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

pub mod args;
pub mod compare;
pub mod extract;
pub mod operands;
pub mod parse;
pub mod report;
pub mod signature;

pub use crate::compare::{compare, SourceFile};
