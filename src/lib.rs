//! Carneades is an implementation of the Carneades Argument Evaluation Structure (CAES).
//!
//! A CAES decides whether a proposition is acceptable given a set of pro and con arguments,
//! an audience (assumptions and argument weights) and the proof standard each proposition must meet.
//!
//! The [caes] module contains the model and its evaluator,
//! while the [io] module reads CAES instances from text files and writes answers.

#![warn(missing_docs)]

pub mod caes;

pub mod io;

pub mod utils;
