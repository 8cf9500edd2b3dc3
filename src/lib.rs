//! Media Index Library
//!
//! Indexes a local movie and TV library, tidies raw filenames into display
//! titles, groups episodes into shows and answers substring title searches.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod server;
pub mod utils;

pub use error::{Error, Result, ScanError, ScanErrorKind};
