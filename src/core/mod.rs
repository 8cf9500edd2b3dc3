//! Core business logic modules.

pub mod filter;
pub mod grouper;
pub mod library;
pub mod normalizer;
pub mod scanner;
pub mod search;
pub mod show_name;

pub use library::MediaLibrary;
