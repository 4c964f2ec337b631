//! File-backed persona and project providers.

pub mod file;

pub use file::{FilePersonaProvider, FileProjectProvider};
