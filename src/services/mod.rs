//! Service layer module
//!
//! Contains the single-shot request runner

pub mod runner;

pub use runner::RequestRunner;
