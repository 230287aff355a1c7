//! Vitascan Runtime — assembles profiles from one document per invocation.

pub mod analyzer;

pub use analyzer::Analyzer;
