//! Error types and error handling for the front end.
//!
//! This module defines the error types used throughout tokenizing, parsing
//! and analysis. It includes:
//!
//! - Error structures with source line information
//! - Specific error variants for the syntax and reference families
//! - Context reasons that select human-readable suggestions

pub mod errors;
