//! Error types for the front end.
//!
//! This module defines the error type the parser produces. It includes:
//!
//! - The `SyntaxError` structure with source position information
//! - Specific error variants for the ways a parse can fail
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
