/// Core parsing logic for programs and expressions.
///
/// Contains the recursive-descent productions and the shared result alias.
pub mod core;

/// Utility functions for the parser.
///
/// Provides the comma-separated list production shared by call argument
/// lists and array literals.
pub mod utils;
