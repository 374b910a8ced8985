//! Output format generators.

pub mod json_generator;
