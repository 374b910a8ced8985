//! Input format parsers.

pub mod lesson_parser;
pub mod timing_parser;
