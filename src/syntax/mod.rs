//! This module contains the parser reordering infix tokens into reverse polish notation.

pub mod parser;
