//! Main module for nlcst-literal functionality

pub mod ast;
pub mod lexing;
pub mod literal;
pub mod testing;
