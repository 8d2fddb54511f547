//! Main module for samx library functionality

pub mod ast;
pub mod builder;
pub mod formats;
pub mod grammar;
pub mod lexer;
pub mod normalizer;
pub mod processor;
pub mod testing;
