pub mod api;
pub mod ast;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod symbols;
pub mod utils;
mod serialization;

pub use api::{translate, Translation};
pub use serialization::{render, DEFAULT_INDENT};
