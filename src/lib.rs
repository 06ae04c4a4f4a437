//! Lexical analysis for the Lexi teaching language.
//!
//! The whole pipeline is [`lexer::tokenize`]: it takes the full source text
//! and returns every token in source order, with malformed constructs
//! represented inline as error tokens rather than failures.

pub mod keywords;
pub mod lexer;
pub mod token;

pub use lexer::{tokenize, Scanner};
pub use token::{Kind, Token};
