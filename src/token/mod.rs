// Public exports.
pub use token::{Token, TokenKind};
pub use tokenizer::{lex, Tokenizer};

#[cfg(feature = "cli")]
pub use interactive_stream::InteractiveStream;

// Public mods.
pub mod token;

#[cfg(feature = "cli")]
pub mod interactive_stream;

// Private mods.
#[cfg(feature = "cli")]
mod interactive_helper;
mod tokenizer;
