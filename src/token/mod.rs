mod builder;
mod item;
mod parser;
mod signature;
#[allow(clippy::module_inception)]
mod token;

pub use builder::Builder;
pub use item::Item;
pub use parser::{Parser, ParserConfig};
pub use signature::Signature;
pub use token::Token;
