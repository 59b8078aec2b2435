pub mod error;
pub mod scanner;

pub use error::ScanError;
pub use scanner::token::{Literal, Token, TokenKind};
pub use scanner::{scan, Scanner};
