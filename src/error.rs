use thiserror::Error;

/// Lexical errors. The rendered form is `[line <N>] Error: <where>; <message>`
/// and `<where>` is currently always empty.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    #[error("[line {line}] Error: ; Unexpected character")]
    UnexpectedCharacter { line: usize, character: char },
    #[error("[line {line}] Error: ; Unterminated string")]
    UnterminatedString { line: usize },
}
