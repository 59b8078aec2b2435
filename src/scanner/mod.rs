use std::collections::HashMap;
use std::hash::BuildHasherDefault;

use ahash::AHasher;
use token::{Literal, Token, TokenKind};

use crate::error::ScanError;

pub mod token;

/// Scans `source` in one pass and returns every recognised token, ending with
/// [`TokenKind::Eof`], together with the first lexical error if there was one.
pub fn scan(source: &str) -> (Vec<Token<'_>>, Option<ScanError>) {
    let (tokens, errors) = Scanner::new(source).scan_tokens();
    (tokens, errors.into_iter().next())
}

pub struct Scanner<'source> {
    keywords: HashMap<&'static str, TokenKind, BuildHasherDefault<AHasher>>,
    source: &'source str,
    start: usize,
    current: usize,
    start_line: usize,
    line: usize,
    tokens: Vec<Token<'source>>,
    errors: Vec<ScanError>,
}

impl<'source> Scanner<'source> {
    pub fn new(source: &'source str) -> Self {
        let mut keywords = HashMap::with_capacity_and_hasher(16, Default::default());
        keywords.insert("and", TokenKind::And);
        keywords.insert("class", TokenKind::Class);
        keywords.insert("else", TokenKind::Else);
        keywords.insert("false", TokenKind::False);
        keywords.insert("for", TokenKind::For);
        keywords.insert("fun", TokenKind::Fun);
        keywords.insert("if", TokenKind::If);
        keywords.insert("nil", TokenKind::Nil);
        keywords.insert("or", TokenKind::Or);
        keywords.insert("print", TokenKind::Print);
        keywords.insert("return", TokenKind::Return);
        keywords.insert("super", TokenKind::Super);
        keywords.insert("this", TokenKind::This);
        keywords.insert("true", TokenKind::True);
        keywords.insert("var", TokenKind::Var);
        keywords.insert("while", TokenKind::While);
        Self {
            keywords,
            source,
            start: 0,
            current: 0,
            start_line: 1,
            line: 1,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Consumes the session. Errors are returned in source order; tokens
    /// recognised around them are kept.
    pub fn scan_tokens(mut self) -> (Vec<Token<'source>>, Vec<ScanError>) {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.scan_token();
        }
        self.start = self.current;
        self.start_line = self.line;
        self.add_token(TokenKind::Eof);
        (self.tokens, self.errors)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let character = self.peek();
        self.current += character.len_utf8();
        character
    }

    fn scan_token(&mut self) {
        let character = self.advance();
        match character {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => match self.is_match('=') {
                true => self.add_token(TokenKind::BangEqual),
                false => self.add_token(TokenKind::Bang),
            },
            '=' => match self.is_match('=') {
                true => self.add_token(TokenKind::EqualEqual),
                false => self.add_token(TokenKind::Equal),
            },
            '<' => match self.is_match('=') {
                true => self.add_token(TokenKind::LessEqual),
                false => self.add_token(TokenKind::Less),
            },
            '>' => match self.is_match('=') {
                true => self.add_token(TokenKind::GreaterEqual),
                false => self.add_token(TokenKind::Greater),
            },
            '/' => match self.is_match('/') {
                true => self.skip_comment(),
                false => self.add_token(TokenKind::Slash),
            },
            ' ' | '\r' | '\t' => (),
            '\n' => self.line += 1,
            '"' => self.string(),
            c if is_digit(c) => self.number(),
            c if is_alpha(c) => self.identifier(),
            character => self.errors.push(ScanError::UnexpectedCharacter {
                line: self.line,
                character,
            }),
        }
    }

    fn lexeme(&self) -> &'source str {
        &self.source[self.start..self.current]
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_token_with_literal(kind, None)
    }

    fn add_token_with_literal(&mut self, kind: TokenKind, literal: Option<Literal<'source>>) {
        let token = Token::new(kind, self.lexeme(), literal, self.start_line);
        #[cfg(feature = "debug_trace")]
        println!("{:>4} {token}", token.line);
        self.tokens.push(token);
    }

    fn skip_comment(&mut self) {
        while self.peek() != '\n' && !self.is_at_end() {
            self.advance();
        }
    }

    fn string(&mut self) {
        while self.peek() != '"' && !self.is_at_end() {
            if self.advance() == '\n' {
                self.line += 1
            }
        }
        if self.is_at_end() {
            self.errors.push(ScanError::UnterminatedString {
                line: self.start_line,
            });
            return;
        }
        self.advance();
        let value = &self.source[self.start + 1..self.current - 1];
        self.add_token_with_literal(TokenKind::String, Some(Literal::String(value)));
    }

    fn number(&mut self) {
        while is_digit(self.peek()) {
            self.advance();
        }
        if self.peek() == '.' && is_digit(self.peek_next()) {
            self.advance();
            while is_digit(self.peek()) {
                self.advance();
            }
        }
        let value = self
            .lexeme()
            .parse::<f64>()
            .expect("Digit run should parse as a number.");
        self.add_token_with_literal(TokenKind::Number, Some(Literal::Number(value)));
    }

    fn identifier(&mut self) {
        while is_alpha(self.peek()) || is_digit(self.peek()) {
            self.advance();
        }
        let kind = match self.keywords.get(self.lexeme()) {
            Some(kind) => *kind,
            None => TokenKind::Identifier,
        };
        self.add_token(kind);
    }

    fn is_match(&mut self, expected: char) -> bool {
        if self.is_at_end() {
            return false;
        }
        if self.peek() != expected {
            return false;
        }
        self.current += expected.len_utf8();
        true
    }

    /// `'\0'` once the cursor is past the last character.
    fn peek(&self) -> char {
        self.source[self.current..].chars().next().unwrap_or('\0')
    }

    fn peek_next(&self) -> char {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next().unwrap_or('\0')
    }
}

fn is_digit(character: char) -> bool {
    character.is_ascii_digit()
}

fn is_alpha(character: char) -> bool {
    character.is_ascii_alphabetic() || character == '_'
}
