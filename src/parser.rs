use std::mem;

use thiserror::Error;

use crate::{
    ast::{Query, Selector, Token},
    lexer::{LexError, Lexer},
};

/// Errors raised while parsing a query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("expected field name after '.', got {0:?}")]
    ExpectedName(Token),

    #[error("invalid array index '{0}'")]
    InvalidIndex(String),

    #[error("expected {expected:?}, got {found:?}")]
    Expected { expected: Token, found: Token },

    #[error("unexpected token {0:?}")]
    Unexpected(Token),
}

pub struct Parser {
    lexer: Lexer,
    current_token: Token,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self, ParseError> {
        let current_token = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current_token,
        })
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        if mem::discriminant(&self.current_token) != mem::discriminant(&expected) {
            return Err(ParseError::Expected {
                expected,
                found: self.current_token.clone(),
            });
        }
        self.advance()
    }

    /// Parse a complete query.
    pub fn parse(&mut self) -> Result<Query, ParseError> {
        let mut selectors = Vec::new();

        if self.current_token == Token::Dollar {
            self.advance()?;
        }

        loop {
            match mem::replace(&mut self.current_token, Token::Eof) {
                Token::Eof => break,
                Token::Dot => {
                    self.advance()?;
                    selectors.push(self.parse_name()?);
                }
                Token::LBracket => {
                    self.advance()?;
                    selectors.push(self.parse_bracket()?);
                    self.expect(Token::RBracket)?;
                }
                // A bare name may open the query: `user.name`, `$user`
                Token::Word(name) if selectors.is_empty() => {
                    self.advance()?;
                    selectors.push(Selector::Name(name));
                }
                other => return Err(ParseError::Unexpected(other)),
            }
        }

        Ok(Query::new(selectors))
    }

    fn parse_name(&mut self) -> Result<Selector, ParseError> {
        match mem::replace(&mut self.current_token, Token::Eof) {
            Token::Word(name) | Token::String(name) => {
                self.advance()?;
                Ok(Selector::Name(name))
            }
            other => Err(ParseError::ExpectedName(other)),
        }
    }

    fn parse_bracket(&mut self) -> Result<Selector, ParseError> {
        match mem::replace(&mut self.current_token, Token::Eof) {
            Token::String(name) => {
                self.advance()?;
                Ok(Selector::Name(name))
            }
            Token::Word(word) => {
                let digits = word.trim();
                let magnitude = digits.strip_prefix('-').unwrap_or(digits);
                if magnitude.is_empty() || !magnitude.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ParseError::InvalidIndex(word));
                }
                let index = digits
                    .parse::<i64>()
                    .map_err(|_| ParseError::InvalidIndex(word.clone()))?;
                self.advance()?;
                Ok(Selector::Index(index))
            }
            other => Err(ParseError::Unexpected(other)),
        }
    }
}

/// Parse a query string in one call.
pub fn parse_query(input: &str) -> Result<Query, ParseError> {
    Parser::new(Lexer::new(input))?.parse()
}
