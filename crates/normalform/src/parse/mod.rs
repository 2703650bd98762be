use std::fmt;

pub mod prop;

pub use prop::parse_prop_formula;

pub type ParseResult<T> = Result<T, ParseErr>;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseErr {
    Expected(String, String),
    Extraneous(String, usize),
    UnexpectedEnd,
}

impl fmt::Display for ParseErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErr::Expected(expected, got) => write!(f, "Expected {} but got {}", expected, got),
            ParseErr::Extraneous(token, pos) => {
                write!(f, "Extraneous input '{}' at position {}", token, pos)
            }
            ParseErr::UnexpectedEnd => {
                write!(f, "Unexpected end of input, expected a variable or '('")
            }
        }
    }
}

impl std::error::Error for ParseErr {}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub spelling: String,
    pub src_pos: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spelling)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    And,
    Or,
    Not,
    Impl,
    Equiv,
    LParen,
    RParen,
    Ident,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::And => "&",
            TokenKind::Or => "v",
            TokenKind::Not => "-",
            TokenKind::Impl => "->",
            TokenKind::Equiv => "<->",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Ident => "identifier",
        };

        write!(f, "{}", s)
    }
}

pub fn tokenize(formula: &str) -> Vec<Token> {
    Tokenizer::new(formula).collect()
}

/// Splits a formula into tokens.
///
/// Whitespace is removed before tokenizing, so `- >` still reads as `->`. Characters that
/// start no token are skipped. `v` always means disjunction and never belongs to an
/// identifier: `AvB` reads as `A v B`.
pub struct Tokenizer {
    chars: Vec<(usize, char)>,
    idx: usize,
}

impl Tokenizer {
    pub fn new(formula: &str) -> Self {
        Self {
            chars: formula
                .char_indices()
                .filter(|(_, c)| !c.is_whitespace())
                .collect(),
            idx: 0,
        }
    }

    fn starts_with(&self, pat: &str) -> bool {
        pat.chars()
            .enumerate()
            .all(|(i, p)| matches!(self.chars.get(self.idx + i), Some(&(_, c)) if c == p))
    }

    fn token(&mut self, kind: TokenKind, len: usize) -> Token {
        let src_pos = self.chars[self.idx].0;
        let spelling = self.chars[self.idx..self.idx + len]
            .iter()
            .map(|&(_, c)| c)
            .collect();
        self.idx += len;
        Token {
            kind,
            spelling,
            src_pos,
        }
    }
}

fn is_ident_char(c: char) -> bool {
    (c.is_alphanumeric() || c == '_') && c != 'v'
}

impl Iterator for Tokenizer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&(_, c)) = self.chars.get(self.idx) {
            if self.starts_with("<->") {
                return Some(self.token(TokenKind::Equiv, 3));
            }
            if self.starts_with("->") {
                return Some(self.token(TokenKind::Impl, 2));
            }

            let kind = match c {
                '-' => Some(TokenKind::Not),
                '&' => Some(TokenKind::And),
                'v' => Some(TokenKind::Or),
                '(' => Some(TokenKind::LParen),
                ')' => Some(TokenKind::RParen),
                _ => None,
            };
            if let Some(kind) = kind {
                return Some(self.token(kind, 1));
            }

            if is_ident_char(c) {
                let len = self.chars[self.idx..]
                    .iter()
                    .take_while(|&&(_, c)| is_ident_char(c))
                    .count();
                return Some(self.token(TokenKind::Ident, len));
            }

            self.idx += 1;
        }

        None
    }
}
