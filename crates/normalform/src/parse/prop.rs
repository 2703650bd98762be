use std::iter::Peekable;

use crate::{
    logic::LogicNode,
    parse::{ParseErr, ParseResult, Token, TokenKind},
};

use super::Tokenizer;

/// Parses a propositional formula over `-`, `&`, `v`, `->` and `<->`.
///
/// Variables are runs of alphanumeric characters and `_`, except that a lowercase `v`
/// always reads as disjunction, even inside a word and without surrounding spaces.
/// `Ava` is `A v a`, and a name such as `vote` cannot be written.
pub fn parse_prop_formula(formula: &str) -> ParseResult<LogicNode> {
    PropParser::parse(formula)
}

/// Recursive descent over
///
/// ```text
/// equiv   := impl ( '<->' equiv )?
/// impl    := or ( '->' impl )?
/// or      := and ( 'v' and )*
/// and     := not ( '&' not )*
/// not     := '-' not | primary
/// primary := '(' equiv ')' | IDENTIFIER
/// ```
///
/// `<->` and `->` associate to the right, `v` and `&` to the left.
pub struct PropParser {
    tokens: Peekable<Tokenizer>,
}

impl PropParser {
    pub fn parse(formula: &str) -> ParseResult<LogicNode> {
        let mut parser = PropParser {
            tokens: Tokenizer::new(formula).peekable(),
        };
        let node = parser.parse_equiv()?;
        match parser.tokens.next() {
            Some(t) => Err(ParseErr::Extraneous(t.spelling, t.src_pos)),
            None => Ok(*node),
        }
    }

    fn parse_equiv(&mut self) -> ParseResult<Box<LogicNode>> {
        let left = self.parse_impl()?;

        if self.next_is(TokenKind::Equiv) {
            self.bump()?;
            let right = self.parse_equiv()?;
            return Ok(Box::new(LogicNode::Equiv(left, right)));
        }

        Ok(left)
    }

    fn parse_impl(&mut self) -> ParseResult<Box<LogicNode>> {
        let left = self.parse_or()?;

        if self.next_is(TokenKind::Impl) {
            self.bump()?;
            let right = self.parse_impl()?;
            return Ok(Box::new(LogicNode::Impl(left, right)));
        }

        Ok(left)
    }

    fn parse_or(&mut self) -> ParseResult<Box<LogicNode>> {
        let mut stub = self.parse_and()?;

        while self.next_is(TokenKind::Or) {
            self.bump()?;
            let right = self.parse_and()?;
            stub = Box::new(LogicNode::Or(stub, right));
        }

        Ok(stub)
    }

    fn parse_and(&mut self) -> ParseResult<Box<LogicNode>> {
        let mut stub = self.parse_not()?;

        while self.next_is(TokenKind::And) {
            self.bump()?;
            let right = self.parse_not()?;
            stub = Box::new(LogicNode::And(stub, right));
        }

        Ok(stub)
    }

    fn parse_not(&mut self) -> ParseResult<Box<LogicNode>> {
        if self.next_is(TokenKind::Not) {
            self.bump()?;
            Ok(Box::new(LogicNode::Not(self.parse_not()?)))
        } else {
            self.parse_primary()
        }
    }

    fn parse_primary(&mut self) -> ParseResult<Box<LogicNode>> {
        if self.next_is(TokenKind::LParen) {
            self.bump()?;
            let exp = self.parse_equiv()?;
            self.eat(TokenKind::RParen)?;
            Ok(exp)
        } else {
            self.parse_var()
        }
    }

    fn parse_var(&mut self) -> ParseResult<Box<LogicNode>> {
        match self.tokens.next() {
            Some(Token {
                kind: TokenKind::Ident,
                spelling,
                ..
            }) => Ok(Box::new(LogicNode::Var(spelling))),
            Some(t) => Err(ParseErr::Expected(
                "identifier".to_string(),
                format!("'{}' at position {}", t, t.src_pos),
            )),
            None => Err(ParseErr::UnexpectedEnd),
        }
    }

    fn next_is(&mut self, expected: TokenKind) -> bool {
        matches!(self.tokens.peek(), Some(Token { kind, .. }) if *kind == expected)
    }

    fn bump(&mut self) -> ParseResult<()> {
        match self.tokens.next() {
            Some(_) => Ok(()),
            None => Err(ParseErr::UnexpectedEnd),
        }
    }

    fn eat(&mut self, expected: TokenKind) -> ParseResult<()> {
        if self.next_is(expected) {
            self.bump()
        } else {
            Err(ParseErr::Expected(format!("'{}'", expected), self.got_msg()))
        }
    }

    fn got_msg(&mut self) -> String {
        match self.tokens.peek() {
            Some(t) => format!("'{}' at position {}", t, t.src_pos),
            None => "end of input".to_string(),
        }
    }
}
