//! Tokenizer and recursive descent parser for four-operator arithmetic
//!
//! Only numbers, `+ - * /` and whitespace are accepted. There is no way to
//! reach anything other than arithmetic from user text.

use crate::core::operations::check_finite;
use crate::core::{CalcError, CalcResult, Operator};

/// Token types from lexical analysis
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(f64),
    /// Operator symbol (binary, or a sign in prefix position)
    Operator(Operator),
}

/// Abstract Syntax Tree node
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Numeric literal
    Number(f64),
    /// Left-associative run of operators of one precedence level
    ///
    /// `1+2-3` is one chain with two links, so tree depth does not grow with
    /// the length of the expression.
    Chain {
        /// Leftmost operand
        first: Box<AstNode>,
        /// Each operator with its right operand, in order
        rest: Vec<(Operator, AstNode)>,
    },
    /// Unary negation
    Negate(Box<AstNode>),
}

impl AstNode {
    /// Creates a new number node
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a chain node, or returns `first` alone when `rest` is empty
    #[must_use]
    pub fn chain(first: AstNode, rest: Vec<(Operator, AstNode)>) -> Self {
        if rest.is_empty() {
            first
        } else {
            Self::Chain {
                first: Box::new(first),
                rest,
            }
        }
    }

    /// Creates a new negation node
    #[must_use]
    pub fn negate(inner: AstNode) -> Self {
        Self::Negate(Box::new(inner))
    }
}

/// Tokenizer for converting expression strings to tokens
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Tokenizes the entire input
    pub fn tokenize(&mut self) -> CalcResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or None if at end of input
    pub fn next_token(&mut self) -> CalcResult<Option<Token>> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        if ch.is_ascii_digit() || ch == '.' {
            return self.read_number().map(Some);
        }

        match Operator::from_char(ch) {
            Some(op) => {
                self.advance();
                Ok(Some(Token::Operator(op)))
            }
            None => Err(CalcError::invalid(format!(
                "unexpected character '{ch}' at position {}",
                self.pos
            ))),
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    // Consumes every digit and dot so that "1.2.3" is reported as one bad
    // literal instead of two adjacent numbers.
    fn read_number(&mut self) -> CalcResult<Token> {
        let start = self.pos;
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() || ch == '.' {
                self.advance();
            } else {
                break;
            }
        }

        let literal = &self.input[start..self.pos];
        if literal.matches('.').count() > 1 {
            return Err(CalcError::invalid(format!(
                "number '{literal}' has more than one decimal point"
            )));
        }

        let value: f64 = literal
            .parse()
            .map_err(|_| CalcError::invalid(format!("invalid number '{literal}'")))?;

        Ok(Token::Number(check_finite(value)?))
    }
}

/// Recursive descent parser for expressions
///
/// Grammar:
/// ```text
/// expression ::= term (('+' | '-') term)*
/// term       ::= unary (('*' | '/') unary)*
/// unary      ::= ('+' | '-')* NUMBER
/// ```
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Creates a new parser from tokens
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parses a string expression into an AST
    pub fn parse_str(input: &str) -> CalcResult<AstNode> {
        let tokens = Tokenizer::new(input).tokenize()?;
        Self::new(tokens).parse()
    }

    /// Parses tokens into an AST, requiring every token to be consumed
    pub fn parse(&mut self) -> CalcResult<AstNode> {
        if self.tokens.is_empty() {
            return Err(CalcError::invalid("empty expression"));
        }

        let ast = self.parse_expression()?;

        if let Some(token) = self.current() {
            return Err(CalcError::invalid(format!(
                "unexpected {} at token {}",
                describe(token),
                self.pos
            )));
        }

        Ok(ast)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn parse_expression(&mut self) -> CalcResult<AstNode> {
        let first = self.parse_term()?;
        let mut rest = Vec::new();

        while let Some(&Token::Operator(op @ (Operator::Add | Operator::Subtract))) = self.current()
        {
            self.advance();
            rest.push((op, self.parse_term()?));
        }

        Ok(AstNode::chain(first, rest))
    }

    fn parse_term(&mut self) -> CalcResult<AstNode> {
        let first = self.parse_unary()?;
        let mut rest = Vec::new();

        while let Some(&Token::Operator(op @ (Operator::Multiply | Operator::Divide))) =
            self.current()
        {
            self.advance();
            rest.push((op, self.parse_unary()?));
        }

        Ok(AstNode::chain(first, rest))
    }

    // Signs are folded in a loop; a long run of '-' presses must not recurse.
    fn parse_unary(&mut self) -> CalcResult<AstNode> {
        let mut negate = false;
        while let Some(&Token::Operator(op @ (Operator::Add | Operator::Subtract))) = self.current()
        {
            if op == Operator::Subtract {
                negate = !negate;
            }
            self.advance();
        }

        let node = self.parse_primary()?;
        Ok(if negate { AstNode::negate(node) } else { node })
    }

    fn parse_primary(&mut self) -> CalcResult<AstNode> {
        match self.advance() {
            Some(Token::Number(n)) => Ok(AstNode::number(*n)),
            Some(token) => Err(CalcError::invalid(format!(
                "unexpected {}",
                describe(token)
            ))),
            None => Err(CalcError::invalid("unexpected end of expression")),
        }
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Number(n) => format!("number {n}"),
        Token::Operator(op) => format!("operator '{op}'"),
    }
}
