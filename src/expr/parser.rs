//! Recursive-descent parser for two-variable expressions.
//!
//! Precedence, loosest to tightest: `+ -`, `* /`, unary minus, `**`/`^`.
//! Power is right-associative and binds tighter than unary minus, so
//! `-x**2` parses as `-(x**2)` and `2**-3` as `2**(-3)`.

use super::ast::{Expr, Func, Var};
use super::lexer::{tokenize, Spanned, Token};
use super::ParseError;

/// Parse source text into an expression tree.
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(source)?;
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.expression()?;
    if let Some(spanned) = parser.peek() {
        return Err(ParseError::TrailingInput {
            offset: spanned.offset,
        });
    }
    Ok(expr)
}

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Spanned> {
        let spanned = self.tokens.get(self.pos).cloned();
        if spanned.is_some() {
            self.pos += 1;
        }
        spanned
    }

    fn expect_rparen(&mut self, open_offset: usize) -> Result<(), ParseError> {
        match self.advance() {
            Some(Spanned {
                token: Token::RParen,
                ..
            }) => Ok(()),
            _ => Err(ParseError::UnbalancedParen {
                offset: open_offset,
            }),
        }
    }

    /// expression := term (('+' | '-') term)*
    fn expression(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.term()?;
        while let Some(spanned) = self.peek() {
            match spanned.token {
                Token::Plus => {
                    self.advance();
                    let rhs = self.term()?;
                    lhs = Expr::Add(Box::new(lhs), Box::new(rhs));
                }
                Token::Minus => {
                    self.advance();
                    let rhs = self.term()?;
                    lhs = Expr::Sub(Box::new(lhs), Box::new(rhs));
                }
                _ => break,
            }
        }
        Ok(lhs)
    }

    /// term := factor (('*' | '/') factor)*
    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.factor()?;
        while let Some(spanned) = self.peek() {
            match spanned.token {
                Token::Star => {
                    self.advance();
                    let rhs = self.factor()?;
                    lhs = Expr::Mul(Box::new(lhs), Box::new(rhs));
                }
                Token::Slash => {
                    self.advance();
                    let rhs = self.factor()?;
                    lhs = Expr::Div(Box::new(lhs), Box::new(rhs));
                }
                _ => break,
            }
        }
        Ok(lhs)
    }

    /// factor := ('-' | '+') factor | power
    fn factor(&mut self) -> Result<Expr, ParseError> {
        match self.peek().map(|s| &s.token) {
            Some(Token::Minus) => {
                self.advance();
                let inner = self.factor()?;
                Ok(Expr::Neg(Box::new(inner)))
            }
            Some(Token::Plus) => {
                self.advance();
                self.factor()
            }
            _ => self.power(),
        }
    }

    /// power := atom (('**' | '^') factor)?
    fn power(&mut self) -> Result<Expr, ParseError> {
        let base = self.atom()?;
        match self.peek().map(|s| &s.token) {
            Some(Token::DoubleStar) | Some(Token::Caret) => {
                self.advance();
                let exponent = self.factor()?;
                Ok(Expr::Pow(Box::new(base), Box::new(exponent)))
            }
            _ => Ok(base),
        }
    }

    /// atom := number | ident '(' expression ')' | ident | '(' expression ')'
    fn atom(&mut self) -> Result<Expr, ParseError> {
        let Some(spanned) = self.advance() else {
            return Err(ParseError::UnexpectedEnd);
        };

        match spanned.token {
            Token::Number(value) => Ok(Expr::Const(value)),
            Token::LParen => {
                let inner = self.expression()?;
                self.expect_rparen(spanned.offset)?;
                Ok(inner)
            }
            Token::Ident(name) => self.resolve_ident(&name, spanned.offset),
            other => Err(ParseError::UnexpectedToken {
                found: token_text(&other),
                offset: spanned.offset,
            }),
        }
    }

    fn resolve_ident(&mut self, name: &str, offset: usize) -> Result<Expr, ParseError> {
        match name {
            "x" => return Ok(Expr::Var(Var::X)),
            "y" => return Ok(Expr::Var(Var::Y)),
            "pi" => return Ok(Expr::Const(std::f64::consts::PI)),
            "e" => return Ok(Expr::Const(std::f64::consts::E)),
            _ => {}
        }

        if let Some(func) = Func::from_name(name) {
            // Function names require a parenthesized argument.
            match self.advance() {
                Some(Spanned {
                    token: Token::LParen,
                    offset: open_offset,
                }) => {
                    let arg = self.expression()?;
                    self.expect_rparen(open_offset)?;
                    Ok(Expr::Call(func, Box::new(arg)))
                }
                _ => Err(ParseError::MissingArgument {
                    name: name.to_string(),
                    offset,
                }),
            }
        } else {
            Err(ParseError::UnknownSymbol {
                name: name.to_string(),
                offset,
            })
        }
    }
}

fn token_text(token: &Token) -> String {
    match token {
        Token::Number(v) => v.to_string(),
        Token::Ident(s) => s.clone(),
        Token::Plus => "+".to_string(),
        Token::Minus => "-".to_string(),
        Token::Star => "*".to_string(),
        Token::DoubleStar => "**".to_string(),
        Token::Slash => "/".to_string(),
        Token::Caret => "^".to_string(),
        Token::LParen => "(".to_string(),
        Token::RParen => ")".to_string(),
    }
}
