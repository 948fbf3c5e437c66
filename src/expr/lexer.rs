//! Tokenizer for expression source text.

use super::ParseError;

/// A lexical token, tagged with its byte offset in the source.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    /// `**`, the canonical power operator.
    DoubleStar,
    Slash,
    /// `^`, accepted as a power alias.
    Caret,
    LParen,
    RParen,
}

/// Token plus the byte offset where it starts.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Spanned {
    pub token: Token,
    pub offset: usize,
}

/// Split source text into tokens. Whitespace separates tokens and is
/// otherwise ignored.
pub(super) fn tokenize(source: &str) -> Result<Vec<Spanned>, ParseError> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let c = bytes[pos] as char;

        if c.is_ascii_whitespace() {
            pos += 1;
            continue;
        }

        let start = pos;
        let token = match c {
            '+' => {
                pos += 1;
                Token::Plus
            }
            '-' => {
                pos += 1;
                Token::Minus
            }
            '*' => {
                if bytes.get(pos + 1) == Some(&b'*') {
                    pos += 2;
                    Token::DoubleStar
                } else {
                    pos += 1;
                    Token::Star
                }
            }
            '/' => {
                pos += 1;
                Token::Slash
            }
            '^' => {
                pos += 1;
                Token::Caret
            }
            '(' => {
                pos += 1;
                Token::LParen
            }
            ')' => {
                pos += 1;
                Token::RParen
            }
            '0'..='9' | '.' => {
                let mut end = pos;
                while end < bytes.len() && (bytes[end].is_ascii_digit() || bytes[end] == b'.') {
                    end += 1;
                }
                // Scientific notation: 1e-3, 2.5E+10
                if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
                    let mut exp_end = end + 1;
                    if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
                        exp_end += 1;
                    }
                    if exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
                        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
                            exp_end += 1;
                        }
                        end = exp_end;
                    }
                }
                let text = &source[pos..end];
                let value = text.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                    text: text.to_string(),
                    offset: pos,
                })?;
                pos = end;
                Token::Number(value)
            }
            'a'..='z' | 'A'..='Z' | '_' => {
                let mut end = pos;
                while end < bytes.len()
                    && ((bytes[end] as char).is_ascii_alphanumeric() || bytes[end] == b'_')
                {
                    end += 1;
                }
                let text = source[pos..end].to_string();
                pos = end;
                Token::Ident(text)
            }
            _ => {
                return Err(ParseError::UnexpectedChar { ch: c, offset: pos });
            }
        };

        tokens.push(Spanned {
            token,
            offset: start,
        });
    }

    Ok(tokens)
}
