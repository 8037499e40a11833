use crate::ast::Operator;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Ident(String),
    /// Decimal literal. `None` when the digits overflow `u32`.
    Num(Option<u32>),
    Op(Operator),
    Question,
    Colon,
    LParen,
    RParen,
    /// Anything the grammar has no use for; never matched by a rule.
    Invalid,
    Eof,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

/// Byte-oriented lexer. It never fails; unknown input becomes
/// [`TokenKind::Invalid`] spanning one whole character.
pub(crate) struct Lexer<'a> {
    src: &'a str,
    i: usize,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(s: &'a str) -> Self {
        Self { src: s, i: 0 }
    }
    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.i).copied()
    }
    fn peek_at(&self, ahead: usize) -> Option<u8> {
        self.src.as_bytes().get(self.i + ahead).copied()
    }
    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_ascii_whitespace() {
                self.i += 1;
            } else {
                break;
            }
        }
    }
    fn single(&mut self, start: usize, len: usize, kind: TokenKind) -> Token {
        self.i += len;
        Token {
            kind,
            start,
            end: self.i,
        }
    }
    pub(crate) fn next_token(&mut self) -> Token {
        self.skip_ws();
        let start = self.i;
        let c = match self.peek() {
            Some(c) => c,
            None => {
                return Token {
                    kind: TokenKind::Eof,
                    start,
                    end: start,
                };
            }
        };
        let next = self.peek_at(1);
        match (c, next) {
            (b'(', _) => self.single(start, 1, TokenKind::LParen),
            (b')', _) => self.single(start, 1, TokenKind::RParen),
            (b'?', _) => self.single(start, 1, TokenKind::Question),
            (b':', _) => self.single(start, 1, TokenKind::Colon),
            (b'%', _) => self.single(start, 1, TokenKind::Op(Operator::Mod)),
            (b'&', Some(b'&')) => self.single(start, 2, TokenKind::Op(Operator::And)),
            (b'|', Some(b'|')) => self.single(start, 2, TokenKind::Op(Operator::Or)),
            (b'=', Some(b'=')) => self.single(start, 2, TokenKind::Op(Operator::Eq)),
            (b'!', Some(b'=')) => self.single(start, 2, TokenKind::Op(Operator::Ne)),
            (b'<', Some(b'=')) => self.single(start, 2, TokenKind::Op(Operator::Le)),
            (b'<', _) => self.single(start, 1, TokenKind::Op(Operator::Lt)),
            (b'>', Some(b'=')) => self.single(start, 2, TokenKind::Op(Operator::Ge)),
            (b'>', _) => self.single(start, 1, TokenKind::Op(Operator::Gt)),
            (c, _) if c.is_ascii_digit() => self.lex_number(),
            (c, _) if c.is_ascii_alphabetic() => self.lex_ident(),
            _ => {
                let len = self.src[start..].chars().next().map_or(1, char::len_utf8);
                self.single(start, len, TokenKind::Invalid)
            }
        }
    }
    fn lex_number(&mut self) -> Token {
        let start = self.i;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.i += 1;
            } else {
                break;
            }
        }
        let value = self.src[start..self.i].parse::<u32>().ok();
        Token {
            kind: TokenKind::Num(value),
            start,
            end: self.i,
        }
    }
    fn lex_ident(&mut self) -> Token {
        let start = self.i;
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() {
                self.i += 1;
            } else {
                break;
            }
        }
        Token {
            kind: TokenKind::Ident(self.src[start..self.i].to_string()),
            start,
            end: self.i,
        }
    }
}
