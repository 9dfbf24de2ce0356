use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("num", TokenKind::Num);
        map.insert("bool", TokenKind::Bool);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("return", TokenKind::Return);
        map.insert("print", TokenKind::Print);
        map.insert("new", TokenKind::New);
        map.insert("size", TokenKind::Size);
        map.insert("true", TokenKind::BoolLit);
        map.insert("false", TokenKind::BoolLit);
        map.insert("or", TokenKind::ExprOp);
        map.insert("and", TokenKind::TermOp);
        map
    };
}

/// The closed set of token kinds the parser dispatches on.
///
/// `EndOfInput` and `LexError` are sentinels: they never come out of the
/// reserved-word or pattern tables, only out of the raw-code mapping in
/// `TokenKind::from_code`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EndOfInput,
    LexError,

    // Type keywords
    Num,
    Bool,

    // Delimiters
    Begin,
    End,
    LParen,
    RParen,
    LBracket,
    RBracket,

    Semi,
    Comma,
    Dot,
    Assign,

    // Operator classes; the concrete operator travels as the lexeme
    RelOp,
    ExprOp,
    TermOp,

    // Reserved
    If,
    Else,
    While,
    Return,
    Print,
    New,
    Size,

    NumLit,
    BoolLit,
    Ident,
}

impl TokenKind {
    /// The raw integer code this kind travels as on the token-source wire.
    pub fn code(self) -> i32 {
        match self {
            TokenKind::EndOfInput => 0,
            TokenKind::LexError => -1,
            TokenKind::Num => 10,
            TokenKind::Bool => 11,
            TokenKind::Begin => 12,
            TokenKind::End => 13,
            TokenKind::LParen => 14,
            TokenKind::RParen => 15,
            TokenKind::LBracket => 16,
            TokenKind::RBracket => 17,
            TokenKind::Semi => 18,
            TokenKind::Comma => 19,
            TokenKind::Dot => 20,
            TokenKind::Assign => 21,
            TokenKind::RelOp => 22,
            TokenKind::ExprOp => 23,
            TokenKind::TermOp => 24,
            TokenKind::If => 25,
            TokenKind::Else => 26,
            TokenKind::While => 27,
            TokenKind::Return => 28,
            TokenKind::Print => 29,
            TokenKind::New => 30,
            TokenKind::Size => 31,
            TokenKind::NumLit => 32,
            TokenKind::BoolLit => 33,
            TokenKind::Ident => 34,
        }
    }

    /// Maps a raw token-source code back to a kind. `0` and `-1` are the
    /// end-of-input and lex-error signals; anything unmapped returns None.
    pub fn from_code(code: i32) -> Option<TokenKind> {
        match code {
            0 => Some(TokenKind::EndOfInput),
            -1 => Some(TokenKind::LexError),
            10 => Some(TokenKind::Num),
            11 => Some(TokenKind::Bool),
            12 => Some(TokenKind::Begin),
            13 => Some(TokenKind::End),
            14 => Some(TokenKind::LParen),
            15 => Some(TokenKind::RParen),
            16 => Some(TokenKind::LBracket),
            17 => Some(TokenKind::RBracket),
            18 => Some(TokenKind::Semi),
            19 => Some(TokenKind::Comma),
            20 => Some(TokenKind::Dot),
            21 => Some(TokenKind::Assign),
            22 => Some(TokenKind::RelOp),
            23 => Some(TokenKind::ExprOp),
            24 => Some(TokenKind::TermOp),
            25 => Some(TokenKind::If),
            26 => Some(TokenKind::Else),
            27 => Some(TokenKind::While),
            28 => Some(TokenKind::Return),
            29 => Some(TokenKind::Print),
            30 => Some(TokenKind::New),
            31 => Some(TokenKind::Size),
            32 => Some(TokenKind::NumLit),
            33 => Some(TokenKind::BoolLit),
            34 => Some(TokenKind::Ident),
            _ => None,
        }
    }

    /// Human-readable name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "end of file",
            TokenKind::LexError => "lexical error",
            TokenKind::Num => "num",
            TokenKind::Bool => "bool",
            TokenKind::Begin => "{",
            TokenKind::End => "}",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Semi => ";",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Assign => "<-",
            TokenKind::RelOp => "relational operator",
            TokenKind::ExprOp => "expression operator",
            TokenKind::TermOp => "term operator",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Return => "return",
            TokenKind::Print => "print",
            TokenKind::New => "new",
            TokenKind::Size => "size",
            TokenKind::NumLit => "number literal",
            TokenKind::BoolLit => "boolean literal",
            TokenKind::Ident => "identifier",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Payload attached to a token by the token source.
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    Lexeme(String),
    Number(f64),
    Boolean(bool),
}

impl Attribute {
    /// The payload rendered as source text.
    pub fn text(&self) -> String {
        match self {
            Attribute::Lexeme(lexeme) => lexeme.clone(),
            Attribute::Number(value) => value.to_string(),
            Attribute::Boolean(value) => value.to_string(),
        }
    }
}

/// One token as buffered by the parser: a kind plus an optional payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub attr: Option<Attribute>,
}

impl Token {
    /// The token's lexeme, or the empty string if it carries no payload.
    pub fn lexeme(&self) -> String {
        match &self.attr {
            Some(attr) => attr.text(),
            None => String::new(),
        }
    }

    /// Diagnostic description: the lexeme if one is attached, else the
    /// kind's name.
    pub fn describe(&self) -> String {
        match &self.attr {
            Some(attr) => attr.text(),
            None => self.kind.name().to_string(),
        }
    }
}

/// The pull contract between a tokenizer and the parser.
///
/// `next_code` yields a raw integer code: `0` for end of input, `-1` for a
/// lexical error, otherwise a concrete token code (`TokenKind::code`). The
/// attribute of the most recent token travels on a side channel, as does its
/// source position.
pub trait TokenSource {
    /// Produces the next token and returns its raw code.
    fn next_code(&mut self) -> i32;
    /// Takes the attribute attached to the most recently produced token.
    fn take_attribute(&mut self) -> Option<Attribute>;
    /// 1-based line of the most recently produced token.
    fn line(&self) -> u32;
    /// 1-based column of the most recently produced token.
    fn column(&self) -> u32;
}
