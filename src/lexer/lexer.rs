use regex::Regex;

use crate::{MK_OP_PATTERN, MK_PATTERN};

use super::tokens::{Attribute, TokenKind, TokenSource, RESERVED_LOOKUP};

/// Inspects the matched text and decides what token (if any) it becomes.
/// Returning None skips the match (whitespace, comments).
pub type PatternHandler = fn(&str) -> Option<(TokenKind, Option<Attribute>)>;

pub struct RegexPattern {
    regex: Regex,
    handler: PatternHandler,
}

/// Pull-based tokenizer. Each `next_code` call scans exactly one token, so
/// the parser's single-token lookahead is the only buffering anywhere.
pub struct Lexer {
    patterns: Vec<RegexPattern>,
    source: String,
    pos: usize,
    line: u32,
    column: u32,
    token_line: u32,
    token_column: u32,
    attr: Option<Attribute>,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer {
            // Ordered: first pattern matching at the scan position wins, so
            // two-character operators come before their one-character prefixes.
            patterns: vec![
                RegexPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
                RegexPattern { regex: Regex::new("[0-9]+(\\.[0-9]+)?").unwrap(), handler: number_handler },
                RegexPattern { regex: Regex::new("\\s+").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new("\\/\\/.*").unwrap(), handler: skip_handler },
                MK_PATTERN!("\\{", TokenKind::Begin),
                MK_PATTERN!("\\}", TokenKind::End),
                MK_PATTERN!("\\(", TokenKind::LParen),
                MK_PATTERN!("\\)", TokenKind::RParen),
                MK_PATTERN!("\\[", TokenKind::LBracket),
                MK_PATTERN!("\\]", TokenKind::RBracket),
                MK_OP_PATTERN!("<=", TokenKind::RelOp),
                MK_OP_PATTERN!(">=", TokenKind::RelOp),
                MK_OP_PATTERN!("!=", TokenKind::RelOp),
                MK_PATTERN!("<-", TokenKind::Assign),
                MK_OP_PATTERN!("<", TokenKind::RelOp),
                MK_OP_PATTERN!(">", TokenKind::RelOp),
                MK_OP_PATTERN!("=", TokenKind::RelOp),
                MK_PATTERN!(";", TokenKind::Semi),
                MK_PATTERN!(",", TokenKind::Comma),
                MK_PATTERN!("\\.", TokenKind::Dot),
                MK_OP_PATTERN!("\\+", TokenKind::ExprOp),
                MK_OP_PATTERN!("-", TokenKind::ExprOp),
                MK_OP_PATTERN!("\\*", TokenKind::TermOp),
                MK_OP_PATTERN!("/", TokenKind::TermOp),
            ],
            source,
            pos: 0,
            line: 1,
            column: 1,
            token_line: 1,
            token_column: 1,
            attr: None,
        }
    }

    fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn advance_over(&mut self, matched: &str) {
        for c in matched.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += matched.len();
    }

    fn mark_token_start(&mut self) {
        self.token_line = self.line;
        self.token_column = self.column;
    }
}

fn symbol_handler(matched: &str) -> Option<(TokenKind, Option<Attribute>)> {
    match RESERVED_LOOKUP.get(matched) {
        Some(TokenKind::BoolLit) => Some((
            TokenKind::BoolLit,
            Some(Attribute::Boolean(matched == "true")),
        )),
        // Word operators still travel as their operator class
        Some(kind @ (TokenKind::ExprOp | TokenKind::TermOp)) => {
            Some((*kind, Some(Attribute::Lexeme(String::from(matched)))))
        }
        Some(kind) => Some((*kind, None)),
        None => Some((
            TokenKind::Ident,
            Some(Attribute::Lexeme(String::from(matched))),
        )),
    }
}

fn number_handler(matched: &str) -> Option<(TokenKind, Option<Attribute>)> {
    matched
        .parse::<f64>()
        .ok()
        .map(|value| (TokenKind::NumLit, Some(Attribute::Number(value))))
}

fn skip_handler(_matched: &str) -> Option<(TokenKind, Option<Attribute>)> {
    None
}

impl TokenSource for Lexer {
    fn next_code(&mut self) -> i32 {
        loop {
            if self.at_eof() {
                self.mark_token_start();
                self.attr = None;
                return TokenKind::EndOfInput.code();
            }

            let mut scanned = None;
            for pattern in self.patterns.iter() {
                if let Some(found) = pattern.regex.find(self.remainder()) {
                    if found.start() == 0 {
                        scanned = Some((found.as_str().to_string(), pattern.handler));
                        break;
                    }
                }
            }

            match scanned {
                Some((matched, handler)) => {
                    self.mark_token_start();
                    let result = handler(&matched);
                    self.advance_over(&matched);
                    if let Some((kind, attr)) = result {
                        self.attr = attr;
                        return kind.code();
                    }
                }
                None => {
                    // Nothing matches here: report the character and move
                    // past it so a later pull cannot see it again.
                    self.mark_token_start();
                    let bad: String = self.remainder().chars().take(1).collect();
                    self.attr = Some(Attribute::Lexeme(bad.clone()));
                    self.advance_over(&bad);
                    return TokenKind::LexError.code();
                }
            }
        }
    }

    fn take_attribute(&mut self) -> Option<Attribute> {
        self.attr.take()
    }

    fn line(&self) -> u32 {
        self.token_line
    }

    fn column(&self) -> u32 {
        self.token_column
    }
}
