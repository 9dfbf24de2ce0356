#![allow(clippy::module_inception)]

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based line/column position in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the text of the given 1-based line, without its trailing newline.
pub fn line_text(source: &str, line: u32) -> Option<&str> {
    source.lines().nth(line.saturating_sub(1) as usize)
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_line_text() {
        let source = "num main() {\n  return 0;\n}\n";

        assert_eq!(super::line_text(source, 1), Some("num main() {"));
        assert_eq!(super::line_text(source, 2), Some("  return 0;"));
        assert_eq!(super::line_text(source, 3), Some("}"));
        assert_eq!(super::line_text(source, 4), None);
    }

    #[test]
    fn test_position_display() {
        let pos = super::Position::new(3, 14);
        assert_eq!(pos.to_string(), "3:14");
    }
}
