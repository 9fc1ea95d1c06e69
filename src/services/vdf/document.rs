//! KeyValues read model.

use thiserror::Error;

/// One named object of a KeyValues document.
///
/// Attributes and children keep their document order. Duplicate keys are
/// preserved; lookups resolve to the last occurrence, matching how the game
/// lets later definitions overwrite earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KvObject {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<KvObject>,
}

impl KvObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Child object by name, ASCII case-insensitive.
    pub fn child(&self, name: &str) -> Option<&KvObject> {
        self.children
            .iter()
            .rev()
            .find(|child| child.name.eq_ignore_ascii_case(name))
    }

    /// Replace the value of `key`, or append it when absent.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().rev().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn add_child(&mut self, child: KvObject) -> &mut KvObject {
        let idx = self.children.len();
        self.children.push(child);
        &mut self.children[idx]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KvParseError {
    #[error("document has no root object")]
    Empty,
    #[error("unexpected end of input at line {line}, column {column}")]
    UnexpectedEof { line: usize, column: usize },
    #[error("unexpected {found:?} at line {line}, column {column}")]
    UnexpectedChar {
        found: char,
        line: usize,
        column: usize,
    },
    #[error("expected '{{' after root name at line {line}, column {column}")]
    ExpectedObject { line: usize, column: usize },
    #[error("unterminated string starting at line {line}, column {column}")]
    UnterminatedString { line: usize, column: usize },
}

/// Parse a KeyValues document consisting of a single root object.
///
/// Text after the root object's closing brace is ignored.
pub fn parse_document(text: &str) -> Result<KvObject, KvParseError> {
    let mut parser = Parser::new(text);

    parser.skip_trivia();
    if parser.peek().is_none() {
        return Err(KvParseError::Empty);
    }

    let name = parser.read_token()?;
    parser.skip_condition();
    parser.skip_trivia();
    if parser.peek() != Some('{') {
        let (line, column) = parser.position();
        return Err(KvParseError::ExpectedObject { line, column });
    }
    parser.bump();

    let mut root = KvObject::new(name);
    parser.parse_body(&mut root)?;
    Ok(root)
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
}

impl Parser {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    fn eof_error(&self) -> KvParseError {
        let (line, column) = self.position();
        KvParseError::UnexpectedEof { line, column }
    }

    /// Whitespace, stray byte order marks and `//` comments.
    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() || c == '\u{FEFF}' => {
                    self.bump();
                }
                Some('/') if self.peek_at(1) == Some('/') => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.bump();
                    }
                }
                _ => break,
            }
        }
    }

    /// Skip a platform conditional such as `[$WIN32]` on the current line.
    fn skip_condition(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\r')) {
            self.bump();
        }
        if self.peek() != Some('[') {
            return;
        }
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.bump();
            if c == ']' {
                break;
            }
        }
    }

    fn read_token(&mut self) -> Result<String, KvParseError> {
        match self.peek() {
            None => Err(self.eof_error()),
            Some('"') => self.read_quoted(),
            Some(c @ ('{' | '}')) => {
                let (line, column) = self.position();
                Err(KvParseError::UnexpectedChar {
                    found: c,
                    line,
                    column,
                })
            }
            Some(_) => Ok(self.read_bare()),
        }
    }

    fn read_quoted(&mut self) -> Result<String, KvParseError> {
        let (line, column) = self.position();
        let unterminated = KvParseError::UnterminatedString { line, column };
        self.bump();

        let mut value = String::new();
        loop {
            match self.bump() {
                None => return Err(unterminated),
                Some('"') => return Ok(value),
                Some('\\') => match self.bump() {
                    None => return Err(unterminated),
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some('\\') => value.push('\\'),
                    Some('"') => value.push('"'),
                    Some(other) => {
                        value.push('\\');
                        value.push(other);
                    }
                },
                Some(c) => value.push(c),
            }
        }
    }

    fn read_bare(&mut self) -> String {
        let mut value = String::new();
        while let Some(c) = self.peek() {
            if c.is_whitespace() || matches!(c, '"' | '{' | '}') {
                break;
            }
            value.push(c);
            self.bump();
        }
        value
    }

    /// Parse entries up to and including the closing brace of `object`.
    fn parse_body(&mut self, object: &mut KvObject) -> Result<(), KvParseError> {
        loop {
            self.skip_trivia();
            match self.peek() {
                None => return Err(self.eof_error()),
                Some('}') => {
                    self.bump();
                    return Ok(());
                }
                Some(_) => {}
            }

            let key = self.read_token()?;
            self.skip_condition();
            self.skip_trivia();

            match self.peek() {
                None => return Err(self.eof_error()),
                Some('{') => {
                    self.bump();
                    let child = object.add_child(KvObject::new(key));
                    self.parse_body(child)?;
                    self.skip_condition();
                }
                Some(_) => {
                    let value = self.read_token()?;
                    self.skip_condition();
                    object.attributes.push((key, value));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/document_tests.rs"]
mod tests;
