//! The Lexi scanner: a single-pass tokenizer over a whole source buffer.
//!
//! The scanner is total. Malformed input never aborts the scan; it is
//! represented as `Error`/`Unknown` tokens interleaved in source order with
//! well-formed tokens, and scanning resumes immediately after the offending
//! construct. A fresh `Scanner` is built per invocation and holds no state
//! across calls.

use crate::keywords::{is_operator_char, keyword_kind, operator_kind};
use crate::token::{Kind, Token};

/// Characters deleted outright by the normalization pre-pass: zero-width
/// space, zero-width non-joiner, zero-width joiner, byte-order mark.
const ZERO_WIDTH: [char; 4] = ['\u{200B}', '\u{200C}', '\u{200D}', '\u{FEFF}'];

pub struct Scanner {
    chars: Vec<char>,
    current: usize,
    line: usize,
    tokens: Vec<Token>,
    /// Open-delimiter stack: `(character, line)` pushed per opener.
    balance: Vec<(char, usize)>,
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        Self {
            chars: normalize(source),
            current: 0,
            line: 1,
            tokens: Vec::new(),
            balance: Vec::new(),
        }
    }

    fn at(&self) -> char {
        if self.current >= self.chars.len() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    fn peek(&self) -> char {
        if self.current + 1 >= self.chars.len() {
            '\0'
        } else {
            self.chars[self.current + 1]
        }
    }

    fn advance(&mut self) {
        self.current += 1;
    }

    fn is_eof(&self) -> bool {
        self.current >= self.chars.len()
    }

    fn push(&mut self, line: usize, kind: Kind, lexeme: String) {
        self.tokens.push(Token::new(line, kind, lexeme));
    }

    fn push_error(&mut self, line: usize, lexeme: String, message: String) {
        self.tokens.push(Token::error(line, lexeme, message));
    }

    /// Scan the entire source and return the token sequence.
    ///
    /// Dispatches on the current character; every branch consumes at least
    /// one character, so the loop terminates for any finite input. At end of
    /// input the balance stack is drained into unclosed-delimiter errors.
    pub fn tokenize(mut self) -> Vec<Token> {
        while !self.is_eof() {
            match self.at() {
                '\r' => self.advance(),
                ' ' | '\t' => self.advance(),
                '\n' => {
                    self.line += 1;
                    self.advance();
                }
                '/' if self.peek() == '/' => self.line_comment(),
                '/' if self.peek() == '*' => self.block_comment(),
                '"' => self.string_literal(),
                c if c.is_ascii_digit() => self.number(),
                '+' | '-' if self.peek().is_ascii_digit() => self.number(),
                '.' if self.peek().is_ascii_digit() => self.number(),
                c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),
                '@' => self.insertion_marker(),
                c if is_operator_char(c) => self.operator_run(),
                c @ ('(' | '[' | '{') => self.open_delimiter(c),
                c @ (')' | ']' | '}') => self.close_delimiter(c),
                ',' => self.punctuation(Kind::Comma, ','),
                ':' => self.punctuation(Kind::Colon, ':'),
                ';' => self.punctuation(Kind::Semicolon, ';'),
                '.' => self.punctuation(Kind::Period, '.'),
                c => self.unknown(c),
            }
        }

        // Innermost unclosed opener is reported first.
        while let Some((open, line)) = self.balance.pop() {
            self.tokens.push(Token::error(
                line,
                open.to_string(),
                format!("Unclosed delimiter: {}", open),
            ));
        }

        self.tokens
    }

    /// `//` through end of line. The newline itself is left for the main loop.
    fn line_comment(&mut self) {
        let start_line = self.line;
        let mut text = String::new();
        while !self.is_eof() && self.at() != '\n' {
            text.push(self.at());
            self.advance();
        }
        self.push(start_line, Kind::CommentSingle, text);
    }

    /// `/* ... */`, reported at the starting line. Embedded newlines advance
    /// the line counter so tokens after the comment land on the right line.
    fn block_comment(&mut self) {
        let start_line = self.line;
        let mut text = String::from("/*");
        self.advance();
        self.advance();

        loop {
            if self.is_eof() {
                self.push_error(
                    start_line,
                    text,
                    "Unterminated block comment: missing closing '*/'".to_string(),
                );
                return;
            }
            if self.at() == '*' && self.peek() == '/' {
                text.push_str("*/");
                self.advance();
                self.advance();
                self.push(start_line, Kind::CommentMulti, text);
                return;
            }
            if self.at() == '\n' {
                self.line += 1;
            }
            text.push(self.at());
            self.advance();
        }
    }

    /// String literal with `@name` insertion splitting.
    ///
    /// Characters accumulate into a segment buffer. An `@` flushes the
    /// current segment as a `StringLiteral` (re-quoted), then the insertion
    /// suffix is emitted as its own token and accumulation resumes. A string
    /// with no `@` yields exactly one `StringLiteral`; an empty string
    /// yields no token at all.
    fn string_literal(&mut self) {
        self.advance(); // opening quote
        let mut segment = String::new();
        let mut segment_line = self.line;

        loop {
            if self.is_eof() {
                self.push_error(
                    segment_line,
                    format!("\"{}", segment),
                    "Unterminated string literal: missing closing quote (\")".to_string(),
                );
                return;
            }
            match self.at() {
                '"' => {
                    self.advance();
                    if !segment.is_empty() {
                        self.push(
                            segment_line,
                            Kind::StringLiteral,
                            format!("\"{}\"", segment),
                        );
                    }
                    return;
                }
                '\n' => {
                    self.push_error(
                        segment_line,
                        format!("\"{}", segment),
                        "Unterminated string literal: newline found before closing quote"
                            .to_string(),
                    );
                    self.line += 1;
                    self.advance();
                    return;
                }
                '\\' => {
                    // The pair is consumed atomically, so \" does not close
                    // the string. No escape interpretation beyond that.
                    segment.push('\\');
                    self.advance();
                    if !self.is_eof() {
                        segment.push(self.at());
                        self.advance();
                    }
                }
                '@' => {
                    if !segment.is_empty() {
                        self.push(
                            segment_line,
                            Kind::StringLiteral,
                            format!("\"{}\"", segment),
                        );
                        segment.clear();
                    }
                    segment_line = self.line;
                    self.insertion_marker();
                }
                c => {
                    segment.push(c);
                    self.advance();
                }
            }
        }
    }

    /// `@` plus the longest identifier-shaped suffix. A bare `@` is a valid
    /// insertion token on its own.
    fn insertion_marker(&mut self) {
        let start_line = self.line;
        let mut text = String::from("@");
        self.advance();
        if self.at().is_ascii_alphabetic() || self.at() == '_' {
            while self.at().is_ascii_alphanumeric() || self.at() == '_' {
                text.push(self.at());
                self.advance();
            }
        }
        self.push(start_line, Kind::StringInsertion, text);
    }

    /// Numeric literal: optional sign, digits, at most one decimal point, at
    /// most one exponent. Validity is flag-checked after the run ends; a
    /// digitless exponent is caught eagerly and ends the run on the spot.
    fn number(&mut self) {
        let start_line = self.line;
        let mut text = String::new();
        let mut has_dot = false;
        let mut has_exp = false;
        let mut digits_after_dot = 0usize;
        let mut exp_digits = 0usize;
        let mut exp_missing_digits = false;

        if matches!(self.at(), '+' | '-') {
            text.push(self.at());
            self.advance();
        }

        loop {
            let c = self.at();
            if c.is_ascii_digit() {
                if has_exp {
                    exp_digits += 1;
                } else if has_dot {
                    digits_after_dot += 1;
                }
                text.push(c);
                self.advance();
            } else if c == '.' && !has_dot && !has_exp {
                has_dot = true;
                text.push(c);
                self.advance();
            } else if (c == 'e' || c == 'E') && !has_exp {
                has_exp = true;
                text.push(c);
                self.advance();
                if matches!(self.at(), '+' | '-') {
                    text.push(self.at());
                    self.advance();
                }
                if !self.at().is_ascii_digit() {
                    exp_missing_digits = true;
                    break;
                }
            } else {
                break;
            }
        }

        if exp_missing_digits || (has_exp && exp_digits == 0) {
            self.push_error(
                start_line,
                text,
                "Exponent must be followed by digits".to_string(),
            );
        } else if has_dot && digits_after_dot == 0 {
            self.push_error(
                start_line,
                text,
                "Must have digits after decimal point".to_string(),
            );
        } else if !text.chars().any(|c| c.is_ascii_digit()) {
            self.push_error(start_line, text, "Invalid number format".to_string());
        } else if has_dot || has_exp {
            self.push(start_line, Kind::DecimalLiteral, text);
        } else {
            self.push(start_line, Kind::IntegerLiteral, text);
        }
    }

    /// Identifier or keyword. The table is consulted with the lower-cased
    /// word; the original-case spelling is kept as the lexeme either way.
    fn identifier(&mut self) {
        let start_line = self.line;
        let mut word = String::new();
        while self.at().is_ascii_alphanumeric() || self.at() == '_' {
            word.push(self.at());
            self.advance();
        }
        let kind = keyword_kind(&word.to_lowercase()).unwrap_or(Kind::Identifier);
        self.push(start_line, kind, word);
    }

    /// Maximal run of operator characters, matched whole against the valid
    /// spellings. A run that matches nothing is one error token; it is never
    /// split into fallback single-character operators.
    fn operator_run(&mut self) {
        let start_line = self.line;
        let mut run = String::new();
        while is_operator_char(self.at()) {
            run.push(self.at());
            self.advance();
        }
        match operator_kind(&run) {
            Some(kind) => self.push(start_line, kind, run),
            None => {
                let message = format!("Unrecognized operator: {}", run);
                self.push_error(start_line, run, message);
            }
        }
    }

    fn open_delimiter(&mut self, c: char) {
        self.balance.push((c, self.line));
        self.punctuation(delimiter_kind(c), c);
    }

    /// The closer token is always emitted; on a mismatch (empty stack or
    /// wrong opener on top) an extra error token follows it. The top entry
    /// is consumed either way.
    fn close_delimiter(&mut self, c: char) {
        let line = self.line;
        self.punctuation(delimiter_kind(c), c);
        let matched = match self.balance.pop() {
            Some((open, _)) => expected_closer(open) == c,
            None => false,
        };
        if !matched {
            self.push_error(line, c.to_string(), format!("Unmatched delimiter: {}", c));
        }
    }

    fn punctuation(&mut self, kind: Kind, c: char) {
        let line = self.line;
        self.advance();
        self.push(line, kind, c.to_string());
    }

    fn unknown(&mut self, c: char) {
        let line = self.line;
        self.advance();
        self.tokens.push(Token {
            line,
            kind: Kind::Unknown,
            lexeme: c.to_string(),
            message: Some(format!("Unrecognized character: {}", c)),
        });
    }
}

/// Tokenize a whole source buffer.
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source).tokenize()
}

/// Normalization pre-pass over a local copy of the input: non-breaking
/// spaces become ordinary spaces, zero-width characters and byte-order
/// marks are deleted before the cursor ever sees them.
fn normalize(source: &str) -> Vec<char> {
    source
        .chars()
        .filter(|c| !ZERO_WIDTH.contains(c))
        .map(|c| if c == '\u{00A0}' { ' ' } else { c })
        .collect()
}

fn delimiter_kind(c: char) -> Kind {
    match c {
        '(' => Kind::LParen,
        ')' => Kind::RParen,
        '[' => Kind::LBracket,
        ']' => Kind::RBracket,
        '{' => Kind::LBrace,
        _ => Kind::RBrace,
    }
}

fn expected_closer(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}
