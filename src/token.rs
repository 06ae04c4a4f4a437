use serde::Serialize;

/// A single classified token produced by the scanner.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Token {
    /// Line the token begins on (1-based).
    pub line: usize,
    /// Classification tag.
    pub kind: Kind,
    /// The exact (or, for split strings, reconstructed) source text.
    pub lexeme: String,
    /// Diagnostic sentence; populated only on `Error` and `Unknown` tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Token {
    pub fn new(line: usize, kind: Kind, lexeme: String) -> Self {
        Token {
            line,
            kind,
            lexeme,
            message: None,
        }
    }

    pub fn error(line: usize, lexeme: String, message: String) -> Self {
        Token {
            line,
            kind: Kind::Error,
            lexeme,
            message: Some(message),
        }
    }

    /// True for the two diagnostic kinds the `check` subcommand reports.
    pub fn is_diagnostic(&self) -> bool {
        matches!(self.kind, Kind::Error | Kind::Unknown)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum Kind {
    // Keywords
    KeywordProgram,     // begin, end, exit
    KeywordDataType,    // int, decimal, string, bool, char
    KeywordLoop,        // while, for, do, repeat, until
    KeywordConditional, // if, else, elseif, switch, case, default
    ReservedWord,       // function, return, break, continue, const, void, input, print, null
    NoiseWord,          // then, to, step, by

    // Identifiers and literals
    Identifier,
    IntegerLiteral,
    DecimalLiteral,
    StringLiteral,
    BooleanLiteral, // true, false (any casing)

    // Operators
    AssignOperator,         // =
    CompoundAssignOperator, // +=, -=, *=, /=, %=, ^=
    IncDecOperator,         // ++, --
    ArithmeticOperator,     // +, -, *, /, %, ^
    RelationalOperator,     // <, >, <=, >=, ==, !=
    LogicalOperator,        // !, &&, ||

    // Delimiters
    LParen,    // (
    RParen,    // )
    LBracket,  // [
    RBracket,  // ]
    LBrace,    // {
    RBrace,    // }
    Comma,     // ,
    Colon,     // :
    Semicolon, // ;
    Period,    // . (member access)

    // Comments and structure
    CommentSingle,   // // comment
    CommentMulti,    // /* comment */
    StringInsertion, // @name, inside or outside a string literal

    // Diagnostics
    Unknown, // single unrecognized character
    Error,   // malformed construct, message explains why
}

impl Kind {
    /// Short stable name for the token-table and JSON output.
    pub fn label(&self) -> &'static str {
        match self {
            Kind::KeywordProgram => "KEYWORD_PROGRAM",
            Kind::KeywordDataType => "KEYWORD_DATATYPE",
            Kind::KeywordLoop => "KEYWORD_LOOP",
            Kind::KeywordConditional => "KEYWORD_CONDITIONAL",
            Kind::ReservedWord => "RESERVED_WORD",
            Kind::NoiseWord => "NOISE_WORD",
            Kind::Identifier => "IDENTIFIER",
            Kind::IntegerLiteral => "INTEGER_LITERAL",
            Kind::DecimalLiteral => "DECIMAL_LITERAL",
            Kind::StringLiteral => "STRING_LITERAL",
            Kind::BooleanLiteral => "BOOLEAN_LITERAL",
            Kind::AssignOperator => "ASSIGN_OP",
            Kind::CompoundAssignOperator => "COMPOUND_ASSIGN_OP",
            Kind::IncDecOperator => "INCDEC_OP",
            Kind::ArithmeticOperator => "ARITHMETIC_OP",
            Kind::RelationalOperator => "RELATIONAL_OP",
            Kind::LogicalOperator => "LOGICAL_OP",
            Kind::LParen => "LPAREN",
            Kind::RParen => "RPAREN",
            Kind::LBracket => "LBRACKET",
            Kind::RBracket => "RBRACKET",
            Kind::LBrace => "LBRACE",
            Kind::RBrace => "RBRACE",
            Kind::Comma => "COMMA",
            Kind::Colon => "COLON",
            Kind::Semicolon => "SEMICOLON",
            Kind::Period => "PERIOD",
            Kind::CommentSingle => "COMMENT_SINGLE",
            Kind::CommentMulti => "COMMENT_MULTI",
            Kind::StringInsertion => "STRING_INSERTION",
            Kind::Unknown => "UNKNOWN",
            Kind::Error => "ERROR",
        }
    }

    /// Coarse class used to group rows in the token table.
    pub fn category(&self) -> &'static str {
        match self {
            Kind::KeywordProgram
            | Kind::KeywordDataType
            | Kind::KeywordLoop
            | Kind::KeywordConditional
            | Kind::ReservedWord
            | Kind::NoiseWord => "keyword",
            Kind::Identifier
            | Kind::IntegerLiteral
            | Kind::DecimalLiteral
            | Kind::StringLiteral
            | Kind::BooleanLiteral => "literal",
            Kind::AssignOperator
            | Kind::CompoundAssignOperator
            | Kind::IncDecOperator
            | Kind::ArithmeticOperator
            | Kind::RelationalOperator
            | Kind::LogicalOperator => "operator",
            Kind::LParen
            | Kind::RParen
            | Kind::LBracket
            | Kind::RBracket
            | Kind::LBrace
            | Kind::RBrace
            | Kind::Comma
            | Kind::Colon
            | Kind::Semicolon
            | Kind::Period => "delimiter",
            Kind::CommentSingle | Kind::CommentMulti => "comment",
            Kind::StringInsertion => "insertion",
            Kind::Unknown | Kind::Error => "diagnostic",
        }
    }
}
