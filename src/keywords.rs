//! Static lookup tables: keyword spellings and valid operator runs.
//!
//! Both tables are pure data. Keyword lookup is case-insensitive (the caller
//! passes the lower-cased word); operator lookup matches a whole run against
//! the closed sets of valid one- and two-character spellings.

use crate::token::Kind;

/// Look up a lower-cased identifier-shaped word in the keyword table.
///
/// Returns `None` for plain identifiers. `true`/`false` are special-cased
/// as boolean literals rather than generic keywords.
pub fn keyword_kind(word: &str) -> Option<Kind> {
    match word {
        "begin" | "end" | "exit" => Some(Kind::KeywordProgram),
        "int" | "decimal" | "string" | "bool" | "char" => Some(Kind::KeywordDataType),
        "while" | "for" | "do" | "repeat" | "until" => Some(Kind::KeywordLoop),
        "if" | "else" | "elseif" | "switch" | "case" | "default" => Some(Kind::KeywordConditional),
        "function" | "return" | "break" | "continue" | "const" | "void" | "input" | "print"
        | "null" => Some(Kind::ReservedWord),
        "then" | "to" | "step" | "by" => Some(Kind::NoiseWord),
        "true" | "false" => Some(Kind::BooleanLiteral),
        _ => None,
    }
}

/// Classify a maximal operator-character run.
///
/// Only exact matches against the valid single and double spellings are
/// accepted; everything else (runs longer than two, or pairs like `<<`)
/// returns `None` and is surfaced by the scanner as one error token.
pub fn operator_kind(run: &str) -> Option<Kind> {
    match run {
        "=" => Some(Kind::AssignOperator),
        "+" | "-" | "*" | "/" | "%" | "^" => Some(Kind::ArithmeticOperator),
        "<" | ">" | "<=" | ">=" | "==" | "!=" => Some(Kind::RelationalOperator),
        "!" | "&&" | "||" => Some(Kind::LogicalOperator),
        "++" | "--" => Some(Kind::IncDecOperator),
        "+=" | "-=" | "*=" | "/=" | "%=" | "^=" => Some(Kind::CompoundAssignOperator),
        _ => None,
    }
}

/// True for characters that may appear in an operator run.
pub fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '<' | '>' | '!' | '=' | '&' | '|' | '+' | '-' | '*' | '/' | '%' | '^'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_resolve_to_their_subclass() {
        assert_eq!(keyword_kind("begin"), Some(Kind::KeywordProgram));
        assert_eq!(keyword_kind("decimal"), Some(Kind::KeywordDataType));
        assert_eq!(keyword_kind("repeat"), Some(Kind::KeywordLoop));
        assert_eq!(keyword_kind("elseif"), Some(Kind::KeywordConditional));
        assert_eq!(keyword_kind("function"), Some(Kind::ReservedWord));
        assert_eq!(keyword_kind("then"), Some(Kind::NoiseWord));
    }

    #[test]
    fn booleans_are_literals_not_keywords() {
        assert_eq!(keyword_kind("true"), Some(Kind::BooleanLiteral));
        assert_eq!(keyword_kind("false"), Some(Kind::BooleanLiteral));
    }

    #[test]
    fn non_keywords_are_none() {
        assert_eq!(keyword_kind("beginx"), None);
        assert_eq!(keyword_kind("counter"), None);
        assert_eq!(keyword_kind(""), None);
    }

    #[test]
    fn valid_operator_spellings() {
        assert_eq!(operator_kind("="), Some(Kind::AssignOperator));
        assert_eq!(operator_kind("^"), Some(Kind::ArithmeticOperator));
        assert_eq!(operator_kind(">="), Some(Kind::RelationalOperator));
        assert_eq!(operator_kind("&&"), Some(Kind::LogicalOperator));
        assert_eq!(operator_kind("--"), Some(Kind::IncDecOperator));
        assert_eq!(operator_kind("%="), Some(Kind::CompoundAssignOperator));
    }

    #[test]
    fn invalid_runs_are_none() {
        assert_eq!(operator_kind("<<"), None);
        assert_eq!(operator_kind("&"), None);
        assert_eq!(operator_kind("|"), None);
        assert_eq!(operator_kind("==="), None);
        assert_eq!(operator_kind("=+"), None);
    }
}
