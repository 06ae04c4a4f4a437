//! Integration tests for the Lexi scanner's externally observable contract:
//! totality, ordering, balance accounting, and the documented boundary cases.

use lexi_scanner::{tokenize, Kind, Token};
use pretty_assertions::assert_eq;

fn kinds(tokens: &[Token]) -> Vec<Kind> {
    tokens.iter().map(|t| t.kind).collect()
}

// ============================================================================
// TOTALITY - every finite input yields a complete token sequence
// ============================================================================

#[test]
fn empty_input_yields_empty_sequence() {
    assert_eq!(tokenize(""), vec![]);
}

#[test]
fn degenerate_inputs_always_terminate() {
    let inputs = [
        "\"",
        "/*",
        "\\",
        "@",
        "((((((((",
        "))))))))",
        "1e",
        "3.",
        "<<>><<",
        "\u{FEFF}\u{200B}\u{00A0}",
        "\"a@",
        "// only a comment",
        "\r\r\r",
    ];
    for input in inputs {
        // Must not panic and must classify everything it saw.
        let tokens = tokenize(input);
        for t in &tokens {
            assert!(t.line >= 1, "line must be 1-based for {:?}", input);
            assert!(!t.lexeme.is_empty(), "empty lexeme for {:?}", input);
        }
    }
}

#[test]
fn all_printable_ascii_single_chars_are_classified() {
    for byte in 32u8..=126 {
        let s = (byte as char).to_string();
        let tokens = tokenize(&s);
        // Nothing may be silently dropped except whitespace; even a lone
        // quote comes back as an unterminated-string error token.
        if !s.trim().is_empty() {
            assert!(!tokens.is_empty(), "char {:?} produced no tokens", s);
        }
    }
}

// ============================================================================
// ORDERING - tokens come out in source order with non-decreasing lines
// ============================================================================

#[test]
fn line_numbers_are_monotonic() {
    let source = "begin\n\"bad\nint x = /* multi\nline */ 3.5;\n( [ ) ]\nend\n@tail";
    let tokens = tokenize(source);
    let mut last = 1;
    for t in &tokens {
        assert!(
            t.line >= last,
            "line went backwards at {:?} (prev {})",
            t,
            last
        );
        last = t.line;
    }
}

// ============================================================================
// BALANCE DRAIN - unclosed openers become errors, innermost first
// ============================================================================

#[test]
fn drained_errors_match_unclosed_openers() {
    let cases: [(&str, usize); 5] = [
        ("()", 0),
        ("(", 1),
        ("({[", 3),
        // Each closer consumes one stack entry even on mismatch, so the
        // stack is empty at EOF and the errors are unmatched-closer ones.
        ("(])", 0),
        ("{{}", 1),
    ];
    for (source, expected) in cases {
        let tokens = tokenize(source);
        let drained = tokens
            .iter()
            .filter(|t| {
                t.message
                    .as_deref()
                    .is_some_and(|m| m.starts_with("Unclosed delimiter"))
            })
            .count();
        assert_eq!(drained, expected, "for source {:?}", source);
    }
}

#[test]
fn crossed_delimiters_scenario() {
    let tokens = tokenize("( [ ) ]");
    assert_eq!(
        tokens
            .iter()
            .map(|t| (t.kind, t.lexeme.as_str()))
            .collect::<Vec<_>>(),
        vec![
            (Kind::LParen, "("),
            (Kind::LBracket, "["),
            (Kind::RParen, ")"),
            (Kind::Error, ")"),
            (Kind::RBracket, "]"),
            (Kind::Error, "]"),
        ]
    );
}

// ============================================================================
// STRING INSERTION ROUND-TRIP
// ============================================================================

#[test]
fn insertion_round_trip() {
    let tokens = tokenize("\"a@x b\"");
    assert_eq!(
        tokens
            .iter()
            .map(|t| (t.kind, t.lexeme.as_str()))
            .collect::<Vec<_>>(),
        vec![
            (Kind::StringLiteral, "\"a\""),
            (Kind::StringInsertion, "@x"),
            (Kind::StringLiteral, "\" b\""),
        ]
    );
}

// ============================================================================
// KEYWORD CASE-INSENSITIVITY
// ============================================================================

#[test]
fn keyword_casing_preserved_in_lexeme() {
    for spelling in ["IF", "If", "if"] {
        let tokens = tokenize(spelling);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, Kind::KeywordConditional);
        assert_eq!(tokens[0].lexeme, spelling);
    }
}

// ============================================================================
// NUMERIC BOUNDARIES
// ============================================================================

#[test]
fn numeric_boundaries() {
    let tokens = tokenize("3.");
    assert_eq!(kinds(&tokens), vec![Kind::Error]);

    let tokens = tokenize("3.0");
    assert_eq!(kinds(&tokens), vec![Kind::DecimalLiteral]);

    let tokens = tokenize("1e");
    assert_eq!(kinds(&tokens), vec![Kind::Error]);

    let tokens = tokenize("1e10");
    assert_eq!(kinds(&tokens), vec![Kind::DecimalLiteral]);
}

// ============================================================================
// OPERATOR DISAMBIGUATION
// ============================================================================

#[test]
fn operator_runs_classify_or_error_whole() {
    let tokens = tokenize("a<<b");
    assert_eq!(tokens[1].kind, Kind::Error);
    assert_eq!(tokens[1].lexeme, "<<");

    let tokens = tokenize("a<=b");
    assert_eq!(tokens[1].kind, Kind::RelationalOperator);
    assert_eq!(tokens[1].lexeme, "<=");
}

// ============================================================================
// DIAGNOSTIC CONVENTION
// ============================================================================

#[test]
fn only_diagnostic_tokens_carry_messages() {
    let source = "begin int x = 3.0; \"s@i\" ( ] $ 1e end";
    for t in tokenize(source) {
        match t.kind {
            Kind::Error | Kind::Unknown => {
                assert!(t.message.is_some(), "missing message on {:?}", t)
            }
            _ => assert!(t.message.is_none(), "stray message on {:?}", t),
        }
    }
}

#[test]
fn unknown_characters_use_the_documented_sentence() {
    let tokens = tokenize("~");
    assert_eq!(tokens[0].kind, Kind::Unknown);
    assert_eq!(tokens[0].message.as_deref(), Some("Unrecognized character: ~"));
}
