//! Edge case tests for nuc-lex

use proptest::prelude::*;

use crate::{lex, LexErrorKind, Number, TokenKind};
use nuc_util::Span;

fn error_kinds(source: &str) -> Vec<LexErrorKind> {
    lex(source).errors.iter().map(|e| e.kind).collect()
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_whitespace_only() {
    let output = lex(" \t \n\r\n\r \t");
    assert!(output.tokens.is_empty());
    assert!(output.errors.is_empty());
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10_000);
    let output = lex(&name);
    assert_eq!(output.tokens.len(), 1);
    assert_eq!(output.tokens[0].span, Span::new(1, 1, 10_001));
}

#[test]
fn test_edge_tab_is_one_column() {
    let output = lex("\t\tx");
    assert_eq!(output.tokens[0].span, Span::new(1, 3, 4));
}

#[test]
fn test_edge_lone_cr_lines() {
    let output = lex("a\rb\rc");
    let lines: Vec<_> = output.tokens.iter().map(|t| t.span.line).collect();
    assert_eq!(lines, vec![1, 2, 3]);
}

#[test]
fn test_edge_interior_null() {
    let output = lex("a\0b");
    assert_eq!(output.tokens.len(), 2);
    assert_eq!(error_kinds("a\0b"), vec![LexErrorKind::UnknownToken]);
    assert_eq!(output.errors[0].span, Span::new(1, 2, 3));
}

#[test]
fn test_edge_byte_order_mark() {
    let output = lex("\u{FEFF}x");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.tokens[0].span, Span::new(1, 2, 3));
}

#[test]
fn test_edge_zero_forms() {
    assert_eq!(lex("0").tokens[0].kind, TokenKind::Number(Number::integer(0)));
    assert_eq!(lex("007").tokens[0].kind, TokenKind::Number(Number::integer(7)));
    assert_eq!(error_kinds("0x"), vec![LexErrorKind::InvalidLiteral]);
}

#[test]
fn test_edge_trailing_dot() {
    let output = lex("1.");
    assert_eq!(output.tokens.len(), 2);
    assert!(output.tokens[1].kind.is_symbol('.'));
}

#[test]
fn test_edge_lonely_minus() {
    let output = lex("-");
    assert_eq!(output.tokens.len(), 1);
    let output = lex("-a");
    assert_eq!(output.tokens.len(), 2);
}

#[test]
fn test_edge_three_apostrophes() {
    let output = lex("'''");
    assert_eq!(output.tokens.len(), 2);
    assert_eq!(
        error_kinds("'''"),
        vec![
            LexErrorKind::CharEmpty,
            LexErrorKind::CharUnclosed,
            LexErrorKind::CharEmpty
        ]
    );
}

#[test]
fn test_edge_many_unclosed_lines() {
    let source = "\"a\n\"b\n\"c";
    let output = lex(source);
    assert_eq!(output.tokens.len(), 3);
    assert_eq!(output.errors.len(), 3);
    for (i, err) in output.errors.iter().enumerate() {
        assert_eq!(err.kind, LexErrorKind::StringUnclosed);
        assert_eq!(err.span, Span::new(i as u32 + 1, 1, 3));
    }
}

#[test]
fn test_edge_comment_markers_inside_string() {
    let output = lex("\"/* not a comment */\" x");
    assert_eq!(output.tokens.len(), 2);
    assert!(output.errors.is_empty());
}

#[test]
fn test_edge_quote_inside_line_comment() {
    let output = lex("// \"unclosed\nx");
    assert_eq!(output.tokens.len(), 1);
    assert!(output.errors.is_empty());
}

#[test]
fn test_edge_comment_then_number_sign() {
    // The comment sits between `-` and the digits, so they are not adjacent.
    let output = lex("-/**/1");
    assert_eq!(output.tokens.len(), 2);
}

#[test]
fn test_edge_mixed_valid_invalid() {
    let output = lex("a@b#c");
    assert_eq!(output.tokens.len(), 3);
    assert_eq!(output.errors.len(), 2);
}

#[test]
fn test_edge_unclosed_comment_on_last_line() {
    let output = lex("x\ny /* z");
    assert_eq!(output.tokens.len(), 2);
    assert_eq!(output.errors[0].span, Span::new(2, 3, 7));
}

// ==================== PROPERTIES ====================

/// Single-line, comment-free source over an alphabet that reaches every
/// sub-scanner.
const LINE_ALPHABET: &str = r#"[ \ta-zA-Z0-9_.+\-*(){}\[\];#@é"'\\]{0,40}"#;

#[test]
fn prop_spans_tile_a_line() {
    proptest!(|(source in LINE_ALPHABET)| {
        let output = lex(&source);
        let chars: Vec<char> = source.chars().collect();
        let mut covered = vec![false; chars.len() + 1];

        let unknown = output
            .errors
            .iter()
            .filter(|e| e.kind == LexErrorKind::UnknownToken)
            .map(|e| e.span);
        for span in output.tokens.iter().map(|t| t.span).chain(unknown) {
            prop_assert_eq!(span.line, 1);
            prop_assert!(span.start_column >= 1);
            prop_assert!(span.end_column as usize <= chars.len() + 1);
            for column in span.start_column..span.end_column {
                prop_assert!(!covered[column as usize], "overlap at {} in {:?}", column, source);
                covered[column as usize] = true;
            }
        }

        for (i, &c) in chars.iter().enumerate() {
            if !covered[i + 1] {
                prop_assert!(c == ' ' || c == '\t', "{:?} uncovered in {:?}", c, source);
            }
        }
    });
}

/// Multi-line source with comments but no quotes, so that `/` and `*`
/// only ever mean a symbol or a comment marker.
const BLOCK_ALPHABET: &str = r#"[ \ta-z0-9_.\-/*\n(){};#]{0,80}"#;

/// Marks every character that sits inside a line or block comment.
fn comment_mask(chars: &[char]) -> Vec<bool> {
    let mut mask = vec![false; chars.len()];
    let next = |i: usize| chars.get(i + 1).copied();
    let mut i = 0;
    while i < chars.len() {
        match (chars[i], next(i)) {
            ('/', Some('/')) => {
                while i < chars.len() && chars[i] != '\n' {
                    mask[i] = true;
                    i += 1;
                }
            },
            ('/', Some('*')) => {
                let mut depth = 0u32;
                while i < chars.len() {
                    match (chars[i], next(i)) {
                        ('/', Some('*')) => {
                            depth += 1;
                            mask[i] = true;
                            mask[i + 1] = true;
                            i += 2;
                        },
                        ('*', Some('/')) => {
                            depth -= 1;
                            mask[i] = true;
                            mask[i + 1] = true;
                            i += 2;
                            if depth == 0 {
                                break;
                            }
                        },
                        _ => {
                            mask[i] = true;
                            i += 1;
                        },
                    }
                }
            },
            _ => i += 1,
        }
    }
    mask
}

#[test]
fn prop_spans_tile_lines_and_comments() {
    proptest!(|(source in BLOCK_ALPHABET)| {
        let output = lex(&source);
        let chars: Vec<char> = source.chars().collect();
        let mask = comment_mask(&chars);

        // (character, inside a comment) per line, indexed by column - 1.
        let mut lines: Vec<Vec<(char, bool)>> = vec![Vec::new()];
        for (&c, &in_comment) in chars.iter().zip(&mask) {
            if c == '\n' {
                lines.push(Vec::new());
            } else if let Some(line) = lines.last_mut() {
                line.push((c, in_comment));
            }
        }
        let mut covered: Vec<Vec<bool>> = lines.iter().map(|l| vec![false; l.len()]).collect();

        let mut previous: Option<Span> = None;
        for span in output.tokens.iter().map(|t| t.span) {
            if let Some(prev) = previous {
                prop_assert!(
                    (prev.line, prev.end_column) <= (span.line, span.start_column),
                    "{} then {} in {:?}", prev, span, source
                );
            }
            previous = Some(span);
        }

        let unknown = output
            .errors
            .iter()
            .filter(|e| e.kind == LexErrorKind::UnknownToken)
            .map(|e| e.span);
        for span in output.tokens.iter().map(|t| t.span).chain(unknown) {
            let line = span.line as usize - 1;
            prop_assert!(line < lines.len());
            prop_assert!(span.end_column as usize <= lines[line].len() + 1);
            for column in span.start_column..span.end_column {
                let cell = &mut covered[line][column as usize - 1];
                prop_assert!(!*cell, "overlap at {}:{} in {:?}", span.line, column, source);
                *cell = true;
            }
        }

        for (line, cells) in lines.iter().enumerate() {
            for (column, &(c, in_comment)) in cells.iter().enumerate() {
                if covered[line][column] {
                    prop_assert!(!in_comment, "comment text lexed at {}:{} in {:?}", line + 1, column + 1, source);
                } else {
                    prop_assert!(
                        in_comment || c == ' ' || c == '\t',
                        "{:?} uncovered at {}:{} in {:?}", c, line + 1, column + 1, source
                    );
                }
            }
        }
    });
}

#[test]
fn prop_lexing_is_idempotent() {
    proptest!(|(source in any::<String>())| {
        prop_assert_eq!(lex(&source), lex(&source));
    });
}

#[test]
fn prop_crlf_matches_lf() {
    proptest!(|(source in r#"[a-z0-9 \n(){}"'/*\-]{0,60}"#)| {
        let crlf = source.replace('\n', "\r\n");
        prop_assert_eq!(lex(&source), lex(&crlf));
    });
}

#[test]
fn prop_spans_are_well_formed() {
    proptest!(|(source in any::<String>())| {
        let output = lex(&source);
        for span in output.tokens.iter().map(|t| t.span).chain(output.errors.iter().map(|e| e.span)) {
            prop_assert!(span.line >= 1);
            prop_assert!(span.start_column >= 1);
            prop_assert!(span.start_column <= span.end_column);
        }
    });
}

#[test]
fn prop_identifier_runs() {
    proptest!(|(name in "[a-zA-Z][a-zA-Z0-9_]{0,30}")| {
        let output = lex(&name);
        prop_assert!(output.errors.is_empty());
        prop_assert_eq!(output.tokens.len(), 1);
        prop_assert_eq!(output.tokens[0].kind.as_identifier(), Some(name.as_str()));
        prop_assert_eq!(output.tokens[0].span.width() as usize, name.len());
    });
}

#[test]
fn prop_integers_decompose_exactly() {
    proptest!(|(value in any::<u64>())| {
        let output = lex(&value.to_string());
        prop_assert!(output.errors.is_empty());
        prop_assert_eq!(&output.tokens[0].kind, &TokenKind::Number(Number::integer(value)));

        let output = lex(&format!("(-{:#x})", value));
        prop_assert!(output.errors.is_empty());
        let expected = Number { negative: true, ..Number::integer(value) };
        prop_assert_eq!(&output.tokens[1].kind, &TokenKind::Number(expected));
    });
}

#[test]
fn prop_fractions_keep_digit_count() {
    proptest!(|(whole in 0u32..10_000, fraction in "[0-9]{1,18}")| {
        let output = lex(&format!("{}.{}", whole, fraction));
        prop_assert!(output.errors.is_empty());
        match output.tokens[0].kind {
            TokenKind::Number(n) => {
                prop_assert_eq!(n.mantissa, u64::from(whole));
                prop_assert_eq!(n.fraction_digits as usize, fraction.len());
                prop_assert_eq!(Some(n.fraction), fraction.parse::<u64>().ok());
            },
            ref other => prop_assert!(false, "expected number, got {:?}", other),
        }
    });
}
