use kiln_diagnostic::{DiagnosticKind, DiagnosticSink};
use kiln_ir::{BuiltinType, LexError, UnsupportedLiteral};
use kiln_lexer_core::{Scanner, SourceBuffer};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::OperandFlags;

fn eval_in(source: &str, flags: ExprFlags, sink: &mut DiagnosticSink) -> Result<Operand, CompileError> {
    let buf = SourceBuffer::new(source);
    let mut parser = Parser::new(Scanner::new(buf.cursor()), sink);
    parser.evaluate_expression(flags)
}

fn eval(source: &str) -> Result<i64, CompileError> {
    let mut sink = DiagnosticSink::new();
    eval_in(source, ExprFlags::MUST_BE_CONSTEXPR, &mut sink).map(|op| op.value)
}

fn unsupported(source: &str) -> Option<Unsupported> {
    match eval(source) {
        Err(CompileError::Unsupported { feature, .. }) => Some(feature),
        _ => None,
    }
}

// ─── Folding ────────────────────────────────────────────────────────

#[test]
fn precedence_and_associativity() {
    let cases = [
        ("3 + 7 - 3*3 - 1", 0),
        ("4 + 7 - 3*3 - 1", 1),
        ("90 == 10*9", 1),
        ("90 != 10*9", 0),
        ("91 != 10*9", 1),
        ("5*-1 + 100 == 95", 1),
        ("-5*1 + 100 == 95", 1),
        ("-5*1 + 100 != 95", 0),
        ("-5*1 + 100 != 91", 1),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), Ok(expected), "{source}");
    }
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(eval("10 - 4 - 3"), Ok(3));
    assert_eq!(eval("1 - 2 + 3"), Ok(2));
    assert_eq!(eval("2 * 3 * 4"), Ok(24));
}

#[test]
fn bitwise_precedence() {
    // & binds tighter than ^, which binds tighter than |.
    assert_eq!(eval("1 | 2 ^ 3 & 5"), Ok(1 | (2 ^ (3 & 5))));
    assert_eq!(eval("6 & 3 == 3"), Ok(6 & 1));
    assert_eq!(eval("12 ^ 10"), Ok(6));
}

#[test]
fn unary_operators() {
    assert_eq!(eval("+7"), Ok(7));
    assert_eq!(eval("-7"), Ok(-7));
    assert_eq!(eval("!0"), Ok(1));
    assert_eq!(eval("!5"), Ok(0));
    assert_eq!(eval("~0"), Ok(-1));
    assert_eq!(eval("-2 * -3"), Ok(6));
}

#[test]
fn chained_unary_operators() {
    assert_eq!(eval("- -5"), Ok(5));
    assert_eq!(eval("!!7"), Ok(1));
    assert_eq!(eval("-~0"), Ok(1));
    assert_eq!(eval("1 - -1"), Ok(2));
    assert_eq!(eval("1 + + 2"), Ok(3));
}

#[test]
fn unary_binds_tighter_than_multiplication() {
    assert_eq!(eval("-2 * 3 + 1"), Ok(-5));
    assert_eq!(eval("!0 * 4"), Ok(4));
}

#[test]
fn stops_at_terminator_without_consuming() {
    let buf = SourceBuffer::new("1 + 2 ) ;");
    let mut sink = DiagnosticSink::new();
    let mut parser = Parser::new(Scanner::new(buf.cursor()), &mut sink);
    let result = parser.evaluate_expression(ExprFlags::empty());
    assert_eq!(result.map(|op| op.value), Ok(3));
    assert_eq!(parser.peek().kind, TokenKind::RParen);
}

#[test]
fn comma_ends_expression_by_default() {
    assert_eq!(eval("4 * 2, 1"), Ok(8));
}

#[test]
fn comma_continuation_is_unsupported() {
    let mut sink = DiagnosticSink::new();
    let result = eval_in("1, 2", ExprFlags::COMMA_CONTINUES, &mut sink);
    assert_eq!(
        result,
        Err(CompileError::Unsupported {
            feature: Unsupported::CommaExpression,
            line: 1
        })
    );
}

// ─── Operand Metadata ───────────────────────────────────────────────

#[test]
fn comparison_result_is_flagged_bool() {
    let mut sink = DiagnosticSink::new();
    let result = eval_in("2 == 2", ExprFlags::empty(), &mut sink);
    let Ok(op) = result else {
        panic!("expected a value, got {result:?}");
    };
    assert!(op.flags.contains(OperandFlags::RESULT_OF_COMPARISON | OperandFlags::IMMEDIATE));
    assert_eq!(op.ty.builtin(), BuiltinType::Bool);
}

#[test]
fn bare_literal_allows_bool_conversion() {
    let mut sink = DiagnosticSink::new();
    let result = eval_in("5u", ExprFlags::empty(), &mut sink);
    let Ok(op) = result else {
        panic!("expected a value, got {result:?}");
    };
    assert!(op.flags.contains(OperandFlags::ALLOW_IMPLICIT_CVT_TO_BOOL));
    assert!(op.is_unsigned());
}

#[test]
fn arithmetic_widens_and_keeps_span() {
    let mut sink = DiagnosticSink::new();
    let result = eval_in(" 1 + 4294967296 ", ExprFlags::empty(), &mut sink);
    let Ok(op) = result else {
        panic!("expected a value, got {result:?}");
    };
    assert_eq!(op.ty.builtin(), BuiltinType::G64);
    assert!(!op.flags.contains(OperandFlags::ALLOW_IMPLICIT_CVT_TO_BOOL));
    assert_eq!(op.span, Span::new(1, 15));
}

// ─── Signed Wrap ────────────────────────────────────────────────────

#[test]
fn signed_overflow_is_reported_and_wraps() {
    let mut sink = DiagnosticSink::new();
    let result = eval_in("9223372036854775807 + 1", ExprFlags::empty(), &mut sink);
    assert_eq!(result.map(|op| op.value), Ok(i64::MIN));
    assert_eq!(sink.len(), 1);
    let diag = sink.as_slice()[0];
    assert_eq!(diag.kind, DiagnosticKind::NoSignWrapViolated);
    assert_eq!(diag.misc, Op::Binary(crate::BinaryOp::Add).code());
    assert_eq!(diag.span, Span::new(0, 23));
}

#[test]
fn negating_min_is_reported() {
    let mut sink = DiagnosticSink::new();
    // 9223372036854775808 reinterprets as i64::MIN.
    let result = eval_in("-9223372036854775808", ExprFlags::empty(), &mut sink);
    assert_eq!(result.map(|op| op.value), Ok(i64::MIN));
    assert_eq!(sink.as_slice()[0].kind, DiagnosticKind::NoSignWrapViolated);
}

#[test]
fn unsigned_arithmetic_wraps_silently() {
    let mut sink = DiagnosticSink::new();
    let result = eval_in("9223372036854775807u + 1", ExprFlags::empty(), &mut sink);
    assert_eq!(result.map(|op| op.value), Ok(i64::MIN));
    assert!(sink.is_empty());
}

#[test]
fn full_sink_stops_evaluation() {
    let mut sink = DiagnosticSink::with_capacity(0);
    let result = eval_in("9223372036854775807 * 2", ExprFlags::empty(), &mut sink);
    assert_eq!(result, Err(CompileError::DiagnosticCapacity { capacity: 0 }));
}

// ─── Unsupported & Malformed ────────────────────────────────────────

#[test]
fn unsupported_constructs() {
    assert_eq!(unsupported("(1)"), Some(Unsupported::ParenthesizedExpr));
    assert_eq!(unsupported("1 + (2)"), Some(Unsupported::ParenthesizedExpr));
    assert_eq!(unsupported("1 (2)"), Some(Unsupported::FunctionCall));
    assert_eq!(unsupported("a + 1"), Some(Unsupported::NamedValue));
    assert_eq!(unsupported("1 = 2"), Some(Unsupported::Operator(TokenKind::Eq)));
    assert_eq!(unsupported("1 << 2"), Some(Unsupported::Operator(TokenKind::Shl)));
    assert_eq!(unsupported("1 && 2"), Some(Unsupported::Operator(TokenKind::AmpAmp)));
    assert_eq!(unsupported("++1"), Some(Unsupported::Operator(TokenKind::PlusPlus)));
}

#[test]
fn malformed_sequences() {
    assert_eq!(unsupported("1 2"), Some(Unsupported::AdjacentOperands));
    assert_eq!(unsupported("* 2"), Some(Unsupported::MissingLeftOperand));
    assert_eq!(unsupported("== 2"), Some(Unsupported::MissingLeftOperand));
    assert_eq!(unsupported("1 ~ 2"), Some(Unsupported::PrefixAfterOperand));
    assert_eq!(unsupported("1 !"), Some(Unsupported::PrefixAfterOperand));
}

#[test]
fn dangling_operator_is_a_shape_error() {
    assert!(matches!(eval("1 +"), Err(CompileError::ExpressionShape { .. })));
    assert!(matches!(eval("-"), Err(CompileError::ExpressionShape { .. })));
    assert!(matches!(
        eval(""),
        Err(CompileError::ExpressionShape {
            operands: 0,
            operators: 2,
            ..
        })
    ));
}

#[test]
fn lex_errors_are_reported_and_stop() {
    let mut sink = DiagnosticSink::new();
    let result = eval_in("1 + 18446744073709551616", ExprFlags::empty(), &mut sink);
    assert_eq!(
        result,
        Err(CompileError::Lex {
            error: LexError::IntLiteralOver64Bits,
            line: 1
        })
    );
    assert_eq!(sink.as_slice()[0].kind, DiagnosticKind::IntLiteralOver64Bits);
}

#[test]
fn unsupported_literal_maps_to_unsupported() {
    assert_eq!(
        unsupported("0x10"),
        Some(Unsupported::Literal(UnsupportedLiteral::Hex))
    );
    assert_eq!(
        unsupported("1.5"),
        Some(Unsupported::Literal(UnsupportedLiteral::Float))
    );
}

#[test]
fn long_chains_stay_within_bounds() {
    // Each `+` reduces the previous one, so the stacks never grow.
    let long_chain = vec!["1"; 200].join(" + ");
    assert_eq!(eval(&long_chain), Ok(200));
    assert_eq!(eval(&vec!["1"; 50].join(" + -")), Ok(1 - 49));
}

#[test]
fn operator_stack_limit_is_exact() {
    // Sentinel plus 31 pending prefix operators fill the stack.
    let fits = format!("{} 1", vec!["-"; STACK_CAPACITY - 1].join(" "));
    assert_eq!(eval(&fits), Ok(-1));
    let overflows = format!("{} 1", vec!["-"; STACK_CAPACITY].join(" "));
    assert_eq!(unsupported(&overflows), Some(Unsupported::OperatorStackOverflow));
}

// ─── Property Tests ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn folding_matches_wrapping_i64(a in 0i64..1_000_000, b in 0i64..1_000_000, c in 0i64..1_000_000) {
        let source = format!("{a} + {b} * {c} - {a} & {b} | {c} ^ {a}");
        let expected = ((a + b * c - a) & b) | (c ^ a);
        prop_assert_eq!(eval(&source), Ok(expected));
    }

    #[test]
    fn left_assoc_subtraction_chain(values in proptest::collection::vec(0i64..1000, 1..20)) {
        let source = values.iter().map(ToString::to_string).collect::<Vec<_>>().join(" - ");
        let expected = values[1..].iter().fold(values[0], |acc, v| acc - v);
        prop_assert_eq!(eval(&source), Ok(expected));
    }
}
