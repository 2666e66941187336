use crate::SourceBuffer;

use super::BlockComment;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let buf = SourceBuffer::new("abcdef");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    cursor.advance_n(3);
    assert_eq!(cursor.current(), b'e');
    assert_eq!(cursor.pos(), 4);
}

// === Peek ===

#[test]
fn peek_looks_one_byte_ahead() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.peek(), b'b');
}

#[test]
fn peek_near_end_returns_sentinel() {
    let buf = SourceBuffer::new("a");
    let cursor = buf.cursor();
    assert_eq!(cursor.peek(), 0);
}

// === EOF Detection ===

#[test]
fn is_eof_at_sentinel() {
    let buf = SourceBuffer::new("x");
    let mut cursor = buf.cursor();
    assert!(!cursor.is_eof());
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

#[test]
fn empty_source_is_eof() {
    let buf = SourceBuffer::new("");
    assert!(buf.cursor().is_eof());
}

// === Slicing ===

#[test]
fn slice_from_start() {
    let buf = SourceBuffer::new("static_assert(1);");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b.is_ascii_alphabetic() || b == b'_');
    assert_eq!(cursor.slice_from(0), b"static_assert");
    assert_eq!(cursor.slice(7, 13), b"assert");
}

// === Eating ===

#[test]
fn eat_while_stops_at_sentinel() {
    let buf = SourceBuffer::new("aaaa");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b == b'a');
    assert_eq!(cursor.pos(), 4);
    assert!(cursor.is_eof());
}

#[test]
fn eat_until_newline_stops_before_newline() {
    let buf = SourceBuffer::new("// note\nnext");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.pos(), 7);
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn eat_until_newline_without_newline_hits_eof() {
    let buf = SourceBuffer::new("// trailing");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

// === Block Comments ===

/// Position a cursor just past the leading `/*`.
fn after_opener(buf: &SourceBuffer) -> super::Cursor<'_> {
    let mut cursor = buf.cursor();
    cursor.advance_n(2);
    cursor
}

#[test]
fn block_comment_closes_at_first_terminator() {
    let buf = SourceBuffer::new("/* a */ 5 */");
    let mut cursor = after_opener(&buf);
    let result = cursor.eat_block_comment();
    assert_eq!(
        result,
        BlockComment {
            terminated: true,
            newlines: 0
        }
    );
    assert_eq!(cursor.pos(), 7);
}

#[test]
fn block_comment_does_not_nest() {
    let buf = SourceBuffer::new("/* /*\n777\n**/ 5");
    let mut cursor = after_opener(&buf);
    let result = cursor.eat_block_comment();
    assert!(result.terminated);
    assert_eq!(result.newlines, 2);
    assert_eq!(cursor.current(), b' ');
    assert_eq!(cursor.peek(), b'5');
}

#[test]
fn slash_star_slash_stays_open() {
    let buf = SourceBuffer::new("/*/ still comment */x");
    let mut cursor = after_opener(&buf);
    assert!(cursor.eat_block_comment().terminated);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn empty_block_comment() {
    let buf = SourceBuffer::new("/**/x");
    let mut cursor = after_opener(&buf);
    assert!(cursor.eat_block_comment().terminated);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn unterminated_block_comment_reaches_eof() {
    let buf = SourceBuffer::new("/* one\ntwo\n");
    let mut cursor = after_opener(&buf);
    let result = cursor.eat_block_comment();
    assert_eq!(
        result,
        BlockComment {
            terminated: false,
            newlines: 2
        }
    );
    assert!(cursor.is_eof());
}

#[test]
fn bare_slash_star_slash_at_end_is_unterminated() {
    let buf = SourceBuffer::new("/*/");
    let mut cursor = after_opener(&buf);
    assert!(!cursor.eat_block_comment().terminated);
    assert!(cursor.is_eof());
}
