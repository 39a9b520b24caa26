// Additional parser error path tests
// These systematically walk the unhappy paths of the grammar

use bec_core::translate;

#[test]
fn test_error_missing_end() {
    let source = "begin A := 1;";
    let result = translate(source, "test.bec");
    assert!(result.is_err(), "Should fail with missing end");
}

#[test]
fn test_error_lone_begin() {
    let source = "begin";
    let result = translate(source, "test.bec");
    assert!(result.is_err(), "Should fail with unexpected EOF");
}

#[test]
fn test_error_lone_end() {
    let source = "end";
    let result = translate(source, "test.bec");
    assert!(result.is_err(), "Should fail without an opening begin");
}

#[test]
fn test_error_missing_assign() {
    let source = "begin A 1; end";
    let result = translate(source, "test.bec");
    assert!(result.is_err(), "Should fail with missing :=");
}

#[test]
fn test_error_missing_value() {
    let source = "begin A := ; end";
    let result = translate(source, "test.bec");
    assert!(result.is_err(), "Should fail with missing value");
}

#[test]
fn test_error_missing_semicolon() {
    let source = "begin A := 1 end";
    let result = translate(source, "test.bec");
    assert!(result.is_err(), "Should fail with missing ;");
}

#[test]
fn test_error_entry_without_key() {
    let source = "begin := 1; end";
    let result = translate(source, "test.bec");
    assert!(result.is_err(), "Should fail with missing key");
}

#[test]
fn test_error_keyword_as_key() {
    let source = "begin is := 1; end";
    let result = translate(source, "test.bec");
    assert!(result.is_err(), "Should fail with a keyword in key position");
}

#[test]
fn test_error_constant_without_is() {
    let source = "A 1\nbegin end";
    let result = translate(source, "test.bec");
    assert!(result.is_err(), "Should fail without the is keyword");
}

#[test]
fn test_error_two_values_in_a_row() {
    let source = "begin A := 1 2; end";
    let result = translate(source, "test.bec");
    assert!(result.is_err(), "Should fail with two adjacent values");
}

#[test]
fn test_error_operators_outside_expression_delimiters() {
    let source = "begin R := 1 + 2; end";
    let result = translate(source, "test.bec");
    assert!(result.is_err(), "Should fail, arithmetic needs |...|");
}

#[test]
fn test_error_unclosed_expression() {
    let source = "begin R := |1 + 2; end";
    let result = translate(source, "test.bec");
    assert!(result.is_err(), "Should fail with unclosed |");
}

#[test]
fn test_error_empty_expression() {
    let source = "begin R := ||; end";
    let result = translate(source, "test.bec");
    assert!(result.is_err(), "Should fail with an empty expression");
}

#[test]
fn test_error_dangling_operator() {
    let source = "begin R := |1 + |; end";
    let result = translate(source, "test.bec");
    assert!(result.is_err(), "Should fail with a dangling operator");
}

#[test]
fn test_error_unclosed_group() {
    let source = "begin R := |(1 + 2|; end";
    let result = translate(source, "test.bec");
    assert!(result.is_err(), "Should fail with unclosed (");
}

#[test]
fn test_error_ord_without_parentheses() {
    let source = "begin R := |ord 5|; end";
    let result = translate(source, "test.bec");
    assert!(result.is_err(), "Should fail with missing ( after ord");
}

#[test]
fn test_error_ord_unclosed() {
    let source = "begin R := |ord(q(a)|; end";
    let result = translate(source, "test.bec");
    assert!(result.is_err(), "Should fail with unclosed ord call");
}

#[test]
fn test_error_ord_outside_expression() {
    let source = "begin R := ord(q(a)); end";
    let result = translate(source, "test.bec");
    assert!(result.is_err(), "Should fail, ord only works inside |...|");
}

#[test]
fn test_error_nested_dictionary_missing_semicolon() {
    let source = "begin A := begin end end";
    let result = translate(source, "test.bec");
    assert!(result.is_err(), "Should fail with missing ; after inner end");
}

#[test]
fn test_error_garbage_after_document() {
    let source = "begin end 42";
    let result = translate(source, "test.bec");
    assert!(result.is_err(), "Should fail with trailing input");
}

#[test]
fn test_error_second_dictionary() {
    let source = "begin end begin end";
    let result = translate(source, "test.bec");
    assert!(result.is_err(), "Should fail, only one root dictionary");
}

#[test]
fn test_error_adjacent_signed_literal() {
    // `-3` binds to the digit, so this reads as two values in a row rather
    // than a subtraction.
    let source = "begin R := |5 -3|; end";
    let result = translate(source, "test.bec");
    assert!(result.is_err(), "Should fail, -3 is a literal here");
}

#[test]
fn test_error_assign_in_constant_declaration() {
    let source = "A := 1\nbegin end";
    let result = translate(source, "test.bec");
    assert!(result.is_err(), "Should fail, constants use is not :=");
}
