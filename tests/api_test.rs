use bec_core::api::translate;
use bec_core::ast::BecValue;

#[test]
fn test_constants_and_expressions() {
    let source = "\
DIFFICULTY is 3

begin
    STUDENTS_COUNT := |DIFFICULTY * 1500|;
end";

    let expected_json = serde_json::json!({
        "STUDENTS_COUNT": 4500
    });

    let translation = translate(source, "test.bec").unwrap();
    let result = translation.to_json().unwrap();
    let result_json: serde_json::Value = serde_json::from_str(&result).unwrap();

    assert_eq!(result_json, expected_json);
}

#[test]
fn test_nested_dictionaries() {
    let source = "\
begin
    A := begin
        B := 1;
    end;
end";

    let expected_json = serde_json::json!({
        "A": { "B": 1 }
    });

    let translation = translate(source, "test.bec").unwrap();
    let result_json: serde_json::Value =
        serde_json::from_str(&translation.to_json().unwrap()).unwrap();

    assert_eq!(result_json, expected_json);
}

#[test]
fn test_empty_input_translates_to_an_empty_object() {
    let translation = translate("", "test.bec").unwrap();
    assert_eq!(translation.to_json().unwrap(), "{}");
}

#[test]
fn test_empty_dictionary_translates_to_an_empty_object() {
    let translation = translate("begin end", "test.bec").unwrap();
    assert_eq!(translation.to_json().unwrap(), "{}");
}

#[test]
fn test_constants_without_a_dictionary() {
    let source = "A is 1\nB is q(two)";
    let translation = translate(source, "test.bec").unwrap();

    // Constants alone produce no output, but they are kept on the result.
    assert_eq!(translation.to_json().unwrap(), "{}");
    assert_eq!(translation.symbols.lookup("A"), Some(&BecValue::Number(1)));
    assert_eq!(
        translation.symbols.lookup("B"),
        Some(&BecValue::String("two".to_string()))
    );
}

#[test]
fn test_mixed_value_kinds() {
    let source = "\
TITLE is q(Compiler Construction)

begin
    COURSE := TITLE;
    CREDITS := 6;
    SCHEDULE := begin
        DAY := q(Monday);
        HOUR := 10;
    end;
end";

    let expected_json = serde_json::json!({
        "COURSE": "Compiler Construction",
        "CREDITS": 6,
        "SCHEDULE": {
            "DAY": "Monday",
            "HOUR": 10
        }
    });

    let translation = translate(source, "test.bec").unwrap();
    let result_json: serde_json::Value =
        serde_json::from_str(&translation.to_json().unwrap()).unwrap();

    assert_eq!(result_json, expected_json);
}

#[test]
fn test_expression_grouping() {
    let source = "A is 5\nB is 7\nbegin R := |(A + B) * 2 - 4|; end";
    let translation = translate(source, "test.bec").unwrap();
    let result_json: serde_json::Value =
        serde_json::from_str(&translation.to_json().unwrap()).unwrap();

    assert_eq!(result_json, serde_json::json!({ "R": 20 }));
}

#[test]
fn test_ord_results() {
    let source = "\
begin
    UPPER := |ord(q(A))|;
    LOWER := |ord(q(z))|;
    PAREN := |ord(q(())|;
end";

    let expected_json = serde_json::json!({
        "UPPER": 65,
        "LOWER": 122,
        "PAREN": 40
    });

    let translation = translate(source, "test.bec").unwrap();
    let result_json: serde_json::Value =
        serde_json::from_str(&translation.to_json().unwrap()).unwrap();

    assert_eq!(result_json, expected_json);
}

#[test]
fn test_strings_pass_through_verbatim() {
    let source = "begin NOTE := q(keys := values; and more); end";
    let translation = translate(source, "test.bec").unwrap();
    let result_json: serde_json::Value =
        serde_json::from_str(&translation.to_json().unwrap()).unwrap();

    assert_eq!(
        result_json,
        serde_json::json!({ "NOTE": "keys := values; and more" })
    );
}

#[test]
fn test_multi_line_string() {
    let source = "begin POEM := q(first\nsecond); end";
    let translation = translate(source, "test.bec").unwrap();
    let result_json: serde_json::Value =
        serde_json::from_str(&translation.to_json().unwrap()).unwrap();

    assert_eq!(result_json, serde_json::json!({ "POEM": "first\nsecond" }));
}

#[test]
fn test_output_keeps_key_order_and_indentation() {
    let source = "begin ZULU := 1; ALPHA := 2; end";
    let translation = translate(source, "test.bec").unwrap();

    // Keys must come out in document order, not sorted, and nesting is
    // indented by four spaces.
    assert_eq!(
        translation.to_json().unwrap(),
        "{\n    \"ZULU\": 1,\n    \"ALPHA\": 2\n}"
    );
}

#[test]
fn test_nested_output_indentation() {
    let source = "begin A := begin B := 1; end; end";
    let translation = translate(source, "test.bec").unwrap();

    assert_eq!(
        translation.to_json().unwrap(),
        "{\n    \"A\": {\n        \"B\": 1\n    }\n}"
    );
}

#[test]
fn test_symbols_are_reported() {
    let source = "DIFFICULTY is 3\nbegin STUDENTS_COUNT := |DIFFICULTY * 1500|; end";
    let translation = translate(source, "test.bec").unwrap();

    assert_eq!(translation.symbols.len(), 1);
    assert_eq!(
        translation.symbols.lookup("DIFFICULTY"),
        Some(&BecValue::Number(3))
    );
}

#[test]
fn test_deeply_nested_document() {
    let source = "\
begin
    L1 := begin
        L2 := begin
            L3 := begin
                DEPTH := 3;
            end;
        end;
    end;
end";

    let expected_json = serde_json::json!({
        "L1": { "L2": { "L3": { "DEPTH": 3 } } }
    });

    let translation = translate(source, "test.bec").unwrap();
    let result_json: serde_json::Value =
        serde_json::from_str(&translation.to_json().unwrap()).unwrap();

    assert_eq!(result_json, expected_json);
}
