use log::debug;
use serde::{Serialize, Serializer};

use crate::ast::BecDocument;
use crate::error::BecError;
use crate::parser::Parser;
use crate::serialization::{render, DEFAULT_INDENT};
use crate::symbols::SymbolTable;

/// The result of a successful translation of a BEC document.
///
/// Contains the fully resolved root dictionary along with the constants
/// that were declared on the way, and provides methods for rendering the
/// document as JSON.
#[derive(Debug)]
pub struct Translation {
    pub document: BecDocument,
    pub symbols: SymbolTable,
}

impl Serialize for Translation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.document.root.serialize(serializer)
    }
}

impl Translation {
    /// Renders the translated document as pretty-printed JSON with the
    /// default indentation.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        render(&self.document.root, DEFAULT_INDENT)
    }
}

/// Translates a BEC source string into its document form.
///
/// This is the primary entry point for processing BEC data. Parsing,
/// constant resolution and expression evaluation happen in a single pass;
/// on success the returned `Translation` contains plain values only.
///
/// # Arguments
///
/// * `source` - The BEC source code as a string.
/// * `file_name` - The name of the file being translated (used for error reporting).
///
/// # Errors
///
/// Returns a `BecError` if the source fails to lex, parse or evaluate. The
/// error reported is the leftmost one in the source.
pub fn translate(source: &str, file_name: &str) -> Result<Translation, BecError> {
    debug!("translating {file_name} ({} bytes)", source.len());

    let mut parser = Parser::new_with_name(source, file_name.to_string())?;
    let document = parser.parse_document()?;
    let symbols = parser.into_symbols();

    debug!(
        "translated {file_name}: {} top-level entries, {} constants",
        document.root.len(),
        symbols.len()
    );

    Ok(Translation { document, symbols })
}

#[cfg(test)]
mod tests {
    use crate::translate;

    #[test]
    fn test_constants_feed_the_dictionary() {
        let source = "DIFFICULTY is 3\nbegin STUDENTS_COUNT := |DIFFICULTY * 1500|; end";
        let translation = translate(source, "test.bec").unwrap();

        let result: serde_json::Value =
            serde_json::from_str(&translation.to_json().unwrap()).unwrap();
        assert_eq!(result, serde_json::json!({ "STUDENTS_COUNT": 4500 }));
    }

    #[test]
    fn test_translation_serializes_as_its_root() {
        let translation = translate("begin A := 1; end", "test.bec").unwrap();
        let as_value = serde_json::to_value(&translation).unwrap();
        assert_eq!(as_value, serde_json::json!({ "A": 1 }));
    }
}
