use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::ser::PrettyFormatter;

use crate::ast::Dictionary;

/// Indentation used for rendered JSON unless the caller picks another width.
pub const DEFAULT_INDENT: usize = 4;

impl Serialize for Dictionary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Entries go out in insertion order, which is why this is not a
        // derived impl over a sorted map.
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Renders a dictionary as pretty-printed JSON, indented `indent` spaces per
/// nesting level.
pub fn render(root: &Dictionary, indent: usize) -> Result<String, serde_json::Error> {
    let pad = " ".repeat(indent);
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(pad.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    root.serialize(&mut serializer)?;
    String::from_utf8(out).map_err(serde::ser::Error::custom)
}
