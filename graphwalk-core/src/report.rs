//! Output formatting - plaintext and JSON.

use serde::Serialize;
use serde_json::{json, Map, Value};
use std::io::{self, Write};

use crate::error::{GraphwalkError, GraphwalkResult};

/// Writes a titled list, one item per line.
///
/// ```text
/// UNREACHABLE NODES (2):
/// - C
/// - D
/// ```
pub fn write_plain<W: Write>(out: &mut W, title: &str, items: &[String]) -> GraphwalkResult<()> {
    if items.is_empty() {
        writeln!(out, "No {} found.", title.to_lowercase())?;
    } else {
        writeln!(out, "{} ({}):", title.to_uppercase(), items.len())?;
        for item in items {
            writeln!(out, "- {}", item)?;
        }
    }
    Ok(())
}

/// Writes `{ "<key>": <value> }` as pretty JSON.
pub fn write_json<W: Write, V: Serialize + ?Sized>(
    out: &mut W,
    key: &str,
    value: &V,
) -> GraphwalkResult<()> {
    let value = serde_json::to_value(value)
        .map_err(|e| GraphwalkError::internal(format!("JSON serialization failed: {}", e)))?;
    let mut object = Map::new();
    object.insert(key.to_string(), value);
    let text = serde_json::to_string_pretty(&Value::Object(object))
        .map_err(|e| GraphwalkError::internal(format!("JSON serialization failed: {}", e)))?;
    writeln!(out, "{}", text)?;
    Ok(())
}

/// Writes a yes/no answer as `{ "from": .., "to": .., "reachable": .. }`.
pub fn write_reach_json<W: Write>(
    out: &mut W,
    from: &str,
    to: &str,
    reachable: bool,
) -> GraphwalkResult<()> {
    let text = serde_json::to_string_pretty(&json!({
        "from": from,
        "to": to,
        "reachable": reachable,
    }))
    .map_err(|e| GraphwalkError::internal(format!("JSON serialization failed: {}", e)))?;
    writeln!(out, "{}", text)?;
    Ok(())
}

/// Prints a titled list to stdout.
pub fn print_plain(title: &str, items: &[String]) -> GraphwalkResult<()> {
    write_plain(&mut io::stdout().lock(), title, items)
}

/// Prints `{ "<key>": <value> }` to stdout.
pub fn print_json<V: Serialize + ?Sized>(key: &str, value: &V) -> GraphwalkResult<()> {
    write_json(&mut io::stdout().lock(), key, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> GraphwalkResult<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_plain_list() {
        let items = vec!["C".to_string(), "D".to_string()];
        let text = render(|out| write_plain(out, "Unreachable nodes", &items));
        assert_eq!(text, "UNREACHABLE NODES (2):\n- C\n- D\n");
    }

    #[test]
    fn test_plain_empty() {
        let text = render(|out| write_plain(out, "Short words", &[]));
        assert_eq!(text, "No short words found.\n");
    }

    #[test]
    fn test_json_list() {
        let text = render(|out| write_json(out, "unreachable", &["C", "D"]));
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["unreachable"], json!(["C", "D"]));
    }

    #[test]
    fn test_json_scalar() {
        let text = render(|out| write_json(out, "longest", "elephant"));
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["longest"], "elephant");
    }

    #[test]
    fn test_reach_json() {
        let text = render(|out| write_reach_json(out, "SEA", "JFK", true));
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["reachable"], true);
        assert_eq!(parsed["from"], "SEA");
    }
}
