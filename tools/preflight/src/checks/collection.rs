use std::io::{self, Write};

use serde_json::Value;

use crate::checks::CheckFindings;
use crate::reporter;

pub fn check(writer: &mut dyn Write, collection: &Value) -> io::Result<CheckFindings> {
    let mut findings = CheckFindings::default();

    match collection.get("info") {
        Some(info) => {
            let name = info.get("name").and_then(Value::as_str).unwrap_or("<unnamed>");
            reporter::print_note(writer, &format!("Collection name: {name}"))?;
        }
        None => findings.error(r#"Postman collection missing "info" section"#),
    }

    match collection.get("item").and_then(Value::as_array) {
        Some(items) => {
            reporter::print_note(writer, &format!("Found {} test groups", items.len()))?;
            reporter::print_note(
                writer,
                &format!("Found {} API test requests", count_requests(items)),
            )?;
        }
        None => findings.error(r#"Postman collection missing "item" array"#),
    }

    Ok(findings)
}

/// Leaf items carry a `request`; folders nest further `item` arrays. The
/// document is a strict tree, so plain recursion is safe.
fn count_requests(items: &[Value]) -> usize {
    let mut count = 0;
    for item in items {
        if item.get("request").is_some() {
            count += 1;
        }
        if let Some(children) = item.get("item").and_then(Value::as_array) {
            count += count_requests(children);
        }
    }
    count
}
