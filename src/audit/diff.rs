//! Change summaries for audit entries
//!
//! Profiles are nested documents, so changes are reported with dotted paths
//! such as `father.phone` or `consents.photo`.

use serde::Serialize;
use serde_json::Value;

/// Summarize the differences between two serializable values.
///
/// Returns `None` when nothing changed or either value fails to serialize.
pub fn summarize_changes<T: Serialize>(before: &T, after: &T) -> Option<String> {
    let before = serde_json::to_value(before).ok()?;
    let after = serde_json::to_value(after).ok()?;

    let changes = changed_paths(&before, &after, "");
    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

/// List every changed leaf as `path: old -> new`
pub fn changed_paths(before: &Value, after: &Value, prefix: &str) -> Vec<String> {
    let mut changes = Vec::new();

    match (before, after) {
        (Value::Object(old), Value::Object(new)) => {
            for (key, old_val) in old {
                let path = join_path(prefix, key);
                match new.get(key) {
                    Some(new_val) => changes.extend(changed_paths(old_val, new_val, &path)),
                    None => changes.push(format!("{}: {} -> (removed)", path, render(old_val))),
                }
            }
            for (key, new_val) in new {
                if !old.contains_key(key) {
                    let path = join_path(prefix, key);
                    changes.push(format!("{}: (added) -> {}", path, render(new_val)));
                }
            }
        }
        (Value::Array(old), Value::Array(new)) if old.len() != new.len() => {
            changes.push(format!(
                "{}: [{} items] -> [{} items]",
                prefix,
                old.len(),
                new.len()
            ));
        }
        (Value::Array(old), Value::Array(new)) => {
            for (i, (o, n)) in old.iter().zip(new).enumerate() {
                changes.extend(changed_paths(o, n, &format!("{}[{}]", prefix, i)));
            }
        }
        _ if before != after => {
            changes.push(format!("{}: {} -> {}", prefix, render(before), render(after)));
        }
        _ => {}
    }

    changes
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) if s.chars().count() > 50 => {
            let head: String = s.chars().take(47).collect();
            format!("\"{}...\"", head)
        }
        Value::Array(items) => format!("[{} items]", items.len()),
        Value::Object(fields) => format!("{{{} fields}}", fields.len()),
        other => other.to_string(),
    }
}
