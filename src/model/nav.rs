use serde_json::Value;

/// Look a logical field up under several key spellings. The upstream feed
/// is converted from XML and key casing drifts between deployments
/// (`STATISTICS` / `Statistics` / `statistics`), so every lookup goes
/// through here instead of hardcoding one variant at call sites.
pub fn find_field<'a>(obj: &'a Value, candidates: &[&str]) -> Option<&'a Value> {
    let map = obj.as_object()?;
    candidates.iter().find_map(|key| map.get(*key))
}

/// Coerce a repeated element into a uniform list. The XML-to-JSON
/// conversion serializes a single child as a bare object and several
/// children as an array; callers never need to care which they got.
pub fn to_list(value: Option<&Value>) -> Vec<&Value> {
    match value {
        Some(Value::Array(items)) => items.iter().collect(),
        Some(v @ Value::Object(_)) => vec![v],
        _ => Vec::new(),
    }
}

/// Object and array children of a node, for breadth-first walks over the
/// document. Scalars have no children.
pub fn child_containers(node: &Value) -> Vec<&Value> {
    match node {
        Value::Object(map) => map
            .values()
            .filter(|v| v.is_object() || v.is_array())
            .collect(),
        Value::Array(items) => items
            .iter()
            .filter(|v| v.is_object() || v.is_array())
            .collect(),
        _ => Vec::new(),
    }
}
