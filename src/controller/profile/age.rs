use serde_json::Value;
use std::collections::{HashSet, VecDeque};

use crate::model::nav::child_containers;
use crate::model::scalar::normalize_round;

const MEMBER_KEYS: [&str; 3] = ["MEMBER", "Member", "member"];
const AGE_KEYS: [&str; 3] = ["AGE", "Age", "age"];

/// Find the athlete's age anywhere in the profile document.
///
/// The search is breadth-first, seeded with the `MEMBER` sub-object(s)
/// when present so a member-scoped age beats a stray root-level one, and
/// falls back to the whole document otherwise. The first node whose
/// `AGE` field normalizes to a number wins; an invalid age field does not
/// stop the walk. A visited set keyed on node identity bounds the
/// traversal even if parts of the tree are shared.
pub fn resolve_age(doc: &Value) -> Option<i64> {
    let mut queue: VecDeque<&Value> = VecDeque::new();
    if let Some(map) = doc.as_object() {
        for key in MEMBER_KEYS {
            match map.get(key) {
                Some(Value::Null) | None => {}
                Some(v) => queue.push_back(v),
            }
        }
    }
    if queue.is_empty() {
        queue.push_back(doc);
    }

    let mut visited: HashSet<usize> = HashSet::new();
    while let Some(node) = queue.pop_front() {
        if !visited.insert(std::ptr::from_ref(node) as usize) {
            continue;
        }
        if let Some(map) = node.as_object() {
            for key in AGE_KEYS {
                if map.contains_key(key) {
                    if let Some(age) = normalize_round(map.get(key)) {
                        return Some(age);
                    }
                }
            }
        }
        for child in child_containers(node) {
            queue.push_back(child);
        }
    }
    None
}
