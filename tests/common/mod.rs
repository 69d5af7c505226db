use serde_json::Value;

pub const PROFILE_FIXTURE: &str = include_str!("../fixtures/profile.json");

#[allow(dead_code)]
pub fn profile_doc() -> Value {
    serde_json::from_str(PROFILE_FIXTURE).expect("fixture must be valid JSON")
}

#[allow(dead_code)]
pub fn descriptions(entries: &[fairway_site::model::profile::StatEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.description.as_str()).collect()
}
