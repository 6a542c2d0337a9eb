//! Catalog test utilities

#![allow(dead_code)]

use serde_json::{Value, json};

/// Builder for catalog documents
#[derive(Default)]
pub struct CatalogBuilder {
    items: Vec<Value>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a software entry. Each release is `(major, minor, revision, severity)`.
    pub fn with_software(mut self, name: &str, releases: &[(u32, u32, &str, u64)]) -> Self {
        let versions: Vec<Value> = releases
            .iter()
            .map(|(major, minor, revision, severity)| {
                json!({
                    "major": major,
                    "minor": minor,
                    "revision": revision,
                    "severity": severity,
                })
            })
            .collect();

        self.items.push(json!({
            "name": name,
            "link": format!("https://example.com/download/{}", name.to_lowercase()),
            "versions": versions,
        }));
        self
    }

    /// Add an arbitrary (possibly invalid) item
    pub fn with_raw_item(mut self, item: Value) -> Self {
        self.items.push(item);
        self
    }

    pub fn build(self) -> Vec<u8> {
        serde_json::to_vec(&json!({ "software": self.items })).unwrap()
    }
}
