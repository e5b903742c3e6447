//! Template store seam – named template records and the persistence
//! collaborator that keeps them.
//!
//! The pipeline itself never touches persistence; it consumes template
//! content as plain strings. The record and trait here are the contract the
//! surrounding service implements against a real database. [`MemoryStore`]
//! backs tests and the CLI demo.

use serde::{Deserialize, Serialize};

/// A stored named template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRecord {
    /// Store-assigned identifier; `None` until saved.
    pub id: Option<u64>,
    pub name: String,
    /// Raw editor HTML, placeholders and all.
    pub content: String,
}

/// Persistence collaborator for named templates.
pub trait TemplateStore {
    /// Persist a template and return the record with its assigned id.
    fn save(&mut self, name: &str, content: &str) -> Result<TemplateRecord, String>;

    /// All stored templates, in insertion order.
    fn list(&self) -> Result<Vec<TemplateRecord>, String>;
}

/// In-memory store with sequential ids.
#[derive(Debug, Default)]
pub struct MemoryStore {
    next_id: u64,
    records: Vec<TemplateRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TemplateStore for MemoryStore {
    fn save(&mut self, name: &str, content: &str) -> Result<TemplateRecord, String> {
        self.next_id += 1;
        let record = TemplateRecord {
            id: Some(self.next_id),
            name: name.to_string(),
            content: content.to_string(),
        };
        self.records.push(record.clone());
        Ok(record)
    }

    fn list(&self) -> Result<Vec<TemplateRecord>, String> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_assigns_sequential_ids() {
        let mut store = MemoryStore::new();
        let a = store.save("invoice", "<p>{{total}}</p>").unwrap();
        let b = store.save("order", "<p>{{date}}</p>").unwrap();
        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
    }

    #[test]
    fn list_returns_records_in_insertion_order() {
        let mut store = MemoryStore::new();
        store.save("first", "a").unwrap();
        store.save("second", "b").unwrap();
        let all = store.list().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "first");
        assert_eq!(all[1].name, "second");
    }

    #[test]
    fn record_json_roundtrip() {
        let record = TemplateRecord {
            id: Some(7),
            name: "notice".to_string(),
            content: "<p>{{body}}</p>".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: TemplateRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
