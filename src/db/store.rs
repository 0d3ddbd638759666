//! Key-value document store.
//!
//! Records live in a tree addressed by slash-separated paths such as
//! `attendance/{employee}/{date}`. Each node holds a JSON document. The
//! [`KeyValueStore`] trait is what the rest of the application talks to;
//! [`SqliteStore`] persists to the local database and [`MemoryStore`] keeps
//! everything in a `BTreeMap`.
//!
//! ## Operations
//!
//! - `read` / `write` / `remove` a whole node
//! - `update` merges top-level keys into an existing object; a JSON `null`
//!   deletes the key, and a missing node is created
//! - `query_by_field` lists the direct children of a collection whose string
//!   field equals a value or falls in an inclusive range, ordered by that field

use crate::db::db::Db;
use anyhow::{bail, Result};
use rusqlite::{params, OptionalExtension};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Filter applied to one string field of each child document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldQuery {
    Equals(String),
    /// Inclusive on both ends.
    Between { start: String, end: String },
}

impl FieldQuery {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            FieldQuery::Equals(expected) => value == expected,
            FieldQuery::Between { start, end } => value >= start.as_str() && value <= end.as_str(),
        }
    }

    fn bounds(&self) -> (&str, &str) {
        match self {
            FieldQuery::Equals(expected) => (expected.as_str(), expected.as_str()),
            FieldQuery::Between { start, end } => (start.as_str(), end.as_str()),
        }
    }
}

/// Abstract document store the attendance repository is written against.
pub trait KeyValueStore {
    fn read(&self, path: &str) -> Result<Option<Value>>;
    fn write(&mut self, path: &str, value: &Value) -> Result<()>;
    fn update(&mut self, path: &str, partial: &Value) -> Result<()>;
    fn remove(&mut self, path: &str) -> Result<()>;
    /// Children of `collection` filtered on `field`, as `(path, value)` pairs.
    fn query_by_field(&self, collection: &str, field: &str, query: &FieldQuery) -> Result<Vec<(String, Value)>>;
}

/// Merges `partial` into `existing` following `update` semantics.
pub fn merge_update(existing: Option<Value>, partial: &Value) -> Result<Value> {
    let Value::Object(changes) = partial else {
        bail!("update expects a JSON object, got {}", partial);
    };

    let mut merged = match existing {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    };
    for (key, value) in changes {
        if value.is_null() {
            merged.remove(key);
        } else {
            merged.insert(key.clone(), value.clone());
        }
    }
    Ok(Value::Object(merged))
}

fn parent_of(path: &str) -> &str {
    path.rsplit_once('/').map_or("", |(parent, _)| parent)
}

fn normalize(path: &str) -> &str {
    path.trim_matches('/')
}

/// Store backed by the SQLite `nodes` table.
pub struct SqliteStore {
    db: Db,
}

impl SqliteStore {
    /// Opens the store in the application data directory.
    pub fn new() -> Result<Self> {
        Ok(Self { db: Db::new()? })
    }

    pub fn with_db(db: Db) -> Self {
        Self { db }
    }
}

impl KeyValueStore for SqliteStore {
    fn read(&self, path: &str) -> Result<Option<Value>> {
        let raw: Option<String> = self
            .db
            .conn
            .query_row("SELECT value FROM nodes WHERE path = ?1", params![normalize(path)], |row| row.get(0))
            .optional()?;

        Ok(raw.map(|s| serde_json::from_str(&s)).transpose()?)
    }

    fn write(&mut self, path: &str, value: &Value) -> Result<()> {
        let path = normalize(path);
        self.db.conn.execute(
            "INSERT INTO nodes (path, parent, value, updated_at) VALUES (?1, ?2, ?3, CURRENT_TIMESTAMP)
             ON CONFLICT(path) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![path, parent_of(path), serde_json::to_string(value)?],
        )?;
        tracing::trace!(path, "node written");
        Ok(())
    }

    fn update(&mut self, path: &str, partial: &Value) -> Result<()> {
        let merged = merge_update(self.read(path)?, partial)?;
        self.write(path, &merged)
    }

    fn remove(&mut self, path: &str) -> Result<()> {
        let path = normalize(path);
        let prefix = format!("{}/%", path);
        self.db
            .conn
            .execute("DELETE FROM nodes WHERE path = ?1 OR path LIKE ?2", params![path, prefix])?;
        tracing::trace!(path, "node removed");
        Ok(())
    }

    fn query_by_field(&self, collection: &str, field: &str, query: &FieldQuery) -> Result<Vec<(String, Value)>> {
        let json_path = format!("$.{}", field);
        let (start, end) = query.bounds();

        let mut stmt = self.db.conn.prepare(
            "SELECT path, value FROM nodes
             WHERE parent = ?1 AND json_extract(value, ?2) BETWEEN ?3 AND ?4
             ORDER BY json_extract(value, ?2), path",
        )?;
        let rows = stmt.query_map(params![normalize(collection), json_path, start, end], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut children = Vec::new();
        for row in rows {
            let (path, raw) = row?;
            children.push((path, serde_json::from_str(&raw)?));
        }
        Ok(children)
    }
}

/// Store kept entirely in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    nodes: BTreeMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, path: &str) -> Result<Option<Value>> {
        Ok(self.nodes.get(normalize(path)).cloned())
    }

    fn write(&mut self, path: &str, value: &Value) -> Result<()> {
        self.nodes.insert(normalize(path).to_string(), value.clone());
        Ok(())
    }

    fn update(&mut self, path: &str, partial: &Value) -> Result<()> {
        let merged = merge_update(self.read(path)?, partial)?;
        self.write(path, &merged)
    }

    fn remove(&mut self, path: &str) -> Result<()> {
        let path = normalize(path);
        let prefix = format!("{}/", path);
        self.nodes.retain(|key, _| key != path && !key.starts_with(&prefix));
        Ok(())
    }

    fn query_by_field(&self, collection: &str, field: &str, query: &FieldQuery) -> Result<Vec<(String, Value)>> {
        let collection = normalize(collection);
        let mut children: Vec<(String, Value)> = self
            .nodes
            .iter()
            .filter(|(path, _)| parent_of(path) == collection)
            .filter(|(_, value)| value.get(field).and_then(Value::as_str).is_some_and(|v| query.matches(v)))
            .map(|(path, value)| (path.clone(), value.clone()))
            .collect();

        children.sort_by(|(path_a, a), (path_b, b)| {
            let key_a = a.get(field).and_then(Value::as_str);
            let key_b = b.get(field).and_then(Value::as_str);
            key_a.cmp(&key_b).then_with(|| path_a.cmp(path_b))
        });
        Ok(children)
    }
}
