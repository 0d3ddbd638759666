//! Persistence layer.
//!
//! Everything is stored as JSON documents in a path-addressed tree kept in a
//! local SQLite database. The attendance repository only depends on the
//! [`store::KeyValueStore`] trait, so tests run against the in-memory store.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use punchclock::db::attendance::Attendance;
//! use chrono::Local;
//!
//! let repo = Attendance::new("local")?;
//! let today = repo.fetch(Local::now().date_naive())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// SQLite connection and schema setup.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

/// Path-addressed document store trait and its implementations.
pub mod store;

/// Attendance days and weekly overtime summaries per employee.
pub mod attendance;
