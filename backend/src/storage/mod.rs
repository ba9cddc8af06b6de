//! # Storage Module
//!
//! Handles all data persistence for the expense tracker.
//!
//! Every record type is kept as a single JSON document in a key-value
//! substrate. Ledgers (expenses, budgets) are rewritten in full on each
//! mutation; the gamification aggregate is rewritten after every change.
//!
//! ## Layout
//!
//! - **traits**: `KeyValueStore` plus one storage trait per record type
//! - **keys**: logical record keys and per-user namespacing
//! - **connection**: typed JSON load/save over any `KeyValueStore`
//! - **json_store**: one `<key>.json` file per key in a data directory
//! - **memory_store**: process-local map with an optional byte quota
//! - **repositories**: record-specific repositories used by the domain
//!
//! ## Consistency
//!
//! Stores are synchronous and lock nothing across processes. A
//! load-mutate-save sequence is not atomic, so two writers on the same
//! namespace lose updates (last write wins).

pub mod connection;
pub mod error;
pub mod json_store;
pub mod keys;
pub mod memory_store;
pub mod repositories;
pub mod traits;

pub use connection::StorageConnection;
pub use error::StorageError;
pub use json_store::JsonFileStore;
pub use keys::{RecordKind, StorageKeys};
pub use memory_store::MemoryStore;
pub use repositories::{BudgetRepository, ExpenseRepository, GamificationRepository, UserRepository};
pub use traits::{BudgetStorage, ExpenseStorage, GamificationStorage, KeyValueStore, UserStorage};
