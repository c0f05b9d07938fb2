//! # Garage Architecture
//!
//! Garage is a **UI-agnostic car catalog library**. It keeps named save files, each
//! holding an ordered list of cars (name, optional photo, free-form details), and
//! mirrors every change into a local key-value store. The `garage` binary is just one
//! client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, confirms deletes, renders car lists    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (display indexes → list positions)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business operations returning `CmdResult`                │
//! │  - File interchange (export/import) and image intake        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - CatalogStore: sole owner of the save-file mapping        │
//! │  - StorageBackend trait: FsBackend, MemBackend              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Positions, not ids
//!
//! Cars and details are addressed by their position in the owning list. Deleting an
//! entry shifts every later entry down by one, so a position is only meaningful
//! against the state it was read from. The CLI shows 1-based indexes; [`index`]
//! converts them to the 0-based positions the store works with.
//!
//! ## Transactions
//!
//! Every mutating store operation works on a copy of the mapping, serializes it,
//! writes it through the backend, and only then swaps it in. A rejected call (bad
//! name, missing index, failed write, malformed import) changes nothing.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: `CatalogStore` and storage backends
//! - [`model`]: Core data types (`Car`, `Catalog`)
//! - [`index`]: 1-based display indexes
//! - [`photo`]: Image files to self-contained data URLs and back
//! - [`config`]: Configuration management
//! - [`init`]: Data directory discovery and context setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod photo;
pub mod store;
