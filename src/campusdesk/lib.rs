//! # Campusdesk Architecture
//!
//! Campusdesk is a small administration console for a campus website: an image
//! gallery and a faculty directory, both kept in a local durable key-value
//! store. It is a library with a CLI client, not the other way round.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, prints, picks exit codes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the record stores, uploader, notices and view       │
//! │  - Normalizes inputs (selectors → records)                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, upload, add/delete, listings                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  State Layer (records.rs, cell.rs, store/)                  │
//! │  - RecordStore over a DurableCell over a KeyValueStore      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout or stderr. Problems the
//! user should hear about travel back as [`notify::CmdMessage`]s inside the
//! command result; diagnostics go through `tracing`.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade and the current view
//! - [`commands`]: Gallery, faculty, dashboard, config and init logic
//! - [`records`]: Most-recent-first collections with id assignment
//! - [`cell`]: A value mirrored to one key of a durable store
//! - [`store`]: Storage abstraction and implementations
//! - [`upload`]: The image upload boundary and its mock
//! - [`model`]: Gallery items, faculty members and reference lists
//! - [`index`]: Display indexes and selectors
//! - [`notify`]: User-facing messages and the reporter seam
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and production wiring
//! - [`logging`]: Subscriber setup for the binary
//! - [`error`]: Error types

pub mod api;
pub mod cell;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod logging;
pub mod model;
pub mod notify;
pub mod records;
pub mod store;
pub mod upload;
