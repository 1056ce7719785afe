//! # Roster Architecture
//!
//! Roster keeps a school's student list: add, edit, delete, view, search and
//! filter students, export them to CSV and render a printable report. The
//! library holds all of that; the `roster` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables, prompts, exit codes    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, filtering, export; returns CmdResult         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StorageBackend trait: FsBackend, MemBackend              │
//! │  - StudentStore: write-through roster with rollback         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per user operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Student`, `Status`, `StudentId`, drafts and patches
//! - [`validation`]: Field rules for add and edit
//! - [`filter`]: Search plus grade/status filters
//! - [`export`]: CSV text and the printable HTML report
//! - [`config`]: Settings stored next to the roster
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod model;
pub mod store;
pub mod validation;
