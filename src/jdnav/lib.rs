//! # jdnav Architecture
//!
//! jdnav takes you from a Johnny.Decimal number to the folder it names.
//! Type `11.01` (or `1101`, `11 01`, `11.01 Invoices`) and get back
//! `~/jd/10-19 Admin/11 Finance/11.01 Invoices`.
//!
//! Like any launcher plugin, it is a library with a thin front-end. The
//! `jdnav` binary is one such front-end; nothing below `api.rs` knows about
//! terminals.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Arguments, rendering, exit codes, logging setup          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Holds store, root folder and config dir for a session    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - find / parse / config, each returning a CmdResult        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core: parser.rs → resolver.rs over store/ (FolderStore)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Query Lifecycle
//!
//! 1. [`parser::parse`] reads the leading digits into an [`model::Identifier`]
//!    holding an area, optionally a category, optionally an id.
//! 2. [`resolver::resolve`] narrows root → area → category → id, listing one
//!    directory per stage and stopping at the first stage with no match.
//! 3. The result is either the matching folders or one
//!    [`error::ResolveError`] saying which stage failed.
//!
//! ## Errors
//!
//! Two kinds, kept apart on purpose:
//! - [`error::ResolveError`]: the query could not be answered (no root set,
//!   no `10-19` folder, ...). Carried inside a `CmdResult`, shown to the user.
//! - [`error::JdError`]: the tool itself failed (unreadable config, clipboard
//!   tool missing). Returned as `Err`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: find, parse and config operations
//! - [`parser`]: Query text to identifier
//! - [`resolver`]: Identifier to folders
//! - [`store`]: Directory listing abstraction and implementations
//! - [`model`]: `Identifier`, `DirPattern`, `Folder`
//! - [`config`]: Persisted settings
//! - [`init`]: Config directory lookup and session setup
//! - [`clipboard`], [`opener`]: Copy a path, open a folder
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod opener;
pub mod parser;
pub mod resolver;
pub mod store;
