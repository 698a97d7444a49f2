//! # CLI Behavior
//!
//! The `jdnav` binary is one front-end for the library, standing in for the
//! launcher the tool started life in. It is the only place that knows about
//! terminal I/O, exit codes and logging setup.
//!
//! ## Naked Execution
//!
//! `jdnav 11.01` is the same as `jdnav find 11.01`. Looking up a folder is
//! nearly all of the usage, so it needs no subcommand. `jdnav` alone prints
//! help.
//!
//! Before clap sees the arguments, `find` is inserted when the first
//! positional is not a subcommand name (see `setup::with_default_command`).
//! Global options such as `--root` may therefore come before any
//! subcommand: `jdnav -r ~/jd parse 11` runs `parse`, not a lookup of
//! "parse 11".
//!
//! ## Results
//!
//! - Success: one row per folder (`name  path`), exit status 0.
//! - Resolver error: a single `Error: ...` line on stderr, exit status 1.
//! - Unparseable query: a warning on stderr, exit status 1.
//!
//! `--path-only` prints bare paths and `--json` prints a JSON document, for
//! scripts and shell functions such as `jd() { cd "$(jdnav -p "$@")"; }`.
//!
//! ## Actions
//!
//! `--open` and `--copy` act on the first folder found. A failing action is
//! a warning: the lookup itself succeeded, so the exit status stays 0.
//!
//! ## Root Folder
//!
//! Resolved per run: `--root`, then `$JDNAV_ROOT`, then `jdnav config root`.
//!
//! ## Logging
//!
//! `tracing` output goes to stderr. `-v` enables debug logs for jdnav;
//! otherwise `$JDNAV_LOG` is read as a filter (default `warn`).

mod commands;
mod render;
mod setup;

pub use commands::run;
