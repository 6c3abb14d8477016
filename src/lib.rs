//! # broom
//!
//! Rule-driven file housekeeping.
//!
//! broom reads a declarative TOML rule file and does the repetitive tidying
//! for you:
//!
//! - **Cleanup rules**: delete files matching glob patterns under a source
//!   directory (editor droppings, `.DS_Store`, stray archives)
//! - **Relocate rules**: copy or move matched files into a destination
//!   directory, never overwriting what is already there
//! - **Dry-run first**: a dry run reports exactly the actions a real run
//!   would take; only the filesystem mutation is withheld
//! - **Forward progress**: one colliding or undeletable file never aborts
//!   the batch; every decision is logged with its rule and paths
//! - **CLI as Unix citizen**: JSON output, pipe-friendly, cron-schedulable

pub mod cli;
pub mod common;
pub mod engine;
