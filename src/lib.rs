//! # Songcraft
//!
//! Interactive songwriting toolkit on top of `songcraft-core`: a chord
//! reference for building progressions in any key, a library of named
//! progressions and song structures, and a timed object-writing exercise.
//!
//! ## Modules
//!
//! - `commands`: the REPL command registry and its handlers.
//! - `config`: JSON startup configuration.
//! - `logger`: `env_logger` setup behind the `log` macros.
//! - `repl`: the Read-Eval-Print Loop.

pub mod commands;
pub mod config;
pub mod logger;
pub mod repl;

pub use crate::config::SongcraftConfig;
