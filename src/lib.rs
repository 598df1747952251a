//! # dupereg
//!
//! A content-addressed duplicate-file registry shared across multiple hosts.
//!
//! Each invocation processes exactly one file: its bytes are hashed, the
//! shared registry is consulted for identical content, and the file is
//! either recorded as new or reported as a duplicate of the copies that
//! already hold it.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌───────────┐   ┌───────────┐   ┌──────────────┐
//! │ Extract  │──▶│ Validate  │──▶│  Lookup   │──▶│ Insert/Report │
//! │ path+hash│   │ admission │   │ (size,sha)│   │   (SQLite)    │
//! └──────────┘   └───────────┘   └───────────┘   └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! dupereg init                  # create the registry database
//! dupereg register photo.jpg   # hash, check, and record one file
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types |
//! | [`digest`] | Streaming SHA-256 content digest |
//! | [`extract`] | Filesystem metadata extraction |
//! | [`validate`] | Admission validation |
//! | [`store`] | Registry store over SQLite |
//! | [`migrate`] | Schema creation |
//! | [`register`] | Registration flow |

pub mod config;
pub mod digest;
pub mod extract;
pub mod migrate;
pub mod models;
pub mod register;
pub mod store;
pub mod validate;
