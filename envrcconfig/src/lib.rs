//! Sample configuration file generation from annotated structs
//!
//! `envrcconfig` reads the environment variable bindings declared on a struct
//! with `#[derive(EnvSpec)]` and writes sample files documenting them. It does
//! not load configuration at runtime.
//!
//! # Formats
//!
//! - **direnv**: `export KEY=value` lines for a `.envrc`
//! - **dotenv**: `KEY=value` lines for a `.env`
//! - **kubernetes**: a `ConfigMap` manifest
//! - **terraform**: `variable` blocks
//!
//! # Example
//!
//! ```rust
//! use envrcconfig::{process_spec, EnvSpec};
//!
//! #[derive(EnvSpec)]
//! #[env(prefix = "APP")]
//! struct Config {
//!     /// Address the server binds to
//!     #[env(default = "127.0.0.1:8080")]
//!     pub server_addr: String,
//!
//!     #[env(required, name = "DB_URL")]
//!     pub database_url: String,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! let vars = process_spec::<Config>(Config::PREFIX)?;
//! assert_eq!(vars[0].key, "APP_SERVER_ADDR");
//! assert_eq!(vars[0].desc, "Address the server binds to");
//! assert_eq!(vars[1].key, "APP_DB_URL");
//! assert!(vars[1].required);
//! # Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[env(name = "ALT")]`
//!
//! Replace the field name in the key. The prefix is still applied.
//!
//! ## `#[env(default = value)]`
//!
//! Default value shown in generated files. Strings, numbers and booleans are accepted.
//!
//! ## `#[env(required)]`
//!
//! Mark the variable as mandatory. Terraform output omits its default.
//!
//! ## `#[env(desc = "text")]`
//!
//! Description written as a comment. Doc comments are used when absent.
//!
//! ## `#[env(ignored)]`
//!
//! Leave the field out of generated files.
//!
//! # Generator binaries
//!
//! Rust types cannot be discovered at runtime, so a generator binary registers
//! the types it knows about and hands control to [`cli::main_with`]:
//!
//! ```rust,no_run
//! use envrcconfig::{cli, EnvSpec, Registry};
//!
//! #[derive(EnvSpec)]
//! struct Config {
//!     pub port: u16,
//! }
//!
//! fn main() -> std::process::ExitCode {
//!     let mut registry = Registry::new();
//!     registry.register::<Config>();
//!     cli::main_with(&registry)
//! }
//! ```

pub mod cli;
pub mod config;
mod error;
pub mod format;
pub mod logging;
pub mod registry;
pub mod render;
mod spec;
pub mod usage;
pub mod varinfo;

pub use config::Config;
pub use envrcconfig_derive::EnvSpec;
pub use error::{Error, Result};
pub use format::{Format, Formats};
pub use registry::{Registry, Target};
pub use spec::{EnvSpec, FieldSpec};
pub use usage::{FieldTable, UsageSource};
pub use varinfo::{process, process_spec, VarInfo};

/// Crate version, printed by `-version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
