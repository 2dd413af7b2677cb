//! Generator binary for a small service configuration
//!
//! ```text
//! cargo run --example generate -- -formats dotenv,kubernetes generate,ServiceConfig
//! ```

use std::collections::HashMap;
use std::process::ExitCode;
use std::time::Duration;

use envrcconfig::{cli, EnvSpec, Registry};

#[derive(Debug, EnvSpec)]
#[env(prefix = "SERVICE")]
struct ServiceConfig {
    /// Address the HTTP listener binds to
    #[env(default = "0.0.0.0:8080")]
    pub listen_addr: String,

    /// Postgres connection string
    #[env(required, name = "DATABASE_URL")]
    pub db: String,

    #[env(default = 16, desc = "Maximum pooled connections")]
    pub max_connections: u32,

    #[env(default = "30s")]
    pub request_timeout: Duration,

    /// Extra labels attached to every metric
    pub labels: HashMap<String, String>,

    #[env(default = false)]
    pub debug: bool,
}

#[derive(Debug, EnvSpec)]
#[env(prefix = "WORKER")]
struct WorkerConfig {
    /// Queues to consume, in priority order
    #[env(default = "default,low")]
    pub queues: Vec<String>,

    #[env(default = 4)]
    pub concurrency: u8,
}

fn main() -> ExitCode {
    let mut registry = Registry::new();
    registry
        .register::<ServiceConfig>()
        .register::<WorkerConfig>();

    cli::main_with(&registry)
}
