//! Example printing the usage table and the descriptors parsed from it

use envrcconfig::{process_spec, EnvSpec, UsageSource};

#[derive(Debug, EnvSpec)]
struct Config {
    /// Address the server binds to
    #[env(default = "127.0.0.1:8080")]
    pub server_addr: String,

    #[env(required, name = "REDIS_URL")]
    pub cache_url: String,

    #[env(default = 10)]
    pub max_connections: u32,
}

fn main() -> anyhow::Result<()> {
    let mut table = Vec::new();
    Config::usage_source().write_usage("MYAPP", &mut table)?;

    println!("Usage table for prefix 'MYAPP':");
    print!("{}", String::from_utf8(table)?);

    println!();
    println!("Parsed descriptors:");
    for var in process_spec::<Config>("MYAPP")? {
        println!(
            "  {:<24} {:<18} default={:?} required={}",
            var.key, var.type_desc, var.default, var.required
        );
    }

    Ok(())
}
