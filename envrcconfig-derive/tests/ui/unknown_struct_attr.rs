// Only prefix is accepted at struct level

use envrcconfig::EnvSpec;

#[derive(EnvSpec)]
#[env(prefix = "APP", separator = "__")]
struct Config {
    pub port: u16,
}

fn main() {
    let config = Config { port: 8080 };
    println!("{}", config.port);
}
