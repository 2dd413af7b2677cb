// Unknown keys inside a field's #[env(...)] are rejected

use envrcconfig::EnvSpec;

#[derive(EnvSpec)]
struct Config {
    #[env(from_file)]
    pub secret: String,
}

fn main() {
    let config = Config { secret: String::new() };
    println!("{}", config.secret);
}
