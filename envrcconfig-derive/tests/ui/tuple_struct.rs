// Tuple structs have no field names to derive variable names from

use envrcconfig::EnvSpec;

#[derive(EnvSpec)]
struct Config(String);

fn main() {
    let config = Config(String::new());
    println!("{}", config.0);
}
