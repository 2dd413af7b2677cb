// Enums cannot be described as a table of variables

use envrcconfig::EnvSpec;

#[derive(EnvSpec)]
enum Mode { Fast, Slow }

fn main() {
    let _ = (Mode::Fast, Mode::Slow);
}
