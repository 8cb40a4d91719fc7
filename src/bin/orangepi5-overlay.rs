use std::io;

use anyhow::Result;
use orangepi5_overlay::{adapter, BoardInstaller};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    adapter::execute(&BoardInstaller, &args, io::stdin().lock(), io::stdout().lock())
}
