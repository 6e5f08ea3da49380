//! gridwalk: compare search strategies on an ASCII maze.

use std::io::{self, IsTerminal};

use gridwalk_lib::{Args, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = Args::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{}", Args::USAGE);
        return Ok(());
    }
    let stdout = io::stdout();
    args.color &= stdout.is_terminal();

    let mut out = stdout.lock();
    run(&args, &mut out)?;
    Ok(())
}
