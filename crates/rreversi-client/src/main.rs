// Reversi game-server client: connects the engine core to a server over TCP.

mod protocol;
mod session;

use std::net::TcpStream;

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server port
    #[arg(default_value_t = 1337)]
    port: u16,

    /// Server host
    #[arg(default_value = "localhost")]
    host: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .init();

    if let Err(err) = run(&args) {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let addr = format!("{}:{}", args.host, args.port);
    let stream = TcpStream::connect(&addr).with_context(|| format!("connect to {addr}"))?;
    log::info!("connected to {addr}");
    session::run(stream)
}
