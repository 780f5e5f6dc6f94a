use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use pingpong::responder::{EchoResponder, ResponderConfig};
use std::time::Duration;

/// Receives UDP probes, increments every payload byte, and sends each
/// datagram back to its sender.
///
/// `-h` selects the bind address (auto-help is `--help` only).
#[derive(Parser, Debug)]
#[command(name = "pong", version, about, disable_help_flag = true)]
struct Args {
    /// Address to bind to
    #[arg(short = 'h', long, default_value = "0.0.0.0")]
    host: String,

    /// Number of datagrams to serve before exiting
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Port to listen on
    #[arg(short = 'p', long, default_value_t = 1266)]
    port: u16,

    /// Receive deadline per datagram in milliseconds; waits forever when absent
    #[arg(short = 't', long, value_name = "MS")]
    timeout: Option<u64>,

    /// Print help
    #[arg(long, action = clap::ArgAction::HelpLong)]
    help: Option<bool>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter("pingpong=info,pong=info")
        .init();

    let args = Args::parse();

    let config = ResponderConfig {
        host: args.host,
        port: args.port,
        count: args.count,
        recv_timeout: args.timeout.map(Duration::from_millis),
        ..Default::default()
    };
    let count = config.count;
    let port = config.port;

    EchoResponder::run(config)
        .await
        .wrap_err("Failed to run echo responder")?;

    println!("nping: {count} pongport: {port}");

    Ok(())
}
