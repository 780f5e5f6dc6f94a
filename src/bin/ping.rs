use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use pingpong::probe::{ProbeConfig, Prober};
use std::num::NonZeroUsize;
use std::time::Duration;

/// Sends fixed-size UDP probes to an echo responder and measures round-trip
/// time per packet.
///
/// `-h` keeps its historical meaning (the target host), so auto-help is only
/// available as `--help`.
#[derive(Parser, Debug)]
#[command(name = "ping", version, about, disable_help_flag = true)]
struct Args {
    /// Host running the echo responder
    #[arg(short = 'h', long, default_value = "localhost")]
    host: String,

    /// Number of probe packets to send
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Port the echo responder listens on
    #[arg(short = 'p', long, default_value_t = 1266)]
    port: u16,

    /// Payload size in bytes
    #[arg(short = 's', long, default_value_t = NonZeroUsize::new(100).unwrap())]
    size: NonZeroUsize,

    /// Receive deadline per reply in milliseconds; waits forever when absent
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
        .with_env_filter("pingpong=info,ping=info")
        .init();

    let args = Args::parse();

    let config = ProbeConfig {
        host: args.host,
        port: args.port,
        count: args.count,
        payload_size: args.size.get(),
        recv_timeout: args.timeout.map(Duration::from_millis),
        ..Default::default()
    };
    let host = config.host.clone();
    let port = config.port;

    let report = Prober::new(config)
        .run()
        .await
        .wrap_err("Failed to run probe")?;

    if report.errors == 0 {
        println!("no errors detected");
    }

    println!(
        "nping: {} arraysize: {} errors: {} ponghost: {} pongport: {}",
        report.count, report.payload_size, report.errors, host, port
    );

    println!(
        "time to send {} packets of {} bytes {:.3} ms ({:.3} ms avg per packet)",
        report.count,
        report.payload_size,
        report.total_millis(),
        report.average_millis()
    );

    Ok(())
}
