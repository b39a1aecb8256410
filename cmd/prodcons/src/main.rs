//! prodcons - Producer/consumer bounded buffer demo.
//!
//! Runs one producer thread and one consumer thread against a shared
//! bounded buffer and writes an audit log line for every completed
//! operation.

use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use prodcons_buffer::{BoundedBuffer, FileAuditLog, run_consumer, run_producer};

/// Producer/consumer bounded buffer demo.
///
/// The producer must issue at least as many operations as the
/// consumer, or the consumer blocks forever once the producer is done.
#[derive(Parser, Debug)]
#[command(name = "prodcons")]
#[command(about = "Producer/consumer bounded buffer demo with an audit log")]
#[command(version)]
struct Args {
    /// Buffer capacity in slots
    #[arg(long, default_value_t = 7)]
    capacity: usize,

    /// Number of produce operations
    #[arg(long, default_value_t = 15)]
    produce: usize,

    /// Number of consume operations (must not exceed --produce)
    #[arg(long, default_value_t = 12)]
    consume: usize,

    /// Audit log file path (created or truncated)
    #[arg(long, default_value = "log_produtor_consumidor.txt")]
    log: PathBuf,

    /// Pause between produce operations, in milliseconds
    #[arg(long, default_value_t = 100)]
    producer_pause_ms: u64,

    /// Pause between consume operations, in milliseconds
    #[arg(long, default_value_t = 150)]
    consumer_pause_ms: u64,

    /// Verbose output
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    let log = Arc::new(
        FileAuditLog::create(&args.log)
            .with_context(|| format!("opening audit log {}", args.log.display()))?,
    );
    let buffer = Arc::new(BoundedBuffer::new(args.capacity, log.clone()));

    let producer = {
        let buffer = Arc::clone(&buffer);
        let count = args.produce;
        let pause = Duration::from_millis(args.producer_pause_ms);
        thread::Builder::new()
            .name("produtor".into())
            .spawn(move || run_producer(&buffer, count, pause))
            .context("spawning producer thread")?
    };
    let consumer = {
        let buffer = Arc::clone(&buffer);
        let count = args.consume;
        let pause = Duration::from_millis(args.consumer_pause_ms);
        thread::Builder::new()
            .name("consumidor".into())
            .spawn(move || run_consumer(&buffer, count, pause))
            .context("spawning consumer thread")?
    };

    let produced = producer
        .join()
        .map_err(|_| anyhow!("producer thread panicked"))?;
    let consumed = consumer
        .join()
        .map_err(|_| anyhow!("consumer thread panicked"))?;

    log.close().context("closing audit log")?;

    println!(
        "done: produced {}, consumed {}, final occupancy {}, audit log at {}",
        produced,
        consumed,
        buffer.occupancy(),
        args.log.display()
    );
    Ok(())
}
