mod container_cmd;
mod element;
mod error;
mod repl;
mod repl_cmd;
mod sequence_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::container_cmd::{ContainerSession, ContainerType};
use crate::sequence_cmd::SequenceSession;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter, such as `debug` or `lineal=info`.
    ///
    /// Overrides `RUST_LOG`. Logs go to stderr; the default is `warn`.
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Explore a sequence interactively.
    Sequence(SequenceSession),
    /// Explore a first-in, first-out queue interactively.
    Queue(ContainerSession),
    /// Explore a last-in, first-out stack interactively.
    Stack(ContainerSession),
    /// Explore a double-ended queue interactively.
    Deque(ContainerSession),
}

fn init_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());
    match cli.command {
        Commands::Sequence(sequence) => {
            sequence.run()?;
        }
        Commands::Queue(session) => {
            session.run(ContainerType::Queue)?;
        }
        Commands::Stack(session) => {
            session.run(ContainerType::Stack)?;
        }
        Commands::Deque(session) => {
            session.run(ContainerType::Deque)?;
        }
    }
    Ok(())
}
