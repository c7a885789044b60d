use clap::{Parser, Subcommand};

use freeport::Config;

#[derive(Subcommand)]
enum Command {
    /// Find the first available port from the candidate list
    #[clap(name = "resolve", alias = "")]
    Resolve {
        /// Candidate ports to try, in priority order
        ports: Vec<u16>,
        /// Interface to probe instead of all interfaces
        #[clap(long)]
        host: Option<String>,
    },
    /// Check whether a single port is currently available
    Probe {
        /// Port to check
        port: u16,
        /// Interface to probe instead of all interfaces
        #[clap(long)]
        host: Option<String>,
    },
}

#[derive(Parser)]
#[clap(version, author, about, long_about = None)]
struct Cli {
    /// Enable trace logging
    #[clap(long)]
    trace: bool,
    /// Enable debug logging
    #[clap(long)]
    debug: bool,
    #[clap(subcommand)]
    command: Option<Command>,
}

pub fn exec() {
    let cli = Cli::parse();
    let mut builder = env_logger::Builder::from_default_env();
    builder
        .format_timestamp(None)
        .format_level(false)
        .format_target(false);

    if cli.trace {
        builder.filter_level(log::LevelFilter::Trace);
    } else if cli.debug {
        builder.filter_level(log::LevelFilter::Debug);
    } else {
        builder.filter_level(log::LevelFilter::Warn);
    }

    builder.init();

    match cli.command.unwrap_or(Command::Resolve {
        ports: Vec::new(),
        host: None,
    }) {
        Command::Resolve { ports, host } => {
            let config = Config::load_or_create().expect("Failed to load config");
            let host = host.unwrap_or_else(|| config.host());
            let candidates = if ports.is_empty() {
                config.candidates()
            } else {
                ports
            };

            let port = freeport::resolve(&host, &candidates).unwrap_or_else(|err| {
                eprintln!("Failed to resolve a port: {err}");
                std::process::exit(1);
            });

            // Bare port on stdout so the result can be captured by scripts.
            println!("{port}");
        }
        Command::Probe { port, host } => {
            let config = Config::load_or_create().expect("Failed to load config");
            let host = host.unwrap_or_else(|| config.host());
            if freeport::probe(&host, port) {
                println!("available");
            } else {
                println!("in use");
                std::process::exit(1);
            }
        }
    }
}
