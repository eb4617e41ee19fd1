use agentlog_core::cli::{
    CommandContext, ErrorsQuery, render_ai_help, run_doctor, run_errors, run_prime, run_tail,
};
use agentlog_core::conf::{LogPaths, load_config};
use agentlog_core::logging::{self, OutputMode, init_logging};
use agentlog_core::logs::{LogError, ShutdownHandle, error_hint};
use anyhow::{Context, Result};
use chrono::Utc;
use clap::{CommandFactory, Parser, Subcommand};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "agentlog",
    version,
    about = "agentlog: error visibility for AI agents in any development environment"
)]
struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    json: bool,

    /// Output machine-readable command metadata
    #[arg(long, global = true)]
    ai_help: bool,

    /// Base directory containing .agentlog/ (default: current directory)
    #[arg(long, global = true)]
    path: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Query and display errors from .agentlog/errors.jsonl
    Errors {
        /// Maximum number of errors to show (0 shows all)
        #[arg(long)]
        limit: Option<usize>,

        /// Filter by source (frontend, backend, cli, worker, test)
        #[arg(long, default_value = "")]
        source: String,

        /// Filter by error type
        #[arg(long = "type", default_value = "")]
        error_type: String,

        /// Show errors since time (e.g., '1h', '30m', '2024-01-01')
        #[arg(long)]
        since: Option<String>,
    },

    /// Watch .agentlog/errors.jsonl for new errors in real-time
    Tail,

    /// Check agentlog configuration and health
    Doctor,

    /// Output context summary for AI agent injection
    Prime,
}

fn main() {
    let cli = Cli::parse();

    if cli.ai_help {
        match render_ai_help() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("agentlog: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    init_logging();

    if let Err(e) = run(cli) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {e:#}");
        if let Some(hint) = e.downcast_ref::<LogError>().and_then(error_hint) {
            eprintln!();
            eprintln!("{hint}");
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let base_dir = match cli.path {
        Some(path) => path,
        None => std::env::current_dir().context("failed to get working directory")?,
    };
    let paths = LogPaths::new(&base_dir);
    let config = load_config(&paths)?;
    let ctx = CommandContext::new(paths, config, OutputMode::from_json_flag(cli.json))
        .with_color(logging::use_color());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Errors {
            limit,
            source,
            error_type,
            since,
        } => {
            let query = ErrorsQuery {
                source,
                error_type,
                since,
                limit: limit.unwrap_or(ctx.config.default_limit),
            };
            run_errors(&ctx, &query, &mut out)
        }

        Command::Tail => {
            let shutdown = ShutdownHandle::new();
            let signal = shutdown.subscribe();

            ctrlc::set_handler(move || {
                tracing::info!("shutdown requested");
                shutdown.trigger();
            })?;

            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
                .context("failed to build Tokio runtime")?;

            rt.block_on(run_tail(&ctx, signal, &mut out))
        }

        Command::Doctor => run_doctor(&ctx, &mut out).map(|_| ()),

        Command::Prime => run_prime(&ctx, Utc::now(), &mut out),
    }
}
