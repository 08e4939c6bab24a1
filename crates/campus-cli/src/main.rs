//! # campus CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use campus_cli::groups::{run_groups, GroupsArgs};
use campus_cli::render::{run_render, RenderArgs};
use campus_cli::serve::{run_serve, ServeArgs};
use campus_cli::verbosity_filter;

/// Campus directory toolchain.
#[derive(Parser, Debug)]
#[command(name = "campus", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Split names into consecutive groups of a fixed size.
    Groups(GroupsArgs),

    /// Print markup for the sample directory.
    Render(RenderArgs),

    /// Run the HTTP API.
    Serve(ServeArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    campus_api::telemetry::init_tracing_with(verbosity_filter(cli.verbose).map(EnvFilter::new));

    let result = match cli.command {
        Commands::Groups(args) => run_groups(&args),
        Commands::Render(args) => run_render(&args),
        Commands::Serve(args) => run_serve(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
