//! Interactive Lab (v1)
//!
//! A terminal rendition of an interactive teaching page.
//!
//! # Architecture Overview
//!
//! ```text
//!    stdin / CLI args
//!          │
//!          ▼
//!    ┌───────────┐     ┌─────────────┐     ┌────────────────┐
//!    │  session  │────▶│ calculator  │     │    loading     │
//!    │  command  │────▶│   scope     │     │  controller    │──┐
//!    │  router   │────▶│   notice    │     │ (timer, watch) │  │ notices
//!    │           │────▶│   effects   │     └────────────────┘  │
//!    └─────┬─────┘     └─────────────┘              ▲          │
//!          │  ◀──────────────────────────────────────┼──────────┘
//!          ▼                                        toggle
//!    display panels → stdout
//!
//!    Cross-cutting: config (TOML) · observability (tracing, metrics) · lifecycle
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::io::BufReader;

use interactive_lab::calculator::{calculate_all, evaluate, parse_operand};
use interactive_lab::display::Panel;
use interactive_lab::lifecycle::{signals, startup::startup, Shutdown};
use interactive_lab::notice::{Modal, NoticeKind};
use interactive_lab::scope::ScopeContext;
use interactive_lab::session::{self, Session};

#[derive(Parser)]
#[command(name = "interactive-lab")]
#[command(about = "Calculator, scope demo, loading simulator and modals in the terminal", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Disable coloured output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all four operations on two operands
    Calc {
        #[arg(allow_hyphen_values = true)]
        lhs: String,
        #[arg(allow_hyphen_values = true)]
        rhs: String,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a single operation
    Eval {
        #[arg(allow_hyphen_values = true)]
        lhs: String,
        #[arg(allow_hyphen_values = true)]
        rhs: String,
        /// add, subtract, multiply or divide
        op: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the scope demonstration
    Scope,
    /// Show a notification modal
    Modal {
        /// success, warning or info
        kind: String,
    },
    /// Start an interactive session on stdin
    Session,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = startup(cli.config.as_deref())?;
    let color = !cli.no_color;

    match cli.command {
        Commands::Calc { lhs, rhs, json } => match calculate_all(&lhs, &rhs) {
            Ok(report) if json => println!("{}", serde_json::to_string_pretty(&report)?),
            Ok(report) => print!("{}", Panel::success(report.lines()).render(color)),
            Err(e) => {
                eprint!("{}", Panel::error(e.notice()).render(color));
                std::process::exit(1);
            }
        },
        Commands::Eval { lhs, rhs, op, json } => {
            let (a, b) = match parse_operand(&lhs).and_then(|a| parse_operand(&rhs).map(|b| (a, b))) {
                Ok(operands) => operands,
                Err(e) => {
                    eprint!("{}", Panel::error(e.notice()).render(color));
                    std::process::exit(1);
                }
            };
            let result = evaluate(a, b, &op);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", Panel::success(result.lines(a, b)).render(color));
            }
        }
        Commands::Scope => {
            let report = ScopeContext::new().demonstrate();
            print!("{}", Panel::info(report.lines()).render(color));
        }
        Commands::Modal { kind } => {
            let mut modal = Modal::new();
            modal.open(NoticeKind::from_tag(&kind));
            if let Some(panel) = modal.panel() {
                print!("{}", panel.render(color));
            }
        }
        Commands::Session => {
            let shutdown = Shutdown::new();
            signals::shutdown_on_ctrl_c(shutdown.clone());

            let (lab, notices) = Session::new(&config);
            let input = BufReader::new(tokio::io::stdin());
            session::run(
                lab,
                input,
                tokio::io::stdout(),
                notices,
                shutdown.subscribe(),
                color,
            )
            .await?;
        }
    }

    tracing::debug!("Exiting");
    Ok(())
}
