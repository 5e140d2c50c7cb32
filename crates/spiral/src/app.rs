use std::io::Write;

use clap::CommandFactory;
use clap::Parser;
use clap_complete::generate;
use spiral_common::{color_init, exit_codes};
use tracing::debug;

use crate::commands::{Cli, Commands};
use crate::config::SpiralConfig;
use crate::error::CliError;
use crate::handlers::{self, DecodeArgs, EncodeArgs, HandlerContext, HandlerResult};
use crate::presenter::create_presenter;
use crate::telemetry;

const PROGRAM_NAME: &str = "spiral";

#[derive(Debug, Default)]
pub struct Application;

impl Application {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self) -> i32 {
        let cli = match Cli::try_parse() {
            Ok(cli) => cli,
            Err(e) => {
                let code = if e.use_stderr() {
                    exit_codes::USAGE
                } else {
                    exit_codes::SUCCESS
                };
                // --help and --version land here too
                let _ = e.print();
                return code;
            }
        };

        color_init(cli.no_color);
        let _telemetry = telemetry::init_tracing(if cli.verbose { "info" } else { "warn" });

        match self.execute(&cli) {
            Ok(()) => exit_codes::SUCCESS,
            Err(e) => self.handle_error(&cli, &e),
        }
    }

    fn execute(&self, cli: &Cli) -> HandlerResult {
        let format = cli.effective_format();
        debug!(command = ?cli.command, format = ?format, "CLI command parsed");

        let ctx = HandlerContext::new(format, SpiralConfig::from_env());
        match &cli.command {
            Commands::Encode {
                text,
                rows,
                cols,
                verify,
                raw,
            } => handlers::handle_encode(
                &ctx,
                &EncodeArgs {
                    text: text.clone(),
                    rows: *rows,
                    cols: *cols,
                    verify: *verify,
                    raw: *raw,
                },
            ),
            Commands::Decode {
                rows,
                count,
                placeholder,
                animate,
                interval_ms,
            } => handlers::handle_decode(
                &ctx,
                &DecodeArgs {
                    rows: rows.clone(),
                    count: *count,
                    placeholder: *placeholder,
                    animate: *animate,
                    interval_ms: *interval_ms,
                },
            ),
            Commands::Sample { animate } => handlers::handle_sample(&ctx, *animate),
            Commands::Completions { shell } => {
                let mut script = Vec::new();
                generate(*shell, &mut Cli::command(), PROGRAM_NAME, &mut script);
                std::io::stdout().lock().write_all(&script)?;
                Ok(())
            }
        }
    }

    fn handle_error(&self, cli: &Cli, error: &CliError) -> i32 {
        debug!(code = error.code(), category = %error.category(), "Command failed");
        // nothing left to report to if stderr is gone too
        let _ = create_presenter(&cli.effective_format())
            .present_error(&mut std::io::stderr().lock(), error);
        error.exit_code()
    }
}
