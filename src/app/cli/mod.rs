//! CLI Adapter.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::adapters::{ActionsReporter, HttpGitHubClient};
use crate::app::commands::dispatch;
use crate::app::config::ActionConfig;
use crate::app::{AppContext, RunSettings};
use crate::domain::AppError;
use crate::ports::Reporter;

#[derive(Parser)]
#[command(name = "issue-branch")]
#[command(version)]
#[command(
    about = "Create a branch for each opened issue and open a linked draft PR on push",
    long_about = None
)]
struct Cli {
    /// GitHub token used for API calls
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    token: Option<String>,
    /// Branch name template containing {number}, e.g. "issue-{number}"
    #[arg(long, env = "INPUT_NAME_PATTERN")]
    name_pattern: Option<String>,
    /// Log found pull requests and HTTP diagnostics (also enabled by RUNNER_DEBUG=1)
    #[arg(long)]
    debug: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let reporter = ActionsReporter::new();

    let exit_code = match load_config(&cli) {
        Ok(config) => {
            init_tracing(config.host.debug);
            execute(config, reporter.clone())
                .unwrap_or_else(|e| report_startup_failure(&reporter, &e))
        }
        Err(e) => {
            init_tracing(cli.debug);
            report_startup_failure(&reporter, &e)
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn load_config(cli: &Cli) -> Result<ActionConfig, AppError> {
    let mut config = ActionConfig::from_env(cli.token.clone(), cli.name_pattern.clone())?;
    config.host.debug |= cli.debug;
    Ok(config)
}

/// Report a failure raised before any workflow ran. Returns the exit code.
fn report_startup_failure(reporter: &impl Reporter, err: &AppError) -> i32 {
    if err.is_configuration() {
        tracing::debug!(error = ?err, "configuration rejected");
    } else {
        tracing::debug!(error = ?err, status = ?err.status(), "start-up failed");
    }
    reporter.fail(&err.to_string());
    1
}

fn execute(config: ActionConfig, reporter: ActionsReporter) -> Result<i32, AppError> {
    let github = HttpGitHubClient::new(config.inputs.token, &config.host.api)?;
    let settings = RunSettings {
        repository: config.host.repository,
        name_pattern: config.inputs.name_pattern,
        sha: config.host.sha,
        debug: config.host.debug,
    };
    let ctx = AppContext::new(github, reporter, settings);

    Ok(dispatch::run(&ctx, &config.host.trigger))
}

fn init_tracing(debug: bool) {
    let default_directive = if debug { "warn,issue_branch=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
