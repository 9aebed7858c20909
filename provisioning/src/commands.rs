use anyhow::Context;
use clap::CommandFactory;
use clap_complete::Shell;
use provisioning_core::authorization::Principal;
use provisioning_core::ocs::OcsResult;
use serde::Serialize;
use thiserror::Error;

use crate::app_state::AppState;
use crate::cli::{Cli, Commands, OutputFormat};

pub mod apps;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Request failed with status {statuscode}: {message}")]
    Failed {
        statuscode: u16,
        message: String,
        /// Rendered envelope for JSON output, printed before exiting.
        body: Option<String>,
    },
}

/// Run a registry command and return what should be printed on stdout.
pub fn run(state: &mut AppState, cli: &Cli) -> anyhow::Result<String> {
    let principal = cli.user.as_deref().map(Principal::new);
    let principal = principal.as_ref();

    match &cli.command {
        Commands::List(cmd) => apps::list_apps(state, principal, cmd, cli.output),
        Commands::Info(cmd) => apps::info_app(state, principal, cmd, cli.output),
        Commands::Enable(cmd) => apps::enable_app(state, principal, cmd, cli.output),
        Commands::Disable(cmd) => apps::disable_app(state, principal, cmd, cli.output),
        Commands::Config => show_config(state, cli.output),
        Commands::Completion(cmd) => completion(cmd.shell),
    }
}

/// Shell completion script for the whole command line interface.
pub fn completion(shell: Shell) -> anyhow::Result<String> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    let mut script = Vec::new();
    clap_complete::generate(shell, &mut cmd, name, &mut script);
    String::from_utf8(script).context("Completion script is not valid UTF-8")
}

pub fn show_config(state: &AppState, output: OutputFormat) -> anyhow::Result<String> {
    match output {
        OutputFormat::Table => Ok(format!("{:#?}", state.settings)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&state.settings).context("Failed to serialize settings")
        }
    }
}

/// Render a controller result. Failures become [`CommandError::Failed`].
pub(crate) fn render<T: Serialize>(
    result: &OcsResult<T>,
    output: OutputFormat,
    format_table: impl FnOnce(&T) -> String,
) -> anyhow::Result<String> {
    let body = match output {
        OutputFormat::Json => {
            Some(serde_json::to_string_pretty(result).context("Failed to serialize result")?)
        }
        OutputFormat::Table => None,
    };

    match (result.data(), body) {
        (Some(data), None) if result.succeeded() => Ok(format_table(data)),
        (_, Some(body)) if result.succeeded() => Ok(body),
        (_, body) => Err(CommandError::Failed {
            statuscode: result.status_code(),
            message: result.message().to_string(),
            body,
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_lists_registry_commands() {
        let script = completion(Shell::Bash).unwrap();
        assert!(script.contains("provisioning"));
        assert!(script.contains("app:list"));
        assert!(script.contains("app:disable"));
    }
}
