use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "provisioning")]
#[command(about = "Inspect and manage the installed app registry")]
#[command(version)]
pub struct Cli {
    /// User the request is made for, must be a member of the admin group
    #[arg(long, env = "PROVISIONING_USER")]
    pub user: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List installed apps
    #[command(name = "app:list")]
    List(ListCommand),
    /// Get info of an installed app
    #[command(name = "app:info")]
    Info(AppIdCommand),
    /// Enable an installed app for this invocation
    #[command(name = "app:enable")]
    Enable(AppIdCommand),
    /// Disable an installed app for this invocation
    #[command(name = "app:disable")]
    Disable(AppIdCommand),
    /// Show current configuration and exit
    #[command(name = "config")]
    Config,
    /// Show shell completion script.
    #[command(name = "completion")]
    Completion(CompletionCommand),
}

#[derive(Debug, Parser)]
pub struct ListCommand {
    /// One of all, enabled or disabled
    #[arg(long)]
    pub filter: Option<String>,
}

#[derive(Debug, Parser)]
pub struct AppIdCommand {
    /// Id of the app
    pub app_id: String,
}

#[derive(Debug, Parser)]
pub struct CompletionCommand {
    #[arg(value_enum)]
    pub shell: Shell,
}
