use clap::Parser;
use provisioning::cli::{Cli, Commands};
use provisioning::commands::{self, CommandError};
use provisioning::init_telemetry::init_tracing;
use provisioning::settings::config::Settings;
use provisioning::AppState;
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Load .env.local first, then .env (dotenvy doesn't override existing vars)
    dotenvy::from_path(".env.local").ok();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Completion scripts need neither configuration nor tracing.
    if let Commands::Completion(cmd) = &cli.command {
        print!("{}", commands::completion(cmd.shell)?);
        return Ok(());
    }

    let settings = Settings::new()?;
    init_tracing(settings.debug)?;
    let mut app_state = AppState::from_settings(settings);
    info!("Running command {:?} ...", &cli.command);

    match commands::run(&mut app_state, &cli) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(e) => {
            if let Some(CommandError::Failed {
                body: Some(body), ..
            }) = e.downcast_ref::<CommandError>()
            {
                println!("{body}");
            }
            Err(e)
        }
    }
}
