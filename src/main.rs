//! Twitch Clip Backup - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use twitch_clip_backup::{
    api::build_http_client,
    cli::{Args, ConsolePrompter},
    config::{validate_config, Config, CredentialStore},
    download::{enumerate_clips, export_clips, ExportOptions},
    error::{exit_codes, Result},
    fs::ExportLayout,
    output::{
        create_spinner, print_banner, print_error, print_export_stats, print_info, print_success,
    },
    session::{build_session, resolve_channel},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    let mut config = Config::default();
    args.merge_into_config(&mut config);
    validate_config(&config)?;

    let http = build_http_client()?;
    let store = CredentialStore::new(config.credentials_path.clone());
    let mut prompter = ConsolePrompter::new();

    // Credentials are validated by fetching a token before anything else
    let api = build_session(&http, &config.endpoints, &store, &mut prompter).await?;

    let identity = resolve_channel(&api, &mut prompter, config.channel.clone()).await?;
    print_info(&format!(
        "Backing up clips of {} ({})",
        identity.display_name, identity.id
    ));

    let spinner = config
        .show_progress
        .then(|| create_spinner("Fetching clip list..."));
    let clips = enumerate_clips(&api, &identity).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let clips = clips?;
    print_info(&format!("Found {} clips", clips.len()));

    let layout = ExportLayout::new(&config.output_directory(), &identity.name)?;
    let options = ExportOptions {
        on_error: config.on_error,
        show_progress: config.show_progress,
    };
    let summary = export_clips(&api, &layout, &clips, options).await?;

    print_success("Done!");
    print_export_stats(&summary);

    Ok(())
}
