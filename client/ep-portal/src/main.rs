//! ep - Employee portal CLI
//!
//! Drives the portal screens from the command line. The session token is
//! kept in `<config dir>/session.json` between runs.
//!
//! # Examples
//!
//! ```bash
//! # Sign in
//! ep login --email eve.holt@reqres.in --password cityslicka
//!
//! # Second page, filtered by name
//! ep users list --page 2 --search law
//!
//! # Rename an employee
//! ep users edit 2 --first-name Jane
//! ```

mod cli;
mod commands;
mod output;
mod user_commands;

use crate::{
    cli::Cli,
    commands::Commands,
    output::{OutputFormat, render_list, render_status, render_update, render_user},
    user_commands::UserCommands,
};

use ep_client::{Client, FileTokenStore, MemoryTokenStore, SessionContext};
use ep_config::Config;
use ep_portal::{
    App, LOGIN_PATH, NotificationKind, Notifier, PortalError, PortalResult, Route, USERS_PATH,
    logger,
};

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{debug, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load().and_then(|config| config.validate().map(|()| config)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let log_file = match config.log_file_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error resolving log file: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(config.logging.level, log_file, config.logging.colored) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    info!("Starting ep v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let session = if cli.ephemeral {
        SessionContext::new(MemoryTokenStore::new())
    } else {
        match config.session_path() {
            Ok(path) => {
                let store = FileTokenStore::new(path);
                debug!("Session file: {}", store.path().display());
                SessionContext::new(store)
            }
            Err(e) => {
                eprintln!("Error resolving session file: {e}");
                return ExitCode::FAILURE;
            }
        }
    };

    let api_url = cli
        .api_url
        .clone()
        .unwrap_or_else(|| config.api.base_url.clone());
    let client = Client::new(&api_url, config.api.api_key.as_deref()).with_session(session.clone());
    let mut app = App::new(Arc::new(client), session, Notifier::from_config(&config.ui));
    let format = OutputFormat::from_flags(cli.json, cli.pretty);

    let result = run(&mut app, cli.command, format, &api_url).await;

    let notifications = app.notifier_mut().drain();
    for notification in &notifications {
        eprintln!("{notification}");
    }

    match result {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("Command failed: {e}");
            // Screen failures were already shown as notifications
            if !notifications
                .iter()
                .any(|n| n.kind == NotificationKind::Error)
            {
                eprintln!("Error: {}", e.user_message());
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(
    app: &mut App,
    command: Commands,
    format: OutputFormat,
    api_url: &str,
) -> PortalResult<String> {
    match command {
        Commands::Login { email, password } => {
            // A stored token makes the login view forward to the list
            let navigated = app.navigate(LOGIN_PATH).await;
            if app.login_screen().is_none() {
                app.notifier_mut().info("Already signed in");
                return Ok(String::new());
            }
            navigated?;

            if let Err(e) = app.submit_login(&email, &password).await {
                if app.login_screen().is_some() {
                    return Err(e);
                }
                debug!("List fetch after login failed: {e}");
            }
            render_current_list(app, format)
        }

        Commands::Logout => {
            if !app.session().has_token() {
                app.notifier_mut().info("Not signed in");
                return Ok(String::new());
            }

            // Logout lives on the list view; a failed fetch there does not matter
            if let Err(e) = app.navigate(USERS_PATH).await {
                debug!("List fetch before logout failed: {e}");
            }
            app.logout().await?;
            Ok(String::new())
        }

        Commands::Users { action } => match action {
            UserCommands::List { page, search } => {
                open_protected(app, Route::Users).await?;
                if page != 1 {
                    app.go_to_page(page).await?;
                }
                if let Some(term) = search {
                    app.search(&term)?;
                }
                render_current_list(app, format)
            }

            UserCommands::Show { id } => {
                open_protected(app, Route::EditUser(id)).await?;
                match app.edit_user().and_then(|screen| screen.user()) {
                    Some(user) => Ok(render_user(user, format)?),
                    None => Ok(String::new()),
                }
            }

            UserCommands::Delete { id, page } => {
                open_protected(app, Route::Users).await?;
                if page != 1 {
                    app.go_to_page(page).await?;
                }
                app.delete_user(id).await?;
                render_current_list(app, format)
            }

            UserCommands::Edit {
                id,
                first_name,
                last_name,
                email,
            } => {
                open_protected(app, Route::EditUser(id)).await?;
                app.fill_edit_form(
                    first_name.as_deref(),
                    last_name.as_deref(),
                    email.as_deref(),
                )?;
                let sent = app.edit_user().map(|screen| screen.form().clone());

                // Landing on the list re-fetches it; only the update matters here
                if let Err(e) = app.submit_edit().await {
                    if app.edit_user().is_some() {
                        return Err(e);
                    }
                    debug!("List fetch after update failed: {e}");
                }

                match sent {
                    Some(update) => Ok(render_update(id, &update, format)?),
                    None => Ok(String::new()),
                }
            }
        },

        Commands::Status => Ok(render_status(app.session().has_token(), api_url, format)?),
    }
}

/// Navigate to a guarded route, failing if the guard sent us to login
async fn open_protected(app: &mut App, route: Route) -> PortalResult<()> {
    let navigation = app.navigate_to(route).await?;
    if navigation.is_redirect() {
        return Err(PortalError::unauthorized(route));
    }
    Ok(())
}

fn render_current_list(app: &App, format: OutputFormat) -> PortalResult<String> {
    match app.user_list() {
        Some(screen) => Ok(render_list(screen, format)?),
        None => Ok(String::new()),
    }
}
