use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tripmate::api::HttpAuthApi;
use tripmate::app::App;
use tripmate::auth::Submission;
use tripmate::cli::{Cli, Command};
use tripmate::config::Config;
use tripmate::context::ScreenContext;
use tripmate::form::{field, MessageKind};
use tripmate::logging::init_tracing;
use tripmate::nav::{ScreenId, Transition};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether the scripted submission succeeded.
async fn run(cli: Cli) -> Result<bool> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
        config.validate()?;
    }

    let api = HttpAuthApi::new(config.base_url()?);
    println!("auth service: {}", api.base_url());
    let ctx = ScreenContext::new(Arc::new(api), config.timing.clone());
    let mut app = App::new(ctx);
    println!("screen: {}", app.current());

    if cli.skip_splash {
        app.skip_splash();
    }
    wait_for_screen(&mut app, ScreenId::Login).await?;

    let fields: Vec<(&str, String)> = match &cli.command {
        Command::Login { email, password } => vec![
            (field::EMAIL, email.clone()),
            (field::PASSWORD, password.clone()),
        ],
        Command::Register {
            name,
            email,
            password,
            confirm,
        } => {
            let form = app.auth_form().context("login form not mounted")?;
            form.follow_link();
            wait_for_screen(&mut app, ScreenId::Register).await?;
            vec![
                (field::NAME, name.clone()),
                (field::EMAIL, email.clone()),
                (field::PASSWORD, password.clone()),
                (
                    field::CONFIRM_PASSWORD,
                    confirm.clone().unwrap_or_else(|| password.clone()),
                ),
            ]
        }
    };

    let form = app.auth_form().context("auth form not mounted")?;
    form.fill(fields.iter().map(|(name, value)| (*name, value.as_str())));
    let mut states = form.subscribe();

    match form.submit() {
        Submission::Started => {}
        Submission::Rejected(err) => {
            println!("error: {err}");
            return Ok(false);
        }
        Submission::Ignored => bail!("form refused the submission"),
    }

    let settled = states
        .wait_for(|state| state.is_settled())
        .await
        .context("form closed before the request settled")?
        .clone();

    let message = &settled.last_message;
    match message.kind {
        MessageKind::Success => println!("success: {}", message.text),
        _ => {
            println!("error: {}", message.text);
            return Ok(false);
        }
    }

    if let Some(transition) = app.next_transition().await {
        report(&transition);
    }
    println!(
        "session: {}",
        if app.context().session.is_authenticated() {
            "authenticated"
        } else {
            "signed out"
        }
    );
    Ok(true)
}

async fn wait_for_screen(app: &mut App, target: ScreenId) -> Result<()> {
    while app.current() != target {
        let transition = app
            .next_transition()
            .await
            .context("navigation stopped")?;
        report(&transition);
    }
    Ok(())
}

fn report(transition: &Transition) {
    println!(
        "screen: {} -> {} ({:?})",
        transition.from, transition.to, transition.kind
    );
}
