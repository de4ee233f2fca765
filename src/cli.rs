use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::API_URL_ENV;

#[derive(Parser, Debug)]
#[command(name = "tripmate", about = "Drive the travel app's auth flow against a live server")]
pub struct Cli {
    /// Config file (default: the platform config dir).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the auth service base URL.
    #[arg(long, env = API_URL_ENV)]
    pub api_url: Option<String>,

    /// Leave the splash screen immediately.
    #[arg(long)]
    pub skip_splash: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Submit the login form.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Open the sign-up form and submit it.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Defaults to the password.
        #[arg(long)]
        confirm: Option<String>,
    },
}
