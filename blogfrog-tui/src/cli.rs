//! Command line arguments

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use blogfrog_core::config::DEFAULT_SERVICE_URL;
use blogfrog_core::{ApiError, ClientConfig, Route};

/// BlogFrog - browse and write blog posts from the terminal
#[derive(Parser, Debug)]
#[command(name = "blogfrog")]
#[command(version, about)]
pub struct Args {
    /// Base URL of the BlogFrog REST service
    #[arg(long, env = "BLOGFROG_SERVICE_URL", default_value = DEFAULT_SERVICE_URL)]
    pub service_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "BLOGFROG_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Page to open first: "/", "/detail/<id>" or "/add"
    #[arg(long, default_value = "/")]
    pub open: Route,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, env = "BLOGFROG_LOG")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn client_config(&self) -> Result<ClientConfig, ApiError> {
        ClientConfig::new(&self.service_url, Duration::from_secs(self.timeout_secs))
    }
}
