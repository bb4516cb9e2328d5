use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::global_constants::{
    DEFAULT_RECEIVER_HOST, DEFAULT_RECEIVER_PORT, DEFAULT_RECEIVER_UPLOAD_DIR, ENV_RECEIVER_HOST,
    ENV_RECEIVER_PORT, ENV_RECEIVER_UPLOAD_DIR,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ReceiverConfig {
    pub host: String,
    pub port: u16,
    pub upload_dir: PathBuf,
}

/// Flags for the `serve` command. Each one overrides its environment variable.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Host to bind to (overrides SCREENSHOT_RECEIVER_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides SCREENSHOT_RECEIVER_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory received screenshots are written to (overrides SCREENSHOT_RECEIVER_UPLOAD_DIR)
    #[arg(long)]
    pub upload_dir: Option<PathBuf>,
}

impl ReceiverConfig {
    pub fn from_env_and_args(args: ServeArgs) -> Result<Self> {
        Self::resolve(args, |name| std::env::var(name).ok())
    }

    fn resolve(args: ServeArgs, read_env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let env_host = read_env(ENV_RECEIVER_HOST).unwrap_or_else(|| DEFAULT_RECEIVER_HOST.into());
        let env_port = match read_env(ENV_RECEIVER_PORT) {
            Some(value) => value
                .parse::<u16>()
                .with_context(|| format!("parsing {} value `{}`", ENV_RECEIVER_PORT, value))?,
            None => DEFAULT_RECEIVER_PORT,
        };
        let env_upload_dir = read_env(ENV_RECEIVER_UPLOAD_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RECEIVER_UPLOAD_DIR));

        Ok(Self {
            host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            upload_dir: args.upload_dir.unwrap_or(env_upload_dir),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
