use std::{env::var, sync::Arc};

use dotenv::dotenv;
use eyre::{bail, Context, Error};

const DEFAULT_PLAYER: &str = "steve";
const DEFAULT_RUST_LOG: &str = "info";

#[derive(Clone)]
pub struct Env(Arc<EnvInner>);

#[derive(Clone)]
pub struct EnvInner {
    player: String,
    pretty: bool,
    rust_log: String,
}

impl Env {
    pub fn player(&self) -> &str {
        &self.0.player
    }

    pub fn pretty(&self) -> bool {
        self.0.pretty
    }

    pub fn rust_log(&self) -> &str {
        &self.0.rust_log
    }

    pub fn load() -> Result<Env, Error> {
        if let Err(err) = dotenv() {
            if !err.not_found() {
                return Err(err).context("Failed to load .env file");
            }
            log::debug!("No .env file");
        }

        Ok(Env(Arc::new(EnvInner {
            player: var("SIM_PLAYER").unwrap_or_else(|_| DEFAULT_PLAYER.to_string()),
            pretty: match var("SIM_PRETTY") {
                Ok(val) => parse_flag(&val).context("SIM_PRETTY is not a flag")?,
                Err(_) => false,
            },
            rust_log: var("RUST_LOG").unwrap_or_else(|_| DEFAULT_RUST_LOG.to_string()),
        })))
    }
}

fn parse_flag(val: &str) -> Result<bool, Error> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("Unexpected flag value: {}", other),
    }
}
