//! CLI module for the factory registry
//!
//! Provides subcommands for exercising the built-in catalogs:
//! - `catalogs`: list every catalog with its registered discriminators
//! - `create`: build one product from a catalog
//! - `form`: assemble, render and validate a form definition file

pub mod catalogs;
pub mod create;
pub mod form;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Factory Registry - build products from discriminators and attributes
#[derive(Parser)]
#[command(name = "factory-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List catalogs and their discriminators
    Catalogs,

    /// Create a product from a catalog
    Create(create::CreateArgs),

    /// Assemble a form from a JSON definition
    Form(form::FormArgs),
}

/// Load environment and configuration, then install logging
fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);
    config
}

/// Split a `key=value` argument
fn parse_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected key=value, got '{raw}'")),
    }
}
