//! Command-line interface parsing for Parkscout
//!
//! This module handles parsing of CLI arguments using clap and resolves the
//! startup configuration: where the cache file lives and which MapQuest
//! credential to use. Running with no flags reproduces the default surface;
//! the credential then comes from the `MAPQUEST_API_KEY` environment
//! variable.

use std::env;
use std::path::PathBuf;

use clap::Parser;
use directories::ProjectDirs;
use thiserror::Error;

/// Environment variable consulted when --api-key is not given
const API_KEY_ENV: &str = "MAPQUEST_API_KEY";

/// File name of the cache inside the cache directory
const CACHE_FILE_NAME: &str = "cache.json";

/// Error types for startup configuration
#[derive(Debug, Error)]
pub enum CliError {
    /// No credential was supplied by flag or environment
    #[error(
        "No MapQuest API key: pass --api-key or set the MAPQUEST_API_KEY environment variable"
    )]
    MissingApiKey,
}

/// Parkscout - browse national park sites by state with nearby attractions
#[derive(Parser, Debug)]
#[command(name = "parkscout")]
#[command(about = "Browse U.S. national park sites by state with nearby attractions")]
#[command(version)]
pub struct Cli {
    /// Path of the cache file (defaults to cache.json in the user cache directory)
    #[arg(long, value_name = "FILE")]
    pub cache_file: Option<PathBuf>,

    /// MapQuest API key (defaults to the MAPQUEST_API_KEY environment variable)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// File backing the persistent cache
    pub cache_path: PathBuf,
    /// MapQuest API credential
    pub api_key: String,
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with the resolved cache path and credential
    /// * `Err(CliError)` if no API key is available from any source
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let api_key = resolve_api_key(cli.api_key.clone(), env::var(API_KEY_ENV).ok())?;
        let cache_path = cli.cache_file.clone().unwrap_or_else(default_cache_path);
        Ok(Self {
            cache_path,
            api_key,
        })
    }
}

/// Resolves the API credential from the flag and the environment, flag first
///
/// An empty string from either source counts as absent.
pub fn resolve_api_key(
    flag: Option<String>,
    env_value: Option<String>,
) -> Result<String, CliError> {
    flag.filter(|k| !k.is_empty())
        .or_else(|| env_value.filter(|k| !k.is_empty()))
        .ok_or(CliError::MissingApiKey)
}

/// Default cache file path
///
/// `cache.json` under the XDG cache directory (`~/.cache/parkscout/` on
/// Linux), falling back to a relative `cache.json` when no home directory
/// can be determined.
pub fn default_cache_path() -> PathBuf {
    ProjectDirs::from("", "", "parkscout")
        .map(|dirs| dirs.cache_dir().join(CACHE_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(CACHE_FILE_NAME))
}
