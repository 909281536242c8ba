//
//  yacon
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod api;
mod completion;
mod config;
mod department;
mod fields;
mod group;
mod user;

pub use api::ApiCommand;
pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use department::DepartmentCommand;
pub use fields::{BodyArgs, ListArgs};
pub use group::GroupCommand;
pub use user::UserCommand;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::DirectoryClient;
use crate::config::{ApiConfig, Config};
use crate::output::{OutputFormat, OutputWriter};

/// Yandex Connect Directory CLI
#[derive(Parser, Debug)]
#[command(
    name = "yacon",
    version,
    about = "Work with the Yandex Connect Directory from the command line",
    long_about = "yacon is a CLI for the Yandex Connect Directory API.\n\n\
                  It lists and edits departments, groups and users and prints the API's JSON.",
    propagate_version = true,
    after_help = "Use 'yacon <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// OAuth token for the Directory API
    #[arg(long, global = true, env = "YANDEX_CONNECT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// API base URL (default: https://api.directory.yandex.net/v6)
    #[arg(long, global = true, env = "YANDEX_CONNECT_HOST")]
    pub host: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Path to the config file
    #[arg(long, global = true, env = "YACON_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    pub compact: bool,

    /// Print only the value at a dotted path (e.g. .result.0.id)
    #[arg(long, global = true)]
    pub select: Option<String>,
}

impl GlobalOptions {
    /// Loads the config file named by `--config`, or the default one.
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }

    /// Effective API settings: config file values with flag/env overrides.
    pub fn api_config(&self) -> Result<ApiConfig> {
        let config = self.load_config()?;
        Ok(config.api.with_overrides(
            self.token.as_deref(),
            self.host.as_deref(),
            self.timeout,
        ))
    }

    pub fn client(&self) -> Result<DirectoryClient> {
        Ok(DirectoryClient::new(&self.api_config()?)?)
    }

    pub fn writer(&self) -> OutputWriter {
        let format = if self.compact {
            OutputFormat::Compact
        } else {
            OutputFormat::Pretty
        };
        OutputWriter::new(format).with_selector(self.select.clone())
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List and manage groups
    #[command(visible_alias = "groups")]
    Group(GroupCommand),

    /// List and manage departments
    #[command(visible_alias = "dept")]
    Department(DepartmentCommand),

    /// List and manage users
    #[command(visible_alias = "users")]
    User(UserCommand),

    /// Call any Directory API endpoint
    Api(ApiCommand),

    /// Inspect CLI configuration
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Print version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "yacon", "user", "id", "ivanov", "--token", "abc", "--compact",
        ])
        .unwrap();
        assert_eq!(cli.global.token.as_deref(), Some("abc"));
        assert!(cli.global.compact);
    }

    #[test]
    fn test_api_config_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\ntoken = \"file\"\ntimeout_secs = 30\n").unwrap();

        let global = GlobalOptions {
            token: Some("flag".to_string()),
            config: Some(path),
            ..Default::default()
        };
        let api = global.api_config().unwrap();
        assert_eq!(api.token(), Some("flag"));
        assert_eq!(api.timeout_secs, 30);
    }
}
