//
//  yacon
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! The config file is edited by hand; these commands show where it lives and
//! what the effective settings are after flag and environment overrides.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::Config;

use super::GlobalOptions;

/// Inspect CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Show the effective configuration (token masked)
    Show,

    /// Show configuration file path
    Path,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Show => self.show(global),
            ConfigSubcommand::Path => self.path(global),
        }
    }

    fn show(&self, global: &GlobalOptions) -> Result<()> {
        let effective = Config {
            api: global.api_config()?,
        };
        print!("{}", effective.to_display_toml()?);

        if effective.api.token().is_none() {
            global
                .writer()
                .write_warning("no token configured; API commands will fail");
        }
        Ok(())
    }

    fn path(&self, global: &GlobalOptions) -> Result<()> {
        let path = match &global.config {
            Some(path) => path.clone(),
            None => Config::config_path()?,
        };
        println!("{}", path.display());
        Ok(())
    }
}
