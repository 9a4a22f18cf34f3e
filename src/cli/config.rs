//! Configuration-related CLI commands.

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::CliContext;
use crate::utils::{Settings, DATA_DIR_ENV};

/// Configuration operations.
#[derive(Parser)]
pub struct ConfigCommand {
    /// Configuration subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

/// Configuration subcommands.
#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Shows where settings and data are read from.
    Show(ShowCommand),
}

/// Show command options.
#[derive(Parser)]
pub struct ShowCommand {}

impl ConfigCommand {
    /// Executes the config command.
    pub fn execute(self, ctx: &CliContext) -> Result<()> {
        match self.command {
            ConfigSubcommands::Show(show_cmd) => show_cmd.execute(ctx),
        }
    }
}

impl ShowCommand {
    /// Executes the show command.
    pub fn execute(self, ctx: &CliContext) -> Result<()> {
        let settings_path = Settings::get_settings_path()?;
        println!(
            "Settings file: {}{}",
            settings_path.display(),
            if settings_path.exists() { "" } else { " (not found)" }
        );
        println!("Data directory: {}", ctx.store.root().display());
        match ctx.settings.get_env_var(DATA_DIR_ENV) {
            Some(value) => println!("{DATA_DIR_ENV}: {value}"),
            None => println!("{DATA_DIR_ENV}: (unset)"),
        }
        Ok(())
    }
}
