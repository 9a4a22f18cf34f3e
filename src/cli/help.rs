//! Help command implementation for comprehensive CLI documentation.

use anyhow::Result;
use clap::{builder::StyledStr, Command, CommandFactory, Parser};

/// Help command for displaying comprehensive usage information.
#[derive(Parser)]
pub struct HelpCommand {}

/// Help generator for creating comprehensive CLI documentation.
pub struct HelpGenerator {
    app: Command,
}

impl HelpGenerator {
    /// Creates a new help generator with the current CLI app.
    pub fn new() -> Self {
        Self {
            app: crate::cli::Cli::command(),
        }
    }
}

impl Default for HelpGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpGenerator {
    /// Generates comprehensive help for all commands.
    pub fn generate_all_help(&self) -> Result<String> {
        let mut help_sections = vec![self.render_command_help(&self.app, "")];
        self.collect_help_recursive(&self.app, "", &mut help_sections);

        let separator = format!("\n\n{}\n\n", "=".repeat(80));
        Ok(help_sections.join(&separator))
    }

    /// Recursively collects help for all subcommands, sorted by name so the
    /// output is stable.
    fn collect_help_recursive(&self, cmd: &Command, prefix: &str, help_sections: &mut Vec<String>) {
        let mut subcommands: Vec<_> = cmd.get_subcommands().collect();
        subcommands.sort_by_key(|c| c.get_name());

        for subcmd in subcommands {
            // clap's generated help
            if subcmd.get_name() == "help" {
                continue;
            }

            let current_path = if prefix.is_empty() {
                subcmd.get_name().to_string()
            } else {
                format!("{} {}", prefix, subcmd.get_name())
            };

            help_sections.push(self.render_command_help(subcmd, &current_path));
            self.collect_help_recursive(subcmd, &current_path, help_sections);
        }
    }

    /// Renders help for a specific command.
    fn render_command_help(&self, cmd: &Command, path: &str) -> String {
        let cmd_name = if path.is_empty() {
            cmd.get_name().to_string()
        } else {
            format!("placement-prep {path}")
        };

        let about = cmd
            .get_about()
            .map_or_else(|| "No description available".to_string(), StyledStr::to_string);

        format!("{cmd_name} - {about}\n\n{}", cmd.clone().render_help())
    }
}

impl HelpCommand {
    /// Executes the help command, showing comprehensive help for all commands.
    pub fn execute(self) -> Result<()> {
        let generator = HelpGenerator::new();
        let help_output = generator.generate_all_help()?;
        println!("{help_output}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_help() -> String {
        HelpGenerator::new().generate_all_help().unwrap()
    }

    #[test]
    fn app_name_is_binary_name() {
        assert_eq!(HelpGenerator::default().app.get_name(), "placement-prep");
    }

    #[test]
    fn lists_every_top_level_command() {
        let output = all_help();
        for name in [
            "analyze", "checklist", "config", "help-all", "history", "proof", "ship", "skills",
            "status",
        ] {
            assert!(
                output.contains(&format!("placement-prep {name} - ")),
                "missing {name}"
            );
        }
    }

    #[test]
    fn lists_nested_commands() {
        let output = all_help();
        assert!(output.contains("placement-prep history export"));
        assert!(output.contains("placement-prep skills toggle"));
        assert!(output.contains("placement-prep checklist reset"));
        assert!(output.contains("placement-prep proof copy"));
        assert!(output.contains("placement-prep config show"));
    }

    #[test]
    fn sections_are_separated_and_sorted() {
        let output = all_help();
        assert!(output.contains(&"=".repeat(80)));
        let analyze = output.find("placement-prep analyze - ").unwrap();
        let status = output.find("placement-prep status - ").unwrap();
        assert!(analyze < status);
    }

    #[test]
    fn output_is_deterministic() {
        assert_eq!(all_help(), all_help());
    }

    #[test]
    fn main_help_includes_about() {
        let gen = HelpGenerator::new();
        let help = gen.render_command_help(&gen.app, "");
        assert!(help.contains("placement readiness tracking"));
    }
}
