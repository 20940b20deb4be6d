//! `help-all`: every command's help text in one document.

use anyhow::Result;
use clap::{Command, CommandFactory, Parser};

/// Prints help for every command and subcommand.
#[derive(Parser)]
pub struct HelpCommand {}

/// Width of the rule printed between command sections.
const RULE_WIDTH: usize = 80;

/// Renders help for `root` and all of its descendants.
///
/// Subcommands are visited depth-first in name order so the output is
/// stable across runs and clap versions.
pub fn render_all_help(root: &Command) -> String {
    let mut sections = vec![section(root, None)];
    walk(root, root.get_name(), &mut sections);
    sections.join(&format!("\n\n{}\n\n", "=".repeat(RULE_WIDTH)))
}

fn walk(cmd: &Command, path: &str, sections: &mut Vec<String>) {
    let mut children: Vec<&Command> = cmd
        .get_subcommands()
        .filter(|c| c.get_name() != "help")
        .collect();
    children.sort_by(|a, b| a.get_name().cmp(b.get_name()));

    for child in children {
        let child_path = format!("{path} {}", child.get_name());
        sections.push(section(child, Some(&child_path)));
        walk(child, &child_path, sections);
    }
}

fn section(cmd: &Command, path: Option<&str>) -> String {
    let title = path.unwrap_or_else(|| cmd.get_name());
    let about = cmd
        .get_about()
        .map_or_else(|| "No description available".to_string(), ToString::to_string);
    format!("{title} - {about}\n\n{}", cmd.clone().render_help())
}

impl HelpCommand {
    /// Executes the help command.
    pub fn execute(self) -> Result<()> {
        println!("{}", render_all_help(&crate::cli::Cli::command()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;

    #[test]
    fn lists_every_command() {
        let output = render_all_help(&Cli::command());
        for command in ["analyze", "request", "journal", "config", "help-all"] {
            assert!(output.contains(&format!("kintsugi {command} - ")), "{command}");
        }
        assert!(output.contains("kintsugi config show - "));
        assert!(!output.contains("kintsugi help - "));
    }

    #[test]
    fn root_section_comes_first() {
        let output = render_all_help(&Cli::command());
        assert!(output.starts_with("kintsugi - "));
        assert!(output.contains(&"=".repeat(RULE_WIDTH)));
    }

    #[test]
    fn output_is_deterministic() {
        assert_eq!(
            render_all_help(&Cli::command()),
            render_all_help(&Cli::command())
        );
    }
}
