use anyhow::{Context, Result};
use colored::Colorize;
use rusty_enrol::rules::Rules;
use rusty_enrol::EnrolConfig;

pub fn execute(config: &EnrolConfig) -> Result<()> {
    println!("{}", "Active validation rules".green().bold());
    println!();
    println!("{}", render(&config.rules)?);

    Ok(())
}

fn render(rules: &Rules) -> Result<String> {
    toml::to_string_pretty(rules).context("Failed to render validation rules")
}
