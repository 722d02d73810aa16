/*
[INPUT]:  Interactive user input via CLI
[OUTPUT]: Generated YAML dashboard configuration file
[POS]:    CLI initialization layer
[UPDATE]: When DashboardConfig schema changes
*/

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use console::style;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

use hecate_dashboard::FormVariant;
use hecate_dashboard::config::DashboardConfig;

const VARIANTS: [(&str, FormVariant); 3] = [
    ("default (centered popup)", FormVariant::Default),
    ("embedded (inline panel)", FormVariant::Embedded),
    ("fullscreen", FormVariant::Fullscreen),
];

pub fn run_init(output: PathBuf, force: bool) -> Result<()> {
    println!("{}", style("Welcome to Hecate Dashboard Init").bold().cyan());
    println!(
        "{}",
        style("This will guide you through creating a dashboard configuration.").dim()
    );

    let theme = ColorfulTheme::default();

    if output.exists() && !force {
        let overwrite = Confirm::with_theme(&theme)
            .with_prompt(format!("{} exists. Overwrite?", output.display()))
            .default(false)
            .interact()?;
        if !overwrite {
            println!("{}", style("Nothing written.").yellow());
            return Ok(());
        }
    }

    let mut config = DashboardConfig::default();

    println!("\n{}", style("--- Task API ---").bold());
    config.api.base_url = Input::with_theme(&theme)
        .with_prompt("Base URL")
        .default(config.api.base_url.clone())
        .interact_text()?;

    let token: String = Input::with_theme(&theme)
        .with_prompt("API token (leave empty for none)")
        .allow_empty(true)
        .interact_text()?;
    config.api.token = Some(token.trim().to_string()).filter(|token| !token.is_empty());

    println!("\n{}", style("--- Interface ---").bold());
    let labels: Vec<&str> = VARIANTS.iter().map(|(label, _)| *label).collect();
    let selection = Select::with_theme(&theme)
        .with_prompt("Task form layout")
        .items(&labels)
        .default(0)
        .interact()?;
    config.ui.form_variant = VARIANTS[selection].1;

    if let Err(err) = config.validate() {
        bail!("generated configuration is invalid: {err:#}");
    }

    let yaml = config.to_yaml()?;
    if let Some(parent) = output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(&output, yaml)
        .with_context(|| format!("failed to write config to {}", output.display()))?;

    println!("\n{}", style("SUCCESS!").bold().green());
    println!(
        "Configuration written to: {}",
        style(output.display()).cyan()
    );

    Ok(())
}
