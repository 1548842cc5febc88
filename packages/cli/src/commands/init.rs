use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use msgtpl_editor::{EditSession, FileStorage};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory to keep the template and variable names in
    #[arg(short, long, default_value = ".msgtpl")]
    pub storage_dir: String,

    /// Variable names to offer (comma separated); defaults to the built-in list
    #[arg(long, value_delimiter = ',')]
    pub vars: Vec<String>,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing message template...".bright_blue().bold());

    let config = Config {
        storage_dir: args.storage_dir.clone(),
        variable_names: None,
    };
    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    // Seed storage with the default template
    let mut session = EditSession::open(FileStorage::new(config.get_storage_dir(cwd)))?;
    if !args.vars.is_empty() {
        session.set_variable_names(args.vars.clone())?;
    }
    session.save()?;
    println!("  {} Created {}/", "✓".green(), args.storage_dir);

    println!();
    println!("{}", "✨ Ready!".green().bold());
    println!("   Variables: {}", session.variable_names.join(", "));
    println!("   Try: msgtpl show");

    Ok(())
}
