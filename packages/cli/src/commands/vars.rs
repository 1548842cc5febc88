use anyhow::Result;
use clap::Args;
use colored::Colorize;

#[derive(Args, Debug)]
pub struct VarsArgs {
    /// Replace the stored variable names (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub set: Vec<String>,
}

pub fn vars(args: VarsArgs, cwd: &str) -> Result<()> {
    let mut session = super::open_session(cwd)?;

    if !args.set.is_empty() {
        session.set_variable_names(args.set)?;
        println!("{} Saved variable names", "✓".green());
    }

    let used = session.preview().variables();
    for name in &session.variable_names {
        if used.contains(name) {
            println!("  {} {}", name.bright_white().bold(), "(used)".dimmed());
        } else {
            println!("  {}", name);
        }
    }

    Ok(())
}
