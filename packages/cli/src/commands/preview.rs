use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;

#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Value for a variable, as `name=value` (repeatable)
    #[arg(long = "var", value_parser = parse_assignment)]
    pub values: Vec<(String, String)>,

    /// Print each rendered segment on its own line
    #[arg(short, long)]
    pub segments: bool,
}

pub fn preview(args: PreviewArgs, cwd: &str) -> Result<()> {
    let session = super::open_session(cwd)?;
    let mut preview = session.preview();

    for (name, value) in args.values {
        if !preview.variable_names().contains(&name) {
            eprintln!("{} {} is not a known variable", "⚠️".yellow(), name.bright_white());
        }
        preview.set_value(name, value);
    }

    let unset: Vec<String> = preview
        .variables()
        .into_iter()
        .filter(|name| preview.value(name) == Some(format!("{{{{{}}}}}", name).as_str()))
        .collect();

    if args.segments {
        for (index, segment) in preview.render().iter().enumerate() {
            println!("{} {:?}", format!("[{}]", index).dimmed(), segment);
        }
    } else {
        println!("{}", preview.message());
    }

    if !unset.is_empty() {
        eprintln!();
        eprintln!("{} No value for: {}", "ℹ".blue(), unset.join(", "));
    }

    Ok(())
}

fn parse_assignment(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(anyhow!("expected name=value, got `{}`", raw)),
    }
}
