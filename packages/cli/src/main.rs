mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    delete, init, insert, insert_variable, preview, set, show, type_text, vars, DeleteArgs,
    InitArgs, InsertArgs, PreviewArgs, SetArgs, ShowArgs, TypeArgs, VarArgs, VarsArgs,
};

/// msgtpl - edit conditional message templates from the terminal
#[derive(Parser, Debug)]
#[command(name = "msgtpl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a config file and store the default template
    Init(InitArgs),

    /// Print the template tree
    Show(ShowArgs),

    /// List or replace the variable names
    Vars(VarsArgs),

    /// Split a field at the caret and insert a conditional block there
    Insert(InsertArgs),

    /// Replace the text of a field
    Set(SetArgs),

    /// Insert text at the caret
    Type(TypeArgs),

    /// Insert a {{variable}} placeholder at the caret
    Var(VarArgs),

    /// Delete a conditional block and everything nested in it
    Delete(DeleteArgs),

    /// Render the message with sample variable values
    Preview(PreviewArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Show(args) => show(args, &cwd),
        Command::Vars(args) => vars(args, &cwd),
        Command::Insert(args) => insert(args, &cwd),
        Command::Set(args) => set(args, &cwd),
        Command::Type(args) => type_text(args, &cwd),
        Command::Var(args) => insert_variable(args, &cwd),
        Command::Delete(args) => delete(args, &cwd),
        Command::Preview(args) => preview(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
