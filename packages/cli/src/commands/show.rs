use anyhow::Result;
use clap::Args;
use colored::Colorize;
use msgtpl_editor::{Branch, IfThenElse};

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Print the stored JSON instead of the tree
    #[arg(long)]
    pub json: bool,
}

pub fn show(args: ShowArgs, cwd: &str) -> Result<()> {
    let session = super::open_session(cwd)?;

    if args.json {
        println!("{}", session.document.to_json());
        return Ok(());
    }

    let template = session.document.template();
    println!("{} {:?}", "main".bright_blue().bold(), template.main);
    for node in &template.children {
        print_node(node, 1);
    }

    if session.has_unsaved_changes() {
        println!();
        println!("{} template has not been saved yet", "⚠️".yellow());
    }

    Ok(())
}

fn print_node(node: &IfThenElse, depth: usize) {
    let indent = "  ".repeat(depth);

    println!(
        "{}{} {} {}",
        indent,
        "▸".dimmed(),
        node.id.bright_white().bold(),
        format!("(under {})", node.parent).dimmed()
    );

    for branch in Branch::ALL {
        println!(
            "{}  {:<8} {:?}",
            indent,
            branch.as_str().to_uppercase().cyan(),
            node.text(branch)
        );
        for child in node.children_in(branch) {
            print_node(child, depth + 2);
        }
    }
}
