//! Structural and text edits. Each command opens the stored session,
//! applies one edit and saves.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use msgtpl_editor::{Caret, EditSession, FieldRef, FileStorage};

#[derive(Args, Debug)]
pub struct InsertArgs {
    /// Where to split: `main@<offset>` or `<id>:<branch>@<offset>`
    pub caret: Caret,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Field to replace: `main` or `<id>:<branch>`
    pub field: FieldRef,

    /// New text
    pub text: String,
}

#[derive(Args, Debug)]
pub struct TypeArgs {
    /// Where to insert: `main@<offset>` or `<id>:<branch>@<offset>`
    pub caret: Caret,

    /// Text to insert
    pub text: String,
}

#[derive(Args, Debug)]
pub struct VarArgs {
    /// Where to insert: `main@<offset>` or `<id>:<branch>@<offset>`
    pub caret: Caret,

    /// Variable name
    pub name: String,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Id of the block to delete
    pub id: String,
}

pub fn insert(args: InsertArgs, cwd: &str) -> Result<()> {
    edit(cwd, |session| {
        let id = session.document.insert_conditional(&args.caret)?;
        Ok(format!("Inserted block {} at {}", id.bright_white().bold(), args.caret))
    })
}

pub fn set(args: SetArgs, cwd: &str) -> Result<()> {
    edit(cwd, |session| {
        session.document.update_field(args.field.clone(), args.text.as_str())?;
        Ok(format!("Updated {}", args.field))
    })
}

pub fn type_text(args: TypeArgs, cwd: &str) -> Result<()> {
    edit(cwd, |session| {
        session.document.insert_text(args.caret.clone(), args.text.as_str())?;
        Ok(format!("Inserted text at {}", args.caret))
    })
}

pub fn insert_variable(args: VarArgs, cwd: &str) -> Result<()> {
    edit(cwd, |session| {
        if !session.variable_names.contains(&args.name) {
            return Err(anyhow::anyhow!(
                "Unknown variable: {}. Available: {}",
                args.name,
                session.variable_names.join(", ")
            ));
        }

        let caret = session.document.insert_variable(&args.caret, &args.name)?;
        Ok(format!("Inserted {{{{{}}}}}, caret now at {}", args.name, caret))
    })
}

pub fn delete(args: DeleteArgs, cwd: &str) -> Result<()> {
    edit(cwd, |session| {
        session.document.delete_conditional(&args.id)?;
        Ok(format!("Deleted block {}", args.id.bright_white().bold()))
    })
}

fn edit<F>(cwd: &str, apply: F) -> Result<()>
where
    F: FnOnce(&mut EditSession<FileStorage>) -> Result<String>,
{
    let mut session = super::open_session(cwd)?;
    let summary = apply(&mut session)?;
    session.save()?;

    println!("{} {}", "✓".green(), summary);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{init, InitArgs};
    use msgtpl_editor::{Branch, Template};

    fn setup() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        init(
            InitArgs {
                storage_dir: ".msgtpl".to_string(),
                vars: Vec::new(),
                force: false,
            },
            dir.path().to_str().unwrap(),
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_edits_persist_between_commands() {
        let dir = setup();
        let cwd = dir.path().to_str().unwrap();

        insert(InsertArgs { caret: "main@7".parse().unwrap() }, cwd).unwrap();

        let session = crate::commands::open_session(cwd).unwrap();
        let template = session.document.template();
        assert_eq!(template.main, "Hello, ");
        let id = template.children[0].id.clone();

        set(
            SetArgs {
                field: FieldRef::node(&id, Branch::If),
                text: "{{company}}".to_string(),
            },
            cwd,
        )
        .unwrap();
        delete(DeleteArgs { id: id.clone() }, cwd).unwrap();

        let session = crate::commands::open_session(cwd).unwrap();
        assert_eq!(session.document.template(), &Template::default());
    }

    #[test]
    fn test_unknown_variable_is_rejected() {
        let dir = setup();
        let cwd = dir.path().to_str().unwrap();

        let result = insert_variable(
            VarArgs {
                caret: "main@0".parse().unwrap(),
                name: "nickname".to_string(),
            },
            cwd,
        );
        assert!(result.is_err());
    }
}
