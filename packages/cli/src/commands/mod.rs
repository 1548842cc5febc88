pub mod edit;
pub mod init;
pub mod preview;
pub mod show;
pub mod vars;

pub use edit::{
    delete, insert, insert_variable, set, type_text, DeleteArgs, InsertArgs, SetArgs, TypeArgs,
    VarArgs,
};
pub use init::{init, InitArgs};
pub use preview::{preview, PreviewArgs};
pub use show::{show, ShowArgs};
pub use vars::{vars, VarsArgs};

use crate::config::Config;
use anyhow::Result;
use msgtpl_editor::{EditSession, FileStorage};
use tracing::debug;

/// Open the session the config points at; configured variable names take
/// precedence over stored ones
pub(crate) fn open_session(cwd: &str) -> Result<EditSession<FileStorage>> {
    let config = Config::load(cwd)?;
    debug!(storage_dir = %config.storage_dir, "Loaded config");
    let mut session = EditSession::open(FileStorage::new(config.get_storage_dir(cwd)))?;

    if let Some(names) = config.variable_names {
        session.variable_names = names;
    }

    Ok(session)
}
