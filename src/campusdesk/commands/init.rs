use crate::commands::{CmdMessage, CmdResult, DeskPaths};
use crate::error::Result;
use std::fs;

pub fn run(paths: &DeskPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.store_dir)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized campusdesk store at {}",
        paths.data_dir.display()
    )));
    Ok(result)
}
