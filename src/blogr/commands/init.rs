use crate::commands::{CmdMessage, CmdResult};
use crate::config::BlogrConfig;
use crate::error::Result;
use std::path::Path;

/// Creates the data directory and a default config. Does NOT write a post
/// list: an absent list is what makes first-run seeding fire.
pub fn run(data_dir: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if data_dir.join("config.json").exists() {
        result.add_message(CmdMessage::info(format!(
            "Already initialized at {}",
            data_dir.display()
        )));
        return Ok(result);
    }

    BlogrConfig::default().save(data_dir)?;
    result.add_message(CmdMessage::success(format!(
        "Initialized blogr store at {}",
        data_dir.display()
    )));
    Ok(result)
}
