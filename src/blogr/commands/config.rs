use crate::commands::{CmdMessage, CmdResult};
use crate::config::BlogrConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = BlogrConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            if config.get(&key).is_none() {
                result.add_message(CmdMessage::warning(format!("Unknown config key: {}", key)));
            }
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!("{} = {}", key, value)));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn set_persists_the_value() {
        let dir = TempDir::new().unwrap();
        run(
            dir.path(),
            ConfigAction::Set("output-file".into(), "public/blog.html".into()),
        )
        .unwrap();

        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap().output_file, "public/blog.html");
    }

    #[test]
    fn unknown_set_key_fails() {
        let dir = TempDir::new().unwrap();
        assert!(run(dir.path(), ConfigAction::Set("bogus".into(), "x".into())).is_err());
    }

    #[test]
    fn show_unknown_key_warns() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::ShowKey("bogus".into())).unwrap();
        assert!(result.messages[0].content.contains("Unknown config key"));
    }
}
