use crate::commands::{CmdMessage, CmdResult, DeskPaths};
use crate::config::{DeskConfig, KEYS};
use crate::error::Result;
use tracing::info;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads `config.json` once, applies the action and writes it back only when
/// a value actually changed. Bad keys and values become error messages.
pub fn run(paths: &DeskPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = DeskConfig::load(&paths.data_dir)?;

    let message = match action {
        ConfigAction::ShowAll => return Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Some(value) => CmdMessage::info(value),
            None => unknown_key(&key),
        },
        ConfigAction::Set(key, value) => {
            if config.get(&key).is_none() {
                unknown_key(&key)
            } else if let Err(reason) = config.set(&key, &value) {
                CmdMessage::error(reason.to_string())
            } else {
                config.save(&paths.data_dir)?;
                let stored = config.get(&key).unwrap_or(value);
                info!(%key, %stored, "config updated");
                let mut result = CmdResult::default().with_config(config);
                result.add_message(CmdMessage::success(format!("{} set to {}", key, stored)));
                return Ok(result);
            }
        }
    };

    let mut result = CmdResult::default();
    result.add_message(message);
    Ok(result)
}

fn unknown_key(key: &str) -> CmdMessage {
    CmdMessage::error(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        KEYS.join(", ")
    ))
}
