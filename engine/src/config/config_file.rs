use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{GameConfig, Validate};

/// Parses and validates YAML settings.
pub fn parse_config(content: &str) -> Result<GameConfig, String> {
    let config: GameConfig = serde_yaml_ng::from_str(content)
        .map_err(|e| format!("Failed to parse game settings: {}", e))?;
    config
        .validate()
        .map_err(|e| format!("Invalid game settings: {}", e))?;
    Ok(config)
}

pub fn render_config(config: &GameConfig) -> Result<String, String> {
    serde_yaml_ng::to_string(config)
        .map_err(|e| format!("Failed to write game settings: {}", e))
}

/// Game settings stored as YAML on disk. The first successful load or save
/// is cached; a file that does not exist yet reads as the defaults.
pub struct ConfigFile {
    path: PathBuf,
    cached: Mutex<Option<GameConfig>>,
}

impl ConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<GameConfig, String> {
        let mut cached = self
            .cached
            .lock()
            .map_err(|e| format!("Settings cache poisoned: {}", e))?;

        if let Some(config) = cached.as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.read()? else {
            return Ok(GameConfig::default());
        };
        let config = parse_config(&content)
            .map_err(|e| format!("{} ({})", e, self.path.display()))?;
        *cached = Some(config.clone());
        Ok(config)
    }

    /// Validates before touching the file, so invalid settings never reach disk.
    pub fn save(&self, config: &GameConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Invalid game settings: {}", e))?;
        let content = render_config(config)?;

        std::fs::write(&self.path, content).map_err(|e| {
            format!(
                "Failed to write config file {}: {}",
                self.path.display(),
                e
            )
        })?;

        let mut cached = self
            .cached
            .lock()
            .map_err(|e| format!("Settings cache poisoned: {}", e))?;
        *cached = Some(config.clone());
        Ok(())
    }

    fn read(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!(
                "Failed to read config file {}: {}",
                self.path.display(),
                err
            )),
        }
    }
}
