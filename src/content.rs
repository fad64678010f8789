//! Custom games stored as JSON files on disk, one `<name>.json` per game.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::core::{ContentError, ContentProvider, ContentStore, CustomGame};

/// Reads and writes `<dir>/<name>.json`, shaped `{"name": "...", "images": ["...", ...]}`.
#[derive(Debug, Clone)]
pub struct JsonFileContent {
    dir: PathBuf,
}

impl JsonFileContent {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> Option<PathBuf> {
        // Names are plain file stems; anything path-like is never found.
        let ok = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'));
        ok.then(|| self.dir.join(format!("{name}.json")))
    }
}

impl ContentProvider for JsonFileContent {
    fn fetch(&self, name: &str) -> Result<CustomGame, ContentError> {
        let name = name.trim();
        let path = self
            .path_for(name)
            .ok_or_else(|| ContentError::NotFound(name.to_string()))?;
        debug!(path = %path.display(), "reading custom game");

        let text = fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ContentError::NotFound(name.to_string()),
            _ => ContentError::Unavailable {
                name: name.to_string(),
                reason: e.to_string(),
            },
        })?;
        let mut game: CustomGame =
            serde_json::from_str(&text).map_err(|e| ContentError::Unavailable {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        // The file stem is the game's name.
        if game.name.trim() != name {
            debug!(stored = %game.name, name, "using file name as game name");
            game.name = name.to_string();
        }
        game.validate()?;
        Ok(game)
    }
}

impl ContentStore for JsonFileContent {
    fn publish(&mut self, mut game: CustomGame) -> Result<(), ContentError> {
        game.validate()?;
        game.name = game.name.trim().to_string();
        let unavailable = |reason: String| ContentError::Unavailable {
            name: game.name.clone(),
            reason,
        };

        let path = self.path_for(&game.name).ok_or_else(|| {
            unavailable("names may only use letters, digits, spaces, '-' and '_'".to_string())
        })?;
        fs::create_dir_all(&self.dir).map_err(|e| unavailable(e.to_string()))?;

        let file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                warn!(path = %path.display(), "custom game name taken");
                return Err(ContentError::NameTaken(game.name.clone()));
            }
            Err(e) => return Err(unavailable(e.to_string())),
        };
        serde_json::to_writer_pretty(file, &game).map_err(|e| unavailable(e.to_string()))?;
        info!(path = %path.display(), images = game.images.len(), "published custom game");
        Ok(())
    }
}
