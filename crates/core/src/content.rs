//! Custom boards and where they come from.
//!
//! The engine never fetches images itself. A [`ContentProvider`] hands it a
//! [`CustomGame`] (a name plus one image reference per pair); resolving and
//! drawing those references is the caller's business.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ContentError, GameError};
use crate::types::{BoardSize, MAX_GAME_NAME_LEN, MIN_GAME_NAME_LEN};

/// A user-built board: one image reference per pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomGame {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl CustomGame {
    pub fn new(name: impl Into<String>, images: Vec<String>) -> Self {
        Self {
            name: name.into(),
            images,
        }
    }

    /// Board tier implied by the number of images.
    pub fn board_size(&self) -> Result<BoardSize, GameError> {
        BoardSize::from_pair_count(self.images.len()).ok_or(GameError::UnsupportedPairCount {
            pairs: self.images.len(),
        })
    }

    /// Check the name, the image list and that the images fill a board.
    pub fn validate(&self) -> Result<BoardSize, GameError> {
        validate_game_name(&self.name)?;
        if self.images.is_empty() {
            return Err(GameError::EmptyGame {
                name: self.name.clone(),
            });
        }
        let mut seen = HashSet::with_capacity(self.images.len());
        if let Some(dup) = self.images.iter().find(|r| !seen.insert(r.as_str())) {
            return Err(GameError::DuplicateContent {
                reference: dup.clone(),
            });
        }
        self.board_size()
    }
}

/// Accept names of [`MIN_GAME_NAME_LEN`]..=[`MAX_GAME_NAME_LEN`] characters, ignoring
/// surrounding whitespace.
pub fn validate_game_name(name: &str) -> Result<(), GameError> {
    let len = name.trim().chars().count();
    if (MIN_GAME_NAME_LEN..=MAX_GAME_NAME_LEN).contains(&len) {
        Ok(())
    } else {
        Err(GameError::InvalidGameName {
            name: name.to_string(),
            min: MIN_GAME_NAME_LEN,
            max: MAX_GAME_NAME_LEN,
        })
    }
}

/// Supplier of custom games, injected at the application layer.
pub trait ContentProvider {
    fn fetch(&self, name: &str) -> Result<CustomGame, ContentError>;
}

/// Destination for newly created custom games.
///
/// Names are unique: publishing under a stored name fails with
/// [`ContentError::NameTaken`] and leaves the stored game alone.
pub trait ContentStore {
    fn publish(&mut self, game: CustomGame) -> Result<(), ContentError>;
}

/// Provider backed by a map, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContent {
    games: HashMap<String, Vec<String>>,
}

impl InMemoryContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.games.keys().map(String::as_str)
    }
}

impl ContentProvider for InMemoryContent {
    fn fetch(&self, name: &str) -> Result<CustomGame, ContentError> {
        match self.games.get(name) {
            Some(images) => Ok(CustomGame::new(name, images.clone())),
            None => {
                warn!(name, "custom game not found");
                Err(ContentError::NotFound(name.to_string()))
            }
        }
    }
}

impl ContentStore for InMemoryContent {
    fn publish(&mut self, game: CustomGame) -> Result<(), ContentError> {
        game.validate()?;
        let name = game.name.trim();
        if self.games.contains_key(name) {
            warn!(name, "custom game name taken");
            return Err(ContentError::NameTaken(name.to_string()));
        }
        info!(name, images = game.images.len(), "published custom game");
        self.games.insert(name.to_string(), game.images);
        Ok(())
    }
}
