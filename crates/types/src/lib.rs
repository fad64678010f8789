//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game. All types
//! are plain data with no game logic attached, so they can be shared by the
//! engine, the input layer and the terminal view.
//!
//! # Board Sizes
//!
//! | Tier | Difficulty | Cards | Width | Height | Pairs |
//! |------|------------|-------|-------|--------|-------|
//! | `Small` | Easy | 8 | 2 | 4 | 4 |
//! | `Medium` | Medium | 18 | 3 | 6 | 9 |
//! | `Large` | Hard | 24 | 4 | 6 | 12 |
//!
//! # Examples
//!
//! ```
//! use pairs_types::{BoardSize, Icon};
//!
//! let size = BoardSize::Medium;
//! assert_eq!(size.card_count(), 18);
//! assert_eq!(size.width() * size.height(), size.card_count());
//! assert_eq!(size.pair_count(), 9);
//!
//! // Custom boards are sized by their number of images (pairs)
//! assert_eq!(BoardSize::from_pair_count(12), Some(BoardSize::Large));
//! assert_eq!(BoardSize::from_pair_count(5), None);
//!
//! // The built-in catalog covers the largest board
//! assert!(Icon::ALL.len() >= BoardSize::Large.pair_count());
//! ```

use serde::{Deserialize, Serialize};

/// Minimum length of a custom game name (after trimming).
pub const MIN_GAME_NAME_LEN: usize = 3;

/// Maximum length of a custom game name (after trimming).
pub const MAX_GAME_NAME_LEN: usize = 14;

/// Title shown when no custom game is loaded.
pub const DEFAULT_TITLE: &str = "Memory Game";

/// Board size tier.
///
/// Every tier has an even card count and `width * height == card_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl BoardSize {
    /// All tiers, smallest first.
    pub const ALL: [BoardSize; 3] = [BoardSize::Small, BoardSize::Medium, BoardSize::Large];

    /// Total number of cards on the board.
    pub const fn card_count(self) -> usize {
        match self {
            BoardSize::Small => 8,
            BoardSize::Medium => 18,
            BoardSize::Large => 24,
        }
    }

    /// Number of columns.
    pub const fn width(self) -> usize {
        match self {
            BoardSize::Small => 2,
            BoardSize::Medium => 3,
            BoardSize::Large => 4,
        }
    }

    /// Number of rows.
    pub const fn height(self) -> usize {
        self.card_count() / self.width()
    }

    /// Number of distinct pairs on the board.
    pub const fn pair_count(self) -> usize {
        self.card_count() / 2
    }

    /// Tier name (`small`, `medium`, `large`).
    pub const fn name(self) -> &'static str {
        match self {
            BoardSize::Small => "small",
            BoardSize::Medium => "medium",
            BoardSize::Large => "large",
        }
    }

    /// Player-facing difficulty label.
    pub const fn difficulty(self) -> &'static str {
        match self {
            BoardSize::Small => "Easy",
            BoardSize::Medium => "Medium",
            BoardSize::Large => "Hard",
        }
    }

    /// Short label such as `"Easy: 4 x 2"` (rows x columns).
    pub fn description(self) -> String {
        format!("{}: {} x {}", self.difficulty(), self.height(), self.width())
    }

    /// Look up a tier by its total card count.
    ///
    /// Only the three table values are accepted.
    ///
    /// ```
    /// use pairs_types::BoardSize;
    ///
    /// assert_eq!(BoardSize::from_card_count(8), Some(BoardSize::Small));
    /// assert_eq!(BoardSize::from_card_count(4), None);
    /// ```
    pub const fn from_card_count(count: usize) -> Option<Self> {
        match count {
            8 => Some(BoardSize::Small),
            18 => Some(BoardSize::Medium),
            24 => Some(BoardSize::Large),
            _ => None,
        }
    }

    /// Look up a tier by its pair count (the number of images in a custom game).
    pub const fn from_pair_count(pairs: usize) -> Option<Self> {
        match pairs {
            4 => Some(BoardSize::Small),
            9 => Some(BoardSize::Medium),
            12 => Some(BoardSize::Large),
            _ => None,
        }
    }

    /// Parse a tier from its name or difficulty label (case-insensitive).
    ///
    /// ```
    /// use pairs_types::BoardSize;
    ///
    /// assert_eq!(BoardSize::parse("hard"), Some(BoardSize::Large));
    /// assert_eq!(BoardSize::parse("Medium"), Some(BoardSize::Medium));
    /// assert_eq!(BoardSize::parse("huge"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "small" | "easy" => Some(BoardSize::Small),
            "medium" => Some(BoardSize::Medium),
            "large" | "hard" => Some(BoardSize::Large),
            _ => None,
        }
    }

    /// The next tier, wrapping from `Large` back to `Small`.
    pub const fn next(self) -> Self {
        match self {
            BoardSize::Small => BoardSize::Medium,
            BoardSize::Medium => BoardSize::Large,
            BoardSize::Large => BoardSize::Small,
        }
    }
}

/// Built-in card faces used when no custom images are supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Face,
    Flower,
    Gift,
    Heart,
    Home,
    Lightning,
    Moon,
    Plane,
    School,
    Send,
    Star,
    Work,
}

impl Icon {
    /// The default icon catalog.
    pub const ALL: [Icon; 12] = [
        Icon::Face,
        Icon::Flower,
        Icon::Gift,
        Icon::Heart,
        Icon::Home,
        Icon::Lightning,
        Icon::Moon,
        Icon::Plane,
        Icon::School,
        Icon::Send,
        Icon::Star,
        Icon::Work,
    ];

    /// Two-character label used by the terminal view.
    pub const fn label(self) -> &'static str {
        match self {
            Icon::Face => "Fa",
            Icon::Flower => "Fl",
            Icon::Gift => "Gi",
            Icon::Heart => "He",
            Icon::Home => "Ho",
            Icon::Lightning => "Li",
            Icon::Moon => "Mo",
            Icon::Plane => "Pl",
            Icon::School => "Sc",
            Icon::Send => "Se",
            Icon::Star => "St",
            Icon::Work => "Wo",
        }
    }
}

/// Cursor movement direction on the board grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Player intents produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    Move(Direction),
    Flip,
    Restart,
    NextBoardSize,
}
