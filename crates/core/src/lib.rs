//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the memory-matching (pairs) engine. It has **no
//! dependencies** on UI, networking, or image handling, which makes it:
//!
//! - **Deterministic**: Same seed produces identical deals
//! - **Testable**: Every rule is covered by unit tests
//! - **Portable**: Can run behind a terminal, GUI, or headless driver
//!
//! # Module Structure
//!
//! - [`card`]: Cards and their matching identity
//! - [`deck`]: Deck construction and validation
//! - [`game`]: The flip/match/win state machine
//! - [`rng`]: Seeded RNG with unbiased Fisher-Yates shuffling
//! - [`snapshot`]: Serializable read-only view for renderers
//! - [`content`]: Custom boards and the provider seam that supplies them
//! - [`session`]: Screen-level controller (restart, resize, custom games)
//!
//! # Game Rules
//!
//! - The deck holds exactly two cards per face, shuffled once per deal
//! - A move is two flips; a matching second card locks the pair face up
//! - A non-matching pair stays visible until the first flip of the next move
//! - The game is won when every pair is found
//!
//! # Example
//!
//! ```
//! use pairs_core::{BoardSize, Card, Flip, Icon, MemoryGame};
//!
//! let deck = [Icon::Star, Icon::Moon, Icon::Star, Icon::Moon, Icon::Gift, Icon::Home, Icon::Gift, Icon::Home]
//!     .iter()
//!     .map(|&icon| Card::icon(icon))
//!     .collect();
//! let mut game = MemoryGame::from_cards(BoardSize::Small, deck).unwrap();
//!
//! assert_eq!(game.flip_card(0), Ok(Flip::Revealed));
//! assert_eq!(game.flip_card(2), Ok(Flip::Match));
//! assert_eq!(game.pairs_found(), 1);
//! assert_eq!(game.move_count(), 1);
//! assert!(!game.has_won());
//! ```

pub mod card;
pub mod content;
pub mod deck;
pub mod error;
pub mod game;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use pairs_types as types;

// Re-export commonly used types for convenience
pub use card::{Card, ContentId};
pub use content::{ContentProvider, ContentStore, CustomGame, InMemoryContent};
pub use error::{ContentError, FlipError, GameError};
pub use game::{Flip, MemoryGame};
pub use rng::SimpleRng;
pub use session::{GameSession, Notice};
pub use snapshot::{CardSnapshot, GameSnapshot};
pub use types::{BoardSize, Icon};
