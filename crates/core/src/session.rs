//! Game session - the screen-level controller around a [`MemoryGame`].
//!
//! A session remembers what is being played (tier and optional custom board),
//! deals fresh games on restart, and turns raw flips into player-facing
//! notices, refusing flips on a finished game or on cards already showing.

use tracing::{debug, info};

use crate::content::{ContentProvider, CustomGame};
use crate::error::{ContentError, FlipError, GameError};
use crate::game::{Flip, MemoryGame};
use crate::rng::SimpleRng;
use crate::types::{BoardSize, DEFAULT_TITLE};

/// Outcome of a player's flip, for status messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    /// The game is over; nothing was flipped.
    AlreadyWon,
    /// The card is already showing; nothing was flipped.
    InvalidMove,
    Revealed,
    NoMatch,
    Matched,
    Won,
}

impl Notice {
    /// Message to flash to the player, if any.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Notice::AlreadyWon => Some("You already won!"),
            Notice::InvalidMove => Some("Invalid move!"),
            Notice::Won => Some("Congratulations you have won the game!"),
            Notice::Revealed | Notice::NoMatch | Notice::Matched => None,
        }
    }

    /// Whether the flip changed the board.
    pub fn accepted(self) -> bool {
        !matches!(self, Notice::AlreadyWon | Notice::InvalidMove)
    }
}

#[derive(Debug, Clone)]
pub struct GameSession {
    rng: SimpleRng,
    board_size: BoardSize,
    custom: Option<CustomGame>,
    game: MemoryGame,
    /// Increments on every deal.
    episode_id: u32,
}

impl GameSession {
    /// Start a session with default icons on `board_size`.
    pub fn new(board_size: BoardSize, seed: u32) -> Result<Self, GameError> {
        let mut rng = SimpleRng::new(seed);
        let game = MemoryGame::with_default_icons(board_size, &mut rng)?;
        Ok(Self {
            rng,
            board_size,
            custom: None,
            game,
            episode_id: 0,
        })
    }

    pub fn game(&self) -> &MemoryGame {
        &self.game
    }

    pub fn board_size(&self) -> BoardSize {
        self.board_size
    }

    pub fn custom_game(&self) -> Option<&CustomGame> {
        self.custom.as_ref()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Quitting now would throw away a game in progress.
    pub fn needs_restart_confirmation(&self) -> bool {
        self.game.is_in_progress()
    }

    /// Deal again with the same tier and content.
    pub fn restart(&mut self) -> Result<(), GameError> {
        let images = self.custom.as_ref().map(|g| g.images.as_slice());
        self.game = MemoryGame::new(self.board_size, images, &mut self.rng)?;
        self.episode_id += 1;
        debug!(episode = self.episode_id, "restarted");
        Ok(())
    }

    /// Switch tier; drops any custom board and deals default icons.
    pub fn set_board_size(&mut self, board_size: BoardSize) -> Result<(), GameError> {
        let game = MemoryGame::with_default_icons(board_size, &mut self.rng)?;
        self.board_size = board_size;
        self.custom = None;
        self.game = game;
        self.episode_id += 1;
        info!(board = board_size.name(), "board size changed");
        Ok(())
    }

    /// Validate and start playing a custom board.
    ///
    /// On error the current game is kept.
    pub fn load_custom_game(&mut self, custom: CustomGame) -> Result<(), GameError> {
        let board_size = custom.validate()?;
        let game = MemoryGame::with_remote_images(board_size, &custom.images, &mut self.rng)?;
        info!(name = %custom.name, board = board_size.name(), "now playing custom game");
        self.board_size = board_size;
        self.custom = Some(custom);
        self.game = game;
        self.episode_id += 1;
        Ok(())
    }

    /// Fetch `name` from `provider` and play it.
    pub fn load_from<P: ContentProvider + ?Sized>(
        &mut self,
        provider: &P,
        name: &str,
    ) -> Result<(), ContentError> {
        let custom = provider.fetch(name)?;
        self.load_custom_game(custom)?;
        Ok(())
    }

    /// Flip a card on behalf of the player.
    ///
    /// Only positions off the board are errors; the other refusals are notices.
    pub fn flip(&mut self, position: usize) -> Result<Notice, FlipError> {
        if self.game.has_won() {
            return Ok(Notice::AlreadyWon);
        }
        match self.game.flip_card(position) {
            Ok(Flip::Revealed) => Ok(Notice::Revealed),
            Ok(Flip::Mismatch) => Ok(Notice::NoMatch),
            Ok(Flip::Match) if self.game.has_won() => Ok(Notice::Won),
            Ok(Flip::Match) => Ok(Notice::Matched),
            Err(FlipError::AlreadyFaceUp(_) | FlipError::AlreadyMatched(_)) => {
                Ok(Notice::InvalidMove)
            }
            Err(e @ FlipError::InvalidPosition { .. }) => Err(e),
        }
    }

    /// Custom board name, or the default title.
    pub fn title(&self) -> &str {
        self.custom
            .as_ref()
            .map(|g| g.name.trim())
            .unwrap_or(DEFAULT_TITLE)
    }

    pub fn pairs_label(&self) -> String {
        format!("Pairs: {} / {}", self.game.pairs_found(), self.game.pair_count())
    }

    pub fn moves_label(&self) -> String {
        format!("Moves: {}", self.game.move_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentStore, InMemoryContent};

    /// Positions of each content id, paired up.
    fn pairs_of(game: &MemoryGame) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        let cards = game.cards();
        for i in 0..cards.len() {
            for j in (i + 1)..cards.len() {
                if cards[i].matches(&cards[j]) {
                    out.push((i, j));
                }
            }
        }
        out
    }

    fn images(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("https://img.example/{i}.jpg")).collect()
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::new(BoardSize::Small, 1).unwrap();
        assert_eq!(session.board_size(), BoardSize::Small);
        assert_eq!(session.title(), "Memory Game");
        assert_eq!(session.pairs_label(), "Pairs: 0 / 4");
        assert_eq!(session.moves_label(), "Moves: 0");
        assert!(!session.needs_restart_confirmation());
    }

    #[test]
    fn test_flip_notices_through_to_win() {
        let mut session = GameSession::new(BoardSize::Small, 9).unwrap();
        let pairs = pairs_of(session.game());
        assert_eq!(pairs.len(), 4);

        for (n, &(a, b)) in pairs.iter().enumerate() {
            assert_eq!(session.flip(a), Ok(Notice::Revealed));
            assert_eq!(session.flip(a), Ok(Notice::InvalidMove));
            let expected = if n + 1 == pairs.len() {
                Notice::Won
            } else {
                Notice::Matched
            };
            assert_eq!(session.flip(b), Ok(expected));
        }
        assert_eq!(session.pairs_label(), "Pairs: 4 / 4");
        assert_eq!(session.moves_label(), "Moves: 4");
        assert_eq!(session.flip(0), Ok(Notice::AlreadyWon));
        assert_eq!(Notice::Won.message(), Some("Congratulations you have won the game!"));
    }

    #[test]
    fn test_no_match_and_confirmation() {
        let mut session = GameSession::new(BoardSize::Medium, 3).unwrap();
        let (a, _) = pairs_of(session.game())[0];
        let cards = session.game().cards();
        let other = (0..cards.len())
            .find(|&p| !cards[p].matches(&cards[a]))
            .unwrap();

        session.flip(a).unwrap();
        assert!(!session.needs_restart_confirmation());
        assert_eq!(session.flip(other), Ok(Notice::NoMatch));
        assert!(session.needs_restart_confirmation());
        assert_eq!(session.flip(other), Ok(Notice::InvalidMove));
    }

    #[test]
    fn test_out_of_range_is_error() {
        let mut session = GameSession::new(BoardSize::Small, 3).unwrap();
        assert!(matches!(
            session.flip(99),
            Err(FlipError::InvalidPosition { position: 99, .. })
        ));
    }

    #[test]
    fn test_restart_deals_fresh_game() {
        let mut session = GameSession::new(BoardSize::Large, 5).unwrap();
        session.flip(0).unwrap();
        session.restart().unwrap();
        assert_eq!(session.episode_id(), 1);
        assert_eq!(session.game().flip_count(), 0);
        assert_eq!(session.game().cards().len(), 24);
    }

    #[test]
    fn test_custom_game_sets_size_and_survives_restart() {
        let mut session = GameSession::new(BoardSize::Small, 5).unwrap();
        session
            .load_custom_game(CustomGame::new("Holiday", images(9)))
            .unwrap();
        assert_eq!(session.board_size(), BoardSize::Medium);
        assert_eq!(session.title(), "Holiday");

        session.restart().unwrap();
        assert!(session.game().cards().iter().all(|c| c.remote_ref().is_some()));

        session.set_board_size(BoardSize::Large).unwrap();
        assert!(session.custom_game().is_none());
        assert_eq!(session.title(), "Memory Game");
        assert!(session.game().cards().iter().all(|c| c.remote_ref().is_none()));
    }

    #[test]
    fn test_bad_custom_game_keeps_current() {
        let mut session = GameSession::new(BoardSize::Small, 5).unwrap();
        session.flip(0).unwrap();
        let err = session
            .load_custom_game(CustomGame::new("Holiday", images(7)))
            .unwrap_err();
        assert_eq!(err, GameError::UnsupportedPairCount { pairs: 7 });
        assert_eq!(session.game().flip_count(), 1);
        assert_eq!(session.episode_id(), 0);
    }

    #[test]
    fn test_load_from_provider() {
        let mut provider = InMemoryContent::new();
        provider.publish(CustomGame::new("pets", images(12))).unwrap();

        let mut session = GameSession::new(BoardSize::Small, 5).unwrap();
        session.load_from(&provider, "pets").unwrap();
        assert_eq!(session.board_size(), BoardSize::Large);

        assert_eq!(
            session.load_from(&provider, "nope"),
            Err(ContentError::NotFound("nope".to_string()))
        );
        assert_eq!(session.title(), "pets");
    }
}
