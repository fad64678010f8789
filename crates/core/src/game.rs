//! Game state module - the flip/match/win state machine
//!
//! A game owns a fixed deck dealt once at construction. Callers drive it
//! exclusively through [`MemoryGame::flip_card`]; everything else is a query.
//!
//! Between moves the game is either waiting for the first card of a move
//! (no pending flip) or for the second one (one pending flip). Starting a new
//! move turns back any unmatched cards left showing by the previous move.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::card::Card;
use crate::deck;
use crate::error::{FlipError, GameError};
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{BoardSize, Icon};

/// Result of an accepted flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flip {
    /// First card of a move.
    Revealed,
    /// Second card of a move, different from the first.
    Mismatch,
    /// Second card of a move, completing a pair.
    Match,
}

impl Flip {
    /// True iff this flip completed a matching pair.
    pub fn is_match(self) -> bool {
        matches!(self, Flip::Match)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct MemoryGame {
    board_size: BoardSize,
    cards: Vec<Card>,
    /// Face-up card waiting for the second flip of the move.
    pending: Option<usize>,
    /// Unmatched cards currently face up (at most the two of the last move).
    revealed: ArrayVec<usize, 2>,
    pairs_found: usize,
    /// Accepted flips; a move is two flips.
    flips: u32,
}

impl MemoryGame {
    /// Deal a new game.
    ///
    /// With `content == None` the deck uses built-in icons; otherwise it uses
    /// the given image references, which must number exactly `size.pair_count()`.
    pub fn new(
        size: BoardSize,
        content: Option<&[String]>,
        rng: &mut SimpleRng,
    ) -> Result<Self, GameError> {
        match content {
            None => Self::with_default_icons(size, rng),
            Some(references) => Self::with_remote_images(size, references, rng),
        }
    }

    /// Deal a game from the default icon catalog.
    pub fn with_default_icons(size: BoardSize, rng: &mut SimpleRng) -> Result<Self, GameError> {
        let cards = deck::icon_deck(size, &Icon::ALL, rng)?;
        info!(board = size.name(), "dealt icon game");
        Ok(Self::from_dealt(size, cards))
    }

    /// Deal a game from externally supplied image references.
    pub fn with_remote_images(
        size: BoardSize,
        references: &[String],
        rng: &mut SimpleRng,
    ) -> Result<Self, GameError> {
        let cards = deck::remote_deck(size, references, rng)?;
        info!(board = size.name(), images = references.len(), "dealt custom game");
        Ok(Self::from_dealt(size, cards))
    }

    /// Start a game with an explicit deck order (no shuffling).
    ///
    /// Cards are reset face down and unmatched.
    pub fn from_cards(size: BoardSize, mut cards: Vec<Card>) -> Result<Self, GameError> {
        deck::validate(size, &cards)?;
        cards.iter_mut().for_each(Card::reset);
        Ok(Self::from_dealt(size, cards))
    }

    fn from_dealt(board_size: BoardSize, cards: Vec<Card>) -> Self {
        Self {
            board_size,
            cards,
            pending: None,
            revealed: ArrayVec::new(),
            pairs_found: 0,
            flips: 0,
        }
    }

    pub fn board_size(&self) -> BoardSize {
        self.board_size
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// False for positions off the board.
    pub fn is_card_face_up(&self, position: usize) -> bool {
        self.cards.get(position).is_some_and(Card::is_face_up)
    }

    pub fn pending_flip(&self) -> Option<usize> {
        self.pending
    }

    pub fn pairs_found(&self) -> usize {
        self.pairs_found
    }

    pub fn pair_count(&self) -> usize {
        self.board_size.pair_count()
    }

    pub fn has_won(&self) -> bool {
        self.pairs_found == self.board_size.pair_count()
    }

    /// Completed moves (two flips each).
    pub fn move_count(&self) -> u32 {
        self.flips / 2
    }

    pub fn flip_count(&self) -> u32 {
        self.flips
    }

    /// Fraction of pairs found, in `[0.0, 1.0]`.
    pub fn progress(&self) -> f32 {
        self.pairs_found as f32 / self.pair_count() as f32
    }

    /// At least one move made and the game not yet won.
    pub fn is_in_progress(&self) -> bool {
        self.move_count() > 0 && !self.has_won()
    }

    /// Flip the card at `position`.
    ///
    /// Rejected flips leave the game untouched and are not counted.
    pub fn flip_card(&mut self, position: usize) -> Result<Flip, FlipError> {
        let card = self.cards.get(position).ok_or(FlipError::InvalidPosition {
            position,
            card_count: self.cards.len(),
        })?;
        if card.is_matched() {
            return Err(FlipError::AlreadyMatched(position));
        }
        if card.is_face_up() {
            return Err(FlipError::AlreadyFaceUp(position));
        }

        self.flips += 1;
        self.cards[position].set_face_up(true);

        let flip = match self.pending.take() {
            None => {
                // Start of a move: hide what the last move left showing.
                for idx in self.revealed.drain(..) {
                    self.cards[idx].set_face_up(false);
                }
                self.pending = Some(position);
                self.revealed.push(position);
                Flip::Revealed
            }
            Some(first) if self.cards[first].matches(&self.cards[position]) => {
                self.cards[first].mark_matched();
                self.cards[position].mark_matched();
                self.revealed.clear();
                self.pairs_found += 1;
                Flip::Match
            }
            Some(_) => {
                self.revealed.push(position);
                Flip::Mismatch
            }
        };

        debug!(position, ?flip, flips = self.flips, pairs = self.pairs_found, "flip");
        if flip.is_match() && self.has_won() {
            info!(moves = self.move_count(), "game won");
        }
        Ok(flip)
    }

    /// Read-only view for renderers and serialization.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot, reusing its card buffer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.fill_from(self);
    }
}
