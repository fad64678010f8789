use serde::Serialize;

use crate::card::ContentId;
use crate::game::MemoryGame;
use crate::types::BoardSize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardSnapshot {
    pub content: ContentId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_ref: Option<String>,
    pub face_up: bool,
    pub matched: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub board: BoardSize,
    pub width: usize,
    pub height: usize,
    pub cards: Vec<CardSnapshot>,
    pub pending_flip: Option<usize>,
    pub pairs_found: usize,
    pub pair_count: usize,
    pub moves: u32,
    pub won: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = BoardSize::default();
        self.width = 0;
        self.height = 0;
        self.cards.clear();
        self.pending_flip = None;
        self.pairs_found = 0;
        self.pair_count = 0;
        self.moves = 0;
        self.won = false;
    }

    pub(crate) fn fill_from(&mut self, game: &MemoryGame) {
        let size = game.board_size();
        self.board = size;
        self.width = size.width();
        self.height = size.height();
        self.cards.clear();
        self.cards.extend(game.cards().iter().map(|card| CardSnapshot {
            content: card.content(),
            remote_ref: card.remote_ref().map(str::to_owned),
            face_up: card.is_face_up(),
            matched: card.is_matched(),
        }));
        self.pending_flip = game.pending_flip();
        self.pairs_found = game.pairs_found();
        self.pair_count = game.pair_count();
        self.moves = game.move_count();
        self.won = game.has_won();
    }

    /// Card at grid cell (`row`, `col`), row-major.
    pub fn card_at(&self, row: usize, col: usize) -> Option<&CardSnapshot> {
        if col >= self.width {
            return None;
        }
        self.cards.get(row * self.width + col)
    }

    pub fn playable(&self) -> bool {
        !self.won
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: BoardSize::default(),
            width: 0,
            height: 0,
            cards: Vec::new(),
            pending_flip: None,
            pairs_found: 0,
            pair_count: 0,
            moves: 0,
            won: false,
        }
    }
}
