//! Cards and card identity.

use serde::Serialize;

use crate::types::Icon;

/// What a card shows, used only for pair matching.
///
/// Built-in icons and remote images never compare equal to each other, even
/// if a reference happened to hash to an icon's discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum ContentId {
    Icon(Icon),
    /// FNV-1a hash of the image reference.
    Remote(u64),
}

impl ContentId {
    /// Identity of a remote image reference.
    pub fn remote(reference: &str) -> Self {
        ContentId::Remote(fnv1a64(reference.as_bytes()))
    }
}

/// FNV-1a 64-bit.
pub fn fnv1a64(bytes: &[u8]) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for &b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(0x100000001b3);
    }
    h
}

/// One tile on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    content: ContentId,
    remote_ref: Option<String>,
    face_up: bool,
    matched: bool,
}

impl Card {
    /// A face-down card showing a built-in icon.
    pub fn icon(icon: Icon) -> Self {
        Self {
            content: ContentId::Icon(icon),
            remote_ref: None,
            face_up: false,
            matched: false,
        }
    }

    /// A face-down card showing an externally supplied image.
    pub fn remote(reference: impl Into<String>) -> Self {
        let reference = reference.into();
        Self {
            content: ContentId::remote(&reference),
            remote_ref: Some(reference),
            face_up: false,
            matched: false,
        }
    }

    pub fn content(&self) -> ContentId {
        self.content
    }

    /// Image reference for remote cards; `None` means render [`Card::content`]'s icon.
    pub fn remote_ref(&self) -> Option<&str> {
        self.remote_ref.as_deref()
    }

    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Sticky: once set, never cleared.
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    pub(crate) fn set_face_up(&mut self, face_up: bool) {
        self.face_up = face_up;
    }

    pub(crate) fn mark_matched(&mut self) {
        self.matched = true;
    }

    /// Back to face down and unmatched, for dealing a prepared deck.
    pub(crate) fn reset(&mut self) {
        self.face_up = false;
        self.matched = false;
    }

    pub fn matches(&self, other: &Card) -> bool {
        self.content == other.content
    }
}
