//! Deck construction: pick the faces, duplicate them, shuffle.

use std::collections::HashMap;

use crate::card::{Card, ContentId};
use crate::error::GameError;
use crate::rng::SimpleRng;
use crate::types::{BoardSize, Icon};

/// Deal `size.pair_count()` distinct icons drawn from `catalog`, two of each, shuffled.
pub fn icon_deck(
    size: BoardSize,
    catalog: &[Icon],
    rng: &mut SimpleRng,
) -> Result<Vec<Card>, GameError> {
    let pairs = size.pair_count();
    let mut distinct: Vec<Icon> = catalog.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    if distinct.len() < pairs {
        return Err(GameError::InsufficientContent {
            required: pairs,
            available: distinct.len(),
        });
    }

    // Sample without replacement by shuffling the catalog and taking a prefix.
    rng.shuffle(&mut distinct);
    let mut cards: Vec<Card> = distinct[..pairs]
        .iter()
        .flat_map(|&icon| [Card::icon(icon), Card::icon(icon)])
        .collect();
    rng.shuffle(&mut cards);
    Ok(cards)
}

/// Deal two cards per image reference, shuffled.
pub fn remote_deck(
    size: BoardSize,
    references: &[String],
    rng: &mut SimpleRng,
) -> Result<Vec<Card>, GameError> {
    let pairs = size.pair_count();
    if references.len() != pairs {
        return Err(GameError::ContentCountMismatch {
            expected: pairs,
            actual: references.len(),
        });
    }

    check_distinct(references, ContentId::remote)?;

    let mut cards: Vec<Card> = references
        .iter()
        .flat_map(|r| [Card::remote(r.as_str()), Card::remote(r.as_str())])
        .collect();
    rng.shuffle(&mut cards);
    Ok(cards)
}

/// Reject references that would give two pairs the same identity.
fn check_distinct(
    references: &[String],
    identity: impl Fn(&str) -> ContentId,
) -> Result<(), GameError> {
    let mut seen: HashMap<ContentId, &str> = HashMap::with_capacity(references.len());
    for reference in references {
        let id = identity(reference.as_str());
        match seen.get(&id) {
            Some(&earlier) if earlier == reference.as_str() => {
                return Err(GameError::DuplicateContent {
                    reference: reference.clone(),
                });
            }
            Some(&earlier) => {
                return Err(GameError::ContentCollision {
                    reference: reference.clone(),
                    earlier: earlier.to_string(),
                });
            }
            None => {
                seen.insert(id, reference.as_str());
            }
        }
    }
    Ok(())
}

/// Check that `cards` fits `size` and holds exactly two cards per identity.
pub fn validate(size: BoardSize, cards: &[Card]) -> Result<(), GameError> {
    if cards.len() != size.card_count() {
        return Err(GameError::DeckSizeMismatch {
            expected: size.card_count(),
            actual: cards.len(),
        });
    }

    let mut counts: HashMap<ContentId, usize> = HashMap::new();
    for card in cards {
        *counts.entry(card.content()).or_default() += 1;
    }
    // Report the smallest offending id so the error is stable.
    let mut bad: Vec<(ContentId, usize)> = counts.into_iter().filter(|&(_, n)| n != 2).collect();
    bad.sort_unstable();
    match bad.first() {
        Some(&(content, count)) => Err(GameError::UnpairedContent { content, count }),
        None => Ok(()),
    }
}
