//! Pair reduction.

extern crate alloc;

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::{HashMap, HashSet};
#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet};

use crate::card::{Card, Rank};
use crate::hand::Hand;
use crate::random::RandomSource;

/// Discards every pair from a hand and shuffles what is left.
///
/// Ranks held an even number of times are removed entirely. Ranks held an
/// odd number of times keep their first copy in hand order. The surviving
/// cards are then shuffled, so their order says nothing about which copy
/// was kept or where it used to sit.
///
/// Returns the discarded cards in their original hand order. The count is
/// always even.
pub fn reduce<R: RandomSource + ?Sized>(hand: &mut Hand, rng: &mut R) -> Vec<Card> {
    let mut counts: HashMap<Rank, usize> = HashMap::new();
    for card in hand.cards() {
        *counts.entry(card.rank).or_insert(0) += 1;
    }

    let mut seen: HashSet<Rank> = HashSet::new();
    let mut kept = Vec::with_capacity(counts.len());
    let mut discarded = Vec::new();

    for &card in hand.cards() {
        let odd = counts.get(&card.rank).is_some_and(|count| count % 2 == 1);
        if odd && seen.insert(card.rank) {
            kept.push(card);
        } else {
            discarded.push(card);
        }
    }

    rng.shuffle(kept.as_mut_slice());

    if !discarded.is_empty() {
        log::trace!(
            "{:?} discarded {} cards, {} left",
            hand.owner(),
            discarded.len(),
            kept.len()
        );
    }

    *hand.cards_mut() = kept;
    discarded
}
