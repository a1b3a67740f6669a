use std::collections::HashMap;

use oldmaid::{Card, Deck, Hand, Owner, Rank, SeededRandom, deal, reduce};
use proptest::prelude::*;
use proptest::sample::subsequence;

fn any_cards() -> impl Strategy<Value = Vec<Card>> {
    subsequence(Deck::build().cards().to_vec(), 0..=51).prop_shuffle()
}

fn rank_counts(cards: &[Card]) -> HashMap<Rank, usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry(card.rank).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn deal_splits_evenly(cards in any_cards()) {
        let total = cards.len();
        let (dealer, challenger) = deal(Deck::from_cards(&cards).unwrap());

        prop_assert_eq!(dealer.len() + challenger.len(), total);
        prop_assert!(challenger.len() >= dealer.len());
        prop_assert!(challenger.len() - dealer.len() <= 1);
        if total % 2 == 0 {
            prop_assert_eq!(dealer.len(), challenger.len());
        }
    }

    #[test]
    fn reduce_keeps_one_card_per_odd_rank(cards in any_cards(), seed in any::<u64>()) {
        let input = rank_counts(&cards);
        let mut hand = Hand::from_cards(Owner::Challenger, &cards).unwrap();
        let discarded = reduce(&mut hand, &mut SeededRandom::new(seed));
        let output = rank_counts(hand.cards());

        for (rank, count) in &input {
            let expected = usize::from(count % 2 == 1);
            prop_assert_eq!(output.get(rank).copied().unwrap_or(0), expected);
        }
        prop_assert_eq!(discarded.len() % 2, 0);
        prop_assert_eq!(discarded.len() + hand.len(), cards.len());
        prop_assert!(hand.cards().iter().all(|card| cards.contains(card)));
    }

    #[test]
    fn reduce_twice_changes_nothing_but_order(cards in any_cards(), seed in any::<u64>()) {
        let mut rng = SeededRandom::new(seed);
        let mut hand = Hand::from_cards(Owner::Dealer, &cards).unwrap();
        reduce(&mut hand, &mut rng);
        let once = rank_counts(hand.cards());

        let discarded = reduce(&mut hand, &mut rng);
        prop_assert!(discarded.is_empty());
        prop_assert_eq!(rank_counts(hand.cards()), once);
    }
}
