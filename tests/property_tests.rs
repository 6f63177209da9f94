//! Property tests for the deck and player state.
//!
//! - The deck never runs out, whatever the catalog size
//! - Health and energy clamps hold for any damage, heal and spend sequence,
//!   negative and extreme amounts included

use std::sync::Arc;

use proptest::prelude::*;

use codeclash::cards::{CardCatalog, CardKind, CardTemplate};
use codeclash::core::{EngineConfig, GameRng, PlayerState};
use codeclash::zones::Deck;

fn catalog_of(size: usize) -> Arc<CardCatalog> {
    let templates = (0..size)
        .map(|i| CardTemplate::new(format!("Card {}", i), CardKind::ALL[i % CardKind::ALL.len()]))
        .collect();
    Arc::new(CardCatalog::new(templates).expect("generated names are unique"))
}

#[derive(Clone, Debug)]
enum Op {
    Damage(i32),
    Heal(i32),
    Spend(i32),
    Gain(i32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-200..200i32).prop_map(Op::Damage),
        (-200..200i32).prop_map(Op::Heal),
        (-30..30i32).prop_map(Op::Spend),
        (-30..30i32).prop_map(Op::Gain),
        any::<i32>().prop_map(Op::Damage),
        any::<i32>().prop_map(Op::Heal),
        any::<i32>().prop_map(Op::Spend),
        any::<i32>().prop_map(Op::Gain),
    ]
}

proptest! {
    #[test]
    fn deck_never_exhausts(size in 1usize..20, extra in 1usize..40, seed in any::<u64>()) {
        let catalog = catalog_of(size);
        let mut deck = Deck::new(catalog.clone(), GameRng::new(seed));

        for _ in 0..size + extra {
            let card = deck.draw();
            prop_assert!(catalog.get(card).is_some());
        }

        prop_assert!(deck.refills() >= 1);
        prop_assert!(deck.remaining_count() < size);
    }

    #[test]
    fn health_and_energy_stay_in_bounds(ops in prop::collection::vec(op(), 0..50)) {
        let mut player = PlayerState::new("P", &EngineConfig::default());

        for op in ops {
            match op {
                Op::Damage(n) => player.take_damage(n),
                Op::Heal(n) => player.heal(n),
                Op::Spend(n) => player.spend_energy(n),
                Op::Gain(n) => player.gain_energy(n),
            }
            prop_assert!((0..=100).contains(&player.health()));
            prop_assert!(player.energy() >= 0);
            prop_assert_eq!(player.is_dead(), player.health() == 0);
        }
    }

    #[test]
    fn start_turn_is_a_hard_reset(spent in 0..20i32, gained in 0..20i32) {
        let mut player = PlayerState::new("P", &EngineConfig::default());
        player.spend_energy(spent);
        player.gain_energy(gained);

        player.start_turn();

        prop_assert_eq!(player.energy(), 10);
        prop_assert!(!player.has_played_card_this_turn());
    }
}

#[test]
fn test_clamp_examples() {
    let mut player = PlayerState::new("P", &EngineConfig::default());
    player.take_damage(10);
    player.heal(50);
    assert_eq!(player.health(), 100);

    player.take_damage(60);
    player.take_damage(150);
    assert_eq!(player.health(), 0);
}

#[test]
fn test_negative_amounts_do_not_escape_bounds() {
    let mut player = PlayerState::new("P", &EngineConfig::default());
    player.take_damage(-50);
    assert_eq!(player.health(), 100);

    player.heal(-500);
    assert_eq!(player.health(), 0);
    assert!(player.is_dead());
}
