//! Card combinations: ordered runs of cards scored by complexity.

use crate::cards::CardTemplate;

/// Sum of the complexities of `cards`.
#[must_use]
pub fn combination_value(cards: &[&CardTemplate]) -> i32 {
    cards.iter().map(|c| c.complexity).fold(0, i32::saturating_add)
}

/// A combination is valid when every adjacent pair can combine.
///
/// Empty and single-card combinations are valid.
#[must_use]
pub fn validate_combination(cards: &[&CardTemplate]) -> bool {
    cards.windows(2).all(|pair| pair[0].can_combine_with(pair[1]))
}

/// Total pairwise synergy along the combination, scored left to right.
#[must_use]
pub fn combination_synergy(cards: &[&CardTemplate]) -> i32 {
    cards
        .windows(2)
        .map(|pair| pair[0].synergy_with(pair[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardKind;

    fn loop_card() -> CardTemplate {
        CardTemplate::new("Loop", CardKind::ControlStructure)
            .with_complexity(2)
            .with_tag("iteration")
            .with_synergy(CardKind::Variable)
    }

    fn counter() -> CardTemplate {
        CardTemplate::new("Counter", CardKind::Variable)
            .with_complexity(1)
            .with_requirement("iteration")
    }

    fn orphan() -> CardTemplate {
        CardTemplate::new("Orphan", CardKind::Operator)
            .with_complexity(4)
            .with_requirement("FUNCTION")
    }

    #[test]
    fn test_value_sums_complexity() {
        let (a, b) = (loop_card(), counter());
        assert_eq!(combination_value(&[&a, &b]), 3);
        assert_eq!(combination_value(&[]), 0);
    }

    #[test]
    fn test_value_saturates() {
        let big = CardTemplate::new("Big", CardKind::Function).with_complexity(i32::MAX);
        assert_eq!(combination_value(&[&big, &big]), i32::MAX);
    }

    #[test]
    fn test_trivial_combinations_valid() {
        let a = orphan();
        assert!(validate_combination(&[]));
        assert!(validate_combination(&[&a]));
    }

    #[test]
    fn test_adjacent_requirements() {
        let (a, b, c) = (loop_card(), counter(), orphan());
        assert!(validate_combination(&[&a, &b]));
        assert!(!validate_combination(&[&a, &b, &c]));
    }

    #[test]
    fn test_synergy_is_directional() {
        let (a, b) = (loop_card(), counter());
        // 2 for the type synergy, 1 for close complexity
        assert_eq!(combination_synergy(&[&a, &b]), 3);
        assert_eq!(combination_synergy(&[&b, &a]), 1);
    }
}
