//! Property tests for the snake order math.

use backend::domain::snake;
use proptest::prelude::*;

proptest! {
    /// Pick numbers across the whole order are exactly 1..=teams*rounds.
    #[test]
    fn order_is_contiguous_and_unique(team_count in 2u16..=16, rounds in 1u8..=20) {
        let slots = snake::build_order(team_count, rounds);
        prop_assert_eq!(slots.len(), team_count as usize * rounds as usize);
        for (i, slot) in slots.iter().enumerate() {
            prop_assert_eq!(slot.pick_number, i as i32 + 1);
        }
    }

    /// Every round uses each team position exactly once.
    #[test]
    fn each_round_is_a_permutation(team_count in 2u16..=16, rounds in 1u8..=20) {
        let slots = snake::build_order(team_count, rounds);
        for round in 1..=rounds {
            let mut positions: Vec<u16> = slots
                .iter()
                .filter(|s| s.round == round)
                .map(|s| s.team_position)
                .collect();
            positions.sort_unstable();
            prop_assert_eq!(positions, (1..=team_count).collect::<Vec<u16>>());
        }
    }

    /// Consecutive rounds reverse: the team closing one round opens the next.
    #[test]
    fn rounds_reverse_at_the_turn(team_count in 2u16..=16, rounds in 2u8..=20) {
        let slots = snake::build_order(team_count, rounds);
        for round in 1..rounds {
            let boundary = round as usize * team_count as usize;
            prop_assert_eq!(
                slots[boundary - 1].team_position,
                slots[boundary].team_position
            );
        }
    }

    /// A team's picks in consecutive rounds are mirror images: slot k from
    /// the front in one round, slot k from the back in the next.
    #[test]
    fn positions_mirror_between_rounds(
        team_count in 2u16..=16,
        round in 1u8..=19,
        position in 1u16..=16,
    ) {
        prop_assume!(position <= team_count);
        let within_odd = snake::pick_number(round, position, team_count)
            - (round as i32 - 1) * team_count as i32;
        let within_next = snake::pick_number(round + 1, position, team_count)
            - (round as i32) * team_count as i32;
        prop_assert_eq!(within_odd + within_next, team_count as i32 + 1);
    }
}
