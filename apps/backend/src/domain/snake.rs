//! Snake draft order math.
//!
//! Odd rounds run 1..N, even rounds run N..1. Pick numbers are globally
//! unique and monotone across rounds; `team_position` always refers to the
//! team's fixed round-one slot.

/// One slot in the full draft order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSlot {
    pub pick_number: i32,
    pub round: u8,
    pub team_position: u16,
}

/// Overall pick number for a team's slot in a given round.
pub fn pick_number(round: u8, team_position: u16, team_count: u16) -> i32 {
    let base = (round as i32 - 1) * team_count as i32;
    if round % 2 == 1 {
        base + team_position as i32
    } else {
        base + (team_count as i32 - team_position as i32 + 1)
    }
}

/// Build the complete snake order for a league, sorted by pick number.
pub fn build_order(team_count: u16, rounds: u8) -> Vec<OrderSlot> {
    let mut slots = Vec::with_capacity(team_count as usize * rounds as usize);
    for round in 1..=rounds {
        for team_position in 1..=team_count {
            slots.push(OrderSlot {
                pick_number: pick_number(round, team_position, team_count),
                round,
                team_position,
            });
        }
    }
    slots.sort_by_key(|s| s.pick_number);
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_rounds_run_forward() {
        assert_eq!(pick_number(1, 1, 10), 1);
        assert_eq!(pick_number(1, 10, 10), 10);
        assert_eq!(pick_number(3, 4, 10), 24);
    }

    #[test]
    fn even_rounds_reverse() {
        // Round 2 reverses: the team that picked 10th picks 11th.
        assert_eq!(pick_number(2, 10, 10), 11);
        assert_eq!(pick_number(2, 1, 10), 20);
    }

    #[test]
    fn order_is_contiguous_and_unique() {
        let slots = build_order(8, 15);
        assert_eq!(slots.len(), 120);
        for (i, slot) in slots.iter().enumerate() {
            assert_eq!(slot.pick_number, i as i32 + 1);
        }
    }

    #[test]
    fn each_round_is_a_permutation_of_positions() {
        let slots = build_order(10, 4);
        for round in 1..=4u8 {
            let mut positions: Vec<u16> = slots
                .iter()
                .filter(|s| s.round == round)
                .map(|s| s.team_position)
                .collect();
            positions.sort_unstable();
            assert_eq!(positions, (1..=10).collect::<Vec<u16>>());
        }
    }

    #[test]
    fn back_to_back_picks_at_the_turn() {
        // Last pick of round 1 and first pick of round 2 belong to the same team.
        let slots = build_order(10, 2);
        assert_eq!(slots[9].team_position, slots[10].team_position);
    }
}
