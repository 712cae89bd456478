use std::collections::BTreeSet;

use lotto_types::{Draw, MatchResult, NUMBERS_PER_ENTRY, Player, PlayerStanding};

pub struct MatchEngine;

impl MatchEngine {
    /// Player numbers found in the union of every registered draw.
    ///
    /// Matches accumulate across draws: a number hit by any draw counts,
    /// so six hits spread over several draws still make a full set.
    pub fn matched_numbers_for(player_numbers: &[u8], draws: &[Draw]) -> BTreeSet<u8> {
        let mut matched = BTreeSet::new();

        for draw in draws {
            for number in player_numbers {
                if draw.numbers.contains(number) {
                    matched.insert(*number);
                }
            }
        }

        matched
    }

    pub fn is_winner(matched: &BTreeSet<u8>) -> bool {
        matched.len() == NUMBERS_PER_ENTRY
    }

    /// Highest number of hits produced by one draw on its own
    pub fn best_single_draw_hits(player_numbers: &[u8], draws: &[Draw]) -> usize {
        draws
            .iter()
            .map(|draw| {
                player_numbers
                    .iter()
                    .filter(|n| draw.numbers.contains(*n))
                    .count()
            })
            .max()
            .unwrap_or(0)
    }

    pub fn evaluate(player: &Player, draws: &[Draw]) -> MatchResult {
        let matched_numbers = Self::matched_numbers_for(&player.numbers, draws);
        let is_winner = Self::is_winner(&matched_numbers);

        MatchResult {
            matched_numbers,
            is_winner,
            best_single_draw_hits: Self::best_single_draw_hits(&player.numbers, draws),
        }
    }

    /// One standing per player, in registration order
    pub fn standings(players: &[Player], draws: &[Draw]) -> Vec<PlayerStanding> {
        players
            .iter()
            .map(|player| PlayerStanding {
                player: player.clone(),
                result: Self::evaluate(player, draws),
            })
            .collect()
    }
}
