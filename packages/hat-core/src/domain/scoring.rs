use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

/// Per-player tallies, zero until first credited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Tally {
    total: u32,
    explained: u32,
    guessed: u32,
}

/// Mutable score counters for one round. Counters only ever grow.
#[derive(Debug, Clone)]
pub struct ScoreBoard<P> {
    tallies: HashMap<P, Tally>,
}

/// One row of the standings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerScore<P> {
    pub player: P,
    /// Points from both roles combined.
    pub total: u32,
    /// Points earned as lead.
    pub explained: u32,
    /// Points earned as target.
    pub guessed: u32,
}

impl<P: Clone + Eq + Hash> ScoreBoard<P> {
    pub fn new() -> Self {
        Self {
            tallies: HashMap::new(),
        }
    }

    /// Credit a correct guess: one point to each role, plus the
    /// role-specific counter for each.
    pub fn credit_guess(&mut self, lead: &P, target: &P) {
        let lead_tally = self.tallies.entry(lead.clone()).or_default();
        lead_tally.total += 1;
        lead_tally.explained += 1;

        let target_tally = self.tallies.entry(target.clone()).or_default();
        target_tally.total += 1;
        target_tally.guessed += 1;
    }

    pub fn total(&self, player: &P) -> u32 {
        self.tallies.get(player).map_or(0, |t| t.total)
    }

    pub fn explained(&self, player: &P) -> u32 {
        self.tallies.get(player).map_or(0, |t| t.explained)
    }

    pub fn guessed(&self, player: &P) -> u32 {
        self.tallies.get(player).map_or(0, |t| t.guessed)
    }

    /// Standings for every player in `order`, highest total first.
    ///
    /// Players who never scored appear with zeros. The sort is stable, so
    /// ties keep the seating order and the table is deterministic.
    pub fn standings(&self, order: &[P]) -> Vec<PlayerScore<P>> {
        let mut rows: Vec<PlayerScore<P>> = order
            .iter()
            .map(|p| {
                let t = self.tallies.get(p).copied().unwrap_or_default();
                PlayerScore {
                    player: p.clone(),
                    total: t.total,
                    explained: t.explained,
                    guessed: t.guessed,
                }
            })
            .collect();
        rows.sort_by(|a, b| b.total.cmp(&a.total));
        rows
    }
}

impl<P: Clone + Eq + Hash> Default for ScoreBoard<P> {
    fn default() -> Self {
        Self::new()
    }
}
