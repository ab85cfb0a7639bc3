//! Turn rotation: the standard Hat pairing schedule.

/// Unending, deterministic (lead, target) schedule over a fixed player count.
///
/// Both cursors step circularly on every advance. When the lead wraps back
/// to seat 0 — one full cycle of leads completed — the target takes one
/// extra step so partners shift between cycles, and one more step if that
/// would land it on the lead. A pair never contains the same seat twice.
///
/// O(1) state and O(1) per step; no precomputed schedule. Defined for two
/// or more seats — `Round::start_game` refuses smaller rounds before the
/// cursors ever move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation {
    len: usize,
    lead: usize,
    target: usize,
}

impl Rotation {
    /// `len` is the number of seats, index-stable for the round's lifetime.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            lead: 0,
            target: 1,
        }
    }

    /// Returns the current (lead, target) seat pair and steps the cursors.
    pub fn advance(&mut self) -> (usize, usize) {
        debug_assert!(self.len >= 2, "rotation is defined for two or more seats");
        let m = self.len;
        let pair = (self.lead, self.target);
        self.lead = (self.lead + 1) % m;
        self.target = (self.target + 1) % m;
        if self.lead == 0 {
            self.target = (self.target + 1) % m;
            if self.target == self.lead {
                self.target = (self.target + 1) % m;
            }
        }
        pair
    }
}
