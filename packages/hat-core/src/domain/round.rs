//! Round orchestration: turn sequencing, score bookkeeping, word lifecycle.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::domain::rotation::Rotation;
use crate::domain::scoring::{PlayerScore, ScoreBoard};
use crate::domain::state::{CurrentTurn, Turn, TurnPhase, Word};
use crate::domain::words::WordPool;
use crate::errors::RoundError;

/// One game session: owns the turn cursor, the score board, and the word
/// currently in play, drawing from and returning to an external [`WordPool`].
///
/// `P` is the caller's player identifier (opaque beyond equality and
/// hashing); `T` is a slot for an externally managed timer handle, stored
/// but never interpreted here. Every method runs to completion on the
/// caller's thread — the engine expects one serialized stream of player
/// actions and is not safe to share across threads.
pub struct Round<P, T = ()> {
    pool: Box<dyn WordPool<P>>,
    players: Vec<P>,
    rotation: Rotation,
    turn: Option<CurrentTurn<P>>,
    scores: ScoreBoard<P>,
    timer: Option<T>,
}

impl<P, T> Round<P, T>
where
    P: Clone + Eq + Hash + Debug,
{
    /// `players` is the fixed seating order for the round; it does not
    /// change once the round exists.
    pub fn new(pool: Box<dyn WordPool<P>>, players: Vec<P>) -> Self {
        let rotation = Rotation::new(players.len());
        Self {
            pool,
            players,
            rotation,
            turn: None,
            scores: ScoreBoard::new(),
            timer: None,
        }
    }

    /// Start the first turn and return its (lead, target) pair.
    ///
    /// Refuses to start with fewer than two players: the pairing schedule
    /// has no self-pair-free sequence below that, and the rotation cursors
    /// must never move for such a round.
    pub fn start_game(&mut self) -> Result<Turn<P>, RoundError> {
        if self.players.len() < 2 {
            return Err(RoundError::NotEnoughPlayers);
        }
        Ok(self.next_turn())
    }

    /// Draw a word for the current lead to explain.
    ///
    /// `Ok(None)` means the pool is exhausted; no word is stored and the
    /// caller decides whether the game is over.
    pub fn start_move(&mut self, player: &P) -> Result<Option<Word>, RoundError> {
        self.require_lead(player)?;
        Ok(self.next_word())
    }

    /// Record a correct guess and draw the next word for the same lead.
    ///
    /// The lead and the target each gain one point, plus their role-specific
    /// counters. The lead keeps explaining within the same turn, so the next
    /// word comes back immediately with `start_move` semantics — and the
    /// points stand even when the pool comes back empty.
    pub fn guessed(&mut self, player: &P) -> Result<Option<Word>, RoundError> {
        let (lead, target) = self.require_lead(player)?;
        self.scores.credit_guess(&lead, &target);
        debug!(lead = ?lead, target = ?target, "guess credited");
        Ok(self.next_word())
    }

    /// Give up on the current word and pass the turn.
    ///
    /// No points are awarded and the word is considered consumed — it does
    /// not go back into the pool.
    pub fn failed(&mut self, player: &P) -> Result<Turn<P>, RoundError> {
        self.require_lead(player)?;
        Ok(self.next_turn())
    }

    /// The turn's time elapsed: put any held word back and pass the turn.
    ///
    /// The pool receives exactly one `add_word` call, tagged with the lead
    /// who held the word; with no word in play the pool is untouched.
    pub fn time_ran_out(&mut self, player: &P) -> Result<Turn<P>, RoundError> {
        let (lead, _) = self.require_lead(player)?;
        if let Some(CurrentTurn {
            phase: TurnPhase::Explaining { word },
            ..
        }) = self.turn.take()
        {
            debug!(word = %word, lead = ?lead, "returning unexplained word to the pool");
            self.pool.add_word(word, &lead);
        }
        Ok(self.next_turn())
    }

    /// Standings for every player, highest total first; ties keep the
    /// seating order.
    pub fn standings(&self) -> Vec<PlayerScore<P>> {
        self.scores.standings(&self.players)
    }

    /// The active turn, or `None` before `start_game`.
    pub fn current_turn(&self) -> Option<&CurrentTurn<P>> {
        self.turn.as_ref()
    }

    /// Seating order fixed at construction.
    pub fn players(&self) -> &[P] {
        &self.players
    }

    /// Opaque timer handle owned by the external driver.
    pub fn timer(&self) -> Option<&T> {
        self.timer.as_ref()
    }

    pub fn timer_mut(&mut self) -> Option<&mut T> {
        self.timer.as_mut()
    }

    pub fn set_timer(&mut self, timer: T) {
        self.timer = Some(timer);
    }

    pub fn take_timer(&mut self) -> Option<T> {
        self.timer.take()
    }

    /// Turn gate: `player` must be the current lead. Returns the pair so
    /// callers can act on it without re-borrowing the turn.
    fn require_lead(&self, player: &P) -> Result<(P, P), RoundError> {
        match &self.turn {
            Some(turn) if turn.lead == *player => Ok((turn.lead.clone(), turn.target.clone())),
            _ => Err(RoundError::NotYourTurn),
        }
    }

    /// Advance the rotation and open a fresh turn awaiting its first word.
    fn next_turn(&mut self) -> Turn<P> {
        let (lead_seat, target_seat) = self.rotation.advance();
        let lead = self.players[lead_seat].clone();
        let target = self.players[target_seat].clone();
        debug!(lead = ?lead, target = ?target, "turn advanced");
        self.turn = Some(CurrentTurn {
            lead: lead.clone(),
            target: target.clone(),
            phase: TurnPhase::AwaitingWord,
        });
        Turn { lead, target }
    }

    /// Draw the next word for the current lead. On exhaustion the turn
    /// drops back to awaiting a word so no stale word lingers in play.
    fn next_word(&mut self) -> Option<Word> {
        match self.pool.get_word() {
            Some(word) => {
                if let Some(turn) = self.turn.as_mut() {
                    turn.phase = TurnPhase::Explaining { word: word.clone() };
                }
                Some(word)
            }
            None => {
                debug!("word pool exhausted");
                if let Some(turn) = self.turn.as_mut() {
                    turn.phase = TurnPhase::AwaitingWord;
                }
                None
            }
        }
    }
}
