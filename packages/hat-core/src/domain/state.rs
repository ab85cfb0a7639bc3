use serde::Serialize;

/// A word drawn from the pool for the lead to explain.
pub type Word = String;

/// What the current turn is waiting on.
///
/// The two variants make the round's state machine explicit: a turn either
/// has a word in play or it does not, and every transition between the two
/// is spelled out in `Round`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TurnPhase {
    /// A (lead, target) pair is assigned; the lead has not drawn a word yet.
    AwaitingWord,
    /// The lead is explaining `word` to the target.
    Explaining { word: Word },
}

/// The active (lead, target) assignment and its phase.
///
/// `Round` holds `Option<CurrentTurn>`; `None` means `start_game` has not
/// been called, so no player is lead and every gated action is out of turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentTurn<P> {
    /// Player explaining words this turn.
    pub lead: P,
    /// Player designated to guess.
    pub target: P,
    pub phase: TurnPhase,
}

impl<P> CurrentTurn<P> {
    /// The word in play, if the lead has drawn one.
    pub fn word(&self) -> Option<&Word> {
        match &self.phase {
            TurnPhase::AwaitingWord => None,
            TurnPhase::Explaining { word } => Some(word),
        }
    }
}

/// Pair view returned by turn-advancing operations, for display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Turn<P> {
    pub lead: P,
    pub target: P,
}
