//! Word pool trait definition.

use crate::domain::state::Word;

/// External source and sink of words to explain.
///
/// Implementations own storage and ordering; the round engine only draws
/// and, on a timed-out turn, hands the unexplained word back.
pub trait WordPool<P> {
    /// Draw and remove one word. `None` signals the pool is exhausted.
    fn get_word(&mut self) -> Option<Word>;

    /// Return a word to the pool, tagged with the player who held it.
    fn add_word(&mut self, word: Word, player: &P);
}
