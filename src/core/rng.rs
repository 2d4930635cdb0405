//! Shuffle sources.
//!
//! The engine never picks its own entropy. Every shuffle goes through a
//! `Shuffler` handed in at game creation:
//!
//! - **`GameRng`**: seeded ChaCha8, deterministic per seed, checkpointable
//! - **`ScriptedShuffle`**: places a fixed sequence of cards on top, for
//!   reproducible scenarios
//!
//! ```
//! use match_cards::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut xs = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! let mut ys = xs.clone();
//! a.shuffle_slice(&mut xs);
//! b.shuffle_slice(&mut ys);
//! assert_eq!(xs, ys);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Permutes a pile of cards in place.
///
/// Implementations must only reorder: the multiset of cards is unchanged.
pub trait Shuffler {
    fn shuffle(&mut self, cards: &mut [Card]);
}

impl<S: Shuffler + ?Sized> Shuffler for Box<S> {
    fn shuffle(&mut self, cards: &mut [Card]) {
        (**self).shuffle(cards);
    }
}

/// Deterministic RNG backing the default shuffle.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle any slice in place.
    pub fn shuffle_slice<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl Shuffler for GameRng {
    fn shuffle(&mut self, cards: &mut [Card]) {
        self.shuffle_slice(cards);
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many shuffles have happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Shuffler that stacks the pile instead of randomizing it.
///
/// On its first call it moves `top` to the top of the pile so that
/// `top[0]` is drawn first, `top[1]` second, and so on. The remaining
/// cards keep their relative order below. Later calls (pile
/// replenishment) leave the order untouched.
///
/// Cards in `top` that are not present in the pile are ignored.
#[derive(Clone, Debug, Default)]
pub struct ScriptedShuffle {
    top: Vec<Card>,
    used: bool,
}

impl ScriptedShuffle {
    /// Stack `top` on the first shuffle, first element drawn first.
    pub fn new(top: impl IntoIterator<Item = Card>) -> Self {
        Self {
            top: top.into_iter().collect(),
            used: false,
        }
    }

    /// A shuffler that never changes the order.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            top: Vec::new(),
            used: true,
        }
    }
}

impl Shuffler for ScriptedShuffle {
    fn shuffle(&mut self, cards: &mut [Card]) {
        if self.used {
            return;
        }
        self.used = true;

        // The top of a pile is its end, so the first card to draw goes last.
        let mut rest: Vec<Card> = cards.to_vec();
        let mut stacked = Vec::with_capacity(self.top.len());
        for wanted in &self.top {
            if let Some(pos) = rest.iter().position(|c| c == wanted) {
                stacked.push(rest.remove(pos));
            }
        }
        stacked.reverse();
        rest.extend(stacked);
        cards.copy_from_slice(&rest);
    }
}
