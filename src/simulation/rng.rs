//! Coin used by the `if_random` instruction

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Fair coin shared by every creature in a run
pub trait CoinFlip {
    /// Heads with probability 1/2
    fn flip(&mut self) -> bool;
}

/// Deterministic coin backed by ChaCha8
#[derive(Debug, Clone)]
pub struct SeededCoin {
    rng: ChaCha8Rng,
}

impl SeededCoin {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl CoinFlip for SeededCoin {
    fn flip(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

/// Replays a fixed list of outcomes, cycling when it runs out
#[derive(Debug, Clone, Default)]
pub struct ScriptedCoin {
    outcomes: Vec<bool>,
    next: usize,
    flips: usize,
}

impl ScriptedCoin {
    pub fn new(outcomes: impl Into<Vec<bool>>) -> Self {
        Self {
            outcomes: outcomes.into(),
            next: 0,
            flips: 0,
        }
    }

    pub fn always(heads: bool) -> Self {
        Self::new(vec![heads])
    }

    /// How many times the coin was flipped
    pub fn flips(&self) -> usize {
        self.flips
    }
}

impl CoinFlip for ScriptedCoin {
    fn flip(&mut self) -> bool {
        self.flips += 1;
        if self.outcomes.is_empty() {
            return false;
        }
        let outcome = self.outcomes[self.next];
        self.next = (self.next + 1) % self.outcomes.len();
        outcome
    }
}

impl<C: CoinFlip + ?Sized> CoinFlip for &mut C {
    fn flip(&mut self) -> bool {
        (**self).flip()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SeededCoin::new(42);
        let mut b = SeededCoin::new(42);
        let first: Vec<bool> = (0..64).map(|_| a.flip()).collect();
        let second: Vec<bool> = (0..64).map(|_| b.flip()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_seeded_coin_is_fair() {
        let mut coin = SeededCoin::new(7);
        let trials = 20_000;
        let heads = (0..trials).filter(|_| coin.flip()).count();
        let ratio = heads as f64 / trials as f64;
        assert!(
            (0.47..=0.53).contains(&ratio),
            "heads ratio {} outside tolerance",
            ratio
        );
    }

    #[test]
    fn test_scripted_coin_cycles() {
        let mut coin = ScriptedCoin::new(vec![true, false, false]);
        let seen: Vec<bool> = (0..6).map(|_| coin.flip()).collect();
        assert_eq!(seen, vec![true, false, false, true, false, false]);
        assert_eq!(coin.flips(), 6);
    }

    #[test]
    fn test_empty_script_is_tails() {
        let mut coin = ScriptedCoin::default();
        assert!(!coin.flip());
    }
}
