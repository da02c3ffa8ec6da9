mod entry;
pub mod error;
pub mod game;
pub mod rules;

use dashmap::DashMap;
use entry::Entry;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sorted_vec::SortedVec;
use std::sync::Arc;

pub use crate::error::{Error, Result};
pub use crate::game::{instructions, Computer, Game, Outcome, Player, Side};
pub use crate::rules::Rules;


/// Decides moves for the subtraction game in which the player who takes the
/// last coin loses.
///
/// Positions are classified once per pile size and memoized; clones share
/// the same table, so an evaluator can be handed to several threads.
#[derive(Debug, Clone)]
pub struct Evaluator {
    rules: Rules,
    cache: Arc<DashMap<usize, Entry>>,
}

/// Classification of every pile size up to some bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub rules: Rules,
    pub losing_positions: Vec<usize>,
    /// Smallest winning move for each pile size, starting at 1.
    pub good_moves: Vec<(usize, Option<usize>)>,
}

impl Evaluator {
    /// Constructs a new evaluator with an empty table.
    pub fn new(rules: Rules) -> Evaluator {
        Evaluator {
            rules,
            cache: Arc::new(DashMap::new()),
        }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Returns the number of pile sizes classified so far.
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    /// Returns every classified pile size with its smallest winning move.
    pub fn positions(&self) -> Vec<(usize, Option<usize>)> {
        let mut positions: Vec<_> = self
            .cache
            .iter()
            .map(|e| (*e.key(), e.value().good_move()))
            .collect();
        positions.sort_unstable();
        positions
    }

    /// Returns true if the player to move from `pile` cannot avoid losing
    /// against perfect play.
    pub fn is_losing_position(&self, pile: usize) -> Result<bool> {
        Ok(self.entry(checked(pile)?).is_losing())
    }

    /// Returns the smallest move that leaves the opponent in a losing
    /// position, or `None` if `pile` is itself losing.
    pub fn find_good_move(&self, pile: usize) -> Result<Option<usize>> {
        Ok(self.entry(checked(pile)?).good_move())
    }

    /// Picks the move to play from `pile`. Without a winning move the
    /// evaluator takes a single coin, leaving the opponent the most turns
    /// in which to go wrong.
    pub fn choose_move(&self, pile: usize) -> Result<usize> {
        Ok(self.find_good_move(pile)?.unwrap_or(1))
    }

    /// Returns the losing pile sizes in `1..=upto`.
    pub fn losing_positions(&self, upto: usize) -> Result<SortedVec<usize>> {
        self.entry(checked(upto)?);
        let mut losing = SortedVec::new();
        for e in self.cache.iter() {
            if *e.key() <= upto && e.value().is_losing() {
                losing.insert(*e.key());
            }
        }
        Ok(losing)
    }

    /// Classifies every pile size in `1..=upto` in parallel.
    pub fn analyse(&self, upto: usize) -> Result<Analysis> {
        checked(upto)?;
        let good_moves: Vec<(usize, Option<usize>)> = (1..=upto)
            .into_par_iter()
            .map(|pile| (pile, self.entry(pile).good_move()))
            .collect();
        Ok(Analysis {
            rules: self.rules,
            losing_positions: self.losing_positions(upto)?.into_vec(),
            good_moves,
        })
    }

    fn cached(&self, pile: usize) -> Option<Entry> {
        self.cache.get(&pile).map(|e| *e)
    }

    /// Looks up `pile`, classifying it and every unclassified pile below it
    /// first. Entries are only ever inserted directly above a classified
    /// pile, so the table always holds a contiguous run starting at 1.
    fn entry(&self, pile: usize) -> Entry {
        if let Some(entry) = self.cached(pile) {
            return entry;
        }

        let mut start = pile;
        while start > 1 && !self.cache.contains_key(&(start - 1)) {
            start -= 1;
        }
        log::debug!("classifying piles {}..={}", start, pile);

        let mut entry = Entry::new(None);
        for p in start..=pile {
            entry = self.classify(p);
            self.cache.insert(p, entry);
        }
        entry
    }

    /// A good move leaves the opponent in a losing position. Taking the
    /// whole pile never qualifies, since that takes the last coin.
    fn classify(&self, pile: usize) -> Entry {
        if pile == 1 {
            return Entry::new(None);
        }
        let good_move = (1..=self.rules.move_limit(pile))
            .find(|&taken| taken < pile && self.entry(pile - taken).is_losing());
        Entry::new(good_move)
    }
}

fn checked(pile: usize) -> Result<usize> {
    match pile {
        0 => Err(Error::EmptyPile),
        _ => Ok(pile),
    }
}
