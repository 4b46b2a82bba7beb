//! Per-color score tally
//!
//! Owned by the `Atom` and handed to the collision pass by `&mut`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::tint::Tint;
use crate::consts::NUCLEON_POINTS;

/// Points per color, iterated in `Tint` declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScoreBoard {
    entries: BTreeMap<Tint, u64>,
}

impl ScoreBoard {
    /// Board with a zero entry for every scoring color given
    pub fn with_colors(colors: impl IntoIterator<Item = Tint>) -> Self {
        let entries = colors
            .into_iter()
            .filter(Tint::scores)
            .map(|c| (c, 0))
            .collect();
        Self { entries }
    }

    /// Credit a nucleon strike by an electron of `color`.
    /// Returns the points added, or `None` for uncolored electrons.
    pub fn award(&mut self, color: Tint) -> Option<u64> {
        if !color.scores() {
            return None;
        }
        *self.entries.entry(color).or_insert(0) += NUCLEON_POINTS;
        Some(NUCLEON_POINTS)
    }

    pub fn get(&self, color: Tint) -> u64 {
        self.entries.get(&color).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.entries.values().sum()
    }

    /// Color with the most points (ties go to the earlier color)
    pub fn leader(&self) -> Option<(Tint, u64)> {
        self.entries
            .iter()
            .filter(|(_, points)| **points > 0)
            .fold(None, |best: Option<(Tint, u64)>, (&c, &p)| match best {
                Some((_, bp)) if bp >= p => best,
                _ => Some((c, p)),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tint, u64)> + '_ {
        self.entries.iter().map(|(&c, &p)| (c, p))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zero every entry, keeping the colors
    pub fn reset(&mut self) {
        self.entries.values_mut().for_each(|p| *p = 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_colors_start_at_zero() {
        let board = ScoreBoard::with_colors([Tint::Blue, Tint::Lime, Tint::White]);
        assert_eq!(board.len(), 2);
        assert_eq!(board.get(Tint::Blue), 0);
        assert_eq!(board.total(), 0);
        assert!(board.leader().is_none());
    }

    #[test]
    fn test_award_adds_ten() {
        let mut board = ScoreBoard::with_colors([Tint::Blue]);
        assert_eq!(board.award(Tint::Blue), Some(10));
        assert_eq!(board.award(Tint::Blue), Some(10));
        assert_eq!(board.get(Tint::Blue), 20);
    }

    #[test]
    fn test_white_never_scores() {
        let mut board = ScoreBoard::with_colors([Tint::Blue]);
        assert_eq!(board.award(Tint::White), None);
        assert_eq!(board.total(), 0);
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_unseeded_color_is_added() {
        let mut board = ScoreBoard::default();
        board.award(Tint::Green);
        assert_eq!(board.get(Tint::Green), 10);
    }

    #[test]
    fn test_display_order_and_leader() {
        let mut board = ScoreBoard::with_colors([Tint::Cyan, Tint::Red, Tint::Lime, Tint::Blue]);
        let order: Vec<Tint> = board.iter().map(|(c, _)| c).collect();
        assert_eq!(order, vec![Tint::Blue, Tint::Lime, Tint::Red, Tint::Cyan]);

        board.award(Tint::Red);
        board.award(Tint::Cyan);
        board.award(Tint::Cyan);
        assert_eq!(board.leader(), Some((Tint::Cyan, 20)));

        board.award(Tint::Red);
        // Tie: earlier color wins
        assert_eq!(board.leader(), Some((Tint::Red, 20)));
    }

    #[test]
    fn test_reset_keeps_colors() {
        let mut board = ScoreBoard::with_colors([Tint::Blue, Tint::Red]);
        board.award(Tint::Red);
        board.reset();
        assert_eq!(board.total(), 0);
        assert_eq!(board.len(), 2);
    }
}
