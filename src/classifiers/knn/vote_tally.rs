use std::cmp::Ordering;
use std::collections::HashMap;

/// Weight recorded for a neighbour at distance exactly zero when voting by
/// inverse distance.
pub const ZERO_DISTANCE_WEIGHT: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoteWeighting {
    /// One vote per neighbour.
    #[default]
    Uniform,
    /// Each neighbour votes `1 / distance`.
    InverseDistance,
}

impl VoteWeighting {
    pub fn is_inverse(self) -> bool {
        matches!(self, VoteWeighting::InverseDistance)
    }

    #[inline]
    pub fn weight(self, distance: f64) -> f64 {
        match self {
            VoteWeighting::Uniform => 1.0,
            VoteWeighting::InverseDistance if distance == 0.0 => ZERO_DISTANCE_WEIGHT,
            VoteWeighting::InverseDistance => 1.0 / distance,
        }
    }
}

impl From<bool> for VoteWeighting {
    fn from(inverse: bool) -> Self {
        if inverse {
            VoteWeighting::InverseDistance
        } else {
            VoteWeighting::Uniform
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Slot<'a> {
    label: &'a str,
    score: f64,
    exact_matches: usize,
}

/// Accumulated score per label.
///
/// Under inverse weighting a neighbour at distance zero decides the vote
/// outright: the label with the most exact matches wins whatever the other
/// neighbours add up to. Its recorded score is still
/// [`ZERO_DISTANCE_WEIGHT`]. Otherwise the highest score wins. Equal
/// standings go to the label that sorts first lexicographically, so the
/// result never depends on insertion order.
#[derive(Debug, Clone, Default)]
pub struct VoteTally<'a> {
    slots: Vec<Slot<'a>>,
    index: HashMap<&'a str, usize>,
}

impl<'a> VoteTally<'a> {
    /// Tally with every distinct label of `labels` at zero.
    pub fn seeded<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tally = Self::default();
        for label in labels {
            tally.slot(label);
        }
        tally
    }

    fn slot(&mut self, label: &'a str) -> &mut Slot<'a> {
        let next = self.slots.len();
        let i = *self.index.entry(label).or_insert(next);
        if i == next {
            self.slots.push(Slot {
                label,
                score: 0.0,
                exact_matches: 0,
            });
        }
        &mut self.slots[i]
    }

    /// Counts one neighbour of `label` at `distance`.
    pub fn vote(&mut self, label: &'a str, distance: f64, weighting: VoteWeighting) {
        let slot = self.slot(label);
        slot.score += weighting.weight(distance);
        if weighting.is_inverse() && distance == 0.0 {
            slot.exact_matches += 1;
        }
    }

    pub fn score(&self, label: &str) -> Option<f64> {
        self.index.get(label).map(|&i| self.slots[i].score)
    }

    pub fn winner(&self) -> Option<&'a str> {
        self.slots
            .iter()
            .min_by(|a, b| standing(a, b))
            .map(|slot| slot.label)
    }
}

/// Most exact matches first, then highest score, then smallest label.
fn standing(a: &Slot<'_>, b: &Slot<'_>) -> Ordering {
    b.exact_matches
        .cmp(&a.exact_matches)
        .then_with(|| b.score.total_cmp(&a.score))
        .then_with(|| a.label.cmp(b.label))
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIFORM: VoteWeighting = VoteWeighting::Uniform;
    const INVERSE: VoteWeighting = VoteWeighting::InverseDistance;

    #[test]
    fn seeded_labels_start_at_zero_and_dedupe() {
        let t = VoteTally::seeded(["N", "O", "N"]);
        assert_eq!(t.slots.len(), 2);
        assert_eq!(t.score("N"), Some(0.0));
        assert_eq!(t.score("O"), Some(0.0));
        assert_eq!(t.score("X"), None);
    }

    #[test]
    fn winner_is_highest_score() {
        let mut t = VoteTally::seeded(["a", "b", "c"]);
        t.vote("b", 0.5, INVERSE);
        t.vote("c", 1.0, INVERSE);
        t.vote("b", 2.0, INVERSE);
        assert_eq!(t.winner(), Some("b"));
        assert_eq!(t.score("b"), Some(2.5));
    }

    #[test]
    fn ties_go_to_lexicographically_first_label() {
        let mut t = VoteTally::seeded(["zeta", "alpha", "mid"]);
        t.vote("zeta", 3.0, UNIFORM);
        t.vote("mid", 7.0, UNIFORM);
        assert_eq!(t.winner(), Some("mid"));

        let all_zero = VoteTally::seeded(["O", "N"]);
        assert_eq!(all_zero.winner(), Some("N"));
    }

    #[test]
    fn tie_break_ignores_insertion_order() {
        let mut a = VoteTally::seeded(["x", "y"]);
        let mut b = VoteTally::seeded(["y", "x"]);
        for t in [&mut a, &mut b] {
            t.vote("x", 2.0, INVERSE);
            t.vote("y", 2.0, INVERSE);
        }
        assert_eq!(a.winner(), b.winner());
        assert_eq!(a.winner(), Some("x"));
    }

    #[test]
    fn unseen_label_creates_entry() {
        let mut t = VoteTally::default();
        assert!(t.winner().is_none());
        t.vote("q", 4.0, INVERSE);
        assert_eq!(t.winner(), Some("q"));
        assert_eq!(t.score("q"), Some(0.25));
    }

    #[test]
    fn exact_match_beats_any_sum_of_close_neighbours() {
        let mut t = VoteTally::seeded(["exact", "near"]);
        t.vote("exact", 0.0, INVERSE);
        for _ in 0..4 {
            t.vote("near", 0.001, INVERSE);
        }
        assert!(t.score("near").unwrap() > t.score("exact").unwrap());
        assert_eq!(t.score("exact"), Some(ZERO_DISTANCE_WEIGHT));
        assert_eq!(t.winner(), Some("exact"));
    }

    #[test]
    fn more_exact_matches_win_among_exact_labels() {
        let mut t = VoteTally::seeded(["a", "b"]);
        t.vote("a", 0.0, INVERSE);
        t.vote("b", 0.0, INVERSE);
        t.vote("b", 0.0, INVERSE);
        assert_eq!(t.winner(), Some("b"));

        let mut tied = VoteTally::seeded(["b", "a"]);
        tied.vote("b", 0.0, INVERSE);
        tied.vote("a", 0.0, INVERSE);
        tied.vote("b", 0.5, INVERSE);
        assert_eq!(tied.winner(), Some("b"));
    }

    #[test]
    fn zero_distance_is_an_ordinary_vote_when_uniform() {
        let mut t = VoteTally::seeded(["exact", "near"]);
        t.vote("exact", 0.0, UNIFORM);
        t.vote("near", 0.1, UNIFORM);
        t.vote("near", 0.2, UNIFORM);
        assert_eq!(t.winner(), Some("near"));
    }

    #[test]
    fn inverse_weighting_uses_sentinel_for_exact_match() {
        assert_eq!(INVERSE.weight(0.0), ZERO_DISTANCE_WEIGHT);
        assert_eq!(INVERSE.weight(4.0), 0.25);
        assert_eq!(UNIFORM.weight(0.0), 1.0);
        assert_eq!(VoteWeighting::from(true), INVERSE);
        assert!(!VoteWeighting::from(false).is_inverse());
    }
}
