use rand::Rng;
use serde::{Deserialize, Serialize};

/// Tie policy for the max/min argument utilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreak {
    /// Keep the earliest index among tied values.
    First,
    /// Pick uniformly among tied values.
    Random,
}

/// Index of the maximum value. Drivers use this to pick generation
/// champions; the tie policy decides between equally good candidates.
pub fn argmax<R: Rng>(values: &[f64], tie_break: TieBreak, rng: &mut R) -> usize {
    assert!(!values.is_empty(), "argmax of an empty slice");
    assert!(
        values.iter().all(|value| !value.is_nan()),
        "argmax over NaN values"
    );

    let mut best = f64::NEG_INFINITY;
    let mut ties: Vec<usize> = Vec::with_capacity(values.len());
    for (index, &value) in values.iter().enumerate() {
        if value == best {
            ties.push(index);
        } else if value > best {
            best = value;
            ties.clear();
            ties.push(index);
        }
    }

    pick(&ties, tie_break, rng)
}

/// Index of the minimum value, with the same tie policy as [`argmax`].
pub fn argmin<R: Rng>(values: &[f64], tie_break: TieBreak, rng: &mut R) -> usize {
    assert!(!values.is_empty(), "argmin of an empty slice");
    assert!(
        values.iter().all(|value| !value.is_nan()),
        "argmin over NaN values"
    );

    let mut best = f64::INFINITY;
    let mut ties: Vec<usize> = Vec::with_capacity(values.len());
    for (index, &value) in values.iter().enumerate() {
        if value == best {
            ties.push(index);
        } else if value < best {
            best = value;
            ties.clear();
            ties.push(index);
        }
    }

    pick(&ties, tie_break, rng)
}

fn pick<R: Rng>(ties: &[usize], tie_break: TieBreak, rng: &mut R) -> usize {
    match tie_break {
        TieBreak::First => ties[0],
        TieBreak::Random => ties[rng.random_range(0..ties.len())],
    }
}
