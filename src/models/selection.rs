use super::{Objectives, RankedPopulation, Score};
use tracing::instrument;

#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub enum SelectionError {
    /// More survivors were requested than scored individuals exist.
    /// Selection never silently truncates.
    #[error("requested {requested} survivors from a population of {available}")]
    NotEnoughCandidates { requested: usize, available: usize },
}

/// Environmental selection: keeps exactly `num_survivors` genotypes,
/// admitting whole fronts in domination order and, within the cut front,
/// preferring higher crowding distance.
///
/// Consumes the scores so survivors keep their identity; callers that
/// need to keep the batch use [`select_indices`].
pub fn select<G>(
    num_survivors: usize,
    scores: Vec<Score<G>>,
    objectives: &Objectives,
) -> Result<Vec<G>, SelectionError> {
    let selected = select_indices(num_survivors, &scores, objectives)?;

    let mut slots: Vec<Option<G>> = scores
        .into_iter()
        .map(|score| Some(score.into_genotype()))
        .collect();
    Ok(selected
        .iter()
        .map(|&index| slots[index].take().expect("selected indices are unique"))
        .collect())
}

/// Index form of [`select`], in admission order.
#[instrument(level = "debug", skip(scores, objectives), fields(num_survivors = num_survivors, population = scores.len()))]
pub fn select_indices<G>(
    num_survivors: usize,
    scores: &[Score<G>],
    objectives: &Objectives,
) -> Result<Vec<usize>, SelectionError> {
    if num_survivors > scores.len() {
        return Err(SelectionError::NotEnoughCandidates {
            requested: num_survivors,
            available: scores.len(),
        });
    }

    let ranked = RankedPopulation::rank(scores, objectives);
    let mut selected = Vec::with_capacity(num_survivors);

    for front in ranked.fronts() {
        let remaining = num_survivors - selected.len();
        if remaining == 0 {
            break;
        }

        if front.len() <= remaining {
            selected.extend_from_slice(front);
        } else {
            // Cut front: the most diverse members fill what is left.
            let mut by_crowding = front.clone();
            by_crowding
                .sort_by(|&a, &b| ranked.crowding_of(b).total_cmp(&ranked.crowding_of(a)));
            selected.extend(by_crowding.into_iter().take(remaining));
        }
    }

    Ok(selected)
}
