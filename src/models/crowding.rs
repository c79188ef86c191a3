use super::{Objectives, Score};

/// Adds crowding contributions for one batch (a front, or any scored
/// group). `members` index into `scores`, and distances are written into
/// the matching slots of `distances`.
///
/// Member distances are reset to zero first; values from a previous pass
/// must never survive into this one.
pub(crate) fn assign<G>(
    scores: &[Score<G>],
    members: &[usize],
    objectives: &Objectives,
    distances: &mut [f64],
) {
    for &member in members {
        distances[member] = 0.0;
    }

    for objective in objectives.active() {
        let mut order: Vec<usize> = members.to_vec();
        order.sort_by(|&a, &b| {
            scores[a]
                .objective(objective)
                .total_cmp(&scores[b].objective(objective))
        });

        // Boundary individuals are always preserved under truncation.
        let (first, last) = (order[0], order[order.len() - 1]);
        distances[first] = f64::INFINITY;
        distances[last] = f64::INFINITY;

        let min = scores[first].objective(objective);
        let max = scores[last].objective(objective);

        // A zero-width range contributes nothing rather than dividing by
        // zero.
        if max - min > 0.0 {
            for k in 1..order.len() - 1 {
                let gap = (scores[order[k + 1]].objective(objective)
                    - scores[order[k - 1]].objective(objective))
                .abs();
                distances[order[k]] += gap / (max - min);
            }
        }
    }
}

/// Crowding distances for a standalone batch, index-aligned with
/// `scores`. Recomputed from scratch on every call.
pub fn crowding_distances<G>(scores: &[Score<G>], objectives: &Objectives) -> Vec<f64> {
    assert!(
        !scores.is_empty(),
        "cannot assign crowding distances to an empty batch"
    );

    let members: Vec<usize> = (0..scores.len()).collect();
    let mut distances = vec![0.0; scores.len()];
    assign(scores, &members, objectives, &mut distances);
    distances
}
