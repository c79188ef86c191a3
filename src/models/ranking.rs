use super::{Objectives, Score, crowding};
use tracing::instrument;

/// A scored population partitioned into ordered non-domination fronts,
/// with crowding distances assigned per front.
///
/// All ranking state lives in this struct, keyed by population index and
/// allocated fresh for each pass; nothing carries across generations.
#[derive(Debug)]
pub struct RankedPopulation<'a, G> {
    scores: &'a [Score<G>],
    objectives: &'a Objectives,
    fronts: Vec<Vec<usize>>,
    front_of: Vec<usize>,
    crowding: Vec<f64>,
}

impl<'a, G> RankedPopulation<'a, G> {
    /// Sorts `scores` into Pareto fronts.
    ///
    /// The dominance pass is O(N²) over the population; populations here
    /// are tens to low hundreds.
    #[instrument(level = "debug", skip_all, fields(population = scores.len()))]
    pub fn rank(scores: &'a [Score<G>], objectives: &'a Objectives) -> Self {
        assert!(!scores.is_empty(), "cannot rank an empty population");
        for score in scores {
            assert_eq!(
                score.objectives().len(),
                objectives.len(),
                "objective count mismatch"
            );
        }

        let n = scores.len();
        let mut dominated: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut num_dominators = vec![0usize; n];

        for p in 0..n {
            for q in 0..n {
                if p != q && scores[p].dominates(&scores[q], objectives) {
                    dominated[p].push(q);
                    num_dominators[q] += 1;
                }
            }
        }

        let mut front_of = vec![0usize; n];
        let mut assigned = vec![false; n];
        let mut processed = vec![false; n];
        let mut fronts: Vec<Vec<usize>> = Vec::new();
        let mut num_assigned = 0;

        while num_assigned < n {
            let current = fronts.len();
            let mut front = Vec::new();
            for i in 0..n {
                if !assigned[i] && num_dominators[i] == 0 {
                    front.push(i);
                    assigned[i] = true;
                    front_of[i] = current;
                    num_assigned += 1;
                }
            }
            // Dominance is a strict partial order, so some minimal
            // element always exists among the unassigned.
            assert!(!front.is_empty(), "non-domination front came up empty");

            for i in 0..n {
                if assigned[i] && !processed[i] {
                    for &q in &dominated[i] {
                        num_dominators[q] -= 1;
                    }
                    processed[i] = true;
                }
            }

            fronts.push(front);
        }

        let mut crowding_distances = vec![0.0; n];
        for front in &fronts {
            crowding::assign(scores, front, objectives, &mut crowding_distances);
        }

        Self {
            scores,
            objectives,
            fronts,
            front_of,
            crowding: crowding_distances,
        }
    }

    pub fn scores(&self) -> &'a [Score<G>] {
        self.scores
    }

    pub(crate) fn objectives(&self) -> &'a Objectives {
        self.objectives
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// The fronts in domination order, as index lists into `scores`.
    /// Every individual appears in exactly one front.
    pub fn fronts(&self) -> &[Vec<usize>] {
        &self.fronts
    }

    /// Front index (0 = best) of the individual at `index`.
    pub fn front_of(&self, index: usize) -> usize {
        self.front_of[index]
    }

    /// Crowding distance of the individual at `index`, computed within
    /// its front.
    pub fn crowding_of(&self, index: usize) -> f64 {
        self.crowding[index]
    }

    /// The non-dominated individuals: front 0.
    pub fn pareto_front(&self) -> &[usize] {
        &self.fronts[0]
    }
}
