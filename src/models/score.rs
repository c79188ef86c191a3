use super::Objectives;

/// A genotype together with the raw score vector produced by evaluation.
///
/// Objective values are what ranking operates on; the auxiliary stats are
/// carried along for logging only. Scores live for exactly one
/// generation's ranking/selection/breeding pass.
#[derive(Debug, Clone)]
pub struct Score<G> {
    genotype: G,
    objectives: Vec<f64>,
    stats: Vec<f64>,
}

impl<G> Score<G> {
    pub fn new(genotype: G, objectives: Vec<f64>) -> Self {
        Self::with_stats(genotype, objectives, Vec::new())
    }

    pub fn with_stats(genotype: G, objectives: Vec<f64>, stats: Vec<f64>) -> Self {
        assert!(
            !objectives.is_empty(),
            "a score must carry at least one objective value"
        );
        assert!(
            objectives.iter().all(|value| !value.is_nan()),
            "objective values must not be NaN"
        );

        Self {
            genotype,
            objectives,
            stats,
        }
    }

    pub fn genotype(&self) -> &G {
        &self.genotype
    }

    pub fn into_genotype(self) -> G {
        self.genotype
    }

    pub fn objective(&self, index: usize) -> f64 {
        self.objectives[index]
    }

    pub fn objectives(&self) -> &[f64] {
        &self.objectives
    }

    pub fn stats(&self) -> &[f64] {
        &self.stats
    }

    /// Pareto dominance under the given objective set: no worse in every
    /// active objective and strictly better in at least one.
    pub fn dominates(&self, other: &Self, objectives: &Objectives) -> bool {
        assert_eq!(
            self.objectives.len(),
            objectives.len(),
            "objective count mismatch"
        );
        assert_eq!(
            other.objectives.len(),
            objectives.len(),
            "objective count mismatch"
        );

        let mut strictly_better = false;
        for (index, objective) in objectives.iter().enumerate() {
            if !objective.active {
                continue;
            }
            let ours = self.objectives[index];
            let theirs = other.objectives[index];
            if objective.direction.is_better(theirs, ours) {
                return false;
            }
            if objective.direction.is_better(ours, theirs) {
                strictly_better = true;
            }
        }

        strictly_better
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Direction, Objective};

    fn maximize_both() -> Objectives {
        Objectives::maximize(2).unwrap()
    }

    #[test]
    fn it_detects_dominance_when_better_in_all_objectives() {
        let objectives = maximize_both();
        let p = Score::new((), vec![5.0, 5.0]);
        let q = Score::new((), vec![3.0, 3.0]);

        assert!(p.dominates(&q, &objectives));
        assert!(!q.dominates(&p, &objectives));
    }

    #[test]
    fn it_detects_dominance_when_equal_in_some_and_better_in_one() {
        let objectives = maximize_both();
        let p = Score::new((), vec![3.0, 5.0]);
        let q = Score::new((), vec![3.0, 3.0]);

        assert!(p.dominates(&q, &objectives));
        assert!(!q.dominates(&p, &objectives));
    }

    #[test]
    fn identical_scores_do_not_dominate_each_other() {
        let objectives = maximize_both();
        let p = Score::new((), vec![2.0, 2.0]);
        let q = Score::new((), vec![2.0, 2.0]);

        assert!(!p.dominates(&q, &objectives));
        assert!(!q.dominates(&p, &objectives));
    }

    #[test]
    fn trade_offs_are_mutually_non_dominating() {
        let objectives = maximize_both();
        let p = Score::new((), vec![1.0, 4.0]);
        let q = Score::new((), vec![4.0, 1.0]);

        assert!(!p.dominates(&q, &objectives));
        assert!(!q.dominates(&p, &objectives));
    }

    #[test]
    fn it_respects_minimization_direction() {
        let objectives = Objectives::new(vec![Objective::minimize(), Objective::maximize()]).unwrap();
        let p = Score::new((), vec![1.0, 4.0]); // lower cost, higher reward
        let q = Score::new((), vec![2.0, 3.0]);

        assert!(p.dominates(&q, &objectives));
        assert!(!q.dominates(&p, &objectives));
    }

    #[test]
    fn inactive_objectives_are_excluded_from_dominance() {
        let objectives = Objectives::new(vec![
            Objective::maximize(),
            Objective::inactive(Direction::Maximize),
        ])
        .unwrap();

        // q wins the inactive objective by a mile; it must not matter.
        let p = Score::new((), vec![2.0, 0.0]);
        let q = Score::new((), vec![1.0, 100.0]);

        assert!(p.dominates(&q, &objectives));
        assert!(!q.dominates(&p, &objectives));
    }

    #[test]
    #[should_panic(expected = "objective count mismatch")]
    fn mismatched_objective_counts_are_fatal() {
        let objectives = maximize_both();
        let p = Score::new((), vec![1.0]);
        let q = Score::new((), vec![1.0, 2.0]);
        p.dominates(&q, &objectives);
    }

    #[test]
    #[should_panic(expected = "must not be NaN")]
    fn nan_objective_values_are_fatal() {
        Score::new((), vec![f64::NAN, 1.0]);
    }
}
