use super::RankedPopulation;

/// Comparison policy used by the offspring generator, chosen once per
/// generation rather than per comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Judge {
    /// Pure dominance; ties go to the first candidate.
    Domination,
    /// Better front wins; within a front, higher crowding distance wins.
    FrontThenCrowding,
}

impl Judge {
    /// Generation 0 carries no ranking history worth trusting, so it
    /// judges by dominance alone; every later generation also considers
    /// crowding, mirroring the truncation boundary rule.
    pub fn for_generation(generation: u32) -> Self {
        if generation == 0 {
            Self::Domination
        } else {
            Self::FrontThenCrowding
        }
    }

    /// Returns the preferred of two candidates, as indices into the
    /// ranked population.
    pub(crate) fn better<G>(&self, ranked: &RankedPopulation<'_, G>, a: usize, b: usize) -> usize {
        match self {
            Judge::Domination => {
                let scores = ranked.scores();
                if scores[b].dominates(&scores[a], ranked.objectives()) {
                    b
                } else {
                    a
                }
            }
            Judge::FrontThenCrowding => {
                let (front_a, front_b) = (ranked.front_of(a), ranked.front_of(b));
                if front_b < front_a {
                    b
                } else if front_a < front_b {
                    a
                } else if ranked.crowding_of(b) > ranked.crowding_of(a) {
                    b
                } else {
                    a
                }
            }
        }
    }
}
