use super::{
    Evaluator, Genotype, Judge, LineageLog, MutationStrategy, Objectives, RankedPopulation,
    Score, SelectionError, StagnationSignals, selection,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Probability that a mating attempt performs crossover.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrossoverRate(f64);

#[derive(Debug, thiserror::Error)]
#[error("crossover rate must be between 0.0 and 1.0, got {0}")]
pub struct CrossoverRateOutOfRange(f64);

impl CrossoverRate {
    pub fn new(value: f64) -> Result<Self, CrossoverRateOutOfRange> {
        if !(0.0..=1.0).contains(&value) {
            return Err(CrossoverRateOutOfRange(value));
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Number of candidate offspring bred per culled mating. At least two,
/// since culling keeps the best two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LitterSize(u32);

#[derive(Debug, thiserror::Error)]
#[error("litter size must be at least 2, got {0}")]
pub struct LitterSizeTooSmall(u32);

impl LitterSize {
    pub fn new(value: u32) -> Result<Self, LitterSizeTooSmall> {
        if value < 2 {
            return Err(LitterSizeTooSmall(value));
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

/// How offspring are produced from the parent pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reproduction {
    mating: bool,
    crossover_rate: CrossoverRate,
    cull_crossovers: Option<LitterSize>,
    require_fitness_difference_for_change: bool,
}

impl Reproduction {
    /// Mutation-only reproduction; every offspring is a mutated copy of
    /// its single parent.
    pub fn mutation_only() -> Self {
        Self {
            mating: false,
            crossover_rate: CrossoverRate(0.0),
            cull_crossovers: None,
            require_fitness_difference_for_change: false,
        }
    }

    /// Enables crossover at the given rate.
    pub fn with_mating(crossover_rate: f64) -> Result<Self, CrossoverRateOutOfRange> {
        Ok(Self {
            mating: true,
            crossover_rate: CrossoverRate::new(crossover_rate)?,
            cull_crossovers: None,
            require_fitness_difference_for_change: false,
        })
    }

    /// Breeds a litter per mating and keeps only the best two offspring.
    /// Costs `litter_size` extra evaluations per crossover.
    pub fn cull_crossovers(mut self, litter_size: u32) -> Result<Self, LitterSizeTooSmall> {
        self.cull_crossovers = Some(LitterSize::new(litter_size)?);
        Ok(self)
    }

    /// Blocks mutation and crossover for sources whose first objective
    /// is not positive; their copies pass through unchanged. Only makes
    /// sense for tasks where a zero first objective means "has not
    /// reached the level yet".
    pub fn require_fitness_difference_for_change(mut self) -> Self {
        self.require_fitness_difference_for_change = true;
        self
    }
}

/// Errors produced while generating offspring.
#[derive(Debug, thiserror::Error)]
pub enum BreedError {
    /// The one-shot evaluator failed while scoring a litter.
    #[error("litter evaluation failed: {0}")]
    Evaluation(#[source] anyhow::Error),
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// Produces one generation of offspring from a ranked parent pool.
pub(crate) struct Breeder<'a> {
    reproduction: &'a Reproduction,
}

impl<'a> Breeder<'a> {
    pub(crate) fn new(reproduction: &'a Reproduction) -> Self {
        Self { reproduction }
    }

    /// Generates exactly `num_children` offspring.
    ///
    /// Each offspring starts from the judge-preferred of two uniform
    /// draws. A crossover consumes two slots against the target when
    /// both children fit; a second child that would overshoot the count
    /// is discarded.
    #[instrument(level = "debug", skip_all, fields(num_children = num_children, pool = ranked.len()))]
    pub(crate) fn generate<G, E, L, R>(
        &self,
        num_children: usize,
        ranked: &RankedPopulation<'_, G>,
        judge: Judge,
        strategy: &mut MutationStrategy,
        signals: &StagnationSignals,
        evaluator: &mut E,
        lineage: &mut L,
        rng: &mut R,
    ) -> Result<Vec<G>, BreedError>
    where
        G: Genotype,
        E: Evaluator<G>,
        L: LineageLog,
        R: Rng,
    {
        let mut offspring: Vec<G> = Vec::with_capacity(num_children);

        while offspring.len() < num_children {
            let source_index = Self::draw(ranked, judge, rng);
            let source = &ranked.scores()[source_index];
            let parent1 = source.genotype().id();
            let mut child = source.genotype().replicate();
            let mut parent2 = None;

            // When the gate is on, a non-positive first objective means
            // this source has not yet earned the right to change.
            let change_allowed = !self.reproduction.require_fitness_difference_for_change
                || source.objective(0) > 0.0;

            if change_allowed {
                if self.reproduction.mating
                    && rng.random_bool(self.reproduction.crossover_rate.value())
                {
                    let other_index = Self::draw(ranked, judge, rng);
                    let other_source = ranked.scores()[other_index].genotype();
                    parent2 = Some(other_source.id());

                    let sibling = match self.reproduction.cull_crossovers {
                        Some(litter_size) => {
                            let (kept, sibling) = cull_crossovers(
                                &child,
                                other_source,
                                litter_size,
                                ranked.objectives(),
                                evaluator,
                                rng,
                            )?;
                            child = kept;
                            sibling
                        }
                        None => child.crossover(other_source.replicate(), rng),
                    };

                    // The sibling takes the next slot only if one is left.
                    if offspring.len() + 2 <= num_children {
                        let mut sibling = sibling;
                        strategy.mutate(&mut sibling, signals, rng);
                        lineage.record(format!(
                            "{parent1} X {} -> {}",
                            other_source.id(),
                            sibling.id()
                        ));
                        offspring.push(sibling);
                    }
                }

                strategy.mutate(&mut child, signals, rng);
            }

            match parent2 {
                Some(parent2) => {
                    lineage.record(format!("{parent1} X {parent2} -> {}", child.id()));
                }
                None => lineage.record(format!("{parent1} -> {}", child.id())),
            }
            offspring.push(child);
        }

        Ok(offspring)
    }

    /// Tournament of two uniform draws, winner by the judge.
    fn draw<G, R: Rng>(ranked: &RankedPopulation<'_, G>, judge: Judge, rng: &mut R) -> usize {
        let a = rng.random_range(0..ranked.len());
        let b = rng.random_range(0..ranked.len());
        judge.better(ranked, a, b)
    }
}

/// Breeds a litter of candidates from two parents, scores every
/// candidate with the one-shot evaluator, and keeps the best two by the
/// same Pareto/crowding machinery used for selection.
///
/// Trades `litter_size` extra evaluations per mating for higher-quality
/// offspring; neither parent is modified.
pub fn cull_crossovers<G, E, R>(
    parent1: &G,
    parent2: &G,
    litter_size: LitterSize,
    objectives: &Objectives,
    evaluator: &mut E,
    rng: &mut R,
) -> Result<(G, G), BreedError>
where
    G: Genotype,
    E: Evaluator<G>,
    R: Rng,
{
    let litter_size = litter_size.value() as usize;
    let mut litter: Vec<Score<G>> = Vec::with_capacity(litter_size);

    while litter.len() < litter_size {
        let mut candidate = parent1.replicate();
        let sibling = candidate.crossover(parent2.replicate(), rng);

        let evaluation = evaluator.evaluate(&candidate).map_err(BreedError::Evaluation)?;
        litter.push(Score::with_stats(
            candidate,
            evaluation.objectives,
            evaluation.stats,
        ));

        if litter.len() < litter_size {
            let evaluation = evaluator.evaluate(&sibling).map_err(BreedError::Evaluation)?;
            litter.push(Score::with_stats(
                sibling,
                evaluation.objectives,
                evaluation.stats,
            ));
        }
    }

    let mut keepers = selection::select(2, litter, objectives)?.into_iter();
    match (keepers.next(), keepers.next()) {
        (Some(first), Some(second)) => Ok((first, second)),
        _ => unreachable!("selecting two from a litter of at least two"),
    }
}
