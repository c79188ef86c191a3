use crate::models::{
    BreedError, Breeder, Evaluator, Genotype, Judge, LineageLog, MutationStrategy, Objectives,
    Phase, RankedPopulation, Reproduction, Score, SelectionError, StagnationSignals, select,
};
use rand::Rng;
use tracing::instrument;

/// The per-generation NSGA-II engine: environmental selection over
/// scored parents and offspring generation for the next generation.
///
/// One instance lives for a whole evolutionary run. The only state it
/// carries between generations is the phased-mutation controller; every
/// call is otherwise a pure function of its inputs and the RNG.
#[derive(Debug)]
pub struct Nsga2 {
    objectives: Objectives,
    reproduction: Reproduction,
    strategy: MutationStrategy,
}

impl Nsga2 {
    pub fn new(
        objectives: Objectives,
        reproduction: Reproduction,
        strategy: MutationStrategy,
    ) -> Self {
        Self {
            objectives,
            reproduction,
            strategy,
        }
    }

    pub fn objectives(&self) -> &Objectives {
        &self.objectives
    }

    /// Current mutation phase, when phased search is active.
    pub fn phase(&self) -> Option<Phase> {
        self.strategy.phase()
    }

    /// Ranks the scored population and keeps exactly `num_parents`
    /// survivors, best fronts first, diversity at the cut.
    #[instrument(level = "debug", skip(self, scores), fields(num_parents = num_parents, population = scores.len()))]
    pub fn select<G>(
        &self,
        num_parents: usize,
        scores: Vec<Score<G>>,
    ) -> Result<Vec<G>, SelectionError> {
        select(num_parents, scores, &self.objectives)
    }

    /// Ranks the scored parents once, then produces exactly
    /// `num_children` offspring. The comparison policy follows the
    /// generation index: pure dominance for generation 0, front plus
    /// crowding afterwards.
    ///
    /// The evaluator is consulted only when crossover culling is
    /// enabled; pass [`crate::models::NoEvaluator`] otherwise.
    #[instrument(level = "debug", skip_all, fields(num_children = num_children, generation = signals.generation, population = scores.len()))]
    pub fn generate_children<G, E, L, R>(
        &mut self,
        num_children: usize,
        scores: &[Score<G>],
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
        let ranked = RankedPopulation::rank(scores, &self.objectives);
        let judge = Judge::for_generation(signals.generation);

        Breeder::new(&self.reproduction).generate(
            num_children,
            &ranked,
            judge,
            &mut self.strategy,
            signals,
            evaluator,
            lineage,
            rng,
        )
    }
}
