mod breeder;
mod crowding;
mod evaluator;
mod genotype;
mod judge;
mod lineage;
mod objective;
mod phase;
mod ranking;
mod score;
mod selection;
mod stats;

#[cfg(test)]
pub(crate) mod testing;

pub use breeder::{
    BreedError, CrossoverRate, CrossoverRateOutOfRange, LitterSize, LitterSizeTooSmall,
    Reproduction, cull_crossovers,
};
pub use crowding::crowding_distances;
pub use evaluator::{Evaluation, Evaluator, NoEvaluator};
pub use genotype::Genotype;
pub use judge::Judge;
pub use lineage::{LineageLog, NullLineage, TracingLineage};
pub use objective::{Direction, Objective, Objectives, ObjectivesError};
pub use phase::{MutationStrategy, Phase, PhasedConfig, PhasedSearch, StagnationSignals};
pub use ranking::RankedPopulation;
pub use score::Score;
pub use selection::{SelectionError, select, select_indices};
pub use stats::{TieBreak, argmax, argmin};

pub(crate) use breeder::Breeder;
