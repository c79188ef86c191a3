use super::Phase;
use rand::Rng;

/// Contract for the evolvable units this engine selects and breeds.
///
/// The engine never looks inside a genotype. It copies, mutates, crosses
/// over, and records identifiers for lineage; everything about the
/// encoding belongs to the implementor. Identifiers must be stable and
/// unique for the duration of a run and are never used for ranking.
pub trait Genotype: Sized {
    /// Stable unique identifier, used only for lineage bookkeeping.
    fn id(&self) -> u64;

    /// A copy of this genotype carrying a fresh identity.
    fn replicate(&self) -> Self;

    /// Default mutation.
    fn mutate<R: Rng>(&mut self, rng: &mut R);

    /// Phase-aware mutation. Implementations that do not distinguish
    /// phases can delegate to [`Genotype::mutate`].
    fn mutate_phased<R: Rng>(&mut self, phase: Phase, rng: &mut R);

    /// Crosses genetic material with `other`, mutating `self` in place
    /// and returning a second, distinct offspring derived from `other`.
    fn crossover<R: Rng>(&mut self, other: Self, rng: &mut R) -> Self;
}
