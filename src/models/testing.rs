use super::{Genotype, Phase};
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Minimal genotype for exercising the engine: a single value plus
/// counters recording what was done to it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TestGenotype {
    id: u64,
    pub(crate) value: f64,
    pub(crate) mutations: u32,
    pub(crate) phases_seen: Vec<Phase>,
    pub(crate) crossovers: u32,
}

impl TestGenotype {
    pub(crate) fn new(value: f64) -> Self {
        Self {
            id: next_id(),
            value,
            mutations: 0,
            phases_seen: Vec::new(),
            crossovers: 0,
        }
    }
}

impl Genotype for TestGenotype {
    fn id(&self) -> u64 {
        self.id
    }

    fn replicate(&self) -> Self {
        Self {
            id: next_id(),
            ..self.clone()
        }
    }

    fn mutate<R: Rng>(&mut self, rng: &mut R) {
        self.value += rng.random_range(-0.1..0.1);
        self.mutations += 1;
    }

    fn mutate_phased<R: Rng>(&mut self, phase: Phase, rng: &mut R) {
        self.phases_seen.push(phase);
        self.mutate(rng);
    }

    fn crossover<R: Rng>(&mut self, other: Self, rng: &mut R) -> Self {
        let midpoint = (self.value + other.value) / 2.0;
        self.value = midpoint + rng.random_range(-0.05..0.05);
        self.crossovers += 1;

        let mut child = other;
        child.id = next_id();
        child.value = midpoint;
        child.crossovers += 1;
        child
    }
}
