use super::Genotype;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Mutation regime of phased search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Shrink genotype structure.
    Simplification,
    /// Grow genotype structure.
    Complexification,
}

/// Configuration for the phased-search controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhasedConfig {
    /// Initial phase in adaptive mode.
    pub start_complexification: bool,
    /// 0 selects adaptive switching; a positive value alternates fixed
    /// blocks of this many generations instead.
    pub phase_length: u32,
    /// Adaptive mode: cooldown after switching into complexification,
    /// doubling as the stagnation threshold that ends the phase.
    pub min_complexification_gens: u32,
    /// Adaptive mode: cooldown after switching into simplification.
    pub min_simplification_gens: u32,
}

/// Per-generation signals the controller reads, produced by the outer
/// driver from its own statistics.
#[derive(Debug, Clone, Copy)]
pub struct StagnationSignals {
    pub generation: u32,
    /// Generations since the best fitness last improved.
    pub gens_without_improvement: u32,
    /// Whether population complexity has dropped since the last phase
    /// switch.
    pub complexity_reduced: bool,
}

impl StagnationSignals {
    pub fn new(generation: u32) -> Self {
        Self {
            generation,
            gens_without_improvement: 0,
            complexity_reduced: false,
        }
    }
}

/// State machine toggling between growing and shrinking mutation
/// regimes.
///
/// One instance lives for the whole run. The only state carried between
/// generations is the current phase and the generation of the last
/// switch; every decision is otherwise a pure function of the incoming
/// signals.
#[derive(Debug, Clone)]
pub struct PhasedSearch {
    config: PhasedConfig,
    phase: Phase,
    last_switch_gen: u32,
}

impl PhasedSearch {
    pub fn new(config: PhasedConfig) -> Self {
        let phase = if config.start_complexification {
            Phase::Complexification
        } else {
            Phase::Simplification
        };

        Self {
            config,
            phase,
            last_switch_gen: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Decides the phase for the current generation, switching state if
    /// the transition rules allow it.
    pub fn decide(&mut self, signals: &StagnationSignals) -> Phase {
        if self.config.phase_length > 0 {
            // Static blocks alternate deterministically, complexification
            // first.
            self.phase = if (signals.generation / self.config.phase_length) % 2 == 0 {
                Phase::Complexification
            } else {
                Phase::Simplification
            };
            return self.phase;
        }

        let cooldown = match self.phase {
            Phase::Complexification => self.config.min_complexification_gens,
            Phase::Simplification => self.config.min_simplification_gens,
        };
        if signals.generation < self.last_switch_gen + cooldown {
            return self.phase;
        }

        match self.phase {
            Phase::Complexification
                if signals.gens_without_improvement > self.config.min_complexification_gens =>
            {
                self.switch(Phase::Simplification, signals.generation);
            }
            Phase::Simplification if signals.complexity_reduced => {
                self.switch(Phase::Complexification, signals.generation);
            }
            _ => {}
        }

        self.phase
    }

    fn switch(&mut self, to: Phase, generation: u32) {
        debug!(from = ?self.phase, to = ?to, generation, "phase switch");
        self.phase = to;
        self.last_switch_gen = generation;
    }
}

/// How offspring are mutated: unconditionally, or according to the
/// current search phase.
#[derive(Debug, Clone)]
pub enum MutationStrategy {
    Standard,
    Phased(PhasedSearch),
}

impl MutationStrategy {
    pub fn standard() -> Self {
        Self::Standard
    }

    pub fn phased(config: PhasedConfig) -> Self {
        Self::Phased(PhasedSearch::new(config))
    }

    /// Current phase, when phased search is active.
    pub fn phase(&self) -> Option<Phase> {
        match self {
            Self::Standard => None,
            Self::Phased(search) => Some(search.phase()),
        }
    }

    pub(crate) fn mutate<G: Genotype, R: Rng>(
        &mut self,
        genotype: &mut G,
        signals: &StagnationSignals,
        rng: &mut R,
    ) {
        match self {
            Self::Standard => genotype.mutate(rng),
            Self::Phased(search) => {
                let phase = search.decide(signals);
                genotype.mutate_phased(phase, rng);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adaptive_config(start_complexification: bool) -> PhasedConfig {
        PhasedConfig {
            start_complexification,
            phase_length: 0,
            min_complexification_gens: 5,
            min_simplification_gens: 3,
        }
    }

    fn stagnant(generation: u32, gens_without_improvement: u32) -> StagnationSignals {
        StagnationSignals {
            generation,
            gens_without_improvement,
            complexity_reduced: false,
        }
    }

    #[test]
    fn static_phases_alternate_in_blocks() {
        let config = PhasedConfig {
            start_complexification: true,
            phase_length: 3,
            min_complexification_gens: 0,
            min_simplification_gens: 0,
        };
        let mut search = PhasedSearch::new(config);

        let expected = [
            Phase::Complexification, // gens 0..3
            Phase::Complexification,
            Phase::Complexification,
            Phase::Simplification, // gens 3..6
            Phase::Simplification,
            Phase::Simplification,
            Phase::Complexification, // gens 6..9
        ];
        for (generation, want) in expected.into_iter().enumerate() {
            let got = search.decide(&StagnationSignals::new(generation as u32));
            assert_eq!(got, want, "generation {generation}");
        }
    }

    #[test]
    fn adaptive_mode_never_switches_before_the_cooldown() {
        let mut search = PhasedSearch::new(adaptive_config(true));

        // Stagnation is already well past the threshold, but the
        // cooldown since the last switch (generation 0) has not elapsed.
        for generation in 0..5 {
            assert_eq!(
                search.decide(&stagnant(generation, 100)),
                Phase::Complexification,
                "generation {generation}"
            );
        }

        // The cooldown ends exactly at generation 5.
        assert_eq!(search.decide(&stagnant(5, 100)), Phase::Simplification);
    }

    #[test]
    fn complexification_persists_while_fitness_improves() {
        let mut search = PhasedSearch::new(adaptive_config(true));

        for generation in 0..20 {
            assert_eq!(
                search.decide(&stagnant(generation, 0)),
                Phase::Complexification
            );
        }
    }

    #[test]
    fn simplification_ends_once_complexity_has_reduced() {
        let mut search = PhasedSearch::new(adaptive_config(false));

        let reduced = StagnationSignals {
            generation: 3,
            gens_without_improvement: 0,
            complexity_reduced: true,
        };
        assert_eq!(search.decide(&reduced), Phase::Complexification);
    }

    #[test]
    fn simplification_waits_for_its_own_cooldown() {
        let mut search = PhasedSearch::new(adaptive_config(false));

        let reduced_at = |generation| StagnationSignals {
            generation,
            gens_without_improvement: 0,
            complexity_reduced: true,
        };

        // min_simplification_gens = 3: generations 0..3 stay put.
        assert_eq!(search.decide(&reduced_at(0)), Phase::Simplification);
        assert_eq!(search.decide(&reduced_at(2)), Phase::Simplification);
        assert_eq!(search.decide(&reduced_at(3)), Phase::Complexification);
    }

    #[test]
    fn full_adaptive_cycle_switches_both_ways() {
        let mut search = PhasedSearch::new(adaptive_config(true));

        // Stagnate through the complexification cooldown.
        for generation in 0..5 {
            search.decide(&stagnant(generation, generation + 2));
        }
        assert_eq!(search.decide(&stagnant(5, 7)), Phase::Simplification);

        // Complexity reduction before the simplification cooldown is
        // ignored...
        let early = StagnationSignals {
            generation: 7,
            gens_without_improvement: 0,
            complexity_reduced: true,
        };
        assert_eq!(search.decide(&early), Phase::Simplification);

        // ...and honored after it.
        let late = StagnationSignals {
            generation: 8,
            gens_without_improvement: 0,
            complexity_reduced: true,
        };
        assert_eq!(search.decide(&late), Phase::Complexification);
    }

    #[test]
    fn phased_config_round_trips_through_serde() {
        let config = adaptive_config(true);
        let json = serde_json::to_string(&config).unwrap();
        let back: PhasedConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
