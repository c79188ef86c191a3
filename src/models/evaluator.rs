use anyhow::anyhow;

/// Result of one evaluation: the objective vector that gets ranked plus
/// auxiliary stats that are only recorded.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub objectives: Vec<f64>,
    pub stats: Vec<f64>,
}

impl Evaluation {
    pub fn new(objectives: Vec<f64>) -> Self {
        Self {
            objectives,
            stats: Vec::new(),
        }
    }

    pub fn with_stats(objectives: Vec<f64>, stats: Vec<f64>) -> Self {
        Self { objectives, stats }
    }
}

/// One-shot scoring of a single genotype.
///
/// Only crossover culling calls this, and it issues requests
/// sequentially; evaluating whole generations belongs to the outer
/// driver, which is free to parallelize however it likes.
pub trait Evaluator<G> {
    fn evaluate(&mut self, genotype: &G) -> Result<Evaluation, anyhow::Error>;
}

/// Placeholder for runs with crossover culling disabled; errors if a
/// misconfiguration routes an evaluation here.
#[derive(Debug, Default)]
pub struct NoEvaluator;

impl<G> Evaluator<G> for NoEvaluator {
    fn evaluate(&mut self, _genotype: &G) -> Result<Evaluation, anyhow::Error> {
        Err(anyhow!(
            "no evaluator configured, but crossover culling requested one"
        ))
    }
}
