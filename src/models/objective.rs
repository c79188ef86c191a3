use serde::{Deserialize, Serialize};

/// Optimization direction of a single objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Maximize,
    Minimize,
}

impl Direction {
    /// Whether `a` is strictly better than `b` under this direction.
    pub(crate) fn is_better(&self, a: f64, b: f64) -> bool {
        match self {
            Direction::Maximize => a > b,
            Direction::Minimize => a < b,
        }
    }
}

/// One objective slot: direction plus whether it participates in ranking.
///
/// Inactive objectives are still recorded in scores but are excluded from
/// dominance and crowding computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    pub direction: Direction,
    pub active: bool,
}

impl Objective {
    pub fn maximize() -> Self {
        Self {
            direction: Direction::Maximize,
            active: true,
        }
    }

    pub fn minimize() -> Self {
        Self {
            direction: Direction::Minimize,
            active: true,
        }
    }

    /// An objective that is recorded but never ranked.
    pub fn inactive(direction: Direction) -> Self {
        Self {
            direction,
            active: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub enum ObjectivesError {
    #[error("at least one objective is required")]
    Empty,
    #[error("at least one objective must be active")]
    NoneActive,
}

/// The ordered set of objectives a population is scored against.
///
/// Every score in a batch must carry exactly one value per objective
/// listed here, in the same order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct Objectives(Vec<Objective>);

impl Objectives {
    pub fn new(objectives: Vec<Objective>) -> Result<Self, ObjectivesError> {
        if objectives.is_empty() {
            return Err(ObjectivesError::Empty);
        }
        if !objectives.iter().any(|o| o.active) {
            return Err(ObjectivesError::NoneActive);
        }

        Ok(Self(objectives))
    }

    /// `count` objectives, all maximized and active.
    pub fn maximize(count: usize) -> Result<Self, ObjectivesError> {
        Self::new(vec![Objective::maximize(); count])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Objective> {
        self.0.iter()
    }

    /// Indices of the objectives that participate in ranking.
    pub(crate) fn active(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, o)| o.active)
            .map(|(index, _)| index)
    }
}
