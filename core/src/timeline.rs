use crate::step::{Step, StepState};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An ordered, non-empty sequence of annotated steps.
///
/// Built fresh for every projection and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Timeline {
    steps: Vec<Step>,
}

impl Timeline {
    /// Returns `None` for an empty list.
    pub fn from_steps(steps: Vec<Step>) -> Option<Self> {
        if steps.is_empty() {
            None
        } else {
            Some(Self { steps })
        }
    }

    pub fn single(step: Step) -> Self {
        Self { steps: vec![step] }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.id == id)
    }

    /// The step marked current, if any.
    pub fn current(&self) -> Option<&Step> {
        self.steps.iter().find(|s| s.state == StepState::Current)
    }

    /// `(id, state)` pairs in order; handy for assertions and logging.
    pub fn states(&self) -> Vec<(&str, StepState)> {
        self.steps.iter().map(|s| (s.id.as_str(), s.state)).collect()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
