//! Deduplicator
//!
//! Keeps the first occurrence of every step id. A later duplicate can only
//! upgrade a kept `future` step to `current` or `completed`.

use std::collections::HashMap;
use stepline_core::{Step, StepState};

pub fn dedupe(steps: Vec<Step>) -> Vec<Step> {
    let mut kept: Vec<Step> = Vec::with_capacity(steps.len());
    let mut seen: HashMap<String, usize> = HashMap::new();

    for step in steps {
        match seen.get(&step.id).copied() {
            Some(index) => {
                let existing = &mut kept[index];
                let upgrade = existing.state == StepState::Future
                    && matches!(step.state, StepState::Current | StepState::Completed);
                tracing::debug!(
                    step = %step.id,
                    kept = existing.state.as_str(),
                    dropped = step.state.as_str(),
                    upgrade,
                    "Dropping duplicate timeline step"
                );
                if upgrade {
                    existing.state = step.state;
                }
            }
            None => {
                seen.insert(step.id.clone(), kept.len());
                kept.push(step);
            }
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(id: &str, state: StepState) -> Step {
        Step::new(id, id, "", state)
    }

    #[test]
    fn test_distinct_steps_pass_through() {
        let steps = vec![
            step("pending", StepState::Completed),
            step("processing", StepState::Current),
        ];
        assert_eq!(dedupe(steps.clone()), steps);
    }

    #[test]
    fn test_later_current_upgrades_future() {
        let deduped = dedupe(vec![
            step("requested", StepState::Completed),
            step("cancelled", StepState::Future),
            step("cancelled", StepState::Current),
        ]);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[1].state, StepState::Current);
    }

    #[test]
    fn test_first_occurrence_keeps_position_and_copy() {
        let mut first = step("no_show", StepState::Future);
        first.description = "kept".to_string();
        let deduped = dedupe(vec![
            first,
            step("requested", StepState::Completed),
            step("no_show", StepState::Completed),
        ]);
        assert_eq!(deduped[0].id, "no_show");
        assert_eq!(deduped[0].state, StepState::Completed);
        assert_eq!(deduped[0].description, "kept");
    }

    #[test]
    fn test_skipped_is_never_upgraded_and_never_downgrades() {
        let deduped = dedupe(vec![
            step("shipped", StepState::Skipped),
            step("shipped", StepState::Current),
            step("delivered", StepState::Completed),
            step("delivered", StepState::Future),
        ]);
        assert_eq!(deduped[0].state, StepState::Skipped);
        assert_eq!(deduped[1].state, StepState::Completed);
    }
}
