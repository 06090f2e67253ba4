use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlowStep {
    pub number: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub detail: &'static str,
}

pub const FLOW_STEPS: [FlowStep; 6] = [
    FlowStep {
        number: 1,
        title: "Prompt",
        description: "User describes the goal",
        detail: "A single prompt describes the outcome, not the steps.",
    },
    FlowStep {
        number: 2,
        title: "Analyze",
        description: "Orchestrator plans tasks",
        detail: "The orchestrator breaks work into tasks and dependencies.",
    },
    FlowStep {
        number: 3,
        title: "Assign",
        description: "Best agents selected",
        detail: "Agents are selected from the ecosystem based on skills and trust.",
    },
    FlowStep {
        number: 4,
        title: "Collaborate",
        description: "Agents exchange results",
        detail: "Agents exchange artifacts, review each other, and iterate.",
    },
    FlowStep {
        number: 5,
        title: "Merge",
        description: "Orchestrator integrates",
        detail: "Results are validated and merged into a coherent whole.",
    },
    FlowStep {
        number: 6,
        title: "Deliver",
        description: "Final output returned",
        detail: "A polished deliverable is returned to the user.",
    },
];

/// Tracks which flow step is highlighted. Step numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowSelector {
    active: usize,
}

impl FlowSelector {
    pub const DEFAULT_STEP: usize = 2;

    pub fn new() -> Self {
        Self {
            active: Self::DEFAULT_STEP,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn active_step(&self) -> &'static FlowStep {
        &FLOW_STEPS[self.active - 1]
    }

    pub fn next(&mut self) {
        self.active = self.active % FLOW_STEPS.len() + 1;
    }

    pub fn prev(&mut self) {
        self.active = if self.active == 1 {
            FLOW_STEPS.len()
        } else {
            self.active - 1
        };
    }

    /// Returns false and keeps the current step when `number` is out of range.
    pub fn select(&mut self, number: usize) -> bool {
        if !(1..=FLOW_STEPS.len()).contains(&number) {
            return false;
        }
        self.active = number;
        true
    }
}

impl Default for FlowSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_analyze() {
        let selector = FlowSelector::default();
        assert_eq!(selector.active(), 2);
        assert_eq!(selector.active_step().title, "Analyze");
    }

    #[test]
    fn test_wraps_both_ways() {
        let mut selector = FlowSelector::new();
        selector.select(6);
        selector.next();
        assert_eq!(selector.active(), 1);
        selector.prev();
        assert_eq!(selector.active(), 6);
    }

    #[test]
    fn test_out_of_range_select_ignored() {
        let mut selector = FlowSelector::new();
        assert!(!selector.select(0));
        assert!(!selector.select(7));
        assert_eq!(selector.active(), 2);
        assert!(selector.select(4));
        assert_eq!(selector.active_step().title, "Collaborate");
    }
}
