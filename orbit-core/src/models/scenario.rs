use serde::{Deserialize, Serialize};

/// One unit of work passed from one agent to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandoffEvent {
    pub from: String,
    pub to: String,
    pub note: String,
}

impl HandoffEvent {
    pub fn new(from: impl Into<String>, to: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            note: note.into(),
        }
    }
}

/// A named, ordered list of hand-offs. Step order is playback order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub label: String,
    pub steps: Vec<HandoffEvent>,
}

impl Scenario {
    pub fn new(id: impl Into<String>, label: impl Into<String>, steps: Vec<HandoffEvent>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            steps,
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Distinct agent ids in order of first appearance.
    pub fn participants(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for step in &self.steps {
            for id in [step.from.as_str(), step.to.as_str()] {
                if !seen.contains(&id) {
                    seen.push(id);
                }
            }
        }
        seen
    }
}
