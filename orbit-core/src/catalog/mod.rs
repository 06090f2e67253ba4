mod builtin;
mod loader;

use std::collections::HashSet;

use tracing::debug;

use crate::error::{OrbitError, OrbitResult};
use crate::models::{Agent, Scenario};

pub use loader::{CatalogFile, CatalogFormat};

/// Read-only registry of agents and scenarios.
///
/// A `Catalog` can only be obtained through [`Catalog::new`] (or the
/// constructors built on it), so every instance in circulation has already
/// passed referential validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    agents: Vec<Agent>,
    scenarios: Vec<Scenario>,
}

impl Catalog {
    pub fn new(agents: Vec<Agent>, scenarios: Vec<Scenario>) -> OrbitResult<Self> {
        let catalog = Self { agents, scenarios };
        catalog.validate()?;
        debug!(
            agents = catalog.agents.len(),
            scenarios = catalog.scenarios.len(),
            "Catalog validated"
        );
        Ok(catalog)
    }

    /// The nine agents and three scenarios shipped with Orbit.
    pub fn builtin() -> OrbitResult<Self> {
        Self::new(builtin::agents(), builtin::scenarios())
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn agent(&self, id: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    pub fn scenario(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    pub fn first_scenario(&self) -> &Scenario {
        // Non-empty after validation.
        &self.scenarios[0]
    }

    pub fn scenario_ids(&self) -> Vec<&str> {
        self.scenarios.iter().map(|s| s.id.as_str()).collect()
    }

    /// Position of a scenario in catalog order.
    pub fn scenario_index(&self, id: &str) -> Option<usize> {
        self.scenarios.iter().position(|s| s.id == id)
    }

    fn validate(&self) -> OrbitResult<()> {
        let mut agent_ids = HashSet::new();
        for agent in &self.agents {
            if !agent_ids.insert(agent.id.as_str()) {
                return Err(OrbitError::DuplicateId {
                    kind: "agent",
                    id: agent.id.clone(),
                });
            }
        }

        if self.scenarios.is_empty() {
            return Err(OrbitError::EmptyCatalog);
        }

        let mut scenario_ids = HashSet::new();
        for scenario in &self.scenarios {
            if !scenario_ids.insert(scenario.id.as_str()) {
                return Err(OrbitError::DuplicateId {
                    kind: "scenario",
                    id: scenario.id.clone(),
                });
            }

            if scenario.is_empty() {
                return Err(OrbitError::EmptyScenario(scenario.id.clone()));
            }

            for (index, step) in scenario.steps.iter().enumerate() {
                for agent in [&step.from, &step.to] {
                    if !agent_ids.contains(agent.as_str()) {
                        return Err(OrbitError::UnknownAgentReference {
                            scenario: scenario.id.clone(),
                            step: index + 1,
                            agent: agent.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}
