use crate::models::{Agent, AgentColor, HandoffEvent, Scenario};

const AGENTS: &[(&str, &str, &str, u32)] = &[
    ("orchestrator", "Orchestrator", "Plans, assigns, merges", 0x7c3aed),
    ("frontend", "Frontend", "UI/UX, components", 0x0ea5e9),
    ("backend", "Backend", "APIs, data models", 0x10b981),
    ("payments", "Payments", "Stripe/PayPal", 0xeab308),
    ("testing", "Testing", "QA, automation", 0xef4444),
    ("research", "Research", "Sources, facts", 0x22d3ee),
    ("writer", "Writer", "Docs, summaries", 0xf97316),
    ("translation", "Translation", "i18n/localization", 0x94a3b8),
    ("map", "Delivery-Map", "Geo & routing", 0x84cc16),
];

type Steps = &'static [(&'static str, &'static str, &'static str)];

const SCENARIOS: &[(&str, &str, Steps)] = &[
    (
        "travel-site",
        "Build a modern travel booking website",
        &[
            ("orchestrator", "frontend", "Design hero + search UI"),
            ("orchestrator", "backend", "Create trips & booking APIs"),
            ("orchestrator", "payments", "Add Stripe checkout"),
            ("frontend", "testing", "Run visual/regression tests"),
            ("backend", "testing", "Validate endpoints"),
            ("testing", "orchestrator", "Report & auto-fix"),
        ],
    ),
    (
        "research-report",
        "Produce a fact-checked research report",
        &[
            ("orchestrator", "research", "Gather credible sources"),
            ("orchestrator", "writer", "Draft narrative"),
            ("research", "writer", "Hand off citations"),
            ("testing", "writer", "Lint & format"),
            ("writer", "orchestrator", "Deliver final report"),
        ],
    ),
    (
        "food-delivery",
        "Create a food delivery app",
        &[
            ("orchestrator", "backend", "Orders, restaurants, drivers"),
            ("orchestrator", "frontend", "Customer & courier apps"),
            ("orchestrator", "map", "Live delivery routes"),
            ("orchestrator", "payments", "Payouts & charges"),
            ("testing", "orchestrator", "Integration and e2e tests"),
        ],
    ),
];

pub(crate) fn agents() -> Vec<Agent> {
    AGENTS
        .iter()
        .map(|&(id, label, role, color)| {
            Agent::new(id, label, role, AgentColor::from_rgb_hex(color))
        })
        .collect()
}

pub(crate) fn scenarios() -> Vec<Scenario> {
    SCENARIOS
        .iter()
        .map(|&(id, label, steps)| {
            let steps = steps
                .iter()
                .map(|&(from, to, note)| HandoffEvent::new(from, to, note))
                .collect();
            Scenario::new(id, label, steps)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_travel_site_endpoints() {
        let scenarios = scenarios();
        let travel = &scenarios[0];
        assert_eq!(travel.id, "travel-site");
        assert_eq!(travel.len(), 6);
        assert_eq!(
            travel.steps[0],
            HandoffEvent::new("orchestrator", "frontend", "Design hero + search UI")
        );
        assert_eq!(
            travel.steps[5],
            HandoffEvent::new("testing", "orchestrator", "Report & auto-fix")
        );
    }

    #[test]
    fn test_agent_colors() {
        let agents = agents();
        assert_eq!(agents[0].color.to_string(), "#7c3aed");
        assert_eq!(agents[8].id, "map");
        assert_eq!(agents[8].color.to_string(), "#84cc16");
    }
}
