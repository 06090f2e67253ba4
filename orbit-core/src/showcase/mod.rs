//! Static content for front-ends: the six-step flow and the agent orbit.

mod flow;
mod orbit;

pub use flow::{FlowSelector, FlowStep, FLOW_STEPS};
pub use orbit::{
    orbit_layout, orbit_phase, slot_angle, slot_radius, OrbitSlot, BASE_RADIUS, MAX_RADIUS,
    RADIUS_STEP,
};
