use std::f64::consts::TAU;

use crate::models::Agent;

pub const BASE_RADIUS: f64 = 140.0;
pub const RADIUS_STEP: f64 = 18.0;

/// Largest radius any agent can get, used to normalize positions.
pub const MAX_RADIUS: f64 = BASE_RADIUS + 2.0 * RADIUS_STEP;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSlot<'a> {
    pub agent: &'a Agent,
    pub angle: f64,
    pub radius: f64,
}

impl OrbitSlot<'_> {
    /// Position relative to the center, scaled so the outer ring has radius 1.
    pub fn normalized(&self, phase: f64) -> (f64, f64) {
        let angle = self.angle + phase;
        let r = self.radius / MAX_RADIUS;
        (r * angle.cos(), r * angle.sin())
    }
}

pub fn slot_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    index as f64 / count as f64 * TAU
}

pub fn slot_radius(index: usize) -> f64 {
    BASE_RADIUS + (index % 3) as f64 * RADIUS_STEP
}

/// Places agents on three staggered rings around the center.
pub fn orbit_layout(agents: &[Agent]) -> Vec<OrbitSlot<'_>> {
    agents
        .iter()
        .enumerate()
        .map(|(i, agent)| OrbitSlot {
            agent,
            angle: slot_angle(i, agents.len()),
            radius: slot_radius(i),
        })
        .collect()
}

/// Ring rotation for a frame counter; one revolution every `frames_per_turn`.
pub fn orbit_phase(frame: u64, frames_per_turn: u64) -> f64 {
    if frames_per_turn == 0 {
        return 0.0;
    }
    (frame % frames_per_turn) as f64 / frames_per_turn as f64 * TAU
}
