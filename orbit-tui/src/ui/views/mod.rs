mod flow;
mod help;
mod network;
mod simulation;

pub use flow::FlowView;
pub use help::HelpView;
pub use network::NetworkView;
pub use simulation::SimulationView;
