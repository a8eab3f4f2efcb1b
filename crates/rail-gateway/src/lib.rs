//! HTTP host for the RailFlow dashboard session.
pub mod railflow_gateway;

pub use railflow_gateway::*;
