//! Simulated external data sources. Each module mirrors the integration
//! surface of a real system (roster/SIS, skills diagnostics, behavioral
//! observations) but resolves canned data after an artificial delay.
//! Every call is async so the orchestrator's fan-out contract holds even
//! though the data is static; no call here ever fails.

pub mod academic;
pub mod behavior;
pub mod skill;
