//! Per-session edit state: the lifecycle state machine and the registry
//! that owns live sessions.
pub mod controller;
pub mod registry;
