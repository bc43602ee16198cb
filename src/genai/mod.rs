//! Client for the generative image-editing service.
pub mod client;
