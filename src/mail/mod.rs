//! Contact messages and the client that delivers them to the mail backend.
pub mod client;
pub mod contact;
