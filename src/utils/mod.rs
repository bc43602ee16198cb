//! Small shared helpers.
pub mod test_support;
