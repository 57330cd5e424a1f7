pub mod envelope;
pub mod token;
