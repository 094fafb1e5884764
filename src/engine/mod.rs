pub mod classifier;
pub mod scorer;
