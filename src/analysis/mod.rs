/// Correlation analysis over the preprocessed feature matrix.
pub mod correlation;
