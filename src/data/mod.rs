/// Data layer: core types, loading, and preprocessing.
///
/// Architecture:
/// ```text
///   .csv
///     │
///     ▼
///  ┌────────┐
///  │ loader  │  parse file → RawTable
///  └────────┘
///     │
///     ▼
///  ┌────────────┐
///  │ preprocess  │  allow-list projection, coercion, imputation
///  └────────────┘
///     │
///     ▼
///  ┌──────────────┐
///  │ NumericTable  │  dense f64 feature matrix
///  └──────────────┘
/// ```
pub mod loader;
pub mod model;
pub mod preprocess;
