use std::path::PathBuf;

use thiserror::Error;

use crate::analysis::correlation::{analyze, Analysis, AnalysisError};
use crate::data::loader::{load_csv, LoadError};
use crate::data::model::{NumericTable, RawTable};
use crate::data::preprocess::{preprocess, TARGET_COLUMN};

// ---------------------------------------------------------------------------
// Pipeline failures
// ---------------------------------------------------------------------------

/// Any failure that stops the report short. The presenter shows the message
/// and drops every block past the failed stage.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("no analyzable measurement columns found in the loaded data")]
    NoFeatures,
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Artifacts of one pipeline run, staged so the UI can render every block up
/// to the first failed stage.
pub struct AppState {
    /// Where the CSV is read from.
    pub source_path: PathBuf,
    pub raw: Option<RawTable>,
    pub numeric: Option<NumericTable>,
    pub analysis: Option<Analysis>,
    /// Set when a stage failed; replaces downstream blocks.
    pub error: Option<PipelineError>,
}

impl AppState {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: path.into(),
            raw: None,
            numeric: None,
            analysis: None,
            error: None,
        }
    }

    /// Discard all artifacts and run the pipeline again from the loader.
    pub fn reload(&mut self) {
        self.raw = None;
        self.numeric = None;
        self.analysis = None;
        self.error = None;

        match load_csv(&self.source_path) {
            Ok(raw) => self.ingest(raw),
            Err(e) => {
                log::error!("{e}");
                self.error = Some(e.into());
            }
        }
    }

    /// Run preprocessing and analysis over an already-loaded table.
    pub fn ingest(&mut self, raw: RawTable) {
        let numeric = preprocess(&raw);
        self.raw = Some(raw);

        if numeric.is_empty() {
            self.error = Some(PipelineError::NoFeatures);
            return;
        }

        match analyze(&numeric, TARGET_COLUMN) {
            Ok(analysis) => {
                log::info!(
                    "analyzed {} features over {} rows",
                    analysis.features.len(),
                    numeric.n_rows()
                );
                self.analysis = Some(analysis);
            }
            Err(e) => {
                log::error!("{e}");
                self.error = Some(e.into());
            }
        }
        self.numeric = Some(numeric);
    }
}
