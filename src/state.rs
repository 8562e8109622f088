use crate::analysis::pipeline::{AnalysisError, AnalysisResult, analyze};
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until the user opens a file).
    pub dataset: Option<Dataset>,

    /// Selected distance column name.
    pub distance_column: Option<String>,

    /// Selected counts column name.
    pub count_column: Option<String>,

    /// Outcome of the last pipeline run for the current selection.
    pub analysis: Option<Result<AnalysisResult, AnalysisError>>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            distance_column: None,
            count_column: None,
            analysis: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and pick default columns:
    /// distance = first column, counts = second column.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.distance_column = dataset.column_names.first().cloned();
        self.count_column = dataset
            .column_names
            .get(1)
            .or_else(|| dataset.column_names.first())
            .cloned();

        self.dataset = Some(dataset);
        self.status_message = None;
        self.reanalyze();
    }

    /// Re-run the pipeline for the current dataset and selection.
    /// Prior derived state is fully discarded.
    pub fn reanalyze(&mut self) {
        self.analysis = match (&self.dataset, &self.distance_column, &self.count_column) {
            (Some(ds), Some(dist), Some(count)) => Some(analyze(ds, dist, count)),
            _ => None,
        };
    }

    /// Select the distance column and recompute.
    pub fn set_distance_column(&mut self, col: String) {
        self.distance_column = Some(col);
        self.reanalyze();
    }

    /// Select the counts column and recompute.
    pub fn set_count_column(&mut self, col: String) {
        self.count_column = Some(col);
        self.reanalyze();
    }
}
