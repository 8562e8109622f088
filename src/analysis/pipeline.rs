use std::fmt;

use thiserror::Error;

use crate::data::model::Dataset;

use super::regression::{RegressionSummary, linear_fit};

/// Counting window over which the raw counts were accumulated.
pub const COUNTING_WINDOW_SECS: f64 = 60.0;

/// r² above this supports the inverse square law. Strict comparison.
pub const R_SQUARED_THRESHOLD: f64 = 0.9;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why an analysis invocation was rejected. All terminal: no retry,
/// no partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("The uploaded file is empty. Please upload a valid CSV file.")]
    EmptyDataset,

    #[error("Column '{column}' {reason}.")]
    InvalidColumn { column: String, reason: String },

    #[error("A regression needs at least 3 rows; the file has {rows}.")]
    TooFewRows { rows: usize },
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Verdict of the fixed-threshold r² check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conclusion {
    StronglySupports,
    DoesNotStronglySupport,
}

impl Conclusion {
    pub fn from_r_squared(r_squared: f64) -> Self {
        if r_squared > R_SQUARED_THRESHOLD {
            Conclusion::StronglySupports
        } else {
            Conclusion::DoesNotStronglySupport
        }
    }
}

impl fmt::Display for Conclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conclusion::StronglySupports => {
                write!(f, "The data strongly supports the inverse square law.")
            }
            Conclusion::DoesNotStronglySupport => {
                write!(f, "The data does not strongly support the inverse square law.")
            }
        }
    }
}

/// Everything one analysis run produces: the two derived series, the
/// fitted line, and the threshold verdict.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// Count rate per row: counts / 60 s, in counts/s.
    pub count_rate: Vec<f64>,
    /// 1 / distance² per row, the fit's independent variable.
    pub inverse_square_distance: Vec<f64>,
    pub regression: RegressionSummary,
    pub conclusion: Conclusion,
}

// ---------------------------------------------------------------------------
// The pipeline
// ---------------------------------------------------------------------------

/// Run the whole analysis for one dataset and column selection.
///
/// Pure function over its inputs; the UI calls it again from scratch
/// whenever the file or a selection changes. Derives count rate and
/// inverse-square distance for every row, then fits count rate against
/// inverse-square distance by ordinary least squares.
pub fn analyze(
    dataset: &Dataset,
    distance_column: &str,
    count_column: &str,
) -> Result<AnalysisResult, AnalysisError> {
    if dataset.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }

    let distance = numeric_column(dataset, distance_column)?;
    let counts = numeric_column(dataset, count_column)?;

    // Distances get inverted and squared, so zeros must be caught here
    // rather than turning into infinities inside the fit.
    if let Some(row) = distance.iter().position(|&d| d == 0.0) {
        return Err(AnalysisError::InvalidColumn {
            column: distance_column.to_string(),
            reason: format!("contains a zero distance at row {row}, which cannot be inverted"),
        });
    }

    if dataset.len() < 3 {
        return Err(AnalysisError::TooFewRows { rows: dataset.len() });
    }

    let count_rate: Vec<f64> = counts.iter().map(|&c| c / COUNTING_WINDOW_SECS).collect();
    let inverse_square_distance: Vec<f64> = distance.iter().map(|&d| 1.0 / (d * d)).collect();

    let regression =
        linear_fit(&inverse_square_distance, &count_rate).ok_or_else(|| {
            AnalysisError::InvalidColumn {
                column: distance_column.to_string(),
                reason: "has no variation across rows, so no line can be fitted".to_string(),
            }
        })?;

    let conclusion = Conclusion::from_r_squared(regression.r_squared());

    Ok(AnalysisResult {
        count_rate,
        inverse_square_distance,
        regression,
        conclusion,
    })
}

/// Pull a named column out as finite floats.
fn numeric_column(dataset: &Dataset, name: &str) -> Result<Vec<f64>, AnalysisError> {
    let idx = dataset
        .column_index(name)
        .ok_or_else(|| AnalysisError::InvalidColumn {
            column: name.to_string(),
            reason: "does not exist in the dataset".to_string(),
        })?;

    let mut values = Vec::with_capacity(dataset.len());
    for (row, cells) in dataset.rows.iter().enumerate() {
        let v = cells
            .get(idx)
            .and_then(|c| c.as_f64())
            .ok_or_else(|| AnalysisError::InvalidColumn {
                column: name.to_string(),
                reason: format!("contains a non-numeric value at row {row}"),
            })?;
        if !v.is_finite() {
            return Err(AnalysisError::InvalidColumn {
                column: name.to_string(),
                reason: format!("contains a non-finite value at row {row}"),
            });
        }
        values.push(v);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    fn dataset(rows: &[(f64, f64)]) -> Dataset {
        Dataset::new(
            vec!["distance_m".into(), "counts".into()],
            rows.iter()
                .map(|&(d, c)| vec![CellValue::Float(d), CellValue::Float(c)])
                .collect(),
        )
    }

    #[test]
    fn derives_count_rate_and_inverse_square_exactly() {
        let ds = dataset(&[(1.0, 600.0), (2.0, 150.0), (4.0, 30.0)]);
        let out = analyze(&ds, "distance_m", "counts").unwrap();

        assert_eq!(out.count_rate, vec![10.0, 2.5, 0.5]);
        assert_eq!(out.inverse_square_distance, vec![1.0, 0.25, 0.0625]);
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let ds = dataset(&[]);
        assert_eq!(
            analyze(&ds, "distance_m", "counts").unwrap_err(),
            AnalysisError::EmptyDataset
        );
    }

    #[test]
    fn missing_column_is_rejected() {
        let ds = dataset(&[(1.0, 600.0), (2.0, 150.0), (3.0, 66.0)]);
        assert!(matches!(
            analyze(&ds, "range", "counts"),
            Err(AnalysisError::InvalidColumn { column, .. }) if column == "range"
        ));
    }

    #[test]
    fn non_numeric_cell_is_rejected() {
        let mut ds = dataset(&[(1.0, 600.0), (2.0, 150.0), (3.0, 66.0)]);
        ds.rows[1][1] = CellValue::Text("n/a".into());
        assert!(matches!(
            analyze(&ds, "distance_m", "counts"),
            Err(AnalysisError::InvalidColumn { column, .. }) if column == "counts"
        ));
    }

    #[test]
    fn zero_distance_is_rejected_not_inverted() {
        let ds = dataset(&[(1.0, 600.0), (0.0, 150.0), (3.0, 66.0)]);
        let err = analyze(&ds, "distance_m", "counts").unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InvalidColumn { ref column, .. } if column == "distance_m"
        ));
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn two_rows_are_too_few() {
        let ds = dataset(&[(1.0, 600.0), (2.0, 150.0)]);
        assert_eq!(
            analyze(&ds, "distance_m", "counts").unwrap_err(),
            AnalysisError::TooFewRows { rows: 2 }
        );
    }

    #[test]
    fn constant_distance_cannot_be_fitted() {
        let ds = dataset(&[(2.0, 600.0), (2.0, 500.0), (2.0, 400.0)]);
        assert!(matches!(
            analyze(&ds, "distance_m", "counts"),
            Err(AnalysisError::InvalidColumn { column, .. }) if column == "distance_m"
        ));
    }

    #[test]
    fn threshold_is_strictly_greater_than() {
        assert_eq!(
            Conclusion::from_r_squared(0.9),
            Conclusion::DoesNotStronglySupport
        );
        assert_eq!(
            Conclusion::from_r_squared(0.9 + 1e-12),
            Conclusion::StronglySupports
        );
        assert_eq!(
            Conclusion::from_r_squared(0.3),
            Conclusion::DoesNotStronglySupport
        );
    }

    #[test]
    fn inverse_square_source_end_to_end() {
        // Counts falling off as 1/d² over a 60 s window.
        let ds = dataset(&[(1.0, 600.0), (2.0, 150.0), (3.0, 66.67)]);
        let out = analyze(&ds, "distance_m", "counts").unwrap();

        assert!((out.count_rate[0] - 10.0).abs() < 1e-12);
        assert!((out.count_rate[1] - 2.5).abs() < 1e-12);
        assert!((out.count_rate[2] - 1.1112).abs() < 1e-4);
        assert!((out.inverse_square_distance[2] - 1.0 / 9.0).abs() < 1e-12);

        assert!(out.regression.slope > 0.0);
        assert!(out.regression.r_squared() > 0.99);
        assert_eq!(out.conclusion, Conclusion::StronglySupports);
        assert!(out.regression.p_value < 0.05);
    }

    #[test]
    fn scattered_data_does_not_support_the_law() {
        // Count rate unrelated to distance.
        let ds = dataset(&[
            (1.0, 300.0),
            (2.0, 580.0),
            (3.0, 120.0),
            (4.0, 550.0),
            (5.0, 90.0),
        ]);
        let out = analyze(&ds, "distance_m", "counts").unwrap();
        assert_eq!(out.conclusion, Conclusion::DoesNotStronglySupport);
        assert!(out.regression.r_squared() < 0.9);
    }
}
