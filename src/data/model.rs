use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value, guessed from the CSV text.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Empty,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v:.4}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Empty => write!(f, ""),
        }
    }
}

impl CellValue {
    /// Try to interpret the cell as an `f64` for the numeric pipeline.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The parsed CSV table: an ordered list of named columns and rows of
/// cells aligned by position. Immutable once loaded; the analysis
/// pipeline derives its own columns rather than mutating this.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Column names from the header row, in file order.
    pub column_names: Vec<String>,
    /// Rows of cells; every row has `column_names.len()` cells.
    pub rows: Vec<Vec<CellValue>>,
}

impl Dataset {
    pub fn new(column_names: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Dataset { column_names, rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has zero rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.column_names.len()
    }

    /// Position of a named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_names.iter().position(|c| c == name)
    }

    /// The first `n` rows, for the preview table.
    pub fn head(&self, n: usize) -> &[Vec<CellValue>] {
        &self.rows[..self.rows.len().min(n)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_as_f64() {
        assert_eq!(CellValue::Integer(3).as_f64(), Some(3.0));
        assert_eq!(CellValue::Float(0.25).as_f64(), Some(0.25));
        assert_eq!(CellValue::Text("abc".into()).as_f64(), None);
        assert_eq!(CellValue::Empty.as_f64(), None);
    }

    #[test]
    fn column_lookup() {
        let ds = Dataset::new(
            vec!["distance_m".into(), "counts".into()],
            vec![vec![CellValue::Float(0.1), CellValue::Integer(600)]],
        );
        assert_eq!(ds.column_index("counts"), Some(1));
        assert_eq!(ds.column_index("missing"), None);
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.head(5).len(), 1);
    }
}
