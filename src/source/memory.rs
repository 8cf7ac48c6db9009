use crate::errors::AppResult;
use crate::source::RecordSource;

/// Rows held in memory, header first.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    rows: Vec<Vec<String>>,
}

impl MemorySource {
    pub fn new<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|r| r.into_iter().map(Into::into).collect())
                .collect(),
        }
    }
}

impl RecordSource for MemorySource {
    fn fetch_rows(&self) -> AppResult<Vec<Vec<String>>> {
        Ok(self.rows.clone())
    }
}
