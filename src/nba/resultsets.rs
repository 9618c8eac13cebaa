//! Decoding for the stats API's tabular payloads.
//!
//! Every stats endpoint answers with one or more named blocks of
//! `headers` plus `rowSet`. Columns are always looked up by header name;
//! the provider has reordered columns between API revisions before.

use serde::Deserialize;
use serde_json::Value;

use crate::nba::error::FetchError;

static NULL: Value = Value::Null;

#[derive(Debug, Clone, Deserialize)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

#[derive(Debug, Clone)]
pub struct ResultSets(Vec<ResultSet>);

#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    headers: &'a [String],
    values: &'a [Value],
}

impl ResultSets {
    /// Accepts both the `resultSets` array and the single `resultSet`
    /// object some endpoints return.
    pub fn from_value(json: &Value) -> Result<ResultSets, FetchError> {
        if let Some(sets) = json.get("resultSets").filter(|s| s.is_array()) {
            return Ok(ResultSets(Vec::<ResultSet>::deserialize(sets)?));
        }
        if let Some(set) = json.get("resultSet") {
            return Ok(ResultSets(vec![ResultSet::deserialize(set)?]));
        }
        Err(FetchError::MissingResultSet("resultSets".to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&ResultSet> {
        self.0.iter().find(|s| s.name.eq_ignore_ascii_case(name))
    }

    pub fn require(&self, name: &str) -> Result<&ResultSet, FetchError> {
        self.get(name).ok_or_else(|| FetchError::MissingResultSet(name.to_string()))
    }

}

impl ResultSet {
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        let headers = self.headers.as_slice();
        self.row_set.iter().map(move |values| Row { headers, values })
    }

    pub fn first_row(&self) -> Option<Row<'_>> {
        self.rows().next()
    }

    pub fn is_empty(&self) -> bool {
        self.row_set.is_empty()
    }
}

impl<'a> Row<'a> {
    fn position(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.eq_ignore_ascii_case(column))
    }

    pub fn get(&self, column: &str) -> Option<&'a Value> {
        self.position(column).and_then(|i| self.values.get(i))
    }

    // short rows read as null in the missing trailing columns
    fn require(&self, column: &str) -> Result<&'a Value, FetchError> {
        let pos = self.position(column).ok_or_else(|| FetchError::MissingColumn(column.to_string()))?;
        Ok(self.values.get(pos).unwrap_or(&NULL))
    }

    pub fn i64(&self, column: &str) -> Result<i64, FetchError> {
        let v = self.require(column)?;
        Ok(v.as_i64()
            .or_else(|| v.as_f64().map(|f| f.round() as i64))
            .or_else(|| v.as_str().and_then(|s| s.trim().parse().ok()))
            .unwrap_or(0))
    }

    pub fn f64(&self, column: &str) -> Result<f64, FetchError> {
        let v = self.require(column)?;
        Ok(v.as_f64()
            .or_else(|| v.as_str().and_then(|s| s.trim().parse().ok()))
            .unwrap_or(0.0))
    }

    pub fn string(&self, column: &str) -> Result<String, FetchError> {
        Ok(match self.require(column)? {
            Value::Null => String::new(),
            Value::String(s) => s.trim().to_string(),
            other => other.to_string(),
        })
    }
}
