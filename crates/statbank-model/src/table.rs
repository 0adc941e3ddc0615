#![deny(unsafe_code)]

use std::collections::BTreeMap;

use crate::error::ModelError;

/// One column of a subtable.
///
/// Columns are tagged by storage kind, so whether a column still holds raw
/// numbers is a property of the variant, not of the values inside it.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "values")]
pub enum Column {
    /// Unrounded numeric values. `None` marks a missing observation.
    Number(Vec<Option<f64>>),
    /// Formatted text values. The empty string marks a missing observation.
    Text(Vec<String>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Number(values) => values.len(),
            Column::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Column::Number(_))
    }

    /// The column rendered as text, the way it would be written to the wire:
    /// comma as decimal separator, missing values as the empty string.
    pub fn to_text_values(&self) -> Vec<String> {
        match self {
            Column::Text(values) => values.clone(),
            Column::Number(values) => values
                .iter()
                .map(|value| match value {
                    Some(number) => number.to_string().replace('.', ","),
                    None => String::new(),
                })
                .collect(),
        }
    }
}

/// One unit of tabular data, with positional columns of uniform length.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SubTable {
    columns: Vec<Column>,
}

impl SubTable {
    /// Build a subtable, rejecting ragged column lengths.
    pub fn new(columns: Vec<Column>) -> Result<Self, ModelError> {
        if let Some(first) = columns.first() {
            let expected = first.len();
            for (index, column) in columns.iter().enumerate() {
                if column.len() != expected {
                    return Err(ModelError::RaggedColumns {
                        column: index,
                        expected,
                        found: column.len(),
                    });
                }
            }
        }
        Ok(Self { columns })
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Replace the column at `index`. The replacement must keep the row
    /// count; out-of-range indices are ignored.
    pub fn replace_column(&mut self, index: usize, column: Column) -> Result<(), ModelError> {
        let Some(slot) = self.columns.get_mut(index) else {
            return Ok(());
        };
        if column.len() != slot.len() {
            return Err(ModelError::RaggedColumns {
                column: index,
                expected: slot.len(),
                found: column.len(),
            });
        }
        *slot = column;
        Ok(())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }
}

/// A candidate submission: one subtable per file name from the description.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dataset {
    tables: BTreeMap<String, SubTable>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, table: SubTable) {
        self.tables.insert(name.into(), table);
    }

    pub fn get(&self, name: &str) -> Option<&SubTable> {
        self.tables.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SubTable)> {
        self.tables.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.tables.keys()
    }
}

impl FromIterator<(String, SubTable)> for Dataset {
    fn from_iter<I: IntoIterator<Item = (String, SubTable)>>(iter: I) -> Self {
        Self {
            tables: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtable_rejects_ragged_columns() {
        let result = SubTable::new(vec![
            Column::Text(vec!["a".to_string(), "b".to_string()]),
            Column::Text(vec!["x".to_string()]),
        ]);
        assert!(matches!(
            result,
            Err(ModelError::RaggedColumns {
                column: 1,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn number_column_renders_with_comma_separator() {
        let column = Column::Number(vec![Some(2.5), None, Some(-1.0)]);
        assert_eq!(column.to_text_values(), vec!["2,5", "", "-1"]);
    }

    #[test]
    fn dataset_keeps_one_table_per_name() {
        let mut dataset = Dataset::new();
        dataset.insert(
            "x.dat",
            SubTable::new(vec![Column::Text(vec!["01".to_string()])]).unwrap(),
        );
        assert_eq!(dataset.len(), 1);
        assert!(dataset.contains("x.dat"));
        assert_eq!(dataset.get("x.dat").unwrap().n_rows(), 1);
    }
}
