pub mod description;
pub mod error;
pub mod findings;
pub mod table;

pub use description::{
    CategoryVariable, Code, CodeList, StatisticVariable, SuppressionCode, SuppressionVariable,
    Subtable, TableDescription,
};
pub use error::ModelError;
pub use findings::{Finding, FindingKey, Severity, ValidationFailed, ValidationReport};
pub use table::{Column, Dataset, SubTable};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_round_trips_through_json() {
        let description = TableDescription {
            table_id: "03629".to_string(),
            table_name: "HovedTabell".to_string(),
            retrieved: "2023-01-06 09:00:00".to_string(),
            subtables: vec![Subtable {
                file_name: "kommtab1.dat".to_string(),
                title: "Kommunetall".to_string(),
                category_variables: vec![CategoryVariable {
                    position: 1,
                    code_list: Some("Region".to_string()),
                    text: "Region".to_string(),
                }],
                statistic_variables: vec![StatisticVariable {
                    position: 2,
                    stored_decimals: Some(1),
                    displayed_decimals: Some(1),
                    text: "Folketall".to_string(),
                }],
                suppression_variables: vec![],
            }],
            code_lists: std::collections::BTreeMap::from([(
                "Region".to_string(),
                CodeList {
                    name: "Region".to_string(),
                    codes: vec![Code {
                        code: "0301".to_string(),
                        label: "Oslo".to_string(),
                    }],
                    total_code: Some("00".to_string()),
                },
            )]),
            suppression_codes: Some(vec![SuppressionCode {
                code: "01".to_string(),
                text: "Mangler".to_string(),
            }]),
        };

        let json = serde_json::to_string(&description).expect("serialize description");
        let round: TableDescription = serde_json::from_str(&json).expect("deserialize description");
        assert_eq!(round.table_id, "03629");
        assert_eq!(round.subtables.len(), 1);
        assert_eq!(round.subtables[0].total_columns(), 2);
        assert_eq!(round.total_codes().get("Region").map(String::as_str), Some("00"));
        assert_eq!(round.suppression_codes.as_ref().map(Vec::len), Some(1));
    }
}
