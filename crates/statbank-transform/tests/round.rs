//! Rounding over whole datasets.

use std::collections::BTreeMap;

use statbank_model::{
    CategoryVariable, Column, Dataset, StatisticVariable, SubTable, Subtable, TableDescription,
};
use statbank_transform::round_data;

fn description() -> TableDescription {
    TableDescription {
        table_id: "03629".to_string(),
        table_name: "Testtabell".to_string(),
        retrieved: String::new(),
        subtables: vec![Subtable {
            file_name: "x.dat".to_string(),
            title: "Test".to_string(),
            category_variables: vec![CategoryVariable {
                position: 1,
                code_list: None,
                text: "Tidsperiode, format = åååå".to_string(),
            }],
            statistic_variables: vec![
                StatisticVariable {
                    position: 2,
                    stored_decimals: Some(1),
                    displayed_decimals: Some(1),
                    text: "Andel".to_string(),
                },
                StatisticVariable {
                    position: 3,
                    stored_decimals: Some(0),
                    displayed_decimals: Some(0),
                    text: "Antall".to_string(),
                },
            ],
            suppression_variables: vec![],
        }],
        code_lists: BTreeMap::new(),
        suppression_codes: None,
    }
}

fn float_data() -> Dataset {
    let mut data = Dataset::new();
    data.insert(
        "x.dat",
        SubTable::new(vec![
            Column::Text(vec!["2021".to_string(), "2022".to_string(), "2023".to_string()]),
            Column::Number(vec![Some(2.25), Some(0.449), None]),
            Column::Number(vec![Some(2.5), Some(-2.5), Some(10.0)]),
        ])
        .unwrap(),
    );
    data
}

#[test]
fn floats_become_fixed_decimal_strings_with_comma_separator() {
    let rounded = round_data(&description(), &float_data()).unwrap();
    let table = rounded.get("x.dat").unwrap();

    assert_eq!(
        table.column(1).unwrap(),
        &Column::Text(vec!["2,3".to_string(), "0,4".to_string(), String::new()])
    );
    assert_eq!(
        table.column(2).unwrap(),
        &Column::Text(vec!["3".to_string(), "-3".to_string(), "10".to_string()])
    );
}

#[test]
fn input_dataset_is_left_untouched() {
    let data = float_data();
    let _ = round_data(&description(), &data).unwrap();
    assert!(data.get("x.dat").unwrap().column(1).unwrap().is_number());
}

#[test]
fn category_columns_are_never_rounded() {
    let rounded = round_data(&description(), &float_data()).unwrap();
    let table = rounded.get("x.dat").unwrap();
    assert_eq!(
        table.column(0).unwrap(),
        &Column::Text(vec!["2021".to_string(), "2022".to_string(), "2023".to_string()])
    );
}

#[test]
fn rounding_is_idempotent_once_columns_are_text() {
    let once = round_data(&description(), &float_data()).unwrap();
    let twice = round_data(&description(), &once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn text_statistic_columns_are_assumed_preformatted() {
    let mut data = Dataset::new();
    data.insert(
        "x.dat",
        SubTable::new(vec![
            Column::Text(vec!["2021".to_string()]),
            Column::Text(vec!["2,25".to_string()]),
            Column::Text(vec!["7".to_string()]),
        ])
        .unwrap(),
    );
    let rounded = round_data(&description(), &data).unwrap();
    // Even a wrongly-formatted text value stays as-is; the validator owns
    // complaining about it.
    assert_eq!(
        rounded.get("x.dat").unwrap().column(1).unwrap(),
        &Column::Text(vec!["2,25".to_string()])
    );
}
