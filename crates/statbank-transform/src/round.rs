//! Float-to-string conversion with the destination system's rounding rules.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, info};

use statbank_model::{Column, Dataset, ModelError, TableDescription};

/// Convert the floating-point statistic columns of `data` into decimal
/// strings with the declared number of stored decimals.
///
/// Halves round away from zero, the way SAS and Excel round, not to even
/// as binary floating point does. Missing values become the empty string.
/// Columns that are not floating-point are assumed to be formatted already
/// and are left untouched. The input dataset is never mutated.
pub fn round_data(
    description: &TableDescription,
    data: &Dataset,
) -> Result<Dataset, ModelError> {
    let mut rounded = data.clone();
    for subtable in &description.subtables {
        let Some(table) = data.get(&subtable.file_name) else {
            continue;
        };
        let mut output = table.clone();
        for variable in &subtable.statistic_variables {
            let Some(decimals) = variable.stored_decimals else {
                debug!(
                    column = variable.position,
                    subtable = %subtable.file_name,
                    "no stored decimals declared, not rounding"
                );
                continue;
            };
            match table.column(variable.index()) {
                Some(Column::Number(values)) => {
                    info!(
                        column = variable.position,
                        subtable = %subtable.file_name,
                        decimals,
                        "rounding column into a string"
                    );
                    let formatted = values
                        .iter()
                        .map(|value| match value {
                            Some(number) => format_rounded(*number, decimals),
                            None => String::new(),
                        })
                        .collect();
                    output.replace_column(variable.index(), Column::Text(formatted))?;
                }
                Some(Column::Text(_)) => {
                    info!(
                        column = variable.position,
                        subtable = %subtable.file_name,
                        "not a float, leaving column as-is"
                    );
                }
                None => {}
            }
        }
        rounded.insert(subtable.file_name.clone(), output);
    }
    Ok(rounded)
}

/// One value as a plain decimal string with exactly `decimals` fractional
/// digits and comma as the separator. Values that have no decimal
/// representation (NaN, infinities) become the empty string.
fn format_rounded(value: f64, decimals: u32) -> String {
    let Some(number) = Decimal::from_f64(value) else {
        return String::new();
    };
    let mut number =
        number.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    number.rescale(decimals);
    number.to_string().replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_round_away_from_zero() {
        assert_eq!(format_rounded(2.5, 0), "3");
        assert_eq!(format_rounded(3.5, 0), "4");
        assert_eq!(format_rounded(-2.5, 0), "-3");
        assert_eq!(format_rounded(0.25, 1), "0,3");
    }

    #[test]
    fn output_carries_exactly_the_declared_decimals() {
        assert_eq!(format_rounded(2.0, 1), "2,0");
        assert_eq!(format_rounded(2.0, 3), "2,000");
        assert_eq!(format_rounded(1.005, 2), "1,01");
        assert_eq!(format_rounded(12345.678, 1), "12345,7");
    }

    #[test]
    fn non_finite_values_become_empty() {
        assert_eq!(format_rounded(f64::NAN, 1), "");
        assert_eq!(format_rounded(f64::INFINITY, 0), "");
    }
}
