//! The multipart text body of a transfer request.
//!
//! One part per subtable, each a headerless semicolon-separated CSV. The
//! data is assumed validated and rounded; this is pure formatting.

use statbank_model::{Dataset, SubTable};

use crate::error::ClientError;

/// Fixed part separator, kept uniform through the request.
pub const BOUNDARY: &str = "12345";

pub fn build_body(data: &Dataset) -> Result<String, ClientError> {
    let mut body = String::new();
    for (name, table) in data.iter() {
        body.push_str("--");
        body.push_str(BOUNDARY);
        body.push_str("\nContent-Disposition:form-data; filename=");
        body.push_str(name);
        body.push_str("\nContent-type:text/plain\n\n");
        body.push_str(&table_to_csv(table)?);
    }
    body.push_str("\n--");
    body.push_str(BOUNDARY);
    body.push_str("--");
    // The loader endpoint expects CRLF line endings throughout.
    Ok(body.replace('\n', "\r\n"))
}

fn table_to_csv(table: &SubTable) -> Result<String, ClientError> {
    let columns: Vec<Vec<String>> = table
        .columns()
        .iter()
        .map(|column| column.to_text_values())
        .collect();

    let mut buffer = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .from_writer(&mut buffer);
        for row in 0..table.n_rows() {
            writer.write_record(columns.iter().map(|column| column[row].as_str()))?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use statbank_model::Column;

    fn text(values: &[&str]) -> Column {
        Column::Text(values.iter().map(|value| (*value).to_string()).collect())
    }

    #[test]
    fn body_is_semicolon_csv_between_boundaries_with_crlf() {
        let mut data = Dataset::new();
        data.insert(
            "x.dat",
            SubTable::new(vec![
                text(&["01", "02"]),
                text(&["2021", "2021"]),
                text(&["2,5", ""]),
            ])
            .unwrap(),
        );

        let body = build_body(&data).unwrap();
        assert!(body.starts_with("--12345\r\n"));
        assert!(body.contains("Content-Disposition:form-data; filename=x.dat\r\n"));
        assert!(body.contains("Content-type:text/plain\r\n\r\n"));
        assert!(body.contains("01;2021;2,5\r\n"));
        assert!(body.contains("02;2021;\r\n"));
        assert!(body.ends_with("\r\n--12345--"));
        assert!(!body.contains("\n\n"));
    }

    #[test]
    fn one_part_per_subtable() {
        let mut data = Dataset::new();
        data.insert("a.dat", SubTable::new(vec![text(&["1"])]).unwrap());
        data.insert("b.dat", SubTable::new(vec![text(&["2"])]).unwrap());

        let body = build_body(&data).unwrap();
        assert_eq!(body.matches("Content-Disposition").count(), 2);
        assert!(body.contains("filename=a.dat"));
        assert!(body.contains("filename=b.dat"));
    }
}
