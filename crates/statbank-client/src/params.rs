//! Parameters for the transfer-loader endpoint.

use chrono::NaiveDate;

use crate::error::ClientError;

/// Initials are the three-letter SSB user abbreviation.
const INITIALS_LEN: usize = 3;

/// How the destination system approves the loaded data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Approve {
    /// Someone clicks approve in the web interface.
    Manual,
    /// Approved at transfer time, immediately.
    Immediate,
    /// Approved right before the publish time.
    #[default]
    JustInTime,
}

impl Approve {
    pub fn as_code(self) -> u8 {
        match self {
            Approve::Manual => 0,
            Approve::Immediate => 1,
            Approve::JustInTime => 2,
        }
    }

    /// Accepts the wire encodings `0`/`1`/`2` as well as the names.
    pub fn parse(value: &str) -> Result<Self, ClientError> {
        match value.trim().to_lowercase().as_str() {
            "0" | "manual" => Ok(Approve::Manual),
            "1" | "immediate" => Ok(Approve::Immediate),
            "2" | "jit" | "just_in_time" => Ok(Approve::JustInTime),
            _ => Err(ClientError::BadApprove {
                value: value.to_string(),
            }),
        }
    }
}

/// The seven query parameters of a transfer request.
#[derive(Debug, Clone)]
pub struct TransferParams {
    pub initials: String,
    pub table_id: String,
    pub publish_date: NaiveDate,
    /// First person notified by email. Defaults to `initials`.
    pub cc: String,
    /// Second person notified by email. Defaults to `cc`.
    pub bcc: String,
    pub overwrite: bool,
    pub approve: Approve,
}

impl TransferParams {
    pub fn new(
        initials: &str,
        table_id: &str,
        publish_date: NaiveDate,
    ) -> Result<Self, ClientError> {
        validate_initials(initials)?;
        if table_id.is_empty() || !table_id.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(ClientError::BadTableId {
                value: table_id.to_string(),
            });
        }
        Ok(Self {
            initials: initials.to_string(),
            table_id: table_id.to_string(),
            publish_date,
            cc: initials.to_string(),
            bcc: initials.to_string(),
            overwrite: true,
            approve: Approve::default(),
        })
    }

    pub fn with_cc(mut self, cc: &str) -> Result<Self, ClientError> {
        validate_initials(cc)?;
        self.cc = cc.to_string();
        self.bcc = cc.to_string();
        Ok(self)
    }

    pub fn with_bcc(mut self, bcc: &str) -> Result<Self, ClientError> {
        validate_initials(bcc)?;
        self.bcc = bcc.to_string();
        Ok(self)
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_approve(mut self, approve: Approve) -> Self {
        self.approve = approve;
        self
    }

    /// The query pairs the loader endpoint expects, in its spelling.
    pub fn query_pairs(&self) -> [(&'static str, String); 7] {
        [
            ("initialier", self.initials.clone()),
            ("hovedtabell", self.table_id.clone()),
            (
                "publiseringsdato",
                self.publish_date.format("%Y-%m-%d").to_string(),
            ),
            ("fagansvarlig1", self.cc.clone()),
            ("fagansvarlig2", self.bcc.clone()),
            ("auto_overskriv_data", u8::from(self.overwrite).to_string()),
            ("auto_godkjenn_data", self.approve.as_code().to_string()),
        ]
    }

    /// The pairs joined into a query string. The values are plain ASCII by
    /// construction, so no percent-encoding is needed.
    pub fn query_string(&self) -> String {
        self.query_pairs()
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Parse a `yyyy-mm-dd` publish date.
pub fn parse_publish_date(value: &str) -> Result<NaiveDate, ClientError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ClientError::BadPublishDate {
        value: value.to_string(),
    })
}

fn validate_initials(value: &str) -> Result<(), ClientError> {
    if value.chars().count() != INITIALS_LEN || !value.chars().all(char::is_alphabetic) {
        return Err(ClientError::BadInitials {
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_pairs_use_the_loader_spelling() {
        let params = TransferParams::new("cfc", "03629", parse_publish_date("2022-01-01").unwrap())
            .unwrap()
            .with_overwrite(false)
            .with_approve(Approve::Immediate);
        let pairs = params.query_pairs();
        assert_eq!(pairs[0], ("initialier", "cfc".to_string()));
        assert_eq!(pairs[1], ("hovedtabell", "03629".to_string()));
        assert_eq!(pairs[2], ("publiseringsdato", "2022-01-01".to_string()));
        assert_eq!(pairs[5], ("auto_overskriv_data", "0".to_string()));
        assert_eq!(pairs[6], ("auto_godkjenn_data", "1".to_string()));
    }

    #[test]
    fn cc_and_bcc_default_to_initials() {
        let params =
            TransferParams::new("cfc", "03629", parse_publish_date("2022-01-01").unwrap()).unwrap();
        assert_eq!(params.cc, "cfc");
        assert_eq!(params.bcc, "cfc");

        let params = params.with_cc("abc").unwrap();
        assert_eq!(params.bcc, "abc");
    }

    #[test]
    fn initials_must_be_three_letters() {
        let date = parse_publish_date("2022-01-01").unwrap();
        assert!(matches!(
            TransferParams::new("cf", "03629", date),
            Err(ClientError::BadInitials { .. })
        ));
        assert!(matches!(
            TransferParams::new("cf1", "03629", date),
            Err(ClientError::BadInitials { .. })
        ));
    }

    #[test]
    fn table_id_must_be_digits() {
        let date = parse_publish_date("2022-01-01").unwrap();
        assert!(matches!(
            TransferParams::new("cfc", "Hovedtabell", date),
            Err(ClientError::BadTableId { .. })
        ));
    }

    #[test]
    fn approve_accepts_the_wire_encodings() {
        assert_eq!(Approve::parse("0").unwrap(), Approve::Manual);
        assert_eq!(Approve::parse("1").unwrap(), Approve::Immediate);
        assert_eq!(Approve::parse("2").unwrap(), Approve::JustInTime);
        assert_eq!(Approve::default().as_code(), 2);
        assert!(Approve::parse("7").is_err());
    }

    #[test]
    fn bad_publish_dates_are_rejected() {
        assert!(parse_publish_date("01-01-2022").is_err());
        assert!(parse_publish_date("2022-13-01").is_err());
        assert!(parse_publish_date("2022-01-01").is_ok());
    }
}
