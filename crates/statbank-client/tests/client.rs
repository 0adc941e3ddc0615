//! Round-trips through stubbed collaborators.

use std::cell::RefCell;

use statbank_client::{
    AuthProvider, HttpGateway, TransferParams, fetch_description, parse_publish_date,
    submit_transfer,
};
use statbank_model::{Column, Dataset, SubTable};

const DESCRIPTION_JSON: &str = r#"{
    "Uttaksbeskrivelse_lagd": "2023-01-06 09:00:00",
    "TabellId": "03629",
    "Huvudtabell": "HovedTabell",
    "DeltabellTitler": [{"Filnavn": "x.dat", "Filtext": "Testtabell"}],
    "deltabller": [{
        "deltabell": "x.dat",
        "variabler": [{
            "kolonnenummer": "1",
            "Klassifikasjonsvariabel": "Region",
            "Variabeltext": "region",
            "Kodeliste_id": "Region",
            "Kodeliste_text": "Regionskoder"
        }],
        "statistikkvariabler": [{
            "kolonnenummer": "2",
            "Text": "Antall",
            "Enhet": "personer",
            "Antall_lagrede_desimaler": "0",
            "Antall_viste_desimaler": "0"
        }],
        "eksempel_linje": "0301;100"
    }],
    "kodelister": [{
        "kodeliste": "Region",
        "koder": [{"kode": "0301", "text": "Oslo"}]
    }]
}"#;

const TRANSFER_JSON: &str = r#"{
    "TotalResult": {
        "Status": "Success",
        "Message": "Data ble lastet. lasteoppdragsnummer:42"
    }
}"#;

struct StubAuth;

impl AuthProvider for StubAuth {
    fn authorization(&self) -> anyhow::Result<String> {
        Ok("Basic dXNlcjpwYXNz".to_string())
    }
}

struct FailingAuth;

impl AuthProvider for FailingAuth {
    fn authorization(&self) -> anyhow::Result<String> {
        anyhow::bail!("keyring locked")
    }
}

#[derive(Default)]
struct StubGateway {
    gets: RefCell<Vec<(String, Vec<(String, String)>)>>,
    posts: RefCell<Vec<(String, String)>>,
}

impl HttpGateway for StubGateway {
    fn get(&self, url: &str, headers: &[(String, String)]) -> anyhow::Result<String> {
        self.gets
            .borrow_mut()
            .push((url.to_string(), headers.to_vec()));
        Ok(DESCRIPTION_JSON.to_string())
    }

    fn post(
        &self,
        url: &str,
        _headers: &[(String, String)],
        body: &str,
    ) -> anyhow::Result<String> {
        self.posts
            .borrow_mut()
            .push((url.to_string(), body.to_string()));
        Ok(TRANSFER_JSON.to_string())
    }
}

#[test]
fn fetch_description_parses_what_the_gateway_returns() {
    let gateway = StubGateway::default();
    let description =
        fetch_description(&gateway, &StubAuth, "https://example.test/uttak", "03629").unwrap();

    assert_eq!(description.table_id, "03629");
    assert_eq!(description.subtables.len(), 1);

    let gets = gateway.gets.borrow();
    assert_eq!(gets[0].0, "https://example.test/uttak?tableId=03629");
    assert_eq!(gets[0].1[0].0, "Authorization");
}

#[test]
fn submit_transfer_posts_the_body_with_query_params() {
    let gateway = StubGateway::default();
    let params =
        TransferParams::new("cfc", "03629", parse_publish_date("2023-02-01").unwrap()).unwrap();

    let mut data = Dataset::new();
    data.insert(
        "x.dat",
        SubTable::new(vec![
            Column::Text(vec!["0301".to_string()]),
            Column::Text(vec!["100".to_string()]),
        ])
        .unwrap(),
    );

    let receipt =
        submit_transfer(&gateway, &StubAuth, "https://example.test/loader", &params, &data)
            .unwrap();
    assert_eq!(receipt.work_order.as_deref(), Some("42"));

    let posts = gateway.posts.borrow();
    let (url, body) = &posts[0];
    assert!(url.starts_with("https://example.test/loader?initialier=cfc&hovedtabell=03629"));
    assert!(url.contains("publiseringsdato=2023-02-01"));
    assert!(body.contains("filename=x.dat"));
    assert!(body.contains("0301;100\r\n"));
}

#[test]
fn collaborator_errors_propagate_unchanged() {
    let gateway = StubGateway::default();
    let error = fetch_description(&gateway, &FailingAuth, "https://example.test/uttak", "03629")
        .unwrap_err();
    assert!(error.to_string().contains("keyring locked"));
    assert!(gateway.gets.borrow().is_empty());
}
