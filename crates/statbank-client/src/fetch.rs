//! The two network round-trips, driven through the collaborator seams.

use anyhow::Context;
use tracing::info;

use statbank_describe::parse_description;
use statbank_model::{Dataset, TableDescription};

use crate::auth::{AuthProvider, HttpGateway};
use crate::body::build_body;
use crate::params::TransferParams;
use crate::response::{TransferReceipt, parse_transfer_response};

fn auth_headers(auth: &dyn AuthProvider) -> anyhow::Result<Vec<(String, String)>> {
    Ok(vec![(
        "Authorization".to_string(),
        auth.authorization()?,
    )])
}

/// Fetch and parse the extract description for a table.
pub fn fetch_description(
    gateway: &dyn HttpGateway,
    auth: &dyn AuthProvider,
    base_url: &str,
    table_id: &str,
) -> anyhow::Result<TableDescription> {
    let url = format!("{base_url}?tableId={table_id}");
    let raw = gateway.get(&url, &auth_headers(auth)?)?;
    let description = parse_description(&raw)
        .with_context(|| format!("extract description for table {table_id}"))?;
    Ok(description)
}

/// Submit an already-validated, rounded dataset to the loader endpoint.
pub fn submit_transfer(
    gateway: &dyn HttpGateway,
    auth: &dyn AuthProvider,
    loader_url: &str,
    params: &TransferParams,
    data: &Dataset,
) -> anyhow::Result<TransferReceipt> {
    let url = format!("{loader_url}?{}", params.query_string());
    let body = build_body(data)?;
    info!(table_id = %params.table_id, "transferring to statbank");
    let raw = gateway.post(&url, &auth_headers(auth)?, &body)?;
    let receipt = parse_transfer_response(&raw)?;
    Ok(receipt)
}
