//! Formatting and collaborator seams for talking to the Statbank APIs.
//!
//! The actual transport and credentials are injected through the
//! [`HttpGateway`] and [`AuthProvider`] traits; this crate owns only the
//! pure-formatting pieces of a transfer: the query parameters, the
//! multipart text body, and the response-message parsing.

mod auth;
mod body;
mod error;
mod fetch;
mod params;
mod response;

pub use auth::{AuthProvider, HttpGateway};
pub use body::{BOUNDARY, build_body};
pub use error::ClientError;
pub use fetch::{fetch_description, submit_transfer};
pub use params::{Approve, TransferParams, parse_publish_date};
pub use response::{TransferPart, TransferReceipt, TransferResult, parse_transfer_response};
