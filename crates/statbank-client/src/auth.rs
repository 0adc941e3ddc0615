//! Collaborator seams for credentials and transport.
//!
//! Both are opaque services: errors cross these boundaries unchanged, and
//! retrying or timing out is entirely the implementation's business.

/// Supplies the finished `Authorization` header value for a request.
pub trait AuthProvider {
    fn authorization(&self) -> anyhow::Result<String>;
}

/// Blocking HTTP transport.
pub trait HttpGateway {
    fn get(&self, url: &str, headers: &[(String, String)]) -> anyhow::Result<String>;

    fn post(&self, url: &str, headers: &[(String, String)], body: &str)
    -> anyhow::Result<String>;
}
