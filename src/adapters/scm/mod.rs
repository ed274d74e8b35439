//! Git hosting integrations and the URL reader built on them.

pub mod integrations;
pub mod url_reader;

pub use integrations::{GitHostIntegration, ScmIntegrations};
pub use url_reader::{build_http_client, HttpUrlReader};
