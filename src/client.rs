use serde::de::DeserializeOwned;

use crate::{
    api,
    error::{Error, Result},
    req::{build_url, http_client, req_get, req_post},
};

const PRODUCTION_URL: &str = "https://www.digicert.com/services/v2/";

const ORDERS_PATH: &str = "order/certificate";
const WILDCARD_PATH: &str = "order/certificate/ssl_wildcard";
const CLOUD_PATH: &str = "order/certificate/ssl_cloud_wildcard";
const ORGANIZATIONS_PATH: &str = "organization";

/// Enumeration of API base URLs.
#[derive(Debug, Clone)]
pub enum ApiUrl<'a> {
    /// The production services endpoint.
    Production,

    /// Provide an arbitrary base URL to connect to.
    ///
    /// Use for testing and development. Must end with a `/`.
    Other(&'a str),
}

impl ApiUrl<'_> {
    fn to_base(&self) -> &str {
        match self {
            ApiUrl::Production => PRODUCTION_URL,
            ApiUrl::Other(url) => url,
        }
    }
}

/// Entry point for accessing the certificate API.
///
/// Holds the account API key and a base URL, nothing else; the client is
/// stateless between calls. Each operation awaits exactly one full
/// request/response cycle before returning, so concurrent calls never share
/// any in-flight state.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl Client {
    /// Creates a client against the production API.
    pub fn new(api_key: impl Into<String>) -> Result<Client> {
        Client::with_url(ApiUrl::Production, api_key)
    }

    /// Creates a client against an arbitrary base URL.
    pub fn with_url(url: ApiUrl<'_>, api_key: impl Into<String>) -> Result<Client> {
        Ok(Client {
            http: http_client()?,
            base_url: url.to_base().to_owned(),
            api_key: api_key.into(),
        })
    }

    /// Lists the certificate orders placed on the account.
    pub async fn list_orders(&self) -> Result<Vec<api::Order>> {
        let url = build_url(&self.base_url, ORDERS_PATH, &[])?;
        let body = req_get(&self.http, &self.api_key, url).await?;
        let envelope = decode::<api::Orders>(body)?;
        Ok(envelope.orders)
    }

    /// Submits a wildcard certificate request.
    pub async fn request_wildcard(
        &self,
        common_name: &str,
        csr: &str,
        organization_id: u64,
        validity_years: u32,
    ) -> Result<api::SubmissionResponse> {
        let req =
            api::CertificateRequest::wildcard(common_name, csr, organization_id, validity_years);
        self.submit(WILDCARD_PATH, &req).await
    }

    /// Submits a cloud certificate request: wildcard plus additional SANs.
    ///
    /// The `sans` entries are sent verbatim, in the order supplied.
    pub async fn request_cloud(
        &self,
        common_name: &str,
        sans: Vec<String>,
        csr: &str,
        organization_id: u64,
        validity_years: u32,
    ) -> Result<api::SubmissionResponse> {
        let req =
            api::CertificateRequest::cloud(common_name, sans, csr, organization_id, validity_years);
        self.submit(CLOUD_PATH, &req).await
    }

    async fn submit(
        &self,
        path: &str,
        req: &api::CertificateRequest,
    ) -> Result<api::SubmissionResponse> {
        let url = build_url(&self.base_url, path, &[])?;
        let body = req_post(&self.http, &self.api_key, url, req).await?;
        decode(body)
    }

    /// Lists the organizations tied to the account.
    ///
    /// Not part of the public API yet; the endpoint contract has not
    /// stabilized.
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) async fn list_organizations(&self) -> Result<Vec<api::Organization>> {
        let url = build_url(&self.base_url, ORGANIZATIONS_PATH, &[])?;
        let body = req_get(&self.http, &self.api_key, url).await?;
        let envelope = decode::<api::Organizations>(body)?;
        Ok(envelope.organizations)
    }
}

/// Decodes a success body, retaining the raw text on failure.
fn decode<T: DeserializeOwned>(body: String) -> Result<T> {
    match serde_json::from_str(&body) {
        Ok(value) => Ok(value),
        Err(source) => Err(Error::Decode { source, body }),
    }
}
