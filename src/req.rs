use std::time::Duration;

use reqwest::{header, RequestBuilder, StatusCode, Url};
use serde::Serialize;

use crate::{
    api::ApiErrors,
    error::{Error, Result},
};

/// Static authentication header carrying the account API key.
pub(crate) const API_KEY_HEADER: &str = "X-DC-DEVKEY";

pub(crate) fn http_client() -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?)
}

/// Joins `base + path` and appends query parameters as `?k=v&k2=v2`.
///
/// A malformed URL is rejected here, before any network call is made.
pub(crate) fn build_url(base: &str, path: &str, query: &[(&str, &str)]) -> Result<Url> {
    let raw = format!("{base}{path}");

    let mut url = Url::parse(&raw).map_err(|_| Error::InvalidUrl { url: raw })?;

    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
    }

    Ok(url)
}

pub(crate) async fn req_get(http: &reqwest::Client, api_key: &str, url: Url) -> Result<String> {
    let req = http
        .get(url.clone())
        .header(header::ACCEPT, "application/json")
        .header(API_KEY_HEADER, api_key);

    log::debug!("Call endpoint: GET {url}");

    req_send(req).await
}

pub(crate) async fn req_post<T>(
    http: &reqwest::Client,
    api_key: &str,
    url: Url,
    body: &T,
) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let req = http
        .post(url.clone())
        .header(header::ACCEPT, "application/json")
        .header(API_KEY_HEADER, api_key)
        .json(body);

    log::debug!("Call endpoint: POST {url}");

    req_send(req).await
}

async fn req_send(req: RequestBuilder) -> Result<String> {
    let res = req.send().await?;
    req_handle_error(res).await
}

/// Classifies the response: 200 and 201 pass through as body text, anything
/// else becomes a structured API error or a bare status error.
async fn req_handle_error(res: reqwest::Response) -> Result<String> {
    let status = res.status();

    if matches!(status, StatusCode::OK | StatusCode::CREATED) {
        let body = req_safe_read_body(res).await;
        log::trace!("{body}");
        return Ok(body);
    }

    let body = req_safe_read_body(res).await;

    // if we were sent an error envelope, keep its first entry
    match serde_json::from_str::<ApiErrors>(&body)
        .ok()
        .and_then(ApiErrors::into_first)
    {
        Some(err) => {
            log::debug!("API reported error: {err}");
            Err(Error::Api(err))
        }
        None => Err(Error::Status { status, body }),
    }
}

async fn req_safe_read_body(res: reqwest::Response) -> String {
    // the server sometimes closes the connection abruptly after the body is
    // already captured; keep whatever we got
    match res.text().await {
        Ok(body) => body,
        Err(err) => {
            log::debug!("Failed to read response body: {err}");
            String::new()
        }
    }
}
