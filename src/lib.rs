//! Client for the DigiCert [CertCentral services API].
//!
//! Lists the certificate orders placed on an account and submits requests for
//! new wildcard and cloud SSL certificates. Authentication is a single API key
//! sent as the `X-DC-DEVKEY` header on every call.
//!
//! # Usage
//!
//! ```no_run
//! # async fn run() -> certcentral::Result<()> {
//! let client = certcentral::Client::new("my-api-key")?;
//!
//! for order in client.list_orders().await? {
//!     println!("#{} {} ({})", order.id, order.status, order.date_created);
//! }
//!
//! let csr = "-----BEGIN CERTIFICATE REQUEST-----...";
//! let submission = client
//!     .request_wildcard("*.example.com", csr, 112233, 2)
//!     .await?;
//! println!("submitted as {}", submission.id);
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Every operation returns a typed [`Error`] distinguishing transport
//! failures, structured API errors (the server's `{"errors": [...]}`
//! envelope), and response-parsing failures. See [`Error`] for the full set.
//!
//! Calls are not retried. Each operation awaits one full request/response
//! cycle and then returns.
//!
//! [CertCentral services API]: https://dev.digicert.com/en/certcentral-apis/services-api.html

#![deny(rust_2018_idioms, nonstandard_style, future_incompatible)]

mod client;
mod error;
mod req;

pub mod api;


pub use crate::{
    client::{ApiUrl, Client},
    error::{Error, Result},
};
