use serde::{Deserialize, Serialize};

use crate::api::OrganizationRef;

/// Signature hash requested for all submissions.
const DEFAULT_SIGNATURE_HASH: &str = "sha256";

/// Body of a certificate submission (wildcard or cloud).
///
/// Built once via [`CertificateRequest::wildcard`] or
/// [`CertificateRequest::cloud`] and serialized into a single POST. Optional
/// fields are omitted from the wire unless supplied.
///
/// # Example JSON
///
/// ```json
/// {
///   "certificate": {
///     "common_name": "*.example.com",
///     "csr": "-----BEGIN CERTIFICATE REQUEST-----...",
///     "signature_hash": "sha256"
///   },
///   "organization": { "id": 112233 },
///   "validity_years": 2
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRequest {
    pub certificate: RequestedCertificate,

    pub organization: OrganizationRef,

    pub validity_years: u32,

    /// Overrides the expiration implied by `validity_years`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_expiration_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_renewal_notifications: Option<bool>,
}

impl CertificateRequest {
    /// Builds a wildcard submission with the default signature hash.
    pub fn wildcard(
        common_name: impl Into<String>,
        csr: impl Into<String>,
        organization_id: u64,
        validity_years: u32,
    ) -> Self {
        CertificateRequest {
            certificate: RequestedCertificate {
                common_name: common_name.into(),
                csr: csr.into(),
                signature_hash: DEFAULT_SIGNATURE_HASH.to_owned(),
                ..RequestedCertificate::default()
            },
            organization: OrganizationRef::new(organization_id),
            validity_years,
            ..CertificateRequest::default()
        }
    }

    /// Builds a cloud submission: a wildcard request carrying additional SANs.
    pub fn cloud(
        common_name: impl Into<String>,
        sans: Vec<String>,
        csr: impl Into<String>,
        organization_id: u64,
        validity_years: u32,
    ) -> Self {
        let mut req = Self::wildcard(common_name, csr, organization_id, validity_years);
        req.certificate.dns_names = Some(sans);
        req
    }
}

/// Certificate fields of a submission body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedCertificate {
    pub common_name: String,

    /// Additional SAN entries, sent in the order supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_names: Option<Vec<String>>,

    /// PEM-encoded certificate signing request.
    pub csr: String,

    pub signature_hash: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_units: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_platform: Option<ServerPlatform>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_option: Option<String>,
}

/// Server platform selector for issued certificate formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerPlatform {
    pub id: u64,
}
