use serde::{Deserialize, Serialize};

/// An organization tied to the account.
///
/// # Example JSON
///
/// ```json
/// {
///   "id": 112233,
///   "name": "Example Org",
///   "display_name": "Example Org Inc.",
///   "status": "active",
///   "container": { "id": 5, "name": "Example Division" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: u64,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<Container>,
}

/// Slim organization reference embedded in orders and submission requests.
///
/// Serializes as `{"id": N}` when no name is present, which is the shape
/// submission bodies send.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationRef {
    pub id: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl OrganizationRef {
    pub fn new(id: u64) -> Self {
        OrganizationRef { id, name: None }
    }
}

/// The account container (division) a resource belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub id: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Envelope for the organization list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organizations {
    pub organizations: Vec<Organization>,
}
