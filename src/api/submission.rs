use serde::{Deserialize, Serialize};

/// The status of a [`SubmissionRequest`].
///
/// Closed set; any other wire value fails decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

/// One approval request spawned by a certificate submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub id: u64,
    pub status: RequestStatus,
}

/// Response to a certificate submission.
///
/// # Example JSON
///
/// ```json
/// {
///   "id": 112358,
///   "requests": [
///     { "id": 132, "status": "pending" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub id: u64,
    pub requests: Vec<SubmissionRequest>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_decode() {
        let json = r#"{
            "id": 112358,
            "requests": [
                { "id": 132, "status": "pending" },
                { "id": 133, "status": "approved" },
                { "id": 134, "status": "rejected" }
            ]
        }"#;

        let res = serde_json::from_str::<SubmissionResponse>(json).unwrap();
        assert_eq!(res.id, 112358);
        assert_eq!(res.requests.len(), 3);
        assert_eq!(res.requests[0].status, RequestStatus::Pending);
        assert_eq!(res.requests[1].status, RequestStatus::Approved);
        assert_eq!(res.requests[2].status, RequestStatus::Rejected);
    }

    #[test]
    fn test_unknown_status_fails_decode() {
        let json = r#"{ "id": 1, "requests": [{ "id": 2, "status": "waiting" }] }"#;
        assert!(serde_json::from_str::<SubmissionResponse>(json).is_err());
    }
}
