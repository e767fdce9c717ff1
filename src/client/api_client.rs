//! Typed HTTP client for the Skill Matrix API.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::errors::ErrorResponse;
use crate::models::{
    AssignSkillRequest, CreateMemberRequest, CreateSkillRequest, CreatedResponse, Member,
    MessageResponse, Skill,
};

/// Failure of a dashboard action.
#[derive(Debug)]
pub enum ClientError {
    /// Connection, timeout or body decoding failure
    Transport(reqwest::Error),
    /// The server answered with a non-success status
    Api {
        status: u16,
        code: String,
        message: String,
    },
    /// A member-scoped action was attempted with no member selected
    NoMemberSelected,
    /// The id does not match any loaded member
    UnknownMember(i64),
}

impl ClientError {
    /// Whether the server rejected the request as invalid (4xx).
    pub fn is_rejected(&self) -> bool {
        matches!(self, ClientError::Api { status, .. } if (400..500).contains(status))
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Transport(err) => write!(f, "request failed: {}", err),
            ClientError::Api {
                status,
                code,
                message,
            } => write!(f, "{} {}: {}", status, code, message),
            ClientError::NoMemberSelected => write!(f, "no member selected"),
            ClientError::UnknownMember(id) => write!(f, "member {} is not loaded", id),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err)
    }
}

/// Client for the `/api` routes of a running server.
#[derive(Debug, Clone)]
pub struct SkillsClient {
    http: Client,
    base_url: String,
}

impl SkillsClient {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    pub async fn list_members(&self) -> Result<Vec<Member>, ClientError> {
        let resp = self.http.get(self.url("/members")).send().await?;
        decode(resp).await
    }

    pub async fn list_skills(&self) -> Result<Vec<Skill>, ClientError> {
        let resp = self.http.get(self.url("/skills")).send().await?;
        decode(resp).await
    }

    pub async fn create_member(
        &self,
        request: &CreateMemberRequest,
    ) -> Result<CreatedResponse, ClientError> {
        let resp = self
            .http
            .post(self.url("/members"))
            .json(request)
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn create_skill(
        &self,
        request: &CreateSkillRequest,
    ) -> Result<CreatedResponse, ClientError> {
        let resp = self
            .http
            .post(self.url("/skills"))
            .json(request)
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn assign_skill(
        &self,
        member_id: i64,
        skill_id: i64,
        level: i64,
    ) -> Result<MessageResponse, ClientError> {
        let request = AssignSkillRequest {
            member_id,
            skill_id,
            level,
        };
        let resp = self
            .http
            .post(self.url("/member-skills"))
            .json(&request)
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn remove_skill(
        &self,
        member_id: i64,
        skill_id: i64,
    ) -> Result<MessageResponse, ClientError> {
        let resp = self
            .http
            .delete(self.url(&format!("/member-skills/{}/{}", member_id, skill_id)))
            .send()
            .await?;
        decode(resp).await
    }
}

/// Decode a success body, or turn an error status into `ClientError::Api`.
async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.json::<T>().await?);
    }

    let body = resp.text().await.unwrap_or_default();
    let (code, message) = match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(err) => (err.error.code, err.error.message),
        Err(_) => (
            status.canonical_reason().unwrap_or("ERROR").to_string(),
            body,
        ),
    };

    Err(ClientError::Api {
        status: status.as_u16(),
        code,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalized() {
        let client = SkillsClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.url("/members"), "http://localhost:3000/api/members");
    }

    #[test]
    fn test_rejected_only_for_client_errors() {
        let conflict = ClientError::Api {
            status: 409,
            code: "CONFLICT".into(),
            message: "Skill 'Rust' already exists".into(),
        };
        assert!(conflict.is_rejected());
        assert_eq!(
            conflict.to_string(),
            "409 CONFLICT: Skill 'Rust' already exists"
        );

        let server = ClientError::Api {
            status: 500,
            code: "DATABASE_ERROR".into(),
            message: "disk I/O error".into(),
        };
        assert!(!server.is_rejected());
        assert!(!ClientError::NoMemberSelected.is_rejected());
    }
}
