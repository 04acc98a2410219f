use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{
    Kid, KidListResponse, KidRegisterError, KidResponse, SaveKidRequest, ValidationErrorResponse,
};

use crate::config::FrontendConfig;

/// API client for communicating with the backend server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client using the build-time configured base URL
    pub fn new() -> Self {
        Self::with_base_url(FrontendConfig::from_build_env().api_base_url)
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn kids_url(&self) -> String {
        format!("{}/api/kids", self.base_url)
    }

    fn kid_url(&self, id: &str) -> String {
        format!("{}/api/kids/{}", self.base_url, id.trim())
    }

    /// Get every registered kid
    pub async fn list_kids(&self) -> Result<Vec<Kid>, KidRegisterError> {
        let response = Request::get(&self.kids_url())
            .send()
            .await
            .map_err(|e| KidRegisterError::Network(e.to_string()))?;

        let data: KidListResponse = read_success(response).await?;
        Ok(data.kids)
    }

    /// Register a new kid
    pub async fn create_kid(&self, kid: &Kid) -> Result<Kid, KidRegisterError> {
        let request = Request::post(&self.kids_url())
            .json(&SaveKidRequest::from(kid))
            .map_err(|e| KidRegisterError::InvalidRequest(format!("Failed to serialize request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| KidRegisterError::Network(e.to_string()))?;

        let data: KidResponse = read_success(response).await?;
        Ok(data.kid)
    }

    /// Update an already registered kid
    pub async fn update_kid(&self, kid: &Kid) -> Result<Kid, KidRegisterError> {
        if !kid.is_existing() {
            return Err(KidRegisterError::InvalidRequest(
                "cannot update a kid without an id".to_string(),
            ));
        }

        let request = Request::put(&self.kid_url(&kid.id))
            .json(&SaveKidRequest::from(kid))
            .map_err(|e| KidRegisterError::InvalidRequest(format!("Failed to serialize request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| KidRegisterError::Network(e.to_string()))?;

        let data: KidResponse = read_success(response).await?;
        Ok(data.kid)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn read_success<T: DeserializeOwned>(response: Response) -> Result<T, KidRegisterError> {
    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|e| KidRegisterError::Decode(e.to_string()));
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(classify_failure(status, &body))
}

/// Map a non-2xx response to an error kind
///
/// 400 and 422 carrying a field error map are validation failures; everything
/// else is reported as a server error with the raw body as message.
pub fn classify_failure(status: u16, body: &str) -> KidRegisterError {
    if matches!(status, 400 | 422) {
        if let Ok(parsed) = serde_json::from_str::<ValidationErrorResponse>(body) {
            if !parsed.errors.is_empty() {
                return KidRegisterError::Validation(parsed.errors);
            }
            if let Some(message) = parsed.message {
                return KidRegisterError::Server { status, message };
            }
        }
    }

    let message = if body.trim().is_empty() {
        "Unknown error".to_string()
    } else {
        body.trim().to_string()
    };
    KidRegisterError::Server { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::KidField;

    #[test]
    fn test_validation_body_becomes_field_errors() {
        let body = r#"{"errors":{"parent_email":"Email inválido","identification":"Ya registrado"}}"#;
        match classify_failure(422, body) {
            KidRegisterError::Validation(errors) => {
                assert_eq!(errors.get(KidField::ParentEmail), Some("Email inválido"));
                assert_eq!(errors.get(KidField::Identification), Some("Ya registrado"));
                assert_eq!(errors.len(), 2);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_request_without_field_errors_is_server_error() {
        let body = r#"{"errors":{},"message":"Solicitud inválida"}"#;
        assert_eq!(
            classify_failure(400, body),
            KidRegisterError::Server {
                status: 400,
                message: "Solicitud inválida".to_string(),
            }
        );
    }

    #[test]
    fn test_field_errors_on_500_are_not_validation() {
        let body = r#"{"errors":{"name":"x"}}"#;
        assert!(matches!(
            classify_failure(500, body),
            KidRegisterError::Server { status: 500, .. }
        ));
    }

    #[test]
    fn test_empty_body_gets_placeholder_message() {
        assert_eq!(
            classify_failure(503, "  "),
            KidRegisterError::Server {
                status: 503,
                message: "Unknown error".to_string(),
            }
        );
    }

    #[test]
    fn test_urls_do_not_double_slash() {
        let client = ApiClient::with_base_url("http://localhost:3000/".to_string());
        assert_eq!(client.kids_url(), "http://localhost:3000/api/kids");
        assert_eq!(client.kid_url("kid-7"), "http://localhost:3000/api/kids/kid-7");
    }
}
