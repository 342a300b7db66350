//! Form-encoded request bodies
//!
//! Handlers read individual fields by name; the first value wins when a
//! field is repeated and unknown fields are simply never read.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Form,
};

/// Submitted form fields in body order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl FormFields {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// First value submitted for `key`
    pub fn first(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// A body that is not a valid form yields no fields.
#[async_trait]
impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<Vec<(String, String)>>::from_request(req, state).await {
            Ok(Form(pairs)) => Ok(Self::new(pairs)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Treating unreadable form body as empty");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;

    fn form_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_reads_fields() {
        let fields = FormFields::from_request(form_request("name=Rye+loaf&price=6"), &())
            .await
            .unwrap();

        assert_eq!(fields.first("name"), Some("Rye loaf"));
        assert_eq!(fields.first("price"), Some("6"));
        assert_eq!(fields.first("bakery_id"), None);
    }

    #[tokio::test]
    async fn test_first_value_wins() {
        let fields = FormFields::from_request(form_request("name=first&name=second"), &())
            .await
            .unwrap();

        assert_eq!(fields.first("name"), Some("first"));
    }

    #[tokio::test]
    async fn test_non_form_body_is_empty() {
        let req = Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"name":"Bagel"}"#))
            .unwrap();

        let fields = FormFields::from_request(req, &()).await.unwrap();
        assert!(fields.is_empty());
    }
}
