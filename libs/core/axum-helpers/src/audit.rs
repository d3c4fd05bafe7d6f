//! Audit trail for data-changing requests.
//!
//! Events go to the `audit` tracing target so log pipelines can route them
//! separately from application logs.
//!
//! # Example
//! ```ignore
//! use axum_helpers::audit::{AuditEvent, AuditOutcome, ClientMeta};
//!
//! AuditEvent::new("product.delete", AuditOutcome::Success)
//!     .with_resource("product", id)
//!     .with_client(ClientMeta::from_headers(&headers))
//!     .with_details(json!({"existed": true}))
//!     .log();
//! ```

use axum::http::{HeaderMap, header};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Display;

/// Outcome of an audited action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditOutcome {
    Success,
    Failure,
}

/// Where a request came from, as far as the headers tell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClientMeta {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl ClientMeta {
    /// Reads the client IP from `X-Forwarded-For` (first hop) or `X-Real-IP`,
    /// and the `User-Agent` header.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let ip_address = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.split(',').next())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .or_else(|| {
                headers
                    .get("x-real-ip")
                    .and_then(|v| v.to_str().ok())
                    .map(|s| s.trim().to_string())
            });

        let user_agent = headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        Self {
            ip_address,
            user_agent,
        }
    }
}

/// Structured audit event.
///
/// Build it up, then call [`AuditEvent::log`].
#[derive(Debug, Serialize)]
pub struct AuditEvent {
    /// Dotted action name such as `product.create`
    pub action: String,
    /// `kind:id` of the affected record, when there is one
    pub resource: Option<String>,
    pub outcome: AuditOutcome,
    #[serde(flatten)]
    pub client: ClientMeta,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(action: impl Into<String>, outcome: AuditOutcome) -> Self {
        Self {
            action: action.into(),
            resource: None,
            outcome,
            client: ClientMeta::default(),
            timestamp: Utc::now(),
            details: None,
        }
    }

    pub fn with_resource(mut self, kind: &str, id: impl Display) -> Self {
        self.resource = Some(format!("{kind}:{id}"));
        self
    }

    pub fn with_client(mut self, client: ClientMeta) -> Self {
        self.client = client;
        self
    }

    /// Attach extra context. Values that fail to serialize are dropped.
    pub fn with_details(mut self, details: impl Serialize) -> Self {
        self.details = serde_json::to_value(details).ok();
        self
    }

    pub fn log(self) {
        tracing::info!(
            target: "audit",
            action = %self.action,
            resource = self.resource,
            outcome = ?self.outcome,
            ip = self.client.ip_address,
            user_agent = self.client.user_agent,
            details = ?self.details,
            "{}",
            serde_json::to_string(&self).unwrap_or_else(|_| self.action.clone())
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_client_meta_prefers_forwarded_for() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("10.0.0.1, 10.0.0.2"));
        headers.insert("x-real-ip", HeaderValue::from_static("192.168.1.1"));
        headers.insert(header::USER_AGENT, HeaderValue::from_static("pytest"));

        let meta = ClientMeta::from_headers(&headers);
        assert_eq!(meta.ip_address.as_deref(), Some("10.0.0.1"));
        assert_eq!(meta.user_agent.as_deref(), Some("pytest"));
    }

    #[test]
    fn test_client_meta_falls_back_to_real_ip() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("192.168.1.1"));

        let meta = ClientMeta::from_headers(&headers);
        assert_eq!(meta.ip_address.as_deref(), Some("192.168.1.1"));
        assert_eq!(meta.user_agent, None);
    }

    #[test]
    fn test_event_serializes_flat() {
        let event = AuditEvent::new("product.create", AuditOutcome::Success)
            .with_resource("product", 7)
            .with_details(serde_json::json!({"name": "Hammer"}));

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["action"], "product.create");
        assert_eq!(value["resource"], "product:7");
        assert_eq!(value["outcome"], "success");
        assert_eq!(value["details"]["name"], "Hammer");
        assert!(value.get("ip_address").is_some());
    }

    #[test]
    fn test_failed_event_has_no_resource() {
        let event = AuditEvent::new("product.create", AuditOutcome::Failure)
            .with_details(serde_json::json!({"error": "Invalid input"}));

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["outcome"], "failure");
        assert_eq!(value["resource"], serde_json::Value::Null);
    }
}
