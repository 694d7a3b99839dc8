//! Request authorizer: verification outcome to allow/deny policy.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::jwt::TokenVerifier;
use crate::principal::Principal;

/// Policy language version emitted in every document.
const POLICY_VERSION: &str = "2012-10-17";
/// Action granted or denied by the policy.
const INVOKE_ACTION: &str = "execute-api:Invoke";
/// Principal reported when the caller could not be identified.
const ANONYMOUS_PRINCIPAL: &str = "user";

/// Outcome of authorizing one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthDecision {
    /// Token verified; the request runs as `principal`.
    Allow { principal: Principal },
    /// Token missing or rejected.
    Deny,
}

impl AuthDecision {
    /// Whether the request may proceed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow { .. })
    }

    /// Renders the decision as a gateway policy document.
    pub fn into_policy(self) -> AuthorizerResponse {
        let (principal_id, effect) = match self {
            Self::Allow { principal } => (principal.subject, Effect::Allow),
            Self::Deny => (ANONYMOUS_PRINCIPAL.to_string(), Effect::Deny),
        };

        AuthorizerResponse {
            principal_id,
            policy_document: PolicyDocument {
                version: POLICY_VERSION.to_string(),
                statement: vec![PolicyStatement {
                    action: INVOKE_ACTION.to_string(),
                    effect,
                    resource: "*".to_string(),
                }],
            },
        }
    }
}

/// Statement effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Allow,
    Deny,
}

/// One policy statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyStatement {
    pub action: String,
    pub effect: Effect,
    pub resource: String,
}

/// Policy document body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub version: String,
    pub statement: Vec<PolicyStatement>,
}

/// Authorizer output: the principal and its policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizerResponse {
    pub principal_id: String,
    pub policy_document: PolicyDocument,
}

/// Runs the token verifier and never fails: every error becomes a deny.
#[derive(Debug, Clone)]
pub struct Authorizer {
    verifier: TokenVerifier,
}

impl Authorizer {
    pub fn new(verifier: TokenVerifier) -> Self {
        Self { verifier }
    }

    /// Decides whether the holder of `header` may invoke the API.
    pub async fn authorize(&self, header: Option<&str>) -> AuthDecision {
        match self.verifier.verify(header).await {
            Ok(principal) => {
                info!(user_id = %principal.subject, "User was authorized");
                AuthDecision::Allow { principal }
            }
            Err(e) => {
                warn!(error = %e, "User not authorized");
                AuthDecision::Deny
            }
        }
    }
}
