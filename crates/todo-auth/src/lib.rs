//! # todo-auth
//!
//! Bearer-token authentication for the todo backend.
//!
//! ## Modules
//!
//! - `jwt`: key set retrieval, signing-key selection, and RS256 token verification
//! - `authorizer`: turns verification outcomes into allow/deny policy decisions
//! - `principal`: the authenticated subject carried through a single request

pub mod authorizer;
pub mod error;
pub mod jwt;
pub mod principal;

pub use authorizer::{
    AuthDecision, Authorizer, AuthorizerResponse, Effect, PolicyDocument, PolicyStatement,
};
pub use error::AuthError;
pub use jwt::{Claims, JwksClient, TokenVerifier};
pub use principal::Principal;
