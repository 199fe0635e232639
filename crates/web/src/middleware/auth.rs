use std::collections::{HashMap, HashSet};

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::error::WebError;

/// Feature tags a bearer key may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Read recruits and the internal views of the competition.
    Recruiter,
    /// Manage leaders, types, points, settings and review recruits.
    Admin,
}

#[derive(Debug, Clone, Default)]
pub struct ApiKeys {
    keys: HashMap<String, HashSet<Capability>>,
}

impl ApiKeys {
    /// Recruiter keys and admin keys as comma-separated lists. Admin keys also
    /// carry the recruiter capability.
    pub fn from_comma_separated(recruiter_keys: &str, admin_keys: &str) -> Self {
        let mut keys: HashMap<String, HashSet<Capability>> = HashMap::new();

        for key in split_keys(recruiter_keys) {
            keys.entry(key).or_default().insert(Capability::Recruiter);
        }

        for key in split_keys(admin_keys) {
            keys.entry(key)
                .or_default()
                .extend([Capability::Recruiter, Capability::Admin]);
        }

        Self { keys }
    }

    pub fn is_valid(&self, key: &str) -> bool {
        self.keys.contains_key(key)
    }

    pub fn grants(&self, key: &str, capability: Capability) -> bool {
        self.keys
            .get(key)
            .is_some_and(|capabilities| capabilities.contains(&capability))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

fn split_keys(keys: &str) -> impl Iterator<Item = String> + '_ {
    keys.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}

async fn authorize(
    api_keys: &ApiKeys,
    capability: Capability,
    request: Request,
    next: Next,
) -> Result<Response, WebError> {
    let Some(token) = bearer_token(&request) else {
        return Err(WebError::Unauthorized);
    };

    if !api_keys.is_valid(token) {
        tracing::warn!("Invalid API key attempt");
        return Err(WebError::Unauthorized);
    }

    if !api_keys.grants(token, capability) {
        tracing::warn!(?capability, "API key lacks required capability");
        return Err(WebError::Forbidden(format!(
            "{capability:?} access required"
        )));
    }

    Ok(next.run(request).await)
}

/// Requires a key carrying the recruiter capability.
pub async fn require_auth(
    State(api_keys): State<ApiKeys>,
    request: Request,
    next: Next,
) -> Result<Response, WebError> {
    authorize(&api_keys, Capability::Recruiter, request, next).await
}

/// Requires a key carrying the admin capability.
pub async fn require_admin(
    State(api_keys): State<ApiKeys>,
    request: Request,
    next: Next,
) -> Result<Response, WebError> {
    authorize(&api_keys, Capability::Admin, request, next).await
}
