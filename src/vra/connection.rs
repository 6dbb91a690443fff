//! Connection manager: guarantees the target carries a valid access token
//!
//! Before any resource command runs, `ensure_connection` walks a fail-fast
//! fallback chain: probe the cached token, refresh it with the long-lived
//! API token, fall back to username/password login, then retry the refresh
//! with the newly minted API token. Refreshed tokens are written back to the
//! configuration file for file-backed targets so later invocations skip the
//! whole dance.

use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::api;
use crate::error::{Result, VraError};
use crate::target::{Target, TargetSource, TargetStore};

/// Outcome of probing the cached access token. Never surfaced to callers;
/// anything but `Valid` just moves the chain along.
#[derive(Debug)]
enum ProbeOutcome {
    Valid,
    Expired,
    Unreachable(String),
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    #[serde(rename = "refreshToken")]
    refresh_token: &'a str,
}

#[derive(Deserialize)]
struct RefreshResponse {
    token: String,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain: Option<&'a str>,
}

#[derive(Deserialize)]
struct LoginResponse {
    refresh_token: String,
}

#[derive(Deserialize)]
struct AuthErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Minimal HTTP client for the authentication endpoints. Separate from
/// `VraClient` because it runs before any access token exists.
pub(crate) struct AuthClient {
    http: Client,
    base_url: String,
}

impl AuthClient {
    pub(crate) fn new(base_url: String, insecure: bool) -> Self {
        let http = Client::builder()
            .danger_accept_invalid_certs(insecure)
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { http, base_url }
    }

    /// Lightweight authenticated read to test the cached token.
    /// Only 401 means "expired"; other statuses count as valid and any
    /// problem with them surfaces later on the real request.
    async fn probe(&self, access_token: &str) -> ProbeOutcome {
        let url = format!("{}{}", self.base_url, api::TOKEN_PROBE);
        debug!("Probing access token against {}", url);

        match self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await
        {
            Err(e) => ProbeOutcome::Unreachable(e.to_string()),
            Ok(response) if response.status().as_u16() == 401 => ProbeOutcome::Expired,
            Ok(_) => ProbeOutcome::Valid,
        }
    }

    /// Exchange the long-lived API token for a fresh access token
    async fn refresh(&self, api_token: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, api::IAAS_LOGIN);
        debug!("Requesting access token from {}", url);

        let response = self
            .http
            .post(&url)
            .json(&RefreshRequest {
                refresh_token: api_token,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(api_error(status.as_u16(), response, "refresh access token").await);
        }

        let body: RefreshResponse = response.json().await?;
        Ok(body.token)
    }

    /// Username/password login; returns a new API (refresh) token.
    /// A non-empty domain selects the enhanced login path.
    async fn login(
        &self,
        username: &str,
        password: &str,
        domain: Option<&str>,
    ) -> Result<String> {
        let domain = domain.filter(|d| !d.is_empty());
        let path = match domain {
            Some(_) => api::CSP_LOGIN_ENHANCED,
            None => api::CSP_LOGIN_BASIC,
        };
        let url = format!("{}{}", self.base_url, path);
        debug!("Logging in with credentials at {}", url);

        let response = self
            .http
            .post(&url)
            .json(&LoginRequest {
                username,
                password,
                domain,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(api_error(status.as_u16(), response, "log in with credentials").await);
        }

        let body: LoginResponse = response.json().await?;
        Ok(body.refresh_token)
    }
}

/// Build an API error from an auth endpoint response, folding in the
/// structured exception message when one is present
async fn api_error(status: u16, response: reqwest::Response, context: &str) -> VraError {
    let message = match response.json::<AuthErrorBody>().await {
        Ok(AuthErrorBody { message: Some(m) }) => format!("Failed to {}: {}", context, m),
        _ => format!("Failed to {}", context),
    };
    VraError::Api { status, message }
}

/// Ensure the target carries a currently valid access token, authenticating
/// as needed and persisting refreshed tokens for file-backed targets.
pub async fn ensure_connection(target: &mut Target, insecure: bool) -> Result<()> {
    let auth = AuthClient::new(target.base_url(), insecure);
    let cloud = target.is_cloud();
    ensure_with(&auth, target, cloud).await
}

/// The fallback chain itself, with the cloud decision injected so tests can
/// drive the cloud path against a mock server.
pub(crate) async fn ensure_with(
    auth: &AuthClient,
    target: &mut Target,
    cloud: bool,
) -> Result<()> {
    // Step 1: probe the cached token; a valid one means zero further calls.
    if let Some(token) = &target.access_token {
        match auth.probe(token).await {
            ProbeOutcome::Valid => {
                debug!("Cached access token for '{}' is valid", target.name);
                return Ok(());
            }
            ProbeOutcome::Expired => {
                debug!("Cached access token for '{}' expired", target.name)
            }
            ProbeOutcome::Unreachable(e) => {
                debug!("Access token probe failed ({}), treating as invalid", e)
            }
        }
    } else {
        debug!("No cached access token for '{}'", target.name);
    }

    // Step 2: refresh with the stored API token.
    let refresh_failure = match &target.api_token {
        Some(api_token) => match auth.refresh(api_token).await {
            Ok(access_token) => {
                target.access_token = Some(access_token);
                persist(target)?;
                return Ok(());
            }
            Err(e) => e.to_string(),
        },
        None => format!("no API token configured for target '{}'", target.name),
    };

    // The cloud endpoint has no local credential login to fall back to.
    if cloud {
        return Err(VraError::CloudNoCredentials(refresh_failure));
    }
    debug!(
        "Token refresh failed ({}), falling back to credential login",
        refresh_failure
    );

    // Step 3: credential login mints a new API token.
    let (username, password) = match (&target.username, &target.password) {
        (Some(u), Some(p)) => (u.clone(), p.clone()),
        _ => {
            return Err(VraError::CredentialAuth(format!(
                "no username/password configured for target '{}'",
                target.name
            )))
        }
    };

    let api_token = auth
        .login(&username, &password, target.domain.as_deref())
        .await
        .map_err(|e| VraError::CredentialAuth(e.to_string()))?;
    target.api_token = Some(api_token.clone());

    // Step 4: retry the refresh with the newly minted API token.
    let access_token = auth
        .refresh(&api_token)
        .await
        .map_err(|e| VraError::RefreshTokenInvalid(e.to_string()))?;
    target.access_token = Some(access_token);

    // Step 5: persist both tokens for file-backed targets.
    persist(target)
}

/// Write refreshed tokens back to the configuration file. Targets built
/// from environment variables are never persisted anywhere.
fn persist(target: &Target) -> Result<()> {
    match &target.source {
        TargetSource::Environment => Ok(()),
        TargetSource::File(path) => {
            let mut store = TargetStore::open(path)?;
            store.update_tokens(
                &target.name,
                target.access_token.as_deref(),
                target.api_token.as_deref(),
            );
            store.save()?;
            debug!(
                "Persisted refreshed tokens for '{}' to {}",
                target.name,
                path.display()
            );
            Ok(())
        }
    }
}
