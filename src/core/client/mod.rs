//! Public client surface + builder.
//! Internals are split into `auth` (two-step login) and `constants` (endpoints + identifiers).

mod auth;
pub(crate) mod constants;

use crate::core::{DexcomError, Region};
use constants::{DEFAULT_SESSION_ID, DEFAULT_TIMEOUT_SECS, USER_AGENT};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use std::fmt;
use std::time::Duration;
use url::Url;

/// An authenticated connection to Dexcom Share.
///
/// Construction performs the login, so every `DexcomClient` holds a session id obtained from
/// the service. There is no re-login; build a new client if the session expires.
///
/// Each call owns its own request and response buffers, so a client may be shared by
/// reference across threads.
#[derive(Clone)]
pub struct DexcomClient {
    http: Client,
    region: Region,
    base_url: Url,

    username: String,
    password: String,

    account_id: String,
    session_id: String,
}

impl fmt::Debug for DexcomClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DexcomClient")
            .field("region", &self.region)
            .field("base_url", &self.base_url.as_str())
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("account_id", &self.account_id)
            .field("session_id", &self.session_id)
            .finish()
    }
}

impl DexcomClient {
    /// Log in with default settings.
    ///
    /// `ous` selects the outside-US deployment; see [`Region`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or either login step fails.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        ous: bool,
    ) -> Result<Self, DexcomError> {
        Self::builder()
            .credentials(username, password)
            .region(Region::from_ous_flag(ous))
            .build()
    }

    /// Create a new builder.
    pub fn builder() -> DexcomClientBuilder {
        DexcomClientBuilder::default()
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// Base URL every endpoint is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Account id resolved by the first login step.
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Session id sent with every data request.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Whether the client holds a usable session id (set, and not the zero UUID).
    pub fn is_authenticated(&self) -> bool {
        is_set(&self.session_id)
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, DexcomError> {
        Ok(self.base_url.join(path)?)
    }
}

/// An identifier is set when it is non-empty and not the zero-UUID sentinel.
pub(crate) fn is_set(id: &str) -> bool {
    !id.is_empty() && id != DEFAULT_SESSION_ID
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct DexcomClientBuilder {
    username: Option<String>,
    password: Option<String>,
    region: Region,
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    accept_invalid_certs: bool,
}

impl fmt::Debug for DexcomClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DexcomClientBuilder")
            .field("username", &self.username)
            .field("region", &self.region)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish_non_exhaustive()
    }
}

impl DexcomClientBuilder {
    /// Dexcom Share account name and password. The password is kept in memory only.
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Select the deployment. Default: [`Region::Us`].
    pub fn region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Override the web-services base (e.g., a mock server). Takes precedence over `region`.
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: 30 seconds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Disable TLS certificate and hostname verification.
    ///
    /// Dexcom's Share hosts have at times served certificate chains that standard verifiers
    /// reject, and older integrations switched verification off entirely. This turns off
    /// protection against interception of credentials and health data; leave it off unless the
    /// service cannot be reached otherwise.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Build the HTTP client and log in.
    ///
    /// # Errors
    ///
    /// Returns [`DexcomError::InvalidArgument`] if credentials are missing or empty,
    /// [`DexcomError::Authentication`] / [`DexcomError::Session`] if a login step is rejected,
    /// and transport errors if the service cannot be reached.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(region = ?self.region, username = ?self.username))
    )]
    pub fn build(self) -> Result<DexcomClient, DexcomError> {
        let base_url = self.resolved_base_url()?;
        let username = self
            .username
            .filter(|u| !u.is_empty())
            .ok_or_else(|| DexcomError::InvalidArgument("username must not be empty".into()))?;
        let password = self
            .password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| DexcomError::InvalidArgument("password must not be empty".into()))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static("charset"),
            HeaderValue::from_static("utf-8"),
        );

        let mut httpb = Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .default_headers(headers)
            .timeout(
                self.timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            );

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }
        if self.accept_invalid_certs {
            httpb = httpb.danger_accept_invalid_certs(true);
        }

        let http = httpb.build()?;

        let mut client = DexcomClient {
            http,
            region: self.region,
            base_url,
            username,
            password,
            account_id: String::new(),
            session_id: String::new(),
        };
        client.create_session()?;
        Ok(client)
    }
}

impl DexcomClientBuilder {
    /// The explicit override if set, otherwise the region's host.
    fn resolved_base_url(&self) -> Result<Url, DexcomError> {
        match &self.base_url {
            Some(url) => Ok(with_trailing_slash(url.clone())),
            None => Ok(Url::parse(self.region.base_url())?),
        }
    }
}

/// `Url::join` drops the last path segment unless the base ends with `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
