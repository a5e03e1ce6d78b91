//! OAuth authorization-code flow with a local callback listener.
//!
//! The flow binds a one-shot HTTP listener on the loopback interface, sends
//! the user to the authorization page, waits (bounded) for the redirect that
//! carries the authorization code and finally exchanges the code for an
//! access token.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::Router;
use rand::distributions::Alphanumeric;
use rand::Rng;
use reqwest::Client;
use serde::Deserialize;
use tokio::net::TcpListener;
use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use url::Url;

use crate::api::types::TokenResponse;
use crate::error::{Error, Result};
use crate::output::{open_in_browser, print_info, print_warning};

/// Coub authorization page.
pub const AUTHORIZE_URL: &str = "https://coub.com/oauth/authorize";

/// Coub token endpoint.
pub const TOKEN_URL: &str = "https://coub.com/oauth/token";

/// Default port of the local callback listener.
pub const DEFAULT_CALLBACK_PORT: u16 = 8080;

/// Path the authorization server redirects to.
pub const CALLBACK_PATH: &str = "/callback";

/// Body served to the browser once the code has been received.
pub const CONFIRMATION_BODY: &str = "You can now close the browser.";

/// How long a finished listener may take to flush its last response.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

const STATE_LENGTH: usize = 24;

/// Endpoints and limits of the authorization flow.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub authorize_url: String,
    pub token_url: String,
    /// Loopback port for the callback listener; 0 picks a free one.
    pub callback_port: u16,
    pub callback_timeout: Duration,
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self {
            authorize_url: AUTHORIZE_URL.to_string(),
            token_url: TOKEN_URL.to_string(),
            callback_port: DEFAULT_CALLBACK_PORT,
            callback_timeout: Duration::from_secs(300),
        }
    }
}

/// Query parameters of the redirect request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackParams {
    #[serde(default)]
    pub code: String,
    pub state: Option<String>,
    pub error: Option<String>,
}

#[derive(Clone)]
struct CallbackState {
    sender: Arc<Mutex<Option<oneshot::Sender<CallbackParams>>>>,
}

async fn handle_callback(
    State(state): State<CallbackState>,
    Query(params): Query<CallbackParams>,
) -> &'static str {
    // Only the first request is handed off; later ones just get the page.
    if let Some(sender) = state.sender.lock().await.take() {
        let _ = sender.send(params);
    }
    CONFIRMATION_BODY
}

/// Single-shot local HTTP listener waiting for the OAuth redirect.
pub struct CallbackListener {
    local_addr: SocketAddr,
    params_rx: oneshot::Receiver<CallbackParams>,
    shutdown_tx: oneshot::Sender<()>,
    server: JoinHandle<()>,
}

impl CallbackListener {
    /// Bind the listener on `127.0.0.1:port` and start serving.
    pub async fn bind(port: u16) -> Result<Self> {
        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| Error::AuthBind {
                addr: addr.to_string(),
                source,
            })?;
        let local_addr = listener.local_addr().map_err(|source| Error::AuthBind {
            addr: addr.to_string(),
            source,
        })?;

        let (params_tx, params_rx) = oneshot::channel();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let app = Router::new()
            .route(CALLBACK_PATH, get(handle_callback))
            .with_state(CallbackState {
                sender: Arc::new(Mutex::new(Some(params_tx))),
            });

        let server = tokio::spawn(async move {
            let result = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await;
            if let Err(e) = result {
                tracing::warn!("Callback listener stopped with error: {}", e);
            }
        });

        tracing::debug!("Callback listener bound on {}", local_addr);

        Ok(Self {
            local_addr,
            params_rx,
            shutdown_tx,
            server,
        })
    }

    /// Address the listener is actually bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Redirect target to register with the authorization request.
    ///
    /// Names the bound loopback address literally so the browser cannot
    /// resolve it to another address family.
    pub fn redirect_uri(&self) -> String {
        format!("http://{}{}", self.local_addr, CALLBACK_PATH)
    }

    /// Wait for the redirect request, then shut the listener down.
    pub async fn wait(self, timeout: Duration) -> Result<CallbackParams> {
        let received = tokio::time::timeout(timeout, self.params_rx).await;

        let _ = self.shutdown_tx.send(());
        let mut server = self.server;
        if tokio::time::timeout(SHUTDOWN_GRACE, &mut server).await.is_err() {
            tracing::debug!("Callback listener did not drain in time, aborting it");
            server.abort();
        }

        match received {
            Ok(Ok(params)) => Ok(params),
            Ok(Err(_)) => Err(Error::AuthExchange(
                "callback listener stopped before receiving a request".into(),
            )),
            Err(_) => Err(Error::AuthTimeout(timeout.as_secs())),
        }
    }
}

/// Build the URL of the authorization page.
pub fn authorization_url(
    config: &OAuthConfig,
    application_id: &str,
    redirect_uri: &str,
    state: &str,
) -> Result<Url> {
    let url = Url::parse_with_params(
        &config.authorize_url,
        &[
            ("access_type", "offline"),
            ("client_id", application_id),
            ("redirect_uri", redirect_uri),
            ("response_type", "code"),
            ("state", state),
        ],
    )?;
    Ok(url)
}

/// Random anti-forgery value for the `state` parameter.
pub fn generate_state() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(STATE_LENGTH)
        .map(char::from)
        .collect()
}

/// Extract the authorization code from a callback, checking its state.
pub fn extract_code(params: CallbackParams, expected_state: &str) -> Result<String> {
    if let Some(error) = params.error {
        return Err(Error::AuthExchange(format!(
            "authorization was not granted: {}",
            error
        )));
    }

    if params.state.as_deref() != Some(expected_state) {
        return Err(Error::AuthExchange(
            "callback state does not match the authorization request".into(),
        ));
    }

    if params.code.is_empty() {
        return Err(Error::AuthExchange(
            "callback carried no authorization code".into(),
        ));
    }

    Ok(params.code)
}

/// Exchange an authorization code for an access token.
pub async fn exchange_code(
    config: &OAuthConfig,
    application_id: &str,
    secret: &str,
    code: &str,
    redirect_uri: &str,
) -> Result<String> {
    let client = Client::new();
    let response = client
        .post(&config.token_url)
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri),
            ("client_id", application_id),
            ("client_secret", secret),
        ])
        .send()
        .await
        .map_err(|e| Error::AuthExchange(format!("request to {} failed: {}", config.token_url, e)))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| Error::AuthExchange(format!("failed to read token response: {}", e)))?;

    if !status.is_success() {
        return Err(Error::AuthExchange(format!("HTTP {}: {}", status, text)));
    }

    let token: TokenResponse = serde_json::from_str(&text)
        .map_err(|e| Error::AuthExchange(format!("invalid token response: {}", e)))?;

    if token.access_token.is_empty() {
        return Err(Error::AuthExchange(
            "token response contained no access_token".into(),
        ));
    }

    tracing::debug!(
        "Received {} token (expires in {:?}s)",
        token.token_type.as_deref().unwrap_or("unknown"),
        token.expires_in
    );

    Ok(token.access_token)
}

/// Show the authorization URL and try to open it in the default browser.
pub fn present_authorization_url(url: &str) {
    print_info(&format!("Authorize the application at: {}", url));
    if let Err(e) = open_in_browser(url) {
        print_warning(&format!(
            "{}. Please go to the URL above manually.",
            e
        ));
    }
}

/// Run the interactive flow, presenting the URL in the default browser.
pub async fn authorize(config: &OAuthConfig, application_id: &str, secret: &str) -> Result<String> {
    authorize_with(config, application_id, secret, present_authorization_url).await
}

/// Run the flow, handing the authorization URL to `present`.
pub async fn authorize_with<F>(
    config: &OAuthConfig,
    application_id: &str,
    secret: &str,
    present: F,
) -> Result<String>
where
    F: FnOnce(&str),
{
    let listener = CallbackListener::bind(config.callback_port).await?;
    let redirect_uri = listener.redirect_uri();
    let state = generate_state();

    let url = authorization_url(config, application_id, &redirect_uri, &state)?;
    present(url.as_str());

    tracing::info!(
        "Waiting up to {}s for the authorization callback on {}",
        config.callback_timeout.as_secs(),
        listener.local_addr()
    );
    let params = listener.wait(config.callback_timeout).await?;
    let code = extract_code(params, &state)?;

    exchange_code(config, application_id, secret, &code, &redirect_uri).await
}
