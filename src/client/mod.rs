//! Client layer: builds authenticated requests and turns replies into
//! outcome notifications.

use std::collections::HashMap;
use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::domain::{
    Config, OutboundMessage, Outcome, OutcomeKind, Reply, TransportFailure, ValidationError,
};

const DEFAULT_BASE_URL: &str = "https://api.smsified.com";
const API_VERSION: &str = "/v1";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone)]
struct HttpRequest {
    method: Method,
    url: String,
    username: String,
    password: String,
    content_type: Option<&'static str>,
}

trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<Reply, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<Reply, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let method = match request.method {
                Method::Get => reqwest::Method::GET,
                Method::Post => reqwest::Method::POST,
                Method::Put => reqwest::Method::PUT,
                Method::Delete => reqwest::Method::DELETE,
            };

            let mut builder = self
                .client
                .request(method, &request.url)
                .basic_auth(&request.username, Some(&request.password));
            if let Some(content_type) = request.content_type {
                builder = builder.header(reqwest::header::CONTENT_TYPE, content_type);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .map(|(name, value)| {
                    (
                        name.as_str().to_owned(),
                        String::from_utf8_lossy(value.as_bytes()).into_owned(),
                    )
                })
                .collect();
            let body = response.text().await?;

            Ok(Reply {
                status,
                headers,
                body,
            })
        })
    }
}

type Handler = Arc<dyn Fn(&Outcome) + Send + Sync>;

/// Publish/subscribe registry keyed by [`OutcomeKind`], owned by the client.
#[derive(Default)]
struct Notifier {
    handlers: Mutex<HashMap<OutcomeKind, Vec<Handler>>>,
}

impl Notifier {
    fn on(&self, kind: OutcomeKind, handler: Handler) {
        self.handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(kind)
            .or_default()
            .push(handler);
    }

    fn dispatch(&self, outcome: &Outcome) {
        // Handlers run outside the lock so they may re-enter the registry,
        // e.g. to register a follow-up subscriber.
        let registered = {
            let handlers = self
                .handlers
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            handlers.get(&outcome.kind()).cloned().unwrap_or_default()
        };
        for handler in registered {
            handler(outcome);
        }
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned while constructing a [`SmsifiedClient`].
///
/// Request outcomes are never errors; they are delivered to subscribers as
/// [`Outcome`] notifications.
pub enum SmsifiedError {
    /// The underlying HTTP client could not be built.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`SmsifiedClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct SmsifiedClientBuilder {
    config: Config,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SmsifiedClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL (scheme + host, no version prefix).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SmsifiedClient`].
    pub fn build(self) -> Result<SmsifiedClient, SmsifiedError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SmsifiedError::Transport(Box::new(err)))?;

        Ok(SmsifiedClient {
            config: Arc::new(self.config),
            base_url: self.base_url,
            http: Arc::new(ReqwestTransport { client }),
            notifier: Arc::new(Notifier::default()),
        })
    }
}

#[derive(Clone)]
/// Event-driven SMSified client.
///
/// Verb methods build authenticated requests against
/// `https://api.smsified.com/v1`, issue them, and deliver exactly one
/// classified [`Outcome`] per completed request to subscribers registered
/// with [`SmsifiedClient::on`]. The methods themselves return nothing.
///
/// The client is cheap to clone; clones share the configuration, the HTTP
/// connection pool, and the subscriber registry. Concurrent requests need no
/// coordination, and outcomes arrive in completion order, not issue order.
pub struct SmsifiedClient {
    config: Arc<Config>,
    base_url: String,
    http: Arc<dyn HttpTransport>,
    notifier: Arc<Notifier>,
}

impl SmsifiedClient {
    /// Create a client for the production API host.
    ///
    /// For more customization, use [`SmsifiedClient::builder`].
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
            notifier: Arc::new(Notifier::default()),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(config: Config) -> SmsifiedClientBuilder {
        SmsifiedClientBuilder::new(config)
    }

    /// Register a subscriber for one outcome kind.
    ///
    /// Handlers run on the task that completed the request, after the reply
    /// has been classified. Several handlers may be registered per kind; they
    /// run in registration order.
    pub fn on(&self, kind: OutcomeKind, handler: impl Fn(&Outcome) + Send + Sync + 'static) {
        self.notifier.on(kind, Arc::new(handler));
    }

    /// Issue a GET to `{base}/v1{path}`.
    pub async fn get(&self, path: &str) {
        self.request(Method::Get, path, None).await;
    }

    /// Issue a POST to `{base}/v1{path}` with a form-urlencoded content type.
    pub async fn post(&self, path: &str) {
        self.request(Method::Post, path, Some(FORM_CONTENT_TYPE)).await;
    }

    /// Issue a PUT to `{base}/v1{path}` with a form-urlencoded content type.
    pub async fn put(&self, path: &str) {
        self.request(Method::Put, path, Some(FORM_CONTENT_TYPE)).await;
    }

    /// Issue a DELETE to `{base}/v1{path}`.
    pub async fn delete(&self, path: &str) {
        self.request(Method::Delete, path, None).await;
    }

    /// Send an SMS to a single destination.
    ///
    /// The message is serialized as a URL-encoded query string on the POST
    /// path, which is how the vendor expects outbound parameters:
    /// `POST /v1/smsmessaging/outbound/{sender}/requests?{query}`. An
    /// accepted send arrives as a `Success` outcome whose body carries a
    /// resource reference (see
    /// [`crate::transport::decode_resource_reference`]).
    pub async fn send(&self, message: &OutboundMessage) {
        let query = crate::transport::encode_outbound_query(message);
        let path = format!(
            "/smsmessaging/outbound/{}/requests?{}",
            self.config.sender().as_str(),
            query
        );
        self.post(&path).await;
    }

    async fn request(&self, method: Method, path: &str, content_type: Option<&'static str>) {
        let request = HttpRequest {
            method,
            url: format!("{}{}{}", self.base_url, API_VERSION, path),
            username: self.config.username().as_str().to_owned(),
            password: self.config.password().as_str().to_owned(),
            content_type,
        };

        let outcome = match self.http.execute(request).await {
            Ok(reply) => Outcome::of_reply(reply),
            Err(err) => Outcome::Transport(TransportFailure {
                message: err.to_string(),
            }),
        };

        self.notifier.dispatch(&outcome);
    }
}
