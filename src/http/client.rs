use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, Url, header::LOCATION, redirect};
use tracing::{debug, error};

use crate::error::{AppError, AppResult, HttpError};

use super::{HttpReply, HttpTransport};

/// Redirect hops allowed on GET, matching the usual browser-like default.
const GET_REDIRECT_LIMIT: usize = 10;

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: Url,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

/// `reqwest` backed transport. Holds one client per redirect policy; both
/// share the same timeouts and user agent.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    base_url: String,
    following: Client,
    not_following: Client,
}

/// Builds the transport for a run.
///
/// # Errors
///
/// Returns an error when a client cannot be built.
pub fn build_transport(settings: &ClientSettings) -> AppResult<ReqwestTransport> {
    let following = build_client(settings, redirect::Policy::limited(GET_REDIRECT_LIMIT))?;
    let not_following = build_client(settings, redirect::Policy::none())?;
    Ok(ReqwestTransport {
        base_url: settings.base_url.as_str().trim_end_matches('/').to_owned(),
        following,
        not_following,
    })
}

fn build_client(settings: &ClientSettings, policy: redirect::Policy) -> AppResult<Client> {
    Client::builder()
        .timeout(settings.request_timeout)
        .connect_timeout(settings.connect_timeout)
        .user_agent(settings.user_agent.as_str())
        .redirect(policy)
        .build()
        .map_err(|err| {
            error!("Failed to build HTTP client: {}", err);
            AppError::http(HttpError::BuildClientFailed { source: err })
        })
}

impl ReqwestTransport {
    pub(super) fn resolve(&self, path: &str) -> Result<Url, HttpError> {
        let joined = format!("{}{}", self.base_url, path);
        Url::parse(&joined).map_err(|err| HttpError::JoinUrlFailed {
            path: path.to_owned(),
            source: err,
        })
    }
}

async fn read_reply(response: Response) -> Result<HttpReply, HttpError> {
    let status = response.status().as_u16();
    let location = response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body = response
        .text()
        .await
        .map_err(|err| HttpError::ReadBodyFailed { source: err })?;
    Ok(HttpReply {
        status,
        location,
        body,
    })
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, path: &str) -> Result<HttpReply, HttpError> {
        let url = self.resolve(path)?;
        debug!("GET {}", url);
        let response = self
            .following
            .get(url)
            .send()
            .await
            .map_err(|err| HttpError::RequestFailed { source: err })?;
        read_reply(response).await
    }

    async fn post_form(
        &self,
        path: &str,
        fields: &[(&'static str, &str)],
    ) -> Result<HttpReply, HttpError> {
        let url = self.resolve(path)?;
        debug!("POST {}", url);
        let response = self
            .not_following
            .post(url)
            .form(fields)
            .send()
            .await
            .map_err(|err| HttpError::RequestFailed { source: err })?;
        read_reply(response).await
    }
}
