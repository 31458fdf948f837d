use tracing::{debug, info};

use super::{Settlement, Submission};
use crate::error::Result;

/// Sends a [`Submission`] and reports how it settled.
///
/// `Err` is reserved for failures before a status line was received
/// (connect, timeout, protocol); callers fold it into [`Settlement::Failed`].
pub trait Transport {
    fn submit(&self, submission: &Submission) -> Result<Settlement>;
}

/// Logs the submission instead of sending it.
#[derive(Debug, Clone, Default)]
pub struct DryRunTransport;

impl Transport for DryRunTransport {
    fn submit(&self, submission: &Submission) -> Result<Settlement> {
        info!(
            "[dry-run] POST {} game_key={} score={} csrf={}",
            submission.path,
            submission.game_key,
            submission.score,
            submission.csrf_token.is_some()
        );
        Ok(Settlement::Accepted { status: 200 })
    }
}

#[cfg(feature = "http")]
pub use http::HttpTransport;

#[cfg(feature = "http")]
mod http {
    use std::time::Duration;

    use super::*;
    use crate::config::http::CSRF_HEADER;
    use crate::config::ReporterConfig;

    /// Form POST over HTTP(S) via `ureq`.
    ///
    /// A browser sends same-origin credentials automatically; here the session
    /// cookie (if configured) is attached explicitly.
    pub struct HttpTransport {
        agent: ureq::Agent,
        base_url: String,
        session_cookie: Option<String>,
    }

    impl HttpTransport {
        pub fn new(base_url: &str, timeout: Duration) -> Self {
            let config = ureq::Agent::config_builder()
                .timeout_global(Some(timeout))
                .build();
            Self {
                agent: config.into(),
                base_url: base_url.trim_end_matches('/').to_string(),
                session_cookie: None,
            }
        }

        pub fn from_config(config: &ReporterConfig) -> Self {
            let mut transport = Self::new(&config.base_url, config.timeout());
            transport.session_cookie = config.session_cookie.clone().filter(|c| !c.is_empty());
            transport
        }

        pub fn url_for(&self, submission: &Submission) -> String {
            format!("{}{}", self.base_url, submission.path)
        }
    }

    impl Transport for HttpTransport {
        fn submit(&self, submission: &Submission) -> Result<Settlement> {
            let url = self.url_for(submission);
            debug!("POST {}", url);

            let mut request = self.agent.post(&url);
            if let Some(token) = &submission.csrf_token {
                request = request.header(CSRF_HEADER, token);
            }
            if let Some(cookie) = &self.session_cookie {
                request = request.header("Cookie", cookie);
            }

            match request.send_form(submission.form()) {
                Ok(response) => Ok(Settlement::Accepted {
                    status: response.status().as_u16(),
                }),
                Err(ureq::Error::StatusCode(status)) => Ok(Settlement::Rejected { status }),
                Err(e) => Err(e.into()),
            }
        }
    }

}
