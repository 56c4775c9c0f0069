use thiserror::Error;

/// Failures talking to one of the upstream services
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("{service} returned HTTP {status} for {url}")]
    Status {
        service: &'static str,
        status: u16,
        url: String,
    },

    #[error("{service} returned an unexpected body: {reason}")]
    InvalidBody {
        service: &'static str,
        reason: String,
    },

    #[error("Invalid {service} URL: {source}")]
    InvalidUrl {
        service: &'static str,
        #[source]
        source: url::ParseError,
    },
}
