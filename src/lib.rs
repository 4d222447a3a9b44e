pub use crate::http::{
    Client, HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport,
};

pub mod http;
pub mod pagination;

mod accounts;
mod leads;
mod profiles;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API error (HTTP {status}): {message}")]
    Api { message: String, status: u16 },
    #[error("JSON decode failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unexpected response body: {0}")]
    UnexpectedBody(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
