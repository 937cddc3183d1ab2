#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required argument was missing or malformed, nothing was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("config error: {0}")]
    Config(String),
    /// The envelope came back with its `err` branch populated.
    #[error("api error: {opstat}, code: {code}, message: {message}")]
    Api {
        opstat: String,
        code: String,
        message: String,
    },
    #[error("request api failed: {status}, message: {message}")]
    RequestAPIFailed { status: String, message: String },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Code reported by the API, only set for [`Error::Api`].
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Error::Api { code, .. } => Some(code),
            _ => None,
        }
    }
}
