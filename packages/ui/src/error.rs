use api::ApiError;
use thiserror::Error;

/// Outcome kinds of a client operation that did not simply succeed.
#[derive(Debug, Error)]
pub enum ClientError {
    /// `/login` rejected the credentials. View is unchanged.
    #[error("login failed")]
    AuthenticationFailed,

    /// The server no longer accepts the session token and the client has
    /// already logged out, or the response arrived after its session ended.
    #[error("session is no longer valid")]
    SessionInvalid,

    /// Empty habit name on add. Nothing was sent.
    #[error("habit name is empty")]
    ValidationSkipped,

    /// The request failed without a usable response, or the server answered
    /// with an unexpected status.
    #[error(transparent)]
    NetworkOrServer(#[from] ApiError),
}
