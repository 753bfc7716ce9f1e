use thiserror::Error;

pub type Result<T> = std::result::Result<T, AuthError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Authorization header is required")]
    MissingToken,

    #[error("Authorization header must use Bearer scheme")]
    InvalidAuthScheme,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,
}

impl AuthError {
    /// Machine-readable code for API error bodies
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::MissingToken => "missing_auth_header",
            AuthError::InvalidAuthScheme => "invalid_auth_scheme",
            AuthError::InvalidToken => "invalid_token",
            AuthError::TokenExpired => "token_expired",
        }
    }
}
