use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;

/// Shared secret guarding the admin routes, presented by callers in the
/// `x-admin-secret` header.
#[derive(Clone)]
pub struct AdminSecret {
    secret: Option<String>,
    production: bool,
}

impl AdminSecret {
    pub fn new(secret: Option<String>, production: bool) -> Self {
        let secret = secret.filter(|value| !value.trim().is_empty());
        Self { secret, production }
    }

    /// Checks a presented header value. An unconfigured secret admits every
    /// request in development but refuses all of them in production, so a
    /// deployment that forgot the secret cannot be driven by strangers.
    pub fn verify(&self, presented: Option<&str>) -> Result<(), ApiError> {
        match &self.secret {
            None if self.production => Err(ApiError::Unauthorized(
                "ADMIN_SECRET não configurado/fornecido.".to_string(),
            )),
            None => Ok(()),
            Some(expected) => {
                if presented == Some(expected.as_str()) {
                    Ok(())
                } else {
                    tracing::warn!("Invalid admin secret attempt");
                    Err(ApiError::Unauthorized("Não autorizado.".to_string()))
                }
            }
        }
    }
}

pub async fn require_admin(
    State(admin): State<AdminSecret>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let presented = request
        .headers()
        .get("x-admin-secret")
        .and_then(|value| value.to_str().ok());
    admin.verify(presented)?;
    Ok(next.run(request).await)
}
