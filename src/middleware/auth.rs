use crate::core::AppError;
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use argon2::{Argon2, PasswordHash, PasswordVerifier};
use base64::Engine;
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

/// Administrator identity stored in request extensions after authentication
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminIdentity(pub String);

/// Configured administrator credentials. The password is kept only as an
/// Argon2 hash.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    username: String,
    password_hash: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: &str) -> crate::core::Result<Self> {
        Ok(Self {
            username: username.into(),
            password_hash: hash_password(password)?,
        })
    }

    pub fn verify(&self, username: &str, password: &str) -> bool {
        // Always run the hash check so a wrong username costs the same.
        let password_ok = verify_password(password, &self.password_hash).unwrap_or(false);
        password_ok && username == self.username
    }
}

/// HTTP Basic authentication middleware for the admin scope
pub struct AdminAuth {
    credentials: Arc<AdminCredentials>,
}

impl AdminAuth {
    pub fn new(credentials: AdminCredentials) -> Self {
        Self {
            credentials: Arc::new(credentials),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AdminAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AdminAuthMiddleware<S>;
    type Future = Ready<std::result::Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminAuthMiddleware {
            service: Rc::new(service),
            credentials: self.credentials.clone(),
        }))
    }
}

pub struct AdminAuthMiddleware<S> {
    service: Rc<S>,
    credentials: Arc<AdminCredentials>,
}

impl<S, B> Service<ServiceRequest> for AdminAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, std::result::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        let credentials = self.credentials.clone();

        Box::pin(async move {
            let header = req
                .headers()
                .get("Authorization")
                .and_then(|h| h.to_str().ok())
                .ok_or_else(|| Error::from(AppError::unauthorized("Missing Authorization header")))?;

            let (username, password) = parse_basic_auth(header).map_err(Error::from)?;

            if !credentials.verify(&username, &password) {
                tracing::warn!(username = %username, path = %req.path(), "Rejected admin credentials");
                return Err(Error::from(AppError::unauthorized("Invalid credentials")));
            }

            req.extensions_mut().insert(AdminIdentity(username));

            svc.call(req).await
        })
    }
}

/// Split an `Authorization: Basic <base64(user:pass)>` header value
pub fn parse_basic_auth(header: &str) -> crate::core::Result<(String, String)> {
    let encoded = header
        .strip_prefix("Basic ")
        .ok_or_else(|| AppError::unauthorized("Unsupported authorization scheme"))?;

    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|_| AppError::unauthorized("Malformed basic credentials"))?;
    let decoded = String::from_utf8(decoded)
        .map_err(|_| AppError::unauthorized("Malformed basic credentials"))?;

    let (username, password) = decoded
        .split_once(':')
        .ok_or_else(|| AppError::unauthorized("Malformed basic credentials"))?;

    Ok((username.to_string(), password.to_string()))
}

/// Hash a secret using Argon2
pub fn hash_password(password: &str) -> crate::core::Result<String> {
    use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};

    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))
}

/// Verify a secret against an Argon2 hash
pub fn verify_password(password: &str, hash: &str) -> crate::core::Result<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::internal(format!("Invalid hash format: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
