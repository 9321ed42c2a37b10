//! Validation chain run before user handlers.
//!
//! Each route declares an ordered list of [`Check`]s. The [`layer`]
//! middleware buffers the request body once, runs the checks in order, and
//! stops at the first failure. When every check passes the request is
//! rebuilt with the same body and handed to the handler.

use axum::{
    body::Body,
    extract::{FromRequestParts, RawPathParams, Request, State},
    middleware::Next,
    response::Response,
};
use serde_json::{Value, json};
use validator::Validate;

use crate::api::dto::user::RequiredUserFields;
use crate::api::extract::{decode_json, read_body};
use crate::error::AppError;
use crate::state::AppState;

/// A single validation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// `email` and `password` are both present in the body.
    RequiredUserFields,
    /// No stored user already has the body's `email`.
    EmailIsUnique,
    /// The body's `email` is the addressed user's current email.
    EmailBelongsToUser,
    /// Like [`Check::EmailBelongsToUser`], but passes when no email is given.
    PatchEmailBelongsToUser,
    /// The `{id}` path parameter resolves to a stored user.
    UserExists,
}

/// What the checks see of a request.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    /// The `{id}` path parameter, if the route has one.
    pub user_id: Option<String>,
    /// Parsed JSON body; an empty object when the body is empty.
    pub body: Value,
}

impl PendingRequest {
    fn email(&self) -> Option<&str> {
        self.body.get("email").and_then(Value::as_str)
    }

    fn require_user_id(&self) -> Result<&str, AppError> {
        self.user_id.as_deref().ok_or_else(|| {
            AppError::internal(
                "Route is missing a user id parameter",
                json!({ "reason": "check requires {id} in the path" }),
            )
        })
    }
}

impl Check {
    /// Runs this check against a pending request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] or [`AppError::NotFound`] when the
    /// request must not proceed.
    pub async fn run(self, state: &AppState, req: &PendingRequest) -> Result<(), AppError> {
        match self {
            Check::RequiredUserFields => required_user_fields(req),
            Check::EmailIsUnique => email_is_unique(state, req).await,
            Check::EmailBelongsToUser => email_belongs_to_user(state, req).await,
            Check::PatchEmailBelongsToUser => {
                if req.email().is_some() {
                    email_belongs_to_user(state, req).await
                } else {
                    Ok(())
                }
            }
            Check::UserExists => {
                let id = req.require_user_id()?;
                state.user_service.get_user(id).await.map(|_| ())
            }
        }
    }
}

fn required_user_fields(req: &PendingRequest) -> Result<(), AppError> {
    let fields: RequiredUserFields = serde_json::from_value(req.body.clone()).map_err(|e| {
        AppError::bad_request("Invalid request body", json!({ "reason": e.to_string() }))
    })?;

    fields.validate()?;
    Ok(())
}

async fn email_is_unique(state: &AppState, req: &PendingRequest) -> Result<(), AppError> {
    let Some(email) = req.email() else {
        return Ok(());
    };

    if state.user_service.find_user_by_email(email).await?.is_some() {
        return Err(AppError::bad_request(
            "User email already exists",
            json!({ "email": email }),
        ));
    }

    Ok(())
}

async fn email_belongs_to_user(state: &AppState, req: &PendingRequest) -> Result<(), AppError> {
    let id = req.require_user_id()?;
    let user = state.user_service.get_user(id).await?;

    match req.email() {
        Some(email) if email == user.email => Ok(()),
        email => Err(AppError::bad_request(
            "Invalid email",
            json!({ "id": id, "email": email }),
        )),
    }
}

/// Runs `checks` in order, returning the first failure.
pub async fn run_checks(
    state: &AppState,
    checks: &[Check],
    req: &PendingRequest,
) -> Result<(), AppError> {
    for check in checks {
        if let Err(e) = check.run(state, req).await {
            tracing::debug!(?check, error = %e, "Validation check failed");
            return Err(e);
        }
    }

    Ok(())
}

/// State for one route's validation middleware.
#[derive(Clone)]
pub struct ValidationState {
    pub app: AppState,
    pub checks: &'static [Check],
}

/// Middleware running a route's validation chain.
///
/// # Errors
///
/// Returns `400 Bad Request` if the body exceeds the configured limit, is
/// not declared as JSON, or is not valid JSON, and otherwise the error of the
/// first failing check.
///
/// # Example
///
/// ```rust,ignore
/// let handler = post(create_user_handler).route_layer(middleware::from_fn_with_state(
///     ValidationState { app: state.clone(), checks: &[Check::RequiredUserFields] },
///     validation::layer,
/// ));
/// ```
pub async fn layer(
    State(validation): State<ValidationState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let user_id = RawPathParams::from_request_parts(&mut parts, &())
        .await
        .ok()
        .and_then(|params| {
            params
                .iter()
                .find(|(name, _)| *name == "id")
                .map(|(_, value)| value.to_string())
        });

    let bytes = read_body(body, validation.app.body_limit).await?;
    let body: Value = decode_json(&parts.headers, &bytes)?;

    let pending = PendingRequest { user_id, body };
    run_checks(&validation.app, validation.checks, &pending).await?;

    let req = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(req).await)
}
