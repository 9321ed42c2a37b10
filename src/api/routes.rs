//! User route table.
//!
//! Every user endpoint is declared as one [`RouteSpec`] row: method, path,
//! the ordered validation checks, and the handler. [`user_routes`] walks the
//! table and registers each row, wrapping the handler in the validation
//! middleware when the row has checks.

use axum::{
    Router,
    handler::Handler,
    middleware,
    routing::{MethodFilter, MethodRouter, on},
};

use crate::api::handlers::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    patch_user_handler, replace_user_handler,
};
use crate::api::middleware::validation::{self, Check, ValidationState};
use crate::state::AppState;

/// One row of the route table.
pub struct RouteSpec {
    /// Operation name used in logs.
    pub name: &'static str,
    pub method: MethodFilter,
    pub path: &'static str,
    /// Checks run in order before the handler; the first failure responds.
    pub checks: &'static [Check],
    handler: MethodRouter<AppState>,
}

impl RouteSpec {
    fn new<H, T>(
        name: &'static str,
        method: MethodFilter,
        path: &'static str,
        checks: &'static [Check],
        handler: H,
    ) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        Self {
            name,
            method,
            path,
            checks,
            handler: on(method, handler),
        }
    }
}

/// The user endpoints.
///
/// | method | path          | checks                                                  |
/// |--------|---------------|---------------------------------------------------------|
/// | GET    | `/users`      | -                                                       |
/// | POST   | `/users`      | required fields, email is unique                        |
/// | GET    | `/users/{id}` | user exists                                             |
/// | PUT    | `/users/{id}` | user exists, required fields, email belongs to user     |
/// | PATCH  | `/users/{id}` | user exists, patch email belongs to user                |
/// | DELETE | `/users/{id}` | user exists                                             |
pub fn route_table() -> Vec<RouteSpec> {
    vec![
        RouteSpec::new("list", MethodFilter::GET, "/users", &[], list_users_handler),
        RouteSpec::new(
            "create",
            MethodFilter::POST,
            "/users",
            &[Check::RequiredUserFields, Check::EmailIsUnique],
            create_user_handler,
        ),
        RouteSpec::new(
            "read",
            MethodFilter::GET,
            "/users/{id}",
            &[Check::UserExists],
            get_user_handler,
        ),
        RouteSpec::new(
            "replace",
            MethodFilter::PUT,
            "/users/{id}",
            &[
                Check::UserExists,
                Check::RequiredUserFields,
                Check::EmailBelongsToUser,
            ],
            replace_user_handler,
        ),
        RouteSpec::new(
            "patch",
            MethodFilter::PATCH,
            "/users/{id}",
            &[Check::UserExists, Check::PatchEmailBelongsToUser],
            patch_user_handler,
        ),
        RouteSpec::new(
            "delete",
            MethodFilter::DELETE,
            "/users/{id}",
            &[Check::UserExists],
            delete_user_handler,
        ),
    ]
}

/// Registers every row of [`route_table`].
///
/// `state` is captured by each row's validation middleware; the returned
/// router still needs `.with_state(state)`.
pub fn user_routes(state: &AppState) -> Router<AppState> {
    route_table()
        .into_iter()
        .fold(Router::new(), |router, route| {
            tracing::debug!(
                route = route.name,
                path = route.path,
                checks = ?route.checks,
                "Registering route"
            );

            let handler = if route.checks.is_empty() {
                route.handler
            } else {
                route.handler.route_layer(middleware::from_fn_with_state(
                    ValidationState {
                        app: state.clone(),
                        checks: route.checks,
                    },
                    validation::layer,
                ))
            };

            router.route(route.path, handler)
        })
}
