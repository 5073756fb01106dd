use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use thiserror::Error;
use uuid::Uuid;

use crate::{
    AppState,
    error::ApiError,
    models::Role,
    repository::RepositoryState,
    token::{TokenCodec, TokenKind},
};

// --- Route Classification ---

/// RouteClass
///
/// The three access classes a route can belong to. A route declares its class
/// by which router module registers it (`routes/public.rs`,
/// `routes/authenticated.rs`, `routes/admin.rs`); the module's route layer
/// binds the matching policy, so classification lives in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// No token inspection of any kind; a garbage Authorization header is
    /// simply ignored.
    Public,
    /// Requires a verified token and a live subject.
    Protected,
    /// Protected, plus the resolved role must be Admin.
    AdminOnly,
}

/// AccessPolicy
///
/// What the guard enforces for a route: the access class plus which credential
/// kind the route accepts. Refresh tokens only ever renew; access tokens never
/// renew — the kind is part of the policy, not handler logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessPolicy {
    pub class: RouteClass,
    pub kind: TokenKind,
}

impl AccessPolicy {
    pub fn public() -> Self {
        Self {
            class: RouteClass::Public,
            kind: TokenKind::Access,
        }
    }

    pub fn authenticated() -> Self {
        Self {
            class: RouteClass::Protected,
            kind: TokenKind::Access,
        }
    }

    pub fn admin_only() -> Self {
        Self {
            class: RouteClass::AdminOnly,
            kind: TokenKind::Access,
        }
    }

    /// The token-renewal endpoint: still protected, but it accepts (only)
    /// refresh-kind tokens.
    pub fn refresh() -> Self {
        Self {
            class: RouteClass::Protected,
            kind: TokenKind::Refresh,
        }
    }
}

impl Default for AccessPolicy {
    /// An unclassified route is treated as protected. Forgetting to classify
    /// a route can cost availability, never confidentiality.
    fn default() -> Self {
        Self::authenticated()
    }
}

// --- Deny Reasons ---

/// AuthError
///
/// Why the guard refused a request. The distinction matters for logs and
/// tests; clients only ever see the 401/403 split (`From<AuthError> for
/// ApiError` below), so none of these leak token internals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No Authorization header, a non-Bearer scheme, or an empty credential.
    #[error("missing bearer credential")]
    MissingToken,
    /// Signature, format, or expiry failure — and the normalized form of any
    /// internal error during evaluation.
    #[error("invalid bearer credential")]
    InvalidToken,
    /// A refresh token on an ordinary route, or an access token on the
    /// renewal route.
    #[error("wrong token kind for this route")]
    WrongTokenKind,
    /// The token verified but its subject no longer exists.
    #[error("token subject no longer exists")]
    UnknownSubject,
    /// Identity is real but the route demands a role it does not have.
    #[error("insufficient role")]
    Forbidden,
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Forbidden => ApiError::Forbidden,
            _ => ApiError::Unauthorized,
        }
    }
}

// --- Identity ---

/// AuthUser
///
/// The resolved identity of an authenticated request, attached to the request
/// extensions by the access guard and read back by the extractor below.
/// Handlers use it for ownership decisions; the role was already enforced for
/// admin routes before any handler runs.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub role: Role,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// can_mutate
    ///
    /// The single ownership rule every mutating handler consults:
    /// - admins may mutate anything;
    /// - owned resources require the caller to be the owner;
    /// - ownerless resources (`None`, i.e. categories) are open to any
    ///   authenticated identity.
    ///
    /// A false here is a 403 — the caller is known, just not allowed — never
    /// a 401.
    pub fn can_mutate(&self, owner: Option<Uuid>) -> bool {
        if self.is_admin() {
            return true;
        }

        match owner {
            Some(owner_id) => owner_id == self.id,
            None => true,
        }
    }
}

/// AuthUser Extractor
///
/// Reads the identity the guard attached. Handlers simply take `AuthUser` as
/// an argument; if a route was somehow wired without its guard layer, the
/// extractor finds nothing and rejects with 401 — fail-closed either way.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or(ApiError::Unauthorized)
    }
}

// --- Token Extraction ---

/// bearer_token
///
/// The one place the `Bearer ` scheme is stripped. Absent header, foreign
/// scheme, and empty credential all fail closed as MissingToken; nothing else
/// in the codebase touches the Authorization header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MissingToken)?;

    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }

    Ok(token)
}

// --- Access Guard ---

/// AccessGuard
///
/// The per-request authorization state machine. Stateless and idempotent:
/// it borrows the codec and repository, reads the headers, and produces
/// either an identity (for non-public routes) or a terminal deny reason.
pub struct AccessGuard<'a> {
    codec: &'a TokenCodec,
    repo: &'a RepositoryState,
}

impl<'a> AccessGuard<'a> {
    pub fn new(codec: &'a TokenCodec, repo: &'a RepositoryState) -> Self {
        Self { codec, repo }
    }

    /// evaluate
    ///
    /// Runs the full decision sequence for one request:
    /// 1. Public policy → allowed immediately, identity-free. Neither the
    ///    codec nor the repository is touched.
    /// 2. Extract the bearer credential (fail-closed).
    /// 3. Verify signature + expiry.
    /// 4. The token kind must match the policy's accepted kind.
    /// 5. Resolve the subject to a live user row. Infrastructure failures are
    ///    logged with full detail and normalized to InvalidToken so clients
    ///    cannot distinguish them from a bad token.
    /// 6. Admin-only routes additionally require the Admin role.
    pub async fn evaluate(
        &self,
        policy: AccessPolicy,
        headers: &HeaderMap,
    ) -> Result<Option<AuthUser>, AuthError> {
        if policy.class == RouteClass::Public {
            return Ok(None);
        }

        let token = bearer_token(headers)?;

        let claims = self
            .codec
            .verify(token)
            .map_err(|_| AuthError::InvalidToken)?;

        if claims.token_type != policy.kind {
            return Err(AuthError::WrongTokenKind);
        }

        let user = match self.repo.get_user(claims.sub).await {
            Ok(found) => found.ok_or(AuthError::UnknownSubject)?,
            Err(e) => {
                tracing::error!("Identity lookup failed during authorization: {:?}", e);
                return Err(AuthError::InvalidToken);
            }
        };

        let auth_user = AuthUser {
            id: user.id,
            role: user.role,
        };

        if policy.class == RouteClass::AdminOnly && !auth_user.is_admin() {
            return Err(AuthError::Forbidden);
        }

        Ok(Some(auth_user))
    }
}

// --- Middleware Bindings ---

/// guard_request
///
/// Shared middleware body: evaluate the policy, attach the identity on allow,
/// log the reason on deny. The reason goes to the logs only; the client gets
/// the generic 401/403 body. Tokens themselves are never logged.
async fn guard_request(
    state: &AppState,
    policy: AccessPolicy,
    request: &mut Request,
) -> Result<(), ApiError> {
    let guard = AccessGuard::new(&state.codec, &state.repo);

    match guard.evaluate(policy, request.headers()).await {
        Ok(Some(user)) => {
            request.extensions_mut().insert(user);
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(reason) => {
            tracing::warn!(
                %reason,
                method = %request.method(),
                uri = %request.uri(),
                "Request denied"
            );
            Err(reason.into())
        }
    }
}

/// require_access_token
///
/// Route layer for the authenticated router: verified access token + live
/// subject.
pub async fn require_access_token(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    guard_request(&state, AccessPolicy::authenticated(), &mut request).await?;
    Ok(next.run(request).await)
}

/// require_admin
///
/// Route layer for the admin router: everything above, plus the Admin role.
/// Handlers behind this layer never re-check the role.
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    guard_request(&state, AccessPolicy::admin_only(), &mut request).await?;
    Ok(next.run(request).await)
}

/// require_refresh_token
///
/// Route layer for the token-renewal endpoint: accepts only refresh-kind
/// tokens; an access token here is as wrong as a refresh token elsewhere.
pub async fn require_refresh_token(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    guard_request(&state, AccessPolicy::refresh(), &mut request).await?;
    Ok(next.run(request).await)
}
