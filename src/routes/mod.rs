/// Router Module Index
///
/// Organizes the application's routing into access-class-segregated modules.
/// Each module corresponds to exactly one `AccessPolicy`, and that policy is
/// applied as a router layer in `create_router` — a route is public,
/// authenticated, refresh-only, or admin-only because of the module it lives
/// in, never because of a check buried inside its handler.

/// Routes accessible to anyone. The guard short-circuits before touching the
/// token codec or the repository, so junk in the Authorization header is
/// ignored here.
pub mod public;

/// Routes behind the access-token guard layer. Handlers receive a resolved
/// `AuthUser` via request extensions and run ownership checks where the
/// resource has an owner.
pub mod authenticated;

/// The session-rotation route, behind the refresh-token guard layer. An
/// access token presented here is rejected the same way a refresh token is
/// rejected on an ordinary protected route.
pub mod refresh;

/// Routes restricted to the `admin` role, behind the admin guard layer.
pub mod admin;
