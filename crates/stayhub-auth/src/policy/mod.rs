//! Route access policy.
//!
//! A single static table maps request method + path to the access rule
//! enforced by the API middleware. Keeping the whole table in one place
//! makes the authorization surface reviewable at a glance.

use stayhub_entity::user::UserRole;

/// Access requirement for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessRule {
    /// No token required.
    Public,
    /// Any valid token.
    Authenticated,
    /// Valid token with the admin role.
    AdminOnly,
}

/// Static route-to-rule table.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessPolicy;

impl AccessPolicy {
    pub fn new() -> Self {
        Self
    }

    /// Returns the access rule for a request.
    ///
    /// Unlisted paths default to `Authenticated` so a newly added route is
    /// never accidentally public.
    pub fn rule_for(&self, method: &str, path: &str) -> AccessRule {
        if path.starts_with("/api/auth/") {
            return AccessRule::Public;
        }

        if path == "/api/health" {
            return AccessRule::Public;
        }

        if path.starts_with("/api/hotels") || path.starts_with("/api/rooms") {
            return match method {
                "GET" => AccessRule::Public,
                _ => AccessRule::AdminOnly,
            };
        }

        if path.starts_with("/api/bookings") {
            // Collection listing and lifecycle mutations are admin operations;
            // creating and reading one's own bookings is open to any user.
            if method == "GET" && path == "/api/bookings" {
                return AccessRule::AdminOnly;
            }
            if method == "PUT" && path.ends_with("/cancel") {
                return AccessRule::AdminOnly;
            }
            if method == "DELETE" {
                return AccessRule::AdminOnly;
            }
            return AccessRule::Authenticated;
        }

        AccessRule::Authenticated
    }

    /// Checks whether a role satisfies a rule. `Public` always passes.
    pub fn is_satisfied(&self, rule: AccessRule, role: UserRole) -> bool {
        match rule {
            AccessRule::Public | AccessRule::Authenticated => true,
            AccessRule::AdminOnly => role.is_admin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> AccessPolicy {
        AccessPolicy::new()
    }

    #[test]
    fn test_auth_routes_are_public() {
        let p = policy();
        assert_eq!(p.rule_for("POST", "/api/auth/register"), AccessRule::Public);
        assert_eq!(
            p.rule_for("POST", "/api/auth/register-admin"),
            AccessRule::Public
        );
        assert_eq!(p.rule_for("POST", "/api/auth/login"), AccessRule::Public);
    }

    #[test]
    fn test_health_is_public() {
        assert_eq!(policy().rule_for("GET", "/api/health"), AccessRule::Public);
    }

    #[test]
    fn test_hotel_reads_public_writes_admin() {
        let p = policy();
        assert_eq!(p.rule_for("GET", "/api/hotels"), AccessRule::Public);
        assert_eq!(
            p.rule_for("GET", "/api/hotels/3f2c7a10-0000-0000-0000-000000000000"),
            AccessRule::Public
        );
        assert_eq!(p.rule_for("POST", "/api/hotels"), AccessRule::AdminOnly);
        assert_eq!(
            p.rule_for("PUT", "/api/hotels/3f2c7a10-0000-0000-0000-000000000000"),
            AccessRule::AdminOnly
        );
        assert_eq!(
            p.rule_for("DELETE", "/api/hotels/3f2c7a10-0000-0000-0000-000000000000"),
            AccessRule::AdminOnly
        );
    }

    #[test]
    fn test_room_reads_public_writes_admin() {
        let p = policy();
        assert_eq!(p.rule_for("GET", "/api/rooms/available"), AccessRule::Public);
        assert_eq!(
            p.rule_for("GET", "/api/rooms/hotel/abc/available"),
            AccessRule::Public
        );
        assert_eq!(
            p.rule_for("POST", "/api/rooms/hotel/abc"),
            AccessRule::AdminOnly
        );
        assert_eq!(p.rule_for("PUT", "/api/rooms/abc"), AccessRule::AdminOnly);
        assert_eq!(p.rule_for("DELETE", "/api/rooms/abc"), AccessRule::AdminOnly);
    }

    #[test]
    fn test_booking_rules() {
        let p = policy();
        assert_eq!(p.rule_for("POST", "/api/bookings"), AccessRule::Authenticated);
        assert_eq!(
            p.rule_for("GET", "/api/bookings/my"),
            AccessRule::Authenticated
        );
        assert_eq!(
            p.rule_for("GET", "/api/bookings/abc"),
            AccessRule::Authenticated
        );
        assert_eq!(
            p.rule_for("GET", "/api/bookings/hotel/abc"),
            AccessRule::Authenticated
        );
        assert_eq!(p.rule_for("GET", "/api/bookings"), AccessRule::AdminOnly);
        assert_eq!(
            p.rule_for("PUT", "/api/bookings/abc/cancel"),
            AccessRule::AdminOnly
        );
        assert_eq!(
            p.rule_for("DELETE", "/api/bookings/abc"),
            AccessRule::AdminOnly
        );
    }

    #[test]
    fn test_unknown_routes_require_auth() {
        assert_eq!(
            policy().rule_for("GET", "/api/unknown"),
            AccessRule::Authenticated
        );
    }

    #[test]
    fn test_role_satisfaction() {
        let p = policy();
        assert!(p.is_satisfied(AccessRule::Public, UserRole::User));
        assert!(p.is_satisfied(AccessRule::Authenticated, UserRole::User));
        assert!(!p.is_satisfied(AccessRule::AdminOnly, UserRole::User));
        assert!(p.is_satisfied(AccessRule::AdminOnly, UserRole::Admin));
    }
}
