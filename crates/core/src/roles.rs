//! Well-known role name constants.
//!
//! These must match the `CHECK` constraint on `users.role`.

pub const ROLE_USER: &str = "USER";
pub const ROLE_ADMIN: &str = "ADMIN";

pub const VALID_ROLES: &[&str] = &[ROLE_USER, ROLE_ADMIN];

pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_only() {
        assert!(is_valid_role(ROLE_USER));
        assert!(is_valid_role(ROLE_ADMIN));
        assert!(!is_valid_role("user"));
        assert!(!is_valid_role("SUPERUSER"));
    }
}
