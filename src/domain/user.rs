use std::fmt;

/// Marketplace roles. Carried on every user but not enforced by any operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Seller,
    Buyer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "Admin"),
            Role::Seller => write!(f, "Seller"),
            Role::Buyer => write!(f, "Buyer"),
        }
    }
}

/// Represents a registered user of the marketplace.
#[derive(Clone, PartialEq)]
pub struct User {
    pub id: u32,
    pub username: String,
    password: String,
    pub role: Role,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Arguments
    /// * `id` - Sequential identifier assigned by the directory
    /// * `username` - Login name, unique ignoring case
    /// * `password` - Opaque secret, stored as given
    /// * `role` - Marketplace role
    pub fn new(id: u32, username: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            username: username.into(),
            password: password.into(),
            role,
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Case-insensitive username comparison used by directory lookups.
    pub fn has_username(&self, username: &str) -> bool {
        self.username.to_lowercase() == username.to_lowercase()
    }
}

// Hand-written so the password never reaches a log line.
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User ID: {}, Username: {}, Role: {}", self.id, self.username, self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_match_ignores_case() {
        let user = User::new(1, "admin", "password", Role::Admin);
        assert!(user.has_username("Admin"));
        assert!(user.has_username("ADMIN"));
        assert!(!user.has_username("admin "));
    }

    #[test]
    fn display_and_debug_hide_password() {
        let user = User::new(2, "seller", "hunter2", Role::Seller);
        assert_eq!(user.to_string(), "User ID: 2, Username: seller, Role: Seller");
        assert!(!format!("{:?}", user).contains("hunter2"));
        assert_eq!(user.password(), "hunter2");
    }
}
