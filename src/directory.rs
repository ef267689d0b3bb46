//! User directory. Populated once from seed data; there is no add-user
//! operation exposed to clients.

use crate::domain::{Role, User};

#[derive(Debug)]
pub struct UserDirectory {
    users: Vec<User>,
    next_id: u32,
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl UserDirectory {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }

    pub(crate) fn register(&mut self, username: &str, password: &str, role: Role) -> User {
        let user = User::new(self.next_id, username, password, role);
        self.next_id += 1;
        self.users.push(user.clone());
        user
    }

    /// First user whose username matches ignoring case.
    pub fn find_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|user| user.has_username(username))
    }

    pub fn get(&self, id: u32) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn list(&self) -> Vec<User> {
        self.users.clone()
    }
}
