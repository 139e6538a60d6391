use serde::{Deserialize, Serialize};

use crate::store::User;

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone: i64,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// User as returned to clients. The password digest never leaves the service.
#[derive(Debug, Serialize)]
pub struct UserOut {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub phone: i64,
}

impl From<User> for UserOut {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            phone: user.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_out_omits_the_digest() {
        let out = UserOut::from(User {
            id: 1,
            username: "admin".into(),
            email: "admin@recetas.com".into(),
            password: "$argon2id$secret".into(),
            phone: 123456789,
        });

        let json = serde_json::to_string(&out).unwrap();
        assert!(json.contains("admin@recetas.com"));
        assert!(!json.contains("argon2id"));
        assert!(!json.contains("password"));
    }
}
