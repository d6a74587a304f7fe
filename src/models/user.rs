use serde::{Deserialize, Serialize};

// Login form, forwarded URL-encoded to the auth backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}
