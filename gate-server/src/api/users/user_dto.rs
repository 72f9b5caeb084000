use gate_core::User;

use serde::Serialize;

/// User DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub email: Option<String>,
    pub national_id: Option<String>,
    pub role: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_string(),
            username: u.username,
            display_name: u.display_name,
            email: u.email,
            national_id: u.national_id,
            role: u.role.as_str().to_string(),
            created_at: u.audit.created_at.timestamp(),
            updated_at: u.audit.updated_at.timestamp(),
        }
    }
}
