use crate::database::UserRow;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub name: String,
    pub email: String,
    pub profile_picture: Option<String>,
}

impl From<UserRow> for User {
    fn from((name, email, profile_picture): UserRow) -> Self {
        Self {
            name,
            email,
            profile_picture,
        }
    }
}

impl User {
    /// Wire shape used by GET /users: [name, email, profile_picture].
    pub fn into_row(self) -> UserRow {
        (self.name, self.email, self.profile_picture)
    }
}
