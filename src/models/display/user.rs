//! User display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::User;

/// User row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct UserDisplay {
    #[tabled(rename = "USER ID")]
    pub id: String,

    #[tabled(rename = "USERNAME")]
    pub user_name: String,

    /// First + last name
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,
}

impl From<User> for UserDisplay {
    fn from(user: User) -> Self {
        let name = user.full_name();
        Self {
            id: user.id,
            user_name: user.user_name,
            name,
            email: user.email.unwrap_or_else(|| "--".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::user;

    #[test]
    fn test_user_display_fields() {
        let display = UserDisplay::from(user("4", "ada"));
        assert_eq!(display.id, "4");
        assert_eq!(display.user_name, "ada");
        assert_eq!(display.name, "Test ada");
        assert_eq!(display.email, "--");
    }
}
