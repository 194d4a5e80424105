//! Friend request display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::FriendRequest;

/// Friend request row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct FriendRequestDisplay {
    #[tabled(rename = "REQUEST ID")]
    pub id: String,

    #[tabled(rename = "FROM")]
    pub sender_id: String,

    #[tabled(rename = "TO")]
    pub receiver_id: String,

    #[tabled(rename = "STATUS")]
    pub status: String,
}

impl From<FriendRequest> for FriendRequestDisplay {
    fn from(request: FriendRequest) -> Self {
        let status = request
            .status
            .trim_start_matches("STATUS_")
            .to_lowercase();
        Self {
            id: request.id,
            sender_id: request.sender_id,
            receiver_id: request.receiver_id,
            status: if status.is_empty() {
                "--".to_string()
            } else {
                status
            },
        }
    }
}
