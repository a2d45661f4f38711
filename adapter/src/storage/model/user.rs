use kernel::model::{
    id::{StudentId, Username},
    user::UserRecord,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// users.json の形。ユーザー名をキーにしたマップで保存する
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UsersDocument(BTreeMap<Username, UserRow>);

impl UsersDocument {
    pub fn from_users(users: &BTreeMap<Username, UserRow>) -> Self {
        Self(users.clone())
    }

    pub fn into_users(self) -> BTreeMap<Username, UserRow> {
        self.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRow {
    pub student_id: StudentId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl UserRow {
    pub fn into_record(self, username: Username) -> UserRecord {
        let UserRow {
            student_id,
            phone_number,
        } = self;
        UserRecord {
            username,
            student_id,
            phone_number,
        }
    }
}
