use crate::model::id::{StudentId, Username};

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub username: Username,
    pub student_id: StudentId,
    // 登録時に任意で受け取るだけで、予約処理では参照しない
    pub phone_number: Option<String>,
}
