use crate::model::id::{StudentId, Username};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateUser {
    pub username: Username,
    pub student_id: StudentId,
    pub phone_number: Option<String>,
}

#[derive(Debug, new)]
pub struct LoginUser {
    pub username: Username,
    pub student_id: StudentId,
}
