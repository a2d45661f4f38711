use garde::Validate;
use kernel::model::{
    id::{StudentId, Username},
    user::event::LoginUser,
};
use serde::Deserialize;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[garde(length(min = 1))]
    pub username: String,
    #[garde(length(min = 1))]
    pub student_id: String,
}

impl From<LoginRequest> for LoginUser {
    fn from(value: LoginRequest) -> Self {
        let LoginRequest {
            username,
            student_id,
        } = value;
        LoginUser::new(Username::new(username), StudentId::new(student_id))
    }
}
