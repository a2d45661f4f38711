use garde::Validate;
use kernel::model::{
    id::{StudentId, Username},
    user::{event::CreateUser, UserRecord},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[garde(length(min = 1))]
    pub username: String,
    #[garde(length(min = 1))]
    pub student_id: String,
    #[garde(skip)]
    pub phone_number: Option<String>,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(value: CreateUserRequest) -> Self {
        let CreateUserRequest {
            username,
            student_id,
            phone_number,
        } = value;
        CreateUser::new(
            Username::new(username),
            StudentId::new(student_id),
            phone_number,
        )
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub username: Username,
    pub student_id: StudentId,
    pub phone_number: Option<String>,
}

impl From<UserRecord> for UserResponse {
    fn from(value: UserRecord) -> Self {
        let UserRecord {
            username,
            student_id,
            phone_number,
        } = value;
        Self {
            username,
            student_id,
            phone_number,
        }
    }
}
