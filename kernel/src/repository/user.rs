use crate::model::{
    id::Username,
    user::{
        event::{CreateUser, LoginUser},
        UserRecord,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    // ユーザー登録を行う。ユーザー名が重複している場合は失敗する
    async fn create(&self, event: CreateUser) -> AppResult<UserRecord>;
    // ユーザー名と学籍番号の組を照合する
    async fn verify_credentials(&self, event: LoginUser) -> AppResult<UserRecord>;
    // ユーザー名からユーザーを取得する
    async fn find_by_username(&self, username: &Username) -> AppResult<Option<UserRecord>>;
}
