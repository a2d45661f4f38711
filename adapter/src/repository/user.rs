use crate::storage::{
    model::user::{UserRow, UsersDocument},
    StorageRoot,
};
use async_trait::async_trait;
use kernel::model::{
    id::Username,
    user::{
        event::{CreateUser, LoginUser},
        UserRecord,
    },
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};
use std::collections::BTreeMap;
use tokio::sync::Mutex;

const USERS_FILE: &str = "users.json";

// ユーザー名 → 学籍番号の単純な台帳。users.json と同期して持つ。
// 日次リセットの対象外で、登録したユーザーは消えない。
pub struct UserRepositoryImpl {
    storage: StorageRoot,
    state: Mutex<BTreeMap<Username, UserRow>>,
}

impl UserRepositoryImpl {
    pub async fn load(storage: StorageRoot) -> AppResult<Self> {
        let doc: UsersDocument = storage.load_json(USERS_FILE).await?;
        Ok(Self {
            storage,
            state: Mutex::new(doc.into_users()),
        })
    }

    async fn persist(&self, users: &BTreeMap<Username, UserRow>) -> AppResult<()> {
        self.storage
            .persist_json(USERS_FILE, &UsersDocument::from_users(users))
            .await
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<UserRecord> {
        let mut state = self.state.lock().await;

        if state.contains_key(&event.username) {
            return Err(AppError::DuplicateUsernameError);
        }

        let row = UserRow {
            student_id: event.student_id,
            phone_number: event.phone_number,
        };
        state.insert(event.username.clone(), row.clone());
        if let Err(e) = self.persist(&state).await {
            state.remove(&event.username);
            return Err(e);
        }
        Ok(row.into_record(event.username))
    }

    // 学籍番号が一致しない場合と未登録の場合は区別せずに失敗させる
    async fn verify_credentials(&self, event: LoginUser) -> AppResult<UserRecord> {
        let state = self.state.lock().await;
        match state.get(&event.username) {
            Some(row) if row.student_id == event.student_id => {
                Ok(row.clone().into_record(event.username))
            }
            _ => Err(AppError::UnauthenticatedError),
        }
    }

    async fn find_by_username(&self, username: &Username) -> AppResult<Option<UserRecord>> {
        let state = self.state.lock().await;
        Ok(state
            .get(username)
            .map(|row| row.clone().into_record(username.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::open_storage_with;
    use kernel::model::id::StudentId;
    use shared::config::StorageConfig;
    use tempfile::TempDir;

    async fn repo_in(dir: &TempDir) -> anyhow::Result<UserRepositoryImpl> {
        let storage = open_storage_with(&StorageConfig {
            data_dir: dir.path().to_path_buf(),
        })?;
        Ok(UserRepositoryImpl::load(storage).await?)
    }

    fn create_event(username: &str, student_id: &str) -> CreateUser {
        CreateUser::new(Username::new(username), StudentId::new(student_id), None)
    }

    #[tokio::test]
    async fn test_register_and_duplicate() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let repo = repo_in(&dir).await?;

        let user = repo.create(create_event("alice", "20250101")).await?;
        assert_eq!(user.username, Username::new("alice"));

        let err = repo
            .create(create_event("alice", "20259999"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateUsernameError));
        Ok(())
    }

    #[tokio::test]
    async fn test_verify_credentials() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let repo = repo_in(&dir).await?;
        repo.create(create_event("alice", "20250101")).await?;

        let user = repo
            .verify_credentials(LoginUser::new(
                Username::new("alice"),
                StudentId::new("20250101"),
            ))
            .await?;
        assert_eq!(user.student_id, StudentId::new("20250101"));

        // 学籍番号の不一致と未登録はどちらもログイン失敗
        let err = repo
            .verify_credentials(LoginUser::new(
                Username::new("alice"),
                StudentId::new("20259999"),
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnauthenticatedError));
        let err = repo
            .verify_credentials(LoginUser::new(
                Username::new("carol"),
                StudentId::new("20250101"),
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnauthenticatedError));
        Ok(())
    }

    #[tokio::test]
    async fn test_reload_keeps_registered_users() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        {
            let repo = repo_in(&dir).await?;
            repo.create(CreateUser::new(
                Username::new("alice"),
                StudentId::new("20250101"),
                Some("090-0000-0000".into()),
            ))
            .await?;
        }

        let reloaded = repo_in(&dir).await?;
        let user = reloaded
            .find_by_username(&Username::new("alice"))
            .await?
            .unwrap();
        assert_eq!(user.student_id, StudentId::new("20250101"));
        assert_eq!(user.phone_number.as_deref(), Some("090-0000-0000"));
        Ok(())
    }
}
