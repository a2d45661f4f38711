use crate::storage::{model::reservation::ReservationsDocument, StorageRoot};
use async_trait::async_trait;
use kernel::model::{
    id::Username,
    reservation::{
        event::{CancelSlot, ReserveSlot},
        Occupancy, ReservationKey,
    },
};
use kernel::policy::{BookingPolicy, DAILY_SLOT_CAP};
use kernel::repository::reservation::ReservationRepository;
use shared::error::{AppError, AppResult};
use tokio::sync::Mutex;

const RESERVATIONS_FILE: &str = "reservations.json";

// 予約の正となるデータ。メモリ上のマップを reservations.json と同期させて持つ。
// 変更系の操作はチェック・書き換え・永続化までを同一のロック内で行う。
pub struct ReservationRepositoryImpl {
    storage: StorageRoot,
    state: Mutex<Occupancy>,
}

impl ReservationRepositoryImpl {
    // 起動時に一度だけ読み込む
    pub async fn load(storage: StorageRoot) -> AppResult<Self> {
        let doc: ReservationsDocument = storage.load_json(RESERVATIONS_FILE).await?;
        Ok(Self {
            storage,
            state: Mutex::new(doc.into_occupancy()),
        })
    }

    async fn persist(&self, occupancy: &Occupancy) -> AppResult<()> {
        self.storage
            .persist_json(
                RESERVATIONS_FILE,
                &ReservationsDocument::from_occupancy(occupancy),
            )
            .await
    }
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    async fn find_owner(&self, key: &ReservationKey) -> AppResult<Option<Username>> {
        Ok(self.state.lock().await.get(key).cloned())
    }

    // 予約操作を行う。事前のチェックとして、以下を調べる。
    // - 予約者が1日の上限に達していないか
    // - 指定のセルが空いているか(本人の予約で埋まっている場合も含めて失敗)
    //
    // 両方を通過した場合のみマップに追加し、ファイルへ書き出す。
    async fn reserve(&self, event: ReserveSlot) -> AppResult<()> {
        let mut state = self.state.lock().await;

        if !BookingPolicy::can_reserve(&event.reserved_by, &state) {
            return Err(AppError::QuotaExceededError(DAILY_SLOT_CAP));
        }
        if state.contains_key(&event.key) {
            return Err(AppError::AlreadyBookedError);
        }

        state.insert(event.key, event.reserved_by);
        if let Err(e) = self.persist(&state).await {
            // 永続化に失敗したらメモリ上の変更も取り消す
            state.remove(&event.key);
            return Err(e);
        }
        Ok(())
    }

    // 予約のキャンセル操作を行う。予約が無いセル、他人の予約は失敗させる
    async fn cancel(&self, event: CancelSlot) -> AppResult<()> {
        let mut state = self.state.lock().await;

        let Some(owner) = state.remove(&event.key) else {
            return Err(AppError::ReservationNotFoundError);
        };
        if owner != event.requested_by {
            state.insert(event.key, owner);
            return Err(AppError::NotOwnerError);
        }

        if let Err(e) = self.persist(&state).await {
            state.insert(event.key, owner);
            return Err(e);
        }
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        let mut state = self.state.lock().await;
        if state.is_empty() {
            return Ok(());
        }

        let previous = std::mem::take(&mut *state);
        if let Err(e) = self.persist(&state).await {
            *state = previous;
            return Err(e);
        }
        Ok(())
    }

    async fn find_by_user(&self, user: &Username) -> AppResult<Vec<ReservationKey>> {
        // BTreeMap なので (スペース, コマ) の昇順がそのまま出てくる
        Ok(self
            .state
            .lock()
            .await
            .iter()
            .filter(|(_, owner)| *owner == user)
            .map(|(key, _)| *key)
            .collect())
    }

    async fn occupancy(&self) -> AppResult<Occupancy> {
        Ok(self.state.lock().await.clone())
    }
}
