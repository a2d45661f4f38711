use crate::model::{
    id::Username,
    reservation::{
        event::{CancelSlot, ReserveSlot},
        Occupancy, ReservationKey,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    // 指定セルの現在の予約者を取得する
    async fn find_owner(&self, key: &ReservationKey) -> AppResult<Option<Username>>;
    // 予約操作を行う。上限チェックと空きチェックは書き込みと同一のロック内で行う
    async fn reserve(&self, event: ReserveSlot) -> AppResult<()>;
    // 予約のキャンセル操作を行う
    async fn cancel(&self, event: CancelSlot) -> AppResult<()>;
    // すべての予約を破棄する(日次リセットで使う)
    async fn clear(&self) -> AppResult<()>;
    // ユーザーが保持している予約を (スペース, コマ) の昇順で取得する
    async fn find_by_user(&self, user: &Username) -> AppResult<Vec<ReservationKey>>;
    // 現在の占有状況のスナップショットを取得する
    async fn occupancy(&self) -> AppResult<Occupancy>;
}
