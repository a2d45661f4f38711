use crate::repository::reservation::ReservationRepository;
use chrono::NaiveDate;
use shared::error::AppResult;
use tokio::sync::Mutex;

// 日付をまたいだ最初の操作で全予約を破棄するための状態。
// バックグラウンドのスケジューラは持たず、各操作の先頭で毎回呼び出される。
#[derive(Debug, Default)]
pub struct DailyRollover {
    last_reset_date: Mutex<Option<NaiveDate>>,
}

impl DailyRollover {
    pub fn new() -> Self {
        Self::default()
    }

    // 最終リセット日が未設定、または今日より前であればストアを空にして
    // 今日の日付を記録する。同日内の再呼び出しは何もしない。
    // ロックはクリアが終わるまで保持し、リセットが同時に複数回走ることはない。
    pub async fn maybe_reset(
        &self,
        today: NaiveDate,
        store: &dyn ReservationRepository,
    ) -> AppResult<bool> {
        let mut last = self.last_reset_date.lock().await;
        if last.map_or(true, |date| date < today) {
            store.clear().await?;
            *last = Some(today);
            return Ok(true);
        }
        Ok(false)
    }

    pub async fn last_reset_date(&self) -> Option<NaiveDate> {
        *self.last_reset_date.lock().await
    }
}
