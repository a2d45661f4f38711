use crate::model::{
    grid::SlotGrid,
    id::Username,
    reservation::{
        event::{CancelSlot, ReserveSlot},
        ReservationKey,
    },
    space::Space,
    time_slot::TimeSlot,
};
use crate::repository::reservation::ReservationRepository;
use crate::service::rollover::DailyRollover;
use chrono::NaiveDate;
use shared::error::AppResult;
use std::sync::Arc;

// UI 層が予約に触れるための唯一の窓口。
// どの操作もまず日次リセットの判定を済ませてからストアに触れる。
// 操作するユーザーと現在日付は毎回引数で受け取る。
pub struct ReservationService {
    reservation_repository: Arc<dyn ReservationRepository>,
    rollover: DailyRollover,
}

impl ReservationService {
    pub fn new(reservation_repository: Arc<dyn ReservationRepository>) -> Self {
        Self {
            reservation_repository,
            rollover: DailyRollover::new(),
        }
    }

    pub async fn reserve(
        &self,
        user: Username,
        space: Space,
        slot: TimeSlot,
        today: NaiveDate,
    ) -> AppResult<()> {
        self.rollover
            .maybe_reset(today, self.reservation_repository.as_ref())
            .await?;
        self.reservation_repository
            .reserve(ReserveSlot::new(ReservationKey::new(space, slot), user))
            .await
    }

    pub async fn cancel(
        &self,
        user: Username,
        space: Space,
        slot: TimeSlot,
        today: NaiveDate,
    ) -> AppResult<()> {
        self.rollover
            .maybe_reset(today, self.reservation_repository.as_ref())
            .await?;
        self.reservation_repository
            .cancel(CancelSlot::new(ReservationKey::new(space, slot), user))
            .await
    }

    pub async fn grid(&self, today: NaiveDate) -> AppResult<SlotGrid> {
        self.rollover
            .maybe_reset(today, self.reservation_repository.as_ref())
            .await?;
        let occupancy = self.reservation_repository.occupancy().await?;
        Ok(SlotGrid::snapshot(&occupancy))
    }

    pub async fn my_reservations(
        &self,
        user: &Username,
        today: NaiveDate,
    ) -> AppResult<Vec<ReservationKey>> {
        self.rollover
            .maybe_reset(today, self.reservation_repository.as_ref())
            .await?;
        self.reservation_repository.find_by_user(user).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::reservation::Occupancy;
    use crate::policy::{BookingPolicy, DAILY_SLOT_CAP};
    use async_trait::async_trait;
    use shared::error::AppError;
    use std::sync::Mutex;

    // 永続化を省いたテスト用のストア。チェックの中身は本実装と同じ手順で行う。
    #[derive(Default)]
    struct InMemoryReservationRepository {
        state: Mutex<Occupancy>,
    }

    #[async_trait]
    impl ReservationRepository for InMemoryReservationRepository {
        async fn find_owner(&self, key: &ReservationKey) -> AppResult<Option<Username>> {
            Ok(self.state.lock().unwrap().get(key).cloned())
        }

        async fn reserve(&self, event: ReserveSlot) -> AppResult<()> {
            let mut state = self.state.lock().unwrap();
            if !BookingPolicy::can_reserve(&event.reserved_by, &state) {
                return Err(AppError::QuotaExceededError(DAILY_SLOT_CAP));
            }
            if state.contains_key(&event.key) {
                return Err(AppError::AlreadyBookedError);
            }
            state.insert(event.key, event.reserved_by);
            Ok(())
        }

        async fn cancel(&self, event: CancelSlot) -> AppResult<()> {
            let mut state = self.state.lock().unwrap();
            let Some(owner) = state.remove(&event.key) else {
                return Err(AppError::ReservationNotFoundError);
            };
            if owner != event.requested_by {
                state.insert(event.key, owner);
                return Err(AppError::NotOwnerError);
            }
            Ok(())
        }

        async fn clear(&self) -> AppResult<()> {
            self.state.lock().unwrap().clear();
            Ok(())
        }

        async fn find_by_user(&self, user: &Username) -> AppResult<Vec<ReservationKey>> {
            Ok(self
                .state
                .lock()
                .unwrap()
                .iter()
                .filter(|(_, owner)| *owner == user)
                .map(|(key, _)| *key)
                .collect())
        }

        async fn occupancy(&self) -> AppResult<Occupancy> {
            Ok(self.state.lock().unwrap().clone())
        }
    }

    fn slot(start_hour: u32) -> TimeSlot {
        TimeSlot::new(start_hour).unwrap()
    }

    #[tokio::test]
    async fn test_date_advance_clears_reservations_before_the_operation() {
        let service = ReservationService::new(Arc::new(InMemoryReservationRepository::default()));
        let alice = Username::new("alice");
        let day1 = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let day2 = day1.succ_opt().unwrap();

        service
            .reserve(alice.clone(), Space::Gray, slot(9), day1)
            .await
            .unwrap();
        service
            .reserve(alice.clone(), Space::Blue, slot(10), day1)
            .await
            .unwrap();
        assert_eq!(service.my_reservations(&alice, day1).await.unwrap().len(), 2);

        // 翌日の最初の操作で前日分はすべて消える
        let grid = service.grid(day2).await.unwrap();
        assert!(grid.cells().iter().all(|cell| cell.reserved_by.is_none()));
        assert!(service.my_reservations(&alice, day2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_same_day_operations_keep_later_reservations() {
        let service = ReservationService::new(Arc::new(InMemoryReservationRepository::default()));
        let alice = Username::new("alice");
        let day2 = NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();

        // リセット後に入れた予約は、同日のその後の操作で消えない
        service.grid(day2).await.unwrap();
        service
            .reserve(alice.clone(), Space::Silver, slot(13), day2)
            .await
            .unwrap();
        let grid = service.grid(day2).await.unwrap();
        assert_eq!(grid.reserved_by(Space::Silver, slot(13)), Some(&alice));
        assert_eq!(
            service.my_reservations(&alice, day2).await.unwrap(),
            vec![ReservationKey::new(Space::Silver, slot(13))]
        );
    }
}
