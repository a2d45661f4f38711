use crate::model::{id::Username, reservation::Occupancy};

// 1ユーザーが1日に予約できるコマ数の上限
pub const DAILY_SLOT_CAP: usize = 4;

pub struct BookingPolicy;

impl BookingPolicy {
    // 現在の占有状況だけを見て、ユーザーが追加で予約できるかを判定する。
    // 対象セルの空き確認は行わない(ストア側が書き込みと同じロック内で確認する)。
    pub fn can_reserve(user: &Username, occupancy: &Occupancy) -> bool {
        Self::reserved_slots(user, occupancy) < DAILY_SLOT_CAP
    }

    pub fn reserved_slots(user: &Username, occupancy: &Occupancy) -> usize {
        occupancy.values().filter(|owner| *owner == user).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{reservation::ReservationKey, space::Space, time_slot::TimeSlot};
    use strum::IntoEnumIterator;

    fn occupancy_for(user: &Username, count: usize) -> Occupancy {
        // スペースをまたいで count 件の予約を持たせる
        Space::iter()
            .flat_map(|space| TimeSlot::all().map(move |slot| ReservationKey::new(space, slot)))
            .take(count)
            .map(|key| (key, user.clone()))
            .collect()
    }

    #[test]
    fn test_under_cap_can_reserve() {
        let alice = Username::new("alice");
        assert!(BookingPolicy::can_reserve(&alice, &Occupancy::new()));
        assert!(BookingPolicy::can_reserve(&alice, &occupancy_for(&alice, 3)));
    }

    #[test]
    fn test_at_cap_cannot_reserve() {
        let alice = Username::new("alice");
        let occupancy = occupancy_for(&alice, DAILY_SLOT_CAP);
        assert!(!BookingPolicy::can_reserve(&alice, &occupancy));
        assert_eq!(
            BookingPolicy::reserved_slots(&alice, &occupancy),
            DAILY_SLOT_CAP
        );
    }

    #[test]
    fn test_other_users_do_not_count() {
        let alice = Username::new("alice");
        let bob = Username::new("bob");
        let occupancy = occupancy_for(&bob, DAILY_SLOT_CAP);
        assert!(BookingPolicy::can_reserve(&alice, &occupancy));
        assert_eq!(BookingPolicy::reserved_slots(&alice, &occupancy), 0);
    }
}
