use crate::model::{id::Username, space::Space, time_slot::TimeSlot};
use derive_new::new;
use std::collections::BTreeMap;

pub mod event;

// 予約セルを一意に定めるキー。1セルにつき予約は高々1件。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct ReservationKey {
    pub space: Space,
    pub slot: TimeSlot,
}

// 当日の占有状況。予約の正となるデータはこのマップの形で持ち回る。
pub type Occupancy = BTreeMap<ReservationKey, Username>;
