use kernel::model::{
    id::Username,
    reservation::{Occupancy, ReservationKey},
    space::Space,
    time_slot::TimeSlot,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// reservations.json の形。{スペース: {時間帯: ユーザー名}} の入れ子マップで保存する
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ReservationsDocument(BTreeMap<Space, BTreeMap<TimeSlot, Username>>);

impl ReservationsDocument {
    pub fn from_occupancy(occupancy: &Occupancy) -> Self {
        let mut spaces: BTreeMap<Space, BTreeMap<TimeSlot, Username>> = BTreeMap::new();
        for (key, owner) in occupancy {
            spaces
                .entry(key.space)
                .or_default()
                .insert(key.slot, owner.clone());
        }
        Self(spaces)
    }

    pub fn into_occupancy(self) -> Occupancy {
        self.0
            .into_iter()
            .flat_map(|(space, slots)| {
                slots
                    .into_iter()
                    .map(move |(slot, owner)| (ReservationKey::new(space, slot), owner))
            })
            .collect()
    }
}
