use crate::model::{
    id::Username,
    reservation::{Occupancy, ReservationKey},
    space::Space,
    time_slot::TimeSlot,
};
use strum::IntoEnumIterator;

#[derive(Debug, Clone)]
pub struct SlotGrid {
    cells: Vec<GridCell>,
}

#[derive(Debug, Clone)]
pub struct GridCell {
    pub space: Space,
    pub slot: TimeSlot,
    pub reserved_by: Option<Username>,
}

impl SlotGrid {
    // 占有状況から Space × TimeSlot の全セルを組み立てる。
    // 読み取り専用のビューで、予約の正となるデータはあくまでストア側。
    pub fn snapshot(occupancy: &Occupancy) -> Self {
        let cells = Space::iter()
            .flat_map(|space| {
                TimeSlot::all().map(move |slot| GridCell {
                    space,
                    slot,
                    reserved_by: occupancy.get(&ReservationKey::new(space, slot)).cloned(),
                })
            })
            .collect();
        Self { cells }
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<GridCell> {
        self.cells
    }

    pub fn reserved_by(&self, space: Space, slot: TimeSlot) -> Option<&Username> {
        self.cells
            .iter()
            .find(|cell| cell.space == space && cell.slot == slot)
            .and_then(|cell| cell.reserved_by.as_ref())
    }
}
