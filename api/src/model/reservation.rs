use chrono::NaiveDate;
use garde::Validate;
use kernel::model::{
    grid::{GridCell, SlotGrid},
    id::Username,
    reservation::ReservationKey,
    space::Space,
    time_slot::TimeSlot,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReserveSlotRequest {
    #[garde(skip)]
    pub user: Username,
    #[garde(skip)]
    pub space: Space,
    #[garde(skip)]
    pub slot: TimeSlot,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CancelSlotRequest {
    #[garde(skip)]
    pub user: Username,
    #[garde(skip)]
    pub space: Space,
    #[garde(skip)]
    pub slot: TimeSlot,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationListQuery {
    pub user: Username,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridResponse {
    pub date: NaiveDate,
    pub cells: Vec<GridCellResponse>,
}

impl GridResponse {
    pub fn new(date: NaiveDate, grid: SlotGrid) -> Self {
        Self {
            date,
            cells: grid
                .into_cells()
                .into_iter()
                .map(GridCellResponse::from)
                .collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCellResponse {
    pub space: Space,
    pub slot: TimeSlot,
    pub reserved_by: Option<Username>,
}

impl From<GridCell> for GridCellResponse {
    fn from(value: GridCell) -> Self {
        let GridCell {
            space,
            slot,
            reserved_by,
        } = value;
        Self {
            space,
            slot,
            reserved_by,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyReservationsResponse {
    pub user: Username,
    pub items: Vec<ReservedSlotResponse>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservedSlotResponse {
    pub space: Space,
    pub slot: TimeSlot,
}

impl From<ReservationKey> for ReservedSlotResponse {
    fn from(value: ReservationKey) -> Self {
        let ReservationKey { space, slot } = value;
        Self { space, slot }
    }
}
