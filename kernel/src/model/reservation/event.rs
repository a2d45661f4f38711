use super::ReservationKey;
use crate::model::id::Username;
use derive_new::new;

#[derive(Debug, new)]
pub struct ReserveSlot {
    pub key: ReservationKey,
    pub reserved_by: Username,
}

#[derive(Debug, new)]
pub struct CancelSlot {
    pub key: ReservationKey,
    pub requested_by: Username,
}
