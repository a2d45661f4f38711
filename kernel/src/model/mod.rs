pub mod grid;
pub mod id;
pub mod reservation;
pub mod space;
pub mod time_slot;
pub mod user;
