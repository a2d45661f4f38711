pub mod reservation;
pub mod rollover;
