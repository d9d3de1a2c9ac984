mod appointment;
mod booking;
mod doctor;

pub use appointment::*;
pub use booking::*;
pub use doctor::*;
