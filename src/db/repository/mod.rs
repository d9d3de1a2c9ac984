//! Repository layer — entity-scoped database operations. Functions take a
//! borrowed connection so callers control transaction boundaries.

mod appointment;
mod booking;
mod doctor;

pub use appointment::*;
pub use booking::*;
pub use doctor::*;
