pub mod pitch;
pub mod power;
pub mod resolution;
pub mod viewing;
