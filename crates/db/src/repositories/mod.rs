pub mod appointment;
pub mod directory;
pub mod working_hours;
