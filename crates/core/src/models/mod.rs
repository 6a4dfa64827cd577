pub mod appointment;
pub mod interval;
pub mod slot;
pub mod validation;
pub mod working_window;
