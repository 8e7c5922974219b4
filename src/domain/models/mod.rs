pub mod appointment;
pub mod staff;
pub mod store;
