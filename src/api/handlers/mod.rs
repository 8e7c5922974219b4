pub mod appointment;
pub mod health;
pub mod staff;
pub mod store;
