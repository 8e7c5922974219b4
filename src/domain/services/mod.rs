pub mod appointment_validator;
pub mod booking_service;
pub mod slot_lock;
pub mod store_resolver;
