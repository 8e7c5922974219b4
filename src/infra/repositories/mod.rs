pub mod sqlite_store_repo;
pub mod sqlite_staff_repo;
pub mod sqlite_appointment_repo;
