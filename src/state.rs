use std::sync::Arc;
use crate::domain::ports::{AppointmentRepository, StaffRepository, StoreRepository};
use crate::domain::services::booking_service::BookingService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store_repo: Arc<dyn StoreRepository>,
    pub staff_repo: Arc<dyn StaffRepository>,
    pub appointment_repo: Arc<dyn AppointmentRepository>,
    pub booking_service: Arc<BookingService>,
}
