use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use crate::domain::models::appointment::{Appointment, NewAppointment};
use crate::domain::models::staff::Staff;
use crate::domain::models::store::Store;
use crate::domain::ports::{AppointmentRepository, BookingLookup, SmsService, StaffRepository, StoreRepository};
use crate::domain::services::appointment_validator::{self, BookingRejection};
use crate::domain::services::slot_lock::SlotLocks;
use crate::error::AppError;

pub struct BookingService {
    store_repo: Arc<dyn StoreRepository>,
    staff_repo: Arc<dyn StaffRepository>,
    appointment_repo: Arc<dyn AppointmentRepository>,
    lookup: Arc<dyn BookingLookup>,
    sms_service: Arc<dyn SmsService>,
    locks: SlotLocks,
}

impl BookingService {
    pub fn new(
        store_repo: Arc<dyn StoreRepository>,
        staff_repo: Arc<dyn StaffRepository>,
        appointment_repo: Arc<dyn AppointmentRepository>,
        lookup: Arc<dyn BookingLookup>,
        sms_service: Arc<dyn SmsService>,
    ) -> Self {
        Self {
            store_repo,
            staff_repo,
            appointment_repo,
            lookup,
            sms_service,
            locks: SlotLocks::new(),
        }
    }

    pub async fn book(&self, proposed: NewAppointment) -> Result<Appointment, AppError> {
        let store = self.store_repo.find_by_id(proposed.store_id).await?
            .ok_or(AppError::NotFound("Store not found".into()))?;
        let therapist = self.staff_repo.find_by_id(proposed.therapist_id).await?
            .ok_or(AppError::NotFound("Therapist not found".into()))?;

        let created = {
            let _slot = self.locks.acquire(proposed.slot_key()).await;

            appointment_validator::validate(&proposed, self.lookup.as_ref()).await?;

            self.appointment_repo.create_if_free(&proposed).await?
                .ok_or(BookingRejection::ConcurrentConflict)?
        };

        info!(
            "Appointment {} booked: therapist {} at store {} on {} {}-{}",
            created.id, therapist.id, store.id, created.date, created.start_time, created.end_time
        );

        self.notify(&created, &store, &therapist);
        Ok(created)
    }

    /// Delivery runs detached; the booking never waits on the gateway.
    fn notify(&self, appointment: &Appointment, store: &Store, therapist: &Staff) {
        let body = confirmation_message(appointment, store, therapist);
        let phone = appointment.phone.clone();
        let appointment_id = appointment.id;
        let sms_service = self.sms_service.clone();

        let span = info_span!("confirmation_sms", appointment_id = appointment_id);
        tokio::spawn(
            async move {
                if let Err(e) = sms_service.send(&phone, &body).await {
                    warn!("Failed to send confirmation SMS for appointment {}: {}", appointment_id, e);
                }
            }
            .instrument(span),
        );
    }
}

pub fn confirmation_message(appointment: &Appointment, store: &Store, therapist: &Staff) -> String {
    format!(
        "Dear {}, your appointment at {} with {} is confirmed for {} from {} to {}. Thank you!",
        appointment.username,
        store.name,
        therapist.username,
        appointment.date,
        appointment.start_time,
        appointment.end_time,
    )
}
