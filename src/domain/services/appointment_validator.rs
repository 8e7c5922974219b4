use thiserror::Error;
use tracing::debug;

use crate::domain::models::appointment::{NewAppointment, TimeRange};
use crate::domain::ports::BookingLookup;
use crate::error::AppError;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingRejection {
    #[error("The selected therapist does not belong to this store.")]
    NotAffiliated,
    #[error("End time must be after the start time.")]
    InvalidRange,
    #[error("The selected therapist is already booked for this time slot.")]
    SlotConflict,
    #[error("The time slot was taken by a concurrent booking.")]
    ConcurrentConflict,
}

pub fn find_conflict<'a>(proposed: &TimeRange, existing: &'a [TimeRange]) -> Option<&'a TimeRange> {
    existing.iter().find(|booked| booked.overlaps(proposed))
}

/// Checks affiliation, range and overlap in that order; the first failure wins.
///
/// Only appointments for the same therapist, store and date are considered,
/// so the same therapist may hold overlapping bookings at two different stores.
pub async fn validate(proposed: &NewAppointment, lookup: &dyn BookingLookup) -> Result<(), AppError> {
    let stores = lookup.stores_for_therapist(proposed.therapist_id).await?;
    if !stores.contains(&proposed.store_id) {
        return Err(BookingRejection::NotAffiliated.into());
    }

    let range = proposed.time_range();
    if range.is_empty() {
        return Err(BookingRejection::InvalidRange.into());
    }

    let existing = lookup.find_appointments(proposed.therapist_id, proposed.store_id, proposed.date).await?;
    if let Some(booked) = find_conflict(&range, &existing) {
        debug!(
            "Slot conflict for therapist {} at store {} on {}: {}-{} overlaps {}-{}",
            proposed.therapist_id, proposed.store_id, proposed.date,
            range.start_time, range.end_time, booked.start_time, booked.end_time
        );
        return Err(BookingRejection::SlotConflict.into());
    }

    Ok(())
}
