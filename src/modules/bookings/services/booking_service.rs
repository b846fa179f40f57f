use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::core::traits::Repository;
use crate::core::{AppError, Result};
use crate::modules::bookings::models::{Booking, NewBooking};
use crate::modules::bookings::repositories::BookingRepository;
use crate::modules::bookings::services::FeeCalculator;

/// Service for the booking lifecycle
///
/// Every write path validates the payload and re-runs the fee calculator, so
/// the stored derived fields are always consistent with the independent
/// inputs regardless of what the client sent.
pub struct BookingService {
    repo: BookingRepository,
    calculator: FeeCalculator,
}

impl BookingService {
    pub fn new(repo: BookingRepository) -> Self {
        Self {
            repo,
            calculator: FeeCalculator::new(),
        }
    }

    /// Create a booking from a payload, assigning id and created_at.
    pub async fn create(&self, draft: NewBooking) -> Result<Booking> {
        draft.validate()?;
        let derived = self.calculator.derive(draft);

        let booking = Booking::from_draft(derived, Uuid::new_v4(), Utc::now());
        let booking = self.repo.create(booking).await?;

        info!(
            booking_id = %booking.id,
            property = %booking.property_name,
            channel = %booking.channel_name,
            "Booking created"
        );
        Ok(booking)
    }

    /// Replace every non-identity field of an existing booking.
    pub async fn update(&self, id: Uuid, draft: NewBooking) -> Result<Booking> {
        draft.validate()?;
        let derived = self.calculator.derive(draft);

        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("booking {}", id)))?;

        let booking = self.repo.update(id, existing.replaced_with(derived)).await?;

        info!(booking_id = %booking.id, "Booking updated");
        Ok(booking)
    }

    /// Fetch a single booking, re-deriving its fee fields.
    ///
    /// Persisted derived values are not trusted; if the backing store was
    /// corrupted externally the response still satisfies the derivation
    /// invariant.
    pub async fn get(&self, id: Uuid) -> Result<Booking> {
        let booking = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("booking {}", id)))?;

        Ok(self.rederive(booking))
    }

    /// List all bookings in insertion order.
    pub async fn list(&self) -> Result<Vec<Booking>> {
        self.repo.list().await
    }

    /// Delete a booking by id.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.repo.delete(id).await?;
        info!(booking_id = %id, "Booking deleted");
        Ok(())
    }

    fn rederive(&self, booking: Booking) -> Booking {
        let channel_fee = self
            .calculator
            .channel_fee(booking.total_revenue, booking.channel_fee_percentage);
        let tax_amount = self
            .calculator
            .tax_amount(booking.total_revenue, booking.tax_rate);

        Booking {
            net_profit: self.calculator.net_profit(
                booking.total_revenue,
                channel_fee,
                booking.cleaning_fee,
                tax_amount,
                booking.other_costs,
            ),
            channel_fee,
            tax_amount,
            ..booking
        }
    }
}
