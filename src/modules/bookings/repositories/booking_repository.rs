// In-memory booking repository
//
// The booking collection is the single source of truth for stored bookings.
// Durable persistence is an external concern; this store only guarantees
// that every read sees a complete, consistent snapshot of the collection.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::traits::Repository;
use crate::core::{AppError, Result};
use crate::modules::bookings::models::Booking;

/// Shared in-memory store for bookings
#[derive(Clone, Default)]
pub struct BookingRepository {
    bookings: Arc<RwLock<Vec<Booking>>>,
}

impl BookingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Owned snapshot of the whole collection, in insertion order.
    ///
    /// Aggregation always runs over a snapshot taken under the lock, so it
    /// never observes a half-applied mutation.
    pub async fn snapshot(&self) -> Vec<Booking> {
        self.bookings.read().await.clone()
    }
}

#[async_trait]
impl Repository<Booking, Uuid> for BookingRepository {
    async fn create(&self, entity: Booking) -> Result<Booking> {
        let mut bookings = self.bookings.write().await;
        bookings.push(entity.clone());
        Ok(entity)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>> {
        let bookings = self.bookings.read().await;
        Ok(bookings.iter().find(|b| b.id == id).cloned())
    }

    async fn update(&self, id: Uuid, entity: Booking) -> Result<Booking> {
        let mut bookings = self.bookings.write().await;
        match bookings.iter_mut().find(|b| b.id == id) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(entity)
            }
            None => Err(AppError::not_found(format!("booking {}", id))),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut bookings = self.bookings.write().await;
        let before = bookings.len();
        bookings.retain(|b| b.id != id);

        if bookings.len() == before {
            return Err(AppError::not_found(format!("booking {}", id)));
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Booking>> {
        Ok(self.snapshot().await)
    }
}
