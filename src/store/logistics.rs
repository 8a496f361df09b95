//! Venue, accommodation, and transport operations

use crate::error::{PlanError, Result};
use crate::plan::{next_id, AccommodationBlock, TransportRecord, Venue, WeddingPlan};

use super::{require, PlanStore};

/// Input for [`PlanStore::add_venue`].
#[derive(Debug, Clone, Default)]
pub struct NewVenue {
    pub name: String,
    pub location: String,
    pub contact: String,
    pub stage: bool,
    pub catering: bool,
}

/// Input for [`PlanStore::add_accommodation`].
#[derive(Debug, Clone, Default)]
pub struct NewAccommodation {
    pub hotel: String,
    pub rooms: u32,
}

/// Input for [`PlanStore::add_transport`].
#[derive(Debug, Clone, Default)]
pub struct NewTransport {
    pub mode: String,
    pub details: String,
    pub group: String,
    pub date: String,
    pub time: String,
    pub pickup_location: String,
    pub drop_location: String,
    pub capacity: u32,
}

impl PlanStore {
    pub async fn add_venue(&mut self, new: NewVenue) -> Result<i64> {
        require("venue name", &new.name)?;

        let mut next = self.plan.clone();
        let id = next_id(next.venues.iter().map(|v| v.id));
        next.venues.push(Venue {
            id,
            name: new.name,
            location: new.location,
            contact: new.contact,
            stage: new.stage,
            catering: new.catering,
        });
        self.replace(next).await;
        Ok(id)
    }

    pub async fn update_venue(&mut self, venue: Venue) -> Result<()> {
        require("venue name", &venue.name)?;

        let mut next = self.plan.clone();
        let id = venue.id;
        *venue_mut(&mut next, id)? = venue;
        self.replace(next).await;
        Ok(())
    }

    pub async fn delete_venue(&mut self, id: i64) -> Result<()> {
        let mut next = self.plan.clone();
        venue_mut(&mut next, id)?;
        next.venues.retain(|v| v.id != id);
        self.replace(next).await;
        Ok(())
    }

    /// Block rooms at a hotel. Guest assignments start empty.
    pub async fn add_accommodation(&mut self, new: NewAccommodation) -> Result<i64> {
        require("hotel name", &new.hotel)?;

        let mut next = self.plan.clone();
        let id = next_id(next.accommodation.iter().map(|a| a.id));
        next.accommodation.push(AccommodationBlock {
            id,
            hotel: new.hotel,
            rooms: new.rooms,
            guests: vec![],
        });
        self.replace(next).await;
        Ok(id)
    }

    /// Assign a guest to a room block, once per guest.
    pub async fn assign_accommodation_guest(
        &mut self,
        block_id: i64,
        guest_name: &str,
    ) -> Result<()> {
        let mut next = self.plan.clone();
        let block = accommodation_mut(&mut next, block_id)?;
        if !block.guests.iter().any(|g| g == guest_name) {
            block.guests.push(guest_name.to_string());
        }
        self.replace(next).await;
        Ok(())
    }

    pub async fn delete_accommodation(&mut self, id: i64) -> Result<()> {
        let mut next = self.plan.clone();
        accommodation_mut(&mut next, id)?;
        next.accommodation.retain(|a| a.id != id);
        self.replace(next).await;
        Ok(())
    }

    /// Arrange transport for a group. Bookings start at zero.
    pub async fn add_transport(&mut self, new: NewTransport) -> Result<i64> {
        require("transport mode", &new.mode)?;

        let mut next = self.plan.clone();
        let id = next_id(next.transport.iter().map(|t| t.id));
        next.transport.push(TransportRecord {
            id,
            mode: new.mode,
            details: new.details,
            group: new.group,
            date: new.date,
            time: new.time,
            pickup_location: new.pickup_location,
            drop_location: new.drop_location,
            capacity: new.capacity,
            booked: 0,
        });
        self.replace(next).await;
        Ok(id)
    }

    pub async fn update_transport(&mut self, record: TransportRecord) -> Result<()> {
        require("transport mode", &record.mode)?;

        let mut next = self.plan.clone();
        let id = record.id;
        *transport_mut(&mut next, id)? = record;
        self.replace(next).await;
        Ok(())
    }

    pub async fn delete_transport(&mut self, id: i64) -> Result<()> {
        let mut next = self.plan.clone();
        transport_mut(&mut next, id)?;
        next.transport.retain(|t| t.id != id);
        self.replace(next).await;
        Ok(())
    }

    /// Book seats on a transport record, up to its capacity. Returns the
    /// new booked count.
    pub async fn book_transport_seats(&mut self, id: i64, seats: u32) -> Result<u32> {
        let mut next = self.plan.clone();
        let record = transport_mut(&mut next, id)?;

        // Saturating: an edited record may already be over capacity.
        let available = record.capacity.saturating_sub(record.booked);
        if seats > available {
            return Err(PlanError::Validation(format!(
                "cannot book {} seats, only {} of {} left",
                seats, available, record.capacity
            )));
        }
        record.booked += seats;
        let booked = record.booked;

        self.replace(next).await;
        Ok(booked)
    }
}

fn venue_mut(plan: &mut WeddingPlan, id: i64) -> Result<&mut Venue> {
    plan.venues
        .iter_mut()
        .find(|v| v.id == id)
        .ok_or(PlanError::NotFound {
            collection: "venues",
            id,
        })
}

fn accommodation_mut(plan: &mut WeddingPlan, id: i64) -> Result<&mut AccommodationBlock> {
    plan.accommodation
        .iter_mut()
        .find(|a| a.id == id)
        .ok_or(PlanError::NotFound {
            collection: "accommodation",
            id,
        })
}

fn transport_mut(plan: &mut WeddingPlan, id: i64) -> Result<&mut TransportRecord> {
    plan.transport
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(PlanError::NotFound {
            collection: "transport",
            id,
        })
}
