//! Guest list and invitation operations

use crate::error::{PlanError, Result};
use crate::plan::{next_id, Event, Guest, Invitation, Rsvp, WeddingPlan};

use super::{require, PlanStore};

/// Input for [`PlanStore::add_guest`].
#[derive(Debug, Clone, Default)]
pub struct NewGuest {
    pub name: String,
    pub group: String,
    pub tag: String,
    pub contact: String,
    pub dietary: String,
    pub events: Vec<String>,
}

/// Input for [`PlanStore::add_invitation`].
#[derive(Debug, Clone, Default)]
pub struct NewInvitation {
    pub kind: String,
    pub template: String,
}

impl PlanStore {
    /// Add a guest. RSVP starts out pending.
    pub async fn add_guest(&mut self, new: NewGuest) -> Result<i64> {
        require("guest name", &new.name)?;

        let mut next = self.plan.clone();
        let id = next_id(next.guests.iter().map(|g| g.id));
        next.guests.push(Guest {
            id,
            name: new.name,
            group: new.group,
            rsvp: Rsvp::Pending,
            tag: new.tag,
            events: new.events,
            dietary: new.dietary,
            accommodation: String::new(),
            contact: new.contact,
            notes: String::new(),
        });
        self.replace(next).await;

        tracing::debug!("Added guest {}", id);
        Ok(id)
    }

    /// Replace a guest record wholesale, matched by id.
    pub async fn update_guest(&mut self, guest: Guest) -> Result<()> {
        require("guest name", &guest.name)?;

        let mut next = self.plan.clone();
        let id = guest.id;
        *guest_mut(&mut next, id)? = guest;
        self.replace(next).await;
        Ok(())
    }

    pub async fn delete_guest(&mut self, id: i64) -> Result<()> {
        let mut next = self.plan.clone();
        guest_mut(&mut next, id)?;
        next.guests.retain(|g| g.id != id);
        self.replace(next).await;

        tracing::debug!("Deleted guest {}", id);
        Ok(())
    }

    pub async fn set_guest_rsvp(&mut self, id: i64, rsvp: Rsvp) -> Result<()> {
        let mut next = self.plan.clone();
        guest_mut(&mut next, id)?.rsvp = rsvp;
        self.replace(next).await;
        Ok(())
    }

    /// Toggle a guest's attendance at one event, by event name. Returns
    /// whether the guest attends it afterwards.
    pub async fn toggle_guest_event(&mut self, id: i64, event_name: &str) -> Result<bool> {
        let mut next = self.plan.clone();
        let guest = guest_mut(&mut next, id)?;

        let attending = match guest.events.iter().position(|e| e == event_name) {
            Some(pos) => {
                guest.events.remove(pos);
                false
            }
            None => {
                guest.events.push(event_name.to_string());
                true
            }
        };

        self.replace(next).await;
        Ok(attending)
    }

    /// The events a guest attends, resolved by name in the guest's own
    /// order. Names that no longer match an event are skipped.
    pub fn guest_schedule(&self, id: i64) -> Result<Vec<&Event>> {
        let guest = self
            .plan
            .guests
            .iter()
            .find(|g| g.id == id)
            .ok_or(PlanError::NotFound {
                collection: "guests",
                id,
            })?;

        Ok(guest
            .events
            .iter()
            .filter_map(|name| self.plan.events.iter().find(|e| &e.name == name))
            .collect())
    }

    /// Add an invitation design. Send and response tracking start empty.
    pub async fn add_invitation(&mut self, new: NewInvitation) -> Result<i64> {
        let mut next = self.plan.clone();
        let id = next_id(next.invitations.iter().map(|i| i.id));
        next.invitations.push(Invitation {
            id,
            kind: new.kind,
            template: new.template,
            guests_sent: vec![],
            guests_responded: vec![],
        });
        self.replace(next).await;
        Ok(id)
    }

    /// Record that an invitation went out to a guest. Recording the same
    /// guest twice keeps a single entry.
    pub async fn record_invitation_sent(&mut self, id: i64, guest_name: &str) -> Result<()> {
        let mut next = self.plan.clone();
        let invitation = invitation_mut(&mut next, id)?;
        if !invitation.guests_sent.iter().any(|g| g == guest_name) {
            invitation.guests_sent.push(guest_name.to_string());
        }
        self.replace(next).await;
        Ok(())
    }

    /// Record a guest's response to an invitation, once per guest.
    pub async fn record_invitation_response(&mut self, id: i64, guest_name: &str) -> Result<()> {
        let mut next = self.plan.clone();
        let invitation = invitation_mut(&mut next, id)?;
        if !invitation.guests_responded.iter().any(|g| g == guest_name) {
            invitation.guests_responded.push(guest_name.to_string());
        }
        self.replace(next).await;
        Ok(())
    }

    pub async fn delete_invitation(&mut self, id: i64) -> Result<()> {
        let mut next = self.plan.clone();
        invitation_mut(&mut next, id)?;
        next.invitations.retain(|i| i.id != id);
        self.replace(next).await;
        Ok(())
    }
}

fn guest_mut(plan: &mut WeddingPlan, id: i64) -> Result<&mut Guest> {
    plan.guests
        .iter_mut()
        .find(|g| g.id == id)
        .ok_or(PlanError::NotFound {
            collection: "guests",
            id,
        })
}

fn invitation_mut(plan: &mut WeddingPlan, id: i64) -> Result<&mut Invitation> {
    plan.invitations
        .iter_mut()
        .find(|i| i.id == id)
        .ok_or(PlanError::NotFound {
            collection: "invitations",
            id,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_store;

    #[tokio::test]
    async fn test_add_guest_defaults_to_pending_rsvp() {
        let mut store = test_store().await;
        let before = store.plan().guests.len();

        let id = store
            .add_guest(NewGuest {
                name: "Test Guest".into(),
                group: "Friend".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(id, 5);
        assert_eq!(store.plan().guests.len(), before + 1);

        let guest = store.plan().guests.iter().find(|g| g.id == id).unwrap();
        assert_eq!(guest.rsvp, Rsvp::Pending);
        assert_eq!(guest.accommodation, "");
        assert_eq!(guest.notes, "");
    }

    #[tokio::test]
    async fn test_add_guest_requires_a_name() {
        let mut store = test_store().await;
        let before = store.plan().clone();

        let err = store.add_guest(NewGuest::default()).await.unwrap_err();
        assert!(matches!(err, PlanError::Validation(_)));
        assert_eq!(store.plan(), &before);
    }

    #[tokio::test]
    async fn test_guest_ids_continue_from_the_highest() {
        let mut store = test_store().await;

        store.delete_guest(4).await.unwrap();
        let id = store
            .add_guest(NewGuest {
                name: "Replacement".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(id, 4);
    }

    #[tokio::test]
    async fn test_delete_guest_leaves_the_others_alone() {
        let mut store = test_store().await;
        let others: Vec<Guest> = store
            .plan()
            .guests
            .iter()
            .filter(|g| g.id != 3)
            .cloned()
            .collect();

        store.delete_guest(3).await.unwrap();
        assert_eq!(store.plan().guests, others);
    }

    #[tokio::test]
    async fn test_delete_unknown_guest_errors() {
        let mut store = test_store().await;
        let err = store.delete_guest(99).await.unwrap_err();
        assert!(matches!(
            err,
            PlanError::NotFound {
                collection: "guests",
                id: 99
            }
        ));
    }

    #[tokio::test]
    async fn test_update_guest_replaces_the_record() {
        let mut store = test_store().await;
        let mut guest = store.plan().guests[2].clone();
        guest.dietary = "Jain".into();
        guest.rsvp = Rsvp::Declined;

        store.update_guest(guest.clone()).await.unwrap();
        assert_eq!(store.plan().guests[2], guest);
    }

    #[tokio::test]
    async fn test_set_guest_rsvp() {
        let mut store = test_store().await;

        store.set_guest_rsvp(3, Rsvp::Confirmed).await.unwrap();

        let guest = store.plan().guests.iter().find(|g| g.id == 3).unwrap();
        assert_eq!(guest.rsvp, Rsvp::Confirmed);
    }

    #[tokio::test]
    async fn test_toggle_guest_event_round_trips() {
        let mut store = test_store().await;
        let before = store.plan().guests[2].events.clone();

        assert!(store.toggle_guest_event(3, "Haldi").await.unwrap());
        assert!(store.plan().guests[2].events.contains(&"Haldi".to_string()));

        assert!(!store.toggle_guest_event(3, "Haldi").await.unwrap());
        assert_eq!(store.plan().guests[2].events, before);
    }

    #[tokio::test]
    async fn test_guest_schedule_skips_unresolvable_names() {
        let mut store = test_store().await;
        store
            .toggle_guest_event(3, "Event That Never Was")
            .await
            .unwrap();

        let schedule = store.guest_schedule(3).unwrap();
        let names: Vec<&str> = schedule.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Sangeet", "Reception"]);
    }

    #[tokio::test]
    async fn test_invitation_send_tracking_is_deduplicated() {
        let mut store = test_store().await;
        let id = store
            .add_invitation(NewInvitation {
                kind: "E-Invite".into(),
                template: "Peacock".into(),
            })
            .await
            .unwrap();

        store.record_invitation_sent(id, "Raj Agarwal").await.unwrap();
        store.record_invitation_sent(id, "Raj Agarwal").await.unwrap();
        store
            .record_invitation_response(id, "Raj Agarwal")
            .await
            .unwrap();

        let invitation = store
            .plan()
            .invitations
            .iter()
            .find(|i| i.id == id)
            .unwrap();
        assert_eq!(invitation.guests_sent, vec!["Raj Agarwal"]);
        assert_eq!(invitation.guests_responded, vec!["Raj Agarwal"]);
    }

    #[tokio::test]
    async fn test_delete_invitation() {
        let mut store = test_store().await;

        store.delete_invitation(1).await.unwrap();
        assert!(store.plan().invitations.iter().all(|i| i.id != 1));

        let err = store.delete_invitation(1).await.unwrap_err();
        assert!(matches!(err, PlanError::NotFound { .. }));
    }
}
