//! Event timeline and sangeet song operations

use crate::config;
use crate::error::{PlanError, Result};
use crate::plan::{next_id, Event, Song, WeddingPlan};

use super::{non_empty_or, require, PlanStore};

/// Input for [`PlanStore::add_event`]. Blank `time`, `venue`, and `theme`
/// fall back to the usual form defaults.
#[derive(Debug, Clone, Default)]
pub struct NewEvent {
    pub name: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub theme: String,
    pub budget: f64,
}

/// Input for [`PlanStore::add_song`]. `performers` is a comma-separated
/// list of names.
#[derive(Debug, Clone, Default)]
pub struct NewSong {
    pub title: String,
    pub artist: String,
    pub duration: String,
    pub performers: String,
}

impl PlanStore {
    /// Add an event to the timeline. Name and date are required.
    pub async fn add_event(&mut self, new: NewEvent) -> Result<i64> {
        require("event name", &new.name)?;
        require("event date", &new.date)?;

        let mut next = self.plan.clone();
        let id = next_id(next.events.iter().map(|e| e.id));
        next.events.push(Event {
            id,
            name: new.name,
            date: new.date,
            time: non_empty_or(new.time, config::DEFAULT_EVENT_TIME),
            venue: non_empty_or(new.venue, config::DEFAULT_EVENT_VENUE),
            theme: non_empty_or(new.theme, config::DEFAULT_EVENT_THEME),
            dress_code: config::DEFAULT_EVENT_DRESS_CODE.to_string(),
            budget: new.budget,
            staff: vec![],
            checklist: vec![],
            notes: String::new(),
            groom_entry: None,
            bride_entry: None,
            songs: vec![],
        });
        self.replace(next).await;

        tracing::debug!("Added event {}", id);
        Ok(id)
    }

    /// Replace an event record wholesale, matched by id. Entry plans,
    /// checklist, and songs travel with the record.
    pub async fn update_event(&mut self, event: Event) -> Result<()> {
        require("event name", &event.name)?;
        require("event date", &event.date)?;

        let mut next = self.plan.clone();
        let id = event.id;
        *event_mut(&mut next, id)? = event;
        self.replace(next).await;
        Ok(())
    }

    pub async fn delete_event(&mut self, id: i64) -> Result<()> {
        let mut next = self.plan.clone();
        event_mut(&mut next, id)?;
        next.events.retain(|e| e.id != id);
        self.replace(next).await;

        tracing::debug!("Deleted event {}", id);
        Ok(())
    }

    /// Add a song to an event's program. Song ids and play order are
    /// scoped to the event.
    pub async fn add_song(&mut self, event_id: i64, new: NewSong) -> Result<i64> {
        require("song title", &new.title)?;

        let mut next = self.plan.clone();
        let event = event_mut(&mut next, event_id)?;

        let id = next_id(event.songs.iter().map(|s| s.id));
        let order = event.songs.len() as u32 + 1;
        let performers = new
            .performers
            .split(',')
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();

        event.songs.push(Song {
            id,
            title: new.title,
            artist: new.artist,
            duration: new.duration,
            performers,
            order,
            practiced: false,
        });
        self.replace(next).await;
        Ok(id)
    }

    pub async fn set_song_practiced(
        &mut self,
        event_id: i64,
        song_id: i64,
        practiced: bool,
    ) -> Result<()> {
        let mut next = self.plan.clone();
        let event = event_mut(&mut next, event_id)?;
        let song = event
            .songs
            .iter_mut()
            .find(|s| s.id == song_id)
            .ok_or(PlanError::NotFound {
                collection: "songs",
                id: song_id,
            })?;
        song.practiced = practiced;
        self.replace(next).await;
        Ok(())
    }
}

fn event_mut(plan: &mut WeddingPlan, id: i64) -> Result<&mut Event> {
    plan.events
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or(PlanError::NotFound {
            collection: "events",
            id,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_store;

    #[tokio::test]
    async fn test_add_event_applies_form_defaults() {
        let mut store = test_store().await;

        let id = store
            .add_event(NewEvent {
                name: "Tilak".into(),
                date: "2025-11-25".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(id, 6);
        let event = store.plan().events.iter().find(|e| e.id == id).unwrap();
        assert_eq!(event.time, "12:00");
        assert_eq!(event.venue, "TBD");
        assert_eq!(event.theme, "Traditional");
        assert_eq!(event.dress_code, "Formal");
        assert_eq!(event.budget, 0.0);
        assert!(event.songs.is_empty());
        assert!(event.groom_entry.is_none());
    }

    #[tokio::test]
    async fn test_add_event_requires_name_and_date() {
        let mut store = test_store().await;

        let missing_date = NewEvent {
            name: "Tilak".into(),
            ..Default::default()
        };
        assert!(store.add_event(missing_date).await.is_err());

        let missing_name = NewEvent {
            date: "2025-11-25".into(),
            ..Default::default()
        };
        assert!(store.add_event(missing_name).await.is_err());

        assert_eq!(store.plan().events.len(), 5);
    }

    #[tokio::test]
    async fn test_update_event_keeps_the_id() {
        let mut store = test_store().await;
        let mut event = store.plan().events[0].clone();
        event.venue = "Garden Lawn".into();
        event.checklist.push("Confirm lawn access".into());

        store.update_event(event.clone()).await.unwrap();
        assert_eq!(store.plan().events[0], event);
    }

    #[tokio::test]
    async fn test_delete_event() {
        let mut store = test_store().await;

        store.delete_event(3).await.unwrap();
        assert!(store.plan().events.iter().all(|e| e.id != 3));

        let err = store.delete_event(3).await.unwrap_err();
        assert!(matches!(
            err,
            PlanError::NotFound {
                collection: "events",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_song_ids_and_order_are_scoped_to_the_event() {
        let mut store = test_store().await;

        // Sangeet (id 2) already has one song; Mehendi (id 1) has none.
        let sangeet_song = store
            .add_song(
                2,
                NewSong {
                    title: "Kala Chashma".into(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let mehendi_song = store
            .add_song(
                1,
                NewSong {
                    title: "Mehndi Laga Ke Rakhna".into(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(sangeet_song, 2);
        assert_eq!(mehendi_song, 1);

        let sangeet = store.plan().events.iter().find(|e| e.id == 2).unwrap();
        assert_eq!(sangeet.songs[1].order, 2);
        assert!(!sangeet.songs[1].practiced);
    }

    #[tokio::test]
    async fn test_add_song_splits_performers_on_commas() {
        let mut store = test_store().await;

        store
            .add_song(
                1,
                NewSong {
                    title: "London Thumakda".into(),
                    performers: "Priya Jain,  Anand Gupta , ".into(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let mehendi = store.plan().events.iter().find(|e| e.id == 1).unwrap();
        assert_eq!(
            mehendi.songs[0].performers,
            vec!["Priya Jain", "Anand Gupta"]
        );
    }

    #[tokio::test]
    async fn test_set_song_practiced() {
        let mut store = test_store().await;

        store.set_song_practiced(2, 1, true).await.unwrap();
        let sangeet = store.plan().events.iter().find(|e| e.id == 2).unwrap();
        assert!(sangeet.songs[0].practiced);

        let err = store.set_song_practiced(2, 99, true).await.unwrap_err();
        assert!(matches!(
            err,
            PlanError::NotFound {
                collection: "songs",
                id: 99
            }
        ));
    }
}
