//! Contact events to hit attempts
//!
//! The host's physics reports contacts against a hole's hit volume. Trigger
//! contacts only count when the other collider carries the hand tag; solid
//! collisions always count.

use crate::settings::Settings;
use crate::sim::TickInput;

/// A raw contact reported by the physics host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Contact {
    /// Something entered the hole's trigger volume
    Trigger { hole: usize, tag: String },
    /// Something struck the mole's collider
    Collision { hole: usize },
}

/// Turns contacts into "attempt hit" signals, one per contact
#[derive(Debug, Clone)]
pub struct HitAdapter {
    hand_tag: String,
    hole_count: usize,
}

impl HitAdapter {
    pub fn new(hand_tag: impl Into<String>, hole_count: usize) -> Self {
        Self {
            hand_tag: hand_tag.into(),
            hole_count,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.hand_tag.clone(), settings.hole_count)
    }

    /// The hole a contact should whack, if any
    pub fn translate(&self, contact: &Contact) -> Option<usize> {
        let hole = match contact {
            Contact::Trigger { hole, tag } if *tag == self.hand_tag => *hole,
            Contact::Trigger { .. } => return None,
            Contact::Collision { hole } => *hole,
        };

        if hole >= self.hole_count {
            log::warn!("Contact on unknown hole {} ignored", hole);
            return None;
        }
        Some(hole)
    }

    /// Append this frame's hits to a tick input
    pub fn collect<'a>(
        &self,
        contacts: impl IntoIterator<Item = &'a Contact>,
        input: &mut TickInput,
    ) {
        input
            .hits
            .extend(contacts.into_iter().filter_map(|c| self.translate(c)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_needs_hand_tag() {
        let adapter = HitAdapter::new("Player", 9);
        let hand = Contact::Trigger {
            hole: 2,
            tag: "Player".to_string(),
        };
        let elbow = Contact::Trigger {
            hole: 2,
            tag: "Untagged".to_string(),
        };
        assert_eq!(adapter.translate(&hand), Some(2));
        assert_eq!(adapter.translate(&elbow), None);
    }

    #[test]
    fn test_collision_always_counts() {
        let adapter = HitAdapter::from_settings(&Settings::default());
        assert_eq!(adapter.translate(&Contact::Collision { hole: 8 }), Some(8));
        assert_eq!(adapter.translate(&Contact::Collision { hole: 9 }), None);
    }

    #[test]
    fn test_collect_keeps_order_and_duplicates() {
        let adapter = HitAdapter::new("Player", 4);
        let contacts = vec![
            Contact::Collision { hole: 1 },
            Contact::Trigger {
                hole: 3,
                tag: "Other".to_string(),
            },
            Contact::Trigger {
                hole: 1,
                tag: "Player".to_string(),
            },
        ];

        let mut input = TickInput::default();
        adapter.collect(&contacts, &mut input);
        assert_eq!(input.hits, vec![1, 1]);
    }
}
