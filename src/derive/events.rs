use serde::{Deserialize, Serialize};

use crate::model::Event;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventOrder {
    /// Fewest remaining turns first.
    #[default]
    TurnsRemaining,
    Name,
}

/// The events a player sees: active ones only, optionally narrowed by a
/// case-insensitive match on name or description.
pub fn active_event_listing<'a>(
    events: &'a [Event],
    filter: &str,
    order: EventOrder,
) -> Vec<&'a Event> {
    let needle = filter.to_lowercase();
    let mut listing: Vec<&Event> = events
        .iter()
        .filter(|e| e.is_active)
        .filter(|e| {
            needle.is_empty()
                || e.name.to_lowercase().contains(&needle)
                || e.description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .collect();

    match order {
        EventOrder::TurnsRemaining => listing.sort_by_key(|e| e.active_for),
        EventOrder::Name => {
            listing.sort_by(|a, b| {
                a.name
                    .to_lowercase()
                    .cmp(&b.name.to_lowercase())
                    .then_with(|| a.name.cmp(&b.name))
            });
        }
    }
    listing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(name: &str, description: Option<&str>, is_active: bool, active_for: u32) -> Event {
        Event {
            id: name.to_lowercase(),
            name: name.to_string(),
            description: description.map(str::to_string),
            is_active,
            active_for,
            bonuses: Vec::new(),
        }
    }

    fn names(listing: &[&Event]) -> Vec<String> {
        listing.iter().map(|e| e.name.clone()).collect()
    }

    fn sample() -> Vec<Event> {
        vec![
            event("Plague", Some("Sickness in the ports"), true, 4),
            event("bountiful harvest", None, true, 2),
            event("Old Treaty", Some("expired"), false, 0),
            event("Drought", Some("The rivers run dry"), true, 6),
        ]
    }

    #[test]
    fn only_active_by_turns() {
        let events = sample();
        let listing = active_event_listing(&events, "", EventOrder::default());
        assert_eq!(names(&listing), vec!["bountiful harvest", "Plague", "Drought"]);
    }

    #[test]
    fn sort_by_name_ignores_case() {
        let events = sample();
        let listing = active_event_listing(&events, "", EventOrder::Name);
        assert_eq!(names(&listing), vec!["bountiful harvest", "Drought", "Plague"]);
    }

    #[test]
    fn filter_matches_name_or_description() {
        let events = sample();
        assert_eq!(
            names(&active_event_listing(&events, "PORTS", EventOrder::default())),
            vec!["Plague"]
        );
        assert_eq!(
            names(&active_event_listing(&events, "harv", EventOrder::default())),
            vec!["bountiful harvest"]
        );
        assert!(active_event_listing(&events, "expired", EventOrder::default()).is_empty());
    }
}
