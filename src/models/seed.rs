use crate::models::event::{EventId, EventRecord};

#[allow(clippy::too_many_arguments)]
fn record(
    id: EventId,
    title: &str,
    description: &str,
    date: &str,
    time: &str,
    location: &str,
    event_type: &str,
    image: &str,
) -> EventRecord {
    EventRecord {
        id,
        title: title.to_string(),
        description: description.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        location: location.to_string(),
        event_type: event_type.to_string(),
        image: image.to_string(),
    }
}

/// The mock catalog every session starts from.
pub fn seed_events() -> Vec<EventRecord> {
    vec![
        record(
            1,
            "Annual Sports Day",
            "Join us for a day of sports and fun activities!",
            "2024-04-15",
            "09:00",
            "College Sports Complex",
            "Sports",
            "https://images.unsplash.com/photo-1702303208608-fc27f8826b9a?w=800&h=600&fit=crop",
        ),
        record(
            2,
            "Tech Workshop",
            "Learn about the latest technologies in this hands-on workshop.",
            "2024-04-20",
            "14:00",
            "Computer Lab",
            "Workshop",
            "https://images.unsplash.com/photo-1504384764586-bb4cdc1707b0?w=800&h=600&fit=crop",
        ),
        record(
            3,
            "Cultural Festival",
            "Experience diverse cultures through music, dance, and art performances.",
            "2024-05-01",
            "16:00",
            "College Auditorium",
            "Cultural",
            "https://images.unsplash.com/photo-1514525253161-7a46d19cd819?w=800&h=600&fit=crop",
        ),
        record(
            4,
            "Career Fair",
            "Connect with top companies and explore career opportunities.",
            "2024-05-10",
            "10:00",
            "Main Hall",
            "Academic",
            "https://images.unsplash.com/photo-1552664730-d307ca884978?w=800&h=600&fit=crop",
        ),
        record(
            5,
            "Science Exhibition",
            "Showcase of innovative projects and scientific discoveries.",
            "2024-05-15",
            "11:00",
            "Science Block",
            "Academic",
            "https://images.unsplash.com/photo-1532094349884-543bc11b234d?w=800&h=600&fit=crop",
        ),
        record(
            6,
            "Music Concert",
            "Annual music concert featuring student bands and solo performances.",
            "2024-05-20",
            "18:00",
            "Open Air Theater",
            "Cultural",
            "https://images.unsplash.com/photo-1470229722913-7c0e2dbbafd3?w=800&h=600&fit=crop",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_has_six_unique_ids() {
        let events = seed_events();
        assert_eq!(events.len(), 6);

        let ids: HashSet<_> = events.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 6);
    }
}
