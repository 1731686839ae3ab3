use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::sports::RecordShape;

/// The two sides of a fixture, named the way the event database expects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Participants {
    Teams { team1: String, team2: String },
    Players { player1: String, player2: String },
    Pairs { pair1: String, pair2: String },
}

impl Participants {
    /// Builds the participant pair for a shape, or `None` if either side is blank
    pub fn for_shape(shape: RecordShape, first: &str, second: &str) -> Option<Self> {
        let first = first.trim();
        let second = second.trim();
        if first.is_empty() || second.is_empty() {
            return None;
        }

        let (first, second) = (first.to_string(), second.to_string());
        Some(match shape {
            RecordShape::TeamVsTeam => Participants::Teams {
                team1: first,
                team2: second,
            },
            RecordShape::IndividualVsIndividual => Participants::Players {
                player1: first,
                player2: second,
            },
            RecordShape::PairedDoubles => Participants::Pairs {
                pair1: first,
                pair2: second,
            },
        })
    }

    pub fn shape(&self) -> RecordShape {
        match self {
            Participants::Teams { .. } => RecordShape::TeamVsTeam,
            Participants::Players { .. } => RecordShape::IndividualVsIndividual,
            Participants::Pairs { .. } => RecordShape::PairedDoubles,
        }
    }

    pub fn sides(&self) -> (&str, &str) {
        match self {
            Participants::Teams { team1, team2 } => (team1, team2),
            Participants::Players { player1, player2 } => (player1, player2),
            Participants::Pairs { pair1, pair2 } => (pair1, pair2),
        }
    }
}

/// A single scheduled fixture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: i64,
    pub round: String,
    pub time: String,
    pub venue: Option<String>,
    pub notes: Option<String>,
    #[serde(flatten)]
    pub participants: Participants,
}

impl ScheduleEntry {
    /// Compares everything except the id
    pub fn same_fixture(&self, other: &ScheduleEntry) -> bool {
        self.round == other.round
            && self.time == other.time
            && self.venue == other.venue
            && self.notes == other.notes
            && self.participants == other.participants
    }
}

/// Entries for one sport, in source row order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SportSchedule {
    pub sport: String,
    pub entries: Vec<ScheduleEntry>,
}

/// Sport id -> entries, keeping insertion order
///
/// Serializes as a JSON object whose keys appear in the order sports were
/// inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleCollection {
    sports: Vec<SportSchedule>,
}

impl ScheduleCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the entries for a sport. A replaced sport keeps its position.
    pub fn insert(&mut self, sport: impl Into<String>, entries: Vec<ScheduleEntry>) {
        let sport = sport.into();
        match self.sports.iter_mut().find(|s| s.sport == sport) {
            Some(existing) => existing.entries = entries,
            None => self.sports.push(SportSchedule { sport, entries }),
        }
    }

    pub fn get(&self, sport: &str) -> Option<&[ScheduleEntry]> {
        self.sports
            .iter()
            .find(|s| s.sport == sport)
            .map(|s| s.entries.as_slice())
    }

    pub fn contains(&self, sport: &str) -> bool {
        self.get(sport).is_some()
    }

    pub fn sport_ids(&self) -> impl Iterator<Item = &str> {
        self.sports.iter().map(|s| s.sport.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SportSchedule> {
        self.sports.iter()
    }

    /// Number of sports present
    pub fn len(&self) -> usize {
        self.sports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sports.is_empty()
    }

    pub fn total_entries(&self) -> usize {
        self.sports.iter().map(|s| s.entries.len()).sum()
    }
}

impl Serialize for ScheduleCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sports.len()))?;
        for sport in &self.sports {
            map.serialize_entry(&sport.sport, &sport.entries)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ScheduleCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CollectionVisitor;

        impl<'de> Visitor<'de> for CollectionVisitor {
            type Value = ScheduleCollection;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of sport id to schedule entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut collection = ScheduleCollection::new();
                while let Some((sport, entries)) =
                    access.next_entry::<String, Vec<ScheduleEntry>>()?
                {
                    collection.insert(sport, entries);
                }
                Ok(collection)
            }
        }

        deserializer.deserialize_map(CollectionVisitor)
    }
}

/// On-disk shape of the exported file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDocument {
    pub schedules: ScheduleCollection,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(id: i64, round: &str, participants: Participants) -> ScheduleEntry {
        ScheduleEntry {
            id,
            round: round.to_string(),
            time: "10:00".to_string(),
            venue: None,
            notes: None,
            participants,
        }
    }

    #[test]
    fn blank_participant_means_no_pair() {
        assert!(Participants::for_shape(RecordShape::TeamVsTeam, "Red", "  ").is_none());
        assert!(Participants::for_shape(RecordShape::PairedDoubles, "", "A/B").is_none());
        assert_eq!(
            Participants::for_shape(RecordShape::IndividualVsIndividual, " Ana ", "Ben"),
            Some(Participants::Players {
                player1: "Ana".to_string(),
                player2: "Ben".to_string()
            })
        );
    }

    #[test]
    fn entry_serializes_with_flat_participant_fields() {
        let e = entry(
            7,
            "1",
            Participants::Teams {
                team1: "Red".to_string(),
                team2: "Blue".to_string(),
            },
        );
        let value = serde_json::to_value(&e).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 7,
                "round": "1",
                "time": "10:00",
                "venue": null,
                "notes": null,
                "team1": "Red",
                "team2": "Blue"
            })
        );
    }

    #[test]
    fn entry_field_order_matches_export_layout() {
        let e = entry(
            1,
            "QF",
            Participants::Pairs {
                pair1: "A/B".to_string(),
                pair2: "C/D".to_string(),
            },
        );
        let text = serde_json::to_string(&e).unwrap();
        assert_eq!(
            text,
            concat!(
                r#"{"id":1,"round":"QF","time":"10:00","venue":null,"notes":null,"#,
                r#""pair1":"A/B","pair2":"C/D"}"#
            )
        );
    }

    #[test]
    fn each_participant_variant_deserializes_back() {
        let players: ScheduleEntry = serde_json::from_value(json!({
            "id": 3, "round": "R16", "time": "", "venue": "Hall A", "notes": null,
            "player1": "Ana", "player2": "Ben"
        }))
        .unwrap();
        assert_eq!(players.participants.shape(), RecordShape::IndividualVsIndividual);
        assert_eq!(players.venue.as_deref(), Some("Hall A"));

        let pairs: ScheduleEntry = serde_json::from_value(json!({
            "id": 4, "round": "F", "time": "9:00", "venue": null, "notes": "Final",
            "pair1": "A/B", "pair2": "C/D"
        }))
        .unwrap();
        assert_eq!(pairs.participants.sides(), ("A/B", "C/D"));
    }

    #[test]
    fn collection_keeps_insertion_order_through_json() {
        let mut collection = ScheduleCollection::new();
        collection.insert(
            "netball",
            vec![entry(2, "1", Participants::Teams { team1: "A".into(), team2: "B".into() })],
        );
        collection.insert(
            "chess",
            vec![entry(1, "1", Participants::Players { player1: "X".into(), player2: "Y".into() })],
        );

        let document = ScheduleDocument {
            schedules: collection.clone(),
        };
        let text = serde_json::to_string(&document).unwrap();
        assert!(text.find("netball").unwrap() < text.find("chess").unwrap());

        let back: ScheduleDocument = serde_json::from_str(&text).unwrap();
        assert_eq!(back.schedules, collection);
        assert_eq!(back.schedules.sport_ids().collect::<Vec<_>>(), ["netball", "chess"]);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut collection = ScheduleCollection::new();
        let teams = || Participants::Teams {
            team1: "A".into(),
            team2: "B".into(),
        };
        let fixture = |id| entry(id, "1", teams());
        collection.insert("futsal", vec![fixture(1)]);
        collection.insert("darts", vec![fixture(2)]);
        collection.insert("futsal", vec![fixture(3), fixture(4)]);

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.total_entries(), 3);
        assert_eq!(collection.sport_ids().next(), Some("futsal"));
        assert!(collection.get("futsal").unwrap()[0].same_fixture(&fixture(99)));
    }
}
