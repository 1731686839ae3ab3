use serde::{Deserialize, Serialize};

/// How the two sides of a fixture are recorded for a sport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordShape {
    TeamVsTeam,
    IndividualVsIndividual,
    PairedDoubles,
}

impl RecordShape {
    /// Source column headers holding the two participants
    pub fn participant_columns(self) -> (&'static str, &'static str) {
        match self {
            RecordShape::TeamVsTeam => ("Team 1", "Team 2"),
            RecordShape::IndividualVsIndividual => ("Player 1", "Player 2"),
            RecordShape::PairedDoubles => ("Pair 1", "Pair 2"),
        }
    }
}

/// One supported sport and where its schedule lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SportConfig {
    pub id: &'static str,
    pub shape: RecordShape,
    pub source_file: &'static str,
}

/// Every sport the import knows about, in processing order
pub const SPORTS: &[SportConfig] = &[
    SportConfig {
        id: "futsal",
        shape: RecordShape::TeamVsTeam,
        source_file: "Schedule_Template_Futsal.csv",
    },
    SportConfig {
        id: "netball",
        shape: RecordShape::TeamVsTeam,
        source_file: "Schedule_Template_Netball.csv",
    },
    SportConfig {
        id: "carrom",
        shape: RecordShape::IndividualVsIndividual,
        source_file: "Schedule_Template_Carrom.csv",
    },
    SportConfig {
        id: "chess",
        shape: RecordShape::IndividualVsIndividual,
        source_file: "Schedule_Template_Chess.csv",
    },
    SportConfig {
        id: "badminton",
        shape: RecordShape::PairedDoubles,
        source_file: "Schedule_Template_Badminton.csv",
    },
    SportConfig {
        id: "esports",
        shape: RecordShape::TeamVsTeam,
        source_file: "Schedule_Template_Esports.csv",
    },
    SportConfig {
        id: "darts",
        shape: RecordShape::IndividualVsIndividual,
        source_file: "Schedule_Template_Darts.csv",
    },
];

/// Looks up a sport by identifier
pub fn find_sport(id: &str) -> Option<&'static SportConfig> {
    SPORTS.iter().find(|sport| sport.id == id)
}
