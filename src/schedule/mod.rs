pub mod ids;
pub mod types;

pub use ids::IdGenerator;
pub use types::{Participants, ScheduleCollection, ScheduleDocument, ScheduleEntry, SportSchedule};
