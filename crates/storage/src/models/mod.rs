pub mod club;
pub mod distance;
pub mod race;
pub mod race_result;
pub mod runner;

pub use club::{Club, ClubMember};
pub use distance::{Distances, decode_distances, distance_priority};
pub use race::Race;
pub use race_result::RaceResult;
pub use runner::Runner;
