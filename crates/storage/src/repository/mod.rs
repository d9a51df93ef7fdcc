pub mod club;
pub mod race;
pub mod rating;
pub mod runner;
