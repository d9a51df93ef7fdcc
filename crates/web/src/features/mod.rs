pub mod clubs;
pub mod races;
pub mod rating;
pub mod runners;
