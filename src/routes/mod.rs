pub mod activities;
pub mod health;
pub mod intervals;
pub mod stats;
