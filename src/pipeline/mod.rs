pub mod aggregate;
pub mod classify;
pub mod co2;
pub mod normalize;
pub mod present;
