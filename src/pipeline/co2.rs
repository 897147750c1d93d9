use crate::error::ContractError;
use crate::units::{round_whole, CO2_KG_PER_MILE};

/// Whole kilograms of CO₂ saved by cycling `miles` instead of driving.
pub fn co2_saved_kg(miles: f64) -> Result<u64, ContractError> {
    if !miles.is_finite() || miles < 0.0 {
        return Err(ContractError::InvalidDistance(miles));
    }
    Ok(round_whole(miles * CO2_KG_PER_MILE))
}
