use crate::errors::ProfileError;
use serde::Serialize;

pub const MAX_AGE: i64 = 120;

/// The traveller's details, fixed for the rest of the session once set.
///
/// `vehicle_model` is shown back to the user but plays no part in the
/// cost or emission estimates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    name: String,
    age: u8,
    vehicle_model: String,
    city: String,
}

impl Profile {
    pub fn new(
        name: &str,
        age: i64,
        vehicle_model: &str,
        city: &str,
    ) -> Result<Self, ProfileError> {
        let name = required(name, ProfileError::MissingName)?;
        let vehicle_model = required(vehicle_model, ProfileError::MissingVehicleModel)?;
        let city = required(city, ProfileError::MissingCity)?;
        if !(0..=MAX_AGE).contains(&age) {
            return Err(ProfileError::AgeOutOfRange(age));
        }

        Ok(Self {
            name,
            age: age as u8,
            vehicle_model,
            city,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn vehicle_model(&self) -> &str {
        &self.vehicle_model
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

fn required(value: &str, missing: ProfileError) -> Result<String, ProfileError> {
    let value = value.trim();
    if value.is_empty() {
        Err(missing)
    } else {
        Ok(value.to_string())
    }
}
