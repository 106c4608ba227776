use crate::day::Day;
use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Estimated travel cost in rupees per kilometre.
pub const COST_RS_PER_KM: f64 = 75.0;
/// Estimated emissions in grams of CO2 per kilometre.
pub const EMISSIONS_G_PER_KM: f64 = 125.0;
/// Largest accepted daily distance; a full week of it still sums to finite totals.
pub const MAX_DISTANCE_KM: f64 = f64::MAX / (EMISSIONS_G_PER_KM * 8.0);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayEntry {
    pub day: Day,
    pub traveled: bool,
    pub destination: Option<String>,
    pub distance_km: f64,
}

impl DayEntry {
    /// Whether the entry counts towards the weekly totals.
    pub fn qualifies(&self) -> bool {
        self.traveled && self.distance_km > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub cost_rs: f64,
    pub emissions_g: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBreakdown {
    pub day: Day,
    pub distance_km: f64,
    pub cost_rs: f64,
    pub emissions_g: f64,
    pub destination: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct WeeklySummary {
    pub total_km: f64,
    pub total_cost_rs: f64,
    pub total_emissions_g: f64,
    pub breakdown: Vec<DayBreakdown>,
}

impl WeeklySummary {
    pub fn is_empty(&self) -> bool {
        self.breakdown.is_empty()
    }
}

pub fn derive_metrics(entry: &DayEntry) -> DerivedMetrics {
    DerivedMetrics {
        cost_rs: entry.distance_km * COST_RS_PER_KM,
        emissions_g: entry.distance_km * EMISSIONS_G_PER_KM,
    }
}

/// One week of travel entries, keyed by day.
#[derive(Debug, Clone, Default)]
pub struct TravelLedger {
    entries: BTreeMap<Day, DayEntry>,
}

impl TravelLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and upserts the entry for `day`, returning what was stored.
    ///
    /// A rejected entry also drops whatever was previously accepted for
    /// the day, so the day reads as not yet entered.
    pub fn record_entry(
        &mut self,
        day: Day,
        traveled: bool,
        destination: &str,
        distance_km: f64,
    ) -> Result<&DayEntry, ValidationError> {
        if let Err(err) = validate(traveled, destination, distance_km) {
            self.entries.remove(&day);
            return Err(err);
        }

        let destination = destination.trim();
        let entry = DayEntry {
            day,
            traveled,
            destination: (traveled && !destination.is_empty()).then(|| destination.to_string()),
            distance_km,
        };
        self.entries.insert(day, entry);
        Ok(&self.entries[&day])
    }

    pub fn entry(&self, day: Day) -> Option<&DayEntry> {
        self.entries.get(&day)
    }

    pub fn entries(&self) -> impl Iterator<Item = &DayEntry> {
        Day::ALL.into_iter().filter_map(move |day| self.entries.get(&day))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn summarize(&self) -> WeeklySummary {
        let mut summary = WeeklySummary::default();

        for entry in self.entries().filter(|entry| entry.qualifies()) {
            let metrics = derive_metrics(entry);
            summary.total_km += entry.distance_km;
            summary.total_cost_rs += metrics.cost_rs;
            summary.total_emissions_g += metrics.emissions_g;
            summary.breakdown.push(DayBreakdown {
                day: entry.day,
                distance_km: entry.distance_km,
                cost_rs: metrics.cost_rs,
                emissions_g: metrics.emissions_g,
                destination: entry.destination.clone().unwrap_or_default(),
            });
        }

        summary
    }
}

fn validate(traveled: bool, destination: &str, distance_km: f64) -> Result<(), ValidationError> {
    if !(0.0..=MAX_DISTANCE_KM).contains(&distance_km) {
        return Err(ValidationError::InvalidDistance);
    }
    if traveled {
        if distance_km <= 0.0 {
            return Err(ValidationError::InvalidDistance);
        }
        if destination.trim().is_empty() {
            return Err(ValidationError::MissingDestination);
        }
    }
    Ok(())
}
