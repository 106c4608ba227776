use crate::day::Day;
use crate::errors::ValidationError;
use crate::ledger::{DayEntry, derive_metrics};

pub fn format_km(value: f64) -> String {
    group_thousands(value, 1)
}

pub fn format_amount(value: f64) -> String {
    group_thousands(value, 2)
}

/// Advisory line shown under a day's inputs after it is recorded.
pub fn entry_message(day: Day, outcome: Result<&DayEntry, ValidationError>) -> String {
    match outcome {
        Ok(entry) if entry.traveled => {
            let metrics = derive_metrics(entry);
            format!(
                "On {day}, you traveled {} km to {}. Estimated cost: ₹{}, Carbon emission: {} g CO2.",
                format_km(entry.distance_km),
                entry.destination.as_deref().unwrap_or_default(),
                format_amount(metrics.cost_rs),
                format_amount(metrics.emissions_g),
            )
        }
        Ok(_) => format!(
            "Good for you! No travel recorded for {day}. Saving money and reducing emissions!"
        ),
        Err(ValidationError::InvalidDistance) => {
            format!("Please enter a valid distance for {day}.")
        }
        Err(ValidationError::MissingDestination) => {
            format!("Please enter where you traveled on {day}.")
        }
    }
}

fn group_thousands(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value < 0.0 {
        out.push('-');
    }
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_separators() {
        assert_eq!(format_km(10.0), "10.0");
        assert_eq!(format_km(1234.56), "1,234.6");
        assert_eq!(format_amount(750.0), "750.00");
        assert_eq!(format_amount(1250.0), "1,250.00");
        assert_eq!(format_amount(1234567.0), "1,234,567.00");
        assert_eq!(format_amount(0.0), "0.00");
    }

    #[test]
    fn traveled_message_includes_estimates() {
        let entry = DayEntry {
            day: Day::Monday,
            traveled: true,
            destination: Some("Office".to_string()),
            distance_km: 10.0,
        };
        assert_eq!(
            entry_message(Day::Monday, Ok(&entry)),
            "On Monday, you traveled 10.0 km to Office. Estimated cost: ₹750.00, Carbon emission: 1,250.00 g CO2."
        );
    }

    #[test]
    fn advisory_messages_name_the_day() {
        let rest = DayEntry {
            day: Day::Sunday,
            traveled: false,
            destination: None,
            distance_km: 0.0,
        };
        assert!(entry_message(Day::Sunday, Ok(&rest)).contains("No travel recorded for Sunday"));
        assert_eq!(
            entry_message(Day::Friday, Err(ValidationError::InvalidDistance)),
            "Please enter a valid distance for Friday."
        );
        assert_eq!(
            entry_message(Day::Tuesday, Err(ValidationError::MissingDestination)),
            "Please enter where you traveled on Tuesday."
        );
    }
}
