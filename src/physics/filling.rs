// src/physics/filling.rs

use crate::error::{QvError, Result};
use crate::model::orbital::sequence_capacity;
use crate::model::{ElectronConfiguration, FilledOrbital, ORBITAL_SEQUENCE};

/// Fills [`ORBITAL_SEQUENCE`] in Aufbau order with `electron_count` electrons.
///
/// Inside each orbital the spin-up half is filled first. Electrons beyond the
/// capacity of the whole sequence (118) are dropped without error.
///
/// # Errors
/// `InvalidInput` for a negative count.
pub fn fill(electron_count: i64) -> Result<ElectronConfiguration> {
    if electron_count < 0 {
        return Err(QvError::InvalidInput(format!(
            "electron count {} is negative",
            electron_count
        )));
    }

    let mut remaining = electron_count;
    let mut config = ElectronConfiguration::new();

    for orbital in ORBITAL_SEQUENCE.iter() {
        if remaining == 0 {
            break;
        }

        let capacity = orbital.capacity();
        let to_add = remaining.min(capacity as i64) as u32;
        let half = orbital.subshell.half_capacity();

        let mut filled = FilledOrbital::default();
        for _ in 0..to_add {
            if filled.up < half {
                filled.up += 1;
            } else {
                filled.down += 1;
            }
        }
        remaining -= to_add as i64;

        config.push(*orbital, filled);
    }

    if remaining > 0 {
        log::debug!(
            "{} electrons exceed the orbital sequence capacity ({}) and were not placed",
            remaining,
            sequence_capacity()
        );
    }

    Ok(config)
}

/// Validates an electron count read from a table cell.
///
/// Spreadsheets and CSV exports often store integers as floats ("6.0").
pub fn electron_count_from_value(value: f64) -> Result<u32> {
    if !value.is_finite() {
        return Err(QvError::InvalidInput(format!("electron count {} is not finite", value)));
    }
    if value < 0.0 {
        return Err(QvError::InvalidInput(format!("electron count {} is negative", value)));
    }
    if value.fract() != 0.0 {
        return Err(QvError::InvalidInput(format!("electron count {} is not an integer", value)));
    }
    if value > u32::MAX as f64 {
        return Err(QvError::InvalidInput(format!("electron count {} is too large", value)));
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carbon() {
        let config = fill(6).unwrap();
        assert_eq!(config.len(), 3);
        assert_eq!(config.get("1s"), Some(FilledOrbital::new(1, 1)));
        assert_eq!(config.get("2s"), Some(FilledOrbital::new(1, 1)));
        assert_eq!(config.get("2p"), Some(FilledOrbital::new(2, 0)));
        assert_eq!(config.get("3s"), None);
    }

    #[test]
    fn test_neon() {
        let config = fill(10).unwrap();
        let totals: Vec<(String, u32)> = config
            .iter()
            .map(|(orb, f)| (orb.label(), f.total()))
            .collect();
        assert_eq!(
            totals,
            vec![("1s".to_string(), 2), ("2s".to_string(), 2), ("2p".to_string(), 6)]
        );
        assert_eq!(config.get("2p"), Some(FilledOrbital::new(3, 3)));
    }

    #[test]
    fn test_zero_is_empty() {
        let config = fill(0).unwrap();
        assert!(config.is_empty());
        assert_eq!(config.total_electrons(), 0);
    }

    #[test]
    fn test_negative_is_rejected() {
        assert!(matches!(fill(-1), Err(QvError::InvalidInput(_))));
    }

    #[test]
    fn test_conservation_up_to_118() {
        for count in 0..=118 {
            let config = fill(count).unwrap();
            assert_eq!(config.total_electrons() as i64, count);
            for (orb, f) in &config {
                assert!(f.total() <= orb.capacity(), "{} overfilled at {}", orb, count);
                assert!(f.total() > 0, "{} present but empty at {}", orb, count);
            }
        }
    }

    #[test]
    fn test_up_fills_before_down() {
        for count in 0..=118 {
            for (orb, f) in &fill(count).unwrap() {
                if f.down > 0 {
                    assert_eq!(f.up, orb.subshell.half_capacity(), "{} at {}", orb, count);
                }
                assert!(f.up <= orb.subshell.half_capacity());
                assert!(f.down <= orb.subshell.half_capacity());
            }
        }
    }

    #[test]
    fn test_overflow_truncates() {
        let config = fill(150).unwrap();
        assert_eq!(config.len(), ORBITAL_SEQUENCE.len());
        assert_eq!(config.total_electrons(), sequence_capacity());
        for (orb, f) in &config {
            assert_eq!(f.total(), orb.capacity());
        }
    }

    #[test]
    fn test_partial_last_orbital() {
        // Iron: 3d gets 6 -> 5 up, 1 down
        let config = fill(26).unwrap();
        let (last, filled) = config.iter().last().copied().unwrap();
        assert_eq!(last.label(), "3d");
        assert_eq!(filled, FilledOrbital::new(5, 1));
    }

    #[test]
    fn test_count_from_value() {
        assert_eq!(electron_count_from_value(6.0).unwrap(), 6);
        assert_eq!(electron_count_from_value(0.0).unwrap(), 0);
        assert!(electron_count_from_value(-2.0).is_err());
        assert!(electron_count_from_value(2.5).is_err());
        assert!(electron_count_from_value(f64::NAN).is_err());
        assert!(electron_count_from_value(f64::INFINITY).is_err());
    }
}
