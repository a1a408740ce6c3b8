//! Shared traits and recurrence cadences for budgeting records.

use std::fmt;

use serde::{de::Deserializer, Deserialize, Serialize};

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

const DAYS_PER_MONTH: f64 = 30.0;
const WEEKS_PER_MONTH: f64 = 4.33;
const BIWEEKS_PER_MONTH: f64 = 2.17;
const MONTHS_PER_YEAR: f64 = 12.0;

/// Enumerates the recurrence cadences a record can be tracked with.
///
/// Values outside the known set deserialize to [`Frequency::Unrecognized`],
/// which normalizes with a multiplier of one instead of failing the load.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Biweekly,
    #[default]
    Monthly,
    Yearly,
    Unrecognized,
}

impl Frequency {
    pub fn from_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => Frequency::Daily,
            "weekly" => Frequency::Weekly,
            "biweekly" => Frequency::Biweekly,
            "monthly" => Frequency::Monthly,
            "yearly" => Frequency::Yearly,
            _ => Frequency::Unrecognized,
        }
    }

    /// Factor that converts one occurrence into its monthly equivalent.
    pub fn monthly_multiplier(self) -> f64 {
        match self {
            Frequency::Daily => DAYS_PER_MONTH,
            Frequency::Weekly => WEEKS_PER_MONTH,
            Frequency::Biweekly => BIWEEKS_PER_MONTH,
            Frequency::Monthly => 1.0,
            Frequency::Yearly => 1.0 / MONTHS_PER_YEAR,
            Frequency::Unrecognized => 1.0,
        }
    }
}

/// Normalizes `amount` charged at `frequency` onto a monthly basis.
pub fn monthly_equivalent(amount: f64, frequency: Frequency) -> f64 {
    amount * frequency.monthly_multiplier()
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Biweekly => "Biweekly",
            Frequency::Monthly => "Monthly",
            Frequency::Yearly => "Yearly",
            Frequency::Unrecognized => "Unrecognized",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for Frequency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Frequency::from_value(&value))
    }
}

/// Billing cadence for subscriptions. Anything other than yearly bills monthly.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillingFrequency {
    #[default]
    Monthly,
    Yearly,
    Unrecognized,
}

impl BillingFrequency {
    pub fn from_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "monthly" => BillingFrequency::Monthly,
            "yearly" => BillingFrequency::Yearly,
            _ => BillingFrequency::Unrecognized,
        }
    }
}

impl fmt::Display for BillingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BillingFrequency::Monthly => "Monthly",
            BillingFrequency::Yearly => "Yearly",
            BillingFrequency::Unrecognized => "Unrecognized",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for BillingFrequency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(BillingFrequency::from_value(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipliers_match_calendar_approximations() {
        assert_eq!(Frequency::Daily.monthly_multiplier(), 30.0);
        assert_eq!(Frequency::Weekly.monthly_multiplier(), 4.33);
        assert_eq!(Frequency::Biweekly.monthly_multiplier(), 2.17);
        assert_eq!(Frequency::Monthly.monthly_multiplier(), 1.0);
        assert!((Frequency::Yearly.monthly_multiplier() - 0.083_333).abs() < 1e-6);
        assert_eq!(Frequency::Unrecognized.monthly_multiplier(), 1.0);
    }

    #[test]
    fn monthly_equivalent_is_identity_for_monthly() {
        for amount in [0.0, 1.0, 99.99, 5000.0] {
            assert_eq!(monthly_equivalent(amount, Frequency::Monthly), amount);
        }
    }

    #[test]
    fn monthly_equivalent_never_negative_for_non_negative_amounts() {
        let frequencies = [
            Frequency::Daily,
            Frequency::Weekly,
            Frequency::Biweekly,
            Frequency::Monthly,
            Frequency::Yearly,
            Frequency::Unrecognized,
        ];
        for frequency in frequencies {
            for amount in [0.0, 0.01, 12.5, 1_000_000.0] {
                assert!(monthly_equivalent(amount, frequency) >= 0.0);
            }
        }
    }

    #[test]
    fn unknown_frequency_strings_fall_back_to_unrecognized() {
        let parsed: Frequency = serde_json::from_str("\"fortnightly\"").unwrap();
        assert_eq!(parsed, Frequency::Unrecognized);
        let parsed: Frequency = serde_json::from_str("\" Weekly \"").unwrap();
        assert_eq!(parsed, Frequency::Weekly);
    }

    #[test]
    fn from_value_is_lenient_about_case_and_spacing() {
        assert_eq!(Frequency::from_value(" DAILY"), Frequency::Daily);
        assert_eq!(Frequency::from_value("quarterly"), Frequency::Unrecognized);
        assert_eq!(BillingFrequency::from_value("Yearly "), BillingFrequency::Yearly);
        assert_eq!(BillingFrequency::from_value(""), BillingFrequency::Unrecognized);
    }

    #[test]
    fn frequency_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Frequency::Biweekly).unwrap(),
            "\"biweekly\""
        );
    }

    #[test]
    fn billing_frequency_falls_back_for_unknown_values() {
        let parsed: BillingFrequency = serde_json::from_str("\"quarterly\"").unwrap();
        assert_eq!(parsed, BillingFrequency::Unrecognized);
        let parsed: BillingFrequency = serde_json::from_str("\"yearly\"").unwrap();
        assert_eq!(parsed, BillingFrequency::Yearly);
    }
}
