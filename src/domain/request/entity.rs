//! Prediction request entity and its closed enumerations

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::features::RawRecord;

/// Store type enumeration, fixed at model-training time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreType {
    S1,
    S2,
    S3,
    S4,
}

impl StoreType {
    pub const ALL: [StoreType; 4] = [Self::S1, Self::S2, Self::S3, Self::S4];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S1 => "S1",
            Self::S2 => "S2",
            Self::S3 => "S3",
            Self::S4 => "S4",
        }
    }
}

/// Location type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationType {
    L1,
    L2,
    L3,
}

impl LocationType {
    pub const ALL: [LocationType; 3] = [Self::L1, Self::L2, Self::L3];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::L1 => "L1",
            Self::L2 => "L2",
            Self::L3 => "L3",
        }
    }
}

/// Region code enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionCode {
    R1,
    R2,
    R3,
    R4,
}

impl RegionCode {
    pub const ALL: [RegionCode; 4] = [Self::R1, Self::R2, Self::R3, Self::R4];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::R1 => "R1",
            Self::R2 => "R2",
            Self::R3 => "R3",
            Self::R4 => "R4",
        }
    }
}

macro_rules! impl_enum_str {
    ($ty:ident) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| format!("unknown {} '{}'", stringify!($ty), s))
            }
        }
    };
}

impl_enum_str!(StoreType);
impl_enum_str!(LocationType);
impl_enum_str!(RegionCode);

/// A single prediction request - created per user action, consumed once
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Store identifier (bounded integer)
    pub store_id: u32,
    pub store_type: StoreType,
    pub location_type: LocationType,
    pub region_code: RegionCode,
    pub holiday: bool,
    pub discount: bool,
    /// Calendar date, decomposed into year/month/day/weekday for the model
    pub date: NaiveDate,
}

impl PredictionRequest {
    /// Assemble the named one-row record handed to encoding and alignment.
    ///
    /// Flags become 0/1 numeric features and the date is decomposed with
    /// Monday = 0 weekday numbering, matching the training pipeline.
    pub fn to_record(&self) -> RawRecord {
        let mut record = RawRecord::new();

        record.push_numeric("Store_id", f64::from(self.store_id));
        record.push_numeric("Holiday", if self.holiday { 1.0 } else { 0.0 });
        record.push_numeric("Discount", if self.discount { 1.0 } else { 0.0 });
        record.push_numeric("Year", f64::from(self.date.year()));
        record.push_numeric("Month", f64::from(self.date.month()));
        record.push_numeric("Day", f64::from(self.date.day()));
        record.push_numeric(
            "DayOfWeek",
            f64::from(self.date.weekday().num_days_from_monday()),
        );

        record.push_categorical("Store_Type", self.store_type.as_str());
        record.push_categorical("Location_Type", self.location_type.as_str());
        record.push_categorical("Region_Code", self.region_code.as_str());

        record
    }
}

/// Scalar prediction produced from a single request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub sales: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(date: NaiveDate) -> PredictionRequest {
        PredictionRequest {
            store_id: 10,
            store_type: StoreType::S2,
            location_type: LocationType::L1,
            region_code: RegionCode::R3,
            holiday: true,
            discount: false,
            date,
        }
    }

    #[test]
    fn test_to_record_numeric_fields() {
        // 2024-03-04 was a Monday
        let record = request(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()).to_record();

        assert_eq!(record.numeric("Store_id"), Some(10.0));
        assert_eq!(record.numeric("Holiday"), Some(1.0));
        assert_eq!(record.numeric("Discount"), Some(0.0));
        assert_eq!(record.numeric("Year"), Some(2024.0));
        assert_eq!(record.numeric("Month"), Some(3.0));
        assert_eq!(record.numeric("Day"), Some(4.0));
        assert_eq!(record.numeric("DayOfWeek"), Some(0.0));
    }

    #[test]
    fn test_to_record_weekday_is_monday_zero() {
        // 2024-03-10 was a Sunday
        let record = request(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()).to_record();
        assert_eq!(record.numeric("DayOfWeek"), Some(6.0));
    }

    #[test]
    fn test_to_record_categorical_fields() {
        let record = request(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()).to_record();

        assert_eq!(record.categorical("Store_Type"), Some("S2"));
        assert_eq!(record.categorical("Location_Type"), Some("L1"));
        assert_eq!(record.categorical("Region_Code"), Some("R3"));
    }

    #[test]
    fn test_enum_round_trip_serde() {
        let json = serde_json::to_string(&StoreType::S3).unwrap();
        assert_eq!(json, "\"S3\"");

        let parsed: StoreType = serde_json::from_str("\"S3\"").unwrap();
        assert_eq!(parsed, StoreType::S3);
    }

    #[test]
    fn test_enum_from_str() {
        assert_eq!("r2".parse::<RegionCode>().unwrap(), RegionCode::R2);
        assert!("L9".parse::<LocationType>().is_err());
    }
}
