//! Flat feature schema: the two category variants and their column layout.
//!
//! Column names and order are a contract with the pre-fit transformer
//! artifacts — they must match the schema the models were trained on
//! byte-for-byte, including historical quirks (`Neworold`, `No of rooms`
//! for the additional-room count, `BED` in upper case). Nothing in this
//! crate validates that contract; a mismatch only surfaces inside the
//! transformer call.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

/// Columns of an unfurnished record, in transformer order.
pub const UNFURNISHED_COLUMNS: [&str; 8] = [
    "balconies",
    "bathroom",
    "Neworold",
    "No of rooms",
    "Area",
    "Total rooms",
    "Car Parking",
    "Power Backup",
];

/// Columns of a furnished record: the unfurnished eight followed by the
/// eight amenity flags, in transformer order.
pub const FURNISHED_COLUMNS: [&str; 16] = [
    "balconies",
    "bathroom",
    "Neworold",
    "No of rooms",
    "Area",
    "Total rooms",
    "Car Parking",
    "Power Backup",
    "AC",
    "TV",
    "Refrigerator",
    "Sofa",
    "Washing Machine",
    "Gas connection",
    "BED",
    "Wardrobe",
];

// ---------------------------------------------------------------------------
// Field enums
// ---------------------------------------------------------------------------

/// A Yes/No form field (car parking, power backup, amenity flags).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    /// Category label as the training data spelled it.
    pub fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }

    /// Fixed 0/1 indicator used when the value crosses the inference
    /// boundary. This is a dtype adaptation only; learned encoding lives
    /// inside the transformer artifact.
    pub fn indicator(self) -> f32 {
        match self {
            Self::Yes => 1.0,
            Self::No => 0.0,
        }
    }

    fn cell(self) -> Cell {
        Cell::Category {
            label: self.label(),
            indicator: self.indicator(),
        }
    }
}

/// Property-age category (`Neworold` column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyAge {
    Old,
    New,
}

impl PropertyAge {
    pub fn label(self) -> &'static str {
        match self {
            Self::Old => "Old",
            Self::New => "New",
        }
    }

    pub fn indicator(self) -> f32 {
        match self {
            Self::Old => 0.0,
            Self::New => 1.0,
        }
    }

    fn cell(self) -> Cell {
        Cell::Category {
            label: self.label(),
            indicator: self.indicator(),
        }
    }
}

/// Which of the two model/transformer pairs a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlatCategory {
    Unfurnished,
    Furnished,
}

impl FlatCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Unfurnished => "unfurnished",
            Self::Furnished => "furnished",
        }
    }
}

// ---------------------------------------------------------------------------
// Record cells
// ---------------------------------------------------------------------------

/// One cell of a single-row feature table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    /// Raw numeric value, passed through unchanged.
    Number(f64),
    /// Categorical value: the training-data label plus its fixed indicator.
    Category { label: &'static str, indicator: f32 },
}

/// A single-row feature table: ordered (column name, cell) pairs, built per
/// request and discarded once the estimate is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatRecord {
    columns: Vec<(&'static str, Cell)>,
}

impl FlatRecord {
    /// Column names in transformer order.
    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|(name, _)| *name).collect()
    }

    /// Ordered (name, cell) pairs.
    pub fn cells(&self) -> &[(&'static str, Cell)] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Flat variants
// ---------------------------------------------------------------------------

/// Attributes of an unfurnished flat, as entered in the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnfurnishedFlat {
    pub balconies: f64,
    pub bathroom: f64,
    pub neworold: PropertyAge,
    pub additional_rooms: f64,
    pub area: f64,
    pub total_rooms: f64,
    pub car_parking: YesNo,
    pub power_backup: YesNo,
}

impl UnfurnishedFlat {
    /// Assemble the single-row feature table for the unfurnished
    /// transformer. Order matches [`UNFURNISHED_COLUMNS`].
    pub fn to_record(&self) -> FlatRecord {
        FlatRecord {
            columns: vec![
                ("balconies", Cell::Number(self.balconies)),
                ("bathroom", Cell::Number(self.bathroom)),
                ("Neworold", self.neworold.cell()),
                ("No of rooms", Cell::Number(self.additional_rooms)),
                ("Area", Cell::Number(self.area)),
                ("Total rooms", Cell::Number(self.total_rooms)),
                ("Car Parking", self.car_parking.cell()),
                ("Power Backup", self.power_backup.cell()),
            ],
        }
    }
}

/// Attributes of a furnished flat: the unfurnished fields plus eight
/// amenity flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnishedFlat {
    #[serde(flatten)]
    pub base: UnfurnishedFlat,
    pub ac: YesNo,
    pub tv: YesNo,
    pub refrigerator: YesNo,
    pub sofa: YesNo,
    pub washing_machine: YesNo,
    pub gas_connection: YesNo,
    pub bed: YesNo,
    pub wardrobe: YesNo,
}

impl FurnishedFlat {
    /// Assemble the single-row feature table for the furnished transformer.
    /// Order matches [`FURNISHED_COLUMNS`].
    pub fn to_record(&self) -> FlatRecord {
        let mut record = self.base.to_record();
        record.columns.extend([
            ("AC", self.ac.cell()),
            ("TV", self.tv.cell()),
            ("Refrigerator", self.refrigerator.cell()),
            ("Sofa", self.sofa.cell()),
            ("Washing Machine", self.washing_machine.cell()),
            ("Gas connection", self.gas_connection.cell()),
            ("BED", self.bed.cell()),
            ("Wardrobe", self.wardrobe.cell()),
        ]);
        record
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_unfurnished() -> UnfurnishedFlat {
        UnfurnishedFlat {
            balconies: 1.0,
            bathroom: 2.0,
            neworold: PropertyAge::New,
            additional_rooms: 0.0,
            area: 650.0,
            total_rooms: 2.0,
            car_parking: YesNo::Yes,
            power_backup: YesNo::No,
        }
    }

    fn sample_furnished() -> FurnishedFlat {
        FurnishedFlat {
            base: sample_unfurnished(),
            ac: YesNo::Yes,
            tv: YesNo::No,
            refrigerator: YesNo::Yes,
            sofa: YesNo::No,
            washing_machine: YesNo::Yes,
            gas_connection: YesNo::No,
            bed: YesNo::Yes,
            wardrobe: YesNo::No,
        }
    }

    // -- schema completeness: exact names, exact order, nothing extra --

    #[test]
    fn unfurnished_record_matches_schema() {
        let record = sample_unfurnished().to_record();
        assert_eq!(record.len(), 8);
        assert_eq!(record.column_names(), UNFURNISHED_COLUMNS.to_vec());
    }

    #[test]
    fn furnished_record_matches_schema() {
        let record = sample_furnished().to_record();
        assert_eq!(record.len(), 16);
        assert_eq!(record.column_names(), FURNISHED_COLUMNS.to_vec());
    }

    #[test]
    fn furnished_columns_start_with_unfurnished_columns() {
        assert_eq!(&FURNISHED_COLUMNS[..8], &UNFURNISHED_COLUMNS[..]);
    }

    // -- cell contents --

    #[test]
    fn numeric_cells_pass_through() {
        let record = sample_unfurnished().to_record();
        assert_eq!(record.cells()[4], ("Area", Cell::Number(650.0)));
        assert_eq!(record.cells()[5], ("Total rooms", Cell::Number(2.0)));
    }

    #[test]
    fn category_cells_carry_label_and_indicator() {
        let record = sample_unfurnished().to_record();
        assert_eq!(
            record.cells()[6],
            (
                "Car Parking",
                Cell::Category {
                    label: "Yes",
                    indicator: 1.0
                }
            )
        );
        assert_eq!(
            record.cells()[7],
            (
                "Power Backup",
                Cell::Category {
                    label: "No",
                    indicator: 0.0
                }
            )
        );
    }

    #[test]
    fn property_age_indicator() {
        assert_eq!(PropertyAge::New.indicator(), 1.0);
        assert_eq!(PropertyAge::Old.indicator(), 0.0);
        assert_eq!(PropertyAge::New.label(), "New");
    }

    // -- serde: form values deserialize with their original labels --

    #[test]
    fn yes_no_deserializes_from_form_labels() {
        assert_eq!(serde_json::from_str::<YesNo>("\"Yes\"").unwrap(), YesNo::Yes);
        assert_eq!(serde_json::from_str::<YesNo>("\"No\"").unwrap(), YesNo::No);
        assert!(serde_json::from_str::<YesNo>("\"yes\"").is_err());
    }

    #[test]
    fn furnished_flat_deserializes_flattened() {
        let json = serde_json::json!({
            "balconies": 1.0,
            "bathroom": 2.0,
            "neworold": "New",
            "additional_rooms": 0.0,
            "area": 650.0,
            "total_rooms": 2.0,
            "car_parking": "Yes",
            "power_backup": "No",
            "ac": "Yes",
            "tv": "No",
            "refrigerator": "Yes",
            "sofa": "No",
            "washing_machine": "Yes",
            "gas_connection": "No",
            "bed": "Yes",
            "wardrobe": "No"
        });
        let flat: FurnishedFlat = serde_json::from_value(json).unwrap();
        assert_eq!(flat, sample_furnished());
    }

    #[test]
    fn category_labels() {
        assert_eq!(FlatCategory::Unfurnished.label(), "unfurnished");
        assert_eq!(FlatCategory::Furnished.label(), "furnished");
    }
}
