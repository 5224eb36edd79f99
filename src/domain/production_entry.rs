use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::domain::assignment::Assignment;

/// The twelve selectable one-hour production slots, 9 A.M. through 9 P.M.
pub const TIME_SLOTS: [&str; 12] = [
    "9 AM - 10 AM",
    "10 AM - 11 AM",
    "11 AM - 12 PM",
    "12 PM - 1 PM",
    "1 PM - 2 PM",
    "2 PM - 3 PM",
    "3 PM - 4 PM",
    "4 PM - 5 PM",
    "5 PM - 6 PM",
    "6 PM - 7 PM",
    "7 PM - 8 PM",
    "8 PM - 9 PM",
];

pub const MIN_FRAME_LENGTHS: usize = 4;

/// The shift an entry is recorded against. Required on every entry and
/// distinct from the shift inherited from the main item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Shift {
    Day,
    Night,
}

impl Shift {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Day" | "day" => Some(Shift::Day),
            "Night" | "night" => Some(Shift::Night),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Shift::Day => "Day",
            Shift::Night => "Night",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameLengthError {
    #[error("at least {MIN_FRAME_LENGTHS} frame lengths are required, got {0}")]
    TooFew(usize),
    #[error("frame length {0:?} is not a 3-digit number")]
    BadPart(String),
}

/// Parses the comma-separated frame-length field. Each part is trimmed and
/// must match `^\d{3}$`; at least [`MIN_FRAME_LENGTHS`] parts are required.
pub fn parse_frame_lengths(input: &str) -> Result<Vec<u16>, FrameLengthError> {
    let pattern = Regex::new(r"^\d{3}$").unwrap();
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();

    if parts.len() < MIN_FRAME_LENGTHS {
        return Err(FrameLengthError::TooFew(parts.len()));
    }

    let mut lengths = Vec::with_capacity(parts.len());
    for part in parts {
        if !pattern.is_match(part) {
            return Err(FrameLengthError::BadPart(part.to_string()));
        }
        match part.parse::<u16>() {
            Ok(n) => lengths.push(n),
            Err(_) => return Err(FrameLengthError::BadPart(part.to_string())),
        }
    }

    Ok(lengths)
}

/// Why a submission was blocked, in the order the form checks.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please confirm the entry before submitting.")]
    NotConfirmed,
    #[error("Please select a shift.")]
    ShiftMissing,
    #[error("Frame lengths must be at least {MIN_FRAME_LENGTHS} comma-separated 3-digit values.")]
    FrameLengths(#[from] FrameLengthError),
}

/// One shift's recorded output. Built by the submission form, transmitted
/// once, discarded when the form closes.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductionEntry {
    pub shift: Shift,
    pub time: String,
    pub frame_lengths: Vec<u16>,
    pub number_of_box: u32,
    pub box_weight: f64,
    pub frame_weight: f64,
    pub description: String,
    pub machine_id: String,
    pub main_item_id: String,
    pub employee_ids: Vec<String>,
    pub date: NaiveDate,
}

/// Wire shape for one entry inside the `production` field. Weights go over
/// the wire unit-suffixed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProductionEntryWire<'a> {
    shift: &'a str,
    time: &'a str,
    frame_length: &'a [u16],
    number_of_box: u32,
    box_weight: String,
    frame_weight: String,
    description: &'a str,
    machine_id: &'a str,
    main_item_id: &'a str,
    employee_id: &'a [String],
    date: String,
}

impl ProductionEntry {
    fn wire(&self) -> ProductionEntryWire<'_> {
        ProductionEntryWire {
            shift: self.shift.as_str(),
            time: &self.time,
            frame_length: &self.frame_lengths,
            number_of_box: self.number_of_box,
            box_weight: format!("{}kg", self.box_weight),
            frame_weight: format!("{}kg", self.frame_weight),
            description: &self.description,
            machine_id: &self.machine_id,
            main_item_id: &self.main_item_id,
            employee_id: &self.employee_ids,
            date: self.date.format("%Y-%m-%d").to_string(),
        }
    }

    /// JSON-encoded single-entry array, the exact shape the assign-machine
    /// endpoint expects in its `production` field.
    pub fn to_production_json(&self) -> String {
        serde_json::to_string(&[self.wire()]).unwrap_or_else(|_| "[]".to_string())
    }
}

/// Everything the submission form collects, mirroring the form controls
/// one-to-one so the component itself can stay dumb.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionDraft {
    pub time: String,
    pub shift: Option<Shift>,
    pub frame_lengths_input: String,
    pub number_of_box: u32,
    pub box_weight: f64,
    pub frame_weight: f64,
    pub description: String,
    pub confirmed: bool,
}

impl Default for SubmissionDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionDraft {
    pub fn new() -> Self {
        Self {
            time: TIME_SLOTS[0].to_string(),
            shift: None,
            frame_lengths_input: String::new(),
            number_of_box: 1,
            box_weight: 0.0,
            frame_weight: 0.0,
            description: String::new(),
            confirmed: false,
        }
    }

    /// Validates in the order the form enforces: confirmation first, then
    /// shift, then the frame-length pattern. The first failing rule wins and
    /// no network call is made.
    pub fn validate(&self) -> Result<Vec<u16>, ValidationError> {
        if !self.confirmed {
            return Err(ValidationError::NotConfirmed);
        }
        if self.shift.is_none() {
            return Err(ValidationError::ShiftMissing);
        }
        Ok(parse_frame_lengths(&self.frame_lengths_input)?)
    }

    /// Builds the entry to transmit against the selected assignment. A blank
    /// description goes over the wire as the literal "NA".
    pub fn to_entry(
        &self,
        assignment: &Assignment,
        date: NaiveDate,
    ) -> Result<ProductionEntry, ValidationError> {
        let frame_lengths = self.validate()?;
        let shift = self.shift.ok_or(ValidationError::ShiftMissing)?;

        let description = if self.description.trim().is_empty() {
            "NA".to_string()
        } else {
            self.description.trim().to_string()
        };

        Ok(ProductionEntry {
            shift,
            time: self.time.clone(),
            frame_lengths,
            number_of_box: self.number_of_box,
            box_weight: self.box_weight,
            frame_weight: self.frame_weight,
            description,
            machine_id: assignment.machine.id.clone(),
            main_item_id: assignment.main_item.id.clone(),
            employee_ids: assignment.employee_ids(),
            date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assignment::{EmployeeRef, Machine, MainItem};
    use rstest::rstest;

    fn sample_assignment() -> Assignment {
        Assignment {
            id: "a-1".to_string(),
            machine: Machine {
                id: "m-01".to_string(),
                name: "Extruder 2".to_string(),
            },
            main_item: MainItem {
                id: "i-07".to_string(),
                item_no: "3B-1042".to_string(),
                shift: "Day".to_string(),
                operator: "Asha".to_string(),
                helper: "Ravi".to_string(),
                company: "3B Profiles".to_string(),
            },
            employees: vec![
                EmployeeRef {
                    id: "e-1".to_string(),
                    name: "Asha".to_string(),
                },
                EmployeeRef {
                    id: "e-2".to_string(),
                    name: "Ravi".to_string(),
                },
            ],
        }
    }

    fn valid_draft() -> SubmissionDraft {
        SubmissionDraft {
            shift: Some(Shift::Day),
            frame_lengths_input: "455,455,452,454".to_string(),
            number_of_box: 2,
            box_weight: 12.5,
            frame_weight: 3.2,
            confirmed: true,
            ..SubmissionDraft::new()
        }
    }

    #[rstest]
    #[case("455,455,452,454", Ok(vec![455, 455, 452, 454]))]
    #[case("455, 455 ,452,454", Ok(vec![455, 455, 452, 454]))]
    #[case("100,200,300,400,500", Ok(vec![100, 200, 300, 400, 500]))]
    #[case("455,45,452,454", Err(FrameLengthError::BadPart("45".to_string())))]
    #[case("455,455,452", Err(FrameLengthError::TooFew(3)))]
    #[case("", Err(FrameLengthError::TooFew(1)))]
    #[case("455,455,452,454,", Err(FrameLengthError::BadPart(String::new())))]
    #[case("455,4555,452,454", Err(FrameLengthError::BadPart("4555".to_string())))]
    #[case("455,45a,452,454", Err(FrameLengthError::BadPart("45a".to_string())))]
    fn test_parse_frame_lengths(
        #[case] input: &str,
        #[case] expected: Result<Vec<u16>, FrameLengthError>,
    ) {
        assert_eq!(parse_frame_lengths(input), expected);
    }

    #[test]
    fn test_twelve_time_slots() {
        assert_eq!(TIME_SLOTS.len(), 12);
        assert_eq!(TIME_SLOTS[0], "9 AM - 10 AM");
        assert_eq!(TIME_SLOTS[11], "8 PM - 9 PM");
    }

    #[test]
    fn test_validation_blocks_without_confirmation() {
        let draft = SubmissionDraft {
            confirmed: false,
            ..valid_draft()
        };
        assert_eq!(draft.validate(), Err(ValidationError::NotConfirmed));
    }

    #[test]
    fn test_confirmation_is_checked_before_anything_else() {
        // Everything else is invalid too; the confirmation failure wins.
        let draft = SubmissionDraft {
            confirmed: false,
            shift: None,
            frame_lengths_input: "bad".to_string(),
            ..SubmissionDraft::new()
        };
        assert_eq!(draft.validate(), Err(ValidationError::NotConfirmed));
    }

    #[test]
    fn test_shift_is_checked_before_frame_lengths() {
        let draft = SubmissionDraft {
            shift: None,
            frame_lengths_input: "bad".to_string(),
            confirmed: true,
            ..SubmissionDraft::new()
        };
        assert_eq!(draft.validate(), Err(ValidationError::ShiftMissing));
    }

    #[test]
    fn test_frame_length_failure_is_reported_last() {
        let draft = SubmissionDraft {
            frame_lengths_input: "455,45,452,454".to_string(),
            ..valid_draft()
        };
        assert_eq!(
            draft.validate(),
            Err(ValidationError::FrameLengths(FrameLengthError::BadPart(
                "45".to_string()
            )))
        );
    }

    #[test]
    fn test_valid_draft_passes() {
        assert_eq!(valid_draft().validate(), Ok(vec![455, 455, 452, 454]));
    }

    #[test]
    fn test_blank_description_defaults_to_na() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let entry = valid_draft().to_entry(&sample_assignment(), date).unwrap();
        assert_eq!(entry.description, "NA");

        let draft = SubmissionDraft {
            description: "  mold change at 3 PM  ".to_string(),
            ..valid_draft()
        };
        let entry = draft.to_entry(&sample_assignment(), date).unwrap();
        assert_eq!(entry.description, "mold change at 3 PM");
    }

    #[test]
    fn test_entry_carries_assignment_references() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let entry = valid_draft().to_entry(&sample_assignment(), date).unwrap();
        assert_eq!(entry.machine_id, "m-01");
        assert_eq!(entry.main_item_id, "i-07");
        assert_eq!(entry.employee_ids, vec!["e-1", "e-2"]);
    }

    #[test]
    fn test_production_json_is_a_single_entry_array() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let entry = valid_draft().to_entry(&sample_assignment(), date).unwrap();
        let json = entry.to_production_json();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let array = parsed.as_array().unwrap();
        assert_eq!(array.len(), 1);

        let wire = &array[0];
        assert_eq!(wire["shift"], "Day");
        assert_eq!(wire["time"], "9 AM - 10 AM");
        assert_eq!(wire["frameLength"], serde_json::json!([455, 455, 452, 454]));
        assert_eq!(wire["numberOfBox"], 2);
        assert_eq!(wire["boxWeight"], "12.5kg");
        assert_eq!(wire["frameWeight"], "3.2kg");
        assert_eq!(wire["description"], "NA");
        assert_eq!(wire["machineId"], "m-01");
        assert_eq!(wire["mainItemId"], "i-07");
        assert_eq!(wire["employeeId"], serde_json::json!(["e-1", "e-2"]));
        assert_eq!(wire["date"], "2025-03-14");
    }

    #[test]
    fn test_shift_parse() {
        assert_eq!(Shift::parse("Day"), Some(Shift::Day));
        assert_eq!(Shift::parse("night"), Some(Shift::Night));
        assert_eq!(Shift::parse("Evening"), None);
        assert_eq!(Shift::parse(""), None);
    }
}
