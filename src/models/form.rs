use std::collections::HashMap;
use std::ops::RangeInclusive;

use serde::Deserialize;

use crate::roster::EMPLOYEE_SLOTS;

/// Years offered by the year selector
pub const YEAR_RANGE: RangeInclusive<i32> = 2023..=2030;
/// Months offered by the month selector
pub const MONTH_RANGE: RangeInclusive<u32> = 1..=12;

/// Fields of the roster generation form. Year and month are kept as text so
/// a malformed value reaches the Generate action instead of failing
/// extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub employee_1: String,
    #[serde(default)]
    pub employee_2: String,
    #[serde(default)]
    pub employee_3: String,
    #[serde(default)]
    pub employee_4: String,
    #[serde(default)]
    pub employee_5: String,
    #[serde(default)]
    pub employee_6: String,
    #[serde(default)]
    pub employee_7: String,
}

impl GenerateForm {
    pub fn into_request(self) -> GenerateRequest {
        GenerateRequest {
            year: self.year,
            month: self.month,
            names: [
                self.employee_1,
                self.employee_2,
                self.employee_3,
                self.employee_4,
                self.employee_5,
                self.employee_6,
                self.employee_7,
            ],
        }
    }
}

/// Inputs of one Generate action as submitted, remembered by the session so
/// the form re-renders with what was entered
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub year: String,
    pub month: String,
    pub names: [String; EMPLOYEE_SLOTS],
}

impl GenerateRequest {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year: year.to_string(),
            month: month.to_string(),
            names: Default::default(),
        }
    }
}

/// One field of the editor form. Shift values are checked against the
/// vocabulary when they are applied.
#[derive(Debug, Clone, PartialEq)]
pub enum CellField {
    Shift {
        row: usize,
        slot: usize,
        value: String,
    },
    Remark { row: usize, text: String },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("unrecognised field {0:?}")]
    UnknownField(String),
    #[error("field {field:?}: {message}")]
    InvalidValue { field: String, message: String },
}

pub fn shift_field_name(row: usize, slot: usize) -> String {
    format!("shift_{row}_{slot}")
}

pub fn remark_field_name(row: usize) -> String {
    format!("remark_{row}")
}

/// Parse the submitted editor form into cell fields, ordered by row and slot
pub fn parse_cell_fields(form: &HashMap<String, String>) -> Result<Vec<CellField>, FieldError> {
    let mut fields = form
        .iter()
        .map(|(name, value)| parse_cell_field(name, value))
        .collect::<Result<Vec<_>, _>>()?;

    fields.sort_by_key(|field| match field {
        CellField::Remark { row, .. } => (*row, 0),
        CellField::Shift { row, slot, .. } => (*row, *slot),
    });
    Ok(fields)
}

fn parse_cell_field(name: &str, value: &str) -> Result<CellField, FieldError> {
    let unknown = || FieldError::UnknownField(name.to_string());

    if let Some(rest) = name.strip_prefix("shift_") {
        let (row, slot) = rest.split_once('_').ok_or_else(unknown)?;
        let row = row.parse().map_err(|_| unknown())?;
        let slot = slot.parse().map_err(|_| unknown())?;
        return Ok(CellField::Shift {
            row,
            slot,
            value: value.to_string(),
        });
    }

    if let Some(row) = name.strip_prefix("remark_") {
        let row = row.parse().map_err(|_| unknown())?;
        return Ok(CellField::Remark {
            row,
            text: value.to_string(),
        });
    }

    Err(unknown())
}

/// Body of `PUT /api/roster/cells`
#[derive(Debug, Deserialize)]
pub struct ShiftUpdate {
    pub row: usize,
    pub slot: usize,
    /// Checked against the shift vocabulary by the handler
    pub value: String,
}

/// Body of `PUT /api/roster/remarks`
#[derive(Debug, Deserialize)]
pub struct RemarkUpdate {
    pub row: usize,
    pub remark: String,
}
