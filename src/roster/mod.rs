pub mod calendar;
pub mod shift;
pub mod table;

pub use calendar::{RosterDay, build_month_dates};
pub use shift::ShiftCode;
pub use table::{ColumnKey, EmployeeSlot, RosterTable};

/// Number of employee name inputs offered by the form.
pub const EMPLOYEE_SLOTS: usize = 7;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RosterError {
    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),
    #[error("{year}-{month:02}-01 is not a valid date")]
    InvalidDate { year: i32, month: u32 },
    #[error("{field} must be a whole number, got {value:?}")]
    NotANumber { field: &'static str, value: String },
    #[error("year {0} is outside the selectable range")]
    YearOutOfRange(i32),
    #[error("month {0} is outside the selectable range")]
    MonthOutOfRange(u32),
    #[error("row {row} is out of range (table has {len} rows)")]
    RowOutOfRange { row: usize, len: usize },
    #[error("no employee column for slot {0}")]
    UnknownColumn(usize),
    #[error("column {0} is derived from the date and cannot be edited")]
    ReadOnlyColumn(&'static str),
    #[error("unknown shift code {0:?}")]
    UnknownShiftCode(String),
}
