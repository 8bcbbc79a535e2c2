use chrono::Datelike;
use serde::Serialize;

use super::{RosterDay, RosterError, ShiftCode};

pub const DATE_HEADER: &str = "日付";
pub const WEEKDAY_HEADER: &str = "曜日";
pub const REMARK_HEADER: &str = "備考";

/// An employee name input whose trimmed value is non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeSlot {
    /// 1-based position of the name input
    pub slot: usize,
    pub name: String,
}

impl EmployeeSlot {
    /// Keep the non-blank names together with their 1-based slot index
    pub fn active_from_names<S: AsRef<str>>(names: &[S]) -> Vec<EmployeeSlot> {
        names
            .iter()
            .enumerate()
            .filter_map(|(i, name)| {
                let name = name.as_ref().trim();
                (!name.is_empty()).then(|| EmployeeSlot {
                    slot: i + 1,
                    name: name.to_string(),
                })
            })
            .collect()
    }

    pub fn column_label(&self) -> String {
        format!("{} ({})", self.slot, self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    Date,
    Weekday,
    Remark,
    /// Employee column addressed by its slot index
    Employee(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterRow {
    #[serde(flatten)]
    pub day: RosterDay,
    pub remark: String,
    /// One value per entry of `RosterTable::employees`, same order
    pub shifts: Vec<String>,
}

/// The roster grid: one row per date, one shift column per active employee
#[derive(Debug, Clone, PartialEq)]
pub struct RosterTable {
    employees: Vec<EmployeeSlot>,
    rows: Vec<RosterRow>,
}

impl RosterTable {
    pub fn create(days: Vec<RosterDay>, employees: Vec<EmployeeSlot>) -> Self {
        let rows = days
            .into_iter()
            .map(|day| RosterRow {
                day,
                remark: String::new(),
                shifts: vec![String::new(); employees.len()],
            })
            .collect();

        Self { employees, rows }
    }

    pub fn rows(&self) -> &[RosterRow] {
        &self.rows
    }

    pub fn employees(&self) -> &[EmployeeSlot] {
        &self.employees
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Year and month of the roster, taken from the first row
    pub fn year_month(&self) -> Option<(i32, u32)> {
        self.rows
            .first()
            .map(|row| (row.day.date.year(), row.day.date.month()))
    }

    pub fn column_keys(&self) -> Vec<ColumnKey> {
        let mut keys = vec![ColumnKey::Date, ColumnKey::Weekday, ColumnKey::Remark];
        keys.extend(self.employees.iter().map(|e| ColumnKey::Employee(e.slot)));
        keys
    }

    pub fn column_labels(&self) -> Vec<String> {
        let mut labels = vec![
            DATE_HEADER.to_string(),
            WEEKDAY_HEADER.to_string(),
            REMARK_HEADER.to_string(),
        ];
        labels.extend(self.employees.iter().map(EmployeeSlot::column_label));
        labels
    }

    fn employee_index(&self, slot: usize) -> Option<usize> {
        self.employees.iter().position(|e| e.slot == slot)
    }

    pub fn cell(&self, row: usize, key: ColumnKey) -> Option<&str> {
        let r = self.rows.get(row)?;
        match key {
            ColumnKey::Date => Some(&r.day.iso),
            ColumnKey::Weekday => Some(r.day.weekday),
            ColumnKey::Remark => Some(&r.remark),
            ColumnKey::Employee(slot) => {
                let idx = self.employee_index(slot)?;
                r.shifts.get(idx).map(String::as_str)
            }
        }
    }

    /// Replace one cell. The value is stored as given.
    pub fn set_cell(
        &mut self,
        row: usize,
        key: ColumnKey,
        value: impl Into<String>,
    ) -> Result<(), RosterError> {
        let len = self.rows.len();
        let idx = match key {
            ColumnKey::Date => return Err(RosterError::ReadOnlyColumn(DATE_HEADER)),
            ColumnKey::Weekday => return Err(RosterError::ReadOnlyColumn(WEEKDAY_HEADER)),
            ColumnKey::Remark => None,
            ColumnKey::Employee(slot) => Some(
                self.employee_index(slot)
                    .ok_or(RosterError::UnknownColumn(slot))?,
            ),
        };

        let r = self
            .rows
            .get_mut(row)
            .ok_or(RosterError::RowOutOfRange { row, len })?;

        match idx {
            Some(i) => r.shifts[i] = value.into(),
            None => r.remark = value.into(),
        }
        Ok(())
    }

    pub fn set_shift(
        &mut self,
        row: usize,
        slot: usize,
        code: ShiftCode,
    ) -> Result<(), RosterError> {
        self.set_cell(row, ColumnKey::Employee(slot), code.as_str())
    }

    pub fn set_remark(&mut self, row: usize, remark: impl Into<String>) -> Result<(), RosterError> {
        self.set_cell(row, ColumnKey::Remark, remark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::build_month_dates;

    fn table(names: &[&str]) -> RosterTable {
        RosterTable::create(
            build_month_dates(2024, 2).unwrap(),
            EmployeeSlot::active_from_names(names),
        )
    }

    #[test]
    fn test_blank_names_are_skipped() {
        let slots = EmployeeSlot::active_from_names(&["Alice", "  ", "Bob", "", "", "", "\t"]);
        assert_eq!(
            slots,
            vec![
                EmployeeSlot {
                    slot: 1,
                    name: "Alice".into(),
                },
                EmployeeSlot {
                    slot: 3,
                    name: "Bob".into(),
                },
            ]
        );
    }

    #[test]
    fn test_column_count_matches_active_slots() {
        let all = ["a", "b", "c", "d", "e", "f", "g"];
        for k in 0..=7 {
            let names: Vec<&str> = (0..7).map(|i| if i < k { all[i] } else { " " }).collect();
            let t = table(&names);
            assert_eq!(t.column_labels().len(), 3 + k);
            assert_eq!(t.column_keys().len(), 3 + k);
        }
    }

    #[test]
    fn test_labels_embed_slot_and_name() {
        let t = table(&["Alice", "", "Bob", "", "", "", ""]);
        assert_eq!(
            t.column_labels(),
            vec!["日付", "曜日", "備考", "1 (Alice)", "3 (Bob)"]
        );
        assert_eq!(t.row_count(), 29);
        assert_eq!(t.year_month(), Some((2024, 2)));
    }

    #[test]
    fn test_cells_default_to_empty() {
        let t = table(&["Alice", "", "Bob", "", "", "", ""]);
        for row in 0..t.row_count() {
            assert_eq!(t.cell(row, ColumnKey::Remark), Some(""));
            assert_eq!(t.cell(row, ColumnKey::Employee(1)), Some(""));
            assert_eq!(t.cell(row, ColumnKey::Employee(3)), Some(""));
        }
        assert_eq!(t.cell(0, ColumnKey::Date), Some("2024-02-01"));
        assert_eq!(t.cell(0, ColumnKey::Weekday), Some("木"));
        assert_eq!(t.cell(0, ColumnKey::Employee(2)), None);
        assert_eq!(t.cell(29, ColumnKey::Date), None);
    }

    #[test]
    fn test_set_shift_round_trip() {
        let mut t = table(&["Alice", "", "Bob", "", "", "", ""]);
        for code in ShiftCode::ALL {
            t.set_shift(4, 3, code).unwrap();
            assert_eq!(t.cell(4, ColumnKey::Employee(3)), Some(code.as_str()));
        }
    }

    #[test]
    fn test_set_cell_stores_arbitrary_text() {
        let mut t = table(&["Alice", "", "", "", "", "", ""]);
        t.set_cell(0, ColumnKey::Employee(1), "night").unwrap();
        assert_eq!(t.cell(0, ColumnKey::Employee(1)), Some("night"));
    }

    #[test]
    fn test_set_cell_errors() {
        let mut t = table(&["Alice", "", "", "", "", "", ""]);
        assert_eq!(
            t.set_cell(29, ColumnKey::Remark, "x"),
            Err(RosterError::RowOutOfRange { row: 29, len: 29 })
        );
        assert_eq!(
            t.set_shift(0, 2, ShiftCode::Early),
            Err(RosterError::UnknownColumn(2))
        );
        assert_eq!(
            t.set_cell(0, ColumnKey::Date, "2024-01-01"),
            Err(RosterError::ReadOnlyColumn(DATE_HEADER))
        );
        assert_eq!(t.cell(0, ColumnKey::Date), Some("2024-02-01"));
    }

    #[test]
    fn test_remark_edit_leaves_shifts_alone() {
        let mut t = table(&["Alice", "", "", "", "", "", ""]);
        t.set_remark(10, "inventory").unwrap();
        assert_eq!(t.cell(10, ColumnKey::Remark), Some("inventory"));
        assert_eq!(t.cell(10, ColumnKey::Employee(1)), Some(""));
        assert_eq!(t.cell(11, ColumnKey::Remark), Some(""));
    }
}
