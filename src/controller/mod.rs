use crate::error::{AppError, Result};
use crate::models::form::{
    CellField, FieldError, GenerateRequest, MONTH_RANGE, YEAR_RANGE, shift_field_name,
};
use crate::roster::{
    ColumnKey, EmployeeSlot, RosterError, RosterTable, ShiftCode, build_month_dates,
};
use crate::session::Session;

/// A single user action against a session
#[derive(Debug, Clone, PartialEq)]
pub enum RosterEvent {
    Generate(GenerateRequest),
    SetShift {
        row: usize,
        slot: usize,
        code: ShiftCode,
    },
    SetRemark { row: usize, text: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Generated { rows: usize, columns: usize },
    GenerateFailed(String),
    CellUpdated,
}

/// Apply one event to the session
pub fn dispatch(session: &mut Session, event: RosterEvent) -> Result<Outcome> {
    match event {
        RosterEvent::Generate(request) => Ok(generate(session, request)),
        edit_event => {
            session.error = None;
            let table = session.table.as_mut().ok_or(AppError::NoTable)?;
            edit(table, edit_event)?;
            Ok(Outcome::CellUpdated)
        }
    }
}

/// Apply every edit to a working copy of the table and store it back in one
/// replace. Nothing is kept if any edit fails.
pub fn apply_edits<I>(session: &mut Session, events: I) -> Result<usize>
where
    I: IntoIterator<Item = RosterEvent>,
{
    session.error = None;
    let mut working = session.table.clone().ok_or(AppError::NoTable)?;

    let mut applied = 0;
    for event in events {
        edit(&mut working, event)?;
        applied += 1;
    }

    session.table = Some(working);
    Ok(applied)
}

/// Apply a submitted editor form. A selector still holding the stored value
/// is skipped, so a stored value outside the vocabulary survives the submit.
/// Any other shift value must be a known code.
pub fn submit_cells(session: &mut Session, fields: Vec<CellField>) -> Result<usize> {
    let table = session.table.as_ref().ok_or(AppError::NoTable)?;

    let mut events = Vec::with_capacity(fields.len());
    for field in fields {
        match field {
            CellField::Shift { row, slot, value } => {
                if table.cell(row, ColumnKey::Employee(slot)) == Some(value.as_str()) {
                    continue;
                }
                let code = value
                    .parse::<ShiftCode>()
                    .map_err(|e| FieldError::InvalidValue {
                        field: shift_field_name(row, slot),
                        message: e.to_string(),
                    })?;
                events.push(RosterEvent::SetShift { row, slot, code });
            }
            CellField::Remark { row, text } => events.push(RosterEvent::SetRemark { row, text }),
        }
    }

    apply_edits(session, events)
}

fn edit(table: &mut RosterTable, event: RosterEvent) -> Result<()> {
    match event {
        RosterEvent::SetShift { row, slot, code } => table.set_shift(row, slot, code)?,
        RosterEvent::SetRemark { row, text } => table.set_remark(row, text)?,
        RosterEvent::Generate(_) => {
            return Err(AppError::BadRequest(
                "generate cannot be applied as a cell edit".into(),
            ));
        }
    }
    Ok(())
}

fn generate(session: &mut Session, request: GenerateRequest) -> Outcome {
    let result = build_table(&request);
    session.form = request;

    match result {
        Ok(table) => {
            let outcome = Outcome::Generated {
                rows: table.row_count(),
                columns: table.column_keys().len(),
            };
            tracing::info!(
                "Generated roster for session {}: {:?}",
                session.id,
                outcome
            );
            session.table = Some(table);
            session.error = None;
            outcome
        }
        Err(e) => {
            tracing::warn!(
                "Roster generation failed for session {}: {}",
                session.id,
                e
            );
            let message = format!("エラーが発生しました: {e}");
            session.error = Some(message.clone());
            Outcome::GenerateFailed(message)
        }
    }
}

fn build_table(request: &GenerateRequest) -> std::result::Result<RosterTable, RosterError> {
    let year: i32 = parse_number("year", &request.year)?;
    let month: u32 = parse_number("month", &request.month)?;

    if !YEAR_RANGE.contains(&year) {
        return Err(RosterError::YearOutOfRange(year));
    }
    if !MONTH_RANGE.contains(&month) {
        return Err(RosterError::MonthOutOfRange(month));
    }

    let days = build_month_dates(year, month)?;
    let employees = EmployeeSlot::active_from_names(&request.names);
    Ok(RosterTable::create(days, employees))
}

fn parse_number<T: std::str::FromStr>(
    field: &'static str,
    value: &str,
) -> std::result::Result<T, RosterError> {
    value.trim().parse().map_err(|_| RosterError::NotANumber {
        field,
        value: value.to_string(),
    })
}
