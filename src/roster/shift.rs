use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::RosterError;

/// Shift assigned to an employee on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "String")]
pub enum ShiftCode {
    #[default]
    Unassigned,
    Early,
    Late,
    Off,
    From10To15,
    From10To18,
    From12To21,
    From13To21,
    From15To20,
}

impl ShiftCode {
    /// Selectable codes, in the order they are offered.
    pub const ALL: [ShiftCode; 9] = [
        ShiftCode::Unassigned,
        ShiftCode::Early,
        ShiftCode::Late,
        ShiftCode::Off,
        ShiftCode::From10To15,
        ShiftCode::From10To18,
        ShiftCode::From12To21,
        ShiftCode::From13To21,
        ShiftCode::From15To20,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShiftCode::Unassigned => "",
            ShiftCode::Early => "早",
            ShiftCode::Late => "遅",
            ShiftCode::Off => "\u{2716}",
            ShiftCode::From10To15 => "10-15",
            ShiftCode::From10To18 => "10-18",
            ShiftCode::From12To21 => "12-21",
            ShiftCode::From13To21 => "13-21",
            ShiftCode::From15To20 => "15-20",
        }
    }
}

impl fmt::Display for ShiftCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShiftCode {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShiftCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| RosterError::UnknownShiftCode(s.to_string()))
    }
}

impl From<ShiftCode> for String {
    fn from(code: ShiftCode) -> Self {
        code.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_code() {
        for code in ShiftCode::ALL {
            assert_eq!(code.as_str().parse::<ShiftCode>().unwrap(), code);
        }
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert!(matches!(
            "night".parse::<ShiftCode>(),
            Err(RosterError::UnknownShiftCode(s)) if s == "night"
        ));
        assert!(" 早".parse::<ShiftCode>().is_err());
    }

    #[test]
    fn test_default_is_empty() {
        assert_eq!(ShiftCode::default().as_str(), "");
    }

    #[test]
    fn test_json_uses_labels() {
        let json = serde_json::to_string(&ShiftCode::Off).unwrap();
        assert_eq!(json, "\"\u{2716}\"");
        let json = serde_json::to_string(&ShiftCode::ALL).unwrap();
        assert_eq!(
            json,
            r#"["","早","遅","✖","10-15","10-18","12-21","13-21","15-20"]"#
        );
    }
}
