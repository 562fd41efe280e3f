use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// One of the eight ABO/Rh blood classifications.
///
/// These are the only values accepted for donor registration and blood
/// requests. Parsing is case-insensitive (`"o+"` parses to [`BloodType::OPos`])
/// and the canonical rendering is always upper-cased (`"O+"`), which is also
/// the form stored in the donor file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BloodType {
    /// A positive
    #[serde(rename = "A+")]
    APos,
    /// A negative
    #[serde(rename = "A-")]
    ANeg,
    /// B positive
    #[serde(rename = "B+")]
    BPos,
    /// B negative
    #[serde(rename = "B-")]
    BNeg,
    /// AB positive
    #[serde(rename = "AB+")]
    AbPos,
    /// AB negative
    #[serde(rename = "AB-")]
    AbNeg,
    /// O positive
    #[serde(rename = "O+")]
    OPos,
    /// O negative
    #[serde(rename = "O-")]
    ONeg,
}

impl BloodType {
    /// All eight valid blood types, in ABO/Rh order.
    pub const ALL: [Self; 8] = [
        Self::APos,
        Self::ANeg,
        Self::BPos,
        Self::BNeg,
        Self::AbPos,
        Self::AbNeg,
        Self::OPos,
        Self::ONeg,
    ];

    /// The canonical upper-cased rendering, e.g. `"AB-"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::APos => "A+",
            Self::ANeg => "A-",
            Self::BPos => "B+",
            Self::BNeg => "B-",
            Self::AbPos => "AB+",
            Self::AbNeg => "AB-",
            Self::OPos => "O+",
            Self::ONeg => "O-",
        }
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the eight valid blood types.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("invalid blood type '{0}': expected one of A+, A-, B+, B-, AB+, AB-, O+, O-")]
pub struct ParseBloodTypeError(String);

impl FromStr for BloodType {
    type Err = ParseBloodTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A+" => Ok(Self::APos),
            "A-" => Ok(Self::ANeg),
            "B+" => Ok(Self::BPos),
            "B-" => Ok(Self::BNeg),
            "AB+" => Ok(Self::AbPos),
            "AB-" => Ok(Self::AbNeg),
            "O+" => Ok(Self::OPos),
            "O-" => Ok(Self::ONeg),
            _ => Err(ParseBloodTypeError(s.to_string())),
        }
    }
}

impl TryFrom<&str> for BloodType {
    type Error = ParseBloodTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_str(value)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("A+", BloodType::APos; "a pos upper")]
    #[test_case("a+", BloodType::APos; "a pos lower")]
    #[test_case("ab-", BloodType::AbNeg; "ab neg lower")]
    #[test_case("Ab+", BloodType::AbPos; "ab pos mixed case")]
    #[test_case("o+", BloodType::OPos; "o pos lower")]
    #[test_case("O-", BloodType::ONeg; "o neg upper")]
    #[test_case(" b- ", BloodType::BNeg; "surrounding whitespace")]
    fn parse_valid(input: &str, expected: BloodType) {
        assert_eq!(input.parse::<BloodType>().unwrap(), expected);
    }

    #[test_case(""; "empty")]
    #[test_case("X+"; "unknown group")]
    #[test_case("O"; "missing rh factor")]
    #[test_case("AB"; "missing rh factor ab")]
    #[test_case("O++"; "double rh factor")]
    #[test_case("A B+"; "inner whitespace")]
    fn parse_invalid(input: &str) {
        assert!(input.parse::<BloodType>().is_err());
    }

    #[test]
    fn display_is_canonical() {
        for bt in BloodType::ALL {
            assert_eq!(bt.to_string(), bt.as_str());
            // canonical form parses back to itself
            assert_eq!(bt.as_str().parse::<BloodType>().unwrap(), bt);
        }
    }

    #[test]
    fn serde_uses_canonical_string() {
        let json = serde_json::to_string(&BloodType::AbNeg).unwrap();
        assert_eq!(json, r#""AB-""#);

        let parsed: BloodType = serde_json::from_str(r#""O+""#).unwrap();
        assert_eq!(parsed, BloodType::OPos);
    }

    #[test]
    fn error_display_names_the_input() {
        let err = "x+".parse::<BloodType>().unwrap_err();
        assert!(err.to_string().contains("x+"));
    }
}
