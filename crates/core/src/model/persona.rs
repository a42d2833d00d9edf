use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Coaching persona the hint service tailors its answers to. The name is
/// sent verbatim as the `resume_name` request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "&'static str")]
pub enum Persona {
    RecentGraduate,
    CareerSwitcher,
    ReturningParent,
    MilitaryVeteran,
    NewToTheCountry,
    MidCareerManager,
    FreelanceCreative,
}

impl Persona {
    pub const ALL: [Persona; 7] = [
        Persona::RecentGraduate,
        Persona::CareerSwitcher,
        Persona::ReturningParent,
        Persona::MilitaryVeteran,
        Persona::NewToTheCountry,
        Persona::MidCareerManager,
        Persona::FreelanceCreative,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RecentGraduate => "Recent Graduate",
            Self::CareerSwitcher => "Career Switcher",
            Self::ReturningParent => "Returning Parent",
            Self::MilitaryVeteran => "Military Veteran",
            Self::NewToTheCountry => "New to the Country",
            Self::MidCareerManager => "Mid-Career Manager",
            Self::FreelanceCreative => "Freelance Creative",
        }
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self::RecentGraduate
    }
}

impl From<Persona> for &'static str {
    fn from(persona: Persona) -> Self {
        persona.as_str()
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParsePersonaError {
    #[error("unknown persona: {0}")]
    Unknown(String),
}

impl FromStr for Persona {
    type Err = ParsePersonaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|persona| persona.as_str() == value)
            .ok_or_else(|| ParsePersonaError::Unknown(value.to_string()))
    }
}
