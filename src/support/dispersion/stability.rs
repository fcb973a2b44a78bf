use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::DomainError;

/// Pasquill-Gifford atmospheric stability class.
///
/// Ordered from most turbulent ([`A`](StabilityClass::A)) to most stable
/// ([`F`](StabilityClass::F)). The external representation is a single letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StabilityClass {
    /// Extremely unstable.
    A,
    /// Moderately unstable.
    B,
    /// Slightly unstable.
    C,
    /// Neutral.
    D,
    /// Slightly stable.
    E,
    /// Moderately stable.
    F,
}

impl StabilityClass {
    /// All six classes, most unstable first.
    pub const ALL: [Self; 6] = [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F];

    /// Returns `true` for the unstable-to-slightly-unstable classes `A`, `B`, `C`.
    #[must_use]
    pub fn is_unstable(self) -> bool {
        matches!(self, Self::A | Self::B | Self::C)
    }

    /// Returns the one-letter representation.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
        }
    }
}

impl TryFrom<char> for StabilityClass {
    type Error = DomainError;

    /// Converts a letter, in either case, to a stability class.
    fn try_from(letter: char) -> Result<Self, Self::Error> {
        match letter.to_ascii_uppercase() {
            'A' => Ok(Self::A),
            'B' => Ok(Self::B),
            'C' => Ok(Self::C),
            'D' => Ok(Self::D),
            'E' => Ok(Self::E),
            'F' => Ok(Self::F),
            _ => Err(DomainError::InvalidStabilityClass(letter.to_string())),
        }
    }
}

impl FromStr for StabilityClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::try_from(letter)
                .map_err(|_| DomainError::InvalidStabilityClass(s.to_owned())),
            _ => Err(DomainError::InvalidStabilityClass(s.to_owned())),
        }
    }
}

impl TryFrom<String> for StabilityClass {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<StabilityClass> for String {
    fn from(class: StabilityClass) -> Self {
        class.to_string()
    }
}

impl fmt::Display for StabilityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
