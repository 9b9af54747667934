//! Prebuilt voice catalog.

use crate::{Error, ErrorContext};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A prebuilt synthetic voice.
///
/// Serialized with the exact casing the service expects (`"Kore"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Voice {
    Zephyr,
    Puck,
    Charon,
    Kore,
    Fenrir,
    Leda,
    Orus,
    Aoede,
    Callirrhoe,
    Autonoe,
    Enceladus,
    Iapetus,
    Umbriel,
    Algieba,
    Despina,
    Erinome,
    Algenib,
    Rasalgethi,
    Laomedeia,
    Achernar,
    Alnilam,
    Schedar,
    Gacrux,
    Pulcherrima,
    Achird,
    Zubenelgenubi,
    Vindemiatrix,
    Sadachbia,
    Sadaltager,
    Sulafat,
}

impl Voice {
    pub const ALL: [Voice; 30] = [
        Voice::Zephyr,
        Voice::Puck,
        Voice::Charon,
        Voice::Kore,
        Voice::Fenrir,
        Voice::Leda,
        Voice::Orus,
        Voice::Aoede,
        Voice::Callirrhoe,
        Voice::Autonoe,
        Voice::Enceladus,
        Voice::Iapetus,
        Voice::Umbriel,
        Voice::Algieba,
        Voice::Despina,
        Voice::Erinome,
        Voice::Algenib,
        Voice::Rasalgethi,
        Voice::Laomedeia,
        Voice::Achernar,
        Voice::Alnilam,
        Voice::Schedar,
        Voice::Gacrux,
        Voice::Pulcherrima,
        Voice::Achird,
        Voice::Zubenelgenubi,
        Voice::Vindemiatrix,
        Voice::Sadachbia,
        Voice::Sadaltager,
        Voice::Sulafat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::Zephyr => "Zephyr",
            Voice::Puck => "Puck",
            Voice::Charon => "Charon",
            Voice::Kore => "Kore",
            Voice::Fenrir => "Fenrir",
            Voice::Leda => "Leda",
            Voice::Orus => "Orus",
            Voice::Aoede => "Aoede",
            Voice::Callirrhoe => "Callirrhoe",
            Voice::Autonoe => "Autonoe",
            Voice::Enceladus => "Enceladus",
            Voice::Iapetus => "Iapetus",
            Voice::Umbriel => "Umbriel",
            Voice::Algieba => "Algieba",
            Voice::Despina => "Despina",
            Voice::Erinome => "Erinome",
            Voice::Algenib => "Algenib",
            Voice::Rasalgethi => "Rasalgethi",
            Voice::Laomedeia => "Laomedeia",
            Voice::Achernar => "Achernar",
            Voice::Alnilam => "Alnilam",
            Voice::Schedar => "Schedar",
            Voice::Gacrux => "Gacrux",
            Voice::Pulcherrima => "Pulcherrima",
            Voice::Achird => "Achird",
            Voice::Zubenelgenubi => "Zubenelgenubi",
            Voice::Vindemiatrix => "Vindemiatrix",
            Voice::Sadachbia => "Sadachbia",
            Voice::Sadaltager => "Sadaltager",
            Voice::Sulafat => "Sulafat",
        }
    }

    /// One-word style descriptor, as published for the voice.
    pub fn style(&self) -> &'static str {
        match self {
            Voice::Zephyr | Voice::Autonoe => "Bright",
            Voice::Puck | Voice::Laomedeia => "Upbeat",
            Voice::Charon | Voice::Rasalgethi => "Informative",
            Voice::Kore | Voice::Orus | Voice::Alnilam => "Firm",
            Voice::Fenrir => "Excitable",
            Voice::Leda => "Youthful",
            Voice::Aoede => "Breezy",
            Voice::Callirrhoe | Voice::Umbriel => "Easy-going",
            Voice::Enceladus => "Breathy",
            Voice::Iapetus | Voice::Erinome => "Clear",
            Voice::Algieba | Voice::Despina => "Smooth",
            Voice::Algenib => "Gravelly",
            Voice::Achernar => "Soft",
            Voice::Schedar => "Even",
            Voice::Gacrux => "Mature",
            Voice::Pulcherrima => "Forward",
            Voice::Achird => "Friendly",
            Voice::Zubenelgenubi => "Casual",
            Voice::Vindemiatrix => "Gentle",
            Voice::Sadachbia => "Lively",
            Voice::Sadaltager => "Knowledgeable",
            Voice::Sulafat => "Warm",
        }
    }
}

impl Default for Voice {
    fn default() -> Self {
        Voice::Kore
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Voice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Voice::ALL
            .iter()
            .copied()
            .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                Error::validation_with_context(
                    format!("Unknown voice: {}", wanted),
                    ErrorContext::new()
                        .with_field_path("request.voice")
                        .with_details("run `voicegen voices` for the catalog"),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("kore".parse::<Voice>().unwrap(), Voice::Kore);
        assert_eq!(" PUCK ".parse::<Voice>().unwrap(), Voice::Puck);
    }

    #[test]
    fn unknown_voice_is_a_validation_error() {
        let err = "Pegasus".parse::<Voice>().unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn catalog_names_round_trip() {
        for v in Voice::ALL {
            assert_eq!(v.as_str().parse::<Voice>().unwrap(), v);
        }
    }
}
