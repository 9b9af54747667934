//! Locale hints for synthesis.

use crate::{Error, ErrorContext};
use std::fmt;

/// `(display name, BCP-47 tag)` for every language the speech models accept.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("Arabic (Egypt)", "ar-EG"),
    ("Bengali (Bangladesh)", "bn-BD"),
    ("German (Germany)", "de-DE"),
    ("English (US)", "en-US"),
    ("English (India)", "en-IN"),
    ("Spanish (US)", "es-US"),
    ("French (France)", "fr-FR"),
    ("Hindi (India)", "hi-IN"),
    ("Indonesian (Indonesia)", "id-ID"),
    ("Italian (Italy)", "it-IT"),
    ("Japanese (Japan)", "ja-JP"),
    ("Korean (South Korea)", "ko-KR"),
    ("Marathi (India)", "mr-IN"),
    ("Dutch (Netherlands)", "nl-NL"),
    ("Polish (Poland)", "pl-PL"),
    ("Portuguese (Brazil)", "pt-BR"),
    ("Romanian (Romania)", "ro-RO"),
    ("Russian (Russia)", "ru-RU"),
    ("Tamil (India)", "ta-IN"),
    ("Telugu (India)", "te-IN"),
    ("Thai (Thailand)", "th-TH"),
    ("Turkish (Turkey)", "tr-TR"),
    ("Ukrainian (Ukraine)", "uk-UA"),
    ("Vietnamese (Vietnam)", "vi-VN"),
];

/// A supported locale. Construct with [`Language::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    name: &'static str,
    code: &'static str,
}

impl Language {
    /// Looks up a tag (`en-US`, `en_us`) or a display name (`English (US)`).
    pub fn parse(s: &str) -> crate::Result<Self> {
        let wanted = s.trim().replace('_', "-");
        LANGUAGES
            .iter()
            .find(|(name, code)| {
                code.eq_ignore_ascii_case(&wanted) || name.eq_ignore_ascii_case(&wanted)
            })
            .map(|&(name, code)| Language { name, code })
            .ok_or_else(|| {
                Error::validation_with_context(
                    format!("Unsupported language: {}", s.trim()),
                    ErrorContext::new()
                        .with_field_path("request.language")
                        .with_details("run `voicegen languages` for the list"),
                )
            })
    }

    /// Like [`Language::parse`], but `auto` / `auto-detect` / empty mean no hint.
    pub fn parse_optional(s: &str) -> crate::Result<Option<Self>> {
        match s.trim().to_lowercase().as_str() {
            "" | "auto" | "auto-detect" => Ok(None),
            _ => Self::parse(s).map(Some),
        }
    }

    pub fn all() -> impl Iterator<Item = Language> {
        LANGUAGES.iter().map(|&(name, code)| Language { name, code })
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
