//! Structured prompt composition for the advanced mode.

/// The four free-text sections of a directed performance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredPrompt {
    pub profile: String,
    pub scene: String,
    pub director_notes: String,
    pub transcript: String,
}

impl StructuredPrompt {
    pub fn new(
        profile: impl Into<String>,
        scene: impl Into<String>,
        director_notes: impl Into<String>,
        transcript: impl Into<String>,
    ) -> Self {
        Self {
            profile: profile.into(),
            scene: scene.into(),
            director_notes: director_notes.into(),
            transcript: transcript.into(),
        }
    }

    /// Labeled blocks joined by a blank line, skipping empty sections.
    ///
    /// With nothing but a transcript the result is the transcript itself.
    pub fn compose(&self) -> String {
        let sections = [
            ("# AUDIO PROFILE", self.profile.trim()),
            ("## THE SCENE", self.scene.trim()),
            ("### DIRECTOR'S NOTES", self.director_notes.trim()),
            ("#### TRANSCRIPT", self.transcript.trim()),
        ];
        let has_direction = sections[..3].iter().any(|(_, body)| !body.is_empty());
        if !has_direction {
            return self.transcript.trim().to_string();
        }
        sections
            .iter()
            .filter(|(_, body)| !body.is_empty())
            .map(|(header, body)| format!("{}\n{}", header, body))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sections_in_order() {
        let prompt = StructuredPrompt::new(
            "Warm radio host",
            "Late night studio",
            "Slow, intimate",
            "Good evening.",
        );
        assert_eq!(
            prompt.compose(),
            "# AUDIO PROFILE\nWarm radio host\n\n\
             ## THE SCENE\nLate night studio\n\n\
             ### DIRECTOR'S NOTES\nSlow, intimate\n\n\
             #### TRANSCRIPT\nGood evening."
        );
    }

    #[test]
    fn transcript_only_is_passed_through() {
        let prompt = StructuredPrompt::new("", "  ", "", "Just read this.");
        assert_eq!(prompt.compose(), "Just read this.");
    }

    #[test]
    fn empty_sections_are_skipped() {
        let prompt = StructuredPrompt::new("", "Rainy street", "", "Hello.");
        assert_eq!(
            prompt.compose(),
            "## THE SCENE\nRainy street\n\n#### TRANSCRIPT\nHello."
        );
    }

    #[test]
    fn everything_empty_yields_empty_text() {
        assert_eq!(StructuredPrompt::default().compose(), "");
    }
}
