/// One meaning of the headword, e.g. `n.` + `测试`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslationEntry {
    /// Part of speech marker, empty when the meaning carries none
    pub part_of_speech: String,
    pub meaning: String,
}

impl TranslationEntry {
    pub fn new(part_of_speech: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            part_of_speech: part_of_speech.into(),
            meaning: meaning.into(),
        }
    }

    pub fn has_part_of_speech(&self) -> bool {
        !self.part_of_speech.is_empty()
    }
}

/// Bilingual example sentence
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExampleSentence {
    pub english: String,
    pub chinese: String,
    /// Attribution as given by the API, may be empty
    pub source: String,
}

impl ExampleSentence {
    pub fn has_translation(&self) -> bool {
        !self.chinese.is_empty()
    }
}
