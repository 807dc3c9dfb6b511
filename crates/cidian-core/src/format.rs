use cidian_types::{ExampleSentence, TranslationEntry};
use console::Style;

pub const SEPARATOR_WIDTH: usize = 40;
const SEPARATOR: char = '─';

/// Shown instead of translations when the dictionary has none
pub const NOT_FOUND: &str = "未找到翻译";
pub const EXAMPLES_LABEL: &str = "Examples:";
/// Indent of the Chinese line under each example sentence
const EXAMPLE_INDENT: &str = "   ";

/// How styled text is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Plain,
    Ansi,
}

impl Palette {
    /// ANSI colors only when stdout is a terminal
    pub fn detect() -> Self {
        if atty::is(atty::Stream::Stdout) {
            Palette::Ansi
        } else {
            Palette::Plain
        }
    }

    fn paint(self, text: &str, style: Style) -> String {
        match self {
            Palette::Plain => text.to_string(),
            Palette::Ansi => style.force_styling(true).apply_to(text).to_string(),
        }
    }
}

pub fn format(
    word: &str,
    translations: &[TranslationEntry],
    examples: &[ExampleSentence],
    palette: Palette,
) -> String {
    let mut lines = Vec::new();

    lines.push(palette.paint(word, Style::new().bold()));
    lines.push(SEPARATOR.to_string().repeat(SEPARATOR_WIDTH));

    if translations.is_empty() {
        lines.push(NOT_FOUND.to_string());
    }
    for entry in translations {
        lines.push(translation_line(entry, palette));
    }

    if !examples.is_empty() {
        lines.push(String::new());
        lines.push(palette.paint(EXAMPLES_LABEL, Style::new().bold()));

        for (i, example) in examples.iter().enumerate() {
            lines.push(format!("{}. {}", i + 1, example.english));
            if example.has_translation() {
                let chinese = palette.paint(&example.chinese, Style::new().dim());
                lines.push(format!("{EXAMPLE_INDENT}{chinese}"));
            }
        }
    }

    lines.join("\n")
}

fn translation_line(entry: &TranslationEntry, palette: Palette) -> String {
    if entry.has_part_of_speech() {
        let pos = palette.paint(&entry.part_of_speech, Style::new().cyan().italic());
        format!("{pos} {}", entry.meaning)
    } else {
        entry.meaning.clone()
    }
}
