pub mod types;

pub use types::{ExampleSentence, TranslationEntry};
