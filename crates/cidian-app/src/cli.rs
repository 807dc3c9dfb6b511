use clap::Parser;

pub const USAGE: &str = "Usage: dict <word>";

/// Look up a word or phrase in the Youdao dictionary
#[derive(Parser, Debug, Default)]
#[command(name = "dict", disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Every argument is part of the query, including ones starting with `-`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

impl Args {
    /// Parse process arguments. Anything clap rejects is treated as no query.
    pub fn parse_or_default() -> Self {
        Self::try_parse().unwrap_or_else(|e| {
            tracing::debug!("Argument parsing failed: {}", e);
            Self::default()
        })
    }

    /// Arguments joined with single spaces, `None` when that is empty
    pub fn query(&self) -> Option<String> {
        let query = self.words.join(" ");
        if query.is_empty() { None } else { Some(query) }
    }
}
