// Output configuration for the indefinite-article command
// Defaults match a plain `indefinite-article <word>` invocation

/// What the command writes to stdout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Print only the article, without the word or a trailing newline (default false)
    pub only_article: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            only_article: false,
        }
    }
}

impl OutputConfig {
    /// Exact stdout text for `word`.
    pub fn render(&self, word: &str) -> String {
        if self.only_article {
            crate::article::resolve(word).to_string()
        } else {
            format!("{}\n", crate::article::with_article(word))
        }
    }
}
