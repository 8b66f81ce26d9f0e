use std::ffi::OsString;

use clap::Parser;

use crate::config::OutputConfig;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "indefinite-article")]
#[command(about = "Print the English indefinite article (a or an) for a word")]
pub struct Args {
    /// Only output the article
    #[arg(long)]
    pub only: bool,

    /// Word or phrase to find the article for. Not required to be UTF-8
    pub word: OsString,
}

impl From<&Args> for OutputConfig {
    fn from(args: &Args) -> Self {
        Self {
            only_article: args.only,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USAGE_EXIT_CODE: i32 = 2;

    #[test]
    fn test_parse_word() {
        let args = Args::try_parse_from(["indefinite-article", "apple"]).unwrap();
        assert_eq!(args.word, OsString::from("apple"));
        assert!(!args.only);
    }

    #[test]
    fn test_parse_only_flag() {
        let args = Args::try_parse_from(["indefinite-article", "--only", "apple"]).unwrap();
        assert!(args.only);
        assert_eq!(args.word, OsString::from("apple"));
        assert_eq!(OutputConfig::from(&args), OutputConfig { only_article: true });
    }

    #[test]
    fn test_missing_word_is_usage_error() {
        let err = Args::try_parse_from(["indefinite-article"]).unwrap_err();
        assert_eq!(err.exit_code(), USAGE_EXIT_CODE);
    }

    #[test]
    fn test_extra_word_is_usage_error() {
        let err = Args::try_parse_from(["indefinite-article", "an", "apple"]).unwrap_err();
        assert_eq!(err.exit_code(), USAGE_EXIT_CODE);
    }

    #[test]
    #[cfg(unix)]
    fn test_non_utf8_word_is_accepted() {
        use std::os::unix::ffi::OsStrExt;

        let word = std::ffi::OsStr::from_bytes(b"\xff\xfe");
        let args =
            Args::try_parse_from([std::ffi::OsStr::new("indefinite-article"), word]).unwrap();
        assert_eq!(args.word.as_os_str(), word);
    }

    #[test]
    fn test_only_flag_without_word_is_usage_error() {
        let err = Args::try_parse_from(["indefinite-article", "--only"]).unwrap_err();
        assert_eq!(err.exit_code(), USAGE_EXIT_CODE);
    }
}
