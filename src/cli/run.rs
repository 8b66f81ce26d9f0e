use std::io::Write;

use crate::config::OutputConfig;
use crate::error::CliError;

use super::Args;

/// Resolves `args.word` and writes the configured output to `out`.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), CliError> {
    let config = OutputConfig::from(args);
    // Invalid UTF-8 sequences become U+FFFD, which the consonant rule treats as "a"
    let word = args.word.to_string_lossy();
    log::debug!("resolving {:?} (only_article: {})", word, config.only_article);

    out.write_all(config.render(&word).as_bytes())?;
    out.flush()?;
    Ok(())
}
