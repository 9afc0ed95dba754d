//! CLI commands.

use std::io::Write;
use std::path::{Path, PathBuf};

use hello_lexer_core::{LocationSpan, Scanner, Token, TokenKind};

use crate::LexCommandError;

/// Flags accepted by `helloc lex`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Append the parser-generator span and token code to each line.
    pub spans: bool,
    /// Fail on the first `Unknown` token instead of listing it.
    pub deny_unknown: bool,
}

/// Split `lex` arguments into the source path and options.
///
/// The path is the first argument not starting with `-`; flags may appear
/// before or after it.
pub fn parse_lex_args(args: &[String]) -> Result<(PathBuf, LexOptions), LexCommandError> {
    let mut options = LexOptions::default();
    let mut path = None;

    for arg in args {
        match arg.as_str() {
            "--spans" => options.spans = true,
            "--deny-unknown" => options.deny_unknown = true,
            flag if flag.starts_with('-') => {
                return Err(LexCommandError::UnknownOption(flag.to_string()));
            }
            file if path.is_none() => path = Some(PathBuf::from(file)),
            // Extra positional arguments are ignored, like `ori run`.
            _ => {}
        }
    }

    let path = path.ok_or(LexCommandError::MissingPath)?;
    Ok((path, options))
}

/// Read `path` and dump its tokens to `out`. Returns the token count,
/// including the final end-of-input token.
#[tracing::instrument(level = "debug", skip(out))]
pub fn lex_file(
    path: &Path,
    options: &LexOptions,
    out: &mut impl Write,
) -> Result<usize, LexCommandError> {
    let content = read_file(path)?;
    lex_source(path, content, options, out)
}

/// Dump the tokens of `content` to `out`, labelled with `path`.
pub fn lex_source(
    path: &Path,
    content: String,
    options: &LexOptions,
    out: &mut impl Write,
) -> Result<usize, LexCommandError> {
    let tokens = collect_tokens(Scanner::new(content));

    if options.deny_unknown {
        if let Some(tok) = tokens.iter().find(|t| t.kind == TokenKind::Unknown) {
            return Err(LexCommandError::UnknownCharacter {
                path: path.to_path_buf(),
                lexeme: tok.lexeme.clone(),
                location: tok.location,
            });
        }
    }

    writeln!(
        out,
        "Tokens for '{}' ({} tokens):",
        path.display(),
        tokens.len()
    )?;
    for tok in &tokens {
        write!(out, "  {:?} {:?} @ {}", tok.kind, tok.lexeme, tok.location)?;
        if options.spans {
            let span = LocationSpan::of(tok);
            write!(
                out,
                " [{}:{}-{}:{}] code={}",
                span.first_line,
                span.first_column,
                span.last_line,
                span.last_column,
                tok.kind.code()
            )?;
        }
        writeln!(out)?;
    }

    tracing::debug!(count = tokens.len(), "token dump written");
    Ok(tokens.len())
}

/// Run the scanner to exhaustion, keeping the final `EndOfInput`.
fn collect_tokens(mut scanner: Scanner) -> Vec<Token> {
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        let done = tok.is_end();
        tokens.push(tok);
        if done {
            return tokens;
        }
    }
}

fn read_file(path: &Path) -> Result<String, LexCommandError> {
    std::fs::read_to_string(path).map_err(|source| LexCommandError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests;
