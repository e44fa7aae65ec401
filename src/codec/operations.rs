//! Tokenize, decode, and encode operations for the flash-file format

use crate::codec::error::CodecError;
use crate::codec::types::{AliasTable, CommentLine, DecodedFile, EncodeStyle, Token, Tokenized};
use crate::codec::{COMMENT_MARKER, RUN_MARKER};
use crate::codes::{self, CodeParts};

/// Split flash-file text into validated tokens and captured comment lines
///
/// Comments are full lines whose first non-blank character is the comment
/// marker; they never produce tokens. Every other line is split on
/// whitespace and each piece must be a bare code or a run expression.
///
/// Empty input (or input that is all whitespace) yields no tokens and no
/// comments.
///
/// # Errors
/// Returns a [`CodecError`] on the first malformed token. Malformed means a
/// code that does not parse, or a run expression whose base or count does
/// not parse; nothing is silently coerced.
pub fn tokenize(input: &str) -> Result<Tokenized, CodecError> {
    let mut tokens = Vec::new();
    let mut comments = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let trimmed = line.trim();
        if let Some(body) = trimmed.strip_prefix(COMMENT_MARKER) {
            comments.push(CommentLine {
                line: idx + 1,
                text: body.trim().to_string(),
            });
            continue;
        }

        for word in trimmed.split_whitespace() {
            tokens.push(parse_token(word)?);
        }
    }

    Ok(Tokenized { tokens, comments })
}

fn parse_token(word: &str) -> Result<Token, CodecError> {
    if let Some((base, count)) = word.split_once(RUN_MARKER) {
        let parts =
            codes::parse_code(base).map_err(|_| CodecError::InvalidRunBase(word.to_string()))?;
        let count = count
            .parse::<u32>()
            .map_err(|_| CodecError::InvalidRunCount(word.to_string()))?;
        // the last index of the run must still fit in the index type
        if parts.order.checked_add(count).is_none() {
            return Err(CodecError::InvalidRunCount(word.to_string()));
        }
        return Ok(Token::Run {
            base: base.to_string(),
            count,
        });
    }

    codes::parse_code(word)?;
    Ok(Token::Code(word.to_string()))
}

/// Expand tokens into the flat list of individual artwork codes
///
/// Run expressions expand to `count + 1` sequential codes starting at the
/// base. Codes are re-emitted in canonical form (two-digit zero-padded
/// index), so `PA_7` and `PA_07` decode identically, and legacy aliases are
/// rewritten last.
#[must_use]
pub fn decode(tokens: &[Token], aliases: &AliasTable) -> Vec<String> {
    let mut out = Vec::new();

    for token in tokens {
        match token {
            Token::Code(code) => {
                // tokenize validated the shape already
                if let Ok(parts) = codes::parse_code(code) {
                    out.push(canonical(&parts, aliases));
                }
            }
            Token::Run { base, count } => {
                if let Ok(parts) = codes::parse_code(base) {
                    for offset in 0..=*count {
                        let Some(order) = parts.order.checked_add(offset) else {
                            break;
                        };
                        let parts = CodeParts {
                            city_code: parts.city_code.clone(),
                            order,
                        };
                        out.push(canonical(&parts, aliases));
                    }
                }
            }
        }
    }

    out
}

fn canonical(parts: &CodeParts, aliases: &AliasTable) -> String {
    let code = format!("{}_{:02}", parts.city_code, parts.order);
    aliases.resolve(&code).to_string()
}

/// Tokenize and decode in one step
///
/// # Errors
/// Returns a [`CodecError`] if tokenization fails; see [`tokenize`].
pub fn decode_str(input: &str, aliases: &AliasTable) -> Result<DecodedFile, CodecError> {
    let Tokenized { tokens, comments } = tokenize(input)?;
    Ok(DecodedFile {
        codes: decode(&tokens, aliases),
        comments,
    })
}

/// Encode a flat code list back into flash-file tokens
///
/// `Plain` emits one token per code. `Compact` collapses consecutive
/// same-city codes with sequential stored indices into a `base+count` run;
/// the decoder accepts both layouts, so either style round-trips.
#[must_use]
pub fn encode(codes: &[String], style: EncodeStyle) -> Vec<String> {
    match style {
        EncodeStyle::Plain => codes.to_vec(),
        EncodeStyle::Compact => encode_compact(codes),
    }
}

fn encode_compact(codes: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    let mut run: Option<(CodeParts, u32)> = None; // (base, extra count)

    for code in codes {
        let Ok(parts) = codes::parse_code(code) else {
            // unparseable codes pass through untouched
            flush_run(&mut out, run.take());
            out.push(code.clone());
            continue;
        };

        let extends_run = matches!(
            &run,
            Some((base, count))
                if base.city_code == parts.city_code
                    && base.order.checked_add(*count + 1) == Some(parts.order)
        );
        if extends_run {
            if let Some((_, count)) = run.as_mut() {
                *count += 1;
            }
        } else {
            flush_run(&mut out, run.take());
            run = Some((parts, 0));
        }
    }

    flush_run(&mut out, run);
    out
}

fn flush_run(out: &mut Vec<String>, run: Option<(CodeParts, u32)>) {
    if let Some((base, count)) = run {
        let base_code = format!("{}_{:02}", base.city_code, base.order);
        if count == 0 {
            out.push(base_code);
        } else {
            out.push(format!("{base_code}{RUN_MARKER}{count}"));
        }
    }
}
