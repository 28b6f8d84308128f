//! Command-line surface of the `textkit` binary.
//!
//! Each [`Command`] maps one subcommand onto one library operation. Input
//! text always comes from stdin; the command only picks the operation and
//! its optional argument.

use textkit_codec::{DecodeError, Utf8Error};
use thiserror::Error;

pub const USAGE: &str = "\
usage: textkit <command> [arg]

commands:
  encode-utf8                   text -> UTF-8 bytes as hex
  decode-utf8 [--strict]        hex  -> text
  encode-base64                 text -> base64
  decode-base64 [--strict]      base64 -> text
  strip-html                    remove HTML tags
  trim-properties [count]       keep the first <count> comma-separated entries
  trim-to-ellipsis [length]     cut to <length> chars and append \"...\"
  parse-boolean                 true | false | null
  parse-query-string [name]     JSON object, or the JSON value of <name>

input is read from stdin; set RUST_LOG for diagnostics";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{}", USAGE)]
    Usage,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("unexpected argument for {command}: {arg}")]
    UnexpectedArgument { command: &'static str, arg: String },
    #[error("{command} expects a non-negative number, got {value:?}")]
    InvalidNumber { command: &'static str, value: String },
    #[error("invalid hex input at offset {0}")]
    InvalidHex(usize),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Utf8(#[from] Utf8Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    EncodeUtf8,
    DecodeUtf8 { strict: bool },
    EncodeBase64,
    DecodeBase64 { strict: bool },
    StripHtml,
    TrimProperties { count: Option<usize> },
    TrimToEllipsis { length: Option<usize> },
    ParseBoolean,
    ParseQueryString { name: Option<String> },
}

impl Command {
    /// Parses the arguments that follow the program name.
    pub fn parse<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let name = args.next().ok_or(CliError::Usage)?;
        let arg = args.next();

        let command = match name.as_str() {
            "encode-utf8" => Command::EncodeUtf8,
            "decode-utf8" => Command::DecodeUtf8 {
                strict: strict_flag("decode-utf8", arg.as_deref())?,
            },
            "encode-base64" => Command::EncodeBase64,
            "decode-base64" => Command::DecodeBase64 {
                strict: strict_flag("decode-base64", arg.as_deref())?,
            },
            "strip-html" => Command::StripHtml,
            "trim-properties" => Command::TrimProperties {
                count: number("trim-properties", arg.as_deref())?,
            },
            "trim-to-ellipsis" => Command::TrimToEllipsis {
                length: number("trim-to-ellipsis", arg.as_deref())?,
            },
            "parse-boolean" => Command::ParseBoolean,
            "parse-query-string" => Command::ParseQueryString { name: arg.clone() },
            "-h" | "--help" | "help" => return Err(CliError::Usage),
            other => return Err(CliError::UnknownCommand(other.to_string())),
        };

        let takes_arg = matches!(
            command,
            Command::DecodeUtf8 { .. }
                | Command::DecodeBase64 { .. }
                | Command::TrimProperties { .. }
                | Command::TrimToEllipsis { .. }
                | Command::ParseQueryString { .. }
        );
        let extra = if takes_arg { args.next() } else { arg };
        if let Some(extra) = extra {
            return Err(CliError::UnexpectedArgument {
                command: command.name(),
                arg: extra,
            });
        }

        Ok(command)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::EncodeUtf8 => "encode-utf8",
            Command::DecodeUtf8 { .. } => "decode-utf8",
            Command::EncodeBase64 => "encode-base64",
            Command::DecodeBase64 { .. } => "decode-base64",
            Command::StripHtml => "strip-html",
            Command::TrimProperties { .. } => "trim-properties",
            Command::TrimToEllipsis { .. } => "trim-to-ellipsis",
            Command::ParseBoolean => "parse-boolean",
            Command::ParseQueryString { .. } => "parse-query-string",
        }
    }

    /// Runs the command over `input`, returning the text to print.
    pub fn run(&self, input: &str) -> Result<String, CliError> {
        tracing::debug!(command = self.name(), input_len = input.len(), "running");
        let output = match self {
            Command::EncodeUtf8 => to_hex(&textkit_codec::encode_utf8(input)),
            Command::DecodeUtf8 { strict } => {
                let bytes = from_hex(input)?;
                if *strict {
                    textkit_codec::try_decode_utf8(&bytes)?
                } else {
                    textkit_codec::decode_utf8(&bytes)
                }
            }
            Command::EncodeBase64 => textkit_codec::encode_base64(input),
            Command::DecodeBase64 { strict: true } => textkit_codec::try_decode_base64(input)?,
            Command::DecodeBase64 { strict: false } => textkit_codec::decode_base64(input),
            Command::StripHtml => textkit_util::strip_html(input),
            Command::TrimProperties { count } => textkit_util::trim_properties(input, *count),
            Command::TrimToEllipsis { length } => textkit_util::trim_to_ellipsis(input, *length),
            Command::ParseBoolean => serde_json::to_string(&textkit_util::parse_boolean(input))?,
            Command::ParseQueryString { name: Some(name) } => {
                serde_json::to_string(&textkit_util::query_param(input, name))?
            }
            Command::ParseQueryString { name: None } => {
                serde_json::to_string_pretty(&textkit_util::parse_query_string(input))?
            }
        };
        Ok(output)
    }
}

fn strict_flag(command: &'static str, arg: Option<&str>) -> Result<bool, CliError> {
    match arg {
        None => Ok(false),
        Some("--strict") => Ok(true),
        Some(other) => Err(CliError::UnexpectedArgument {
            command,
            arg: other.to_string(),
        }),
    }
}

fn number(command: &'static str, arg: Option<&str>) -> Result<Option<usize>, CliError> {
    arg.map(|value| {
        value.parse().map_err(|_| CliError::InvalidNumber {
            command,
            value: value.to_string(),
        })
    })
    .transpose()
}

/// Drops one trailing line ending, as left by `echo` or a here-string.
pub fn strip_trailing_newline(input: &str) -> &str {
    input
        .strip_suffix("\r\n")
        .or_else(|| input.strip_suffix('\n'))
        .unwrap_or(input)
}

fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn from_hex(input: &str) -> Result<Vec<u8>, CliError> {
    let digits: Vec<(usize, u8)> = input
        .char_indices()
        .filter(|(_, c)| !c.is_ascii_whitespace())
        .map(|(i, c)| {
            c.to_digit(16)
                .map(|d| (i, d as u8))
                .ok_or(CliError::InvalidHex(i))
        })
        .collect::<Result<_, _>>()?;

    if digits.len() % 2 != 0 {
        let (offset, _) = digits[digits.len() - 1];
        return Err(CliError::InvalidHex(offset));
    }

    Ok(digits
        .chunks(2)
        .map(|pair| (pair[0].1 << 4) | pair[1].1)
        .collect())
}
