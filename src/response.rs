use anyhow::{anyhow, Result};

// Characters stripped from response bodies before splitting
pub const DEFAULT_DIRTY_CHARS: &str = "#}{\"";
pub const DEFAULT_SEPARATOR: char = ',';

// Follows the numeric message code at the start of every server message
const MESSAGE_MARKER: &str = "{gli&&er}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseField {
    pub key: String,
    pub value: String,
}

pub fn parse_response_data(data: &str, dirty_chars: &str, separator: char) -> Vec<String> {
    data.chars()
        .filter(|c| !dirty_chars.contains(*c))
        .collect::<String>()
        .split(separator)
        .map(str::to_string)
        .collect()
}

/// Splits a response body into `key:value` fields using the default cleanup.
pub fn parse_fields(data: &str) -> Vec<ResponseField> {
    parse_response_data(data, DEFAULT_DIRTY_CHARS, DEFAULT_SEPARATOR)
        .into_iter()
        .filter(|token| !token.is_empty())
        .map(|token| match token.split_once(':') {
            Some((key, value)) => ResponseField {
                key: key.to_string(),
                value: value.to_string(),
            },
            None => ResponseField {
                key: token,
                value: String::new(),
            },
        })
        .collect()
}

/// Drops a leading `NNN#{gli&&er}` message header, if the body carries one.
fn strip_message_header(data: &str) -> &str {
    match data.split_once('#') {
        Some((code, rest))
            if !code.is_empty()
                && code.chars().all(|c| c.is_ascii_digit())
                && rest.starts_with(MESSAGE_MARKER) =>
        {
            &rest[MESSAGE_MARKER.len()..]
        }
        _ => data,
    }
}

/// Reads the reference checksum out of a response body.
///
/// The checksum is the first run of digits after the message header that is
/// followed by `{`, `#` or the end of the body. Digits inside the JSON part
/// are followed by `,` or `}` and are skipped.
pub fn reference_checksum_from(data: &str) -> Result<i64> {
    let body = strip_message_header(data);
    let bytes = body.as_bytes();

    let mut index = 0;
    while index < bytes.len() {
        if !bytes[index].is_ascii_digit() {
            index += 1;
            continue;
        }

        let start = index;
        while index < bytes.len() && bytes[index].is_ascii_digit() {
            index += 1;
        }
        if index == bytes.len() || matches!(bytes[index], b'{' | b'#') {
            return Ok(body[start..index].parse::<i64>()?);
        }
    }

    Err(anyhow!("No reference checksum in response '{}'", data))
}
