//! Byte strings and UTF-16 strings, fixed-length or zero-terminated.

use super::DecodeCtx;
use crate::config::Config;

pub(super) const STRING_HELPER: &str = "String";
pub(super) const UTF16_HELPER: &str = "UTF16String";

/// Parameters shared by both string kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Text {
    /// Fixed byte length; `None` scans for a terminator.
    pub length: Option<u64>,
}

impl Text {
    pub fn key(&self, prefix: &str) -> String {
        match self.length {
            Some(len) => format!("{prefix}_{len}"),
            None => prefix.to_string(),
        }
    }

    pub fn string_decode(&self, ctx: DecodeCtx<'_>) -> String {
        match self.length {
            Some(len) => format!("parse_string({}, offset, {len})", ctx.reader),
            None => format!("parse_terminated_string({}, offset)", ctx.reader),
        }
    }

    pub fn utf16_decode(&self, ctx: DecodeCtx<'_>) -> String {
        match self.length {
            Some(len) => format!("parse_utf16_string({}, offset, {len})", ctx.reader),
            None => format!("parse_terminated_utf16_string({}, offset)", ctx.reader),
        }
    }

    /// Terminated strings span the source bytes up to and including the
    /// terminator, rescanned at `offset`.
    pub fn string_size(&self, offset: &str) -> String {
        match self.length {
            Some(len) => len.to_string(),
            None => format!("terminated_string_size(reader, {offset})"),
        }
    }

    pub fn utf16_size(&self, offset: &str) -> String {
        match self.length {
            Some(len) => len.to_string(),
            None => format!("terminated_utf16_size(reader, {offset})"),
        }
    }
}

pub(super) fn emit_string_helper(config: &Config) -> String {
    format!(
        r#"fn parse_terminated_string(reader: &dyn ReaderAt, offset: u64) -> String {{
    let mut buf = vec![0u8; {window}];
    let n = reader.read_at(offset, &mut buf).unwrap_or(0);
    buf.truncate(n);
    if let Some(end) = buf.iter().position(|&b| b == 0) {{
        buf.truncate(end);
    }}
    String::from_utf8_lossy(&buf).into_owned()
}}

fn terminated_string_size(reader: &dyn ReaderAt, offset: u64) -> u64 {{
    let mut buf = vec![0u8; {window}];
    let n = reader.read_at(offset, &mut buf).unwrap_or(0);
    buf.truncate(n);
    match buf.iter().position(|&b| b == 0) {{
        Some(end) => end as u64 + 1,
        None => n as u64,
    }}
}}

fn parse_string(reader: &dyn ReaderAt, offset: u64, length: usize) -> String {{
    let mut buf = vec![0u8; length];
    let n = reader.read_at(offset, &mut buf).unwrap_or(0);
    buf.truncate(n);
    String::from_utf8_lossy(&buf).into_owned()
}}
"#,
        window = config.window()
    )
}

pub(super) fn emit_utf16_helper(config: &Config) -> String {
    format!(
        r#"fn parse_terminated_utf16_string(reader: &dyn ReaderAt, offset: u64) -> String {{
    let mut buf = vec![0u8; {window}];
    let n = reader.read_at(offset, &mut buf).unwrap_or(0);
    buf.truncate(n);
    let end = utf16_text_end(&buf).unwrap_or_else(|| {{
        let end = n.saturating_sub(1);
        end + end % 2
    }});
    buf.truncate(end.min(n));
    utf16_bytes_to_string(&buf)
}}

fn terminated_utf16_size(reader: &dyn ReaderAt, offset: u64) -> u64 {{
    let mut buf = vec![0u8; {window}];
    let n = reader.read_at(offset, &mut buf).unwrap_or(0);
    buf.truncate(n);
    match utf16_text_end(&buf) {{
        Some(end) => (end + 2).min(n) as u64,
        None => n as u64,
    }}
}}

/// Length of the text before a double-zero terminator, rounded up to a whole unit.
fn utf16_text_end(buf: &[u8]) -> Option<usize> {{
    let end = buf.windows(2).position(|w| w[0] == 0 && w[1] == 0)?;
    Some(end + end % 2)
}}

fn parse_utf16_string(reader: &dyn ReaderAt, offset: u64, length: usize) -> String {{
    let mut buf = vec![0u8; length];
    let n = reader.read_at(offset, &mut buf).unwrap_or(0);
    buf.truncate(n);
    utf16_bytes_to_string(&buf)
}}

fn utf16_bytes_to_string(bytes: &[u8]) -> String {{
    if bytes.len() < 2 {{
        return String::new();
    }}
    let (big_endian, body) = match bytes {{
        [0xff, 0xfe, rest @ ..] => (true, rest),
        [0xfe, 0xff, rest @ ..] => (false, rest),
        _ => (false, bytes),
    }};
    let mut units: Vec<u16> = body
        .chunks_exact(2)
        .map(|pair| {{
            let pair = [pair[0], pair[1]];
            if big_endian {{
                u16::from_be_bytes(pair)
            }} else {{
                u16::from_le_bytes(pair)
            }}
        }})
        .collect();
    if body.len() % 2 != 0 {{
        units.push(0xfffd);
    }}
    String::from_utf16_lossy(&units)
}}
"#,
        window = config.window()
    )
}
