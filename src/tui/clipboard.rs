//! OSC 52 clipboard integration.
//!
//! Writes the text to the terminal's clipboard via the OSC 52 escape
//! sequence (base64 payload). Best-effort: some terminals restrict or
//! ignore OSC 52, in which case the write is silently discarded by the
//! terminal itself.

use std::io::{self, Write};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Copy `text` to the system clipboard through the terminal.
pub fn copy(text: &str) -> io::Result<()> {
    let payload = STANDARD.encode(text.as_bytes());
    let mut out = io::stdout();
    write!(out, "\x1b]52;c;{payload}\x07")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_is_plain_base64() {
        assert_eq!(STANDARD.encode("Salam"), "U2FsYW0=");
    }
}
