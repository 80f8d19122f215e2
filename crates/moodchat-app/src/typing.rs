use std::io::{self, Write};
use std::time::Duration;

/// Write `text` one character at a time, pausing `delay` after each, then a
/// newline. A zero delay writes straight through.
pub async fn type_out<W: Write>(out: &mut W, text: &str, delay: Duration) -> io::Result<()> {
    if delay.is_zero() {
        writeln!(out, "{}", text)?;
        return out.flush();
    }

    let mut buf = [0u8; 4];
    for ch in text.chars() {
        out.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
        out.flush()?;
        tokio::time::sleep(delay).await;
    }
    writeln!(out)?;
    out.flush()
}
