use crate::results::HeadlineSequence;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes one headline per line, each terminated by `\n`
pub fn write_headlines<W: Write>(writer: &mut W, headlines: &HeadlineSequence) -> io::Result<()> {
    for headline in headlines.iter() {
        writer.write_all(headline.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Creates (or truncates) `path` and writes the headlines to it as UTF-8
pub fn save_headlines(path: &Path, headlines: &HeadlineSequence) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_headlines(&mut writer, headlines)?;
    writer.flush()?;

    ::log::debug!("Wrote {} headlines to {}", headlines.len(), path.display());
    Ok(())
}
