pub mod libs;

use std::fs::File;
use std::io::{BufWriter, Write};

/// Opens a buffered writer; `stdout` writes to the screen.
///
/// ```
/// use std::io::Write;
///
/// let mut writer = qvmodel::writer("stdout").unwrap();
/// writer.write_all(b"").unwrap();
/// ```
pub fn writer(output: &str) -> anyhow::Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = if output == "stdout" {
        Box::new(BufWriter::new(std::io::stdout()))
    } else {
        let file = File::create(output)
            .map_err(|e| anyhow::anyhow!("Cannot create {}: {}", output, e))?;
        Box::new(BufWriter::new(file))
    };

    Ok(writer)
}
