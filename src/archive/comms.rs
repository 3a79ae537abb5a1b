use crate::error::NexusResult;
use std::io::{BufRead, Write};

/// What an archivist reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transmission {
    pub archivist_id: String,
    pub report: String,
}

fn prompt<R: BufRead, O: Write>(input: &mut R, stdout: &mut O, question: &str) -> NexusResult<String> {
    write!(stdout, "Input Stream active. Enter {}: ", question)?;
    stdout.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Run the three-channel communication exchange
///
/// Reads an archivist id and a status report from `input`. Standard
/// messages go to `stdout`, diagnostics to `stderr`. A blank id or report
/// is reported on `stderr` and yields `Ok(None)`.
pub fn transmit<R, O, E>(input: &mut R, stdout: &mut O, stderr: &mut E) -> NexusResult<Option<Transmission>>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    let archivist_id = prompt(input, stdout, "archivist ID")?;
    let report = prompt(input, stdout, "status report")?;

    if archivist_id.trim().is_empty() || report.trim().is_empty() {
        writeln!(stderr, "No archivist ID or report provided. Exiting.")?;
        return Ok(None);
    }

    writeln!(stdout)?;
    writeln!(
        stdout,
        "[STANDARD] Archive status from {}: {}",
        archivist_id, report
    )?;
    writeln!(
        stderr,
        "[ALERT] System diagnostic: Communication channels verified"
    )?;
    writeln!(stdout, "[STANDARD] Data transmission complete\n")?;
    writeln!(stdout, "Three-channel communication test successful.")?;

    Ok(Some(Transmission {
        archivist_id,
        report,
    }))
}
