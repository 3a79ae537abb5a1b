use crate::archive::{transmit, Vault};
use crate::config::NexusConfig;
use crate::error::{NexusError, NexusResult};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

pub const DISCOVERY_ENTRIES: [&str; 3] = [
    "[ENTRY 001] New quantum algorithm discovered\n",
    "[ENTRY 002] Efficiency increased by 347%\n",
    "[ENTRY 003] Archived by Data Archivist trainee",
];

pub const CRISIS_PATHS: [&str; 3] = [
    "lost_archive.txt",
    "classified_vault.txt",
    "standard_archive.txt",
];

fn print_lines<W: Write, S: AsRef<str>>(out: &mut W, lines: &[S]) -> NexusResult<()> {
    for line in lines {
        writeln!(out, "{}", line.as_ref().trim())?;
    }
    Ok(())
}

pub fn run_recover<W: Write>(out: &mut W, path: Option<&Path>) -> NexusResult<()> {
    let Some(path) = path else {
        writeln!(out, "Usage: nexus archive recover <file_path>")?;
        return Ok(());
    };
    writeln!(out, "=== CYBER ARCHIVES - DATA RECOVERY SYSTEM ===\n")?;

    let vault = Vault::new(path);
    writeln!(out, "Accessing Storage Vault: {}", vault.path().display())?;
    match vault.load() {
        Ok(content) => {
            writeln!(out, "Connection established...\n")?;
            writeln!(out, "RECOVERED DATA:\n{}\n", content)?;
            writeln!(out, "Data recovery complete.  Storage unit disconnected.")?;
        }
        Err(NexusError::FileNotFound(_)) => writeln!(out, "ERROR: File not found.")?,
        Err(e @ NexusError::PermissionDenied(_)) => writeln!(out, "ERROR: {}", e)?,
        Err(e) => return Err(e),
    }
    Ok(())
}

pub fn run_create<W: Write>(out: &mut W, path: Option<&Path>, config: &NexusConfig) -> NexusResult<()> {
    writeln!(out, "=== CYBER ARCHIVES - PRESERVATION SYSTEM ===\n")?;

    let vault = Vault::new(path.map(Path::to_path_buf).unwrap_or_else(|| config.archive_path.clone()));
    writeln!(out, "Initializing new storage unit: {}", vault.path().display())?;
    match vault.save(&DISCOVERY_ENTRIES) {
        Ok(_) => {
            writeln!(out, "Storage unit created successfully...\n")?;
            writeln!(out, "Inscribing preservation data...")?;
            print_lines(out, &DISCOVERY_ENTRIES)?;
            writeln!(out, "\nData inscription complete. Storage unit sealed.")?;
            writeln!(
                out,
                "Archive '{}' ready for long-term preservation.",
                vault.path().display()
            )?;
        }
        Err(e) => writeln!(out, "ERROR: {}", e)?,
    }
    Ok(())
}

pub fn run_comms<R, O, E>(input: &mut R, stdout: &mut O, stderr: &mut E) -> NexusResult<()>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    writeln!(stdout, "=== CYBER ARCHIVES - COMMUNICATION SYSTEM ===\n")?;
    transmit(input, stdout, stderr)?;
    Ok(())
}

pub fn run_vault<W: Write>(out: &mut W, path: Option<&Path>) -> NexusResult<()> {
    let Some(path) = path else {
        writeln!(out, "Usage: nexus archive vault <file_path>")?;
        return Ok(());
    };
    writeln!(out, "=== CYBER ARCHIVES - VAULT SECURITY SYSTEM ===\n")?;
    let vault = Vault::new(path);

    writeln!(out, "Initiating secure vault access...")?;
    match vault.load() {
        Ok(content) => {
            writeln!(out, "Vault connection established with failsafe protocols\n")?;
            writeln!(out, "SECURE EXTRACTION:\n{}\n", content)?;
        }
        Err(NexusError::FileNotFound(_)) => writeln!(out, "ERROR: File not found.")?,
        Err(e @ NexusError::PermissionDenied(_)) => writeln!(out, "ERROR: {}", e)?,
        Err(e) => return Err(e),
    }

    let classified = ["[CLASSIFIED] New security protocols archived"];
    writeln!(out, "SECURE PRESERVATION:")?;
    match vault.save(&classified) {
        Ok(_) => {
            print_lines(out, &classified)?;
            writeln!(out, "Vault automatically sealed upon completion")?;
        }
        Err(e) => writeln!(out, "ERROR: {}", e)?,
    }

    writeln!(out, "\nAll vault operations completed with maximum security.")?;
    Ok(())
}

pub fn run_crisis<W: Write>(out: &mut W, paths: &[PathBuf]) -> NexusResult<()> {
    writeln!(out, "=== CYBER ARCHIVES - CRISIS RESPONSE SYSTEM ===\n")?;

    let defaults: Vec<PathBuf> = CRISIS_PATHS.into_iter().map(PathBuf::from).collect();
    let targets = if paths.is_empty() { &defaults[..] } else { paths };
    for path in targets {
        writeln!(out, "CRISIS ALERT: Attempting access to '{}'...", path.display())?;
        writeln!(out, "{}\n", Vault::new(path).respond())?;
    }

    writeln!(out, "All crisis scenarios handled successfully. Archives secure.")?;
    Ok(())
}
