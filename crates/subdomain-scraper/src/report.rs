use crate::Result;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use tracing::debug;

// region:        --- Report path

/// `{domain}_subdomains_{YYYYMMDD}`, shared by the report and the log file.
pub fn report_stem(domain: &str, date: Date) -> Result<String> {
    let stamp = date.format(format_description!("[year][month][day]"))?;
    Ok(format!("{}_subdomains_{}", domain, stamp))
}

pub fn report_path(dir: &Path, domain: &str, date: Date) -> Result<PathBuf> {
    Ok(dir.join(format!("{}.txt", report_stem(domain, date)?)))
}

/// Local date, UTC when the local offset cannot be determined.
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

// endregion:     --- Report path

// region:        --- Exporting utils

/// Writes one hostname per line. The file is truncated if it exists.
pub fn write_report(subdomains: &BTreeSet<String>, path: &Path) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    for subdomain in subdomains {
        writeln!(file, "{}", subdomain)?;
    }
    file.flush()?;

    debug!("{} lines written to {}", subdomains.len(), path.display());
    Ok(())
}

pub fn print_subdomains(out: &mut impl Write, subdomains: &BTreeSet<String>, domain: &str) -> Result<()> {
    writeln!(out, "{} unique subdomains of {}", subdomains.len(), domain)?;
    for subdomain in subdomains {
        writeln!(out, "  {}", subdomain)?;
    }
    Ok(())
}

// endregion:     --- Exporting utils
