use crate::modules::subdomains::{normalize, CertificateSource};
use crate::report::{print_subdomains, report_path, write_report};
use crate::Result;
use reqwest::Client;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use time::Date;
use tracing::{info, instrument, trace};

// region:        --- Constants

// seconds, crt.sh gives no latency guarantee
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 15;

// endregion:     --- Constants

pub struct ScanOptions<'a> {
    pub output_dir: &'a Path,
    pub date: Date,
    pub print: bool,
}

#[derive(Debug)]
pub struct ScanSummary {
    pub records: usize,
    pub subdomains: BTreeSet<String>,
    pub report: PathBuf,
}

// region:        --- Scan main function

/// Fetch, normalize and write, with status lines on `out`. Nothing is
/// written to disk unless the fetch and the parse both succeed.
#[instrument(name = "scan", level = "info", skip_all, fields(domain = domain))]
pub async fn scan(
    source: &dyn CertificateSource,
    http_client: &Client,
    domain: &str,
    options: &ScanOptions<'_>,
    out: &mut impl Write,
) -> Result<ScanSummary> {
    trace!("Start scan on {} with {}", domain, source.name());

    writeln!(out, "querying {} for: {}", source.endpoint(), domain)?;
    let records = source.fetch(http_client, domain).await?;
    writeln!(out, "retrieved {} certificate records", records.len())?;

    let subdomains = normalize(&records, domain);
    info!("{} subdomains kept from {} records", subdomains.len(), records.len());
    if options.print {
        print_subdomains(out, &subdomains, domain)?;
    }

    let report = report_path(options.output_dir, domain, options.date)?;
    write_report(&subdomains, &report)?;
    writeln!(out, "results saved to: {}", report.display())?;

    Ok(ScanSummary {
        records: records.len(),
        subdomains,
        report,
    })
}

// endregion:     --- Scan main function
