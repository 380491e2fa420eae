mod domain;
mod error;
mod modules;
mod report;
mod scan;
mod utils;

pub use error::{Error, Result};

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use domain::clean_domain;
use modules::new_http_client;
use modules::subdomains::crtsh::CrtSh;
use modules::Module;
use report::{report_stem, today};
use scan::{scan, ScanOptions, ScanSummary, HTTP_REQUEST_TIMEOUT_SECS};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{debug, info};
use utils::{ensure_dir, home_dir, log::init_tracing_subscriber};

fn cli() -> Command {
    Command::new(clap::crate_name!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .arg(
            Arg::new("domain")
                .help("The domain to enumerate")
                .value_name("DOMAIN")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .help("Directory of the report [default: home directory]")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .help("HTTP request timeout in seconds [default: 15]")
                .value_name("SECS")
                .value_parser(value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("endpoint")
                .short('e')
                .long("endpoint")
                .help("Certificate transparency query endpoint [default: https://crt.sh/]")
                .value_name("URL"),
        )
        .arg(
            Arg::new("print")
                .short('p')
                .long("print")
                .action(ArgAction::SetTrue)
                .help("List the subdomains found"),
        )
        .arg(
            Arg::new("logs")
                .short('s')
                .long("logs")
                .action(ArgAction::SetTrue)
                .help("Save logs into a .log file next to the report"),
        )
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = cli().get_matches();

    match run(&args).await {
        Ok(summary) => {
            info!(
                "{} subdomains from {} records in {}",
                summary.subdomains.len(),
                summary.records,
                summary.report.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => ExitCode::from(report_failure(&err, &mut std::io::stderr())),
    }
}

/// Writes the one `error:` line of a failed run and returns its exit code.
fn report_failure(err: &Error, stderr: &mut impl Write) -> u8 {
    debug!("{:12} - {:?}", "SCAN FAILED", err);
    let _ = writeln!(stderr, "error: {}", err);
    err.exit_code()
}

async fn run(args: &ArgMatches) -> Result<ScanSummary> {
    let target = args
        .get_one::<String>("domain")
        .map(String::as_str)
        .unwrap_or_default();
    let domain = clean_domain(target)?;

    let output_dir = match args.get_one::<PathBuf>("output-dir") {
        Some(dir) => dir.clone(),
        None => home_dir()?,
    };
    ensure_dir(&output_dir)?;

    let date = today();
    let stem = report_stem(&domain, date)?;
    let log_file = args
        .get_flag("logs")
        .then_some((output_dir.as_path(), stem.as_str()));
    init_tracing_subscriber(log_file)?;

    let timeout = args
        .get_one::<u64>("timeout")
        .copied()
        .unwrap_or(HTTP_REQUEST_TIMEOUT_SECS);
    let http_client = new_http_client(Duration::from_secs(timeout))?;

    let source = match args.get_one::<String>("endpoint") {
        Some(endpoint) => CrtSh::with_endpoint(endpoint.as_str()),
        None => CrtSh::new(),
    };
    info!("Enumerating {} with {}", domain, source.name());
    debug!("{}", source.description());

    let options = ScanOptions {
        output_dir: &output_dir,
        date,
        print: args.get_flag("print"),
    };
    scan(&source, &http_client, &domain, &options, &mut std::io::stdout()).await
}

#[cfg(test)]
mod tests {
    use super::{cli, report_failure, Error};
    use std::path::PathBuf;

    #[test]
    fn cli_definition_is_valid() {
        cli().debug_assert();
    }

    #[test]
    fn domain_is_required_and_single() {
        assert!(cli().try_get_matches_from(["subdomain-scraper"]).is_err());
        assert!(cli()
            .try_get_matches_from(["subdomain-scraper", "a.com", "b.com"])
            .is_err());
    }

    #[test]
    fn defaults_apply() {
        let args = cli()
            .try_get_matches_from(["subdomain-scraper", "example.com"])
            .unwrap();

        assert_eq!(args.get_one::<String>("domain").unwrap(), "example.com");
        assert!(args.get_one::<u64>("timeout").is_none());
        assert!(args.get_one::<String>("endpoint").is_none());
        assert!(args.get_one::<PathBuf>("output-dir").is_none());
        assert!(!args.get_flag("print"));
        assert!(!args.get_flag("logs"));
    }

    #[test]
    fn options_parse() {
        let args = cli()
            .try_get_matches_from([
                "subdomain-scraper",
                "example.com",
                "-o",
                "/tmp/reports",
                "--timeout",
                "30",
                "-p",
                "-s",
            ])
            .unwrap();

        assert_eq!(
            args.get_one::<PathBuf>("output-dir").unwrap(),
            &PathBuf::from("/tmp/reports")
        );
        assert_eq!(*args.get_one::<u64>("timeout").unwrap(), 30);
        assert!(args.get_flag("print"));
        assert!(args.get_flag("logs"));
    }

    #[test]
    fn failure_is_one_stderr_line_with_stage_code() {
        let mut stderr = Vec::new();
        let err = Error::HttpStatus {
            status: 429,
            url: "https://crt.sh/?q=example.com&output=json".to_string(),
        };

        let code = report_failure(&err, &mut stderr);

        assert_eq!(code, 4);
        assert_eq!(
            String::from_utf8(stderr).unwrap(),
            "error: http status failure: https://crt.sh/?q=example.com&output=json answered 429\n"
        );
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(cli()
            .try_get_matches_from(["subdomain-scraper", "example.com", "-t", "0"])
            .is_err());
    }
}
