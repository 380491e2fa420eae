use derive_more::From;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, From)]
pub enum Error {
    // -- Fetch
    #[from]
    Network(reqwest::Error),

    HttpStatus {
        status: u16,
        url: String,
    },

    // -- Normalize
    #[from]
    Parse(serde_json::Error),

    // -- Write
    #[from]
    Io(std::io::Error),

    #[from]
    LogFile(tracing_appender::rolling::InitError),

    #[from]
    TimeFormat(time::error::Format),

    #[from]
    TracingInit(tracing::subscriber::SetGlobalDefaultError),

    // -- Input
    InvalidDomain(String),

    HomeDirNotFound,
}

impl Error {
    /// Process exit code reported for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Network(_) => 3,
            Error::HttpStatus { .. } => 4,
            Error::Parse(_) => 5,
            Error::Io(_) | Error::LogFile(_) => 6,
            Error::InvalidDomain(_) => 7,
            Error::HomeDirNotFound => 8,
            Error::TimeFormat(_) | Error::TracingInit(_) => 1,
        }
    }
}

// region:    --- Error Boilerplate

impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        match self {
            Error::Network(err) if err.is_timeout() => {
                write!(fmt, "network failure: request timed out ({err})")
            }
            Error::Network(err) => write!(fmt, "network failure: {err}"),
            Error::HttpStatus { status, url } => {
                write!(fmt, "http status failure: {url} answered {status}")
            }
            Error::Parse(err) => write!(fmt, "parse failure: invalid response body ({err})"),
            Error::Io(err) => write!(fmt, "io failure: {err}"),
            Error::LogFile(err) => write!(fmt, "io failure: cannot create the log file ({err})"),
            Error::TimeFormat(err) => write!(fmt, "date formatting failure: {err}"),
            Error::TracingInit(err) => write!(fmt, "logging setup failure: {err}"),
            Error::InvalidDomain(domain) => {
                write!(fmt, "invalid domain: {domain:?} does not look like a domain name")
            }
            Error::HomeDirNotFound => write!(fmt, "io failure: cannot resolve the home directory"),
        }
    }
}

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
