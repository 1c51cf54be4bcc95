use std::fmt::{self, Display, Formatter};

/// Exit status used for every usage fault except an explicit help request
pub const USAGE_EXIT_CODE: i32 = 2;

/// Errors raised while registering flags or parsing process arguments
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A flag definition reached the registry without an action attached
    MissingAction(String),
    /// Shorthand is empty, starts with '-' or contains '='
    InvalidName(String),
    /// Token looks like a flag but cannot be one (e.g. `---x` or `-=x`)
    BadSyntax(String),
    /// Flag on the command line that was never registered
    UnknownFlag(String),
    /// Value flag was the last token and no `=value` was given
    MissingValue(String),
    /// Presence-only flag given as `-flag=value` with a value that is not a
    /// boolean literal
    InvalidBool { flag: String, value: String },
    /// Process argument that is not valid unicode, shown lossily
    InvalidUtf8(String),
    /// `-h` or `-help` was passed and neither is registered
    HelpRequested,
    /// Problem while setting up the logger
    LoggerInitFailed(String),
}

impl Error {
    /// Process exit status for this error when parsing fails fast
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::HelpRequested => 0,
            _ => USAGE_EXIT_CODE,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Error::MissingAction(short) => write!(f, "no action given for flag -{}", short),
            Error::InvalidName(short) => write!(f, "invalid flag name '{}'", short),
            Error::BadSyntax(token) => write!(f, "bad flag syntax: {}", token),
            Error::UnknownFlag(name) => write!(f, "flag provided but not defined: -{}", name),
            Error::MissingValue(name) => write!(f, "flag needs an argument: -{}", name),
            Error::InvalidBool { flag, value } => {
                write!(f, "invalid boolean value {:?} for -{}", value, flag)
            }
            Error::InvalidUtf8(arg) => write!(f, "invalid unicode in argument: {}", arg),
            Error::HelpRequested => write!(f, "help requested"),
            Error::LoggerInitFailed(msg) => write!(f, "logger init failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
