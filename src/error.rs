use std::{
    io,
    num::ParseIntError,
    path::PathBuf,
};

use thiserror::Error;

/// Everything that can abort a run. Each failure mode gets its own variant so
/// callers and tests can match on the kind instead of parsing message text.
#[derive(Error, Debug)]
pub enum Error {
    /// The device directory did not contain exactly the three driver files.
    #[error("driver files not found in device path")]
    DriverFilesNotFound,

    /// A file name outside the known driver set reached the loader.
    #[error("no proper files on driver folder: {name}")]
    UnexpectedDriverFile { name: String },

    /// Reading or writing a driver file failed. Carries the OS error so a
    /// missing file still shows up as `NotFound` to the caller.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A driver file held something other than a base-10 integer.
    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseIntError,
    },

    /// More than one of get/set/dec/inc was requested at once.
    #[error("combined options")]
    CombinedOptions,

    /// --set outside [1, 100].
    #[error("value must be between 1 and 100, got {value}")]
    SetOutOfRange { value: u32 },

    /// --inc or --dec outside [1, 10].
    #[error("value must be between 1 and 10, got {value}")]
    StepOutOfRange { value: u32 },

    /// No action flag was supplied at all.
    #[error("no options, try backlightctl -h")]
    NoOptions,

    /// max_brightness read as 0; percentage math would divide by zero.
    #[error("device reports a max_brightness of 0")]
    ZeroMaxBrightness,
}

impl Error {
    /// True when the underlying cause is a missing file, the race the caller
    /// has to tolerate between discovery and the action write.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
