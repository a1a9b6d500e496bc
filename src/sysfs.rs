use std::{
    fs,
    io,
    io::Write,
    path::{Path, PathBuf},
};

use log::debug;

use crate::error::{Error, Result};

/// Class directory all backlight devices live under.
pub const SYSFS_ROOT: &str = "/sys/class/backlight";

/// The three control files a well-formed device directory exposes.
pub const DRIVER_FILES: [&str; 3] = ["brightness", "actual_brightness", "max_brightness"];

/// One backlight device directory, e.g. /sys/class/backlight/intel_backlight.
#[derive(Clone, Debug)]
pub struct BacklightDevice {
    pub device: String,
    pub path: PathBuf,
}

impl BacklightDevice {
    pub fn new(name: &str) -> Result<BacklightDevice> {
        Self::with_root(Path::new(SYSFS_ROOT), name)
    }

    /// Same as `new` but rooted somewhere other than /sys/class/backlight.
    /// Tests point this at a temp directory.
    pub fn with_root(root: &Path, name: &str) -> Result<BacklightDevice> {
        let path = root.join(name);
        if path.is_dir() {
            Ok(Self {
                device: name.to_string(),
                path,
            })
        } else {
            Err(Error::Io {
                path,
                source: io::Error::from(io::ErrorKind::NotFound),
            })
        }
    }

    /// Scans the device directory and keeps only the expected driver files.
    /// Anything other than exactly three matches means the directory is
    /// partial or malformed and no action may run against it.
    pub fn discover(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.path).map_err(|source| Error::Io {
            path: self.path.clone(),
            source,
        })?;

        let mut found = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| Error::Io {
                path: self.path.clone(),
                source,
            })?;
            let name = entry.file_name().to_string_lossy().to_string();
            if DRIVER_FILES.contains(&name.as_str()) {
                found.push(name);
            }
        }

        debug!("discovered {:?} in {}", found, self.path.display());
        if found.len() == 3 {
            Ok(found)
        } else {
            Err(Error::DriverFilesNotFound)
        }
    }

    pub fn file_path(&self, val: &str) -> PathBuf {
        self.path.join(val)
    }

    /// Reads a driver file's whole content with the trailing newline removed.
    pub fn get_value(&self, val: &str) -> Result<String> {
        let path = self.file_path(val);
        let content = fs::read_to_string(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        Ok(content.trim_end_matches('\n').to_string())
    }

    /// Writes a driver file in place. The file is opened write-only without
    /// create, so a device file that vanished since discovery surfaces as a
    /// NotFound I/O error rather than being silently recreated.
    pub fn set_value(&self, val: &str, data: &str) -> Result<()> {
        let path = self.file_path(val);
        debug!("writing {} to {}", data, path.display());
        fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&path)
            .and_then(|mut f| {
                f.write_all(data.as_bytes())?;
                f.flush()
            })
            .map_err(|source| Error::Io { path, source })
    }
}
