use std::path::Path;

use log::debug;

use crate::{
    config::Config,
    error::{Error, Result},
    sysfs::BacklightDevice,
};

/// The one thing a single invocation is allowed to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Get,
    Set,
    Dec,
    Inc,
}

/// Loads a device's brightness values and executes exactly one action per run.
///
/// Holds a reference to the configuration rather than embedding it, and keeps
/// the readings it loaded at init time; nothing re-reads the device once an
/// action is in flight.
#[derive(Debug)]
pub struct BrightnessControl<'a> {
    config: &'a Config,
    device: BacklightDevice,
    brightness: i64,
    actual_brightness: i64,
    max_brightness: i64,
}

impl<'a> BrightnessControl<'a> {
    /// Resolves the device under /sys/class/backlight, checks that all three
    /// driver files are present and loads their values. Any failure here is
    /// terminal for the invocation.
    pub fn init(config: &'a Config) -> Result<BrightnessControl<'a>> {
        Self::from_device(config, BacklightDevice::new(&config.device)?)
    }

    pub fn init_with_root(config: &'a Config, root: &Path) -> Result<BrightnessControl<'a>> {
        Self::from_device(config, BacklightDevice::with_root(root, &config.device)?)
    }

    fn from_device(config: &'a Config, device: BacklightDevice) -> Result<BrightnessControl<'a>> {
        let files = device.discover()?;
        let mut bc = BrightnessControl {
            config,
            device,
            brightness: 0,
            actual_brightness: 0,
            max_brightness: 0,
        };
        bc.load_params(&files)?;
        Ok(bc)
    }

    /// Fills the three readings from the discovered driver files. Fails on the
    /// first unreadable or unparseable file, on a file name outside the driver
    /// set, or when anything other than exactly three names is handed in.
    pub fn load_params(&mut self, files: &[String]) -> Result<()> {
        if files.len() != 3 {
            return Err(Error::DriverFilesNotFound);
        }
        for name in files {
            let value = self.read_value(name)?;
            match name.as_str() {
                "brightness" => self.brightness = value,
                "actual_brightness" => self.actual_brightness = value,
                "max_brightness" => self.max_brightness = value,
                other => {
                    return Err(Error::UnexpectedDriverFile {
                        name: other.to_string(),
                    })
                }
            }
        }
        // A zero maximum would turn every percentage below into a division
        // fault, so it is rejected here instead.
        if self.max_brightness == 0 {
            return Err(Error::ZeroMaxBrightness);
        }
        debug!(
            "loaded {}: brightness={} actual={} max={}",
            self.device.device, self.brightness, self.actual_brightness, self.max_brightness
        );
        Ok(())
    }

    fn read_value(&self, name: &str) -> Result<i64> {
        let content = self.device.get_value(name)?;
        content.parse::<i64>().map_err(|source| Error::Parse {
            path: self.device.file_path(name),
            source,
        })
    }

    /// Checks that the requested action is the only one active and that its
    /// amount is in range. Called once per run, for the single chosen action.
    pub fn validate_options(&self, action: Action) -> Result<()> {
        let c = self.config;
        match action {
            Action::Get => {
                if c.set > 0 || c.inc > 0 || c.dec > 0 {
                    return Err(Error::CombinedOptions);
                }
            }
            Action::Set => {
                if c.inc > 0 || c.dec > 0 || c.get {
                    return Err(Error::CombinedOptions);
                }
                if c.set == 0 || c.set > 100 {
                    return Err(Error::SetOutOfRange { value: c.set });
                }
            }
            Action::Dec => {
                if c.inc > 0 || c.set > 0 || c.get {
                    return Err(Error::CombinedOptions);
                }
                if c.dec == 0 || c.dec > 10 {
                    return Err(Error::StepOutOfRange { value: c.dec });
                }
            }
            Action::Inc => {
                if c.dec > 0 || c.set > 0 || c.get {
                    return Err(Error::CombinedOptions);
                }
                if c.inc == 0 || c.inc > 10 {
                    return Err(Error::StepOutOfRange { value: c.inc });
                }
            }
        }
        Ok(())
    }

    /// Picks the action implied by the configuration, validates it and runs
    /// it. Priority order is get, set, dec, inc; the first active field wins
    /// and only that one is validated. Returns the percentage string for get,
    /// an empty string for the mutating actions.
    pub fn run(&self) -> Result<String> {
        let action = if self.config.get {
            Action::Get
        } else if self.config.set > 0 {
            Action::Set
        } else if self.config.dec > 0 {
            Action::Dec
        } else if self.config.inc > 0 {
            Action::Inc
        } else {
            return Err(Error::NoOptions);
        };
        debug!("running {:?} on {}", action, self.device.device);

        self.validate_options(action)?;
        match action {
            Action::Get => Ok(self.get()),
            Action::Set => self.set().map(|_| String::new()),
            Action::Dec => self.dec().map(|_| String::new()),
            Action::Inc => self.inc().map(|_| String::new()),
        }
    }

    /// Current brightness as a truncated percentage of the maximum.
    pub fn get(&self) -> String {
        (self.actual_brightness * 100 / self.max_brightness).to_string()
    }

    /// Raises brightness by the configured percentage of the maximum.
    pub fn inc(&self) -> Result<()> {
        let value = self.actual_brightness + self.config.inc as i64 * self.max_brightness / 100;
        self.write_in_range(value)
    }

    /// Lowers brightness by the configured percentage of the maximum.
    pub fn dec(&self) -> Result<()> {
        let value = self.actual_brightness - self.config.dec as i64 * self.max_brightness / 100;
        self.write_in_range(value)
    }

    /// Sets brightness to the configured percentage of the maximum.
    pub fn set(&self) -> Result<()> {
        let value = self.config.set as i64 * self.max_brightness / 100;
        self.write_in_range(value)
    }

    // A computed value outside (0, max] is dropped without touching the
    // device and without an error.
    fn write_in_range(&self, value: i64) -> Result<()> {
        if value > 0 && value <= self.max_brightness {
            self.device.set_value("brightness", &value.to_string())
        } else {
            debug!("value {} out of (0, {}], skipping write", value, self.max_brightness);
            Ok(())
        }
    }
}
