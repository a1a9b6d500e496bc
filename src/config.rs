use clap::Parser;

/// Command-line configuration. Built once by clap at startup and handed to the
/// controller by reference; a zero amount means the flag was not requested.
#[derive(Parser, Debug, Default)]
#[clap(version, about = "Read and adjust a sysfs backlight device")]
pub struct Config {
    /// brightness device under the backlight class
    #[clap(short = 'v', long, value_parser, default_value = "intel_backlight")]
    pub device: String,

    /// increment brightness by a percentage between 1 and 10
    #[clap(short, long, value_parser, default_value_t = 0)]
    pub inc: u32,

    /// decrement brightness by a percentage between 1 and 10
    #[clap(short, long, value_parser, default_value_t = 0)]
    pub dec: u32,

    /// set brightness to a percentage between 1 and 100
    #[clap(short, long, value_parser, default_value_t = 0)]
    pub set: u32,

    /// print the actual brightness percentage
    #[clap(short, long)]
    pub get: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_every_action_inactive() {
        let config = Config::try_parse_from(["backlightctl"]).unwrap();
        assert_eq!(config.device, "intel_backlight");
        assert_eq!(config.inc, 0);
        assert_eq!(config.dec, 0);
        assert_eq!(config.set, 0);
        assert!(!config.get);
    }

    #[test]
    fn parses_each_action_flag() {
        let config = Config::try_parse_from(["backlightctl", "-g"]).unwrap();
        assert!(config.get);

        let config = Config::try_parse_from(["backlightctl", "-i", "5"]).unwrap();
        assert_eq!(config.inc, 5);

        let config = Config::try_parse_from(["backlightctl", "--dec", "5"]).unwrap();
        assert_eq!(config.dec, 5);

        let config =
            Config::try_parse_from(["backlightctl", "-v", "amdgpu_bl0", "-s", "25"]).unwrap();
        assert_eq!(config.device, "amdgpu_bl0");
        assert_eq!(config.set, 25);
    }

    #[test]
    fn rejects_non_numeric_amounts() {
        assert!(Config::try_parse_from(["backlightctl", "-i", "five"]).is_err());
    }

    #[test]
    fn unknown_flags_are_errors_bound_for_stderr() {
        let err = Config::try_parse_from(["backlightctl", "--bogus-flag"]).unwrap_err();
        assert!(err.use_stderr());

        // Help is not a failure; main must not route it through the error path.
        let err = Config::try_parse_from(["backlightctl", "--help"]).unwrap_err();
        assert!(!err.use_stderr());
    }
}
