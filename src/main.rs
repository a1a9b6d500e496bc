use backlightctl::{
    config::Config,
    controller::BrightnessControl,
};

use anyhow::Result;
use clap::Parser;

const EXAMPLE: &str = "Examples :
	backlightctl -v intel_backlight -g
	backlightctl -v intel_backlight -i 5
	backlightctl -v intel_backlight -d 5
	backlightctl -v intel_backlight -s 25
";

fn try_main(config: &Config) -> Result<()> {
    let bc = BrightnessControl::init(config)?;
    let out = bc.run()?;
    if !out.is_empty() {
        println!("{}", out);
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let config = match Config::try_parse() {
        Ok(config) => config,
        // Help and version go to stdout with a zero exit; real flag errors
        // get the usage examples and a non-zero exit like any other failure.
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("{}", EXAMPLE);
            std::process::exit(1);
        }
    };

    if let Err(err) = try_main(&config) {
        eprintln!("An error occurred : {}", err);
        eprintln!("{}", EXAMPLE);
        std::process::exit(1);
    }
}
