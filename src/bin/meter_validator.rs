use std::path::{Path, PathBuf};

use env_logger;
use log::{error, info};

use structopt::StructOpt;

use meter_validator::{assert_equals, MeterItem};

#[derive(StructOpt, Debug)]
#[structopt(name = "meter_validator")]
struct Opt {
	/// TOML file with the expected meters
	#[structopt(short, long, parse(from_os_str))]
	expected: PathBuf,
	/// TOML file with the recorded meters
	#[structopt(short, long, parse(from_os_str))]
	actual: PathBuf,
}

fn load(path: &Path) -> Result<MeterItem, Box<dyn std::error::Error>> {
	let s = std::fs::read_to_string(path)?;
	Ok(toml::from_str(&s)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();
	let opt = Opt::from_args();

	let expected = load(&opt.expected)?;
	let actual = load(&opt.actual)?;
	info!("checking {} expected meters against {} recorded meters", expected.meters.len(), actual.meters.len());
	if let Err(e) = assert_equals(&expected, &actual) {
		error!("{}", e);
		return Err(e.into());
	}
	info!("all expected meters matched");
	Ok(())
}
