use std::time::Instant;

use pendulum::config::SimConfig;
use pendulum::energy::total_energy;

fn main() -> pendulum::Result<()> {
	tracing_subscriber::fmt::init();
	let mut iter = std::env::args();
	iter.next();
	let config = match iter.next() {
		Some(path) => SimConfig::load(path)?,
		None => SimConfig::default(),
	};
	let mut dp = config.build()?;
	let rframes = 1_000_000;
	let start = Instant::now();
	for _ in 0..rframes {
		dp.step(None);
	}
	let duration = start.elapsed().as_secs_f64();
	eprintln!(
		"{} ticks in {:.3}s ({:.0} ticks/s), energy {:.6}",
		rframes,
		duration,
		rframes as f64 / duration,
		total_energy(&dp),
	);
	Ok(())
}
