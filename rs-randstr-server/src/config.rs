use clap::Parser;

/// Server configuration, read from the command line or the environment.
#[derive(Parser, Debug, Clone)]
#[command(name = "rs-randstr-server", about = "HTTP service for random strings", version)]
pub struct Config {
	/// Address to bind
	#[arg(long, env = "RANDSTR_HOST", default_value = "127.0.0.1")]
	pub host: String,

	/// Port to bind
	#[arg(long, env = "RANDSTR_PORT", default_value_t = 5000)]
	pub port: u16,

	/// Longest string a single request may ask for
	#[arg(long, env = "RANDSTR_MAX_LENGTH", default_value_t = 4096)]
	pub max_length: usize,

	/// Most strings a single request may ask for
	#[arg(long, env = "RANDSTR_MAX_COUNT", default_value_t = 100)]
	pub max_count: usize,

	/// HTTP worker threads
	#[arg(long, env = "RANDSTR_WORKERS", default_value_t = num_cpus::get(), value_parser = parse_workers)]
	pub workers: usize,

	/// Fixed seed for reproducible output (time-based if absent)
	#[arg(long, env = "RANDSTR_SEED")]
	pub seed: Option<u64>,
}

impl Config {
	pub fn limits(&self) -> Limits {
		Limits {
			max_length: self.max_length,
			max_count: self.max_count,
		}
	}
}

/// Worker count must be at least 1.
fn parse_workers(s: &str) -> Result<usize, String> {
	match s.parse::<usize>() {
		Ok(0) => Err("Workers must be at least 1".to_owned()),
		Ok(n) => Ok(n),
		Err(e) => Err(format!("Invalid worker count {s}: {e}")),
	}
}

/// Per-request bounds shared with the handlers.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
	pub max_length: usize,
	pub max_count: usize,
}

impl Default for Limits {
	fn default() -> Self {
		Self {
			max_length: 4096,
			max_count: 100,
		}
	}
}
