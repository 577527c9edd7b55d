mod config;

use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::error::{InternalError, QueryPayloadError};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, Responder, get, middleware, put, web};
use clap::Parser;

use serde::Deserialize;
use rs_randstr_core::model::kind::StringKind;
use rs_randstr_core::source::RandomSource;

use config::{Config, Limits};

const DEFAULT_LENGTH: usize = 8;

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	kind: Option<StringKind>,
	length: Option<usize>,
	count: Option<usize>,
}

#[derive(Deserialize)]
struct SeedQuery {
	value: Option<u64>,
}

struct SharedData {
	source: RandomSource,
}

impl GenerateParams {
	/// Applies defaults and checks the request against `limits`.
	///
	/// Returns `(kind, length, count)`.
	fn resolve(&self, limits: &Limits) -> Result<(StringKind, usize, usize), String> {
		let kind = self.kind.unwrap_or(StringKind::HumanFriendly);
		let length = self.length.unwrap_or(DEFAULT_LENGTH);
		let count = self.count.unwrap_or(1);

		if length > limits.max_length {
			return Err(format!("Length must be at most {}, got {}", limits.max_length, length));
		}
		if count == 0 || count > limits.max_count {
			return Err(format!("Count must be between 1 and {}, got {}", limits.max_count, count));
		}
		Ok((kind, length, count))
	}
}

/// Renders one generated value as a line of text.
///
/// Raw byte strings are hex-encoded.
fn render(kind: StringKind, value: Vec<u8>) -> String {
	if kind.is_text() {
		String::from_utf8_lossy(&value).into_owned()
	} else {
		value.iter().map(|b| format!("{b:02x}")).collect()
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates `count` strings of the requested kind, one per line.
#[get("/v1/generate")]
async fn get_generated(
	data: web::Data<Mutex<SharedData>>,
	limits: web::Data<Limits>,
	query: web::Query<GenerateParams>,
) -> impl Responder {
	let (kind, length, count) = match query.resolve(&limits) {
		Ok(resolved) => resolved,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Random source lock failed"),
	};

	let lines: Vec<String> = (0..count)
		.map(|_| render(kind, kind.generate(&mut shared_data.source, length)))
		.collect();
	HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(lines.join("\n"))
}

#[get("/v1/kinds")]
async fn get_kinds() -> impl Responder {
	let names: Vec<&str> = StringKind::ALL.iter().map(StringKind::as_str).collect();
	HttpResponse::Ok().body(names.join("\n"))
}

#[put("/v1/seed")]
async fn put_seed(data: web::Data<Mutex<SharedData>>, query: web::Query<SeedQuery>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Random source lock failed"),
	};

	match query.value {
		Some(seed) => shared_data.source.reseed(seed),
		None => shared_data.source.reseed_from_time(),
	}
	HttpResponse::Ok().body("Random source reseeded")
}

/// Turns malformed query strings into plain-text 400 responses.
fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
	let body = err.to_string();
	InternalError::from_response(err, HttpResponse::BadRequest().body(body)).into()
}

/// Registers every endpoint and the query error handler.
fn routes(cfg: &mut web::ServiceConfig) {
	cfg.app_data(web::QueryConfig::default().error_handler(query_error))
		.service(get_generated)
		.service(get_kinds)
		.service(put_seed);
}

/// Main entry point for the server.
///
/// Builds the random source, wraps it in a `Mutex` for thread safety,
/// and starts an Actix-web HTTP server.
///
/// # Notes
/// - Bind address, limits and worker count come from `Config`.
/// - Log filter defaults to `info`; override with `RUST_LOG`.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = Config::parse();
	let source = match config.seed {
		Some(seed) => RandomSource::with_seed(seed),
		None => RandomSource::from_time(),
	};
	let shared_source = web::Data::new(Mutex::new(SharedData { source }));
	let limits = web::Data::new(config.limits());

	log::info!(
		"listening on {}:{} ({} workers, max length {}, max count {})",
		config.host, config.port, config.workers, config.max_length, config.max_count
	);

	HttpServer::new(move || {
		App::new()
			.wrap(middleware::Logger::default())
			.wrap(Cors::default().allow_any_origin().allowed_methods(vec!["GET", "PUT"]))
			.app_data(shared_source.clone())
			.app_data(limits.clone())
			.configure(routes)
	})
		.workers(config.workers)
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}
