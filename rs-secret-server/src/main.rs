use actix_web::{get, middleware::Logger, web, App, HttpResponse, HttpServer, Responder};

use serde::Deserialize;
use rs_secret_core::secret::generator::{self, DEFAULT_LENGTH};
use rs_secret_core::secret::options::SecretOptions;

/// Struct representing query parameters for the `/v1/secret` endpoint
///
/// Unknown query keys are ignored during deserialization, only these
/// three are recognized.
#[derive(Deserialize)]
struct SecretParams {
	length: Option<i64>,
	symbols: Option<bool>,
	uppercase: Option<bool>,
}

impl SecretParams {
	/// Collapses the optional flags into generation options.
	fn options(&self) -> SecretOptions {
		SecretOptions {
			symbols: self.symbols.unwrap_or(false),
			uppercase: self.uppercase.unwrap_or(false),
		}
	}
}

/// HTTP GET endpoint `/v1/secret`
///
/// Generates a secret string based on query parameters and returns it
/// as the response body. A negative `length` is a client error.
#[get("/v1/secret")]
async fn get_secret(query: web::Query<SecretParams>) -> impl Responder {
	let length = query.length.unwrap_or(DEFAULT_LENGTH);

	match generator::generate_secret(length, &query.options()) {
		Ok(secret) => HttpResponse::Ok().body(secret),
		Err(e) => HttpResponse::BadRequest().body(e.to_string()),
	}
}

/// Main entry point for the server.
///
/// Starts an Actix-web HTTP server exposing the secret generation
/// endpoint. Generation is stateless, so no shared state is registered.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - Request logging goes through `env_logger` (`RUST_LOG=info`).
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();
	log::info!("Listening on 127.0.0.1:5000");

	HttpServer::new(|| {
		App::new()
			.wrap(Logger::default())
			.service(get_secret)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::http::StatusCode;
	use actix_web::test;

	#[actix_web::test]
	async fn secret_endpoint_honors_length() {
		let app = test::init_service(App::new().service(get_secret)).await;

		let request = test::TestRequest::get().uri("/v1/secret?length=10").to_request();
		let body = test::call_and_read_body(&app, request).await;
		assert_eq!(body.len(), 10);
	}

	#[actix_web::test]
	async fn secret_endpoint_defaults_to_32() {
		let app = test::init_service(App::new().service(get_secret)).await;

		let request = test::TestRequest::get().uri("/v1/secret").to_request();
		let body = test::call_and_read_body(&app, request).await;
		assert_eq!(body.len(), 32);
	}

	#[actix_web::test]
	async fn negative_length_is_a_bad_request() {
		let app = test::init_service(App::new().service(get_secret)).await;

		let request = test::TestRequest::get().uri("/v1/secret?length=-1").to_request();
		let response = test::call_service(&app, request).await;
		assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn unknown_query_keys_are_ignored() {
		let app = test::init_service(App::new().service(get_secret)).await;

		let request = test::TestRequest::get()
			.uri("/v1/secret?length=8&hello=world")
			.to_request();
		let body = test::call_and_read_body(&app, request).await;
		assert_eq!(body.len(), 8);
	}
}
