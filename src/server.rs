use crate::compose::{FALLBACK_NOTICE, compose};
use crate::io_struct::{
    FieldError, GenerateReqInput, GenerateRequest, GenerateResponse, ValidationErrors,
};
use crate::provider::DraftProvider;
use actix_cors::Cors;
use actix_web::{HttpResponse, HttpServer, get, post, web};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Clone)]
pub struct AppState {
    pub provider: Option<Arc<dyn DraftProvider>>,
}

impl AppState {
    /// Linear per-request flow: no provider means the mock draft verbatim; a
    /// configured provider is called at most once and any failure degrades to
    /// the mock draft behind a visible notice. Never produces a 5xx.
    pub async fn dispatch(&self, request: &GenerateRequest) -> String {
        let Some(provider) = &self.provider else {
            return compose(request);
        };
        match provider.generate(&request.prompt).await {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Falling back to mock draft after AI provider error: {e:#}");
                format!("{}{}", FALLBACK_NOTICE, compose(request))
            }
        }
    }
}

#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({"status": "ok"}))
}

#[post("/generate")]
pub async fn generate(
    req: web::Json<GenerateReqInput>,
    app_state: web::Data<AppState>,
) -> HttpResponse {
    let request = match req.validate() {
        Ok(request) => request,
        Err(errors) => {
            log::info!(
                "Validation error on /generate request ({} field error(s)).",
                errors.detail.len()
            );
            return HttpResponse::UnprocessableEntity().json(errors);
        }
    };
    let result = app_state.dispatch(&request).await;
    HttpResponse::Ok().json(GenerateResponse { result })
}

/// Bodies that fail deserialization (missing or mistyped fields) get the
/// same 422 detail shape the validator produces, instead of the framework's
/// plain-text 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let errors = ValidationErrors {
            detail: vec![FieldError {
                field: "body",
                message: err.to_string(),
            }],
        };
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::UnprocessableEntity().json(errors),
        )
        .into()
    })
}

fn build_cors(allowed_origins: &[String]) -> Cors {
    let cors = allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));
    cors.allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

pub async fn startup(config: ServerConfig, app_state: AppState) -> std::io::Result<()> {
    let state = web::Data::new(app_state);

    println!("Starting server at {}:{}", config.host, config.port);

    if state.provider.is_some() {
        log::info!("AI provider configured; /generate will call it and fall back on failure.");
    } else {
        log::info!("No AI provider configured; /generate serves mock drafts only.");
    }

    let origins = config.cors_allowed_origins.clone();
    HttpServer::new(move || {
        actix_web::App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(build_cors(&origins))
            .app_data(state.clone())
            .app_data(json_config())
            .service(health)
            .service(generate)
    })
    .bind((config.host, config.port))?
    .run()
    .await?;

    std::io::Result::Ok(())
}
