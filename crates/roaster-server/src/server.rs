//! Server module.

use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web::{self, Data},
    App, HttpResponse, HttpServer,
};
use actix_web_prom::PrometheusMetrics;
use roaster_config::Config;
use roaster_core::{CoreContext, CoreModule};
use roaster_ghapi_interface::ApiService;
use tracing::info;

use crate::{
    health::health_check_route,
    metrics::build_metrics_handler,
    roast::{roast_query_config, roast_route},
    Result, ServerError,
};

/// App context.
pub struct AppContext {
    /// Config.
    pub config: Config,
    /// Core module.
    pub core_module: CoreModule,
    /// API adapter
    pub api_service: Box<dyn ApiService>,
}

impl AppContext {
    /// Create new app context using adapters.
    pub fn new_with_adapters(
        config: Config,
        core_module: CoreModule,
        api_service: Box<dyn ApiService>,
    ) -> Self {
        Self {
            config,
            core_module,
            api_service,
        }
    }

    /// Convert the context for the core module.
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
        }
    }
}

/// Build Actix app.
pub fn build_actix_app(
    context: Data<AppContext>,
    prometheus: PrometheusMetrics,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(context)
        .app_data(roast_query_config())
        .wrap(prometheus)
        .wrap(Cors::permissive())
        .wrap(Logger::default())
        .route("/roast", web::get().to(roast_route))
        .route("/health", web::get().to(health_check_route))
        .route(
            "/",
            web::get().to(|| async {
                HttpResponse::Ok().json(serde_json::json!({"message": "Welcome on roaster!" }))
            }),
        )
}

/// Run roast server.
pub async fn run_server(context: AppContext) -> Result<()> {
    let address = get_bind_address(&context.config);

    info!(
        version = context.config.version,
        address = %address,
        authenticated = context.config.api.github.is_authenticated(),
        message = "Starting roast server",
    );

    run_server_internal(address, context).await
}

fn get_bind_address(config: &Config) -> String {
    format!("{}:{}", config.server.bind_ip, config.server.bind_port)
}

async fn run_server_internal(ip_with_port: String, context: AppContext) -> Result<()> {
    let prometheus = build_metrics_handler()?;
    let context = Data::new(context);
    let workers_count = context.config.server.workers_count;

    let mut server =
        HttpServer::new(move || build_actix_app(context.clone(), prometheus.clone()));

    if let Some(workers) = workers_count {
        server = server.workers(workers as usize);
    }

    server
        .bind(ip_with_port)
        .map_err(|e| ServerError::IoError { source: e })?
        .run()
        .await
        .map_err(|e| ServerError::IoError { source: e })
}

#[cfg(test)]
mod tests {
    use actix_http::StatusCode;
    use actix_web::test as actix_test;
    use pretty_assertions::assert_eq;
    use roaster_ghapi_interface::MockApiService;

    use super::*;

    fn context() -> Data<AppContext> {
        Data::new(AppContext::new_with_adapters(
            Config::from_env_no_version().unwrap(),
            CoreModule::builder().build(),
            Box::new(MockApiService::new()),
        ))
    }

    #[test]
    fn bind_address() {
        let mut config = Config::from_env_no_version().unwrap();
        config.server.bind_ip = "0.0.0.0".into();
        config.server.bind_port = 3000;

        assert_eq!(get_bind_address(&config), "0.0.0.0:3000");
    }

    #[actix_rt::test]
    async fn index() {
        let app = actix_test::init_service(build_actix_app(
            context(),
            build_metrics_handler().unwrap(),
        ))
        .await;
        let req = actix_test::TestRequest::get().uri("/").to_request();
        let body: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, serde_json::json!({"message": "Welcome on roaster!"}));
    }

    #[actix_rt::test]
    async fn malformed_query_is_json() {
        let app = actix_test::init_service(build_actix_app(
            context(),
            build_metrics_handler().unwrap(),
        ))
        .await;
        let req = actix_test::TestRequest::get()
            .uri("/roast?username=a&username=b")
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = actix_test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_rt::test]
    async fn metrics() {
        let app = actix_test::init_service(build_actix_app(
            context(),
            build_metrics_handler().unwrap(),
        ))
        .await;
        let req = actix_test::TestRequest::get().uri("/metrics").to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_rt::test]
    async fn cors_preflight() {
        let app = actix_test::init_service(build_actix_app(
            context(),
            build_metrics_handler().unwrap(),
        ))
        .await;
        let req = actix_test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/roast?username=octocat")
            .insert_header(("Origin", "https://example.com"))
            .insert_header(("Access-Control-Request-Method", "GET"))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp
            .headers()
            .contains_key("access-control-allow-origin"));
    }
}
