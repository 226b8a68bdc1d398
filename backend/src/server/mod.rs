//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

#[cfg(debug_assertions)]
use kanora_backend::ApiDoc;
use kanora_backend::Trace;
use kanora_backend::inbound::http::artists::{get_artist_details, list_artists};
use kanora_backend::inbound::http::health::{HealthState, live, ready};
use kanora_backend::inbound::http::state::HttpState;
use kanora_backend::inbound::http::users::{current_user, login, logout};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use state_builders::build_http_state;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        key,
        cookie_secure,
        same_site,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_same_site(same_site)
        .build();

    let api = web::scope("/api/v1")
        .wrap(session)
        .service(login)
        .service(logout)
        .service(current_user)
        .service(list_artists)
        .service(get_artist_details);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app =
        app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Bind and start the HTTP server described by `config`.
pub fn run(config: ServerConfig) -> std::io::Result<Server> {
    let health_state = web::Data::new(HealthState::new());
    let http_state = web::Data::new(build_http_state(&config));

    let deps = AppDependencies {
        health_state: health_state.clone(),
        http_state,
        key: config.key().clone(),
        cookie_secure: config.cookie_secure(),
        same_site: config.same_site(),
    };

    let server = HttpServer::new(move || build_app(deps.clone())).bind(config.bind_addr())?;

    health_state.mark_ready();
    Ok(server.run())
}
