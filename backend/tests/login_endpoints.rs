//! Full-app login flow: session issuance, trace correlation, health probes.

use actix_web::{App, test, web};
use kanora_backend::Trace;
use kanora_backend::inbound::http::health::{HealthState, live, ready};
use kanora_backend::inbound::http::state::HttpState;
use kanora_backend::inbound::http::users::{current_user, login, logout};
use kanora_backend::test_support::test_session_middleware;
use kanora_types::LoginRequest;
use serde_json::Value;

macro_rules! init_app {
    ($health:expr) => {
        test::init_service(
            App::new()
                .app_data($health)
                .app_data(web::Data::new(HttpState::fixtures()))
                .wrap(Trace)
                .service(
                    web::scope("/api/v1")
                        .wrap(test_session_middleware())
                        .service(login)
                        .service(logout)
                        .service(current_user),
                )
                .service(ready)
                .service(live),
        )
        .await
    };
}

#[actix_web::test]
async fn login_then_me_then_logout() {
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    let app = init_app!(health);

    let login_res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(LoginRequest {
                username: "admin".to_owned(),
                password: "password".to_owned(),
            })
            .to_request(),
    )
    .await;
    assert!(login_res.status().is_success());
    let cookie = login_res
        .response()
        .cookies()
        .find(|c| c.name() == "session")
        .expect("session cookie")
        .into_owned();

    let me_res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/users/me")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    assert!(me_res.status().is_success());
    let me: Value = serde_json::from_slice(&test::read_body(me_res).await).expect("JSON");
    assert_eq!(
        me.get("displayName").and_then(Value::as_str),
        Some("Kanora Admin")
    );

    let logout_res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/logout")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(logout_res.status(), actix_web::http::StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn error_responses_carry_a_trace_identifier() {
    let health = web::Data::new(HealthState::new());
    let app = init_app!(health);

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(LoginRequest {
                username: "admin".to_owned(),
                password: "wrong".to_owned(),
            })
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    // Trace middleware stamps every response; the error payload carries the
    // same identifier for log correlation.
    let header = response
        .headers()
        .get("trace-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .expect("trace header present");
    let payload: Value = serde_json::from_slice(&test::read_body(response).await).expect("JSON");
    assert_eq!(
        payload.get("traceId").and_then(Value::as_str),
        Some(header.as_str())
    );
}

#[actix_web::test]
async fn health_probes_reflect_readiness() {
    let health = web::Data::new(HealthState::new());
    let app = init_app!(health.clone());

    let not_ready =
        test::call_service(&app, test::TestRequest::get().uri("/health/ready").to_request()).await;
    assert_eq!(
        not_ready.status(),
        actix_web::http::StatusCode::SERVICE_UNAVAILABLE
    );

    health.mark_ready();
    let ready_res =
        test::call_service(&app, test::TestRequest::get().uri("/health/ready").to_request()).await;
    assert!(ready_res.status().is_success());

    let live_res =
        test::call_service(&app, test::TestRequest::get().uri("/health/live").to_request()).await;
    assert!(live_res.status().is_success());
}
