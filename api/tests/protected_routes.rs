//! Tests for the JWT middleware and the protected food, meal and profile
//! endpoints.

mod common;

use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::{test, App};
use serde_json::{json, Value};

use lt_api::dto::auth::TokenPairResponse;

#[actix_web::test]
async fn protected_route_requires_a_token() {
    let (state, codec) = common::test_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(common::mock_routes(codec)),
    )
    .await;

    // JwtAuth rejects with Err, so the response surfaces as a service
    // error rather than an Ok response
    let req = test::TestRequest::get()
        .uri("/api/user/weekly-summary")
        .to_request();
    let err = test::try_call_service(&app, req)
        .await
        .expect_err("request without a token must be rejected");
    assert_eq!(err.error_response().status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn garbage_bearer_token_is_rejected() {
    let (state, codec) = common::test_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(common::mock_routes(codec)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/user/weekly-summary")
        .insert_header(("Authorization", "Bearer not.a.token"))
        .to_request();
    let err = test::try_call_service(&app, req)
        .await
        .expect_err("unparseable token must be rejected");
    assert_eq!(err.error_response().status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn access_token_cookie_grants_access() {
    let (state, codec) = common::test_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(common::mock_routes(codec)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({
            "name": "Julia",
            "email": "julia@example.com",
            "password": "hunter2!"
        }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({"email": "julia@example.com", "password": "hunter2!"}))
        .to_request();
    let tokens: TokenPairResponse =
        test::read_body_json(test::call_service(&app, req).await).await;

    let req = test::TestRequest::get()
        .uri("/api/user/weekly-summary")
        .cookie(Cookie::new("access_token", tokens.access_token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn refresh_token_does_not_pass_the_middleware() {
    let (state, codec) = common::test_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(common::mock_routes(codec)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({
            "name": "Julia",
            "email": "julia@example.com",
            "password": "hunter2!"
        }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({"email": "julia@example.com", "password": "hunter2!"}))
        .to_request();
    let tokens: TokenPairResponse =
        test::read_body_json(test::call_service(&app, req).await).await;

    // signed with the refresh key, so the access codec sees a bad signature
    let req = test::TestRequest::get()
        .uri("/api/user/weekly-summary")
        .insert_header(("Authorization", format!("Bearer {}", tokens.refresh_token)))
        .to_request();
    let err = test::try_call_service(&app, req)
        .await
        .expect_err("refresh token must not pass the access middleware");
    assert_eq!(err.error_response().status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn meal_logging_flow_produces_scaled_totals() {
    let (state, codec) = common::test_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(common::mock_routes(codec)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({
            "name": "Julia",
            "email": "julia@example.com",
            "password": "hunter2!"
        }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({"email": "julia@example.com", "password": "hunter2!"}))
        .to_request();
    let tokens: TokenPairResponse =
        test::read_body_json(test::call_service(&app, req).await).await;
    let bearer = format!("Bearer {}", tokens.access_token);

    let req = test::TestRequest::post()
        .uri("/api/meals")
        .insert_header(("Authorization", bearer.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let meal: Value = test::read_body_json(resp).await;
    let meal_id = meal["id"].as_i64().expect("meal id");

    // 200g of rice (130 kcal / 100g)
    let req = test::TestRequest::post()
        .uri("/api/meals/items")
        .insert_header(("Authorization", bearer.clone()))
        .set_json(json!({"meal_id": meal_id, "food_id": 1, "amount": 200.0}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let req = test::TestRequest::get()
        .uri(&format!("/api/meals/{meal_id}/summary"))
        .insert_header(("Authorization", bearer.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let totals: Value = test::read_body_json(resp).await;
    assert_eq!(totals["calories"].as_f64(), Some(260.0));
    assert_eq!(totals["carbs"].as_f64(), Some(56.0));

    // the meal was logged now, so today's summary includes it
    let req = test::TestRequest::get()
        .uri("/api/user/daily-summary")
        .insert_header(("Authorization", bearer))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let daily: Value = test::read_body_json(resp).await;
    assert_eq!(daily["calories"].as_f64(), Some(260.0));
}

#[actix_web::test]
async fn adding_an_unknown_food_is_not_found() {
    let (state, codec) = common::test_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(common::mock_routes(codec)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({
            "name": "Julia",
            "email": "julia@example.com",
            "password": "hunter2!"
        }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({"email": "julia@example.com", "password": "hunter2!"}))
        .to_request();
    let tokens: TokenPairResponse =
        test::read_body_json(test::call_service(&app, req).await).await;
    let bearer = format!("Bearer {}", tokens.access_token);

    let req = test::TestRequest::post()
        .uri("/api/meals")
        .insert_header(("Authorization", bearer.clone()))
        .to_request();
    let meal: Value = test::read_body_json(test::call_service(&app, req).await).await;

    let req = test::TestRequest::post()
        .uri("/api/meals/items")
        .insert_header(("Authorization", bearer))
        .set_json(json!({"meal_id": meal["id"], "food_id": 999, "amount": 100.0}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn profile_update_feeds_bmi_and_calorie_target() {
    let (state, codec) = common::test_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(common::mock_routes(codec)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({
            "name": "Julia",
            "email": "julia@example.com",
            "password": "hunter2!"
        }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({"email": "julia@example.com", "password": "hunter2!"}))
        .to_request();
    let tokens: TokenPairResponse =
        test::read_body_json(test::call_service(&app, req).await).await;
    let bearer = format!("Bearer {}", tokens.access_token);

    // BMI before any measurements is a validation error
    let req = test::TestRequest::get()
        .uri("/api/imc")
        .insert_header(("Authorization", bearer.clone()))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    let req = test::TestRequest::put()
        .uri("/api/user")
        .insert_header(("Authorization", bearer.clone()))
        .set_json(json!({
            "weight": 70.0,
            "height": 175.0,
            "age": 30,
            "gender": "female",
            "activity_level": 1.55,
            "goal": "lose"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let user: Value = test::read_body_json(resp).await;
    assert_eq!(user["weight"].as_f64(), Some(70.0));
    assert!(user.get("password_hash").is_none());

    let req = test::TestRequest::get()
        .uri("/api/imc")
        .insert_header(("Authorization", bearer.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let bmi: Value = test::read_body_json(resp).await;
    // 70 / 1.75^2
    assert!((bmi["bmi"].as_f64().expect("bmi") - 22.857).abs() < 0.01);
    assert_eq!(bmi["category"].as_str(), Some("normal"));

    let req = test::TestRequest::get()
        .uri("/api/calories")
        .insert_header(("Authorization", bearer))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let target: Value = test::read_body_json(resp).await;
    // female Harris-Benedict: 447.6 + 9.2*70 + 3.1*175 - 4.3*30
    let bmr = 447.6 + 9.2 * 70.0 + 3.1 * 175.0 - 4.3 * 30.0;
    assert!((target["bmr"].as_f64().expect("bmr") - bmr).abs() < 1e-6);
    assert!((target["goal_calories"].as_f64().expect("goal") - bmr * 1.55 * 0.8).abs() < 1e-6);
    assert_eq!(target["goal"].as_str(), Some("lose"));
}

#[actix_web::test]
async fn food_lookup_by_name_and_id() {
    let (state, codec) = common::test_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(common::mock_routes(codec)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({
            "name": "Julia",
            "email": "julia@example.com",
            "password": "hunter2!"
        }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({"email": "julia@example.com", "password": "hunter2!"}))
        .to_request();
    let tokens: TokenPairResponse =
        test::read_body_json(test::call_service(&app, req).await).await;
    let bearer = format!("Bearer {}", tokens.access_token);

    let req = test::TestRequest::get()
        .uri("/api/foods/rice")
        .insert_header(("Authorization", bearer.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let food: Value = test::read_body_json(resp).await;
    assert_eq!(food["name"].as_str(), Some("Rice"));

    let req = test::TestRequest::get()
        .uri("/api/foods/id/2")
        .insert_header(("Authorization", bearer.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let food: Value = test::read_body_json(resp).await;
    assert_eq!(food["name"].as_str(), Some("Chicken breast"));

    let req = test::TestRequest::get()
        .uri("/api/foods/dragonfruit")
        .insert_header(("Authorization", bearer))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}
