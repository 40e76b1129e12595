use actix_web::{http::StatusCode, test, web, App};
use community_service::config::LatencyConfig;
use community_service::{handlers, AppState, Config};
use serde_json::{json, Value};

fn slow_state() -> web::Data<AppState> {
    let mut config = Config::for_tests();
    config.latency = LatencyConfig {
        vote_ms: 100,
        submit_ms: 100,
    };
    web::Data::new(AppState::from_config(&config))
}

#[actix_rt::test]
async fn test_click_during_pending_vote_is_ignored() {
    let app =
        test::init_service(App::new().app_data(slow_state()).configure(handlers::configure)).await;

    let vote = |direction: &str| {
        test::TestRequest::post()
            .uri("/api/v1/posts/3/vote")
            .insert_header(("X-Viewer-Id", "alice"))
            .set_json(json!({ "direction": direction }))
            .to_request()
    };

    let (first, second) = tokio::join!(test::call_service(&app, vote("up")), async {
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        test::call_service(&app, vote("up")).await
    });

    let first: Value = test::read_body_json(first).await;
    let second: Value = test::read_body_json(second).await;
    assert_eq!(first["applied"], true);
    assert_eq!(first["upvotes"], 16);
    assert_eq!(second["applied"], false);
    assert_eq!(second["upvotes"], 15);

    // guard released once the first vote completed
    let third: Value = test::call_and_read_body_json(&app, vote("up")).await;
    assert_eq!(third["applied"], true);
    assert_eq!(third["upvotes"], 15);
}

#[actix_rt::test]
async fn test_other_viewer_not_blocked_by_pending_vote() {
    let app =
        test::init_service(App::new().app_data(slow_state()).configure(handlers::configure)).await;

    let vote = |viewer: &str| {
        test::TestRequest::post()
            .uri("/api/v1/posts/3/vote")
            .insert_header(("X-Viewer-Id", viewer))
            .set_json(json!({"direction": "up"}))
            .to_request()
    };

    let (a, b) = tokio::join!(
        test::call_service(&app, vote("alice")),
        test::call_service(&app, vote("bob"))
    );
    let a: Value = test::read_body_json(a).await;
    let b: Value = test::read_body_json(b).await;
    assert_eq!(a["applied"], true);
    assert_eq!(b["applied"], true);

    let req = test::TestRequest::get().uri("/api/v1/posts/3").to_request();
    let post: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(post["upvotes"], 17);
}

#[actix_rt::test]
async fn test_second_comment_while_pending_conflicts() {
    let app =
        test::init_service(App::new().app_data(slow_state()).configure(handlers::configure)).await;

    let comment = |text: &str| {
        test::TestRequest::post()
            .uri("/api/v1/posts/4/comments")
            .set_json(json!({ "content": text }))
            .to_request()
    };

    let (first, second) = tokio::join!(test::call_service(&app, comment("one")), async {
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        test::call_service(&app, comment("two")).await
    });
    assert_eq!(first.status(), StatusCode::CREATED);
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let body: Value = test::read_body_json(second).await;
    assert!(body["error"]
        .as_str()
        .unwrap_or_default()
        .contains("submission in flight"));

    let req = test::TestRequest::get()
        .uri("/api/v1/posts/4/comments")
        .to_request();
    let thread: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(thread.as_array().map(Vec::len), Some(2));
}
