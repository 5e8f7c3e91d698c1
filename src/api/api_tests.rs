#[cfg(test)]
mod content_api_tests {
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use futures_util::StreamExt;
    use tower::ServiceExt;

    use crate::api::{ROLE_STREAM_PATH, app_state::AppState, create_router};
    use crate::services::Catalog;

    fn build_app() -> (Router, AppState) {
        let state = AppState::development().unwrap();
        (create_router(state.clone()), state)
    }

    async fn get(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_get_profile_returns_200() {
        let (app, _) = build_app();
        let response = get(app, "/api/v1/profile").await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["short_name"], "Guilherme Varella");
        assert_eq!(json["resume_url"], "https://www.linkedin.com/in/guilherme-varella/");
    }

    #[tokio::test]
    async fn test_get_hero_intro() {
        let (app, _) = build_app();
        let json = json_body(get(app, "/api/v1/hero-intro").await).await;

        assert_eq!(json["salutation"], "Olá, eu sou Guilherme Varella!");
        assert_eq!(json["description"], Catalog::shipped().profile.description);
    }

    #[tokio::test]
    async fn test_list_endpoints_return_catalog() {
        let catalog = Catalog::shipped();

        let (app, _) = build_app();
        let skills = json_body(get(app, "/api/v1/skills").await).await;
        assert_eq!(skills, serde_json::to_value(&catalog.skills).unwrap());

        let (app, _) = build_app();
        let timeline = json_body(get(app, "/api/v1/timeline").await).await;
        assert_eq!(timeline.as_array().map(Vec::len), Some(3));
        assert_eq!(timeline[0]["period"], "2022 — Atual");

        let (app, _) = build_app();
        let projects = json_body(get(app, "/api/v1/projects").await).await;
        assert!(projects[1].get("github").is_none());
        assert_eq!(projects[2]["github"], "https://github.com/guilhermeyvarella");
    }

    #[tokio::test]
    async fn test_page_renders_with_security_headers() {
        let (app, state) = build_app();
        let response = get(app, "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::X_FRAME_OPTIONS], "DENY");
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Olá, eu sou Guilherme Varella!"));
        assert!(html.contains(r#"data-key="Orquestrador de Componentes Financeiros""#));
        assert!(html.contains(ROLE_STREAM_PATH));

        // The page view is torn down once rendered.
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        assert_eq!(state.roles.observer_count(), 0);
    }

    #[tokio::test]
    async fn test_role_stream_emits_current_role() {
        let (app, state) = build_app();
        let response = get(app, ROLE_STREAM_PATH).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/event-stream");
        assert_eq!(state.roles.observer_count(), 1);

        let mut body = response.into_body().into_data_stream();
        let chunk = body.next().await.unwrap().unwrap();
        let frame = String::from_utf8(chunk.to_vec()).unwrap();
        assert!(frame.contains("event: role"));
        assert!(frame.contains("data: Desenvolvedor Angular"));

        drop(body);
        assert!(!state.roles.is_running());
    }

    #[tokio::test]
    async fn test_script_asset_is_served() {
        let (app, _) = build_app();
        let response = get(app, "/assets/rotating-role.js").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&body).contains("EventSource"));
    }

    #[tokio::test]
    async fn test_unknown_route_returns_404() {
        let (app, _) = build_app();
        let response = get(app, "/api/v1/unknown").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = json_body(response).await;
        assert_eq!(json["code"], "NOT_FOUND");
    }
}
