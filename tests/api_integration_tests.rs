// Router integration tests
//
// Purpose: drive every page through the axum router with the templates and
// data files shipped in the repository.
// Run with: cargo test --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use std::path::PathBuf;
    use tower::ServiceExt; // for oneshot
    use zulip_docs::{create_router, AppState, Settings};

    fn repo_path(relative: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
    }

    fn test_settings() -> Settings {
        Settings {
            external_host: "example.com".to_string(),
            external_api_path: "example.com/api".to_string(),
            external_uri_scheme: "https://".to_string(),
            templates_dir: repo_path("templates"),
            api_content_path: repo_path("data/api_content.json"),
            integrations_path: repo_path("data/integrations.json"),
            ..Settings::default()
        }
    }

    // Helper: Create test app from settings
    fn create_test_app(settings: Settings) -> axum::Router {
        let state = AppState::new(settings).expect("Failed to build app state");
        create_router(state)
    }

    async fn get(app: axum::Router, uri: &str, host: &str) -> Response {
        app.oneshot(
            Request::builder()
                .uri(uri)
                .header("host", host)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    }

    // Helper: Read response body as text, undoing tera's `/` escaping
    async fn text_response(response: Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        String::from_utf8(body.to_vec())
            .expect("Body is not UTF-8")
            .replace("&#x2F;", "/")
    }

    fn position(body: &str, needle: &str) -> usize {
        body.find(needle)
            .unwrap_or_else(|| panic!("{needle:?} not found in body"))
    }

    // =========================================================================
    // Section 1: Health Check + API page
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let response = get(create_test_app(test_settings()), "/health", "example.com").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value =
            serde_json::from_str(&text_response(response).await).unwrap();
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_api_page_uses_realm_subdomain() {
        let response = get(create_test_app(test_settings()), "/api/", "chat.example.com").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = text_response(response).await;
        assert!(body.contains("https://chat.example.com/api"));
        assert!(body.contains("href=\"../#settings\""));
    }

    #[tokio::test]
    async fn test_api_page_on_landing_page_domain() {
        let settings = Settings {
            root_domain_landing_page: true,
            ..test_settings()
        };
        let response = get(create_test_app(settings), "/api/", "www.example.com").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = text_response(response).await;
        assert!(body.contains("https://yourZulipDomain.example.com/api"));
        assert!(!body.contains("href=\"../#settings\""));
    }

    // =========================================================================
    // Section 2: Help Center
    // =========================================================================

    #[tokio::test]
    async fn test_help_index() {
        for uri in ["/help/", "/help"] {
            let response = get(create_test_app(test_settings()), uri, "chat.example.com").await;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");

            let body = text_response(response).await;
            assert!(body.contains("Zulip Help Center"));
            assert!(body.contains("help-center"));
            assert!(body.contains("https://chat.example.com/api"));
            assert!(!body.contains("Back to home"));
        }
    }

    #[tokio::test]
    async fn test_help_article() {
        let response = get(
            create_test_app(test_settings()),
            "/help/change-your-name",
            "chat.example.com",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = text_response(response).await;
        assert!(body.contains("<h1>Change your name</h1>"));
        assert!(body.contains("Back to home"));
    }

    #[tokio::test]
    async fn test_unknown_help_article_is_404() {
        let response = get(
            create_test_app(test_settings()),
            "/help/no-such-article",
            "chat.example.com",
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = text_response(response).await;
        assert!(body.contains("No such article"));
    }

    #[tokio::test]
    async fn test_help_article_with_separator_is_404() {
        for uri in ["/help/help/change-your-name", "/help/zerver/help/index", "/help/..%2Fmissing"] {
            let response = get(create_test_app(test_settings()), uri, "chat.example.com").await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");

            let body = text_response(response).await;
            assert!(body.contains("No such article"), "{uri}");
        }
    }

    // =========================================================================
    // Section 3: Integrations
    // =========================================================================

    #[tokio::test]
    async fn test_integrations_page_sorted() {
        let response = get(create_test_app(test_settings()), "/integrations/", "chat.example.com").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = text_response(response).await;

        // categories by slug
        assert!(position(&body, "Communication") < position(&body, "Continuous integration"));
        assert!(position(&body, "Continuous integration") < position(&body, "Monitoring tools"));
        // integrations by name
        assert!(position(&body, "integration-github") < position(&body, "integration-nagios"));
        assert!(position(&body, "integration-nagios") < position(&body, "integration-travis"));
        // lozenges by name
        assert!(position(&body, "Chartbeat") < position(&body, "Dark Sky"));
        assert!(body.contains("https://github.com/hubot-scripts/hubot-assembla"));

        // email gateway is not configured
        assert!(!body.contains("integration-email"));

        assert!(body.contains(r#"<a href="../../#settings">Zulip settings page</a>"#));
    }

    #[tokio::test]
    async fn test_integrations_page_plain_links_on_landing_page() {
        let settings = Settings {
            root_domain_landing_page: true,
            ..test_settings()
        };
        let response = get(create_test_app(settings), "/integrations/", "example.com").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = text_response(response).await;
        assert!(body.contains("Zulip settings page"));
        assert!(!body.contains("#settings"));
        assert!(!body.contains("#streams"));
    }

    #[tokio::test]
    async fn test_email_integration_listed_when_gateway_configured() {
        let settings = Settings {
            email_gateway_example: "denmark.abc123@streams.example.com".to_string(),
            ..test_settings()
        };
        let app = create_test_app(settings);

        let response = get(app.clone(), "/integrations/", "chat.example.com").await;
        assert!(text_response(response).await.contains("integration-email"));

        let response = get(app, "/integrations/doc-html?integration_name=email", "chat.example.com").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(text_response(response)
            .await
            .contains("denmark.abc123@streams.example.com"));
    }

    #[tokio::test]
    async fn test_integration_doc_fragment() {
        let response = get(
            create_test_app(test_settings()),
            "/integrations/doc-html?integration_name=github",
            "chat.example.com",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = text_response(response).await;
        // fragment, not a page
        assert!(!body.contains("<html>"));
        assert!(body.contains("<code>github</code>"));
        assert!(body.contains("api/v1/external/github"));
        // doc pages never see html_settings_links
        assert!(body.contains("Zulip settings page"));
        assert!(!body.contains("#settings"));
    }

    #[tokio::test]
    async fn test_unknown_integration_is_404() {
        for uri in [
            "/integrations/doc-html?integration_name=nonexistent",
            "/integrations/doc-html",
        ] {
            let response = get(create_test_app(test_settings()), uri, "chat.example.com").await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
            assert!(text_response(response).await.is_empty(), "{uri}");
        }
    }

    // =========================================================================
    // Section 4: API Endpoint Reference
    // =========================================================================

    #[tokio::test]
    async fn test_api_endpoint_docs() {
        let response = get(create_test_app(test_settings()), "/api/endpoints/", "chat.example.com").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = text_response(response).await;
        assert!(body.contains("https://chat.example.com/api/v1/messages"));
        assert!(body.contains("https://chat.example.com/api/v1/users/me/subscriptions"));
        assert!(body.contains("curl https://chat.example.com/api/v1/messages"));
        assert!(!body.contains("api.zulip.com"));

        for lang in ["curl", "javascript", "python"] {
            assert!(body.contains(&format!("data-lang=\"{lang}\">{lang}</button>")), "{lang}");
        }
        assert!(body.contains("<pre><code class=\"language-py\">"));
    }

    #[tokio::test]
    async fn test_api_endpoint_docs_missing_catalog_is_500() {
        let settings = Settings {
            api_content_path: repo_path("data/does_not_exist.json"),
            ..test_settings()
        };
        let response = get(create_test_app(settings), "/api/endpoints/", "chat.example.com").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value =
            serde_json::from_str(&text_response(response).await).unwrap();
        assert!(body["error"].as_str().unwrap().contains("does_not_exist.json"));
    }
}
