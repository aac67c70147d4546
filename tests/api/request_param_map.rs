use crate::helpers::TestApp;

#[tokio::test]
async fn map_endpoint_never_validates() -> Result<(), anyhow::Error> {
    // 준비
    let test_app = TestApp::spawn_app().await?;
    let test_cases: [&[(&str, &str)]; 3] = [
        &[("username", "hello"), ("age", "20")],
        &[("age", "notanumber")],
        &[],
    ];

    for params in test_cases {
        // 실행
        let response = test_app
            .get_with_query("request-param-map", params)
            .await?;

        // 확인
        assert_eq!(response.status(), http::StatusCode::OK);
        assert_eq!(response.text().await?, "ok");
    }

    Ok(())
}

#[tokio::test]
async fn map_endpoint_accepts_form_body() -> Result<(), anyhow::Error> {
    // 준비
    let test_app = TestApp::spawn_app().await?;

    // 실행
    let response = test_app
        .post_form("request-param-map", &[("username", "hello"), ("age", "20")])
        .await?;

    // 확인
    assert_eq!(response.status(), http::StatusCode::OK);

    Ok(())
}
