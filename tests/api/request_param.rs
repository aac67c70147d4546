use crate::helpers::TestApp;

const NAMED_PATHS: [&str; 4] = [
    "request-param-v1",
    "request-param-v2",
    "request-param-v3",
    "request-param-v4",
];

#[tokio::test]
async fn named_params_return_ok_for_valid_query() -> Result<(), anyhow::Error> {
    // 준비
    let test_app = TestApp::spawn_app().await?;

    for path in NAMED_PATHS {
        // 실행
        let response = test_app
            .get_with_query(path, &[("username", "hello"), ("age", "20")])
            .await?;

        // 확인
        assert_eq!(
            response.status(),
            http::StatusCode::OK,
            "{} did not return 200.",
            path
        );
        assert_eq!(response.text().await?, "ok");
    }

    Ok(())
}

#[tokio::test]
async fn named_params_return_ok_for_valid_form() -> Result<(), anyhow::Error> {
    // 준비
    let test_app = TestApp::spawn_app().await?;

    for path in NAMED_PATHS {
        // 실행
        let response = test_app
            .post_form(path, &[("username", "le guin"), ("age", "+20")])
            .await?;

        // 확인
        assert_eq!(
            response.status(),
            http::StatusCode::OK,
            "{} did not accept the form.",
            path
        );
        assert_eq!(response.text().await?, "ok");
    }

    Ok(())
}

#[tokio::test]
async fn named_params_return_400_when_age_is_invalid_or_missing() -> Result<(), anyhow::Error> {
    // 준비
    let test_app = TestApp::spawn_app().await?;
    let test_cases: [(&[(&str, &str)], &str); 4] = [
        (&[("username", "hello")], "missing the age"),
        (&[("username", "hello"), ("age", "notanumber")], "age is not a number"),
        (&[("username", "hello"), ("age", " 20")], "age has whitespace"),
        (&[("username", "hello"), ("age", "")], "age is empty"),
    ];

    for path in NAMED_PATHS {
        for (params, error_message) in test_cases {
            // 실행
            let response = test_app.get_with_query(path, params).await?;

            // 확인
            assert_eq!(
                response.status(),
                http::StatusCode::BAD_REQUEST,
                "{} did not fail with 400 Bad Request when the payload was {}.",
                path,
                error_message
            );
        }
    }

    Ok(())
}

#[tokio::test]
async fn named_params_return_400_when_username_is_missing() -> Result<(), anyhow::Error> {
    // 준비
    let test_app = TestApp::spawn_app().await?;

    // v1은 `username`이 없어도 `null`로 처리한다.
    for path in ["request-param-v2", "request-param-v3", "request-param-v4"] {
        // 실행
        let response = test_app.get_with_query(path, &[("age", "20")]).await?;

        // 확인
        assert_eq!(response.status(), http::StatusCode::BAD_REQUEST);
    }
    let response = test_app
        .get_with_query("request-param-v1", &[("age", "20")])
        .await?;
    assert_eq!(response.status(), http::StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn the_first_of_repeated_values_is_used() -> Result<(), anyhow::Error> {
    // 준비
    let test_app = TestApp::spawn_app().await?;

    // 실행
    // 두 번째 값은 숫자가 아니지만 사용되지 않는다.
    let response = test_app
        .get_with_query(
            "request-param-v2",
            &[("username", "hello"), ("age", "20"), ("age", "twenty")],
        )
        .await?;

    // 확인
    assert_eq!(response.status(), http::StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn required_endpoint_allows_missing_age() -> Result<(), anyhow::Error> {
    // 준비
    let test_app = TestApp::spawn_app().await?;

    // 실행
    let without_age = test_app
        .get_with_query("request-param-required", &[("username", "hello")])
        .await?;
    let empty_username = test_app
        .get_with_query("request-param-required", &[("username", "")])
        .await?;
    let without_username = test_app
        .get_with_query("request-param-required", &[("age", "20")])
        .await?;

    // 확인
    assert_eq!(without_age.status(), http::StatusCode::OK);
    assert_eq!(empty_username.status(), http::StatusCode::OK);
    assert_eq!(without_username.status(), http::StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn default_endpoint_accepts_missing_and_empty_params() -> Result<(), anyhow::Error> {
    // 준비
    let test_app = TestApp::spawn_app().await?;
    let test_cases: [&[(&str, &str)]; 3] = [
        &[],
        &[("username", ""), ("age", "")],
        &[("username", "hello"), ("age", "20")],
    ];

    for params in test_cases {
        // 실행
        let response = test_app
            .get_with_query("request-param-default", params)
            .await?;

        // 확인
        assert_eq!(response.status(), http::StatusCode::OK);
        assert_eq!(response.text().await?, "ok");
    }

    // 기본값이 있어도 값이 주어지면 변환해야 한다.
    let response = test_app
        .get_with_query("request-param-default", &[("age", "old")])
        .await?;
    assert_eq!(response.status(), http::StatusCode::BAD_REQUEST);

    Ok(())
}
