use crate::helpers::TestApp;

#[tokio::test]
async fn health_check_works() -> Result<(), anyhow::Error> {
    // 준비
    let test_app = TestApp::spawn_app().await?;
    let client = reqwest::Client::new();

    // 실행
    let response = client
        .get(test_app.uri()?.join("health_check")?)
        .send()
        .await?;

    // 확인
    assert_eq!(response.status(), http::StatusCode::OK);
    // 응답 본문의 길이가 0인지 확인한다.
    assert_eq!(Some(0), response.content_length());

    Ok(())
}
