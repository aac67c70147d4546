use std::sync::Arc;

use axum::extract::State;

use super::RequestParamSpecs;
use crate::resolver::{RequestParams, ResolutionError};

// `curl -v 'http://127.0.0.1:8000/request-param-v2?username=hello&age=20'` => 200 ok
// `curl -v 'http://127.0.0.1:8000/request-param-v2?username=hello&age=old'` => 400
#[tracing::instrument(name = "Binding named request parameters.", skip_all)]
pub async fn request_param_v2(
    State(specs): State<Arc<RequestParamSpecs>>,
    // 본문을 읽으므로 마지막 인자여야 한다.
    params: RequestParams,
) -> Result<&'static str, ResolutionError> {
    let resolved = specs.named.resolve(&params)?;
    // 파라미터 이름과 변수 이름이 같을 필요는 없다.
    let member_name = resolved.value("username");
    let member_age = resolved.value("age");

    tracing::info!("username={}, age={}", member_name, member_age);
    Ok("ok")
}

#[tracing::instrument(name = "Binding request parameters of the same name.", skip_all)]
pub async fn request_param_v3(
    State(specs): State<Arc<RequestParamSpecs>>,
    params: RequestParams,
) -> Result<&'static str, ResolutionError> {
    let resolved = specs.named.resolve(&params)?;
    let username = resolved.value("username");
    let age = resolved.value("age");

    tracing::info!("username={}, age={}", username, age);
    Ok("ok")
}

// 해석이 끝난 값은 선언한 타입으로 꺼낼 수 있다.
#[tracing::instrument(name = "Binding typed request parameters.", skip_all)]
pub async fn request_param_v4(
    State(specs): State<Arc<RequestParamSpecs>>,
    params: RequestParams,
) -> Result<&'static str, ResolutionError> {
    let resolved = specs.named.resolve(&params)?;
    let username: &str = resolved.text("username").unwrap_or_default();
    let age: i32 = resolved.integer("age").unwrap_or_default();

    tracing::info!("username={}, age={}", username, age);
    Ok("ok")
}
