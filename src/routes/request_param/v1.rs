use crate::resolver::{ParamType, RequestParams, ResolutionError};

// 선언 없이 요청에서 직접 값을 꺼낸다.
// `username`이 없으면 `null`로 남기고 `age`는 직접 변환한다.
//
// `curl -v 'http://127.0.0.1:8000/request-param-v1?username=hello&age=20'` => 200 ok
// `curl -v 'http://127.0.0.1:8000/request-param-v1?username=hello'` => 400
#[tracing::instrument(name = "Reading request parameters by hand.", skip_all)]
pub async fn request_param_v1(params: RequestParams) -> Result<&'static str, ResolutionError> {
    let username = params.first("username").unwrap_or("null");
    let raw_age = params
        .first("age")
        .ok_or_else(|| ResolutionError::MissingParameter("age".into()))?;
    let age = ParamType::Int
        .coerce(raw_age)
        .map_err(|source| ResolutionError::TypeCoercion {
            name: "age".into(),
            value: raw_age.to_string(),
            source,
        })?;

    tracing::info!("username={}, age={}", username, age);
    Ok("ok")
}
