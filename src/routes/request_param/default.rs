use std::sync::Arc;

use axum::extract::State;

use super::RequestParamSpecs;
use crate::resolver::{RequestParams, ResolutionError};

// 기본값이 있으면 필수 여부와 상관없이 생략할 수 있다.
// `curl -v 'http://127.0.0.1:8000/request-param-default'` => 200 ok, username=guest, age=-1
// `curl -v 'http://127.0.0.1:8000/request-param-default?username='` => 200 ok, username=guest
#[tracing::instrument(name = "Binding request parameters with default values.", skip_all)]
pub async fn request_param_default(
    State(specs): State<Arc<RequestParamSpecs>>,
    params: RequestParams,
) -> Result<&'static str, ResolutionError> {
    let resolved = specs.with_default.resolve(&params)?;

    tracing::info!(
        "username={}, age={}",
        resolved.value("username"),
        resolved.value("age")
    );
    Ok("ok")
}
