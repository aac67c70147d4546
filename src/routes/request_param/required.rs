use std::sync::Arc;

use axum::extract::State;

use super::RequestParamSpecs;
use crate::resolver::{RequestParams, ResolutionError};

// `curl -v 'http://127.0.0.1:8000/request-param-required?username=hello'` => 200 ok, age=null
// `curl -v 'http://127.0.0.1:8000/request-param-required?age=20'` => 400
// `curl -v 'http://127.0.0.1:8000/request-param-required?username='` => 200 ok, 빈 문자열도 값이다.
#[tracing::instrument(name = "Binding required and optional request parameters.", skip_all)]
pub async fn request_param_required(
    State(specs): State<Arc<RequestParamSpecs>>,
    params: RequestParams,
) -> Result<&'static str, ResolutionError> {
    let resolved = specs.required.resolve(&params)?;

    tracing::info!(
        "username={}, age={}",
        resolved.value("username"),
        resolved.value("age")
    );
    Ok("ok")
}
