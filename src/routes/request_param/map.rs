use crate::resolver::RequestParams;

// 선언 없이 모든 파라미터를 문자열로 받는다.
// 검증하지 않으므로 실패하지 않는다.
// `curl -v 'http://127.0.0.1:8000/request-param-map?username=hello&age=20'` => 200 ok
#[tracing::instrument(name = "Binding request parameters into a map.", skip_all)]
pub async fn request_param_map(params: RequestParams) -> &'static str {
    let param_map = params.to_map();
    let username = param_map.get("username").map_or("null", String::as_str);
    let age = param_map.get("age").map_or("null", String::as_str);

    tracing::info!("username={}, age={}", username, age);
    "ok"
}
