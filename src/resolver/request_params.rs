use std::collections::HashMap;

use axum::{
    async_trait,
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequest, Request},
};
use http::{header::CONTENT_TYPE, HeaderMap};

/// 일괄 바인딩 결과
/// 값은 모두 문자열로 남는다.
pub type ParamMap = HashMap<String, String>;

/// 요청 하나에 담긴 파라미터
/// 이름 하나에 값이 여러 개 있을 수 있으며 도착한 순서를 유지한다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams(HashMap<String, Vec<String>>);

impl RequestParams {
    /// `application/x-www-form-urlencoded` 형식의 입력을 추가한다.
    /// 쿼리 스트링도 같은 형식이다.
    pub fn extend_urlencoded(&mut self, input: &[u8]) {
        for (name, value) in url::form_urlencoded::parse(input) {
            self.push(name.into_owned(), value.into_owned());
        }
    }

    fn push(&mut self, name: String, value: String) {
        self.0.entry(name).or_default().push(value);
    }

    /// 핸들러에는 첫 번째 값만 전달된다.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn values(&self, name: &str) -> &[String] {
        self.0.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// 선언 없이 모든 파라미터를 문자열 그대로 돌려준다.
    /// 검증도 변환도 하지 않는다.
    pub fn to_map(&self) -> ParamMap {
        self.0
            .iter()
            .filter_map(|(name, values)| {
                values
                    .first()
                    .map(|value| (name.to_string(), value.to_string()))
            })
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for RequestParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = RequestParams::default();
        for (name, value) in iter {
            params.push(name.into(), value.into());
        }
        params
    }
}

fn is_form_urlencoded(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|content_type| content_type.to_str().ok())
        .and_then(|content_type| content_type.split(';').next())
        .is_some_and(|mime| {
            mime.trim()
                .eq_ignore_ascii_case("application/x-www-form-urlencoded")
        })
}

// 쿼리 스트링을 먼저 읽고 폼 본문을 이어서 읽는다.
// 같은 이름이 양쪽에 있으면 쿼리 스트링의 값이 먼저 온다.
// 본문을 소비하므로 핸들러의 마지막 인자여야 한다.
#[async_trait]
impl<S> FromRequest<S> for RequestParams
where
    S: Send + Sync,
{
    type Rejection = BytesRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut params = RequestParams::default();
        if let Some(query) = req.uri().query() {
            params.extend_urlencoded(query.as_bytes());
        }
        if is_form_urlencoded(req.headers()) {
            let body = Bytes::from_request(req, state).await?;
            params.extend_urlencoded(&body);
        }
        Ok(params)
    }
}
