use std::collections::HashMap;

/// 변환을 마친 파라미터 값
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Text(String),
    Integer(i32),
    // 선택 파라미터가 없고 기본값도 없을 때 바인딩된다.
    Null,
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Text(text) => write!(f, "{}", text),
            ParamValue::Integer(integer) => write!(f, "{}", integer),
            ParamValue::Null => write!(f, "null"),
        }
    }
}

static NULL: ParamValue = ParamValue::Null;

/// 요청 하나에 대한 해석 결과
/// 핸들러가 사용한 뒤에는 버려진다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedParams(HashMap<String, ParamValue>);

impl ResolvedParams {
    pub(super) fn insert(&mut self, name: &str, value: ParamValue) {
        self.0.insert(name.to_string(), value);
    }

    /// 선언되지 않은 이름은 `Null`로 취급한다.
    pub fn value(&self, name: &str) -> &ParamValue {
        self.0.get(name).unwrap_or(&NULL)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.value(name) {
            ParamValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn integer(&self, name: &str) -> Option<i32> {
        match self.value(name) {
            ParamValue::Integer(integer) => Some(*integer),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
