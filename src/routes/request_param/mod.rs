mod default;
mod map;
mod named;
mod required;
mod v1;

pub use default::request_param_default;
pub use map::request_param_map;
pub use named::{request_param_v2, request_param_v3, request_param_v4};
pub use required::request_param_required;
pub use v1::request_param_v1;

use crate::resolver::{InvalidParamSpec, ParamSpec, ParamSpecs, ParamType};

/// 엔드포인트별 파라미터 선언
/// 라우터를 구성할 때 한 번 만들고 모든 요청이 공유한다.
pub struct RequestParamSpecs {
    // v2, v3, v4
    pub named: ParamSpecs,
    pub required: ParamSpecs,
    pub with_default: ParamSpecs,
}

impl RequestParamSpecs {
    pub fn new() -> Result<Self, InvalidParamSpec> {
        let named = ParamSpecs::try_from(vec![
            ParamSpec::new("username", ParamType::String),
            ParamSpec::new("age", ParamType::Int),
        ])?;
        // `age`는 `null`이 될 수 있어야 생략할 수 있다.
        let required = ParamSpecs::try_from(vec![
            ParamSpec::new("username", ParamType::String).required(true),
            ParamSpec::new("age", ParamType::Integer).required(false),
        ])?;
        let with_default = ParamSpecs::try_from(vec![
            ParamSpec::new("username", ParamType::String)
                .required(true)
                .default_value("guest"),
            ParamSpec::new("age", ParamType::Int)
                .required(false)
                .default_value("-1"),
        ])?;

        Ok(Self {
            named,
            required,
            with_default,
        })
    }
}
