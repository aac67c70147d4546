mod health_check;
mod request_param;

pub use health_check::health_check;
pub use request_param::{
    request_param_default, request_param_map, request_param_required, request_param_v1,
    request_param_v2, request_param_v3, request_param_v4, RequestParamSpecs,
};
