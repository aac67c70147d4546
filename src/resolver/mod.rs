mod param_spec;
mod request_params;
mod resolution_error;
mod resolved_params;

pub use param_spec::{InvalidParamSpec, ParamSpec, ParamSpecs, ParamType};
pub use request_params::{ParamMap, RequestParams};
pub use resolution_error::ResolutionError;
pub use resolved_params::{ParamValue, ResolvedParams};
