use crate::{resolver::InvalidParamSpec, utils::error_chain_fmt};

// 서버를 구성하고 구동할 때 발생하는 오류를 하나로 모은다.
// 요청 단위의 오류(`ResolutionError`)는 사용하는 곳에 정의한다.
#[derive(thiserror::Error)]
pub enum RequestParamError {
    #[error("Invalid Param Spec: {0}")]
    InvalidParamSpec(#[from] InvalidParamSpec),

    #[error("IO Error")]
    IOError(#[from] std::io::Error),

    #[error("Config Error")]
    ConfigError(#[from] config::ConfigError),

    #[error("Url Parse Error")]
    UrlParseError(#[from] url::ParseError),
}

impl std::fmt::Debug for RequestParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
