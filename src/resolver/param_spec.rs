use std::{collections::HashSet, num::ParseIntError};

use super::{ParamValue, RequestParams, ResolutionError, ResolvedParams};

/// 파라미터 값을 변환할 대상 타입
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    /// `null`이 될 수 있는 정수
    Integer,
    /// `null`이 될 수 없는 정수
    Int,
}

impl ParamType {
    pub fn is_nullable(&self) -> bool {
        !matches!(self, ParamType::Int)
    }

    /// 공백은 제거하지 않는다.
    /// 부호(`+`, `-`)는 허용하고 자릿수 구분자는 허용하지 않는다.
    pub fn coerce(&self, raw: &str) -> Result<ParamValue, ParseIntError> {
        match self {
            ParamType::String => Ok(ParamValue::Text(raw.to_string())),
            ParamType::Integer | ParamType::Int => raw.parse().map(ParamValue::Integer),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum InvalidParamSpec {
    #[error("A request parameter must have a name.")]
    EmptyName,
    #[error("Request parameter '{0}' is declared more than once.")]
    DuplicateName(String),
    #[error("Request parameter '{0}' can not be null, it must be required or have a default value.")]
    NonNullableWithoutDefault(String),
    #[error("Default value '{value}' of request parameter '{name}' is invalid.")]
    InvalidDefault {
        name: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// 요청 파라미터 하나에 대한 선언
///
/// 기본적으로 필수 파라미터이며 기본값은 없다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    name: String,
    param_type: ParamType,
    required: bool,
    default_value: Option<String>,
}

impl ParamSpec {
    pub fn new(name: impl Into<String>, param_type: ParamType) -> Self {
        Self {
            name: name.into(),
            param_type,
            required: true,
            default_value: None,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn param_type(&self) -> ParamType {
        self.param_type
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn get_default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    // 요청을 처리하기 전에, 즉 라우터를 구성할 때 실행된다.
    fn validate(&self) -> Result<(), InvalidParamSpec> {
        if self.name.is_empty() {
            return Err(InvalidParamSpec::EmptyName);
        }
        match &self.default_value {
            Some(value) => {
                self.param_type
                    .coerce(value)
                    .map_err(|source| InvalidParamSpec::InvalidDefault {
                        name: self.name.clone(),
                        value: value.clone(),
                        source,
                    })?;
            }
            None if !self.required && !self.param_type.is_nullable() => {
                return Err(InvalidParamSpec::NonNullableWithoutDefault(
                    self.name.clone(),
                ));
            }
            None => {}
        }
        Ok(())
    }

    // 값이 비어 있으면 기본값이 있을 때에 한해서 없는 것으로 취급한다.
    fn raw_value<'a>(&'a self, raw: &'a RequestParams) -> Option<&'a str> {
        match (raw.first(&self.name), self.get_default_value()) {
            (Some(""), Some(default_value)) => Some(default_value),
            (Some(value), _) => Some(value),
            (None, default_value) => default_value,
        }
    }

    fn resolve(&self, raw: &RequestParams) -> Result<ParamValue, ResolutionError> {
        match self.raw_value(raw) {
            Some(value) => {
                self.param_type
                    .coerce(value)
                    .map_err(|source| ResolutionError::TypeCoercion {
                        name: self.name.clone(),
                        value: value.to_string(),
                        source,
                    })
            }
            // `validate`를 통과했으므로 `nullable` 타입이다.
            None if !self.required => Ok(ParamValue::Null),
            None => Err(ResolutionError::MissingParameter(self.name.clone())),
        }
    }
}

/// 엔드포인트 하나가 기대하는 파라미터 선언 목록
/// 선언 순서를 유지한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpecs(Vec<ParamSpec>);

impl TryFrom<Vec<ParamSpec>> for ParamSpecs {
    type Error = InvalidParamSpec;

    fn try_from(specs: Vec<ParamSpec>) -> Result<Self, Self::Error> {
        {
            let mut names = HashSet::new();
            for spec in &specs {
                spec.validate()?;
                if !names.insert(spec.name()) {
                    return Err(InvalidParamSpec::DuplicateName(spec.name.clone()));
                }
            }
        }
        Ok(Self(specs))
    }
}

impl ParamSpecs {
    /// 선언 순서대로 파라미터를 검증하고 변환한다.
    ///
    /// 처음 만나는 오류에서 멈추며 오류를 모으지 않는다.
    /// 실패하면 부분 결과를 돌려주지 않는다.
    pub fn resolve(&self, raw: &RequestParams) -> Result<ResolvedParams, ResolutionError> {
        let mut resolved = ResolvedParams::default();
        for spec in &self.0 {
            let value = spec.resolve(raw)?;
            resolved.insert(spec.name(), value);
        }
        Ok(resolved)
    }
}
