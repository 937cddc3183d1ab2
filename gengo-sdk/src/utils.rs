#[cfg(any(feature = "job", feature = "order"))]
use gengo_sdk_common::Error;
use serde::Serializer;

/// 必填的文本参数不能为空或只有空白
#[cfg(any(feature = "job", feature = "order"))]
pub(crate) fn require_text<'a>(field: &str, value: &'a str) -> Result<&'a str, Error> {
    if value.trim().is_empty() {
        return Err(Error::InvalidArgument(format!("{field} cannot be empty")));
    }
    Ok(value)
}

// api里的布尔参数用0/1表示
pub(crate) fn serialize_bool_as_int<S>(b: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u8(u8::from(*b))
}
