use crate::credentials::Auth;
use gengo_sdk_common::Error;
use reqwest::Method;
use serde_json::Value;
use std::path::Path;

/// 随请求上传的文件，multipart中的字段名由调用方指定
#[derive(Clone, Debug)]
pub struct Attachment {
    pub(crate) field: String,
    pub(crate) file_name: String,
    pub(crate) content: Vec<u8>,
}

impl Attachment {
    pub fn new(
        field: impl Into<String>,
        file_name: impl Into<String>,
        content: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            field: field.into(),
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    /// 读取本地文件，文件名取路径的最后一段
    pub async fn from_path(field: impl Into<String>, path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| {
                Error::InvalidArgument(format!("path has no file name: {}", path.display()))
            })?;
        let content = tokio::fs::read(path).await?;
        Ok(Self::new(field, file_name, content))
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

#[cfg_attr(
    not(all(feature = "job", feature = "jobs", feature = "order", feature = "service")),
    allow(dead_code)
)]
pub(crate) enum Body {
    None,
    /// url-encoded，认证字段合并进表单
    Form(Vec<(String, String)>),
    /// multipart，JSON放在`data`字段
    Json(Value),
    JsonWithFiles(Value, Vec<Attachment>),
}

pub(crate) struct Request {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) params: Vec<(String, String)>,
    pub(crate) auth: Auth,
    pub(crate) body: Body,
}

#[cfg_attr(
    not(all(feature = "job", feature = "jobs", feature = "order", feature = "service")),
    allow(dead_code)
)]
impl Request {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: Vec::new(),
            auth: Auth::Signed,
            body: Body::None,
        }
    }

    pub(crate) fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub(crate) fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub(crate) fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub(crate) fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub(crate) fn auth(mut self, auth: Auth) -> Self {
        self.auth = auth;
        self
    }

    pub(crate) fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.params.push((key.to_owned(), value.to_string()));
        self
    }

    pub(crate) fn maybe_param(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    pub(crate) fn form(mut self, fields: Vec<(String, String)>) -> Self {
        self.body = Body::Form(fields);
        self
    }

    pub(crate) fn json(mut self, data: Value, files: Vec<Attachment>) -> Self {
        self.body = if files.is_empty() {
            Body::Json(data)
        } else {
            Body::JsonWithFiles(data, files)
        };
        self
    }
}
