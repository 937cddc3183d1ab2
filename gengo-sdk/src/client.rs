use crate::credentials::{Auth, Credentials};
use crate::request::{Attachment, Body, Request};
use bon::bon;
use gengo_sdk_common::Error;
use gengo_sdk_common::envelope::parse_envelope_response;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

const PRODUCTION_URL: &str = "https://api.gengo.com/v2/";
const SANDBOX_URL: &str = "https://api.sandbox.gengo.com/v2/";
const USER_AGENT: &str = concat!("gengo-sdk/", env!("CARGO_PKG_VERSION"));

/// Base address every relative path is resolved against.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Endpoint {
    #[default]
    Production,
    Sandbox,
    /// 例如本地mock服务：`http://127.0.0.1:8080/v2/`
    Custom(String),
}

impl Endpoint {
    pub fn base_url(&self) -> Result<Url, Error> {
        let raw = match self {
            Endpoint::Production => PRODUCTION_URL,
            Endpoint::Sandbox => SANDBOX_URL,
            Endpoint::Custom(s) => s.as_str(),
        };
        // 没有结尾的`/`时join会替换掉最后一段路径
        let raw = if raw.ends_with('/') {
            raw.to_owned()
        } else {
            format!("{raw}/")
        };
        let url = Url::parse(&raw).map_err(|e| Error::Config(format!("invalid endpoint {raw}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(Error::Config(format!("endpoint cannot be a base url: {raw}")));
        }
        Ok(url)
    }
}

/// Gengo API client.
///
/// 只持有不可变的配置和`reqwest::Client`连接池，可以放进`Arc`里并发调用；
/// drop之后连接池随之释放。
#[derive(Debug)]
pub struct Client {
    credentials: Credentials,
    base_url: Url,
    http_client: reqwest::Client,
}

#[bon]
impl Client {
    #[builder(on(String, into))]
    pub fn new(
        public_key: String,
        private_key: String,
        #[builder(default)] endpoint: Endpoint,
    ) -> Result<Self, Error> {
        let credentials = Credentials::new(public_key, private_key)?;
        let base_url = endpoint.base_url()?;

        let mut header_map = HeaderMap::new();
        header_map.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let http_client = reqwest::Client::builder()
            .default_headers(header_map)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            credentials,
            base_url,
            http_client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl Client {
    fn resolve(&self, path: &str) -> Result<Url, Error> {
        if path.trim().is_empty() || path.starts_with('/') || path.contains("://") {
            return Err(Error::Config(format!("invalid relative path: {path:?}")));
        }
        self.base_url
            .join(path)
            .map_err(|e| Error::Config(format!("invalid relative path {path:?}: {e}")))
    }

    /// 完整的请求地址，`params`和认证字段都放在query里
    pub(crate) fn build_target(
        &self,
        path: &str,
        params: &[(String, String)],
        auth: Auth,
    ) -> Result<Url, Error> {
        let mut url = self.resolve(path)?;
        let auth_fields = self.credentials.auth_fields(auth);
        if !params.is_empty() || !auth_fields.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            for (k, v) in &auth_fields {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    fn multipart_form(&self, auth: Auth, data: &Value, files: Vec<Attachment>) -> Result<Form, Error> {
        let mut form = Form::new();
        for (k, v) in self.credentials.auth_fields(auth) {
            form = form.text(k, v);
        }
        form = form.text("data", serde_json::to_string(data)?);
        for file in files {
            let part = Part::bytes(file.content).file_name(file.file_name);
            form = form.part(file.field, part);
        }
        Ok(form)
    }

    /// 发送一次请求并拆开envelope，返回`response`字段
    pub(crate) async fn send(&self, req: Request) -> Result<Value, Error> {
        let Request {
            method,
            path,
            params,
            auth,
            body,
        } = req;
        tracing::debug!(method = %method, path = %path, auth = ?auth, "sending request");

        let builder = match body {
            Body::None => {
                let url = self.build_target(&path, &params, auth)?;
                self.http_client.request(method, url)
            }
            Body::Form(mut fields) => {
                let url = self.build_target(&path, &params, Auth::None)?;
                fields.extend(
                    self.credentials
                        .auth_fields(auth)
                        .into_iter()
                        .map(|(k, v)| (k.to_owned(), v)),
                );
                self.http_client.request(method, url).form(&fields)
            }
            Body::Json(data) => {
                let url = self.build_target(&path, &params, Auth::None)?;
                let form = self.multipart_form(auth, &data, Vec::new())?;
                self.http_client.request(method, url).multipart(form)
            }
            Body::JsonWithFiles(data, files) => {
                let url = self.build_target(&path, &params, Auth::None)?;
                let form = self.multipart_form(auth, &data, files)?;
                self.http_client.request(method, url).multipart(form)
            }
        };

        let resp = builder.send().await?;
        parse_envelope_response(resp).await
    }

    pub(crate) async fn send_as<T: DeserializeOwned>(&self, req: Request) -> Result<T, Error> {
        let v = self.send(req).await?;
        Ok(serde_json::from_value(v)?)
    }

    /// 列表类接口：envelope里没有`response`时返回空值而不是解析错误
    pub(crate) async fn send_or_default<T: DeserializeOwned + Default>(
        &self,
        req: Request,
    ) -> Result<T, Error> {
        match self.send(req).await? {
            Value::Null => Ok(T::default()),
            v => Ok(serde_json::from_value(v)?),
        }
    }
}
