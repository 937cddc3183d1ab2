//! 所有接口的返回都包在`{"opstat": "...", "response": ..., "err": {...}}`里，
//! `response`和`err`只会有一个

use crate::Error;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Deserialize, Debug)]
pub struct Envelope {
    #[serde(default)]
    pub opstat: String,
    #[serde(default)]
    pub response: Option<Value>,
    #[serde(default)]
    pub err: Option<Value>,
}

impl Envelope {
    /// `err`存在时返回[`Error::Api`]，否则返回`response`本身；两者都没有时返回`Value::Null`
    pub fn into_result(self) -> Result<Value, Error> {
        if let Some(err) = self.err {
            let (code, message) = find_code_msg(&err).unwrap_or_else(|| (String::new(), err.to_string()));
            tracing::debug!(opstat = %self.opstat, code = %code, "api returned error");
            return Err(Error::Api {
                opstat: self.opstat,
                code,
                message,
            });
        }

        match self.response {
            Some(v) => Ok(v),
            None => {
                tracing::warn!(opstat = %self.opstat, "envelope has neither response nor err");
                Ok(Value::Null)
            }
        }
    }
}

fn field_to_string(v: Option<&Value>) -> String {
    match v {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

// 提交任务出错时err是按job分组的：{"job_1": [{"code": 1350, "msg": "..."}]}，取编号最小的那个
fn find_code_msg(v: &Value) -> Option<(String, String)> {
    match v {
        Value::Object(map) if map.contains_key("code") || map.contains_key("msg") => Some((
            field_to_string(map.get("code")),
            field_to_string(map.get("msg")),
        )),
        Value::Object(map) => {
            // map按字符串排序，job_10会排在job_2前面
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|(a, _), (b, _)| job_number(a).cmp(&job_number(b)).then(a.cmp(b)));
            entries.into_iter().find_map(|(_, v)| find_code_msg(v))
        }
        Value::Array(arr) => arr.iter().find_map(find_code_msg),
        _ => None,
    }
}

/// `job_12` -> 12，没有数字后缀的排在最后
fn job_number(key: &str) -> u64 {
    key.rsplit('_')
        .next()
        .and_then(|n| n.parse().ok())
        .unwrap_or(u64::MAX)
}

pub fn unpack(body: &str) -> Result<Value, Error> {
    let envelope: Envelope = serde_json::from_str(body)?;
    envelope.into_result()
}

pub fn unpack_as<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    let v = unpack(body)?;
    Ok(serde_json::from_value(v)?)
}

/// 不检查status，api的业务错误也可能是200；只有body不是envelope且status非2xx时才返回RequestAPIFailed
pub async fn parse_envelope_response(resp: reqwest::Response) -> Result<Value, Error> {
    let status = resp.status();
    let text = resp.text().await?;

    match serde_json::from_str::<Envelope>(&text) {
        Ok(envelope) => envelope.into_result(),
        Err(_) if !status.is_success() => Err(Error::RequestAPIFailed {
            status: status.to_string(),
            message: text,
        }),
        Err(e) => Err(e.into()),
    }
}
