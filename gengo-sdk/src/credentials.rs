//! Key pair used to authenticate requests.
//!
//! 公钥作为`api_key`明文发送；私钥只用来计算`api_sig`，不会被发送，`Debug`输出里也会被隐藏。

use gengo_sdk_common::Error;
use gengo_sdk_common::helper::{now_unix_ts, sign_hmac_sha1_hex};
use std::fmt;

/// 请求需要附带哪些认证字段
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Auth {
    None,
    /// 只带`api_key`
    #[cfg_attr(not(feature = "service"), allow(dead_code))]
    ApiKey,
    /// `api_key` + `ts` + `api_sig`
    Signed,
}

#[derive(Clone)]
pub struct Credentials {
    public_key: String,
    private_key: String,
}

impl Credentials {
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Result<Self, Error> {
        let public_key = public_key.into();
        let private_key = private_key.into();
        if public_key.trim().is_empty() {
            return Err(Error::InvalidArgument("public_key cannot be empty".to_owned()));
        }
        if private_key.trim().is_empty() {
            return Err(Error::InvalidArgument("private_key cannot be empty".to_owned()));
        }

        Ok(Self {
            public_key,
            private_key,
        })
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// `ts`的签名，lowercase hex
    pub fn sign(&self, ts: &str) -> String {
        sign_hmac_sha1_hex(&self.private_key, ts)
    }

    /// 每次调用都会重新取时间戳并签名
    pub(crate) fn auth_fields(&self, auth: Auth) -> Vec<(&'static str, String)> {
        match auth {
            Auth::None => Vec::new(),
            Auth::ApiKey => vec![("api_key", self.public_key.clone())],
            Auth::Signed => {
                let ts = now_unix_ts();
                let api_sig = self.sign(&ts);
                vec![
                    ("api_key", self.public_key.clone()),
                    ("ts", ts),
                    ("api_sig", api_sig),
                ]
            }
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("private_key", &"***")
            .finish()
    }
}
