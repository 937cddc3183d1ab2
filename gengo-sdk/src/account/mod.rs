//! 账户信息、余额、常用译者

use crate::client::Client;
use crate::request::Request;
use gengo_sdk_common::Error;
use gengo_sdk_common::de::{opt_string_or_number, string_or_number};
use serde::Deserialize;
use serde_with::{DisplayFromStr, PickFirst, serde_as};

//region response
#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct AccountStats {
    #[serde(deserialize_with = "string_or_number")]
    pub credits_spent: String,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub user_since: Option<i64>,
    #[serde(default)]
    pub currency: String,
    pub billing_type: Option<String>,
    pub customer_type: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AccountBalance {
    #[serde(deserialize_with = "string_or_number")]
    pub credits: String,
    #[serde(default)]
    pub currency: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AccountInfo {
    #[serde(default)]
    pub email: String,
    pub full_name: Option<String>,
    pub display_name: Option<String>,
    pub language_code: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PreferredTranslators {
    pub lc_src: String,
    pub lc_tgt: String,
    pub tier: String,
    #[serde(default)]
    pub translators: Vec<Translator>,
}

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct Translator {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub id: u64,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub number_of_jobs: Option<String>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub last_login: Option<i64>,
}
//endregion

pub struct AccountApi<'a> {
    client: &'a Client,
}

impl Client {
    pub fn account(&self) -> AccountApi<'_> {
        AccountApi { client: self }
    }
}

impl AccountApi<'_> {
    pub async fn stats(&self) -> Result<AccountStats, Error> {
        self.client.send_as(Request::get("account/stats")).await
    }

    pub async fn balance(&self) -> Result<AccountBalance, Error> {
        self.client.send_as(Request::get("account/balance")).await
    }

    pub async fn me(&self) -> Result<AccountInfo, Error> {
        self.client.send_as(Request::get("account/me")).await
    }

    pub async fn preferred_translators(&self) -> Result<Vec<PreferredTranslators>, Error> {
        self.client
            .send_or_default(Request::get("account/preferred_translators"))
            .await
    }
}
