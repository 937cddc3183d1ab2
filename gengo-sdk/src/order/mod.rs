//! 订单：一次提交的所有任务

use crate::client::Client;
use crate::request::Request;
use crate::types::{Comment, ThreadResp};
use crate::utils::require_text;
use gengo_sdk_common::Error;
use gengo_sdk_common::de::opt_string_or_number;
use serde::Deserialize;
use serde_with::{DisplayFromStr, PickFirst, serde_as};

//region response
/// 各状态下的任务id列表
#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct Order {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub order_id: u64,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub total_credits: Option<String>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub total_units: Option<u64>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub total_jobs: Option<u64>,
    pub currency: Option<String>,
    #[serde_as(as = "Vec<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    pub jobs_queued: Vec<u64>,
    #[serde_as(as = "Vec<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    pub jobs_available: Vec<u64>,
    #[serde_as(as = "Vec<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    pub jobs_pending: Vec<u64>,
    #[serde_as(as = "Vec<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    pub jobs_reviewable: Vec<u64>,
    #[serde_as(as = "Vec<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    pub jobs_approved: Vec<u64>,
    #[serde_as(as = "Vec<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    pub jobs_revising: Vec<u64>,
}

#[derive(Deserialize)]
struct OrderResp {
    order: Order,
}
//endregion

pub struct OrderApi<'a> {
    client: &'a Client,
}

impl Client {
    pub fn order(&self) -> OrderApi<'_> {
        OrderApi { client: self }
    }
}

impl OrderApi<'_> {
    pub async fn get(&self, order_id: u64) -> Result<Order, Error> {
        let req = Request::get(format!("translate/order/{order_id}"));
        let res: OrderResp = self.client.send_as(req).await?;
        Ok(res.order)
    }

    /// 取消订单里所有还是available状态的任务
    pub async fn cancel(&self, order_id: u64) -> Result<(), Error> {
        let req = Request::delete(format!("translate/order/{order_id}"));
        self.client.send(req).await?;
        Ok(())
    }

    pub async fn comments(&self, order_id: u64) -> Result<Vec<Comment>, Error> {
        let req = Request::get(format!("translate/order/{order_id}/comments"));
        let res: ThreadResp = self.client.send_or_default(req).await?;
        Ok(res.thread)
    }

    pub async fn add_comment(&self, order_id: u64, body: &str) -> Result<(), Error> {
        let body = require_text("body", body)?;
        let data = serde_json::json!({ "body": body });
        let req = Request::post(format!("translate/order/{order_id}/comment"))
            .form(vec![("data".to_owned(), data.to_string())]);
        self.client.send(req).await?;
        Ok(())
    }
}
