#![cfg(feature = "order")]

#[path = "../mock_server/mod.rs"]
mod mock_server;

use gengo_sdk::Error;
use mock_server::MockServer;
use serde_json::Value;

#[tokio::test]
async fn get_order_lists_jobs_by_state() {
    let server = MockServer::start(
        r#"{"opstat":"ok","response":{"order":{"order_id":"1001","total_credits":"1.20","total_units":"12","total_jobs":"2","currency":"USD","jobs_available":["11"],"jobs_reviewable":["12"]}}}"#,
    )
    .await;

    let order = server.client().order().get(1001).await.unwrap();
    assert_eq!(order.order_id, 1001);
    assert_eq!(order.total_jobs, Some(2));
    assert_eq!(order.jobs_available, vec![11]);
    assert_eq!(order.jobs_reviewable, vec![12]);
    assert!(order.jobs_queued.is_empty());

    let req = server.single_request();
    assert_eq!(req.method, "GET");
    assert_eq!(req.path(), "/v2/translate/order/1001");
}

#[tokio::test]
async fn cancel_uses_delete() {
    let server = MockServer::start(r#"{"opstat":"ok","response":{}}"#).await;
    server.client().order().cancel(1001).await.unwrap();

    let req = server.single_request();
    assert_eq!(req.method, "DELETE");
    assert_eq!(req.path(), "/v2/translate/order/1001");
}

#[tokio::test]
async fn comments_roundtrip() {
    let server = MockServer::start(
        r#"{"opstat":"ok","response":{"thread":[{"body":"glossary attached","author":"customer","ctime":1700000000}]}}"#,
    )
    .await;
    let client = server.client();

    let thread = client.order().comments(1001).await.unwrap();
    assert_eq!(thread[0].body, "glossary attached");

    client.order().add_comment(1001, "one more note").await.unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].path(), "/v2/translate/order/1001/comments");
    assert_eq!(requests[1].method, "POST");
    assert_eq!(requests[1].path(), "/v2/translate/order/1001/comment");
    let data: Value = serde_json::from_str(&requests[1].form()["data"]).unwrap();
    assert_eq!(data["body"], "one more note");
}

#[tokio::test]
async fn blank_comment_fails_without_request() {
    let server = MockServer::start(r#"{"opstat":"ok","response":{}}"#).await;
    let res = server.client().order().add_comment(1001, "\t").await;
    assert!(matches!(res, Err(Error::InvalidArgument(_))));
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn missing_response_gives_empty_thread() {
    let server = MockServer::start(r#"{"opstat":"ok","response":null}"#).await;
    let thread = server.client().order().comments(1001).await.unwrap();
    assert!(thread.is_empty());
}
