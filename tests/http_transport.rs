use mockito::{Matcher, ServerGuard};
use serde_json::json;
use std::sync::Arc;
use tgcall::tg::{ChatId, Recipient};
use tgcall::{ApiMode, DeploymentContext, Error, HttpDispatcher, InputFile, Telegram};
use tokio::net::TcpListener;
use url::Url;

/// Spin up a mock Bot API server, returning it with its base URL.
async fn mock_server() -> (ServerGuard, Url) {
    let server = mockito::Server::new_async().await;
    let root = Url::parse(&server.url()).unwrap();
    (server, root)
}

fn client(context: DeploymentContext) -> Telegram {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    let dispatcher = HttpDispatcher::with_client(Arc::new(context.clone()), http);
    Telegram::with_dispatcher(context, Arc::new(dispatcher))
}

fn bot_at(root: Url) -> Telegram {
    client(DeploymentContext::new("T").with_api_root(root))
}

#[tokio::test]
async fn json_call_roundtrip() {
    let (mut server, root) = mock_server().await;
    let mock = server
        .mock("POST", "/botT/setChatTitle")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(
            json!({"chat_id": -100, "title": "Release notes"}),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":true,"result":true}"#)
        .create_async()
        .await;

    let done = bot_at(root)
        .set_chat_title(ChatId(-100), "Release notes")
        .await
        .unwrap();
    assert!(done);
    mock.assert_async().await;
}

#[tokio::test]
async fn uploads_go_out_as_multipart() {
    let (mut server, root) = mock_server().await;
    let mock = server
        .mock("POST", "/botT/setChatPhoto")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"(?s)name="chat_id".*-100"#.to_string()),
            Matcher::Regex(r#"name="photo"; filename="logo\.png""#.to_string()),
            Matcher::Regex("PNGDATA".to_string()),
        ]))
        .with_status(200)
        .with_body(r#"{"ok":true,"result":true}"#)
        .create_async()
        .await;

    bot_at(root)
        .set_chat_photo(
            ChatId(-100),
            InputFile::memory(b"PNGDATA".to_vec(), "logo.png"),
        )
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn api_error_envelope_is_surfaced() {
    let (mut server, root) = mock_server().await;
    let mock = server
        .mock("POST", "/botT/leaveChat")
        .with_status(429)
        .with_body(
            r#"{"ok":false,"error_code":429,"description":"Too Many Requests: retry after 3","parameters":{"retry_after":3}}"#,
        )
        .create_async()
        .await;

    let err = bot_at(root).leave_chat(ChatId(1)).await.unwrap_err();
    match &err {
        Error::Api {
            error_code,
            description,
            ..
        } => {
            assert_eq!(*error_code, 429);
            assert!(description.starts_with("Too Many Requests"));
        }
        other => panic!("expected API error, got {other:?}"),
    }
    assert_eq!(err.retry_after(), Some(3));
    mock.assert_async().await;
}

#[tokio::test]
async fn user_mode_in_test_environment() {
    let (mut server, root) = mock_server().await;
    let mock = server
        .mock("POST", "/userT/test/getChatMembersCount")
        .match_body(Matcher::Json(json!({"chat_id": "@news"})))
        .with_status(200)
        .with_body(r#"{"ok":true,"result":5}"#)
        .create_async()
        .await;
    let bot = client(
        DeploymentContext::new("T")
            .with_api_root(root)
            .with_api_mode(ApiMode::User)
            .with_test_env(true),
    );

    let count = bot
        .get_chat_members_count(Recipient::ChannelUsername("@news".to_string()))
        .await
        .unwrap();
    assert_eq!(count, 5);
    mock.assert_async().await;
}

#[tokio::test]
async fn non_json_body_is_invalid_response() {
    let (mut server, root) = mock_server().await;
    let mock = server
        .mock("POST", "/botT/deleteChatPhoto")
        .with_status(502)
        .with_header("content-type", "text/html")
        .with_body("<html>bad gateway</html>")
        .create_async()
        .await;

    let err = bot_at(root).delete_chat_photo(ChatId(1)).await.unwrap_err();
    match err {
        Error::InvalidResponse { method, .. } => assert_eq!(method, "deleteChatPhoto"),
        other => panic!("expected invalid response, got {other:?}"),
    }
    mock.assert_async().await;
}

async fn closed_port_root() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}")).unwrap()
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let err = bot_at(closed_port_root().await).log_out().await.unwrap_err();
    assert!(matches!(err, Error::Network { .. }), "got {err:?}");
}

#[tokio::test]
async fn network_error_does_not_reveal_token() {
    let token = "123456:SECRET-TOKEN";
    let bot = client(DeploymentContext::new(token).with_api_root(closed_port_root().await));

    let err = bot.log_out().await.unwrap_err();
    assert!(matches!(err, Error::Network { .. }), "got {err:?}");
    assert!(!err.to_string().contains("SECRET-TOKEN"));
    assert!(!format!("{err:?}").contains("SECRET-TOKEN"));
    assert!(!format!("{:#}", anyhow::Error::from(err)).contains("SECRET-TOKEN"));
}
