use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tgcall::types::FileDescriptor;
use tgcall::{DeploymentContext, Dispatch, Error, FileRef, Request, Telegram};

/// Answers `getFile` with a fixed descriptor and remembers the requested ids.
struct FakeApi {
    file_path: Option<&'static str>,
    lookups: Mutex<Vec<String>>,
}

impl FakeApi {
    fn new(file_path: Option<&'static str>) -> Arc<Self> {
        Arc::new(Self {
            file_path,
            lookups: Mutex::new(Vec::new()),
        })
    }

    fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Dispatch for FakeApi {
    async fn dispatch(&self, method: &str, request: Request) -> tgcall::Result<Value> {
        assert_eq!(method, "getFile");
        let (fields, _) = request.into_parts()?;
        let file_id = fields["file_id"].as_str().unwrap().to_string();
        self.lookups.lock().unwrap().push(file_id.clone());

        let mut result = json!({"file_id": file_id, "file_unique_id": "uniq"});
        if let Some(path) = self.file_path {
            result["file_path"] = json!(path);
        }
        Ok(result)
    }
}

fn bot(api: &Arc<FakeApi>, context: DeploymentContext) -> Telegram {
    Telegram::with_dispatcher(context, api.clone())
}

#[tokio::test]
async fn id_is_looked_up_then_resolved() {
    let api = FakeApi::new(Some("documents/file_7.pdf"));
    let url = bot(&api, DeploymentContext::new("123:ABC"))
        .get_file_link("BQAD")
        .await
        .unwrap();

    assert_eq!(
        url.as_str(),
        "https://api.telegram.org/file/bot123:ABC/documents/file_7.pdf"
    );
    assert_eq!(api.lookups(), vec!["BQAD"]);
}

#[tokio::test]
async fn descriptor_with_path_needs_no_call() {
    let api = FakeApi::new(None);
    let descriptor = FileDescriptor {
        file_id: "BQAD".to_string(),
        file_unique_id: "uniq".to_string(),
        file_size: Some(10),
        file_path: Some("documents/file_7.pdf".to_string()),
    };
    let url = bot(&api, DeploymentContext::new("T").with_test_env(true))
        .get_file_link(descriptor)
        .await
        .unwrap();

    assert_eq!(
        url.as_str(),
        "https://api.telegram.org/file/botT/test/documents/file_7.pdf"
    );
    assert!(api.lookups().is_empty());
}

#[tokio::test]
async fn descriptor_without_path_is_looked_up() {
    let api = FakeApi::new(Some("photos/file_1.jpg"));
    let descriptor = FileDescriptor {
        file_id: "AgAD".to_string(),
        file_unique_id: "uniq".to_string(),
        file_size: None,
        file_path: None,
    };
    bot(&api, DeploymentContext::new("T"))
        .get_file_link(FileRef::from(descriptor))
        .await
        .unwrap();
    assert_eq!(api.lookups(), vec!["AgAD"]);
}

#[tokio::test]
async fn local_server_paths_become_file_urls() {
    let api = FakeApi::new(Some("/var/lib/telegram-bot-api/T/photos/file_1.jpg"));
    let context = DeploymentContext::new("T")
        .with_api_root(url::Url::parse("http://10.0.0.5:8081").unwrap());
    let url = bot(&api, context).get_file_link("AgAD").await.unwrap();

    assert_eq!(url.scheme(), "file");
    assert_eq!(url.host_str(), Some("10.0.0.5"));
    assert_eq!(url.port(), None);
    assert_eq!(url.path(), "/var/lib/telegram-bot-api/T/photos/file_1.jpg");
}

#[tokio::test]
async fn missing_path_is_a_resolution_error() {
    let api = FakeApi::new(None);
    let err = bot(&api, DeploymentContext::new("T"))
        .get_file_link("AgAD")
        .await
        .unwrap_err();

    assert!(err.is_resolution());
    match err {
        Error::Resolution { file_id, .. } => assert_eq!(file_id, "AgAD"),
        other => panic!("expected resolution error, got {other:?}"),
    }
}
