#[cfg(test)]
mod tests {
    use dolist::api::remote::{RemoteAdapter, RemoteConfig, DEFAULT_TABLE};
    use dolist::db::backend::TaskBackend;
    use dolist::libs::error::PersistenceError;
    use dolist::libs::prompt::UserPrompt;
    use dolist::libs::store::TaskStore;
    use dolist::libs::task::{Category, TaskDraft, TaskId, TaskPatch};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const API_KEY: &str = "test-key";
    const TABLE_PATH: &str = "/rest/v1/todos";

    struct Silent;

    impl UserPrompt for Silent {
        fn confirm(&self, _message: &str) -> bool {
            true
        }

        fn notify(&self, _message: &str) {}
    }

    fn adapter(api_url: &str) -> RemoteAdapter {
        RemoteAdapter::new(&RemoteConfig {
            api_url: api_url.to_string(),
            api_key: API_KEY.to_string(),
            table: DEFAULT_TABLE.to_string(),
        })
    }

    /// Points at a local port nothing listens on.
    fn unreachable() -> RemoteAdapter {
        adapter("http://127.0.0.1:1")
    }

    fn row(id: u64, title: &str, category: &str, completed: bool) -> serde_json::Value {
        json!({
            "id": id,
            "title": title,
            "category": category,
            "completed": completed,
            "created_at": "2025-03-01T09:00:00+00:00",
            "completed_at": null
        })
    }

    fn draft(title: &str, category: Category) -> TaskDraft {
        TaskDraft::new(title.to_string(), category, None)
    }

    #[test]
    fn test_server_assigns_ids() {
        let adapter = unreachable();
        assert_eq!(adapter.assign_id(), None);
        assert!(!adapter.is_snapshot());
    }

    #[tokio::test]
    async fn test_load_orders_by_creation_and_sends_keys() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(TABLE_PATH))
            .and(query_param("select", "*"))
            .and(query_param("order", "created_at.asc"))
            .and(header("apikey", API_KEY))
            .and(header("authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                row(1, "Prepare meeting notes", "work", false),
                row(2, "Exercise", "personal", true),
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let tasks = adapter(&server.uri()).load_all().await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, TaskId::new("1"));
        assert_eq!(tasks[1].category, Category::Personal);
        // A completed row without a completion time gets its creation time.
        assert_eq!(tasks[1].completed_at, Some(tasks[1].created_at));
    }

    #[tokio::test]
    async fn test_insert_returns_server_row() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(TABLE_PATH))
            .and(header("prefer", "return=representation"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([row(7, "Exercise", "personal", false)])))
            .expect(1)
            .mount(&server)
            .await;

        let task = adapter(&server.uri()).insert(&draft("Exercise", Category::Personal)).await.unwrap();
        assert_eq!(task.id, TaskId::new("7"));
        assert_eq!(task.title, "Exercise");
        assert!(!task.completed);
    }

    #[tokio::test]
    async fn test_error_status_keeps_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(TABLE_PATH))
            .respond_with(ResponseTemplate::new(400).set_body_string("invalid category"))
            .mount(&server)
            .await;

        let result = adapter(&server.uri()).insert(&draft("Exercise", Category::Personal)).await;
        match result {
            Err(PersistenceError::Status { status, body }) => {
                assert_eq!(status, 400);
                assert_eq!(body, "invalid category");
            }
            other => panic!("expected a status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_insert_result_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(TABLE_PATH))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
            .mount(&server)
            .await;

        let result = adapter(&server.uri()).insert(&draft("Exercise", Category::Personal)).await;
        assert!(matches!(result, Err(PersistenceError::Decode(_))));
    }

    #[tokio::test]
    async fn test_unexpected_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(TABLE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let result = adapter(&server.uri()).load_all().await;
        assert!(matches!(result, Err(PersistenceError::Decode(_))));
    }

    #[tokio::test]
    async fn test_update_sends_only_changed_columns() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path(TABLE_PATH))
            .and(query_param("id", "eq.7"))
            .and(body_json(json!({"title": "Go to gym"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let patch = TaskPatch {
            title: Some("Go to gym".to_string()),
            ..TaskPatch::default()
        };
        adapter(&server.uri()).update(&TaskId::new("7"), &patch).await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_patch_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&server)
            .await;

        adapter(&server.uri()).update(&TaskId::new("7"), &TaskPatch::default()).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_targets_one_row() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path(TABLE_PATH))
            .and(query_param("id", "eq.7"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        adapter(&server.uri()).delete(&TaskId::new("7")).await.unwrap();
    }

    #[tokio::test]
    async fn test_network_errors_are_returned() {
        let adapter = unreachable();

        assert!(matches!(adapter.load_all().await, Err(PersistenceError::Remote(_))));
        assert!(matches!(adapter.insert(&draft("Exercise", Category::Personal)).await, Err(PersistenceError::Remote(_))));
        let patch = TaskPatch {
            completed: Some(true),
            ..TaskPatch::default()
        };
        assert!(adapter.update(&TaskId::new("1"), &patch).await.is_err());
        assert!(adapter.delete(&TaskId::new("1")).await.is_err());
    }

    #[tokio::test]
    async fn test_failed_insert_never_reaches_the_list() {
        let store = TaskStore::new(unreachable(), Silent);
        store.load().await;
        assert!(store.is_empty());

        assert_eq!(store.add("Exercise", Category::Personal).await, Ok(None));
        assert!(store.is_empty());
        assert_eq!(store.pending(), 0);
    }

    #[tokio::test]
    async fn test_store_uses_server_id_and_keeps_task_on_failed_delete() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(TABLE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path(TABLE_PATH))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([row(7, "Exercise", "personal", false)])))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path(TABLE_PATH))
            .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
            .mount(&server)
            .await;

        let store = TaskStore::new(adapter(&server.uri()), Silent);
        store.load().await;
        let id = store.add("Exercise", Category::Personal).await.unwrap().unwrap();
        assert_eq!(id, TaskId::new("7"));

        assert!(!store.remove(&id).await);
        assert_eq!(store.len(), 1);
    }
}
