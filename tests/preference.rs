#[cfg(test)]
mod tests {
    use dolist::db::local::STORAGE_KEY;
    use dolist::db::local_storage::LocalStorage;
    use dolist::libs::data_storage::DataStorage;
    use dolist::libs::preference::{PreferenceStore, DARK_MODE_KEY};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct PreferenceTestContext {
        _temp_dir: TempDir,
        storage: LocalStorage,
    }

    impl TestContext for PreferenceTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = LocalStorage::open(&DataStorage::with_base_path(temp_dir.path()));
            PreferenceTestContext {
                _temp_dir: temp_dir,
                storage,
            }
        }
    }

    #[test_context(PreferenceTestContext)]
    #[test]
    fn test_defaults_to_light(ctx: &mut PreferenceTestContext) {
        let preferences = PreferenceStore::new(ctx.storage.clone());
        assert!(!preferences.get());
    }

    #[test_context(PreferenceTestContext)]
    #[test]
    fn test_toggle_persists(ctx: &mut PreferenceTestContext) {
        let preferences = PreferenceStore::new(ctx.storage.clone());
        assert!(preferences.toggle());
        assert_eq!(ctx.storage.get_item(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));

        // A fresh session reads the stored value.
        let reopened = PreferenceStore::new(ctx.storage.clone());
        assert!(reopened.get());
        assert!(!reopened.toggle());
        assert!(!preferences.get());
    }

    #[test_context(PreferenceTestContext)]
    #[test]
    fn test_garbage_reads_as_light(ctx: &mut PreferenceTestContext) {
        ctx.storage.set_item(DARK_MODE_KEY, "maybe").unwrap();
        let preferences = PreferenceStore::new(ctx.storage.clone());
        assert!(!preferences.get());

        preferences.set(true);
        assert!(preferences.get());
    }

    #[test_context(PreferenceTestContext)]
    #[test]
    fn test_independent_of_task_list(ctx: &mut PreferenceTestContext) {
        ctx.storage.set_item(STORAGE_KEY, "[]").unwrap();
        let preferences = PreferenceStore::new(ctx.storage.clone());
        preferences.set(true);

        assert_eq!(ctx.storage.get_item(STORAGE_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test_context(PreferenceTestContext)]
    #[test]
    fn test_write_failure_is_swallowed(ctx: &mut PreferenceTestContext) {
        let preferences = PreferenceStore::new(ctx.storage.clone().with_quota(Some(1)));
        preferences.set(true);
        assert!(!preferences.get());
    }
}
