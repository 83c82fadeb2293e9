use super::*;
use tempfile::TempDir;

mod common {
    use super::*;

    pub(super) fn sample_draft() -> Draft {
        Draft {
            name: "Áo thun".to_string(),
            code: "SP-001".to_string(),
            price: 99.0,
            ..Draft::default()
        }
    }
}

mod json_file {
    use super::common::sample_draft;
    use super::*;

    #[test]
    fn test_load_returns_none_when_nothing_saved() {
        let temp = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp.path());

        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp.path());
        let draft = sample_draft();

        storage.save(&draft).unwrap();

        assert_eq!(storage.load().unwrap(), Some(draft));
    }

    #[test]
    fn test_save_creates_missing_data_directory() {
        let temp = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(&temp.path().join("nested"));

        storage.save(&sample_draft()).unwrap();

        assert!(storage.path().exists());
    }

    #[test]
    fn test_corrupt_file_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp.path());
        std::fs::write(storage.path(), "{not json").unwrap();

        assert!(matches!(storage.load(), Err(StorageError::Parse(_))));
    }
}

mod memory {
    use super::common::sample_draft;
    use super::*;

    #[test]
    fn test_starts_empty() {
        let storage = MemoryStorage::new();

        assert!(storage.load().unwrap().is_none());
        assert!(storage.raw().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let storage = MemoryStorage::new();
        let draft = sample_draft();

        storage.save(&draft).unwrap();

        assert_eq!(storage.load().unwrap(), Some(draft));
        assert!(storage.raw().is_some());
    }

    #[test]
    fn test_seeded_corrupt_payload_is_a_parse_error() {
        let storage = MemoryStorage::with_raw("][");

        assert!(matches!(storage.load(), Err(StorageError::Parse(_))));
    }
}
