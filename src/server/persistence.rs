// src/server/persistence.rs
use crate::core::prelude::*;
use crate::server::types::Operation;
use tokio::io::AsyncReadExt;
use tokio::sync::Mutex;

/// Owns the history file. Every read and every read-modify-write goes
/// through `lock`, and writes replace the file via rename.
pub struct HistoryStore {
    file_path: PathBuf,
    lock: Mutex<()>,
}

impl HistoryStore {
    pub fn new<P: AsRef<Path>>(content_root: P, file_name: &str) -> Result<Self> {
        let root = content_root.as_ref();
        std::fs::create_dir_all(root).map_err(AppError::Io)?;

        Ok(Self {
            file_path: root.join(file_name),
            lock: Mutex::new(()),
        })
    }

    pub fn get_file_path(&self) -> &Path {
        &self.file_path
    }

    pub async fn load_operations(&self) -> Result<Vec<Operation>> {
        let _guard = self.lock.lock().await;
        self.read_file().await
    }

    pub async fn search_operations(&self, query: &str) -> Result<Vec<Operation>> {
        let operations = self.load_operations().await?;
        Ok(operations.into_iter().filter(|op| op.matches(query)).collect())
    }

    pub async fn append_operation(&self, operation: Operation) -> Result<usize> {
        let _guard = self.lock.lock().await;

        let mut operations = self.read_file().await?;
        operations.push(operation);
        self.write_file(&operations).await?;

        log::info!(
            "History now holds {} operation(s) in {}",
            operations.len(),
            self.file_path.display()
        );
        Ok(operations.len())
    }

    pub async fn save_operations(&self, operations: &[Operation]) -> Result<()> {
        let _guard = self.lock.lock().await;
        self.write_file(operations).await
    }

    // Callers must hold `lock`.
    async fn read_file(&self) -> Result<Vec<Operation>> {
        let mut file = tokio::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(&self.file_path)
            .await
            .map_err(AppError::Io)?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .await
            .map_err(AppError::Io)?;

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let operations: Option<Vec<Operation>> = serde_json::from_str(&content).map_err(|e| {
            AppError::Storage(format!(
                "Failed to parse history {}: {}",
                self.file_path.display(),
                e
            ))
        })?;

        Ok(operations.unwrap_or_default())
    }

    // Callers must hold `lock`.
    async fn write_file(&self, operations: &[Operation]) -> Result<()> {
        let content = serde_json::to_string_pretty(operations)
            .map_err(|e| AppError::Storage(format!("Failed to serialize history: {}", e)))?;

        let temp_path = self.file_path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, content)
            .await
            .map_err(AppError::Io)?;
        tokio::fs::rename(&temp_path, &self.file_path)
            .await
            .map_err(AppError::Io)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn store_in(dir: &tempfile::TempDir) -> HistoryStore {
        HistoryStore::new(dir.path(), "data.json").unwrap()
    }

    #[tokio::test]
    async fn test_missing_file_is_created_and_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(!store.get_file_path().exists());

        assert!(store.load_operations().await.unwrap().is_empty());
        assert!(store.get_file_path().exists());
    }

    #[tokio::test]
    async fn test_null_and_blank_files_read_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        for content in ["null", "   \n", ""] {
            tokio::fs::write(store.get_file_path(), content).await.unwrap();
            assert!(store.load_operations().await.unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_corrupt_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        tokio::fs::write(store.get_file_path(), "[{\"expression\":")
            .await
            .unwrap();

        let result = store.load_operations().await;
        assert!(matches!(result, Err(AppError::Storage(_))));
    }

    #[tokio::test]
    async fn test_save_then_load_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let operations = vec![
            Operation::new("12+3", "15"),
            Operation::new("20*2", "40"),
            Operation::new("99-9", "90"),
        ];

        store.save_operations(&operations).await.unwrap();
        assert_eq!(store.load_operations().await.unwrap(), operations);

        let raw = tokio::fs::read_to_string(store.get_file_path())
            .await
            .unwrap();
        assert!(raw.starts_with("[\n"), "history should be pretty-printed");
        assert!(!dir.path().join("data.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_append_and_search() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.append_operation(Operation::new("12+3", "15")).await.unwrap(), 1);
        assert_eq!(store.append_operation(Operation::new("10+5", "15")).await.unwrap(), 2);
        assert_eq!(store.append_operation(Operation::new("15", "15")).await.unwrap(), 3);
        assert_eq!(store.append_operation(Operation::new("20*2", "40")).await.unwrap(), 4);

        let by_result = store.search_operations("15").await.unwrap();
        assert_eq!(
            by_result,
            vec![
                Operation::new("12+3", "15"),
                Operation::new("10+5", "15"),
                Operation::new("15", "15"),
            ]
        );

        let by_expression = store.search_operations("20*2").await.unwrap();
        assert_eq!(by_expression, vec![Operation::new("20*2", "40")]);

        assert!(store.search_operations("7").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_not_lost() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(store_in(&dir));

        let tasks: Vec<_> = (0..20)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store
                        .append_operation(Operation::new(format!("{}+1", i + 10), (i + 11).to_string()))
                        .await
                })
            })
            .collect();

        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let history = store.load_operations().await.unwrap();
        assert_eq!(history.len(), 20);
        for i in 0..20 {
            let expected = Operation::new(format!("{}+1", i + 10), (i + 11).to_string());
            assert!(history.contains(&expected), "missing {:?}", expected);
        }
    }
}
