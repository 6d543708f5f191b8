use actix_web::rt::task::JoinHandle;
use anyhow::{Context, Result, anyhow};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};

use super::{EmployeeStore, InMemoryStore};
use crate::model::employee::NewEmployee;
use crate::utils::validation::parse_new_employee;

/// Parse a seed document: a JSON array of `POST /employees` bodies.
pub fn parse_seed(raw: &[u8]) -> Result<Vec<NewEmployee>> {
    let doc: Value = serde_json::from_slice(raw).context("seed file is not valid JSON")?;
    let entries = doc
        .as_array()
        .ok_or_else(|| anyhow!("seed file must contain a JSON array"))?;

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            parse_new_employee(entry).with_context(|| format!("seed entry #{i} is invalid"))
        })
        .collect()
}

/// Insert every seed record.
pub async fn seed_store(store: &dyn EmployeeStore, employees: Vec<NewEmployee>) -> Result<usize> {
    let total = employees.len();
    for employee in employees {
        store.create(employee).await?;
    }
    Ok(total)
}

/// Load `path` into the store. Nothing is inserted unless the whole file
/// validates.
pub async fn warmup_from_file(store: &dyn EmployeeStore, path: &Path) -> Result<usize> {
    let owned = path.to_path_buf();
    let raw = actix_web::web::block(move || std::fs::read(owned))
        .await
        .context("seed loader was cancelled")?
        .with_context(|| format!("failed to read seed file {}", path.display()))?;

    let employees = parse_seed(&raw)?;
    let total = seed_store(store, employees).await?;

    info!(total, path = %path.display(), "Employee seed complete");
    Ok(total)
}

/// Seed `store` in the background and mark it ready once every record is in.
/// On failure the store stays not-ready so probes keep traffic away.
pub fn spawn_warmup(store: Arc<InMemoryStore>, path: PathBuf) -> JoinHandle<()> {
    actix_web::rt::spawn(async move {
        match warmup_from_file(&*store, &path).await {
            Ok(_) => store.mark_ready(),
            Err(e) => error!(error = ?e, "Failed to seed employee store"),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn seed_path(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "flamecraft_seed_{}_{name}.json",
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn parses_array_of_create_bodies() {
        let seed = parse_seed(
            br#"[{"name": "Ada", "role": "Engineer", "salary": 120000},
                 {"name": "Grace", "role": "Admiral", "salary": 150000}]"#,
        )
        .unwrap();

        assert_eq!(seed.len(), 2);
        assert_eq!(seed[1].name, "Grace");
    }

    #[test]
    fn rejects_invalid_entries_and_shapes() {
        assert!(parse_seed(br#"{"name": "Ada"}"#).is_err());
        assert!(parse_seed(br#"[{"name": "Ada", "role": 1, "salary": 1}]"#).is_err());
        assert!(parse_seed(b"not json").is_err());
    }

    #[actix_web::test]
    async fn seeded_records_get_sequential_ids() {
        let store = InMemoryStore::pending();
        let seed = parse_seed(br#"[{"name": "Ada", "role": "Engineer", "salary": 1}]"#).unwrap();

        assert_eq!(seed_store(&store, seed).await.unwrap(), 1);
        assert_eq!(store.get(1).await.unwrap().name, "Ada");
    }

    #[actix_web::test]
    async fn warmup_reads_and_inserts_file() {
        let store = InMemoryStore::pending();
        let path = seed_path(
            "direct",
            r#"[{"name": "Ada", "role": "Engineer", "salary": 1},
                {"name": "Grace", "role": "Admiral", "salary": 2}]"#,
        );

        assert_eq!(warmup_from_file(&store, &path).await.unwrap(), 2);
        assert_eq!(store.get(2).await.unwrap().name, "Grace");
        fs::remove_file(path).ok();
    }

    #[actix_web::test]
    async fn warmup_inserts_nothing_when_any_entry_is_invalid() {
        let store = InMemoryStore::pending();
        let path = seed_path(
            "partial",
            r#"[{"name": "Ada", "role": "Engineer", "salary": 1},
                {"name": "Bad", "role": 7, "salary": 2}]"#,
        );

        assert!(warmup_from_file(&store, &path).await.is_err());
        assert_eq!(store.len().await.unwrap(), 0);
        fs::remove_file(path).ok();
    }

    #[actix_web::test]
    async fn successful_background_seed_marks_store_ready() {
        let store = Arc::new(InMemoryStore::pending());
        let path = seed_path("ready", r#"[{"name": "Ada", "role": "Engineer", "salary": 1}]"#);

        spawn_warmup(Arc::clone(&store), path.clone()).await.unwrap();

        assert!(store.is_ready());
        assert_eq!(store.len().await.unwrap(), 1);
        fs::remove_file(path).ok();
    }

    #[actix_web::test]
    async fn failed_background_seed_leaves_store_not_ready() {
        let missing = Arc::new(InMemoryStore::pending());
        spawn_warmup(
            Arc::clone(&missing),
            std::env::temp_dir().join("flamecraft_seed_does_not_exist.json"),
        )
        .await
        .unwrap();
        assert!(!missing.is_ready());

        let invalid = Arc::new(InMemoryStore::pending());
        let path = seed_path("invalid", r#"{"name": "not an array"}"#);
        spawn_warmup(Arc::clone(&invalid), path.clone()).await.unwrap();
        assert!(!invalid.is_ready());
        assert_eq!(invalid.len().await.unwrap(), 0);
        fs::remove_file(path).ok();
    }
}
