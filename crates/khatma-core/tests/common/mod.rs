use std::path::{Path, PathBuf};

use khatma_core::{
    models::BookKind, params::CreatePlan, Database, PlanStore, PlanStoreBuilder,
};
use tempfile::TempDir;

/// Helper function to create a temporary directory and database path
pub fn create_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("khatma.db");
    (temp_dir, db_path)
}

/// Opens a store over the database at `db_path`
pub fn open_store(db_path: &Path) -> PlanStore<Database> {
    PlanStoreBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .expect("Failed to open plan store")
}

/// Creation parameters for a custom book shared by the given names
pub fn custom_plan(name: &str, pages: u32, days: u32, names: &[&str]) -> CreatePlan {
    CreatePlan {
        book: BookKind::CustomWork {
            name: name.to_string(),
        },
        total_pages: Some(pages),
        days,
        participant_names: names.iter().map(|&n| n.to_string()).collect(),
        owner_id: "u1".to_string(),
        start_date: None,
    }
}
