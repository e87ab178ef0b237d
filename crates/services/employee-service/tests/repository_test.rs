//! EmployeeStore tests against an in-memory SQLite database.

use common::{AppError, DatabaseConfig};
use domain::Employee;
use employee_service_lib::infra::Database;
use employee_service_lib::repository::{EmployeeRepository, EmployeeStore};

async fn setup() -> EmployeeStore {
    let db = Database::connect(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database");
    EmployeeStore::new(db.get_connection())
}

fn leslie() -> Employee {
    Employee::new("Leslie", "Andrews", "leslie@example.com")
}

#[tokio::test]
async fn test_find_all_on_empty_table() {
    let repo = setup().await;
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_save_new_assigns_id_and_round_trips() {
    let repo = setup().await;

    let saved = repo.save(leslie()).await.unwrap();
    assert!(saved.id > 0);
    assert_eq!(saved.clone().with_id(0), leslie());

    let found = repo.find_by_id(saved.id).await.unwrap();
    assert_eq!(found, Some(saved));
}

#[tokio::test]
async fn test_find_all_returns_every_saved_employee() {
    let repo = setup().await;

    let names = [("Emma", "Baumgarten"), ("Avani", "Gupta"), ("Yuri", "Petrov")];
    let mut ids = Vec::new();
    for (first, last) in names {
        let email = format!("{}@example.com", first.to_lowercase());
        ids.push(repo.save(Employee::new(first, last, email)).await.unwrap().id);
    }

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), names.len());
    assert_eq!(all.iter().map(|e| e.id).collect::<Vec<_>>(), ids);
}

#[tokio::test]
async fn test_save_existing_updates_without_duplicating() {
    let repo = setup().await;
    let saved = repo.save(leslie()).await.unwrap();

    let mut changed = saved.clone();
    changed.email = "l.andrews@example.com".to_string();
    let updated = repo.save(changed.clone()).await.unwrap();

    assert_eq!(updated, changed);
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
    assert_eq!(repo.find_by_id(saved.id).await.unwrap(), Some(changed));
}

#[tokio::test]
async fn test_save_with_unknown_id_is_not_found() {
    let repo = setup().await;

    let result = repo.save(leslie().with_id(999)).await;

    assert!(matches!(result, Err(AppError::NotFound)));
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_find_by_missing_id_returns_none() {
    let repo = setup().await;
    assert_eq!(repo.find_by_id(12345).await.unwrap(), None);
}

#[tokio::test]
async fn test_delete_removes_employee() {
    let repo = setup().await;
    let keep = repo.save(leslie()).await.unwrap();
    let gone = repo
        .save(Employee::new("Juan", "Vega", "juan@example.com"))
        .await
        .unwrap();

    repo.delete_by_id(gone.id).await.unwrap();

    assert_eq!(repo.find_by_id(gone.id).await.unwrap(), None);
    assert_eq!(repo.find_all().await.unwrap(), vec![keep]);
}

#[tokio::test]
async fn test_delete_missing_id_is_noop() {
    let repo = setup().await;
    let saved = repo.save(leslie()).await.unwrap();

    repo.delete_by_id(saved.id + 100).await.unwrap();

    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}
