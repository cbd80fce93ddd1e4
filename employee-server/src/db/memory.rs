//! In-process employee repository
//!
//! Mirrors the PostgreSQL semantics (monotonic ids, id ordering, not-found
//! on update/delete) without a database.

use std::collections::BTreeMap;

use async_trait::async_trait;
use shared::models::{Employee, EmployeeInput};
use tokio::sync::RwLock;

use super::EmployeeRepository;
use crate::error::{StoreError, StoreResult};

#[derive(Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<i64, Employee>,
}

#[derive(Default)]
pub struct MemoryEmployeeRepository {
    table: RwLock<Table>,
}

impl MemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for MemoryEmployeeRepository {
    async fn create(&self, input: EmployeeInput) -> StoreResult<Employee> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let employee = input.into_employee(table.last_id);
        table.rows.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn find_page(&self, offset: u64, limit: u64) -> StoreResult<Vec<Employee>> {
        let table = self.table.read().await;
        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(table.rows.values().skip(skip).take(take).cloned().collect())
    }

    async fn count(&self) -> StoreResult<u64> {
        Ok(self.table.read().await.rows.len() as u64)
    }

    async fn update(&self, id: i64, input: EmployeeInput) -> StoreResult<Employee> {
        let mut table = self.table.write().await;
        let row = table.rows.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        *row = input.into_employee(id);
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        self.table
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn close(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str) -> EmployeeInput {
        EmployeeInput {
            name: name.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_ids_are_unique_and_not_reused() {
        let repo = MemoryEmployeeRepository::new();
        let a = repo.create(input("a")).await.unwrap();
        let b = repo.create(input("b")).await.unwrap();
        repo.delete(b.id).await.unwrap();
        let c = repo.create(input("c")).await.unwrap();

        assert_ne!(a.id, b.id);
        assert!(c.id > b.id);
    }

    #[tokio::test]
    async fn test_find_page_orders_by_id() {
        let repo = MemoryEmployeeRepository::new();
        for i in 0..5 {
            repo.create(input(&format!("e{i}"))).await.unwrap();
        }

        let page = repo.find_page(2, 2).await.unwrap();
        let names: Vec<_> = page.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["e2", "e3"]);
        assert!(repo.find_page(10, 2).await.unwrap().is_empty());
        assert_eq!(repo.find_page(0, u64::MAX).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing() {
        let repo = MemoryEmployeeRepository::new();
        assert!(matches!(
            repo.update(9, input("x")).await,
            Err(StoreError::NotFound(9))
        ));
        assert!(matches!(repo.delete(9).await, Err(StoreError::NotFound(9))));
    }
}
