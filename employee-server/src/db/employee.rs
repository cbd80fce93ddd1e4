//! PostgreSQL employee repository

use async_trait::async_trait;
use shared::models::{Employee, EmployeeInput};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::EmployeeRepository;
use crate::config::Config;
use crate::error::{StoreError, StoreResult};

/// `sqlx` binds LIMIT/OFFSET as BIGINT
fn to_bigint(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    /// Wrap an existing pool (migrations are the caller's concern)
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open the pool and bring the schema up to date
    pub async fn connect(config: &Config) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .connect(&config.database_url)
            .await?;
        tracing::info!("Connected to PostgreSQL");

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Migrations applied");

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn create(&self, input: EmployeeInput) -> StoreResult<Employee> {
        let employee: Employee = sqlx::query_as(
            r#"
            INSERT INTO employees (name, email, phone, location)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, phone, location
            "#,
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.location)
        .fetch_one(&self.pool)
        .await?;
        Ok(employee)
    }

    async fn find_page(&self, offset: u64, limit: u64) -> StoreResult<Vec<Employee>> {
        let rows: Vec<Employee> = sqlx::query_as(
            r#"
            SELECT id, name, email, phone, location
            FROM employees
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(to_bigint(limit))
        .bind(to_bigint(offset))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn count(&self) -> StoreResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await?;
        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn update(&self, id: i64, input: EmployeeInput) -> StoreResult<Employee> {
        sqlx::query_as(
            r#"
            UPDATE employees SET
                name = $1, email = $2, phone = $3, location = $4
            WHERE id = $5
            RETURNING id, name, email, phone, location
            "#,
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.location)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound(id))
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let rows = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if rows.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("PostgreSQL pool closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_bigint_clamps() {
        assert_eq!(to_bigint(10), 10);
        assert_eq!(to_bigint(u64::MAX), i64::MAX);
    }

    /// Needs a disposable database: `TEST_DATABASE_URL=postgres://... cargo test -- --ignored`
    #[tokio::test]
    #[ignore]
    async fn test_postgres_round_trip() {
        let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL");
        let config = Config {
            database_url: url,
            http_port: 0,
            cors_origin: String::new(),
            database_max_connections: 2,
        };
        let repo = PgEmployeeRepository::connect(&config).await.unwrap();

        let created = repo
            .create(EmployeeInput {
                name: "Grace".into(),
                email: "grace@example.com".into(),
                phone: "555-0199".into(),
                location: "Arlington".into(),
            })
            .await
            .unwrap();
        assert!(repo.count().await.unwrap() >= 1);

        let updated = repo
            .update(
                created.id,
                EmployeeInput {
                    name: "Grace H.".into(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Grace H.");
        assert_eq!(updated.email, "");

        repo.delete(created.id).await.unwrap();
        assert!(matches!(
            repo.delete(created.id).await,
            Err(StoreError::NotFound(id)) if id == created.id
        ));
        repo.close().await;
    }
}
