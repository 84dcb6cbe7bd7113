//! Student persistence: list with nested subject names, read, create, full replace, guarded delete.

use crate::error::AppError;
use crate::model::{Created, NewStudent, StudentRow, StudentView};
use sqlx::SqlitePool;
use std::collections::HashMap;

pub struct StudentService;

impl StudentService {
    /// All students in id order, each with the names of its subjects.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<StudentView>, AppError> {
        tracing::debug!("list students");
        let rows =
            sqlx::query_as::<_, StudentRow>("SELECT id, name, email FROM students ORDER BY id")
                .fetch_all(pool)
                .await?;
        let subjects: Vec<(i64, String)> =
            sqlx::query_as("SELECT student_id, name FROM subjects ORDER BY id")
                .fetch_all(pool)
                .await?;

        let mut by_student: HashMap<i64, Vec<String>> = HashMap::new();
        for (student_id, name) in subjects {
            by_student.entry(student_id).or_default().push(name);
        }
        Ok(rows
            .into_iter()
            .map(|row| {
                let names = by_student.remove(&row.id).unwrap_or_default();
                StudentView::from_row(row, names)
            })
            .collect())
    }

    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<StudentView>, AppError> {
        tracing::debug!(id, "read student");
        let row =
            sqlx::query_as::<_, StudentRow>("SELECT id, name, email FROM students WHERE id = ?")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        let subjects: Vec<String> =
            sqlx::query_scalar("SELECT name FROM subjects WHERE student_id = ? ORDER BY id")
                .bind(id)
                .fetch_all(pool)
                .await?;
        Ok(Some(StudentView::from_row(row, subjects)))
    }

    pub async fn create(pool: &SqlitePool, student: &NewStudent) -> Result<Created, AppError> {
        let result = sqlx::query("INSERT INTO students (name, email) VALUES (?, ?)")
            .bind(&student.name)
            .bind(&student.email)
            .execute(pool)
            .await?;
        let id = result.last_insert_rowid();
        tracing::info!(id, "created student");
        Ok(Created {
            id,
            name: student.name.clone(),
        })
    }

    /// Overwrite name and email. `None` when no student has `id`.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        student: &NewStudent,
    ) -> Result<Option<Created>, AppError> {
        let result = sqlx::query("UPDATE students SET name = ?, email = ? WHERE id = ?")
            .bind(&student.name)
            .bind(&student.email)
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }
        tracing::info!(id, "updated student");
        Ok(Some(Created {
            id,
            name: student.name.clone(),
        }))
    }

    /// Delete by id. Returns `false` when absent; a student that still owns subjects is a conflict.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let mut tx = pool.begin().await?;
        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM students WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Ok(false);
        }
        let owned: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM subjects WHERE student_id = ?")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        if owned > 0 {
            return Err(still_referenced(id, owned));
        }
        sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                    still_referenced(id, 1)
                }
                _ => AppError::Db(e),
            })?;
        tx.commit().await?;
        tracing::info!(id, "deleted student");
        Ok(true)
    }
}

fn still_referenced(id: i64, owned: i64) -> AppError {
    AppError::Conflict(format!("student {} still has {} subject(s)", id, owned))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory_pool;

    fn student(name: &str, email: &str) -> NewStudent {
        NewStudent {
            name: name.into(),
            email: email.into(),
        }
    }

    #[tokio::test]
    async fn create_then_list_has_empty_subjects() {
        let pool = memory_pool().await.unwrap();
        let created = StudentService::create(&pool, &student("A", "a@x.com")).await.unwrap();
        assert_eq!(created.name, "A");

        let all = StudentService::list(&pool).await.unwrap();
        assert_eq!(
            all,
            vec![StudentView {
                id: created.id,
                name: "A".into(),
                email: "a@x.com".into(),
                subjects: vec![],
            }]
        );
    }

    #[tokio::test]
    async fn list_groups_subjects_per_student() {
        let pool = memory_pool().await.unwrap();
        let a = StudentService::create(&pool, &student("A", "a@x.com")).await.unwrap();
        let b = StudentService::create(&pool, &student("B", "b@x.com")).await.unwrap();
        for (name, owner) in [("Math", a.id), ("Art", b.id), ("Physics", a.id)] {
            sqlx::query("INSERT INTO subjects (name, student_id) VALUES (?, ?)")
                .bind(name)
                .bind(owner)
                .execute(&pool)
                .await
                .unwrap();
        }

        let all = StudentService::list(&pool).await.unwrap();
        assert_eq!(all[0].subjects, vec!["Math", "Physics"]);
        assert_eq!(all[1].subjects, vec!["Art"]);

        let one = StudentService::read(&pool, b.id).await.unwrap().unwrap();
        assert_eq!(one.subjects, vec!["Art"]);
    }

    #[tokio::test]
    async fn update_missing_returns_none() {
        let pool = memory_pool().await.unwrap();
        let updated = StudentService::update(&pool, 99, &student("X", "x@x.com")).await.unwrap();
        assert!(updated.is_none());
        assert!(StudentService::read(&pool, 99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_is_blocked_while_subjects_exist() {
        let pool = memory_pool().await.unwrap();
        let a = StudentService::create(&pool, &student("A", "a@x.com")).await.unwrap();
        sqlx::query("INSERT INTO subjects (name, student_id) VALUES ('Math', ?)")
            .bind(a.id)
            .execute(&pool)
            .await
            .unwrap();

        let err = StudentService::delete(&pool, a.id).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert!(StudentService::read(&pool, a.id).await.unwrap().is_some());

        sqlx::query("DELETE FROM subjects").execute(&pool).await.unwrap();
        assert!(StudentService::delete(&pool, a.id).await.unwrap());
        assert!(!StudentService::delete(&pool, a.id).await.unwrap());
    }
}
