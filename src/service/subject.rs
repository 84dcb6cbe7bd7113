//! Subject persistence. The owning student is enforced by the foreign key, not a prior lookup.

use crate::error::AppError;
use crate::model::{Created, NewSubject, SubjectRow, SubjectView};
use sqlx::SqlitePool;

const SELECT_JOINED: &str = "SELECT s.id, s.name, s.student_id, st.name AS student_name \
     FROM subjects s JOIN students st ON st.id = s.student_id";

pub struct SubjectService;

impl SubjectService {
    /// All subjects in id order, each with its owning student's name.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<SubjectView>, AppError> {
        tracing::debug!("list subjects");
        let sql = format!("{} ORDER BY s.id", SELECT_JOINED);
        let rows = sqlx::query_as::<_, SubjectRow>(&sql).fetch_all(pool).await?;
        Ok(rows.into_iter().map(SubjectView::from).collect())
    }

    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<SubjectView>, AppError> {
        tracing::debug!(id, "read subject");
        let sql = format!("{} WHERE s.id = ?", SELECT_JOINED);
        let row = sqlx::query_as::<_, SubjectRow>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(SubjectView::from))
    }

    pub async fn create(pool: &SqlitePool, subject: &NewSubject) -> Result<Created, AppError> {
        let result = sqlx::query("INSERT INTO subjects (name, student_id) VALUES (?, ?)")
            .bind(&subject.name)
            .bind(subject.student_id)
            .execute(pool)
            .await
            .map_err(|e| unknown_student(e, subject.student_id))?;
        let id = result.last_insert_rowid();
        tracing::info!(id, student_id = subject.student_id, "created subject");
        Ok(Created {
            id,
            name: subject.name.clone(),
        })
    }

    /// Overwrite name and owner. `None` when no subject has `id`.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        subject: &NewSubject,
    ) -> Result<Option<Created>, AppError> {
        let result = sqlx::query("UPDATE subjects SET name = ?, student_id = ? WHERE id = ?")
            .bind(&subject.name)
            .bind(subject.student_id)
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| unknown_student(e, subject.student_id))?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }
        tracing::info!(id, student_id = subject.student_id, "updated subject");
        Ok(Some(Created {
            id,
            name: subject.name.clone(),
        }))
    }

    /// Delete by id. Returns `false` when absent.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM subjects WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(id, "deleted subject");
        }
        Ok(deleted)
    }
}

fn unknown_student(e: sqlx::Error, student_id: i64) -> AppError {
    match &e {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => AppError::Validation(format!(
            "student_id {} does not reference an existing student",
            student_id
        )),
        _ => AppError::Db(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewStudent;
    use crate::service::StudentService;
    use crate::store::memory_pool;

    async fn seed_student(pool: &SqlitePool, name: &str) -> i64 {
        StudentService::create(
            pool,
            &NewStudent {
                name: name.into(),
                email: format!("{}@x.com", name.to_lowercase()),
            },
        )
        .await
        .unwrap()
        .id
    }

    fn subject(name: &str, student_id: i64) -> NewSubject {
        NewSubject {
            name: name.into(),
            student_id,
        }
    }

    #[tokio::test]
    async fn list_shows_owner_name() {
        let pool = memory_pool().await.unwrap();
        let ada = seed_student(&pool, "Ada").await;
        let created = SubjectService::create(&pool, &subject("Math", ada)).await.unwrap();

        let all = SubjectService::list(&pool).await.unwrap();
        assert_eq!(
            all,
            vec![SubjectView {
                id: created.id,
                name: "Math".into(),
                student: "Ada".into(),
            }]
        );
    }

    #[tokio::test]
    async fn create_with_unknown_student_is_validation_error() {
        let pool = memory_pool().await.unwrap();
        let err = SubjectService::create(&pool, &subject("Math", 404)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "got {err:?}");
        assert!(SubjectService::list(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_moves_subject_to_other_student() {
        let pool = memory_pool().await.unwrap();
        let ada = seed_student(&pool, "Ada").await;
        let alan = seed_student(&pool, "Alan").await;
        let created = SubjectService::create(&pool, &subject("Math", ada)).await.unwrap();

        let updated = SubjectService::update(&pool, created.id, &subject("Logic", alan))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Logic");
        let view = SubjectService::read(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(view.student, "Alan");

        let err = SubjectService::update(&pool, created.id, &subject("Logic", 999))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        let missing = SubjectService::update(&pool, 999, &subject("Logic", ada)).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn delete_reports_absence() {
        let pool = memory_pool().await.unwrap();
        let ada = seed_student(&pool, "Ada").await;
        let created = SubjectService::create(&pool, &subject("Math", ada)).await.unwrap();
        assert!(SubjectService::delete(&pool, created.id).await.unwrap());
        assert!(!SubjectService::delete(&pool, created.id).await.unwrap());
        assert!(SubjectService::read(&pool, created.id).await.unwrap().is_none());
    }
}
