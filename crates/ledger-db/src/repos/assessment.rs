//! Assessment questions and answers.
//!
//! Both tables are keyed by `(entry_id, question_number)`. Writes upsert all
//! four rows in one statement so a set is never partially stored.

use chrono::Utc;

use ledger_core::entities::{AssessmentAnswer, AssessmentQuestion};

use crate::LedgerDb;
use crate::error::DatabaseError;
use crate::helpers::{get_question_number, parse_datetime, timestamp};

fn row_to_question(row: &libsql::Row) -> Result<AssessmentQuestion, DatabaseError> {
    Ok(AssessmentQuestion {
        entry_id: row.get::<String>(0)?,
        question_number: get_question_number(row, 1)?,
        question_text: row.get::<String>(2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

fn row_to_answer(row: &libsql::Row) -> Result<AssessmentAnswer, DatabaseError> {
    Ok(AssessmentAnswer {
        entry_id: row.get::<String>(0)?,
        question_number: get_question_number(row, 1)?,
        answer_text: row.get::<String>(2)?,
        updated_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl LedgerDb {
    /// Store the four generated questions, replacing any earlier set.
    pub async fn upsert_questions(
        &self,
        entry_id: &str,
        questions: &[String; 4],
    ) -> Result<Vec<AssessmentQuestion>, DatabaseError> {
        let [q1, q2, q3, q4] = questions;
        self.conn
            .execute(
                "INSERT INTO assessment_questions (entry_id, question_number, question_text, created_at)
                 VALUES (?1, 1, ?2, ?6), (?1, 2, ?3, ?6), (?1, 3, ?4, ?6), (?1, 4, ?5, ?6)
                 ON CONFLICT(entry_id, question_number)
                 DO UPDATE SET question_text = excluded.question_text, created_at = excluded.created_at",
                libsql::params![
                    entry_id,
                    q1.as_str(),
                    q2.as_str(),
                    q3.as_str(),
                    q4.as_str(),
                    timestamp(Utc::now())
                ],
            )
            .await
            .map_err(DatabaseError::from_write)?;
        self.list_questions(entry_id).await
    }

    /// Questions for an entry ordered by number.
    pub async fn list_questions(
        &self,
        entry_id: &str,
    ) -> Result<Vec<AssessmentQuestion>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                "SELECT entry_id, question_number, question_text, created_at
                 FROM assessment_questions WHERE entry_id = ?1 ORDER BY question_number",
                [entry_id],
            )
            .await?;
        let mut questions = Vec::new();
        while let Some(row) = rows.next().await? {
            questions.push(row_to_question(&row)?);
        }
        Ok(questions)
    }

    /// Store the four answers, overwriting earlier submissions.
    pub async fn upsert_answers(
        &self,
        entry_id: &str,
        answers: &[String; 4],
    ) -> Result<(), DatabaseError> {
        let [a1, a2, a3, a4] = answers;
        self.conn
            .execute(
                "INSERT INTO assessment_answers (entry_id, question_number, answer_text, updated_at)
                 VALUES (?1, 1, ?2, ?6), (?1, 2, ?3, ?6), (?1, 3, ?4, ?6), (?1, 4, ?5, ?6)
                 ON CONFLICT(entry_id, question_number)
                 DO UPDATE SET answer_text = excluded.answer_text, updated_at = excluded.updated_at",
                libsql::params![
                    entry_id,
                    a1.as_str(),
                    a2.as_str(),
                    a3.as_str(),
                    a4.as_str(),
                    timestamp(Utc::now())
                ],
            )
            .await
            .map_err(DatabaseError::from_write)?;
        Ok(())
    }

    pub async fn list_answers(&self, entry_id: &str) -> Result<Vec<AssessmentAnswer>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                "SELECT entry_id, question_number, answer_text, updated_at
                 FROM assessment_answers WHERE entry_id = ?1 ORDER BY question_number",
                [entry_id],
            )
            .await?;
        let mut answers = Vec::new();
        while let Some(row) = rows.next().await? {
            answers.push(row_to_answer(&row)?);
        }
        Ok(answers)
    }
}
