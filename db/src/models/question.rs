use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use diesel::dsl::count_star;
use diesel::{
    self, BelongingToDsl, ExpressionMethods, Identifiable, Insertable, OptionalExtension,
    QueryDsl, Queryable, RunQueryDsl, Selectable, SelectableHelper, SqliteConnection,
};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::Choice;
use crate::schema::{choices, questions};
use crate::visibility::is_visible;

#[derive(Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Selectable, Serialize)]
#[diesel(table_name = questions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Question {
    pub id: i32,
    pub question_text: String,
    pub pub_date: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = questions)]
struct NewQuestion<'a> {
    question_text: &'a str,
    pub_date: NaiveDateTime,
}

/// A question together with its choices, ordered by choice id.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct QuestionDetails {
    pub question: Question,
    pub choices: Vec<Choice>,
}

fn not_found(question_id: i32) -> Error {
    Error::NotFound(format!("Question {} not found", question_id))
}

impl Question {
    pub fn create(
        conn: &mut SqliteConnection,
        question_text: &str,
        pub_date: DateTime<Utc>,
    ) -> Result<Question, Error> {
        let question = diesel::insert_into(questions::table)
            .values(NewQuestion {
                question_text,
                pub_date: pub_date.naive_utc(),
            })
            .returning(Question::as_returning())
            .get_result::<Question>(conn)?;

        Ok(question)
    }

    pub fn published_at(&self) -> DateTime<Utc> {
        self.pub_date.and_utc()
    }

    /// Published within the last day. Questions scheduled for the future are
    /// not recent.
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        let published = self.published_at();
        now - Duration::days(1) <= published && published <= now
    }

    /// Looks a question up regardless of visibility.
    pub fn find_by_id(conn: &mut SqliteConnection, question_id: i32) -> Result<Question, Error> {
        questions::table
            .find(question_id)
            .select(Question::as_select())
            .first::<Question>(conn)
            .optional()?
            .ok_or_else(|| not_found(question_id))
    }

    pub fn choices(&self, conn: &mut SqliteConnection) -> Result<Vec<Choice>, Error> {
        let results = Choice::belonging_to(self)
            .order(choices::id.asc())
            .select(Choice::as_select())
            .load::<Choice>(conn)?;

        Ok(results)
    }

    /// The visible question with its choices. Unknown ids and hidden
    /// questions produce the same NotFound.
    pub fn find_visible(
        conn: &mut SqliteConnection,
        question_id: i32,
        now: DateTime<Utc>,
    ) -> Result<QuestionDetails, Error> {
        let question = Question::find_by_id(conn, question_id)?;
        let choices = question.choices(conn)?;

        if !is_visible(question.published_at(), choices.len(), now) {
            return Err(not_found(question_id));
        }

        Ok(QuestionDetails { question, choices })
    }

    /// Most recently published visible questions, newest first with ties on
    /// `pub_date` broken by the higher id. Timestamps are stored as
    /// `%F %T%.f` text, which compares in time order.
    pub fn latest_visible(
        conn: &mut SqliteConnection,
        now: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<Question>, Error> {
        let candidates = questions::table
            .filter(questions::pub_date.le(now.naive_utc()))
            .filter(questions::id.eq_any(choices::table.select(choices::question_id)))
            .order((questions::pub_date.desc(), questions::id.desc()))
            .limit(limit as i64)
            .select(Question::as_select())
            .load::<Question>(conn)?;

        let candidate_ids: Vec<i32> = candidates.iter().map(|question| question.id).collect();
        let choice_counts: HashMap<i32, i64> = choices::table
            .filter(choices::question_id.eq_any(candidate_ids))
            .group_by(choices::question_id)
            .select((choices::question_id, count_star()))
            .load::<(i32, i64)>(conn)?
            .into_iter()
            .collect();

        let visible = candidates
            .into_iter()
            .filter(|question| {
                let choice_count = choice_counts.get(&question.id).copied().unwrap_or(0);
                is_visible(question.published_at(), choice_count as usize, now)
            })
            .collect();

        Ok(visible)
    }
}
