use actix_web::web::{block, Data};
use chrono::Utc;

use db::{get_conn, models::Question, models::QuestionDetails, DbPool};
use errors::Error;

/// Loads a visible question and its choices off the async executor. Shared by
/// the detail and results views so both apply the same visibility rule.
pub async fn get_question_details(
    pool: Data<DbPool>,
    question_id: i32,
) -> Result<QuestionDetails, Error> {
    let now = Utc::now();

    let details = block(move || -> Result<QuestionDetails, Error> {
        let mut conn = get_conn(&pool)?;
        Question::find_visible(&mut conn, question_id, now)
    })
    .await??;

    Ok(details)
}
