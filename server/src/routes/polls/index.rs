use actix_web::web::{block, Data, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{get_conn, models::Question, DbPool};
use errors::Error;

pub const LATEST_QUESTION_LIMIT: usize = 5;
pub const NO_POLLS_MESSAGE: &str = "No polls are available.";

#[derive(Debug, Deserialize, Serialize)]
pub struct IndexResponse {
    pub latest_question_list: Vec<Question>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub async fn index(pool: Data<DbPool>) -> Result<Json<IndexResponse>, Error> {
    let now = Utc::now();

    let latest_question_list = block(move || -> Result<Vec<Question>, Error> {
        let mut conn = get_conn(&pool)?;
        Question::latest_visible(&mut conn, now, LATEST_QUESTION_LIMIT)
    })
    .await??;

    let message = if latest_question_list.is_empty() {
        Some(NO_POLLS_MESSAGE.to_string())
    } else {
        None
    };

    Ok(Json(IndexResponse {
        latest_question_list,
        message,
    }))
}
