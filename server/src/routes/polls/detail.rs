use actix_web::web::{Data, Json, Path};
use serde::{Deserialize, Serialize};

use db::{
    models::{Choice, Question, QuestionDetails},
    DbPool,
};
use errors::Error;

use crate::handlers::get_question_details;

#[derive(Debug, Deserialize, Serialize)]
pub struct DetailResponse {
    pub question: Question,
    pub choices: Vec<Choice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl From<QuestionDetails> for DetailResponse {
    fn from(QuestionDetails { question, choices }: QuestionDetails) -> Self {
        DetailResponse {
            question,
            choices,
            error_message: None,
        }
    }
}

pub async fn detail(
    pool: Data<DbPool>,
    question_id: Path<i32>,
) -> Result<Json<DetailResponse>, Error> {
    let details = get_question_details(pool, question_id.into_inner()).await?;

    Ok(Json(details.into()))
}
