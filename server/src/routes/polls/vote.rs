use actix_web::{
    http::header,
    web::{block, Data, Form, Path},
    HttpResponse,
};
use serde::{Deserialize, Serialize};

use db::{get_conn, DbPool};
use errors::Error;

use crate::handlers::{cast_vote, VoteOutcome};
use crate::routes::polls::DetailResponse;

pub const NO_CHOICE_MESSAGE: &str = "You didn't select a choice.";

#[derive(Debug, Deserialize, Serialize)]
pub struct VoteForm {
    pub choice: Option<String>,
}

pub fn results_path(question_id: i32) -> String {
    format!("/polls/{}/results/", question_id)
}

/// A body that cannot be read as a form counts as no choice at all.
pub async fn vote(
    pool: Data<DbPool>,
    question_id: Path<i32>,
    form: Option<Form<VoteForm>>,
) -> Result<HttpResponse, Error> {
    let question_id = question_id.into_inner();
    let choice = form.and_then(|form| form.into_inner().choice);

    let outcome = block(move || -> Result<VoteOutcome, Error> {
        let mut conn = get_conn(&pool)?;
        cast_vote(&mut conn, question_id, choice.as_deref())
    })
    .await??;

    match outcome {
        VoteOutcome::Recorded => Ok(HttpResponse::Found()
            .insert_header((header::LOCATION, results_path(question_id)))
            .finish()),
        VoteOutcome::NoChoice(details) => {
            let mut response = DetailResponse::from(details);
            response.error_message = Some(NO_CHOICE_MESSAGE.to_string());
            Ok(HttpResponse::Ok().json(response))
        }
    }
}
