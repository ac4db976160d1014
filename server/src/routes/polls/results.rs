use actix_web::web::{Data, Json, Path};

use db::{models::QuestionDetails, DbPool};
use errors::Error;

use crate::handlers::get_question_details;

pub async fn results(
    pool: Data<DbPool>,
    question_id: Path<i32>,
) -> Result<Json<QuestionDetails>, Error> {
    let details = get_question_details(pool, question_id.into_inner()).await?;

    Ok(Json(details))
}

#[cfg(test)]
mod tests {
    use db::{
        models::{Choice, QuestionDetails},
        new_memory_pool,
    };
    use errors::ErrorResponse;

    use crate::tests::helpers::tests::{create_choice, create_question, test_get, with_conn};

    #[actix_rt::test]
    async fn test_questions_without_choices() {
        let pool = new_memory_pool().unwrap();
        let question = with_conn(&pool, |conn| {
            create_question(conn, "Question without choices.", -30)
        });

        let res: (u16, ErrorResponse) =
            test_get(&pool, &format!("/polls/{}/results/", question.id)).await;
        assert_eq!(res.0, 404);
    }

    #[actix_rt::test]
    async fn test_question_with_choices() {
        let pool = new_memory_pool().unwrap();
        let (question, choice) = with_conn(&pool, |conn| {
            let question = create_question(conn, "Question with choices", -30);
            let choice = create_choice(conn, &question);
            (question, choice)
        });

        let res: (u16, QuestionDetails) =
            test_get(&pool, &format!("/polls/{}/results/", question.id)).await;
        assert_eq!(res.0, 200);
        assert_eq!(res.1.question.question_text, "Question with choices");
        assert_eq!(res.1.choices, vec![choice]);
    }

    #[actix_rt::test]
    async fn test_future_question() {
        let pool = new_memory_pool().unwrap();
        let question = with_conn(&pool, |conn| {
            let question = create_question(conn, "Future Question.", 30);
            create_choice(conn, &question);
            question
        });

        let res: (u16, ErrorResponse) =
            test_get(&pool, &format!("/polls/{}/results/", question.id)).await;
        assert_eq!(res.0, 404);
    }

    #[actix_rt::test]
    async fn test_results_show_vote_counts() {
        let pool = new_memory_pool().unwrap();
        let (question, choice) = with_conn(&pool, |conn| {
            let question = create_question(conn, "Past Question.", -30);
            let choice = create_choice(conn, &question);
            Choice::add_vote(conn, question.id, choice.id).unwrap();
            Choice::add_vote(conn, question.id, choice.id).unwrap();
            (question, choice)
        });

        let res: (u16, QuestionDetails) =
            test_get(&pool, &format!("/polls/{}/results/", question.id)).await;
        assert_eq!(res.0, 200);
        assert_eq!(res.1.choices[0].id, choice.id);
        assert_eq!(res.1.choices[0].votes, 2);
    }
}
