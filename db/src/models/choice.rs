use diesel::{
    self, Associations, ExpressionMethods, Identifiable, Insertable, OptionalExtension,
    QueryDsl, Queryable, RunQueryDsl, Selectable, SelectableHelper, SqliteConnection,
};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::Question;
use crate::schema::choices::{self, table};

#[derive(
    Associations, Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Selectable, Serialize,
)]
#[diesel(belongs_to(Question))]
#[diesel(table_name = choices)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Choice {
    pub id: i32,
    pub question_id: i32,
    pub choice_text: String,
    pub votes: i32,
}

#[derive(Insertable)]
#[diesel(table_name = choices)]
struct NewChoice<'a> {
    question_id: i32,
    choice_text: &'a str,
}

impl Choice {
    pub fn create(
        conn: &mut SqliteConnection,
        question_id: i32,
        choice_text: &str,
    ) -> Result<Choice, Error> {
        let choice = diesel::insert_into(table)
            .values(NewChoice {
                question_id,
                choice_text,
            })
            .returning(Choice::as_returning())
            .get_result::<Choice>(conn)?;

        Ok(choice)
    }

    /// Adds one vote to the choice, provided it belongs to `question_id`.
    /// The increment runs as a single `votes = votes + 1` statement so
    /// concurrent voters never overwrite each other. Returns the updated
    /// choice, or `None` when no such choice exists on the question.
    pub fn add_vote(
        conn: &mut SqliteConnection,
        question_id: i32,
        choice_id: i32,
    ) -> Result<Option<Choice>, Error> {
        use choices::dsl::{choices as choices_table, id, question_id as question_id_field, votes};

        let choice = diesel::update(
            choices_table
                .filter(id.eq(choice_id))
                .filter(question_id_field.eq(question_id)),
        )
        .set(votes.eq(votes + 1))
        .returning(Choice::as_returning())
        .get_result::<Choice>(conn)
        .optional()?;

        Ok(choice)
    }
}
