use diesel::SqliteConnection;

use db::models::{Choice, Question, QuestionDetails};
use errors::Error;

#[derive(Debug, PartialEq)]
pub enum VoteOutcome {
    Recorded,
    /// Nothing usable was submitted. Carries the question so the detail view
    /// can be shown again.
    NoChoice(QuestionDetails),
}

/// Records one vote for `choice` on the question. Visibility is not checked
/// here, only that the question exists. A missing, malformed or foreign choice
/// is not an error but a `NoChoice` outcome, and leaves every counter alone.
pub fn cast_vote(
    conn: &mut SqliteConnection,
    question_id: i32,
    choice: Option<&str>,
) -> Result<VoteOutcome, Error> {
    let question = Question::find_by_id(conn, question_id)?;

    let choice_id = choice.and_then(|value| value.trim().parse::<i32>().ok());
    let updated = match choice_id {
        Some(choice_id) => Choice::add_vote(conn, question.id, choice_id)?,
        None => None,
    };

    if let Some(updated) = updated {
        debug!(
            "Recorded vote on question {} for choice {}, now at {}",
            question.id, updated.id, updated.votes
        );
        return Ok(VoteOutcome::Recorded);
    }

    debug!("Rejected choice {:?} on question {}", choice, question.id);
    let choices = question.choices(conn)?;

    Ok(VoteOutcome::NoChoice(QuestionDetails { question, choices }))
}
