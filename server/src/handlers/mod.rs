mod cast_vote;
mod get_question_details;

pub use self::cast_vote::*;
pub use self::get_question_details::*;
