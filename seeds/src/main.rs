#[macro_use]
extern crate log;

use std::env;

use chrono::{Duration, Utc};
use dotenv::dotenv;
use env_logger::Env;

use db::models::{Choice, Question};
use db::{get_conn, new_pool, run_migrations};
use errors::Error;

// (question, days from now, choices)
const POLLS: &[(&str, i64, &[&str])] = &[
    ("What's new?", -1, &["Not much", "The sky", "Just hacking again"]),
    ("Favourite season?", -3, &["Spring", "Summer", "Autumn", "Winter"]),
    ("Tea or coffee?", -10, &["Tea", "Coffee", "Neither"]),
    ("Where should the next meetup be?", 30, &["Library", "Park"]),
    ("Poll with nothing to pick?", -2, &[]),
];

fn main() -> Result<(), Error> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "polls.sqlite3".to_string());
    let pool = new_pool(&database_url, 1)?;
    let mut conn = get_conn(&pool)?;
    run_migrations(&mut conn)?;

    let now = Utc::now();
    for (question_text, days, choices) in POLLS {
        let question = Question::create(&mut conn, question_text, now + Duration::days(*days))?;
        for choice_text in choices.iter() {
            Choice::create(&mut conn, question.id, choice_text)?;
        }
        info!(
            "Seeded question {} \"{}\" with {} choices",
            question.id,
            question.question_text,
            choices.len()
        );
    }

    Ok(())
}
