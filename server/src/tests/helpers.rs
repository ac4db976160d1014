#[cfg(test)]
pub mod tests {
    use actix_web::{http::header, test, web::Data, App};
    use chrono::{Duration, Utc};
    use diesel::{QueryDsl, RunQueryDsl, SqliteConnection};
    use serde::de::DeserializeOwned;

    use db::models::{Choice, Question};
    use db::schema::choices;
    use db::{get_conn, DbPool};

    use crate::routes::routes;

    pub struct FormResponse {
        pub status: u16,
        pub location: Option<String>,
        pub body: Vec<u8>,
    }

    impl FormResponse {
        pub fn json<R: DeserializeOwned>(&self) -> R {
            parse_json(&self.body, self.status)
        }
    }

    fn parse_json<R: DeserializeOwned>(body: &[u8], status: u16) -> R {
        serde_json::from_slice(body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                String::from_utf8(body.to_vec())
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        })
    }

    /// Runs `f` with a connection that is returned to the pool before any
    /// request is served. Test pools hold a single connection.
    pub fn with_conn<T>(pool: &DbPool, f: impl FnOnce(&mut SqliteConnection) -> T) -> T {
        let mut conn = get_conn(pool).unwrap();
        f(&mut conn)
    }

    /// Creates a question published `days` from now, negative for the past.
    pub fn create_question(conn: &mut SqliteConnection, question_text: &str, days: i64) -> Question {
        Question::create(conn, question_text, Utc::now() + Duration::days(days)).unwrap()
    }

    pub fn create_choice(conn: &mut SqliteConnection, question: &Question) -> Choice {
        Choice::create(conn, question.id, "Default Choice").unwrap()
    }

    pub fn choice_votes(conn: &mut SqliteConnection, choice_id: i32) -> i32 {
        choices::table
            .find(choice_id)
            .select(choices::votes)
            .first::<i32>(conn)
            .unwrap()
    }

    /// Helper for HTTP GET integration tests
    pub async fn test_get<R>(pool: &DbPool, route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(pool.clone()))
                .configure(routes),
        )
        .await;
        let req = test::TestRequest::get().uri(route).to_request();

        let res = test::call_service(&app, req).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;

        (status, parse_json(&body, status))
    }

    /// Helper for HTTP POST integration tests with an urlencoded body
    pub async fn test_post_form(pool: &DbPool, route: &str, form: &str) -> FormResponse {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(pool.clone()))
                .configure(routes),
        )
        .await;
        let req = test::TestRequest::post()
            .uri(route)
            .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
            .set_payload(form.to_string())
            .to_request();

        let res = test::call_service(&app, req).await;

        let status = res.status().as_u16();
        let location = res
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        let body = test::read_body(res).await.to_vec();

        FormResponse {
            status,
            location,
            body,
        }
    }
}
