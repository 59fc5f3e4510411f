//! src/routes/waitlist.rs
use crate::waitlist::{self, SubmissionResult, WaitlistClient};
use actix_web::{web, HttpResponse};
use uuid::Uuid;

#[derive(serde::Deserialize)]
pub struct SignupForm {
    pub email: String,
    #[serde(default = "default_source")]
    pub source: String,
}

fn default_source() -> String {
    "website".to_string()
}

#[tracing::instrument(
    name = "Handling a waitlist signup",
    skip(form, client),
    fields(
        request_id = %Uuid::new_v4(),
        signup_email = %form.email,
        signup_source = %form.source
    )
)]
pub async fn join_waitlist(
    form: web::Form<SignupForm>,
    client: web::Data<WaitlistClient>,
) -> HttpResponse {
    let result = client.submit(&form.email, &form.source).await;
    respond(result)
}

/// The body is always the [`SubmissionResult`]; the status code classifies it
/// for callers that only look at the header. A remote-side rejection in
/// readable mode carries no error tag and was delivered, so it stays a 200.
fn respond(result: SubmissionResult) -> HttpResponse {
    if result.success {
        return HttpResponse::Ok().json(result);
    }
    match result.error.as_deref() {
        Some(waitlist::INVALID_EMAIL) => HttpResponse::BadRequest().json(result),
        Some(waitlist::CONFIG_ERROR) => HttpResponse::InternalServerError().json(result),
        Some(_) => HttpResponse::BadGateway().json(result),
        None => HttpResponse::Ok().json(result),
    }
}
