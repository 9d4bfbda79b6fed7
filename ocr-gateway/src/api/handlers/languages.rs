use axum::Json;

use crate::api::dto::LanguagesResponse;

/// `GET /languages/`
#[utoipa::path(
    get,
    path = "/languages/",
    tag = "languages",
    responses(
        (status = 200, description = "Supported display names and engine codes", body = LanguagesResponse),
    )
)]
pub async fn list_languages() -> Json<LanguagesResponse> {
    Json(LanguagesResponse::default())
}
