// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTML recommendation form.

use crate::services::{page, recommend};
use crate::types::RecommendForm;
use crate::AppState;
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::Html,
};
use planta_recommender::FormInput;

/// GET / - Form with default answers.
pub async fn show() -> Html<String> {
    Html(page::form_page(&FormInput::default()))
}

/// POST /recommend - Form submission; the result is rendered below the form.
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<RecommendForm>,
) -> (StatusCode, Html<String>) {
    let input = FormInput::from(form);
    match recommend(&state, input.clone()).await {
        Ok(response) => (
            StatusCode::OK,
            Html(page::result_page(&input, Ok(&response))),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "Recommendation failed");
            (
                err.status().0,
                Html(page::result_page(&input, Err(&err))),
            )
        }
    }
}
