//! Page, search and add handlers

use crate::error::ServerError;
use crate::templates::IndexPage;
use crate::AppState;
use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;
use tracing::{debug, info};

use super::with_store;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ServerError> {
    let html = state.templates.render_index(&IndexPage::default())?;
    Ok(Html(html))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    acronym: String,
}

pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Html<String>, ServerError> {
    let acronym = query.acronym;
    let key = acronym.clone();
    let result = with_store(&state, move |store| store.lookup(&key)).await?;

    debug!("Search for {:?}: found={}", acronym, result.is_some());

    let html = state.templates.render_index(&IndexPage {
        acronym: Some(acronym),
        result,
    })?;
    Ok(Html(html))
}

#[derive(Debug, Deserialize)]
pub struct AddAcronymForm {
    #[serde(rename = "newAcronym", default)]
    new_acronym: String,
    #[serde(default)]
    definition: String,
}

pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddAcronymForm>,
) -> Result<Redirect, ServerError> {
    let acronym = form.new_acronym.clone();
    let previous = with_store(&state, move |store| {
        store.upsert(&form.new_acronym, &form.definition)
    })
    .await?;

    if previous.is_some() {
        info!("Updated acronym: {}", acronym);
    } else {
        info!("Added acronym: {}", acronym);
    }

    Ok(Redirect::to("/"))
}
