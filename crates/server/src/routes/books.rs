use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;
use service::books::{BookForm, RatingForm};

use crate::errors::AppError;
use crate::state::ServerState;

#[derive(Debug, Deserialize)]
pub struct BookId {
    pub id: i32,
}

/// Home page: every book, oldest first.
pub async fn home(State(state): State<ServerState>) -> Result<Html<String>, AppError> {
    let books = state.books.list().await?;
    Ok(Html(state.views.list(&books)?))
}

pub async fn add_form(State(state): State<ServerState>) -> Result<Html<String>, AppError> {
    Ok(Html(state.views.add_form()?))
}

pub async fn add(State(state): State<ServerState>, Form(form): Form<BookForm>) -> Result<Redirect, AppError> {
    state.books.create(form).await?;
    Ok(Redirect::to("/"))
}

/// Rating form for one book; 404 when the id is unknown.
pub async fn edit_form(
    State(state): State<ServerState>,
    Query(q): Query<BookId>,
) -> Result<Html<String>, AppError> {
    let book = state.books.get(q.id).await?;
    Ok(Html(state.views.edit_form(&book)?))
}

/// Applies a new rating. A body that fails to parse is treated as empty so an
/// unknown id still ends in 404.
pub async fn edit(
    State(state): State<ServerState>,
    Query(q): Query<BookId>,
    form: Option<Form<RatingForm>>,
) -> Result<Redirect, AppError> {
    let form = form.map(|Form(f)| f).unwrap_or_default();
    state.books.update_rating(q.id, &form).await?;
    Ok(Redirect::to("/"))
}

pub async fn delete(State(state): State<ServerState>, Query(q): Query<BookId>) -> Result<Redirect, AppError> {
    state.books.delete(q.id).await?;
    Ok(Redirect::to("/"))
}
