//! Route handlers.
//!
//! Each handler does its storage work in one session through
//! [`AppState::with_tasks`], then renders a page or redirects home.

use super::error::AppError;
use super::AppState;
use crate::libs::messages::Message;
use crate::libs::task::{TaskError, TaskForm};
use crate::libs::view::View;
use crate::msg_debug;
use axum::extract::rejection::{FormRejection, PathRejection};
use axum::extract::{Form, Path, State};
use axum::http::{header, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};

type Page = Result<Html<String>, AppError>;

/// `GET /`
pub async fn index(State(state): State<AppState>) -> Page {
    let tasks = state.with_tasks(|tasks| tasks.list()).await?;
    Ok(Html(View::index(&tasks, &TaskForm::default(), None)?))
}

/// `POST /`: stores the task and answers with the refreshed list.
pub async fn create(State(state): State<AppState>, form: Result<Form<TaskForm>, FormRejection>) -> Result<Response, AppError> {
    let form = task_form(form);
    let submitted = form.clone();
    let (created, tasks) = state
        .with_tasks(move |tasks| {
            let created = tasks.create(&form.title, &form.desc);
            Ok((created, tasks.list()?))
        })
        .await?;

    match created {
        Ok(_) => Ok(Html(View::index(&tasks, &TaskForm::default(), None)?).into_response()),
        Err(TaskError::Validation(field)) => {
            let error = Message::TaskFieldRequired(field.to_string());
            let page = View::index(&tasks, &submitted, Some(&error))?;
            Ok((StatusCode::BAD_REQUEST, Html(page)).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// `GET /about`
pub async fn about() -> Page {
    Ok(Html(View::about()?))
}

/// `GET /howto`
pub async fn howto() -> Page {
    Ok(Html(View::howto()?))
}

/// `GET /update/{id}`: edit form pre-filled with the stored values.
pub async fn edit(State(state): State<AppState>, uri: Uri, path: Result<Path<i64>, PathRejection>) -> Page {
    let id = task_id(path, &uri)?;
    let task = state.with_tasks(move |tasks| tasks.get(id)).await?;
    Ok(Html(View::update(task.id, &TaskForm::from(&task), None)?))
}

/// `POST /update/{id}`
pub async fn update(
    State(state): State<AppState>,
    uri: Uri,
    path: Result<Path<i64>, PathRejection>,
    form: Result<Form<TaskForm>, FormRejection>,
) -> Result<Response, AppError> {
    let id = task_id(path, &uri)?;
    let form = task_form(form);
    let submitted = form.clone();
    let updated = state.with_tasks(move |tasks| Ok(tasks.update(id, &form.title, &form.desc))).await?;

    match updated {
        Ok(_) => Ok(redirect_home()),
        Err(TaskError::Validation(field)) => {
            let error = Message::TaskFieldRequired(field.to_string());
            let page = View::update(id, &submitted, Some(&error))?;
            Ok((StatusCode::BAD_REQUEST, Html(page)).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// `GET /delete/{id}`
pub async fn delete(State(state): State<AppState>, uri: Uri, path: Result<Path<i64>, PathRejection>) -> Result<Response, AppError> {
    let id = task_id(path, &uri)?;
    state.with_tasks(move |tasks| tasks.delete(id)).await?;
    Ok(redirect_home())
}

/// Fallback for every unmatched path.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::PageNotFound(uri.path().to_string())
}

/// A non-numeric id names no task, so it is answered like an unknown page.
fn task_id(path: Result<Path<i64>, PathRejection>, uri: &Uri) -> Result<i64, AppError> {
    path.map(|Path(id)| id).map_err(|_| AppError::PageNotFound(uri.path().to_string()))
}

/// An unreadable body carries no field values, so it is handled like an
/// empty submission. The repository then reports an unknown id first and
/// missing fields second.
fn task_form(form: Result<Form<TaskForm>, FormRejection>) -> TaskForm {
    match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            msg_debug!(Message::FormRejected(rejection.body_text()));
            TaskForm::default()
        }
    }
}

fn redirect_home() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}
