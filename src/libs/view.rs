use super::messages::Message;
use super::task::{Task, TaskForm};
use crate::msg_error;
use minijinja::{context, Environment};
use serde::Serialize;
use std::sync::OnceLock;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Templates compiled into the binary, registered under their file names.
const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    ("index.html", include_str!("../../templates/index.html")),
    ("update.html", include_str!("../../templates/update.html")),
    ("about.html", include_str!("../../templates/about.html")),
    ("howto.html", include_str!("../../templates/howto.html")),
    ("error.html", include_str!("../../templates/error.html")),
];

static ENVIRONMENT: OnceLock<Environment<'static>> = OnceLock::new();

fn environment() -> &'static Environment<'static> {
    ENVIRONMENT.get_or_init(|| {
        let mut env = Environment::new();
        env.add_global("app_name", APP_METADATA_NAME);
        env.add_global("app_version", APP_METADATA_VERSION);
        for &(name, source) in TEMPLATES {
            if let Err(e) = env.add_template(name, source) {
                msg_error!(Message::TemplateRegistrationFailed(name.to_string(), e.to_string()));
            }
        }
        env
    })
}

fn render<S: Serialize>(name: &str, ctx: S) -> Result<String, minijinja::Error> {
    environment().get_template(name)?.render(ctx)
}

/// One line of the task table.
#[derive(Serialize)]
struct TaskRow<'a> {
    id: i64,
    title: &'a str,
    description: &'a str,
    created_at: String,
}

impl<'a> From<&'a Task> for TaskRow<'a> {
    fn from(task: &'a Task) -> Self {
        TaskRow {
            id: task.id,
            title: &task.title,
            description: &task.description,
            created_at: task.created_at.format(CREATED_AT_FORMAT).to_string(),
        }
    }
}

/// HTML pages of the application.
///
/// Every page is a pure function of its arguments and the embedded
/// templates. User-provided text is HTML-escaped by the template engine.
pub struct View {}

impl View {
    /// Task list with the creation form on top.
    ///
    /// `error` is shown above the form, which keeps the values in `form`.
    pub fn index(tasks: &[Task], form: &TaskForm, error: Option<&Message>) -> Result<String, minijinja::Error> {
        let rows: Vec<TaskRow> = tasks.iter().map(TaskRow::from).collect();
        render(
            "index.html",
            context! {
                tasks => rows,
                form => form,
                error => error.map(|e| e.to_string()),
            },
        )
    }

    /// Edit form for task `id`, pre-filled from `form`.
    pub fn update(id: i64, form: &TaskForm, error: Option<&Message>) -> Result<String, minijinja::Error> {
        render(
            "update.html",
            context! {
                id => id,
                form => form,
                error => error.map(|e| e.to_string()),
            },
        )
    }

    pub fn about() -> Result<String, minijinja::Error> {
        render("about.html", context! {})
    }

    pub fn howto() -> Result<String, minijinja::Error> {
        render("howto.html", context! {})
    }

    /// Error page. Falls back to a bare document if the template itself
    /// cannot be rendered, so an error response always has a body.
    pub fn error(status: u16, reason: &str, message: &Message) -> String {
        let page = render(
            "error.html",
            context! {
                status => status,
                reason => reason,
                message => message.to_string(),
            },
        );

        match page {
            Ok(html) => html,
            Err(e) => {
                msg_error!(Message::TemplateRenderFailed(e.to_string()));
                format!("<!doctype html><title>{status} {reason}</title><h1>{status} {reason}</h1>")
            }
        }
    }
}
