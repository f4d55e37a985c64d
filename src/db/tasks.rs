use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskDraft, TaskError, TaskFilter};
use crate::msg_debug;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_TASK: &str = "INSERT INTO tasks (title, description, created_at) VALUES (?1, ?2, ?3)";
const SELECT_TASKS: &str = "SELECT id, title, description, created_at FROM tasks";
const WHERE_ID: &str = "WHERE id = ?1";
const ORDER_BY_ID: &str = "ORDER BY id";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?1, description = ?2 WHERE id = ?3";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

/// Repository over the `tasks` table.
///
/// Borrows the connection for the duration of one storage session. Every
/// write runs in its own transaction, so a failed operation leaves nothing
/// behind.
pub struct Tasks<'a> {
    conn: &'a mut Connection,
}

impl<'a> Tasks<'a> {
    pub fn new(conn: &'a mut Connection) -> Self {
        Tasks { conn }
    }

    /// Inserts a task stamped with the current time.
    pub fn create(&mut self, title: &str, description: &str) -> Result<Task, TaskError> {
        let draft = TaskDraft::new(title, description)?;

        let tx = self.conn.transaction()?;
        tx.execute(INSERT_TASK, params![draft.title(), draft.description(), Utc::now()])?;
        let id = tx.last_insert_rowid();
        let task = find(&tx, id)?.ok_or(TaskError::NotFound(id))?;
        tx.commit()?;

        msg_debug!(Message::TaskCreated(task.id));
        Ok(task)
    }

    /// All tasks in insertion order.
    pub fn list(&mut self) -> Result<Vec<Task>, TaskError> {
        self.fetch(TaskFilter::All)
    }

    pub fn get(&mut self, id: i64) -> Result<Task, TaskError> {
        self.fetch(TaskFilter::ById(id))?.into_iter().next().ok_or(TaskError::NotFound(id))
    }

    /// Rewrites title and description, keeping `id` and `created_at`.
    ///
    /// An unknown id is reported before the fields are checked.
    pub fn update(&mut self, id: i64, title: &str, description: &str) -> Result<Task, TaskError> {
        let tx = self.conn.transaction()?;
        if find(&tx, id)?.is_none() {
            return Err(TaskError::NotFound(id));
        }

        let draft = TaskDraft::new(title, description)?;
        tx.execute(UPDATE_TASK, params![draft.title(), draft.description(), id])?;
        let task = find(&tx, id)?.ok_or(TaskError::NotFound(id))?;
        tx.commit()?;

        msg_debug!(Message::TaskUpdated(id));
        Ok(task)
    }

    pub fn delete(&mut self, id: i64) -> Result<(), TaskError> {
        let tx = self.conn.transaction()?;
        let deleted = tx.execute(DELETE_TASK, params![id])?;
        if deleted == 0 {
            return Err(TaskError::NotFound(id));
        }
        tx.commit()?;

        msg_debug!(Message::TaskDeleted(id));
        Ok(())
    }

    pub fn fetch(&mut self, filter: TaskFilter) -> Result<Vec<Task>, TaskError> {
        match filter {
            TaskFilter::All => {
                let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_TASKS, ORDER_BY_ID))?;
                let task_iter = stmt.query_map([], map_task)?;

                let mut tasks = Vec::new();
                for task_result in task_iter {
                    tasks.push(task_result?);
                }
                Ok(tasks)
            }
            TaskFilter::ById(id) => Ok(find(self.conn, id)?.into_iter().collect()),
        }
    }
}

fn find(conn: &Connection, id: i64) -> rusqlite::Result<Option<Task>> {
    conn.query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![id], map_task).optional()
}

fn map_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        created_at: row.get(3)?,
    })
}
