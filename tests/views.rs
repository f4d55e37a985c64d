#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use todolist::libs::messages::Message;
    use todolist::libs::task::{Task, TaskForm};
    use todolist::libs::view::View;

    fn sample_task(id: i64, title: &str, description: &str) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: description.to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap(),
        }
    }

    #[test]
    fn test_index_lists_tasks() {
        let tasks = vec![sample_task(7, "Water plants", "Balcony too"), sample_task(9, "Call mom", "Sunday")];

        let html = View::index(&tasks, &TaskForm::default(), None).unwrap();
        assert!(html.contains("Water plants"));
        assert!(html.contains("Balcony too"));
        assert!(html.contains("Call mom"));
        assert!(html.contains("2025-03-14 09:26"));
        assert!(html.contains("/update/7"));
        assert!(html.contains("/delete/9"));
        assert!(!html.contains("No tasks found"));
    }

    #[test]
    fn test_index_empty_notice() {
        let html = View::index(&[], &TaskForm::default(), None).unwrap();
        assert!(html.contains("No tasks found"));
        assert!(!html.contains("alert-danger"));
    }

    #[test]
    fn test_index_keeps_submitted_values_on_error() {
        let form = TaskForm::new("Half done", "");
        let error = Message::TaskFieldRequired("description".to_string());

        let html = View::index(&[], &form, Some(&error)).unwrap();
        assert!(html.contains("alert-danger"));
        assert!(html.contains("Please enter a description for the task."));
        assert!(html.contains(r#"value="Half done""#));
    }

    #[test]
    fn test_update_form() {
        let task = sample_task(3, "Fix bike", "Rear tire");

        let html = View::update(task.id, &TaskForm::from(&task), None).unwrap();
        assert!(html.contains(r#"action="/update/3""#));
        assert!(html.contains(r#"value="Fix bike""#));
        assert!(html.contains(r#"value="Rear tire""#));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let tasks = vec![sample_task(1, r#"<b>"bold"</b>"#, "a & b")];

        let html = View::index(&tasks, &TaskForm::default(), None).unwrap();
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;"));
        assert!(html.contains("a &amp; b"));
    }

    #[test]
    fn test_static_pages() {
        let about = View::about().unwrap();
        let howto = View::howto().unwrap();

        assert!(about.contains("About"));
        assert!(howto.contains("How to use"));
        for html in [about, howto] {
            assert!(html.contains(r#"href="/about""#));
            assert!(html.contains(r#"href="/howto""#));
        }
    }

    #[test]
    fn test_error_page() {
        let html = View::error(404, "Not Found", &Message::TaskNotFoundWithId(12));
        assert!(html.contains("404 Not Found"));
        assert!(html.contains("Task with ID 12 not found."));
    }
}
