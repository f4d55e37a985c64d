#[cfg(test)]
mod tests {
    use todolist::db::db::Db;
    use todolist::db::migrations::{get_db_version, needs_migration, MigrationManager};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("todolist.db");
            MigrationTestContext { _temp_dir: temp_dir, db_path }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_automatically(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.db_path).unwrap();

        let version = get_db_version(&db.conn).unwrap();
        assert_eq!(version, MigrationManager::new().latest_version());
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_database_needs_migration(ctx: &mut MigrationTestContext) {
        let conn = Db::new_without_migrations(&ctx.db_path).unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
        assert!(MigrationManager::new().get_migration_history(&conn).unwrap().is_empty());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history(ctx: &mut MigrationTestContext) {
        let mut conn = Db::new_without_migrations(&ctx.db_path).unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        assert!(!history.is_empty());
        for (i, (version, _, _)) in history.iter().enumerate() {
            assert_eq!(*version as usize, i + 1);
        }
        assert_eq!(history[0].1, "create_tasks_table");
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_idempotency(ctx: &mut MigrationTestContext) {
        let mut conn = Db::new_without_migrations(&ctx.db_path).unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();
        let version1 = get_db_version(&conn).unwrap();
        let history1 = manager.get_migration_history(&conn).unwrap();

        manager.run_migrations(&mut conn).unwrap();
        let version2 = get_db_version(&conn).unwrap();
        let history2 = manager.get_migration_history(&conn).unwrap();

        assert_eq!(version1, version2);
        assert_eq!(history1.len(), history2.len());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_reopen_keeps_data(ctx: &mut MigrationTestContext) {
        {
            let db = Db::open(&ctx.db_path).unwrap();
            db.conn
                .execute(
                    "INSERT INTO tasks (title, description, created_at) VALUES ('Kept', 'Still here', CURRENT_TIMESTAMP)",
                    [],
                )
                .unwrap();
        }

        // A second open must not recreate or clear the table
        let db = Db::open(&ctx.db_path).unwrap();
        let count: i64 = db.conn.query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0)).unwrap();
        assert_eq!(count, 1);
    }
}
