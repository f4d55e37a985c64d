#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),         // id
    TaskUpdated(i64),         // id
    TaskDeleted(i64),         // id
    TaskNotFoundWithId(i64),  // id
    TaskFieldRequired(String), // field name
    StorageFailed(String),    // error
    StorageWorkerFailed(String),
    FormRejected(String), // rejection

    // === PAGE MESSAGES ===
    PageNotFound,
    PageNotFoundAt(String), // path
    InternalError,
    TemplateRenderFailed(String),
    TemplateRegistrationFailed(String, String), // template, error

    // === SERVER MESSAGES ===
    ServerStarting(String), // address
    ServerStopped,
    ShutdownSignalReceived,
    ShutdownSignalFailed(String),

    // === CONFIGURATION MESSAGES ===
    ConfigLoaded(String), // path
    ConfigNotFound,
    ConfigSaved(String), // path
    InvalidPort(String), // raw value
    DatabaseOpened(String),

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
    MigrationHistoryEntry(u32, String, String), // version, name, applied_at
    NoMigrationsApplied,
}
