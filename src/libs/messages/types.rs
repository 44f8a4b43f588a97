#[derive(Debug, Clone)]
pub enum Message {
    // === CLIENT MESSAGES ===
    ClientCreated(String, i64), // name, id
    ClientNotFound(i64),
    ClientDeleted(String),
    ClientPaused(String, String),  // name, date
    ClientResumed(String, String), // name, date
    ClientStopped(String, String), // name, date
    ClientRenewed(String, i64),    // name, package number
    ClientCompleted(String),
    ClientsCompletedCount(usize),
    ClientRecordMalformed(i64),
    NoClientsFound,
    ClientsHeader,
    ClientHeader(String),
    ConfirmDeleteClient(String),
    TransitionRejected(String),

    // === PACKAGE MESSAGES ===
    PausesHeader,
    NoPausesRecorded,
    PackagesHeader(String),
    NoArchivedPackages(String),
    PackageNotFound(i64, i64), // client id, package number
    CalendarHeader(String, i64, String), // name, package number, month
    CalendarLegend,

    // === ACTIVITY MESSAGES ===
    ActivityLogged(String, String), // name, date
    ActivityDeleted(i64),
    ActivityNotFound(i64),
    ActivitiesHeader(String),
    NoActivitiesFound(String),

    // === INPUT MESSAGES ===
    InvalidDate(String, String), // input, reason
    InvalidMonth(String),
    InvalidPackageDays(i64),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModulePackages,
    ConfigModuleDatabase,

    // === EXPORT MESSAGES ===
    ExportCompleted(String),

    // === PROMPTS ===
    PromptSelectModules,
    PromptDefaultPackageDays,
    PromptAutoComplete,
    PromptDatabasePath,

    // === GENERAL MESSAGES ===
    OperationCancelled,

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
}
