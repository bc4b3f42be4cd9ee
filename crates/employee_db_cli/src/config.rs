//! Command-line and environment configuration.
//!
//! Flags win over environment variables; clap resolves both.

use clap::{Args, Parser, Subcommand};
use crate::error::{CliError, CliResult};
use employee_db_core::{default_log_level, validate_log_level};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "employee-db")]
#[command(about = "Employee store CRUD smoke runner", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// SQLite database file. In-memory when unset.
    #[arg(long = "db", env = "EMPLOYEE_DB_PATH", global = true)]
    pub db_path: Option<PathBuf>,

    /// trace|debug|info|warn|error. Defaults by build mode.
    #[arg(long, env = "EMPLOYEE_DB_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rotating log files. No file logging when unset.
    #[arg(long, env = "EMPLOYEE_DB_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the create/read/update/delete walkthrough (default)
    Smoke,
    /// Print every employee
    List,
    /// Print one employee
    Get { id: i64 },
    /// Create an employee
    Create(EmployeeFields),
    /// Replace every field of an employee
    Update {
        id: i64,
        #[command(flatten)]
        fields: EmployeeFields,
    },
    /// Delete an employee
    Delete { id: i64 },
}

#[derive(Debug, Clone, PartialEq, Args)]
pub struct EmployeeFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[arg(allow_negative_numbers = true)]
    pub salary: f64,
}

/// Where the store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    File(PathBuf),
    Memory,
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub store: StoreLocation,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl RuntimeConfig {
    /// Rejects an unknown log level even when file logging stays off.
    pub fn resolve(args: &GlobalArgs) -> CliResult<Self> {
        let store = match &args.db_path {
            Some(path) => StoreLocation::File(path.clone()),
            None => StoreLocation::Memory,
        };
        let log_level = match args.log_level.as_deref() {
            Some(level) => validate_log_level(level).map_err(CliError::Config)?,
            None => default_log_level(),
        };

        Ok(Self {
            store,
            log_level: log_level.to_string(),
            log_dir: args.log_dir.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, EmployeeFields, RuntimeConfig, StoreLocation};
    use clap::Parser;
    use employee_db_core::default_log_level;
    use std::path::PathBuf;

    const ENV_VARS: [&str; 3] = [
        "EMPLOYEE_DB_PATH",
        "EMPLOYEE_DB_LOG_LEVEL",
        "EMPLOYEE_DB_LOG_DIR",
    ];

    fn resolve(args: &[&str]) -> RuntimeConfig {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        RuntimeConfig::resolve(&cli.global).unwrap()
    }

    // Environment is process-global, so every env assertion lives here.
    #[test]
    fn flags_beat_env_and_env_beats_defaults() {
        for name in ENV_VARS {
            std::env::remove_var(name);
        }
        let defaults = resolve(&["employee-db", "list"]);
        assert_eq!(defaults.store, StoreLocation::Memory);
        assert_eq!(defaults.log_level, default_log_level());
        assert_eq!(defaults.log_dir, None);

        std::env::set_var("EMPLOYEE_DB_PATH", "/tmp/env.db");
        std::env::set_var("EMPLOYEE_DB_LOG_LEVEL", "error");
        std::env::set_var("EMPLOYEE_DB_LOG_DIR", "/tmp/env-logs");

        let from_env = resolve(&["employee-db", "list"]);
        assert_eq!(from_env.store, StoreLocation::File(PathBuf::from("/tmp/env.db")));
        assert_eq!(from_env.log_level, "error");
        assert_eq!(from_env.log_dir, Some(PathBuf::from("/tmp/env-logs")));

        let from_flags = resolve(&[
            "employee-db",
            "--db",
            "/tmp/flag.db",
            "--log-level",
            "trace",
            "--log-dir",
            "/tmp/flag-logs",
            "list",
        ]);
        assert_eq!(
            from_flags.store,
            StoreLocation::File(PathBuf::from("/tmp/flag.db"))
        );
        assert_eq!(from_flags.log_level, "trace");
        assert_eq!(from_flags.log_dir, Some(PathBuf::from("/tmp/flag-logs")));

        for name in ENV_VARS {
            std::env::remove_var(name);
        }
    }

    #[test]
    fn unknown_log_level_is_rejected_without_log_dir() {
        let cli = Cli::try_parse_from(["employee-db", "--log-level", "verbose", "list"]).unwrap();
        let err = RuntimeConfig::resolve(&cli.global).unwrap_err();
        assert!(err.to_string().contains("unsupported log level `verbose`"));
    }

    #[test]
    fn log_level_is_normalized() {
        let config = resolve(&["employee-db", "--log-level", " WARNING ", "list"]);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn flags_resolve_to_file_store_and_explicit_level() {
        let cli = Cli::try_parse_from([
            "employee-db",
            "--db",
            "/tmp/employees.db",
            "--log-level",
            "warn",
            "list",
        ])
        .unwrap();

        let config = RuntimeConfig::resolve(&cli.global).unwrap();
        assert_eq!(
            config.store,
            StoreLocation::File(PathBuf::from("/tmp/employees.db"))
        );
        assert_eq!(config.log_level, "warn");
        assert!(matches!(cli.command, Some(Command::List)));
    }

    #[test]
    fn global_flags_are_accepted_after_the_subcommand() {
        let cli = Cli::try_parse_from(["employee-db", "get", "9", "--db", "/tmp/e.db"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Get { id: 9 })));
        assert_eq!(cli.global.db_path, Some(PathBuf::from("/tmp/e.db")));
    }

    #[test]
    fn update_parses_all_fields() {
        let cli = Cli::try_parse_from([
            "employee-db",
            "update",
            "9",
            "Osvaldo",
            "Rios Zambrano",
            "osvaldo.rios1@hey.inc",
            "23000",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Update { id, fields }) => {
                assert_eq!(id, 9);
                assert_eq!(
                    fields,
                    EmployeeFields {
                        first_name: "Osvaldo".to_string(),
                        last_name: "Rios Zambrano".to_string(),
                        email: "osvaldo.rios1@hey.inc".to_string(),
                        salary: 23000.0,
                    }
                );
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn non_numeric_salary_is_rejected() {
        let result = Cli::try_parse_from(["employee-db", "create", "A", "B", "a@b.c", "lots"]);
        assert!(result.is_err());
    }
}
