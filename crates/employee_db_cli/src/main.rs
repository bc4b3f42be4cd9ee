//! `employee-db` executable.
//!
//! Opens one store, runs one command against it, closes the store.
//! Without a subcommand it runs the smoke walkthrough.

mod commands;
mod config;
mod error;

use clap::Parser;
use config::{Cli, Command, RuntimeConfig, StoreLocation};
use employee_db_core::{core_version, init_logging, EmployeeDb};
use error::CliResult;
use log::info;
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Smoke);

    let outcome = RuntimeConfig::resolve(&cli.global).and_then(|config| {
        if let Some(log_dir) = &config.log_dir {
            if let Err(err) = init_logging(&config.log_level, &log_dir.to_string_lossy()) {
                eprintln!("Warning: file logging disabled: {err}");
            }
        }
        let stdout = std::io::stdout();
        run_with(&config, command, &mut stdout.lock())
    });

    exit_code(outcome, &mut std::io::stderr())
}

/// Maps a run outcome to the process exit status, reporting failures as
/// `Error: <message>`.
fn exit_code(outcome: CliResult<()>, err_out: &mut impl Write) -> ExitCode {
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = writeln!(err_out, "Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_with(config: &RuntimeConfig, command: Command, out: &mut impl Write) -> CliResult<()> {
    info!(
        "event=cli_start module=cli status=ok version={} store={}",
        core_version(),
        match config.store {
            StoreLocation::File(_) => "file",
            StoreLocation::Memory => "memory",
        }
    );

    let db = match &config.store {
        StoreLocation::File(path) => EmployeeDb::open(path)?,
        StoreLocation::Memory => EmployeeDb::open_in_memory()?,
    };

    let outcome = db
        .service()
        .map_err(Into::into)
        .and_then(|service| commands::execute(command, &service, out));

    // A command failure takes precedence over a close failure.
    let closed = db.close();
    outcome?;
    closed?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{exit_code, run_with};
    use crate::config::{Command, EmployeeFields, RuntimeConfig, StoreLocation};
    use crate::error::CliError;
    use employee_db_core::EmployeeDb;
    use std::process::ExitCode;

    fn memory_config() -> RuntimeConfig {
        RuntimeConfig {
            store: StoreLocation::Memory,
            log_level: "info".to_string(),
            log_dir: None,
        }
    }

    fn file_config(path: std::path::PathBuf) -> RuntimeConfig {
        RuntimeConfig {
            store: StoreLocation::File(path),
            ..memory_config()
        }
    }

    #[test]
    fn list_on_empty_store_succeeds_without_output() {
        let mut out = Vec::new();
        run_with(&memory_config(), Command::List, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn get_of_missing_id_returns_not_found() {
        let mut out = Vec::new();
        let err = run_with(&memory_config(), Command::Get { id: 42 }, &mut out).unwrap_err();
        assert!(matches!(err, CliError::Repo(ref inner) if inner.is_not_found()));
        assert_eq!(err.to_string(), "employee not found with id: 42");
    }

    #[test]
    fn failure_prints_error_line_and_exits_with_failure() {
        let mut out = Vec::new();
        let outcome = run_with(&memory_config(), Command::Delete { id: 7 }, &mut out);

        let mut err_out = Vec::new();
        let code = exit_code(outcome, &mut err_out);

        assert_eq!(code, ExitCode::FAILURE);
        assert_eq!(
            String::from_utf8(err_out).unwrap(),
            "Error: employee not found with id: 7\n"
        );
    }

    #[test]
    fn success_exits_cleanly_without_error_output() {
        let mut err_out = Vec::new();
        assert_eq!(exit_code(Ok(()), &mut err_out), ExitCode::SUCCESS);
        assert!(err_out.is_empty());
    }

    #[test]
    fn failed_command_still_closes_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.db");
        let config = file_config(path.clone());

        let mut out = Vec::new();
        let create = Command::Create(EmployeeFields {
            first_name: "Ana".to_string(),
            last_name: "Mora".to_string(),
            email: "ana@example.com".to_string(),
            salary: 10.0,
        });
        run_with(&config, create, &mut out).unwrap();

        let err = run_with(&config, Command::Get { id: 99 }, &mut out).unwrap_err();
        assert!(matches!(err, CliError::Repo(_)));

        // The store was released and its data kept.
        let reopened = EmployeeDb::open(&path).unwrap();
        assert_eq!(reopened.service().unwrap().count_employees().unwrap(), 1);
    }
}
