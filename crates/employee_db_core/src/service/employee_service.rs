//! Employee use-case service.
//!
//! # Responsibility
//! - Provide the five CRUD entry points callers use.
//! - Delegate persistence to a repository implementation.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - Log lines carry ids and status only, never names, email or salary.

use crate::model::employee::{Employee, EmployeeDraft, EmployeeId};
use crate::repo::employee_repo::{EmployeeRepository, RepoError, RepoResult};
use log::{info, warn};
use std::time::Instant;

/// Employee store facade over a repository implementation.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates and persists a new employee with a store-assigned id.
    ///
    /// # Errors
    /// - `Validation` for blank fields or a non-finite salary.
    /// - `DuplicateEmail` when another employee already uses `email`.
    pub fn create_employee(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        salary: f64,
    ) -> RepoResult<Employee> {
        let started_at = Instant::now();
        let draft = EmployeeDraft::new(first_name, last_name, email, salary);
        let created = self.repo.create_employee(&draft);
        let id = observe(
            "employee_create",
            created.as_ref().ok().copied(),
            started_at,
            created,
        )?;
        Ok(draft.into_employee(id))
    }

    /// Returns every live employee in insertion order.
    pub fn read_all_employees(&self) -> RepoResult<Vec<Employee>> {
        let started_at = Instant::now();
        observe("employee_list", None, started_at, self.repo.list_employees())
    }

    /// Returns one employee.
    ///
    /// # Errors
    /// - `NotFound(id)` when no live employee has `id`.
    pub fn read_employee_by_id(&self, id: EmployeeId) -> RepoResult<Employee> {
        let started_at = Instant::now();
        let found = self
            .repo
            .get_employee(id)
            .and_then(|employee| employee.ok_or(RepoError::NotFound(id)));
        observe("employee_get", Some(id), started_at, found)
    }

    /// Replaces every field of an existing employee and returns the new state.
    ///
    /// # Errors
    /// - `NotFound(id)` when no live employee has `id`.
    /// - `Validation` / `DuplicateEmail` as for create; the row is unchanged.
    pub fn update_employee(
        &self,
        id: EmployeeId,
        first_name: &str,
        last_name: &str,
        email: &str,
        salary: f64,
    ) -> RepoResult<Employee> {
        let started_at = Instant::now();
        let draft = EmployeeDraft::new(first_name, last_name, email, salary);
        observe(
            "employee_update",
            Some(id),
            started_at,
            self.repo.update_employee(id, &draft),
        )?;
        Ok(draft.into_employee(id))
    }

    /// Removes an employee. Its id is never handed out again.
    ///
    /// # Errors
    /// - `NotFound(id)` when no live employee has `id`; nothing is removed.
    pub fn delete_employee(&self, id: EmployeeId) -> RepoResult<()> {
        let started_at = Instant::now();
        observe(
            "employee_delete",
            Some(id),
            started_at,
            self.repo.delete_employee(id),
        )
    }

    pub fn count_employees(&self) -> RepoResult<u64> {
        let started_at = Instant::now();
        observe("employee_count", None, started_at, self.repo.count_employees())
    }
}

fn observe<T>(
    event: &str,
    id: Option<EmployeeId>,
    started_at: Instant,
    result: RepoResult<T>,
) -> RepoResult<T> {
    let id_label = id.map_or_else(|| "-".to_string(), |id| id.to_string());
    let duration_ms = started_at.elapsed().as_millis();
    match &result {
        Ok(_) => info!(
            "event={event} module=service status=ok id={id_label} duration_ms={duration_ms}"
        ),
        Err(err) => warn!(
            "event={event} module=service status=error id={id_label} duration_ms={duration_ms} error_code={}",
            error_code(err)
        ),
    }
    result
}

fn error_code(err: &RepoError) -> &'static str {
    match err {
        RepoError::Validation(_) => "validation_failed",
        RepoError::Db(_) => "db_error",
        RepoError::NotFound(_) => "not_found",
        RepoError::DuplicateEmail(_) => "duplicate_email",
        RepoError::InvalidData(_) => "invalid_data",
        RepoError::UninitializedConnection { .. }
        | RepoError::MissingRequiredTable(_)
        | RepoError::MissingRequiredColumn { .. } => "schema_mismatch",
    }
}
