//! Subcommand execution against one open store.

use crate::config::{Command, EmployeeFields};
use crate::error::CliResult;
use employee_db_core::{Employee, EmployeeId, EmployeeRepository, EmployeeService};
use std::io::Write;

const SMOKE_FIRST_NAME: &str = "Osvaldo";
const SMOKE_LAST_NAME: &str = "Rios";
const SMOKE_EMAIL: &str = "osvaldo.rios1@hey.in";
const SMOKE_SALARY: f64 = 22000.0;
const SMOKE_UPDATED_LAST_NAME: &str = "Rios Zambrano";
const SMOKE_UPDATED_EMAIL: &str = "osvaldo.rios1@hey.inc";
const SMOKE_UPDATED_SALARY: f64 = 23000.0;

pub fn execute<R: EmployeeRepository>(
    command: Command,
    service: &EmployeeService<R>,
    out: &mut impl Write,
) -> CliResult<()> {
    match command {
        Command::Smoke => run_smoke(service, out),
        Command::List => {
            for employee in service.read_all_employees()? {
                print_employee(out, &employee)?;
            }
            Ok(())
        }
        Command::Get { id } => {
            let employee = service.read_employee_by_id(EmployeeId(id))?;
            print_employee(out, &employee)
        }
        Command::Create(fields) => {
            let employee = create(service, &fields)?;
            print_employee(out, &employee)
        }
        Command::Update { id, fields } => {
            let employee = service.update_employee(
                EmployeeId(id),
                &fields.first_name,
                &fields.last_name,
                &fields.email,
                fields.salary,
            )?;
            print_employee(out, &employee)
        }
        Command::Delete { id } => {
            service.delete_employee(EmployeeId(id))?;
            writeln!(out, "Deleted employee with ID {id}")?;
            Ok(())
        }
    }
}

/// Create, list, read, update, re-read, delete, then show the not-found error.
pub fn run_smoke<R: EmployeeRepository>(
    service: &EmployeeService<R>,
    out: &mut impl Write,
) -> CliResult<()> {
    writeln!(out, "Creating a new employee...")?;
    let email = free_email(service, SMOKE_EMAIL, None)?;
    let created = service.create_employee(SMOKE_FIRST_NAME, SMOKE_LAST_NAME, &email, SMOKE_SALARY)?;
    let id = created.id;

    writeln!(out, "\nReading all employees:")?;
    for employee in service.read_all_employees()? {
        print_employee(out, &employee)?;
    }

    writeln!(out, "\nReading employee with ID {id}:")?;
    print_employee(out, &service.read_employee_by_id(id)?)?;

    writeln!(out, "\nUpdating employee with ID {id}...")?;
    let updated_email = free_email(service, SMOKE_UPDATED_EMAIL, Some(id))?;
    service.update_employee(
        id,
        SMOKE_FIRST_NAME,
        SMOKE_UPDATED_LAST_NAME,
        &updated_email,
        SMOKE_UPDATED_SALARY,
    )?;
    print_employee(out, &service.read_employee_by_id(id)?)?;

    writeln!(out, "\nDeleting employee with ID {id}...")?;
    service.delete_employee(id)?;

    match service.read_employee_by_id(id) {
        Ok(employee) => print_employee(out, &employee)?,
        Err(err) => writeln!(out, "Error: {err}")?,
    }

    Ok(())
}

fn create<R: EmployeeRepository>(
    service: &EmployeeService<R>,
    fields: &EmployeeFields,
) -> CliResult<Employee> {
    Ok(service.create_employee(
        &fields.first_name,
        &fields.last_name,
        &fields.email,
        fields.salary,
    )?)
}

fn print_employee(out: &mut impl Write, employee: &Employee) -> CliResult<()> {
    writeln!(out, "{}", serde_json::to_string(employee)?)?;
    Ok(())
}

/// Returns `base`, or `local+N@domain` when another employee already holds it.
fn free_email<R: EmployeeRepository>(
    service: &EmployeeService<R>,
    base: &str,
    owner: Option<EmployeeId>,
) -> CliResult<String> {
    let taken: Vec<String> = service
        .read_all_employees()?
        .into_iter()
        .filter(|employee| Some(employee.id) != owner)
        .map(|employee| employee.email)
        .collect();

    let mut candidate = base.to_string();
    let mut suffix = 1;
    while taken.contains(&candidate) {
        candidate = with_suffix(base, suffix);
        suffix += 1;
    }
    Ok(candidate)
}

fn with_suffix(email: &str, suffix: u32) -> String {
    match email.split_once('@') {
        Some((local, domain)) => format!("{local}+{suffix}@{domain}"),
        None => format!("{email}+{suffix}"),
    }
}
