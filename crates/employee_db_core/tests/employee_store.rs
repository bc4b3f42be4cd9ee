use employee_db_core::EmployeeDb;

#[test]
fn in_memory_stores_are_independent() {
    let first = EmployeeDb::open_in_memory().unwrap();
    let second = EmployeeDb::open_in_memory().unwrap();

    first
        .service()
        .unwrap()
        .create_employee("Ana", "Mora", "ana@example.com", 1.0)
        .unwrap();

    assert_eq!(second.service().unwrap().count_employees().unwrap(), 0);
}

#[test]
fn file_store_persists_across_close_and_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employees.db");

    let db = EmployeeDb::open(&path).unwrap();
    let created = db
        .service()
        .unwrap()
        .create_employee("Osvaldo", "Rios", "osvaldo.rios1@hey.in", 22000.0)
        .unwrap();
    db.close().unwrap();

    let reopened = EmployeeDb::open(&path).unwrap();
    let service = reopened.service().unwrap();
    assert_eq!(service.read_employee_by_id(created.id).unwrap(), created);
}

#[test]
fn ids_are_not_reused_after_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employees.db");

    let db = EmployeeDb::open(&path).unwrap();
    let service = db.service().unwrap();
    let first = service
        .create_employee("A", "One", "a@example.com", 1.0)
        .unwrap();
    service.delete_employee(first.id).unwrap();
    drop(service);
    drop(db);

    let reopened = EmployeeDb::open(&path).unwrap();
    let second = reopened
        .service()
        .unwrap()
        .create_employee("B", "Two", "b@example.com", 2.0)
        .unwrap();

    assert!(second.id > first.id);
}

#[test]
fn connection_exposes_migrated_schema() {
    let db = EmployeeDb::open_in_memory().unwrap();
    let version: u32 = db
        .connection()
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, employee_db_core::db::migrations::latest_version());
}
