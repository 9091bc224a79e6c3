//! Integration tests for the employee store.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use roster_model::{Department, EmployeeFormData, EmployeeId};
use roster_store::{
    BACKUP_KEY, EmployeeStore, FileStorage, FixedClock, LoadOutcome, MemoryStorage, STORAGE_KEY,
    Storage, StorageError, StoreOptions,
};

fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 9, 30, 0).unwrap()
}

fn form(name: &str, department: Department, joined: (i32, u32, u32)) -> EmployeeFormData {
    EmployeeFormData {
        name: name.to_string(),
        email: format!("{}@company.com", name.to_lowercase().replace(' ', ".")),
        department,
        date_of_joining: NaiveDate::from_ymd_opt(joined.0, joined.1, joined.2).unwrap(),
    }
}

fn empty_store(clock: &FixedClock) -> EmployeeStore {
    EmployeeStore::open(
        Box::new(MemoryStorage::new()),
        Box::new(clock.clone()),
        &StoreOptions::new().with_seed_when_empty(false),
    )
}

#[test]
fn seeds_sample_records_when_empty() {
    let clock = FixedClock::new(at(2024, 6, 20));
    let store = EmployeeStore::open(
        Box::new(MemoryStorage::new()),
        Box::new(clock),
        &StoreOptions::default(),
    );

    assert_eq!(store.load_outcome(), &LoadOutcome::Missing);
    let names: Vec<&str> = store.list().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["John Smith", "Sarah Johnson", "Mike Chen"]);
    assert!(store.list().iter().all(|e| e.created_at == at(2024, 6, 20)));
    // Seeded records are persisted like any other create.
    assert!(store.storage().read(STORAGE_KEY).unwrap().is_some());
}

#[test]
fn does_not_seed_when_records_exist() {
    let clock = FixedClock::new(at(2024, 6, 20));
    let mut store = empty_store(&clock);
    store.create(form("Ann Lee", Department::Hr, (2020, 1, 1)));
    let storage = store.into_storage();

    let reopened = EmployeeStore::open(storage, Box::new(clock), &StoreOptions::default());
    assert_eq!(reopened.load_outcome(), &LoadOutcome::Loaded { count: 1 });
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.list()[0].name, "Ann Lee");
}

#[test]
fn create_appends_one_record_with_fresh_id() {
    let clock = FixedClock::new(at(2024, 6, 20));
    let mut store = empty_store(&clock);
    let first = store.create(form("Ann Lee", Department::Hr, (2020, 1, 1)));
    let existing: Vec<EmployeeId> = store.list().iter().map(|e| e.id.clone()).collect();

    let payload = form("Bob Stone", Department::Engineering, (2024, 6, 15));
    let id = store.create(payload.clone());

    assert_eq!(store.len(), 2);
    assert!(!existing.contains(&id));
    assert_ne!(first, id);
    let created = store.get(&id).expect("created record");
    assert_eq!(created.form_data(), payload);
    assert_eq!(created.created_at, created.updated_at);
    assert_eq!(store.list()[1].id, id);
}

#[test]
fn update_replaces_fields_and_keeps_created_at() {
    let clock = FixedClock::new(at(2024, 6, 20));
    let mut store = empty_store(&clock);
    let id = store.create(form("Ann Lee", Department::Hr, (2020, 1, 1)));

    clock.set(at(2024, 7, 2));
    let changed = form("Ann Marie Lee", Department::Finance, (2020, 2, 1));
    assert!(store.update(&id, changed.clone()));

    let record = store.get(&id).unwrap();
    assert_eq!(record.form_data(), changed);
    assert_eq!(record.created_at, at(2024, 6, 20));
    assert_eq!(record.updated_at, at(2024, 7, 2));
}

#[test]
fn update_unknown_id_is_a_no_op() {
    let clock = FixedClock::new(at(2024, 6, 20));
    let mut store = empty_store(&clock);
    store.create(form("Ann Lee", Department::Hr, (2020, 1, 1)));
    let before = store.list().to_vec();

    let missing = EmployeeId::new("does-not-exist").unwrap();
    assert!(!store.update(&missing, form("Zed Zee", Department::Design, (2021, 1, 1))));
    assert_eq!(store.list(), before.as_slice());
}

#[test]
fn delete_removes_exactly_one_record() {
    let clock = FixedClock::new(at(2024, 6, 20));
    let mut store = empty_store(&clock);
    let ann = store.create(form("Ann Lee", Department::Hr, (2020, 1, 1)));
    let bob = store.create(form("Bob Stone", Department::Sales, (2021, 1, 1)));

    assert!(store.delete(&ann));
    assert_eq!(store.len(), 1);
    assert!(store.get(&ann).is_none());
    assert!(store.get(&bob).is_some());

    assert!(!store.delete(&ann));
    assert_eq!(store.len(), 1);
}

#[test]
fn mutations_are_flushed_to_storage() {
    let dir = tempfile::tempdir().unwrap();
    let clock = FixedClock::new(at(2024, 6, 20));
    let mut store = EmployeeStore::open(
        Box::new(FileStorage::new(dir.path())),
        Box::new(clock.clone()),
        &StoreOptions::new().with_seed_when_empty(false),
    );
    let id = store.create(form("Ann Lee", Department::Hr, (2020, 1, 1)));
    store.create(form("Bob Stone", Department::Sales, (2021, 1, 1)));
    store.delete(&id);

    let reopened = EmployeeStore::open(
        Box::new(FileStorage::new(dir.path())),
        Box::new(clock),
        &StoreOptions::new().with_seed_when_empty(false),
    );
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.list()[0].name, "Bob Stone");
}

#[test]
fn malformed_storage_falls_back_to_empty() {
    let clock = FixedClock::new(at(2024, 6, 20));
    let store = EmployeeStore::open(
        Box::new(MemoryStorage::with_value(STORAGE_KEY, "{not json")),
        Box::new(clock),
        &StoreOptions::new().with_seed_when_empty(false),
    );
    assert!(store.is_empty());
    assert!(store.load_outcome().is_failure());
}

const UNKNOWN_DEPARTMENT: &str = r#"[{"id":"x1","name":"Ann Lee","email":"a@b.com","department":"Legal","dateOfJoining":"2020-01-01","createdAt":"2020-01-01T00:00:00.000Z","updatedAt":"2020-01-01T00:00:00.000Z"}]"#;

#[test]
fn failed_load_does_not_seed_or_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());
    let path = storage.path_for(STORAGE_KEY);
    std::fs::write(&path, UNKNOWN_DEPARTMENT).unwrap();

    let store = EmployeeStore::open(
        Box::new(storage),
        Box::new(FixedClock::new(at(2024, 6, 20))),
        &StoreOptions::default(),
    );
    assert!(store.load_outcome().is_failure());
    assert!(store.is_empty());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), UNKNOWN_DEPARTMENT);
}

#[test]
fn first_write_after_failed_load_keeps_a_backup() {
    let clock = FixedClock::new(at(2024, 6, 20));
    let mut store = EmployeeStore::open(
        Box::new(MemoryStorage::with_value(STORAGE_KEY, UNKNOWN_DEPARTMENT)),
        Box::new(clock),
        &StoreOptions::default(),
    );
    store.create(form("Bob Stone", Department::Sales, (2021, 1, 1)));
    assert!(store.last_persist_error().is_none());

    let backup = store.storage().read(BACKUP_KEY).unwrap();
    assert_eq!(backup.as_deref(), Some(UNKNOWN_DEPARTMENT));
    let saved = store.storage().read(STORAGE_KEY).unwrap().unwrap();
    assert!(saved.contains("Bob Stone"));
    assert!(!saved.contains("Legal"));
}

struct BrokenStorage;

impl Storage for BrokenStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::InvalidKey(key.to_string()))
    }

    fn write(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[test]
fn write_failures_are_remembered_not_raised() {
    let clock = FixedClock::new(at(2024, 6, 20));
    let mut store = EmployeeStore::open(
        Box::new(BrokenStorage),
        Box::new(clock),
        &StoreOptions::new().with_seed_when_empty(false),
    );
    assert!(store.load_outcome().is_failure());

    store.create(form("Ann Lee", Department::Hr, (2020, 1, 1)));
    assert_eq!(store.len(), 1);
    assert!(store.last_persist_error().is_some());
}

#[test]
fn statistics_summarise_the_full_collection() {
    let clock = FixedClock::new(at(2024, 6, 20));
    let mut store = empty_store(&clock);
    store.create(form("Ann Lee", Department::Hr, (2020, 1, 1)));
    store.create(form("Bob Stone", Department::Engineering, (2024, 6, 15)));
    store.create(form("Cy Twombly", Department::Engineering, (2023, 6, 1)));

    let stats = store.statistics();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.departments, 2);
    assert_eq!(stats.new_this_month, 1);
    // (53 + 0 + 12) / 3 = 21.67 months
    assert_eq!(stats.average_tenure, "1.8 years");
    assert_eq!(stats.department_distribution[0].department, Department::Engineering);
    assert_eq!(stats.department_distribution[0].count, 2);
    assert_eq!(stats.department_distribution[0].percentage, 67);
    assert_eq!(stats.department_distribution[1].percentage, 33);
}

#[test]
fn statistics_for_empty_roster() {
    let clock = FixedClock::new(at(2024, 6, 20));
    let store = empty_store(&clock);
    let stats = store.statistics();
    assert_eq!(stats.total, 0);
    assert_eq!(stats.departments, 0);
    assert_eq!(stats.new_this_month, 0);
    assert_eq!(stats.average_tenure, "0.0 months");
    assert!(stats.department_distribution.is_empty());
}

#[test]
fn export_file_name_uses_clock_date() {
    let clock = FixedClock::new(at(2024, 6, 20));
    let store = empty_store(&clock);
    assert_eq!(store.export_file_name(), "employees_2024-06-20.csv");
}
