//! The employee store.
//!
//! [`EmployeeStore`] is the single owner of the employee collection. Readers
//! get `&[Employee]` snapshots; the only mutations are [`EmployeeStore::create`],
//! [`EmployeeStore::update`] and [`EmployeeStore::delete`], each followed by a
//! full flush to storage.
//!
//! Storage problems never interrupt the caller. A failed or malformed read
//! starts the store empty and is reported through [`LoadOutcome`]; a failed
//! write is logged and kept in [`EmployeeStore::last_persist_error`].
//!
//! A failed load never triggers a write on its own: sample seeding is skipped.
//! Unparseable data is copied to [`BACKUP_KEY`] before the first mutation
//! replaces it.

use roster_model::{Department, Employee, EmployeeFormData, EmployeeId};
use roster_view::{
    DepartmentShare, average_tenure, department_distribution, distinct_departments,
    new_hires_this_month,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::config::{BACKUP_KEY, STORAGE_KEY, StoreOptions};
use crate::error::ExportError;
use crate::export::{employees_to_csv, export_file_name};
use crate::ids::generate_id;
use crate::seed::sample_employees;
use crate::storage::Storage;

/// What happened when the store read its collection at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The stored collection was read.
    Loaded { count: usize },
    /// Nothing was stored yet.
    Missing,
    /// Reading or parsing failed; the store started empty.
    Failed { reason: String },
}

impl LoadOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, LoadOutcome::Failed { .. })
    }
}

/// Summary numbers for the statistics widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total: usize,
    pub departments: usize,
    pub new_this_month: usize,
    /// Human-readable, e.g. `"1.8 years"`.
    pub average_tenure: String,
    pub average_tenure_months: f64,
    pub department_distribution: Vec<DepartmentShare>,
}

pub struct EmployeeStore {
    employees: Vec<Employee>,
    storage: Box<dyn Storage>,
    clock: Box<dyn Clock>,
    load_outcome: LoadOutcome,
    last_persist_error: Option<String>,
    /// Raw text that failed to parse, not yet copied to [`BACKUP_KEY`].
    unreadable: Option<String>,
}

impl EmployeeStore {
    /// Load the collection from `storage`, seeding sample records if it is empty.
    ///
    /// Seeding only follows a successful or missing load.
    pub fn open(storage: Box<dyn Storage>, clock: Box<dyn Clock>, options: &StoreOptions) -> Self {
        let (employees, load_outcome, unreadable) = load_employees(storage.as_ref());
        match &load_outcome {
            LoadOutcome::Loaded { count } => info!(count, "loaded employees"),
            LoadOutcome::Missing => info!("no stored employees"),
            LoadOutcome::Failed { reason } => {
                warn!(%reason, "failed to load employees, starting with an empty roster");
            }
        }

        let mut store = Self {
            employees,
            storage,
            clock,
            load_outcome,
            last_persist_error: None,
            unreadable,
        };

        if store.employees.is_empty() && options.seed_when_empty {
            if store.load_outcome.is_failure() {
                info!("skipping sample seeding after a failed load");
                return store;
            }
            info!("seeding sample employees");
            for form in sample_employees() {
                store.create(form);
            }
        }
        store
    }

    /// Current collection in insertion order.
    pub fn list(&self) -> &[Employee] {
        &self.employees
    }

    pub fn get(&self, id: &EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| &e.id == id)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Append a new record built from `form` and persist.
    ///
    /// Returns the generated identifier.
    pub fn create(&mut self, form: EmployeeFormData) -> EmployeeId {
        let now = self.clock.now();
        let mut id = generate_id(now);
        while self.get(&id).is_some() {
            id = generate_id(now);
        }
        debug!(%id, department = %form.department, "creating employee");
        self.employees
            .push(Employee::from_form(id.clone(), form, now));
        self.persist();
        id
    }

    /// Replace the mutable fields of record `id` and persist.
    ///
    /// Unknown ids are ignored. Returns whether a record changed.
    pub fn update(&mut self, id: &EmployeeId, form: EmployeeFormData) -> bool {
        let now = self.clock.now();
        let Some(employee) = self.employees.iter_mut().find(|e| &e.id == id) else {
            debug!(%id, "update ignored, no such employee");
            return false;
        };
        employee.apply_form(form, now);
        debug!(%id, "updated employee");
        self.persist();
        true
    }

    /// Remove record `id` and persist. Unknown ids are ignored.
    pub fn delete(&mut self, id: &EmployeeId) -> bool {
        let before = self.employees.len();
        self.employees.retain(|e| &e.id != id);
        if self.employees.len() == before {
            debug!(%id, "delete ignored, no such employee");
            return false;
        }
        debug!(%id, "deleted employee");
        self.persist();
        true
    }

    pub fn departments(&self) -> &'static [Department] {
        &Department::ALL
    }

    pub fn statistics(&self) -> Statistics {
        let today = self.clock.today();
        let tenure = average_tenure(&self.employees, today);
        Statistics {
            total: self.employees.len(),
            departments: distinct_departments(&self.employees),
            new_this_month: new_hires_this_month(&self.employees, today).len(),
            average_tenure: tenure.to_string(),
            average_tenure_months: tenure.months,
            department_distribution: department_distribution(&self.employees),
        }
    }

    pub fn export_csv(&self) -> Result<String, ExportError> {
        employees_to_csv(&self.employees)
    }

    /// Suggested file name for an export made today.
    pub fn export_file_name(&self) -> String {
        export_file_name(self.clock.today())
    }

    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }

    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    /// Message of the most recent failed write, cleared by the next successful one.
    pub fn last_persist_error(&self) -> Option<&str> {
        self.last_persist_error.as_deref()
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    pub fn into_storage(self) -> Box<dyn Storage> {
        self.storage
    }

    fn persist(&mut self) {
        if let Some(raw) = &self.unreadable {
            if let Err(error) = self.storage.write(BACKUP_KEY, raw) {
                let reason = format!("could not back up unreadable data: {}", error_chain(&error));
                warn!(%reason, "failed to persist employees");
                self.last_persist_error = Some(reason);
                return;
            }
            warn!(key = BACKUP_KEY, "moved unreadable employee data aside");
            self.unreadable = None;
        }
        let result = serde_json::to_string(&self.employees)
            .map_err(|e| e.to_string())
            .and_then(|json| {
                self.storage
                    .write(STORAGE_KEY, &json)
                    .map_err(|e| error_chain(&e))
            });
        match result {
            Ok(()) => self.last_persist_error = None,
            Err(reason) => {
                warn!(%reason, "failed to persist employees");
                self.last_persist_error = Some(reason);
            }
        }
    }
}

/// Read the stored collection. The third element is raw text that failed to parse.
fn load_employees(storage: &dyn Storage) -> (Vec<Employee>, LoadOutcome, Option<String>) {
    let raw = match storage.read(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return (Vec::new(), LoadOutcome::Missing, None),
        Err(error) => {
            let reason = error_chain(&error);
            return (Vec::new(), LoadOutcome::Failed { reason }, None);
        }
    };
    match serde_json::from_str::<Vec<Employee>>(&raw) {
        Ok(employees) => {
            let count = employees.len();
            (employees, LoadOutcome::Loaded { count }, None)
        }
        Err(error) => {
            let reason = format!("malformed employee data: {error}");
            (Vec::new(), LoadOutcome::Failed { reason }, Some(raw))
        }
    }
}

fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
