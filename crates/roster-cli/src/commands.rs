use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use roster_model::{Department, Employee, EmployeeId};
use roster_store::{EmployeeStore, FileStorage, Statistics, StoreOptions, SystemClock};
use roster_validate::{FormInput, validate_form};
use roster_view::{
    SortKey, SortOrder, ViewMode, ViewState, department_distribution, displayed_employees,
};
use tracing::{debug, info, info_span};

use crate::cli::{AddArgs, ExportArgs, IdArgs, ListArgs, SortArg, UpdateArgs, ViewArg};
use crate::logging::redact_value;
use crate::types::{DepartmentCount, ExportTarget, ListResult, SaveOutcome};

/// Open the file-backed store under `data_dir` using the system clock.
pub fn open_store(data_dir: &Path, seed_when_empty: bool) -> EmployeeStore {
    debug!(data_dir = %data_dir.display(), seed_when_empty, "opening roster");
    EmployeeStore::open(
        Box::new(FileStorage::new(data_dir)),
        Box::new(SystemClock),
        &StoreOptions::new().with_seed_when_empty(seed_when_empty),
    )
}

/// Translate `list` flags into a view state, applying them in the order a
/// user would: pick the view first, then type a search, then sort.
pub fn view_state(args: &ListArgs) -> Result<ViewState> {
    let mut state = ViewState::new();
    match args.view {
        ViewArg::All => state.show_all(),
        ViewArg::Departments => state.show_departments(),
        ViewArg::Department => {
            let department = args
                .department
                .ok_or_else(|| anyhow!("--view department requires --department"))?;
            state.show_department(department);
        }
        ViewArg::NewHires => state.show_new_hires(),
    }
    if let Some(search) = &args.search {
        state.set_search(search.as_str());
    }
    if args.view == ViewArg::All {
        state.set_department_filter(args.department);
    } else if args.view != ViewArg::Department && args.department.is_some() {
        debug!("department filter only applies to the all view, ignoring");
    }
    let key = match args.sort {
        SortArg::Name => SortKey::Name,
        SortArg::Joined => SortKey::DateOfJoining,
    };
    let order = if args.desc {
        SortOrder::Desc
    } else {
        SortOrder::Asc
    };
    state.set_sort(key, order);
    Ok(state)
}

pub fn run_list<'a>(store: &'a EmployeeStore, args: &ListArgs) -> Result<ListResult<'a>> {
    let state = view_state(args)?;
    let span = info_span!("list", mode = ?state.mode);
    let _guard = span.enter();
    let employees = displayed_employees(store.list(), &state, store.today());
    let distribution = if state.mode == ViewMode::Departments {
        department_distribution(store.list())
    } else {
        Vec::new()
    };
    debug!(shown = employees.len(), total = store.len(), "listed employees");
    Ok(ListResult {
        title: state.title(),
        mode: state.mode,
        employees,
        total: store.len(),
        distribution,
    })
}

pub fn run_show<'a>(store: &'a EmployeeStore, args: &IdArgs) -> Result<&'a Employee> {
    let id = parse_id(&args.id)?;
    store
        .get(&id)
        .ok_or_else(|| anyhow!("no employee with id {id}"))
}

pub fn run_add(store: &mut EmployeeStore, args: &AddArgs) -> Result<SaveOutcome> {
    let input = FormInput {
        name: args.name.clone(),
        email: args.email.clone(),
        department: args.department.clone(),
        date_of_joining: args.joined.clone(),
    };
    let form = match validate_form(&input, store.today()) {
        Ok(form) => form,
        Err(errors) => {
            debug!(errors = errors.0.len(), "add rejected");
            return Ok(SaveOutcome::Rejected(errors));
        }
    };
    let name = form.name.clone();
    let id = store.create(form);
    ensure_persisted(store)?;
    info!(%id, name = redact_value(&name), "added employee");
    Ok(SaveOutcome::Saved(id))
}

/// Merge the given flags over the current record, validate, then save.
pub fn run_update(store: &mut EmployeeStore, args: &UpdateArgs) -> Result<SaveOutcome> {
    let id = parse_id(&args.id)?;
    let current = store
        .get(&id)
        .ok_or_else(|| anyhow!("no employee with id {id}"))?;

    let mut input = FormInput::from(&current.form_data());
    if let Some(name) = &args.name {
        input.name.clone_from(name);
    }
    if let Some(email) = &args.email {
        input.email.clone_from(email);
    }
    if let Some(department) = &args.department {
        input.department.clone_from(department);
    }
    if let Some(joined) = &args.joined {
        input.date_of_joining.clone_from(joined);
    }

    let form = match validate_form(&input, store.today()) {
        Ok(form) => form,
        Err(errors) => {
            debug!(%id, errors = errors.0.len(), "update rejected");
            return Ok(SaveOutcome::Rejected(errors));
        }
    };
    if !store.update(&id, form) {
        bail!("no employee with id {id}");
    }
    ensure_persisted(store)?;
    info!(%id, "updated employee");
    Ok(SaveOutcome::Saved(id))
}

/// Delete a record, returning a copy of what was removed.
pub fn run_delete(store: &mut EmployeeStore, args: &IdArgs) -> Result<Employee> {
    let id = parse_id(&args.id)?;
    let removed = store
        .get(&id)
        .cloned()
        .ok_or_else(|| anyhow!("no employee with id {id}"))?;
    store.delete(&id);
    ensure_persisted(store)?;
    info!(%id, name = redact_value(&removed.name), "deleted employee");
    Ok(removed)
}

pub fn run_stats(store: &EmployeeStore) -> Statistics {
    store.statistics()
}

/// Every department with its current head count, in display order.
pub fn run_departments(store: &EmployeeStore) -> Vec<DepartmentCount> {
    store
        .departments()
        .iter()
        .map(|&department| DepartmentCount {
            department,
            employees: count_in(store.list(), department),
        })
        .collect()
}

pub fn run_export(store: &EmployeeStore, args: &ExportArgs) -> Result<ExportTarget> {
    let csv = store.export_csv().context("build csv export")?;
    let path = match &args.output {
        Some(path) if path.as_os_str() == "-" => return Ok(ExportTarget::Stdout(csv)),
        Some(path) => path.clone(),
        None => PathBuf::from(store.export_file_name()),
    };
    std::fs::write(&path, &csv).with_context(|| format!("write export to {}", path.display()))?;
    info!(path = %path.display(), rows = store.len(), "exported employees");
    Ok(ExportTarget::File {
        path,
        rows: store.len(),
    })
}

fn parse_id(raw: &str) -> Result<EmployeeId> {
    EmployeeId::new(raw).with_context(|| format!("invalid employee id {raw:?}"))
}

fn count_in(employees: &[Employee], department: Department) -> usize {
    employees
        .iter()
        .filter(|e| e.department == department)
        .count()
}

fn ensure_persisted(store: &EmployeeStore) -> Result<()> {
    match store.last_persist_error() {
        Some(reason) => bail!("change applied in memory but not saved: {reason}"),
        None => Ok(()),
    }
}
