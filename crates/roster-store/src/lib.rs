//! Employee store: the owned collection, its persistence, statistics and export.

pub mod clock;
pub mod config;
pub mod error;
pub mod export;
pub mod ids;
pub mod seed;
pub mod storage;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{BACKUP_KEY, DATA_DIR_ENV_VAR, STORAGE_KEY, StoreOptions, default_data_dir};
pub use error::{ExportError, StorageError};
pub use export::{CSV_HEADER, employees_to_csv, export_file_name};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{EmployeeStore, LoadOutcome, Statistics};
