pub mod auth_service;
pub mod credential_store;
pub mod storage;
pub mod time_record_store;

pub use auth_service::authenticate;
pub use credential_store::{Bootstrap, CredentialStore};
pub use storage::{FileStorage, LineStorage};
pub use time_record_store::TimeRecordStore;
