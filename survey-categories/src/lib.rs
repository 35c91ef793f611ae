//! Categories CRUD service.
//!
//! A deliberately small collaborator to the survey app: sequentially-id'd
//! category records, unique names (case-insensitive), persisted as one
//! JSON file that is read fully at startup and rewritten fully on every
//! mutation. No locking discipline beyond a process-local mutex, no
//! transactional guarantees — hardening is explicitly out of scope.

mod store;
pub use store::{Category, CategoryError, CategoryPatch, CategoryStore, NewCategory};

mod routes;
pub use routes::{SharedStore, router};
