//! Fitting operation domain model
//!
//! Owned state for a station fitting operation app: the fitting catalog
//! with its coded enums, door/device control state, the operation history,
//! and the list selection and paging models. A screen holds these values
//! and mutates them through explicit calls; nothing here is process-global.

pub mod catalog;
pub mod door;
pub mod fitting;
pub mod list;
pub mod oplog;

pub use catalog::{Catalog, CatalogError};
pub use door::{
    DeviceControl, DoorAction, DoorControl, DoorKind, DoorSelection, MoveDirection, SelectedDoor,
};
pub use fitting::{Fitting, FittingKind, FittingStatus, InvalidCode, Permission};
pub use list::{Pager, Selection};
pub use oplog::{OperationLog, OperationRecord};
