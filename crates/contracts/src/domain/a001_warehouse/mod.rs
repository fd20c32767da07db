pub mod aggregate;
pub mod ordering;

pub use aggregate::{
    Warehouse, WarehouseUpdateRequest, WarehouseUpdateResponse, WarehousesResponse,
};
pub use ordering::{DragState, PriorityOrderer};
