pub mod aggregate;
pub mod reconciliation;

pub use aggregate::{
    CountStatus, CountType, CreateInventoryCountRequest, CreateInventoryCountResponse,
    InventoryCountItem,
};
pub use reconciliation::{CountRow, CountSheet, CountTotals, FilterTab};
