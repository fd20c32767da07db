pub mod aggregate;
pub mod workflow;

pub use aggregate::{
    RequestKind, RequestStatus, ServiceRequest, ServiceRequestsResponse, UpdateStatusRequest,
    UpdateStatusResponse,
};
pub use workflow::{ListQuery, Page, SortField, WorkflowConfig};
