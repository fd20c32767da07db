pub mod list;

pub use list::RequestListPage;
