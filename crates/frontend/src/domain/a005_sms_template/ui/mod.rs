pub mod list;

pub use list::SmsTemplatesPage;
