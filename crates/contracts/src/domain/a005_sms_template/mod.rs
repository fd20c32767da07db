pub mod aggregate;

pub use aggregate::{
    SmsTemplate, SmsTemplatesResponse, UpdateSmsTemplateRequest, UpdateSmsTemplateResponse,
};
