pub mod a001_warehouse;
pub mod a002_product;
pub mod a003_inventory_count;
pub mod a004_service_request;
pub mod a005_sms_template;
