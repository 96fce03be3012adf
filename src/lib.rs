pub mod configuration;
pub mod domain;
pub mod order_client;
pub mod page;
pub mod startup;
pub mod telemetry;
pub mod util;
pub mod widget;
