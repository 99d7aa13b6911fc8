// Library for tests to access modules

pub mod change_info;
pub mod chart;
pub mod config;
pub mod models;
pub mod notification;
pub mod replay;
pub mod state;
pub mod thumbnail;
pub mod version;
