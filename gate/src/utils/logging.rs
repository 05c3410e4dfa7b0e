pub use crate::{logging_notice, logging_warning};
pub use common::utils::log_entry::access::AccessEntry;
pub use common::utils::log_entry::system::SystemEntry;
pub use common::utils::logging::*;

use crate::utils::config::Config;
use lazy_static::lazy_static;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

lazy_static! {
    static ref LOGGER: RwLock<Logger> = RwLock::new(Logger::new());
}

pub struct Logger {
    system_log: Vec<LogEntry>,
}

impl Logger {
    fn new() -> Self {
        let log_entry = information_entry!("Logger", SystemEntry::Online);
        Self {
            system_log: vec![log_entry],
        }
    }

    pub async fn instance() -> RwLockReadGuard<'static, Logger> {
        LOGGER.read().await
    }

    pub async fn instance_mut() -> RwLockWriteGuard<'static, Logger> {
        LOGGER.write().await
    }

    pub async fn add_system_log<T: Into<String>, U: Into<String>, V: Into<String>>(level: LogLevel, position: T, message: U, debug_info: V) {
        let log_entry = LogEntry::new(level, position, message, debug_info);
        Self::add_system_log_entry(log_entry).await;
    }

    pub async fn add_system_log_entry(log_entry: LogEntry) {
        Self::logging_console(log_entry.clone());
        Self::instance_mut().await.system_log.push(log_entry);
    }

    pub fn logging_console(log_entry: LogEntry) {
        if log_entry.level >= Config::now().console_level {
            logging_console!(log_entry);
        }
    }

    pub async fn get_system_logs() -> Vec<LogEntry> {
        Self::instance().await.system_log.clone()
    }
}

#[macro_export]
macro_rules! logging_notice {
    ($message:expr) => {
        $crate::utils::logging::Logger::add_system_log($crate::utils::logging::LogLevel::Notice, format!("{}:{}", file!(), line!()), $message, "").await
    };
    ($message:expr, $debug_info:expr) => {
        $crate::utils::logging::Logger::add_system_log($crate::utils::logging::LogLevel::Notice, format!("{}:{}", file!(), line!()), $message, $debug_info).await
    };
}

#[macro_export]
macro_rules! logging_warning {
    ($message:expr) => {
        $crate::utils::logging::Logger::add_system_log($crate::utils::logging::LogLevel::Warning, format!("{}:{}", file!(), line!()), $message, "").await
    };
    ($message:expr, $debug_info:expr) => {
        $crate::utils::logging::Logger::add_system_log($crate::utils::logging::LogLevel::Warning, format!("{}:{}", file!(), line!()), $message, $debug_info).await
    };
}
