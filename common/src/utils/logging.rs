use chrono::{DateTime, Local};
use colored::*;
use serde::Deserialize;
use std::fmt::Display;

pub use crate::{emergency_entry, information_entry, logging_console, warning_entry};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
pub enum LogLevel {
    Debug,
    Information,
    Notice,
    Warning,
    Emergency,
}

impl LogLevel {
    pub fn to_plain_string(&self) -> String {
        match self {
            LogLevel::Debug => "Debug      ".to_string(),
            LogLevel::Information => "Information".to_string(),
            LogLevel::Notice => "Notice     ".to_string(),
            LogLevel::Warning => "Warning    ".to_string(),
            LogLevel::Emergency => "Emergency  ".to_string(),
        }
    }

    pub fn to_colored_string(&self) -> ColoredString {
        match self {
            LogLevel::Debug => "Debug      ".to_string().bright_black(),
            LogLevel::Information => "Information".to_string().bright_blue(),
            LogLevel::Notice => "Notice     ".to_string().bright_green(),
            LogLevel::Warning => "Warning    ".to_string().yellow(),
            LogLevel::Emergency => "Emergency  ".to_string().magenta(),
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = self.to_plain_string();
        write!(f, "{}", str)
    }
}

#[derive(Clone, Debug)]
pub struct LogEntry {
    pub level: LogLevel,
    pub timestamp: DateTime<Local>,
    pub position: String,
    pub message: String,
    pub debug_info: String,
}

impl LogEntry {
    pub fn new<T: Into<String>, U: Into<String>, V: Into<String>>(level: LogLevel, position: T, message: U, debug_info: V) -> Self {
        Self {
            level,
            timestamp: Local::now(),
            position: position.into(),
            message: message.into(),
            debug_info: debug_info.into(),
        }
    }
}

impl LogEntry {
    pub fn to_plain_string(&self) -> String {
        let level = self.level.to_plain_string();
        let timestamp = self.timestamp.format("%Y/%m/%d %H:%M:%S").to_string();
        if self.debug_info.is_empty() {
            format!("[{}] {} {}: {}", level, timestamp, self.position, self.message)
        } else {
            format!("[{}] {} {}: {}\n{}", level, timestamp, self.position, self.message, self.debug_info)
        }
    }

    pub fn to_colored_string(&self) -> String {
        let level = self.level.to_colored_string();
        let timestamp = self.timestamp.format("%Y/%m/%d %H:%M:%S").to_string();
        let position = self.position.cyan();
        let message = self.message.white();
        if self.debug_info.is_empty() {
            format!("[{}] {} {}: {}", level, timestamp, position, message)
        } else {
            let debug_info = self.debug_info.bright_black();
            format!("[{}] {} {}: {}\n{}", level, timestamp, position, message, debug_info)
        }
    }
}

impl Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = self.to_plain_string();
        write!(f, "{}", str)
    }
}

// Standard output carries decision lines only.
pub fn logging_console(log_entry: LogEntry) {
    eprintln!("{}", log_entry.to_colored_string());
}

#[macro_export]
macro_rules! information_entry {
    ($position:expr, $message:expr) => {
        $crate::utils::logging::LogEntry::new($crate::utils::logging::LogLevel::Information, $position, $message, "")
    };
    ($position:expr, $message:expr, $debug_info:expr) => {
        $crate::utils::logging::LogEntry::new($crate::utils::logging::LogLevel::Information, $position, $message, format!("{}:{} {}", file!(), line!(), $debug_info))
    };
}

#[macro_export]
macro_rules! warning_entry {
    ($position:expr, $message:expr) => {
        $crate::utils::logging::LogEntry::new($crate::utils::logging::LogLevel::Warning, $position, $message, "")
    };
    ($position:expr, $message:expr, $debug_info:expr) => {
        $crate::utils::logging::LogEntry::new($crate::utils::logging::LogLevel::Warning, $position, $message, format!("{}:{} {}", file!(), line!(), $debug_info))
    };
}

#[macro_export]
macro_rules! emergency_entry {
    ($position:expr, $message:expr) => {
        $crate::utils::logging::LogEntry::new($crate::utils::logging::LogLevel::Emergency, $position, $message, "")
    };
    ($position:expr, $message:expr, $debug_info:expr) => {
        $crate::utils::logging::LogEntry::new($crate::utils::logging::LogLevel::Emergency, $position, $message, format!("{}:{} {}", file!(), line!(), $debug_info))
    };
}

#[macro_export]
macro_rules! logging_console {
    ($log_entry:expr) => {
        $crate::utils::logging::logging_console($log_entry)
    };
}
