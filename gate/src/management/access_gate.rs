use crate::management::utils::access_decision::AccessDecision;
use crate::utils::config::Config;
use crate::utils::logging::*;
use lazy_static::lazy_static;

lazy_static! {
    static ref ACCESS_GATE: AccessGate = AccessGate::new();
}

/// Process-wide gate answering whether a user may access files.
///
/// The only instance is built on the first call to [`AccessGate::instance`]
/// and lives until the process exits.
pub struct AccessGate {
    allowed_user: String,
}

impl AccessGate {
    fn new() -> Self {
        Logger::logging_console(information_entry!("Access Gate", SystemEntry::Online));
        Self {
            allowed_user: Config::now().allowed_user.clone(),
        }
    }

    pub fn instance() -> &'static Self {
        &ACCESS_GATE
    }

    /// Exact, case-sensitive comparison against the allowed user. No I/O.
    pub fn decide(&self, user: &str) -> AccessDecision {
        AccessDecision::from_match(user == self.allowed_user)
    }

    /// Decides, prints the decision line on stdout and records it in the system log.
    pub async fn check_access(&self, user: &str) -> AccessDecision {
        let decision = self.decide(user);
        println!("{decision}");
        match decision {
            AccessDecision::Granted => logging_notice!(AccessEntry::Granted, format!("user: {user}")),
            AccessDecision::Denied => logging_warning!(AccessEntry::Denied, format!("user: {user}")),
        }
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Barrier};
    use std::thread;

    static FRESH_CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

    lazy_static! {
        static ref FRESH_GATE: AccessGate = {
            FRESH_CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
            AccessGate::new()
        };
    }

    #[test]
    fn test_allowed_user_is_granted() {
        assert_eq!(AccessGate::instance().decide("@ligia.mx"), AccessDecision::Granted);
    }

    #[test]
    fn test_missing_at_sign_is_denied() {
        assert_eq!(AccessGate::instance().decide("ligia.mx"), AccessDecision::Denied);
    }

    #[test]
    fn test_empty_user_is_denied() {
        assert_eq!(AccessGate::instance().decide(""), AccessDecision::Denied);
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        assert_eq!(AccessGate::instance().decide("@LIGIA.MX"), AccessDecision::Denied);
    }

    #[test]
    fn test_comparison_does_not_trim() {
        let gate = AccessGate::instance();
        assert_eq!(gate.decide(" @ligia.mx"), AccessDecision::Denied);
        assert_eq!(gate.decide("@ligia.mx\n"), AccessDecision::Denied);
    }

    #[test]
    fn test_decision_is_deterministic() {
        let gate = AccessGate::instance();
        for user in ["@ligia.mx", "ligia.mx", "", "@LIGIA.MX"] {
            assert_eq!(gate.decide(user), gate.decide(user));
        }
    }

    #[test]
    fn test_concurrent_first_access_constructs_once() {
        let barrier = Arc::new(Barrier::new(16));
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    &*FRESH_GATE as *const AccessGate as usize
                })
            })
            .collect();
        let addresses: Vec<usize> = handles.into_iter().map(|handle| handle.join().unwrap()).collect();
        assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(FRESH_CONSTRUCTIONS.load(Ordering::SeqCst), 1);
        assert_eq!(FRESH_GATE.decide("@ligia.mx"), AccessDecision::Granted);
    }

    #[test]
    fn test_instance_is_shared_across_threads() {
        let handles: Vec<_> = (0..16)
            .map(|_| thread::spawn(|| AccessGate::instance() as *const AccessGate as usize))
            .collect();
        let expected = AccessGate::instance() as *const AccessGate as usize;
        assert!(handles.into_iter().all(|handle| handle.join().unwrap() == expected));
    }

    #[test]
    fn test_repeated_instance_calls_return_same_gate() {
        let first = AccessGate::instance();
        for _ in 0..100 {
            assert!(std::ptr::eq(first, AccessGate::instance()));
        }
    }

    #[tokio::test]
    async fn test_check_access_granted_is_logged() {
        let decision = AccessGate::instance().check_access("@ligia.mx").await;
        assert_eq!(decision, AccessDecision::Granted);
        let logs = Logger::get_system_logs().await;
        assert!(logs.iter().any(|entry| entry.level == LogLevel::Notice
            && entry.message == "Access granted"
            && entry.debug_info == "user: @ligia.mx"));
    }

    #[tokio::test]
    async fn test_check_access_denied_is_logged() {
        let decision = AccessGate::instance().check_access("@LIGIA.MX").await;
        assert_eq!(decision, AccessDecision::Denied);
        let logs = Logger::get_system_logs().await;
        assert!(logs.iter().any(|entry| entry.level == LogLevel::Warning
            && entry.message == "Access denied"
            && entry.debug_info == "user: @LIGIA.MX"));
    }
}
