use std::fmt::Display;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    Denied,
}

impl AccessDecision {
    pub fn from_match(matched: bool) -> Self {
        if matched {
            AccessDecision::Granted
        } else {
            AccessDecision::Denied
        }
    }

    // The denied line keeps its leading space, transcripts depend on it.
    pub fn message(&self) -> &'static str {
        match self {
            AccessDecision::Granted => "Access Granted",
            AccessDecision::Denied => " Access Denied",
        }
    }
}

impl Display for AccessDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}
