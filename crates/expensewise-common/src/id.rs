use serde::{Deserialize, Serialize};
use std::fmt;

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Identifier of one assistant session, from panel open to panel close.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new() -> Self {
        Self(new_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters, for log lines.
    pub fn short(&self) -> &str {
        self.0.get(..8).unwrap_or(&self.0)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_id_is_valid_uuid() {
        let id = new_id();
        let parsed = uuid::Uuid::parse_str(&id);
        assert!(parsed.is_ok());
        assert_eq!(parsed.unwrap().get_version_num(), 4);
    }

    #[test]
    fn new_id_is_unique() {
        assert_ne!(new_id(), new_id());
    }

    #[test]
    fn session_id_display() {
        let sid = SessionId::new();
        assert_eq!(sid.to_string(), sid.as_str());
    }

    #[test]
    fn session_id_short_prefix() {
        let sid = SessionId::new();
        assert_eq!(sid.short().len(), 8);
        assert!(sid.as_str().starts_with(sid.short()));
    }

    #[test]
    fn session_id_equality() {
        let sid = SessionId::new();
        assert_eq!(sid, sid.clone());
        assert_ne!(sid, SessionId::new());
    }

    #[test]
    fn session_id_serialization() {
        let sid = SessionId::new();
        let json = serde_json::to_string(&sid).unwrap();
        let deserialized: SessionId = serde_json::from_str(&json).unwrap();
        assert_eq!(sid, deserialized);
    }
}
