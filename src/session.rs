use crate::models::{ConnectionState, GenerationState, ProviderKind, ReportInput, Student};

/// All mutable state for one sitting: the report input being assembled,
/// the roster, and the connection/generation machines. Owned by the
/// orchestrator, discarded when the process exits.
#[derive(Debug, Default)]
pub struct Session {
    pub input: ReportInput,
    pub roster: Vec<Student>,
    academic: ConnectionState,
    skill: ConnectionState,
    behavior: ConnectionState,
    pub generation: GenerationState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connection(&self, kind: ProviderKind) -> &ConnectionState {
        match kind {
            ProviderKind::Academic => &self.academic,
            ProviderKind::Skill => &self.skill,
            ProviderKind::Behavior => &self.behavior,
        }
    }

    pub fn set_connection(&mut self, kind: ProviderKind, state: ConnectionState) {
        let slot = match kind {
            ProviderKind::Academic => &mut self.academic,
            ProviderKind::Skill => &mut self.skill,
            ProviderKind::Behavior => &mut self.behavior,
        };
        *slot = state;
    }

    pub fn is_connected(&self, kind: ProviderKind) -> bool {
        self.connection(kind).is_connected()
    }

    pub fn roster_name(&self, student_id: &str) -> Option<&str> {
        self.roster
            .iter()
            .find(|s| s.id == student_id)
            .map(|s| s.name.as_str())
    }
}
