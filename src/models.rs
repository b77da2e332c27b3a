#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: String,
    pub name: String,
}

/// The merged per-student payload submitted to report generation.
/// Everything except `student_name` is an opaque text blob.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportInput {
    pub student_name: String,
    pub academic_data: String,
    pub skill_data: String,
    pub behavior_data: String,
    pub focus_area: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Academic,
    Skill,
    Behavior,
}

/// Per-provider connection lifecycle. One attempt moves
/// `Disconnected -> Connecting -> {Connected | Failed}`; a failed
/// provider may be retried, re-entering `Connecting`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    Failed(String),
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected)
    }
}

/// Report generation lifecycle. Replacing the variant wholesale is what
/// guarantees a stale result and a stale error can never coexist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenerationState {
    #[default]
    Idle,
    Generating,
    Succeeded(String),
    Failed(String),
}

impl GenerationState {
    pub fn is_generating(&self) -> bool {
        matches!(self, GenerationState::Generating)
    }
}
