use tracing::{error, info};

use crate::models::{ConnectionState, GenerationState, ProviderKind};
use crate::providers;
use crate::session::Session;
use crate::{gemini, prompt};

pub const MISSING_NAME_MESSAGE: &str = "Please enter a student name.";
pub const GENERIC_GENERATION_MESSAGE: &str =
    "An error occurred while generating the report. Please check your connection and try again.";
const CONNECTION_FAILED_MESSAGE: &str = "Connection failed. Please check credentials.";

/// Credentials for one provider's connect call. The behavioral source is
/// an implicitly-authenticated internal system and takes none.
#[derive(Debug, Clone)]
pub enum Credentials {
    Academic {
        server_url: String,
        client_id: String,
        client_secret: String,
    },
    Skill {
        username: String,
        secret: String,
    },
    Behavior,
}

impl Credentials {
    pub fn kind(&self) -> ProviderKind {
        match self {
            Credentials::Academic { .. } => ProviderKind::Academic,
            Credentials::Skill { .. } => ProviderKind::Skill,
            Credentials::Behavior => ProviderKind::Behavior,
        }
    }
}

/// Drives the whole flow: provider connections, the fan-out fetch on
/// student selection, and report generation. Sole writer of the session
/// apart from the focus-area edit; exclusive `&mut self` access is what
/// serializes operations, so a stale fetch can never overwrite a newer
/// selection.
#[derive(Default)]
pub struct Orchestrator {
    pub session: Session,
}

impl Orchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn connect_provider(&mut self, credentials: Credentials) {
        let kind = credentials.kind();
        self.session.set_connection(kind, ConnectionState::Connecting);

        let ok = match &credentials {
            Credentials::Academic {
                server_url,
                client_id,
                client_secret,
            } => providers::academic::connect(server_url, client_id, client_secret).await,
            Credentials::Skill { username, secret } => {
                providers::skill::connect(username, secret).await
            }
            Credentials::Behavior => providers::behavior::connect().await,
        };

        if !ok {
            self.session
                .set_connection(kind, ConnectionState::Failed(CONNECTION_FAILED_MESSAGE.to_string()));
            return;
        }

        self.session.set_connection(kind, ConnectionState::Connected);
        if kind == ProviderKind::Academic {
            // The roster comes from the same system; fetch it as soon as
            // the connection is up so students can be selected.
            self.session.roster = providers::academic::roster().await;
            info!(students = self.session.roster.len(), "roster loaded");
        }
    }

    /// Clears the current record immediately (no stale data shown during
    /// the fetch window), then fans out fetches: academic always, skill
    /// and behavior only while their provider is connected. Providers
    /// are infallible by contract, so the join cannot partially fail.
    pub async fn select_student(&mut self, student_id: &str) {
        let input = &mut self.session.input;
        input.student_name.clear();
        input.academic_data.clear();
        input.skill_data.clear();
        input.behavior_data.clear();

        if student_id.is_empty() {
            return;
        }

        let skill_connected = self.session.is_connected(ProviderKind::Skill);
        let behavior_connected = self.session.is_connected(ProviderKind::Behavior);

        let (academic_data, skill_data, behavior_data) = tokio::join!(
            providers::academic::fetch_student(student_id),
            async {
                if skill_connected {
                    providers::skill::fetch_student(student_id).await
                } else {
                    String::new()
                }
            },
            async {
                if behavior_connected {
                    providers::behavior::fetch_student(student_id).await
                } else {
                    String::new()
                }
            },
        );

        let student_name = self
            .session
            .roster_name(student_id)
            .unwrap_or_default()
            .to_string();
        let input = &mut self.session.input;
        input.student_name = student_name;
        input.academic_data = academic_data;
        input.skill_data = skill_data;
        input.behavior_data = behavior_data;
    }

    pub fn set_focus_area(&mut self, focus: &str) {
        self.session.input.focus_area = focus.to_string();
    }

    /// One generation pass. A request already in flight makes this a
    /// no-op; an empty student name fails validation without contacting
    /// the endpoint. Transport and configuration failures collapse into
    /// one generic user-facing message, with the detail logged for
    /// operators only.
    pub async fn generate_report(&mut self) {
        if self.session.generation.is_generating() {
            return;
        }
        if self.session.input.student_name.is_empty() {
            self.session.generation = GenerationState::Failed(MISSING_NAME_MESSAGE.to_string());
            return;
        }

        self.session.generation = GenerationState::Generating;
        let prompt = prompt::build_prompt(&self.session.input);

        let result = match gemini::Client::from_env() {
            Ok(client) => client.generate(&prompt).await,
            Err(e) => Err(e),
        };

        self.session.generation = match result {
            Ok(text) => GenerationState::Succeeded(text),
            Err(e) => {
                error!(error = %e, "report generation failed");
                GenerationState::Failed(GENERIC_GENERATION_MESSAGE.to_string())
            }
        };
    }
}
