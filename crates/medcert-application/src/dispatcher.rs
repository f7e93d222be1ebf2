//! Routes inbound events to per-participant sessions.

use std::collections::HashMap;
use std::sync::Arc;

use medcert_core::Result;
use medcert_core::dialogue::{
    ConversationEngine, DOCUMENT_CAPTION, DOCUMENT_FILE_NAME, EngineAction, GENERATING_NOTICE,
    Prompt, ReplyKeyboard,
};
use medcert_core::document::CertificateRenderer;
use medcert_core::event::InboundEvent;
use medcert_core::field::FieldStore;
use medcert_core::session::Session;
use medcert_infrastructure::DocumentSink;
use tokio::sync::{Mutex, RwLock};

use crate::messenger::Messenger;

/// Routes each inbound event to its participant's session and forwards the
/// engine's output to the messenger.
///
/// Sessions are owned here and nowhere else. Events for one participant are
/// strictly serialized by the per-session mutex; distinct participants are
/// fully independent — the only state they share is the read-only renderer.
pub struct SessionDispatcher {
    /// In-memory session map, keyed by participant identity.
    sessions: RwLock<HashMap<String, Arc<Mutex<Session>>>>,
    engine: ConversationEngine,
    renderer: Arc<dyn CertificateRenderer>,
    messenger: Arc<dyn Messenger>,
}

impl SessionDispatcher {
    /// Creates a dispatcher over the given renderer and messenger.
    pub fn new(renderer: Arc<dyn CertificateRenderer>, messenger: Arc<dyn Messenger>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            engine: ConversationEngine::new(),
            renderer,
            messenger,
        }
    }

    /// Processes one inbound event to completion, including the terminal
    /// render-and-send action when the event finishes the flow.
    ///
    /// Generation failures are reported to this participant and swallowed
    /// here; they never propagate to the event loop or other sessions.
    ///
    /// # Errors
    ///
    /// Returns an error only when a reply prompt cannot be delivered.
    pub async fn dispatch(&self, participant_id: &str, event: InboundEvent) -> Result<()> {
        let session = self.session_for(participant_id).await;
        let mut session = session.lock().await;

        match self.engine.handle(&mut session, &event) {
            EngineAction::Reply(prompt) => {
                self.messenger.send_prompt(participant_id, &prompt).await
            }
            EngineAction::Generate { fields } => {
                // The engine already reset the session, so a failure below
                // leaves the participant at the menu rather than stranded.
                self.run_generation(participant_id, &fields).await;
                Ok(())
            }
        }
    }

    /// Clone of a participant's session, if one exists.
    pub async fn session_snapshot(&self, participant_id: &str) -> Option<Session> {
        let sessions = self.sessions.read().await;
        match sessions.get(participant_id) {
            Some(session) => Some(session.lock().await.clone()),
            None => None,
        }
    }

    async fn session_for(&self, participant_id: &str) -> Arc<Mutex<Session>> {
        if let Some(session) = self.sessions.read().await.get(participant_id) {
            return session.clone();
        }

        let mut sessions = self.sessions.write().await;
        sessions
            .entry(participant_id.to_string())
            .or_insert_with(|| {
                tracing::debug!(participant_id, "creating session");
                Arc::new(Mutex::new(Session::new(participant_id)))
            })
            .clone()
    }

    /// The terminal action: render, deliver, report. The one step that
    /// legitimately suspends.
    async fn run_generation(&self, participant_id: &str, fields: &FieldStore) {
        let generation_id = uuid::Uuid::new_v4();
        tracing::info!(participant_id, %generation_id, "generating certificate");

        if let Err(e) = self.messenger.send_text(participant_id, GENERATING_NOTICE).await {
            tracing::warn!(participant_id, error = %e, "progress notice failed");
        }

        match self.generate_and_send(participant_id, fields).await {
            Ok(()) => {
                tracing::info!(participant_id, %generation_id, "certificate delivered");
                if let Err(e) = self
                    .messenger
                    .send_prompt(participant_id, &Prompt::completed())
                    .await
                {
                    tracing::warn!(participant_id, error = %e, "completion prompt failed");
                }
            }
            Err(e) => {
                tracing::error!(participant_id, %generation_id, error = %e, "certificate generation failed");
                let notice = Prompt::new(
                    format!("❌ Error generating PDF: {e}"),
                    ReplyKeyboard::MainMenu,
                );
                if let Err(e) = self.messenger.send_prompt(participant_id, &notice).await {
                    tracing::warn!(participant_id, error = %e, "failure notice failed");
                }
            }
        }
    }

    async fn generate_and_send(&self, participant_id: &str, fields: &FieldStore) -> Result<()> {
        let document = self.renderer.render(fields)?;

        // The sink lives exactly as long as delivery needs it; drop removes
        // the temp file on every exit path out of this function.
        let mut sink = DocumentSink::create()?;
        sink.write(document.as_bytes())?;
        self.messenger
            .send_document(
                participant_id,
                sink.path(),
                DOCUMENT_FILE_NAME,
                DOCUMENT_CAPTION,
            )
            .await?;
        Ok(())
    }
}
