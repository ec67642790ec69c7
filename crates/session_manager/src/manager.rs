//! Chat controller
//!
//! Drives the session state machine: validates user input, dispatches
//! webhook requests, and applies results or failures back into session
//! state. At most one send is in flight per session; a second send
//! while pending is silently ignored.
//!
//! Every request is tagged with the session id active at dispatch
//! time; a response arriving after a reset no longer matches and is
//! discarded instead of mutating the new session.

use std::sync::Arc;

use chat_core::{render_transcript, Language, Message, RewriteRules, Translations, WidgetConfig};
use chat_state::{SessionEvent, StateMachine};
use chrono::Local;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, error, warn};
use webhook_client::{WebhookClientTrait, WebhookError, WebhookRequest, WebhookResponse};

use crate::error::Result;
use crate::session::{ChatSession, ViewMode};
use crate::speech::TranscriptEvent;
use crate::storage::LanguageStore;

/// Result of a `send` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The message was dispatched and the round trip resolved.
    Sent,
    /// Input was blank after trimming; nothing happened.
    IgnoredBlank,
    /// A request was already in flight; nothing happened.
    IgnoredPending,
}

/// Broadcast to subscribers whenever the conversation is wiped, so
/// collaborators like the privacy notice can re-show themselves.
#[derive(Debug, Clone)]
pub struct ResetEvent {
    /// Session id active after the wipe.
    pub session_id: String,
}

struct Inner {
    session: ChatSession,
    machine: StateMachine,
    first_visit_sent: bool,
}

/// Owns the live session and all transitions on it.
pub struct ChatController {
    inner: RwLock<Inner>,
    client: Arc<dyn WebhookClientTrait>,
    config: WidgetConfig,
    rules: RewriteRules,
    store: Option<Arc<dyn LanguageStore>>,
    reset_tx: broadcast::Sender<ResetEvent>,
}

impl ChatController {
    /// Create a controller with the default language and no
    /// persistence.
    pub fn new(client: Arc<dyn WebhookClientTrait>, config: WidgetConfig) -> Self {
        Self::build(client, config, Language::default(), None)
    }

    /// Create a controller backed by a language store; the persisted
    /// language choice, if any, becomes the session language.
    pub async fn with_store(
        client: Arc<dyn WebhookClientTrait>,
        config: WidgetConfig,
        store: Arc<dyn LanguageStore>,
    ) -> Self {
        let language = match store.load().await {
            Ok(Some(language)) => language,
            Ok(None) => Language::default(),
            Err(err) => {
                warn!(error = %err, "failed to load language preference");
                Language::default()
            }
        };
        Self::build(client, config, language, Some(store))
    }

    fn build(
        client: Arc<dyn WebhookClientTrait>,
        config: WidgetConfig,
        language: Language,
        store: Option<Arc<dyn LanguageStore>>,
    ) -> Self {
        let (reset_tx, _) = broadcast::channel(16);
        Self {
            inner: RwLock::new(Inner {
                session: ChatSession::new(language),
                machine: StateMachine::new(),
                first_visit_sent: false,
            }),
            client,
            config,
            rules: RewriteRules::standard(),
            store,
            reset_tx,
        }
    }

    /// Snapshot of the current session for rendering.
    pub async fn session(&self) -> ChatSession {
        self.inner.read().await.session.clone()
    }

    /// Whether a send is currently in flight.
    pub async fn is_pending(&self) -> bool {
        self.inner.read().await.machine.state().is_pending()
    }

    /// Subscribe to conversation-wipe notifications.
    pub fn subscribe_reset(&self) -> broadcast::Receiver<ResetEvent> {
        self.reset_tx.subscribe()
    }

    /// Notify the webhook that the widget became visible.
    ///
    /// Fires exactly once per session creation, and only while the
    /// message log is empty. A `pushGreeting` response sets the banner.
    pub async fn open(&self) {
        let session_id = {
            let mut inner = self.inner.write().await;
            if inner.first_visit_sent || !inner.session.messages.is_empty() {
                return;
            }
            inner.first_visit_sent = true;
            inner.session.session_id.clone()
        };

        let request = WebhookRequest::first_visit(session_id.clone());
        match self.client.post(&request).await {
            Ok(response) => {
                if let Some(greeting) = response.first_visit_greeting().map(str::to_string) {
                    let mut inner = self.inner.write().await;
                    if inner.session.session_id == session_id {
                        inner.session.banner_text = Some(greeting);
                    }
                }
            }
            Err(err) => warn!(error = %err, "first visit notification failed"),
        }
    }

    /// Send a user message through the webhook.
    ///
    /// Appends exactly one user message, and upon resolution exactly
    /// one bot message (the reply, a fallback for missing output, or a
    /// localized error string). Blank input and sends while pending
    /// are silent no-ops.
    pub async fn send(&self, text: &str) -> SendOutcome {
        if text.trim().is_empty() {
            debug!("ignoring blank send");
            return SendOutcome::IgnoredBlank;
        }

        let (dispatched_session, language, outgoing) = {
            let mut inner = self.inner.write().await;
            if inner.machine.state().is_pending() {
                debug!("send ignored, request already in flight");
                return SendOutcome::IgnoredPending;
            }

            // Canonicalize the transmitted text; the stored message
            // keeps the user's original wording.
            let outgoing = self.rules.apply(text);

            inner.session.push_message(Message::user(text));
            inner.session.composer.clear();
            inner.session.show_welcome = false;
            inner.session.typing = true;
            inner.machine.handle_event(SessionEvent::SendDispatched);

            (
                inner.session.session_id.clone(),
                inner.session.language,
                outgoing,
            )
        };

        let request = WebhookRequest::send_message(dispatched_session.clone(), outgoing, language);
        let result = self.client.post(&request).await;

        let mut inner = self.inner.write().await;
        if inner.session.session_id != dispatched_session {
            debug!("discarding webhook response for stale session {dispatched_session}");
            return SendOutcome::Sent;
        }

        match result {
            Ok(response) => Self::apply_reply(&mut inner, response),
            Err(err) => {
                error!(error = %err, "webhook send failed");
                Self::apply_failure(&mut inner, &err);
            }
        }
        SendOutcome::Sent
    }

    fn apply_reply(inner: &mut Inner, response: WebhookResponse) {
        if let Some(banner) = response.reply_greeting().map(str::to_string) {
            inner.session.banner_text = Some(banner);
        }

        let t = Translations::for_language(inner.session.language);
        let text = response
            .output
            .unwrap_or_else(|| t.processing_error.to_string());

        inner.session.mark_last_user_read();
        inner.session.push_message(Message::bot(text));
        inner.session.typing = false;
        inner.machine.handle_event(SessionEvent::ResponseReceived);
    }

    fn apply_failure(inner: &mut Inner, err: &WebhookError) {
        let t = Translations::for_language(inner.session.language);
        inner.session.push_message(Message::bot(t.error_message));
        inner.session.typing = false;
        inner.machine.handle_event(SessionEvent::RequestFailed {
            error: err.to_string(),
        });
    }

    /// Start a fresh conversation: notify the webhook, wipe the
    /// session, rotate the session id and broadcast the reset.
    ///
    /// An in-flight request is abandoned, not cancelled; its eventual
    /// response fails the session-id check and is dropped.
    pub async fn reset(&self) {
        let old_session = self.inner.read().await.session.session_id.clone();
        if let Err(err) = self.client.post(&WebhookRequest::reset(old_session)).await {
            warn!(error = %err, "webhook reset failed");
        }

        let session_id = {
            let mut inner = self.inner.write().await;
            inner.session.clear_conversation();
            inner.session.rotate_session_id();
            inner.machine.handle_event(SessionEvent::ResetRequested);
            inner.first_visit_sent = false;
            inner.session.session_id.clone()
        };

        let _ = self.reset_tx.send(ResetEvent { session_id });
    }

    /// Wipe the conversation locally without touching the webhook or
    /// the session id.
    pub async fn clear_history(&self) {
        let session_id = {
            let mut inner = self.inner.write().await;
            inner.session.clear_conversation();
            inner.session.session_id.clone()
        };

        let _ = self.reset_tx.send(ResetEvent { session_id });
    }

    /// Switch language: persists the choice and clears the
    /// conversation. The session id is kept unless the configuration
    /// asks for full reset semantics.
    pub async fn change_language(&self, language: Language) -> Result<()> {
        {
            let mut inner = self.inner.write().await;
            inner.session.language = language;
            inner.session.clear_conversation();
            if self.config.language_change_rotates_session {
                inner.session.rotate_session_id();
                inner.machine.handle_event(SessionEvent::ResetRequested);
                inner.first_visit_sent = false;
            }
        }

        if let Some(store) = &self.store {
            store.save(language).await?;
        }
        Ok(())
    }

    /// Switch between the chat and settings panels. Never affects the
    /// pending flag.
    pub async fn switch_view(&self, mode: ViewMode) {
        self.inner.write().await.session.view_mode = mode;
    }

    /// Dismiss the server-pushed banner.
    pub async fn dismiss_banner(&self) {
        self.inner.write().await.session.banner_text = None;
    }

    /// Hide the typing indicator without waiting for the response.
    pub async fn stop_generating(&self) {
        self.inner.write().await.session.typing = false;
    }

    /// Replace the composer draft, truncated to the configured limit.
    pub async fn set_composer(&self, text: &str) {
        let mut inner = self.inner.write().await;
        inner.session.composer = text.chars().take(self.config.max_composer_len).collect();
    }

    pub async fn composer(&self) -> String {
        self.inner.read().await.session.composer.clone()
    }

    /// Apply a speech recognition result. Final transcripts are
    /// appended to the composer; interim ones are display-only.
    pub async fn apply_transcript(&self, event: TranscriptEvent) {
        if let TranscriptEvent::Final(text) = event {
            let mut inner = self.inner.write().await;
            inner.session.composer.push_str(&text);
            if inner.session.composer.chars().count() > self.config.max_composer_len {
                inner.session.composer = inner
                    .session
                    .composer
                    .chars()
                    .take(self.config.max_composer_len)
                    .collect();
            }
        }
    }

    /// Render the conversation as a downloadable transcript.
    pub async fn transcript(&self) -> String {
        let inner = self.inner.read().await;
        render_transcript(&inner.session.messages)
    }

    /// File name for a transcript downloaded now.
    pub fn transcript_filename(&self) -> String {
        chat_core::transcript_filename(Local::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex as StdMutex;

    use async_trait::async_trait;
    use chat_core::{DeliveryState, MessageAuthor};
    use tokio::sync::Semaphore;
    use webhook_client::WebhookAction;

    enum Scripted {
        Reply(WebhookResponse),
        Fail(u16),
    }

    /// Test double that records requests and replays scripted
    /// responses; an empty script answers with an empty response.
    struct ScriptedClient {
        responses: StdMutex<VecDeque<Scripted>>,
        requests: StdMutex<Vec<WebhookRequest>>,
    }

    impl ScriptedClient {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                responses: StdMutex::new(VecDeque::new()),
                requests: StdMutex::new(Vec::new()),
            })
        }

        fn push_output(&self, text: &str) {
            self.push_response(WebhookResponse {
                output: Some(text.to_string()),
                ..WebhookResponse::default()
            });
        }

        fn push_response(&self, response: WebhookResponse) {
            self.responses
                .lock()
                .unwrap()
                .push_back(Scripted::Reply(response));
        }

        fn push_failure(&self, status: u16) {
            self.responses
                .lock()
                .unwrap()
                .push_back(Scripted::Fail(status));
        }

        fn requests(&self) -> Vec<WebhookRequest> {
            self.requests.lock().unwrap().clone()
        }

        fn requests_with_action(&self, action: WebhookAction) -> Vec<WebhookRequest> {
            self.requests()
                .into_iter()
                .filter(|r| r.action == action)
                .collect()
        }
    }

    #[async_trait]
    impl WebhookClientTrait for ScriptedClient {
        async fn post(&self, request: &WebhookRequest) -> webhook_client::Result<WebhookResponse> {
            self.requests.lock().unwrap().push(request.clone());
            match self.responses.lock().unwrap().pop_front() {
                Some(Scripted::Reply(response)) => Ok(response),
                Some(Scripted::Fail(status)) => Err(WebhookError::Status(
                    reqwest::StatusCode::from_u16(status).unwrap(),
                )),
                None => Ok(WebhookResponse::default()),
            }
        }
    }

    /// Test double whose `sendMessage` posts block until released, so
    /// tests can observe the pending window.
    struct GatedClient {
        entered: Semaphore,
        release: Semaphore,
        requests: StdMutex<Vec<WebhookRequest>>,
    }

    impl GatedClient {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                entered: Semaphore::new(0),
                release: Semaphore::new(0),
                requests: StdMutex::new(Vec::new()),
            })
        }

        async fn wait_for_send(&self) {
            self.entered.acquire().await.unwrap().forget();
        }

        fn release_send(&self) {
            self.release.add_permits(1);
        }

        fn send_message_count(&self) -> usize {
            self.requests
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.action == WebhookAction::SendMessage)
                .count()
        }
    }

    #[async_trait]
    impl WebhookClientTrait for GatedClient {
        async fn post(&self, request: &WebhookRequest) -> webhook_client::Result<WebhookResponse> {
            self.requests.lock().unwrap().push(request.clone());
            if request.action == WebhookAction::SendMessage {
                self.entered.add_permits(1);
                self.release.acquire().await.unwrap().forget();
            }
            Ok(WebhookResponse::default())
        }
    }

    fn controller_with(client: Arc<dyn WebhookClientTrait>) -> ChatController {
        ChatController::new(client, WidgetConfig::with_webhook_url("http://unused"))
    }

    #[tokio::test]
    async fn test_send_appends_user_and_bot_message() {
        let client = ScriptedClient::new();
        client.push_output("Hallo!");
        let controller = controller_with(client.clone());

        let outcome = controller.send("Hei").await;
        assert_eq!(outcome, SendOutcome::Sent);

        let session = controller.session().await;
        assert_eq!(session.messages.len(), 2);
        assert_eq!(session.messages[0].author, MessageAuthor::User);
        assert_eq!(session.messages[0].text, "Hei");
        assert_eq!(session.messages[0].delivery_state, DeliveryState::Read);
        assert_eq!(session.messages[1].author, MessageAuthor::Bot);
        assert_eq!(session.messages[1].text, "Hallo!");
        assert!(!session.typing);
        assert!(!controller.is_pending().await);
    }

    #[tokio::test]
    async fn test_blank_send_is_ignored() {
        let client = ScriptedClient::new();
        let controller = controller_with(client.clone());

        assert_eq!(controller.send("   ").await, SendOutcome::IgnoredBlank);
        assert_eq!(controller.send("").await, SendOutcome::IgnoredBlank);

        assert!(client.requests().is_empty());
        assert!(controller.session().await.messages.is_empty());
    }

    #[tokio::test]
    async fn test_second_send_while_pending_is_ignored() {
        let client = GatedClient::new();
        let controller = Arc::new(controller_with(client.clone()));

        let background = controller.clone();
        let handle = tokio::spawn(async move { background.send("first").await });
        client.wait_for_send().await;

        assert!(controller.is_pending().await);
        assert_eq!(
            controller.send("second").await,
            SendOutcome::IgnoredPending
        );

        client.release_send();
        assert_eq!(handle.await.unwrap(), SendOutcome::Sent);

        // Only one outbound request despite two send calls.
        assert_eq!(client.send_message_count(), 1);
        let session = controller.session().await;
        assert_eq!(session.messages.len(), 2);
    }

    #[tokio::test]
    async fn test_preprocessing_rewrites_outgoing_text_only() {
        let client = ScriptedClient::new();
        client.push_output("Svar");
        let controller = controller_with(client.clone());

        controller.send("Hva er ÅPNINGSTIDER?").await;

        let sent = client.requests_with_action(WebhookAction::SendMessage);
        assert_eq!(
            sent[0].chat_input.as_deref(),
            Some("Hva er åpningstidene deres?")
        );
        // The stored message keeps the user's original wording.
        let session = controller.session().await;
        assert_eq!(session.messages[0].text, "Hva er ÅPNINGSTIDER?");
    }

    #[tokio::test]
    async fn test_unmatched_text_passes_through() {
        let client = ScriptedClient::new();
        client.push_output("Svar");
        let controller = controller_with(client.clone());

        controller.send("tell me a joke").await;

        let sent = client.requests_with_action(WebhookAction::SendMessage);
        assert_eq!(sent[0].chat_input.as_deref(), Some("tell me a joke"));
    }

    #[tokio::test]
    async fn test_missing_output_falls_back_to_processing_error() {
        let client = ScriptedClient::new();
        client.push_response(WebhookResponse::default());
        let controller = controller_with(client.clone());

        controller.send("Hei").await;

        let session = controller.session().await;
        let expected = Translations::for_language(Language::No).processing_error;
        assert_eq!(session.messages[1].text, expected);
    }

    #[tokio::test]
    async fn test_transport_failure_appends_error_message() {
        let client = ScriptedClient::new();
        client.push_failure(503);
        let controller = controller_with(client.clone());

        controller.send("Hei").await;

        let session = controller.session().await;
        assert_eq!(session.messages.len(), 2);
        let expected = Translations::for_language(Language::No).error_message;
        assert_eq!(session.messages[1].text, expected);
        assert!(!controller.is_pending().await);
    }

    #[tokio::test]
    async fn test_push_greeting_on_reply_sets_banner() {
        let client = ScriptedClient::new();
        client.push_response(WebhookResponse {
            output: Some("Svar".to_string()),
            response_type: Some("pushGreeting".to_string()),
            push_message: Some("Sommertilbud!".to_string()),
        });
        let controller = controller_with(client.clone());

        controller.send("Hei").await;

        let session = controller.session().await;
        assert_eq!(session.banner_text.as_deref(), Some("Sommertilbud!"));
        assert_eq!(session.messages[1].text, "Svar");
    }

    #[tokio::test]
    async fn test_first_visit_fires_once_and_sets_banner() {
        let client = ScriptedClient::new();
        client.push_response(WebhookResponse {
            output: Some("Velkommen!".to_string()),
            response_type: Some("pushGreeting".to_string()),
            push_message: None,
        });
        let controller = controller_with(client.clone());

        controller.open().await;
        controller.open().await;

        let visits = client.requests_with_action(WebhookAction::FirstVisit);
        assert_eq!(visits.len(), 1);
        let session = controller.session().await;
        assert_eq!(session.banner_text.as_deref(), Some("Velkommen!"));
    }

    #[tokio::test]
    async fn test_first_visit_skipped_with_nonempty_log() {
        let client = ScriptedClient::new();
        client.push_output("Hallo");
        let controller = controller_with(client.clone());

        controller.send("Hei").await;
        controller.open().await;

        assert!(client
            .requests_with_action(WebhookAction::FirstVisit)
            .is_empty());
    }

    #[tokio::test]
    async fn test_first_visit_failure_is_swallowed() {
        let client = ScriptedClient::new();
        client.push_failure(500);
        let controller = controller_with(client.clone());

        controller.open().await;

        let session = controller.session().await;
        assert!(session.banner_text.is_none());
        assert!(session.messages.is_empty());
    }

    #[tokio::test]
    async fn test_reset_clears_state_and_rotates_session() {
        let client = ScriptedClient::new();
        client.push_output("Hallo");
        let controller = controller_with(client.clone());
        let mut resets = controller.subscribe_reset();

        controller.send("Hei").await;
        controller.switch_view(ViewMode::Settings).await;
        let before = controller.session().await.session_id.clone();

        controller.reset().await;

        let session = controller.session().await;
        assert!(session.messages.is_empty());
        assert!(session.banner_text.is_none());
        assert_eq!(session.view_mode, ViewMode::Chat);
        assert_ne!(session.session_id, before);

        // The webhook was told about the old session.
        let reset_requests = client.requests_with_action(WebhookAction::Reset);
        assert_eq!(reset_requests.len(), 1);
        assert_eq!(reset_requests[0].session_id, before);

        // Subscribers observe exactly one event, carrying the new id.
        let event = resets.try_recv().unwrap();
        assert_eq!(event.session_id, session.session_id);
        assert!(resets.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_reset_webhook_failure_still_clears() {
        let client = ScriptedClient::new();
        client.push_output("Hallo");
        let controller = controller_with(client.clone());

        controller.send("Hei").await;
        client.push_failure(500);
        controller.reset().await;

        assert!(controller.session().await.messages.is_empty());
    }

    #[tokio::test]
    async fn test_first_visit_fires_again_after_reset() {
        let client = ScriptedClient::new();
        let controller = controller_with(client.clone());

        controller.open().await;
        controller.reset().await;
        controller.open().await;

        let visits = client.requests_with_action(WebhookAction::FirstVisit);
        assert_eq!(visits.len(), 2);
        assert_ne!(visits[0].session_id, visits[1].session_id);
    }

    #[tokio::test]
    async fn test_clear_history_preserves_session_id() {
        let client = ScriptedClient::new();
        client.push_output("Hallo");
        let controller = controller_with(client.clone());
        let mut resets = controller.subscribe_reset();

        controller.send("Hei").await;
        let before = controller.session().await.session_id.clone();

        controller.clear_history().await;

        let session = controller.session().await;
        assert!(session.messages.is_empty());
        assert_eq!(session.session_id, before);
        // No webhook call for a local clear.
        assert!(client
            .requests_with_action(WebhookAction::Reset)
            .is_empty());
        // The privacy notice still re-shows.
        assert!(resets.try_recv().is_ok());
    }

    #[tokio::test]
    async fn test_stale_response_after_reset_is_discarded() {
        let client = GatedClient::new();
        let controller = Arc::new(controller_with(client.clone()));

        let background = controller.clone();
        let handle = tokio::spawn(async move { background.send("Hei").await });
        client.wait_for_send().await;

        controller.reset().await;
        client.release_send();
        handle.await.unwrap();

        // The late response must not touch the new session.
        let session = controller.session().await;
        assert!(session.messages.is_empty());
        assert!(!controller.is_pending().await);
    }

    #[tokio::test]
    async fn test_change_language_clears_but_keeps_session_id() {
        let client = ScriptedClient::new();
        client.push_output("Hallo");
        let controller = controller_with(client.clone());

        controller.send("Hei").await;
        let before = controller.session().await.session_id.clone();

        controller.change_language(Language::En).await.unwrap();

        let session = controller.session().await;
        assert_eq!(session.language, Language::En);
        assert!(session.messages.is_empty());
        assert_eq!(session.session_id, before);
        assert_eq!(session.view_mode, ViewMode::Chat);
    }

    #[tokio::test]
    async fn test_change_language_can_rotate_session() {
        let client = ScriptedClient::new();
        let mut config = WidgetConfig::with_webhook_url("http://unused");
        config.language_change_rotates_session = true;
        let controller = ChatController::new(client.clone(), config);

        let before = controller.session().await.session_id.clone();
        controller.change_language(Language::En).await.unwrap();

        assert_ne!(controller.session().await.session_id, before);
    }

    #[tokio::test]
    async fn test_error_message_follows_current_language() {
        let client = ScriptedClient::new();
        client.push_failure(500);
        let controller = controller_with(client.clone());
        controller.change_language(Language::En).await.unwrap();

        controller.send("Hello").await;

        let session = controller.session().await;
        let expected = Translations::for_language(Language::En).error_message;
        assert_eq!(session.messages[1].text, expected);
    }

    #[tokio::test]
    async fn test_language_persists_through_store() {
        let dir = tempfile::tempdir().unwrap();
        let store: Arc<dyn LanguageStore> = Arc::new(crate::storage::FileLanguageStore::new(
            dir.path().join("language.json"),
        ));

        let client = ScriptedClient::new();
        let controller = ChatController::with_store(
            client.clone(),
            WidgetConfig::with_webhook_url("http://unused"),
            store.clone(),
        )
        .await;
        controller.change_language(Language::En).await.unwrap();

        // A fresh controller picks up the stored choice.
        let controller = ChatController::with_store(
            ScriptedClient::new(),
            WidgetConfig::with_webhook_url("http://unused"),
            store,
        )
        .await;
        assert_eq!(controller.session().await.language, Language::En);
    }

    #[tokio::test]
    async fn test_switch_view_does_not_affect_pending() {
        let client = GatedClient::new();
        let controller = Arc::new(controller_with(client.clone()));

        let background = controller.clone();
        let handle = tokio::spawn(async move { background.send("Hei").await });
        client.wait_for_send().await;

        controller.switch_view(ViewMode::Settings).await;
        assert!(controller.is_pending().await);
        assert_eq!(controller.session().await.view_mode, ViewMode::Settings);

        client.release_send();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_dismiss_banner() {
        let client = ScriptedClient::new();
        client.push_response(WebhookResponse {
            output: Some("Velkommen!".to_string()),
            response_type: Some("pushGreeting".to_string()),
            push_message: None,
        });
        let controller = controller_with(client.clone());

        controller.open().await;
        assert!(controller.session().await.banner_text.is_some());

        controller.dismiss_banner().await;
        assert!(controller.session().await.banner_text.is_none());
    }

    #[tokio::test]
    async fn test_composer_is_cleared_on_send_and_truncated() {
        let client = ScriptedClient::new();
        client.push_output("Svar");
        let controller = controller_with(client.clone());

        controller.set_composer("Hei der").await;
        assert_eq!(controller.composer().await, "Hei der");

        controller.send("Hei der").await;
        assert_eq!(controller.composer().await, "");

        let long = "x".repeat(400);
        controller.set_composer(&long).await;
        assert_eq!(controller.composer().await.chars().count(), 300);
    }

    #[tokio::test]
    async fn test_final_transcripts_append_to_composer() {
        let client = ScriptedClient::new();
        let controller = controller_with(client.clone());

        controller.set_composer("Hei ").await;
        controller
            .apply_transcript(TranscriptEvent::Interim("ver".to_string()))
            .await;
        assert_eq!(controller.composer().await, "Hei ");

        controller
            .apply_transcript(TranscriptEvent::Final("verden".to_string()))
            .await;
        assert_eq!(controller.composer().await, "Hei verden");
    }

    #[tokio::test]
    async fn test_transcript_export() {
        let client = ScriptedClient::new();
        client.push_output("Hallo");
        let controller = controller_with(client.clone());

        controller.send("Hei").await;

        let transcript = controller.transcript().await;
        let entries: Vec<&str> = transcript.split("\n\n").collect();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].starts_with("Du ("));
        assert!(entries[0].ends_with("): Hei"));
        assert!(entries[1].starts_with("Skyon AI ("));
        assert!(entries[1].ends_with("): Hallo"));

        assert!(controller.transcript_filename().starts_with("skyon-chat-"));
    }

    #[tokio::test]
    async fn test_typing_indicator_lifecycle() {
        let client = GatedClient::new();
        let controller = Arc::new(controller_with(client.clone()));

        let background = controller.clone();
        let handle = tokio::spawn(async move { background.send("Hei").await });
        client.wait_for_send().await;

        assert!(controller.session().await.typing);
        controller.stop_generating().await;
        assert!(!controller.session().await.typing);

        client.release_send();
        handle.await.unwrap();
        assert!(!controller.session().await.typing);
    }
}
