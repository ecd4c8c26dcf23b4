//! Application state and core logic

use crate::config::IntakeConfig;
use crate::state::{AppState, Choice, FieldName};
use crate::webhook::{WebhookClient, WebhookError, WebhookResponse, WebhookTransport};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::mpsc;

type SubmissionResult = Result<WebhookResponse, WebhookError>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Transport used to deliver leads
    webhook: Arc<dyn WebhookTransport>,
    /// Results of in-flight submissions, fed back into the state each tick
    submission_tx: mpsc::UnboundedSender<SubmissionResult>,
    submission_rx: mpsc::UnboundedReceiver<SubmissionResult>,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
}

impl App {
    /// Create a new App posting to the configured webhook
    pub fn new(config: &IntakeConfig) -> Result<Self> {
        let url = config.resolved_webhook_url();
        if url.is_empty() {
            tracing::warn!("No webhook URL configured; submissions will fail");
        } else {
            tracing::info!("Using webhook {url}");
        }
        let client = WebhookClient::new(url.clone())?;
        let mut app = Self::with_transport(url, Arc::new(client));
        app.apply_prefill(&config.prefill);
        Ok(app)
    }

    /// Create an App with an explicit transport
    pub fn with_transport(webhook_url: String, webhook: Arc<dyn WebhookTransport>) -> Self {
        let (submission_tx, submission_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(webhook_url),
            webhook,
            submission_tx,
            submission_rx,
            quit: false,
            copy_message: None,
        }
    }

    /// Seed the form from configured values; bad entries are skipped
    pub fn apply_prefill(&mut self, values: &BTreeMap<String, String>) {
        for (key, value) in values {
            let applied = key
                .parse::<FieldName>()
                .and_then(|field| self.state.set_field(field, value));
            if let Err(e) = applied {
                tracing::warn!("Ignoring prefill entry: {e}");
            }
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Request the main loop to exit
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// True while a request is in flight
    pub fn is_submitting(&self) -> bool {
        self.state.status().is_loading()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Clear any status messages on key press
        self.copy_message = None;

        let on_choice = self
            .state
            .form()
            .active_field_name()
            .is_some_and(|f| f.is_choice());
        let on_submit = self.state.form().is_submit_active();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('y')
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | crate::platform::COPY_MODIFIER) =>
            {
                self.copy_last_response()
            }
            KeyCode::Tab | KeyCode::Down => self.state.next_form_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_field(),
            KeyCode::Left if on_choice => self.state.cycle_active_choice(false),
            KeyCode::Right | KeyCode::Char(' ') if on_choice => {
                self.state.cycle_active_choice(true)
            }
            KeyCode::Enter if on_submit => self.submit(),
            KeyCode::Enter => {
                // Enter in the notes field adds a newline, elsewhere it advances
                if !self.state.form_newline() {
                    self.state.next_form_field();
                }
            }
            KeyCode::Char(c) if !ctrl => self.state.form_input_char(c),
            KeyCode::Backspace => self.state.form_backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Validate and, when valid, send the lead in the background
    pub fn submit(&mut self) {
        let Some(payload) = self.state.begin_submission() else {
            return;
        };

        tracing::info!(
            "Submitting lead for {} ({})",
            payload.zip,
            payload.service_requested.label()
        );

        let webhook = Arc::clone(&self.webhook);
        let tx = self.submission_tx.clone();
        tokio::spawn(async move {
            let result = webhook.post_lead(&payload).await;
            // Receiver only disappears when the app is shutting down
            let _ = tx.send(result);
        });
    }

    /// Apply any finished submission. Called once per event-loop tick.
    pub fn poll_submission(&mut self) {
        while let Ok(result) = self.submission_rx.try_recv() {
            self.state.finish_submission(result);
        }
    }

    #[cfg(test)]
    async fn wait_for_submission(&mut self) {
        if let Some(result) = self.submission_rx.recv().await {
            self.state.finish_submission(result);
        }
    }

    /// Copy the last response (pretty JSON) to the clipboard
    fn copy_last_response(&mut self) {
        let Some(response) = self.state.last_response() else {
            self.copy_message = Some("Nothing to copy yet".to_string());
            return;
        };
        let text = serde_json::to_string_pretty(response).unwrap_or_else(|_| response.to_string());

        match copy_to_clipboard(&text) {
            Ok(()) => self.copy_message = Some("Copied last response".to_string()),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {e:#}");
                self.copy_message = Some("Copy failed".to_string());
            }
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{
        PreferredContact, PreferredTime, ServiceRequested, SubmissionStatus, FULL_NAME_REQUIRED,
        SUCCESS_MESSAGE,
    };
    use crate::webhook::MockWebhookTransport;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn app_with(transport: MockWebhookTransport) -> App {
        App::with_transport("http://hooks.test/lead".to_string(), Arc::new(transport))
    }

    fn unused_transport() -> MockWebhookTransport {
        let mut transport = MockWebhookTransport::new();
        transport.expect_post_lead().times(0);
        transport
    }

    /// Fill name, zip and email through the keyboard, leaving focus on phone
    fn fill_required(app: &mut App) {
        type_text(app, "Sam Demo");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_text(app, "17110");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_text(app, "sam@example.com");
        app.handle_key(key(KeyCode::Tab)).unwrap();
    }

    mod keys {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_should_quit_initially_false() {
            let mut app = app_with(unused_transport());
            assert!(!app.should_quit());
            app.request_quit();
            assert!(app.should_quit());
        }

        #[test]
        fn test_typing_goes_to_focused_field() {
            let mut app = app_with(unused_transport());
            fill_required(&mut app);
            assert_eq!(app.state.form().full_name, "Sam Demo");
            assert_eq!(app.state.form().zip, "17110");
            assert_eq!(app.state.form().email, "sam@example.com");
            assert_eq!(app.state.form().active_field_name(), Some(FieldName::Phone));
            assert!(app.state.validation().is_valid());
        }

        #[test]
        fn test_backspace() {
            let mut app = app_with(unused_transport());
            type_text(&mut app, "Sam");
            app.handle_key(key(KeyCode::Backspace)).unwrap();
            assert_eq!(app.state.form().full_name, "Sa");
        }

        #[test]
        fn test_up_down_navigation() {
            let mut app = app_with(unused_transport());
            app.handle_key(key(KeyCode::Down)).unwrap();
            assert_eq!(app.state.form().active_field_name(), Some(FieldName::Zip));
            app.handle_key(key(KeyCode::Up)).unwrap();
            app.handle_key(key(KeyCode::BackTab)).unwrap();
            assert!(app.state.form().is_submit_active());
        }

        #[test]
        fn test_choice_cycling() {
            let mut app = app_with(unused_transport());
            for _ in 0..7 {
                app.handle_key(key(KeyCode::Tab)).unwrap();
            }
            assert_eq!(
                app.state.form().active_field_name(),
                Some(FieldName::ServiceRequested)
            );
            app.handle_key(key(KeyCode::Right)).unwrap();
            assert_eq!(app.state.form().service_requested, ServiceRequested::Kitchen);
            app.handle_key(key(KeyCode::Char(' '))).unwrap();
            assert_eq!(app.state.form().service_requested, ServiceRequested::Windows);
            app.handle_key(key(KeyCode::Left)).unwrap();
            app.handle_key(key(KeyCode::Left)).unwrap();
            app.handle_key(key(KeyCode::Left)).unwrap();
            assert_eq!(app.state.form().service_requested, ServiceRequested::Other);
        }

        #[test]
        fn test_letters_do_not_change_choice() {
            let mut app = app_with(unused_transport());
            for _ in 0..6 {
                app.handle_key(key(KeyCode::Tab)).unwrap();
            }
            type_text(&mut app, "evening");
            assert_eq!(app.state.form().preferred_time, PreferredTime::Afternoon);
        }

        #[test]
        fn test_enter_in_notes_adds_newline() {
            let mut app = app_with(unused_transport());
            for _ in 0..8 {
                app.handle_key(key(KeyCode::Tab)).unwrap();
            }
            type_text(&mut app, "line one");
            app.handle_key(key(KeyCode::Enter)).unwrap();
            type_text(&mut app, "line two");
            assert_eq!(app.state.form().lead_notes, "line one\nline two");
        }

        #[test]
        fn test_enter_in_single_line_field_advances() {
            let mut app = app_with(unused_transport());
            type_text(&mut app, "Sam");
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.state.form().full_name, "Sam");
            assert_eq!(app.state.form().active_field_name(), Some(FieldName::Zip));
        }

        #[test]
        fn test_ctrl_chars_are_not_typed() {
            let mut app = app_with(unused_transport());
            app.handle_key(ctrl('a')).unwrap();
            assert_eq!(app.state.form().full_name, "");
        }

        #[test]
        fn test_prefill_sets_known_fields() {
            let mut app = app_with(unused_transport());
            let values = BTreeMap::from([
                ("zip".to_string(), "17110".to_string()),
                ("preferredContact".to_string(), "Phone".to_string()),
                ("serviceRequested".to_string(), "Roofing".to_string()),
                ("nickname".to_string(), "Sammy".to_string()),
            ]);
            app.apply_prefill(&values);

            assert_eq!(app.state.form().zip, "17110");
            assert_eq!(app.state.form().preferred_contact, PreferredContact::Phone);
            assert_eq!(app.state.form().service_requested, ServiceRequested::Bathroom);
            assert_eq!(app.state.validation().first_error(), Some(FULL_NAME_REQUIRED));
        }

        #[test]
        fn test_copy_without_response() {
            let mut app = app_with(unused_transport());
            app.handle_key(ctrl('y')).unwrap();
            assert_eq!(app.copy_message.as_deref(), Some("Nothing to copy yet"));

            app.handle_key(key(KeyCode::Char('x'))).unwrap();
            assert!(app.copy_message.is_none());
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_invalid_submit_sets_error_without_request() {
            let mut app = app_with(unused_transport());
            app.handle_key(ctrl('s')).unwrap();
            assert_eq!(
                app.state.status(),
                &SubmissionStatus::Error(FULL_NAME_REQUIRED.to_string())
            );
            assert!(!app.is_submitting());
        }

        #[tokio::test]
        async fn test_submit_button_success_flow() {
            let mut transport = MockWebhookTransport::new();
            transport
                .expect_post_lead()
                .withf(|p| p.full_name == "Sam Demo" && p.zip == "17110")
                .times(1)
                .returning(|_| {
                    Ok(WebhookResponse {
                        status: 200,
                        body: r#"{"ok":true}"#.to_string(),
                    })
                });
            let mut app = app_with(transport);
            fill_required(&mut app);

            // Focus the submit button
            app.handle_key(key(KeyCode::BackTab)).unwrap();
            for _ in 0..7 {
                app.handle_key(key(KeyCode::Tab)).unwrap();
            }
            assert!(app.state.form().is_submit_active());

            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(app.is_submitting());

            app.wait_for_submission().await;
            assert_eq!(
                app.state.status(),
                &SubmissionStatus::Success(SUCCESS_MESSAGE.to_string())
            );
            assert_eq!(app.state.last_response(), Some(&json!({"ok": true})));
            assert_eq!(app.state.form().full_name, "");
            assert_eq!(app.state.form().zip, "");
        }

        #[tokio::test]
        async fn test_resubmit_ignored_while_loading() {
            let mut transport = MockWebhookTransport::new();
            transport.expect_post_lead().times(1).returning(|_| {
                Ok(WebhookResponse {
                    status: 500,
                    body: "server error".to_string(),
                })
            });
            let mut app = app_with(transport);
            fill_required(&mut app);

            app.handle_key(ctrl('s')).unwrap();
            app.handle_key(ctrl('s')).unwrap();
            assert!(app.is_submitting());

            app.wait_for_submission().await;
            assert!(matches!(app.state.status(), SubmissionStatus::Error(m) if m.contains("500")));
            assert_eq!(
                app.state.last_response(),
                Some(&json!({"raw": "server error"}))
            );
            assert_eq!(app.state.form().full_name, "Sam Demo");
        }

        #[tokio::test]
        async fn test_poll_applies_finished_request() {
            let mut transport = MockWebhookTransport::new();
            transport
                .expect_post_lead()
                .times(1)
                .returning(|_| Err(WebhookError("connection refused".to_string())));
            let mut app = app_with(transport);
            fill_required(&mut app);

            app.submit();
            app.poll_submission();

            let mut attempts = 0;
            while app.is_submitting() && attempts < 100 {
                tokio::time::sleep(std::time::Duration::from_millis(5)).await;
                app.poll_submission();
                attempts += 1;
            }

            assert_eq!(
                app.state.status(),
                &SubmissionStatus::Error(
                    "Network error. Check webhook URL, CORS, or internet.".to_string()
                )
            );
            assert_eq!(
                app.state.last_response(),
                Some(&json!({"error": "connection refused"}))
            );
        }
    }
}
