// App state and main event loop.
// Owns the entity service, routes key presses to the form and runs lookups.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;

use crate::error::Result;
use crate::logging::ConsoleLog;
use crate::service::EntityService;
use crate::state::{FormState, LoadingState, Lookup};
use crate::ui;

/// Main application state.
pub struct App {
    /// Cached post/user lookups.
    pub service: EntityService,
    /// Activity messages written by the service.
    pub console: ConsoleLog,
    /// The id entry form.
    pub form: FormState,
    /// API base URL, shown in the header.
    pub api_url: String,
    /// Whether the app should exit.
    pub should_quit: bool,
    /// Id validated on submit, fetched after the loading state is drawn.
    pending_lookup: Option<i64>,
}

impl App {
    pub fn new(service: EntityService, console: ConsoleLog, api_url: impl Into<String>) -> Self {
        Self {
            service,
            console,
            form: FormState::default(),
            api_url: api_url.into(),
            should_quit: false,
            pending_lookup: None,
        }
    }

    /// Main event loop.
    pub async fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;

            if self.pending_lookup.is_some() {
                self.run_pending().await;
                continue;
            }
            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c)
                if key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT =>
            {
                self.form.push_char(c);
            }
            KeyCode::Backspace => self.form.pop_char(),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    /// Validate the input and queue a lookup. Invalid input never reaches the service.
    pub fn submit(&mut self) {
        if self.form.result.is_loading() {
            return;
        }
        if let Some(id) = self.form.parse_id() {
            self.form.result = LoadingState::Loading;
            self.pending_lookup = Some(id);
        }
    }

    /// Run the queued lookup, if any.
    pub async fn run_pending(&mut self) {
        if let Some(id) = self.pending_lookup.take() {
            self.lookup(id).await;
        }
    }

    /// Fetch a post and its author, recording the outcome in the form.
    pub async fn lookup(&mut self, id: i64) {
        self.form.result = match self.fetch_lookup(id).await {
            Ok(lookup) => LoadingState::Loaded(lookup),
            Err(e) => {
                tracing::warn!(id, error = %e, "lookup failed");
                LoadingState::Error(e.to_string())
            }
        };
    }

    async fn fetch_lookup(&mut self, id: i64) -> Result<Lookup> {
        let post = self.service.fetch_post(id).await?;
        let user = self.service.fetch_user(post.user_id).await?;
        Ok(Lookup { post, user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PostieError;
    use crate::logging::ConsoleLevel;
    use crate::testing::{POST_ONE, StubTransport, USER_ONE};
    use std::sync::Arc;

    fn app_with(transport: &Arc<StubTransport>) -> App {
        let console = ConsoleLog::new(50);
        let service = EntityService::new(transport.clone(), Arc::new(console.clone()));
        App::new(service, console, "http://localhost")
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[tokio::test]
    async fn test_non_numeric_input_skips_service() {
        let transport = Arc::new(StubTransport::new());
        let mut app = app_with(&transport);

        type_text(&mut app, "abc");
        press(&mut app, KeyCode::Enter);
        app.run_pending().await;

        assert!(app.form.invalid_input);
        assert!(matches!(app.form.result, LoadingState::Idle));
        assert_eq!(transport.call_count(), 0);
        assert!(app.console.is_empty());
    }

    #[tokio::test]
    async fn test_lookup_fetches_post_then_author() {
        let transport = Arc::new(
            StubTransport::new()
                .respond_with(POST_ONE)
                .respond_with(USER_ONE),
        );
        let mut app = app_with(&transport);

        type_text(&mut app, "1");
        press(&mut app, KeyCode::Enter);
        assert!(app.form.result.is_loading());

        app.run_pending().await;

        let lookup = app.form.result.data().unwrap();
        assert_eq!(lookup.post.title, "Test title!");
        assert_eq!(lookup.byline(), "Posted by: Test user - test@example.com");

        let calls = transport.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].resource, "posts");
        assert_eq!(calls[1].resource, "users");
        assert_eq!(calls[1].param_value("id"), Some("1"));
    }

    #[tokio::test]
    async fn test_failed_lookup_is_shown_not_raised() {
        let transport = Arc::new(
            StubTransport::new().fail_with(PostieError::Other("TEST EXCEPTION!".to_string())),
        );
        let mut app = app_with(&transport);

        type_text(&mut app, "1");
        press(&mut app, KeyCode::Enter);
        app.run_pending().await;

        assert!(matches!(app.form.result, LoadingState::Error(ref msg) if msg == "TEST EXCEPTION!"));
        assert_eq!(app.console.count(ConsoleLevel::Error), 1);
        assert!(!app.should_quit);
    }

    #[tokio::test]
    async fn test_repeat_lookup_uses_cache() {
        let transport = Arc::new(
            StubTransport::new()
                .respond_with(POST_ONE)
                .respond_with(USER_ONE),
        );
        let mut app = app_with(&transport);

        app.lookup(1).await;
        app.lookup(1).await;

        assert!(app.form.result.data().is_some());
        assert_eq!(transport.call_count(), 2);
    }

    #[test]
    fn test_modified_chars_are_not_typed() {
        let transport = Arc::new(StubTransport::new());
        let mut app = app_with(&transport);

        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        app.handle_key(KeyEvent::new(KeyCode::Char('7'), KeyModifiers::NONE));
        app.handle_key(KeyEvent::new(KeyCode::Char('B'), KeyModifiers::SHIFT));

        assert_eq!(app.form.input, "7B");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_keys() {
        let transport = Arc::new(StubTransport::new());
        let mut app = app_with(&transport);

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert!(app.form.input.is_empty());

        let mut app = app_with(&transport);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
