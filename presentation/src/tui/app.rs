//! TUI application: main loop
//!
//! ```text
//! TuiApp (select! loop)
//!   ├─ crossterm EventStream ── map_key ── FormState::apply ──┐
//!   └─ tick_interval (notice expiry)                          │
//!                                                             v
//!                          FormEffect ── SessionController (awaited in place,
//!                                        input swallowed until it resolves)
//! ```

use super::keys::map_key;
use super::state::{FormEffect, FormState};
use super::widgets::{
    FormLayout, help::HelpWidget, result_pane::ResultPaneWidget, sidebar::SidebarWidget,
    status_bar::StatusBarWidget,
};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::{Stream, StreamExt};
use jobscout_application::{CredentialOutcome, CredentialPolicy, SessionController, SessionView};
use jobscout_domain::Notice;
use ratatui::{Frame, Terminal, backend::Backend, backend::CrosstermBackend};
use std::future::Future;
use std::io;
use std::time::Duration;
use tracing::{debug, info};

const NOTICE_TTL: Duration = Duration::from_secs(8);

/// The interactive form for one session
pub struct TuiApp {
    controller: SessionController,
    state: FormState,
    model: String,
}

impl TuiApp {
    pub fn new(controller: SessionController, model: impl Into<String>) -> Self {
        Self {
            controller,
            state: FormState::new(),
            model: model.into(),
        }
    }

    /// Run the TUI main loop until the user quits
    pub async fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        info!(policy = %self.controller.credential_policy(), "Form opened");
        let result = self.event_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let mut events = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        loop {
            self.draw(terminal)?;

            if self.state.should_quit {
                break;
            }

            tokio::select! {
                Some(Ok(event)) = events.next() => {
                    if let Some(effect) = self.handle_event(event) {
                        self.perform(effect, terminal, &mut events).await?;
                    }
                }

                _ = tick.tick() => {
                    self.state.expire_notice(NOTICE_TTL);
                }
            }
        }

        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let view = self.controller.view();
        let policy = self.controller.credential_policy();
        self.state.sync_focus(&view, policy);

        let state = &self.state;
        let model = self.model.as_str();
        terminal.draw(|frame| render(frame, state, &view, policy, model))?;
        Ok(())
    }

    /// Translate a terminal event into form changes
    fn handle_event(&mut self, event: Event) -> Option<FormEffect> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let action = map_key(key, self.state.focus, self.state.show_help);
        let view = self.controller.view();
        self.state
            .apply(action, &view, self.controller.credential_policy())
    }

    /// Run one effect against the controller while no input is processed
    async fn perform<B, S>(
        &mut self,
        effect: FormEffect,
        terminal: &mut Terminal<B>,
        events: &mut S,
    ) -> io::Result<()>
    where
        B: Backend,
        S: Stream + Unpin,
    {
        match effect {
            FormEffect::Select(category) => {
                if self.controller.select_category(category) {
                    debug!(category = category.as_str(), "Category selected");
                }
            }
            FormEffect::SubmitCredential(raw) => {
                self.state.set_notice(Notice::info("Checking API key..."));
                self.draw(terminal)?;
                let outcome =
                    swallow_input_while(events, self.controller.submit_credential(&raw)).await;
                match outcome {
                    CredentialOutcome::Rejected(_) => self.state.forget_committed(),
                    _ => self.state.mark_committed(&raw),
                }
            }
            FormEffect::Search => {
                self.state.searching = true;
                self.draw(terminal)?;
                let result = swallow_input_while(events, self.controller.run_search()).await;
                self.state.searching = false;
                if result.is_some() {
                    self.state.scroll = 0;
                }
            }
        }

        if let Some(notice) = self.controller.take_notices().pop() {
            self.state.set_notice(notice);
        }
        Ok(())
    }
}

fn render(
    frame: &mut Frame,
    state: &FormState,
    view: &SessionView,
    policy: CredentialPolicy,
    model: &str,
) {
    let layout = FormLayout::compute(frame.area());

    let sidebar = SidebarWidget::new(state, view, policy, model);
    let cursor = sidebar.cursor_position(layout.sidebar);

    frame.render_widget(sidebar, layout.sidebar);
    frame.render_widget(ResultPaneWidget::new(state, view), layout.result);
    frame.render_widget(StatusBarWidget::new(state, view), layout.status_bar);

    if state.show_help {
        let help_area = FormLayout::centered_overlay(60, 70, frame.area());
        frame.render_widget(HelpWidget, help_area);
    } else if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}

/// Await `work` while draining and dropping every event from `events`
async fn swallow_input_while<S, F>(events: &mut S, work: F) -> F::Output
where
    S: Stream + Unpin,
    F: Future,
{
    tokio::pin!(work);
    let mut input_open = true;
    loop {
        tokio::select! {
            output = &mut work => return output,
            event = events.next(), if input_open => {
                if event.is_none() {
                    input_open = false;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::Focus;
    use async_trait::async_trait;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use jobscout_application::{
        CredentialStore, GatewayError, GenerateRequest, LlmClient, LlmGateway, ResultCache,
        SearchClient,
    };
    use jobscout_domain::{Credential, JobCategory, Model, RegatePolicy};
    use ratatui::backend::TestBackend;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct TableClient;

    #[async_trait]
    impl LlmClient for TableClient {
        async fn generate(&self, request: &GenerateRequest) -> Result<String, GatewayError> {
            Ok(format!("| prompt chars | {} |", request.prompt.chars().count()))
        }
    }

    /// Accepts keys starting with "AIza"
    struct PrefixGateway {
        connects: AtomicUsize,
    }

    #[async_trait]
    impl LlmGateway for PrefixGateway {
        async fn connect(
            &self,
            credential: &Credential,
        ) -> Result<Box<dyn LlmClient>, GatewayError> {
            self.connects.fetch_add(1, Ordering::SeqCst);
            if credential.expose().starts_with("AIza") {
                Ok(Box::new(TableClient))
            } else {
                Err(GatewayError::Unauthorized("HTTP 400: API key not valid".into()))
            }
        }
    }

    fn app(policy: CredentialPolicy) -> (TuiApp, Arc<PrefixGateway>) {
        let gateway = Arc::new(PrefixGateway {
            connects: AtomicUsize::new(0),
        });
        let store = CredentialStore::new(gateway.clone(), policy);
        let controller = SessionController::new(
            store,
            Arc::new(ResultCache::new()),
            SearchClient::new(Model::default()),
            RegatePolicy::Strict,
        );
        (TuiApp::new(controller, "gemini-2.5-flash"), gateway)
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    async fn feed(app: &mut TuiApp, terminal: &mut Terminal<TestBackend>, events: Vec<Event>) {
        let mut idle = futures::stream::empty::<()>();
        for event in events {
            if let Some(effect) = app.handle_event(event) {
                app.perform(effect, terminal, &mut idle).await.unwrap();
            }
            app.draw(terminal).unwrap();
        }
    }

    fn type_text(text: &str) -> Vec<Event> {
        text.chars().map(|c| press(KeyCode::Char(c))).collect()
    }

    #[tokio::test]
    async fn test_confirm_then_search_flow() {
        let (mut app, gateway) = app(CredentialPolicy::ExplicitConfirm);
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();

        feed(&mut app, &mut terminal, type_text("AIza-good-key")).await;
        assert_eq!(gateway.connects.load(Ordering::SeqCst), 0);
        assert!(!app.controller.is_ready());

        // Enter → Confirm, Enter → submit
        feed(
            &mut app,
            &mut terminal,
            vec![press(KeyCode::Enter), press(KeyCode::Enter)],
        )
        .await;
        assert_eq!(gateway.connects.load(Ordering::SeqCst), 1);
        assert!(app.controller.is_ready());

        // Tab → Category, Down → Teacher, Tab → Search, Enter → run
        feed(
            &mut app,
            &mut terminal,
            vec![
                press(KeyCode::Tab),
                press(KeyCode::Down),
                press(KeyCode::Tab),
                press(KeyCode::Enter),
            ],
        )
        .await;
        assert_eq!(app.controller.selected(), JobCategory::Teacher);
        let view = app.controller.view();
        assert!(view.result.is_some());
        assert!(!app.state.searching);
    }

    #[tokio::test]
    async fn test_memoized_commit_on_focus_leave() {
        let (mut app, gateway) = app(CredentialPolicy::Memoized);
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();

        // The field is the only control until the key is accepted
        let mut events = type_text("AIza-key");
        events.push(press(KeyCode::Tab));
        feed(&mut app, &mut terminal, events).await;
        assert!(app.controller.is_ready());
        assert_eq!(app.state.focus, Focus::Credential);

        // Out, back in and out again without changes: no reconnect
        feed(
            &mut app,
            &mut terminal,
            vec![
                press(KeyCode::Tab),
                press(KeyCode::BackTab),
                press(KeyCode::Tab),
            ],
        )
        .await;
        assert_eq!(app.state.focus, Focus::Category);
        assert_eq!(gateway.connects.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_rejected_key_notice_and_regate() {
        let (mut app, _gateway) = app(CredentialPolicy::ExplicitConfirm);
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();

        let mut events = type_text("wrong");
        events.push(press(KeyCode::Tab));
        events.push(press(KeyCode::Enter));
        feed(&mut app, &mut terminal, events).await;

        assert!(!app.controller.is_ready());
        let (notice, _) = app.state.notice.as_ref().unwrap();
        assert!(notice.is_error());
        assert!(notice.message.contains("API key not valid"));
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let (mut app, _gateway) = app(CredentialPolicy::ExplicitConfirm);
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.handle_event(ctrl_c).is_none());
        assert!(app.state.should_quit);
    }

    #[tokio::test]
    async fn test_swallow_input_while_drains_events() {
        let mut events = futures::stream::iter(vec![1, 2, 3]);
        let output = swallow_input_while(&mut events, async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            42
        })
        .await;

        assert_eq!(output, 42);
        assert!(events.next().await.is_none());
    }
}
