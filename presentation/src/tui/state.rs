//! Form state
//!
//! Everything the form renders that is not session state: the credential
//! draft, focus, the latest notice and scroll position. Session state lives
//! in the `SessionController` and reaches the widgets as a `SessionView`.

use super::keys::FormAction;
use jobscout_application::{CredentialPolicy, SessionView};
use jobscout_domain::{JobCategory, Notice};
use std::time::{Duration, Instant};

/// Focusable controls, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Credential,
    Confirm,
    Category,
    Search,
}

impl Focus {
    /// Controls that accept focus for the given view, in tab order
    pub fn order(view: &SessionView, policy: CredentialPolicy) -> Vec<Focus> {
        let mut order = Vec::with_capacity(4);
        if view.credential_editable {
            order.push(Focus::Credential);
            if policy == CredentialPolicy::ExplicitConfirm {
                order.push(Focus::Confirm);
            }
        }
        if view.selector_enabled {
            order.push(Focus::Category);
        }
        if view.trigger_enabled {
            order.push(Focus::Search);
        }
        order
    }
}

/// Work the app loop must perform against the session controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    SubmitCredential(String),
    Select(JobCategory),
    Search,
}

/// Central form state, owned by the TuiApp loop
#[derive(Debug, Default)]
pub struct FormState {
    pub focus: Focus,

    // -- Credential field --
    pub credential_draft: String,
    pub cursor: usize,
    /// Last draft the store accepted (memoized policy only)
    committed: Option<String>,

    // -- Result pane --
    pub scroll: u16,
    pub searching: bool,

    // -- Overlay --
    pub show_help: bool,
    pub notice: Option<(Notice, Instant)>,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one user action; returns the controller work it requires
    pub fn apply(
        &mut self,
        action: FormAction,
        view: &SessionView,
        policy: CredentialPolicy,
    ) -> Option<FormEffect> {
        match action {
            FormAction::Quit => {
                self.should_quit = true;
                None
            }
            FormAction::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            FormAction::FocusNext => self.move_focus(1, view, policy),
            FormAction::FocusPrev => self.move_focus(-1, view, policy),
            FormAction::Activate => self.activate(view, policy),
            FormAction::CategoryUp if view.selector_enabled => {
                Some(FormEffect::Select(view.selected.previous()))
            }
            FormAction::CategoryDown if view.selector_enabled => {
                Some(FormEffect::Select(view.selected.next()))
            }
            FormAction::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            FormAction::ScrollDown => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            edit if self.focus == Focus::Credential && view.credential_editable => {
                self.edit(edit);
                None
            }
            _ => None,
        }
    }

    fn move_focus(
        &mut self,
        step: isize,
        view: &SessionView,
        policy: CredentialPolicy,
    ) -> Option<FormEffect> {
        let order = Focus::order(view, policy);
        if order.is_empty() {
            return None;
        }
        let leaving = self.focus;
        let len = order.len() as isize;
        let next = match order.iter().position(|f| *f == leaving) {
            Some(index) => (index as isize + step).rem_euclid(len) as usize,
            None => 0,
        };
        self.focus = order[next];

        // Tab out of the field commits it, even when it is the only control
        if leaving == Focus::Credential {
            return self.commit(policy);
        }
        None
    }

    fn activate(&mut self, view: &SessionView, policy: CredentialPolicy) -> Option<FormEffect> {
        match self.focus {
            Focus::Credential => match policy {
                CredentialPolicy::Memoized => self.commit(policy),
                CredentialPolicy::ExplicitConfirm => {
                    self.focus = Focus::Confirm;
                    None
                }
                CredentialPolicy::ProcessScoped => None,
            },
            Focus::Confirm => Some(FormEffect::SubmitCredential(self.credential_draft.clone())),
            Focus::Category if view.trigger_enabled => {
                self.focus = Focus::Search;
                None
            }
            Focus::Search if view.trigger_enabled => Some(FormEffect::Search),
            _ => None,
        }
    }

    /// Field commit: only the memoized policy submits, and only on change
    fn commit(&self, policy: CredentialPolicy) -> Option<FormEffect> {
        if policy != CredentialPolicy::Memoized
            || self.committed.as_deref() == Some(self.credential_draft.as_str())
        {
            return None;
        }
        Some(FormEffect::SubmitCredential(self.credential_draft.clone()))
    }

    /// Record a draft the store accepted so the next commit can skip it
    pub fn mark_committed(&mut self, raw: &str) {
        self.committed = Some(raw.to_string());
    }

    /// Forget the committed draft so the next commit retries
    pub fn forget_committed(&mut self) {
        self.committed = None;
    }

    /// Move focus to the first control if the current one became disabled
    pub fn sync_focus(&mut self, view: &SessionView, policy: CredentialPolicy) {
        let order = Focus::order(view, policy);
        if !order.contains(&self.focus)
            && let Some(first) = order.first()
        {
            self.focus = *first;
        }
    }

    // -- Input editing --

    fn edit(&mut self, action: FormAction) {
        match action {
            FormAction::InsertChar(c) => self.insert_char(c),
            FormAction::DeleteChar => self.delete_char(),
            FormAction::ClearInput => {
                self.credential_draft.clear();
                self.cursor = 0;
            }
            FormAction::CursorLeft => self.cursor_left(),
            FormAction::CursorRight => self.cursor_right(),
            FormAction::CursorStart => self.cursor = 0,
            FormAction::CursorEnd => self.cursor = self.credential_draft.len(),
            _ => {}
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.credential_draft.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            let prev_char_len = self.credential_draft[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.credential_draft.remove(self.cursor - prev_char_len);
            self.cursor -= prev_char_len;
        }
    }

    pub fn cursor_left(&mut self) {
        if let Some(c) = self.credential_draft[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(c) = self.credential_draft[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Column of the cursor inside the masked field
    pub fn cursor_column(&self) -> usize {
        self.credential_draft[..self.cursor].chars().count()
    }

    // -- Notices --

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some((notice, Instant::now()));
    }

    /// Clear the notice if older than the given duration. Errors stay.
    pub fn expire_notice(&mut self, max_age: Duration) {
        if let Some((notice, created)) = &self.notice
            && !notice.is_error()
            && created.elapsed() > max_age
        {
            self.notice = None;
        }
    }
}
