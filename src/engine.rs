// Modal interaction engine
// Turns key presses into mode transitions, command dispatch and pane effects.
// Performs no I/O: the caller carries out the returned effects.

use crate::command::{CommandOutcome, CommandRegistry};
use crate::input::Key;
use crate::state::{
    BookmarkBar, Clock, CommandLine, Drive, DriveMenu, Frame, Mode, Pane, PaneFocus, SystemClock,
    ToastKind, ToastScheduler, WindowGeometry,
};
use crate::style::Theme;
use crate::view_state::{DriveMenuView, ToastView, ViewState};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    Up,
    Down,
    Top,
    Bottom,
}

/// Cursor and selection changes for a pane listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaneAction {
    Move { motion: Motion, extend: bool },
    Parent,
    Open,
    StartSelection,
    ToggleMark,
    ClearSelection,
}

/// Work requested from the application shell.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Pane { pane: Pane, action: PaneAction },
    ChangeDirectory { pane: Pane, path: PathBuf },
    SetFilter { pane: Pane, query: Option<String> },
    YankSelection(Pane),
    ToggleHidden,
    ToggleMaximize,
    SwapPanes,
    SetTheme(Theme),
    AddBookmark { name: String, pane: Pane },
    PersistSettings,
    AskAssistant(String),
    FocusChanged(Pane),
    Quit,
}

/// Signals from outside the key stream. Queued by `post`, applied by `pump`.
#[derive(Clone, Debug, PartialEq)]
pub enum ExternalEvent {
    AppearanceChanged(Theme),
    CommandFinished(CommandOutcome),
    Notify { message: String, kind: ToastKind },
}

#[derive(Clone, Debug)]
pub struct EngineSettings {
    pub bookmark_bar_visible: bool,
    pub toast_ttl: Duration,
    pub theme: Theme,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            bookmark_bar_visible: false,
            toast_ttl: Duration::from_millis(crate::layout::TOAST_TTL_MS),
            theme: Theme::default(),
        }
    }
}

pub struct Engine<C: Clock = SystemClock> {
    mode: Mode,
    command_line: Option<CommandLine>,
    registry: CommandRegistry,
    toasts: ToastScheduler<C>,
    focus: PaneFocus,
    bookmark_bar: BookmarkBar,
    geometry: WindowGeometry,
    drive_menu: DriveMenu,
    visual_pane: Pane,
    // Toast generation when the current mode was entered
    entry_generation: u64,
    pending: VecDeque<ExternalEvent>,
    theme: Theme,
}

impl<C: Clock> Engine<C> {
    pub fn new(registry: CommandRegistry, clock: C, settings: EngineSettings) -> Self {
        Self {
            mode: Mode::Normal,
            command_line: None,
            registry,
            toasts: ToastScheduler::new(clock, settings.toast_ttl),
            focus: PaneFocus::default(),
            bookmark_bar: BookmarkBar::new(settings.bookmark_bar_visible),
            geometry: WindowGeometry::default(),
            drive_menu: DriveMenu::default(),
            visual_pane: Pane::Left,
            entry_generation: 0,
            pending: VecDeque::new(),
            theme: settings.theme,
        }
    }

    #[cfg(test)]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn active_pane(&self) -> Pane {
        self.focus.current()
    }

    pub fn bookmark_bar_visible(&self) -> bool {
        self.bookmark_bar.is_visible()
    }

    #[cfg(test)]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_drives(&mut self, drives: Vec<Drive>) {
        self.drive_menu.set_drives(drives);
    }

    /// Shows a toast right away. For use from the UI thread only.
    pub fn notify(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.toasts.show(message, kind);
    }

    /// Queues an event for the next `pump`; never applied re-entrantly.
    pub fn post(&mut self, event: ExternalEvent) {
        self.pending.push_back(event);
    }

    /// True while posted events are waiting for the next `pump`.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Applies queued external events and expires stale toasts. Call once per frame.
    /// Returns true if anything visible changed.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Some(event) = self.pending.pop_front() {
            match event {
                ExternalEvent::AppearanceChanged(theme) => {
                    if theme != self.theme {
                        tracing::debug!(theme = theme.name(), "appearance changed");
                        self.theme = theme;
                        changed = true;
                    }
                }
                ExternalEvent::CommandFinished(outcome) => {
                    self.surface(&outcome);
                    changed = true;
                }
                ExternalEvent::Notify { message, kind } => {
                    self.toasts.show(message, kind);
                    changed = true;
                }
            }
        }
        self.toasts.tick() || changed
    }

    /// When the UI next needs redrawing without input, if ever.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.toasts.next_expiry()
    }

    /// How long the shell may wait before the next frame. Events posted after this
    /// frame's `pump` need one right away; otherwise the toast deadline decides.
    pub fn repaint_delay(&self) -> Option<Duration> {
        if self.has_pending() {
            return Some(Duration::ZERO);
        }
        self.next_deadline()
            .map(|deadline| deadline.saturating_duration_since(self.toasts.now()))
    }

    pub fn click_pane(&mut self, pane: Pane) -> Vec<Effect> {
        if self.focus.activate(pane) {
            vec![Effect::FocusChanged(pane)]
        } else {
            Vec::new()
        }
    }

    /// Mouse pick in the drive menu; ignored outside Drive mode.
    pub fn click_drive(&mut self, index: usize) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.mode != Mode::Drive {
            return effects;
        }
        if let Some(drive) = self.drive_menu.drives().get(index) {
            let path = drive.path.clone();
            self.pick_drive(path, &mut effects);
        }
        effects
    }

    /// Frame the window should take after a maximize/restore toggle.
    pub fn toggle_maximize(&mut self, current: Frame, maximized: Frame) -> Frame {
        self.geometry.toggle_maximize(current, maximized)
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn handle_key(&mut self, key: Key) -> Vec<Effect> {
        let mut effects = Vec::new();
        match self.mode {
            Mode::Normal => self.handle_normal(key, &mut effects),
            Mode::Visual => self.handle_visual(key, &mut effects),
            Mode::Command | Mode::Filter | Mode::Ai => self.handle_text(key, &mut effects),
            Mode::Drive => self.handle_drive(key, &mut effects),
        }
        effects
    }

    pub fn view_state(&self) -> ViewState {
        ViewState {
            mode: self.mode,
            mode_label: self.mode.label(),
            command_line: self.command_line.as_ref().map(CommandLine::display),
            active_pane: self.focus.current(),
            header_labels: Pane::BOTH.map(|pane| self.focus.header_label(pane)),
            toast: self.toasts.current().map(|t| ToastView {
                message: t.message.clone(),
                kind: t.kind,
            }),
            bookmark_bar_visible: self.bookmark_bar.is_visible(),
            window_maximized: self.geometry.is_maximized(),
            drive_menu: (self.mode == Mode::Drive).then(|| DriveMenuView {
                labels: self
                    .drive_menu
                    .drives()
                    .iter()
                    .map(|d| d.label.clone())
                    .collect(),
                cursor: self.drive_menu.cursor(),
                target: self.focus.current(),
            }),
            visual_pane: (self.mode == Mode::Visual).then_some(self.visual_pane),
            theme: self.theme,
        }
    }

    fn enter(&mut self, mode: Mode) {
        tracing::debug!(from = self.mode.label(), to = mode.label(), "mode change");
        self.mode = mode;
        self.command_line = mode.prompt_prefix().map(CommandLine::new);
        self.entry_generation = self.toasts.generation();
    }

    fn return_to_normal(&mut self) {
        self.enter(Mode::Normal);
    }

    /// Escape: back to Normal, retracting feedback shown during the cancelled mode.
    fn cancel(&mut self) {
        if self.toasts.generation() != self.entry_generation {
            self.toasts.clear();
        }
        self.return_to_normal();
    }

    fn surface(&mut self, outcome: &CommandOutcome) {
        if let Some((message, kind)) = outcome.toast() {
            self.toasts.show(message, kind);
        }
    }

    fn pane_action(&self, pane: Pane, action: PaneAction) -> Effect {
        Effect::Pane { pane, action }
    }

    fn handle_normal(&mut self, key: Key, effects: &mut Vec<Effect>) {
        let pane = self.focus.current();
        let movement = |motion| PaneAction::Move {
            motion,
            extend: false,
        };
        match key {
            Key::Char(c) if Mode::from_entry_key(c).is_some() => {
                if let Some(mode) = Mode::from_entry_key(c) {
                    self.enter_from_normal(mode, effects);
                }
            }
            Key::Char('j') | Key::Down => effects.push(self.pane_action(pane, movement(Motion::Down))),
            Key::Char('k') | Key::Up => effects.push(self.pane_action(pane, movement(Motion::Up))),
            Key::Char('g') => effects.push(self.pane_action(pane, movement(Motion::Top))),
            Key::Char('G') => effects.push(self.pane_action(pane, movement(Motion::Bottom))),
            Key::Char('h') | Key::Left | Key::Backspace => {
                effects.push(self.pane_action(pane, PaneAction::Parent))
            }
            Key::Char('l') | Key::Right | Key::Enter => {
                effects.push(self.pane_action(pane, PaneAction::Open))
            }
            Key::Char(' ') => effects.push(self.pane_action(pane, PaneAction::ToggleMark)),
            Key::Tab => effects.push(Effect::FocusChanged(self.focus.toggle())),
            Key::Char('.') => {
                effects.push(Effect::ToggleHidden);
                effects.push(Effect::PersistSettings);
            }
            Key::Char('B') => {
                self.bookmark_bar.toggle();
                effects.push(Effect::PersistSettings);
            }
            Key::Char('M') => effects.push(Effect::ToggleMaximize),
            Key::Escape | Key::Char(_) => {}
        }
    }

    fn enter_from_normal(&mut self, mode: Mode, effects: &mut Vec<Effect>) {
        match mode {
            Mode::Drive if self.drive_menu.is_empty() => {
                self.toasts.show("No drives available", ToastKind::Error);
                return;
            }
            Mode::Drive => self.drive_menu.reset_cursor(),
            Mode::Visual => {
                self.visual_pane = self.focus.current();
                effects.push(self.pane_action(self.visual_pane, PaneAction::StartSelection));
            }
            _ => {}
        }
        self.enter(mode);
    }

    fn handle_visual(&mut self, key: Key, effects: &mut Vec<Effect>) {
        let pane = self.visual_pane;
        let extend = |motion| PaneAction::Move {
            motion,
            extend: true,
        };
        match key {
            Key::Char('j') | Key::Down => effects.push(self.pane_action(pane, extend(Motion::Down))),
            Key::Char('k') | Key::Up => effects.push(self.pane_action(pane, extend(Motion::Up))),
            Key::Char('g') => effects.push(self.pane_action(pane, extend(Motion::Top))),
            Key::Char('G') => effects.push(self.pane_action(pane, extend(Motion::Bottom))),
            Key::Char(' ') => effects.push(self.pane_action(pane, PaneAction::ToggleMark)),
            Key::Char('y') => {
                effects.push(Effect::YankSelection(pane));
                effects.push(self.pane_action(pane, PaneAction::ClearSelection));
                self.return_to_normal();
            }
            Key::Char('v') => {
                effects.push(self.pane_action(pane, PaneAction::ClearSelection));
                self.return_to_normal();
            }
            Key::Escape => {
                effects.push(self.pane_action(pane, PaneAction::ClearSelection));
                self.cancel();
            }
            _ => {}
        }
    }

    fn handle_text(&mut self, key: Key, effects: &mut Vec<Effect>) {
        let Some(line) = self.command_line.as_mut() else {
            // Text modes always carry a buffer; recover rather than wedge.
            self.return_to_normal();
            return;
        };
        let pane = self.focus.current();
        match key {
            Key::Char(c) => {
                line.push(c);
                if self.mode == Mode::Filter {
                    effects.push(filter_effect(pane, line));
                }
            }
            Key::Backspace => match line.backspace() {
                Ok(_) => {
                    if self.mode == Mode::Filter {
                        effects.push(filter_effect(pane, line));
                    }
                }
                Err(_) => {
                    if self.mode == Mode::Filter {
                        effects.push(Effect::SetFilter { pane, query: None });
                    }
                    self.return_to_normal();
                }
            },
            Key::Escape => {
                if self.mode == Mode::Filter {
                    effects.push(Effect::SetFilter { pane, query: None });
                }
                self.cancel();
            }
            Key::Enter => self.submit(effects),
            Key::Tab | Key::Up | Key::Down | Key::Left | Key::Right => {}
        }
    }

    fn submit(&mut self, effects: &mut Vec<Effect>) {
        let mode = self.mode;
        let text = self
            .command_line
            .take()
            .map(CommandLine::into_text)
            .unwrap_or_default();
        match mode {
            Mode::Command => {
                tracing::info!(command = %text, "dispatching command");
                let outcome = self.registry.dispatch(
                    &text,
                    &mut self.focus,
                    &mut self.bookmark_bar,
                    effects,
                );
                if let CommandOutcome::Failed(err) = &outcome {
                    tracing::warn!(error = %err, "command failed");
                }
                self.surface(&outcome);
            }
            Mode::Ai => {
                let prompt = text.trim();
                if !prompt.is_empty() {
                    effects.push(Effect::AskAssistant(prompt.to_string()));
                }
            }
            // The filter stays applied on the pane.
            _ => {}
        }
        self.return_to_normal();
    }

    fn handle_drive(&mut self, key: Key, effects: &mut Vec<Effect>) {
        match key {
            Key::Char('j') | Key::Down => self.drive_menu.move_down(),
            Key::Char('k') | Key::Up => self.drive_menu.move_up(),
            Key::Char(c) if c.is_ascii_digit() => {
                let number = c.to_digit(10).unwrap_or(0);
                match self.drive_menu.by_number(number) {
                    Some(drive) => {
                        let path = drive.path.clone();
                        self.pick_drive(path, effects);
                    }
                    None => self
                        .toasts
                        .show(format!("No drive {}", number), ToastKind::Error),
                }
            }
            Key::Enter => {
                if let Some(drive) = self.drive_menu.highlighted() {
                    let path = drive.path.clone();
                    self.pick_drive(path, effects);
                }
            }
            Key::Tab => effects.push(Effect::FocusChanged(self.focus.toggle())),
            Key::Escape => self.cancel(),
            _ => {}
        }
    }

    fn pick_drive(&mut self, path: PathBuf, effects: &mut Vec<Effect>) {
        effects.push(Effect::ChangeDirectory {
            pane: self.focus.current(),
            path,
        });
        self.return_to_normal();
    }
}

fn filter_effect(pane: Pane, line: &CommandLine) -> Effect {
    Effect::SetFilter {
        pane,
        query: (!line.is_empty()).then(|| line.text().to_string()),
    }
}
