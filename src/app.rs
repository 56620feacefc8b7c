use crate::command::{CommandOutcome, CommandRegistry};
use crate::config::Config;
use crate::engine::{Effect, Engine, EngineSettings, ExternalEvent, PaneAction};
use crate::error::CommandError;
use crate::input::keys_from_events;
use crate::io::worker::{spawn_worker, IoCommand, IoResult};
use crate::io::list_drives;
use crate::state::{Frame, Navigation, Pane, PaneListing, SystemClock, ToastKind};
use crate::style::Theme;
use crate::view_state::ViewState;
use eframe::egui;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

/// Everything decided before the window opens.
pub struct Launch {
    pub left: PathBuf,
    pub right: PathBuf,
    pub config_path: Option<PathBuf>,
}

/// Mouse input collected while rendering, applied after the frame is laid out.
#[derive(Default)]
pub(crate) struct PendingClicks {
    pub pane: Option<Pane>,
    pub row: Option<(Pane, usize)>,
    pub open: Option<Pane>,
    pub bookmark: Option<PathBuf>,
    pub drive: Option<usize>,
}

pub struct TwinCmd {
    pub(crate) engine: Engine,
    pub(crate) panes: [PaneListing; 2],
    pub(crate) config: Config,
    pub(crate) view: ViewState,
    config_path: Option<PathBuf>,
    command_tx: Sender<IoCommand>,
    result_rx: Receiver<IoResult>,
    applied_theme: Option<Theme>,
    last_system_theme: Option<egui::Theme>,
}

impl TwinCmd {
    pub fn new(cc: &eframe::CreationContext<'_>, launch: Launch) -> Self {
        let config = Config::load(launch.config_path.as_deref());
        let system_theme = cc.egui_ctx.input(|i| i.raw.system_theme);
        let theme = config
            .fixed_theme()
            .or_else(|| system_theme.map(Theme::from_system))
            .unwrap_or_default();

        let settings = EngineSettings {
            bookmark_bar_visible: config.ui.bookmark_bar,
            toast_ttl: config.toast_ttl(),
            theme,
        };
        let mut engine = Engine::new(CommandRegistry::with_builtins(), SystemClock, settings);
        engine.set_drives(list_drives());

        let repaint_ctx = cc.egui_ctx.clone();
        let (command_tx, result_rx) = spawn_worker(move || repaint_ctx.request_repaint());

        let view = engine.view_state();
        let mut app = Self {
            engine,
            panes: [
                PaneListing::new(launch.left.clone()),
                PaneListing::new(launch.right.clone()),
            ],
            config,
            view,
            config_path: launch.config_path,
            command_tx,
            result_rx,
            applied_theme: None,
            last_system_theme: system_theme,
        };
        app.request_load(Pane::Left, launch.left, None);
        app.request_load(Pane::Right, launch.right, None);
        tracing::info!("twincmd started");
        app
    }

    pub(crate) fn pane(&self, pane: Pane) -> &PaneListing {
        &self.panes[pane.index()]
    }

    fn pane_mut(&mut self, pane: Pane) -> &mut PaneListing {
        &mut self.panes[pane.index()]
    }

    fn request_load(&mut self, pane: Pane, path: PathBuf, select: Option<PathBuf>) {
        self.pane_mut(pane).begin_load(path.clone());
        let show_hidden = self.config.ui.show_hidden;
        if self
            .command_tx
            .send(IoCommand::LoadDirectory {
                pane,
                path,
                show_hidden,
                select,
            })
            .is_err()
        {
            tracing::warn!("directory worker is gone");
            self.pane_mut(pane).cancel_load();
        }
    }

    fn reload(&mut self, pane: Pane) {
        let path = self.pane(pane).path.clone();
        self.request_load(pane, path, None);
    }

    fn process_io_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                IoResult::DirectoryLoaded {
                    pane,
                    path,
                    entries,
                    select,
                } => {
                    let Some(target) = load_target(&self.panes, pane, &path) else {
                        tracing::debug!(path = %path.display(), "dropping stale listing");
                        continue;
                    };
                    self.pane_mut(target)
                        .set_entries(path, entries, select.as_deref());
                }
                IoResult::Error {
                    pane,
                    path,
                    message,
                } => {
                    let Some(target) = load_target(&self.panes, pane, &path) else {
                        continue;
                    };
                    self.pane_mut(target).cancel_load();
                    self.engine.post(ExternalEvent::Notify {
                        message,
                        kind: ToastKind::Error,
                    });
                }
            }
        }
    }

    /// System appearance changes are queued, never applied mid-frame.
    fn watch_system_theme(&mut self, ctx: &egui::Context) {
        let system_theme = ctx.input(|i| i.raw.system_theme);
        if system_theme == self.last_system_theme {
            return;
        }
        self.last_system_theme = system_theme;
        if !self.config.follows_system_theme() {
            return;
        }
        if let Some(theme) = system_theme {
            self.engine
                .post(ExternalEvent::AppearanceChanged(Theme::from_system(theme)));
        }
    }

    fn apply_effects(&mut self, ctx: &egui::Context, effects: Vec<Effect>) {
        for effect in effects {
            self.apply_effect(ctx, effect);
        }
    }

    fn apply_effect(&mut self, ctx: &egui::Context, effect: Effect) {
        match effect {
            Effect::Pane { pane, action } => {
                if let Some(navigation) = self.pane_mut(pane).apply(action) {
                    self.navigate(pane, navigation);
                }
            }
            Effect::ChangeDirectory { pane, path } => {
                let target = resolve_path(&self.pane(pane).path, &path);
                self.request_load(pane, target, None);
            }
            Effect::SetFilter { pane, query } => self.pane_mut(pane).set_filter(query),
            Effect::YankSelection(pane) => {
                let paths = self.pane(pane).selected_paths();
                if paths.is_empty() {
                    return;
                }
                let text = paths
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join("\n");
                ctx.copy_text(text);
                self.engine
                    .notify(format!("Yanked {} item(s)", paths.len()), ToastKind::Info);
            }
            Effect::ToggleHidden => {
                self.config.ui.show_hidden = !self.config.ui.show_hidden;
                let state = if self.config.ui.show_hidden {
                    "shown"
                } else {
                    "hidden"
                };
                self.engine
                    .notify(format!("Hidden files {}", state), ToastKind::Info);
                self.reload(Pane::Left);
                self.reload(Pane::Right);
            }
            Effect::ToggleMaximize => self.toggle_maximize(ctx),
            Effect::SwapPanes => self.panes.swap(0, 1),
            Effect::SetTheme(theme) => {
                self.engine.set_theme(theme);
                self.config.theme.mode = theme.name().to_string();
            }
            Effect::AddBookmark { name, pane } => {
                let path = self.pane(pane).path.clone();
                self.config.add_bookmark(name, path);
            }
            Effect::PersistSettings => self.persist_settings(),
            Effect::AskAssistant(prompt) => {
                tracing::info!(%prompt, "assistant prompt");
                self.engine.post(ExternalEvent::CommandFinished(CommandOutcome::Failed(
                    CommandError::HandlerFailure("No assistant configured".to_string()),
                )));
            }
            Effect::FocusChanged(pane) => tracing::debug!(pane = pane.name(), "focus changed"),
            Effect::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }

    fn navigate(&mut self, pane: Pane, navigation: Navigation) {
        match navigation {
            Navigation::Enter(path) => self.request_load(pane, path, None),
            Navigation::Up { parent, from } => self.request_load(pane, parent, Some(from)),
            Navigation::OpenFile(path) => {
                if let Err(e) = open::that(&path) {
                    tracing::warn!(path = %path.display(), error = %e, "open failed");
                    self.engine
                        .notify(format!("Could not open file: {}", e), ToastKind::Error);
                }
            }
        }
    }

    fn toggle_maximize(&mut self, ctx: &egui::Context) {
        let (outer, inner, monitor) = ctx.input(|i| {
            let viewport = i.viewport();
            (viewport.outer_rect, viewport.inner_rect, viewport.monitor_size)
        });
        let (Some(outer), Some(inner), Some(monitor)) = (outer, inner, monitor) else {
            self.engine
                .notify("Window geometry unavailable", ToastKind::Error);
            return;
        };
        let current = Frame::new(outer.min.x, outer.min.y, inner.width(), inner.height());
        let screen = Frame::new(0.0, 0.0, monitor.x, monitor.y);
        let target = self.engine.toggle_maximize(current, screen);
        tracing::debug!(?target, "resizing window");
        ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::pos2(
            target.x, target.y,
        )));
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(
            target.width,
            target.height,
        )));
    }

    fn persist_settings(&mut self) {
        self.config.ui.bookmark_bar = self.engine.bookmark_bar_visible();
        if let Err(e) = self.config.save(self.config_path.as_deref()) {
            tracing::warn!(error = %e, "failed to save settings");
            self.engine
                .notify(format!("Could not save settings: {}", e), ToastKind::Error);
        }
    }

    fn apply_theme(&mut self, ctx: &egui::Context) {
        if self.applied_theme != Some(self.view.theme) {
            ctx.set_visuals(self.view.theme.visuals());
            self.applied_theme = Some(self.view.theme);
        }
    }

    fn apply_clicks(&mut self, ctx: &egui::Context, clicks: PendingClicks) {
        if let Some(pane) = clicks.pane {
            let effects = self.engine.click_pane(pane);
            self.apply_effects(ctx, effects);
        }
        if let Some((pane, row)) = clicks.row {
            self.pane_mut(pane).set_cursor(row);
        }
        if let Some(pane) = clicks.open {
            if let Some(navigation) = self.pane_mut(pane).apply(PaneAction::Open) {
                self.navigate(pane, navigation);
            }
        }
        if let Some(path) = clicks.bookmark {
            let pane = self.engine.active_pane();
            self.request_load(pane, path, None);
        }
        if let Some(index) = clicks.drive {
            let effects = self.engine.click_drive(index);
            self.apply_effects(ctx, effects);
        }
    }
}

/// Listing a worker result belongs to. Panes may have swapped since the request,
/// and a pane that moved on to another directory no longer wants the answer.
fn load_target(panes: &[PaneListing; 2], tagged: Pane, path: &Path) -> Option<Pane> {
    [tagged, tagged.other()]
        .into_iter()
        .find(|pane| panes[pane.index()].awaits(path))
}

/// Relative paths resolve against the pane's directory; a leading `~` means home.
fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(user_dirs) = directories::UserDirs::new() {
            return user_dirs.home_dir().join(rest);
        }
    }
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

impl eframe::App for TwinCmd {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_io_results();
        self.watch_system_theme(ctx);
        self.engine.pump();

        let keys = ctx.input(|i| keys_from_events(&i.events));
        for key in keys {
            let effects = self.engine.handle_key(key);
            self.apply_effects(ctx, effects);
        }

        self.view = self.engine.view_state();
        self.apply_theme(ctx);

        let clicks = RefCell::new(PendingClicks::default());
        if self.view.bookmark_bar_visible {
            self.render_bookmark_bar(ctx, &clicks);
        }
        self.render_status_bar(ctx);
        self.render_panes(ctx, &clicks);
        self.render_drive_menu(ctx, &clicks);
        self.render_toast(ctx);

        self.apply_clicks(ctx, clicks.into_inner());

        match self.engine.repaint_delay() {
            Some(Duration::ZERO) => ctx.request_repaint(),
            Some(delay) => ctx.request_repaint_after(delay + Duration::from_millis(10)),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_follow_swapped_panes() {
        let mut panes = [
            PaneListing::new(PathBuf::from("/left")),
            PaneListing::new(PathBuf::from("/right")),
        ];
        assert_eq!(
            load_target(&panes, Pane::Left, Path::new("/left")),
            Some(Pane::Left)
        );

        panes.swap(0, 1);
        assert_eq!(
            load_target(&panes, Pane::Left, Path::new("/left")),
            Some(Pane::Right)
        );
        assert_eq!(
            load_target(&panes, Pane::Right, Path::new("/right")),
            Some(Pane::Left)
        );
    }

    #[test]
    fn superseded_results_are_dropped() {
        let mut panes = [
            PaneListing::new(PathBuf::from("/left")),
            PaneListing::new(PathBuf::from("/right")),
        ];
        panes[0].begin_load(PathBuf::from("/left/src"));
        assert_eq!(load_target(&panes, Pane::Left, Path::new("/left")), None);
        assert_eq!(
            load_target(&panes, Pane::Left, Path::new("/left/src")),
            Some(Pane::Left)
        );
    }

    #[test]
    fn relative_paths_join_pane_directory() {
        assert_eq!(
            resolve_path(Path::new("/work"), Path::new("src")),
            PathBuf::from("/work/src")
        );
        assert_eq!(
            resolve_path(Path::new("/work"), Path::new("/etc")),
            PathBuf::from("/etc")
        );
    }

    #[test]
    fn tilde_expands_to_home() {
        let Some(user_dirs) = directories::UserDirs::new() else {
            return;
        };
        assert_eq!(
            resolve_path(Path::new("/work"), Path::new("~/notes")),
            user_dirs.home_dir().join("notes")
        );
    }
}
