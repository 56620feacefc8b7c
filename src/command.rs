// Command registry - the closed set of verbs accepted on the `:` command line

use crate::engine::Effect;
use crate::error::CommandError;
use crate::state::{BookmarkBar, Pane, PaneFocus, ToastKind};
use crate::style::Theme;
use std::collections::HashMap;
use std::path::PathBuf;

pub type CommandHandler = fn(&mut CommandContext<'_>, &[&str]) -> Result<Option<String>, CommandError>;

pub struct CommandSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub usage: &'static str,
    pub summary: &'static str,
    pub handler: CommandHandler,
}

/// State a handler may touch. Anything outside the engine is requested through `effects`.
pub struct CommandContext<'a> {
    pub focus: &'a mut PaneFocus,
    pub bookmark_bar: &'a mut BookmarkBar,
    pub effects: &'a mut Vec<Effect>,
    pub commands: &'a [CommandSpec],
    /// Usage line of the command being run.
    pub usage: &'static str,
}

impl CommandContext<'_> {
    fn usage_error(&self) -> CommandError {
        CommandError::usage(self.usage)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Nothing was typed.
    Empty,
    Success(Option<String>),
    Failed(CommandError),
}

impl CommandOutcome {
    /// Message and kind to toast, if any.
    pub fn toast(&self) -> Option<(String, ToastKind)> {
        match self {
            CommandOutcome::Empty | CommandOutcome::Success(None) => None,
            CommandOutcome::Success(Some(message)) => Some((message.clone(), ToastKind::Info)),
            CommandOutcome::Failed(err) => Some((err.to_string(), ToastKind::Error)),
        }
    }
}

pub struct CommandRegistry {
    commands: Vec<CommandSpec>,
    index: HashMap<&'static str, usize>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for spec in builtins() {
            registry.register(spec);
        }
        registry
    }

    /// Adds a verb. Later registrations win for a clashing name or alias.
    pub fn register(&mut self, spec: CommandSpec) {
        let idx = self.commands.len();
        self.index.insert(spec.name, idx);
        for &alias in spec.aliases {
            self.index.insert(alias, idx);
        }
        self.commands.push(spec);
    }

    pub fn lookup(&self, name: &str) -> Option<&CommandSpec> {
        self.index.get(name).map(|&idx| &self.commands[idx])
    }

    #[cfg(test)]
    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    pub fn dispatch(
        &self,
        text: &str,
        focus: &mut PaneFocus,
        bookmark_bar: &mut BookmarkBar,
        effects: &mut Vec<Effect>,
    ) -> CommandOutcome {
        let mut parts = text.split_whitespace();
        let Some(name) = parts.next() else {
            return CommandOutcome::Empty;
        };
        let args: Vec<&str> = parts.collect();

        let Some(spec) = self.lookup(name) else {
            return CommandOutcome::Failed(CommandError::UnknownCommand(name.to_string()));
        };

        let mut ctx = CommandContext {
            focus,
            bookmark_bar,
            effects,
            commands: &self.commands,
            usage: spec.usage,
        };
        match (spec.handler)(&mut ctx, &args) {
            Ok(message) => CommandOutcome::Success(message),
            Err(err) => CommandOutcome::Failed(err),
        }
    }
}

fn builtins() -> Vec<CommandSpec> {
    vec![
        CommandSpec {
            name: "quit",
            aliases: &["q"],
            usage: "quit",
            summary: "Exit",
            handler: cmd_quit,
        },
        CommandSpec {
            name: "cd",
            aliases: &[],
            usage: "cd <path>",
            summary: "Change directory of the active pane",
            handler: cmd_cd,
        },
        CommandSpec {
            name: "focus",
            aliases: &[],
            usage: "focus left|right",
            summary: "Activate a pane",
            handler: cmd_focus,
        },
        CommandSpec {
            name: "swap",
            aliases: &[],
            usage: "swap",
            summary: "Swap the directories of both panes",
            handler: cmd_swap,
        },
        CommandSpec {
            name: "bookmarks",
            aliases: &["bm"],
            usage: "bookmarks",
            summary: "Show or hide the bookmark bar",
            handler: cmd_bookmarks,
        },
        CommandSpec {
            name: "mark",
            aliases: &[],
            usage: "mark <name>",
            summary: "Bookmark the active pane's directory",
            handler: cmd_mark,
        },
        CommandSpec {
            name: "maximize",
            aliases: &["max"],
            usage: "maximize",
            summary: "Maximize or restore the window",
            handler: cmd_maximize,
        },
        CommandSpec {
            name: "hidden",
            aliases: &[],
            usage: "hidden",
            summary: "Show or hide dotfiles",
            handler: cmd_hidden,
        },
        CommandSpec {
            name: "theme",
            aliases: &[],
            usage: "theme light|dark",
            summary: "Switch colour theme",
            handler: cmd_theme,
        },
        CommandSpec {
            name: "help",
            aliases: &["h"],
            usage: "help",
            summary: "List commands",
            handler: cmd_help,
        },
    ]
}

fn cmd_quit(ctx: &mut CommandContext<'_>, _args: &[&str]) -> Result<Option<String>, CommandError> {
    ctx.effects.push(Effect::Quit);
    Ok(None)
}

fn cmd_cd(ctx: &mut CommandContext<'_>, args: &[&str]) -> Result<Option<String>, CommandError> {
    if args.is_empty() {
        return Err(ctx.usage_error());
    }
    ctx.effects.push(Effect::ChangeDirectory {
        pane: ctx.focus.current(),
        path: PathBuf::from(args.join(" ")),
    });
    Ok(None)
}

fn cmd_focus(ctx: &mut CommandContext<'_>, args: &[&str]) -> Result<Option<String>, CommandError> {
    let pane = match args {
        [name] => Pane::parse(name)
            .ok_or_else(|| CommandError::HandlerFailure(format!("No such pane: {}", name)))?,
        _ => return Err(ctx.usage_error()),
    };
    if ctx.focus.activate(pane) {
        ctx.effects.push(Effect::FocusChanged(pane));
    }
    Ok(None)
}

fn cmd_swap(ctx: &mut CommandContext<'_>, _args: &[&str]) -> Result<Option<String>, CommandError> {
    ctx.effects.push(Effect::SwapPanes);
    Ok(None)
}

fn cmd_bookmarks(ctx: &mut CommandContext<'_>, _args: &[&str]) -> Result<Option<String>, CommandError> {
    let visible = ctx.bookmark_bar.toggle();
    ctx.effects.push(Effect::PersistSettings);
    Ok(Some(
        if visible {
            "Bookmark bar shown"
        } else {
            "Bookmark bar hidden"
        }
        .to_string(),
    ))
}

fn cmd_mark(ctx: &mut CommandContext<'_>, args: &[&str]) -> Result<Option<String>, CommandError> {
    if args.is_empty() {
        return Err(ctx.usage_error());
    }
    let name = args.join(" ");
    ctx.effects.push(Effect::AddBookmark {
        name: name.clone(),
        pane: ctx.focus.current(),
    });
    ctx.effects.push(Effect::PersistSettings);
    Ok(Some(format!("Bookmarked as '{}'", name)))
}

fn cmd_maximize(ctx: &mut CommandContext<'_>, _args: &[&str]) -> Result<Option<String>, CommandError> {
    ctx.effects.push(Effect::ToggleMaximize);
    Ok(None)
}

fn cmd_hidden(ctx: &mut CommandContext<'_>, _args: &[&str]) -> Result<Option<String>, CommandError> {
    ctx.effects.push(Effect::ToggleHidden);
    ctx.effects.push(Effect::PersistSettings);
    Ok(None)
}

fn cmd_theme(ctx: &mut CommandContext<'_>, args: &[&str]) -> Result<Option<String>, CommandError> {
    let theme = match args {
        [name] => Theme::parse(name)
            .ok_or_else(|| CommandError::HandlerFailure(format!("Unknown theme: {}", name)))?,
        _ => return Err(ctx.usage_error()),
    };
    ctx.effects.push(Effect::SetTheme(theme));
    ctx.effects.push(Effect::PersistSettings);
    Ok(Some(format!("Theme: {}", theme.name())))
}

fn cmd_help(ctx: &mut CommandContext<'_>, _args: &[&str]) -> Result<Option<String>, CommandError> {
    let lines: Vec<String> = ctx
        .commands
        .iter()
        .map(|c| format!("{} - {}", c.usage, c.summary))
        .collect();
    Ok(Some(lines.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Harness {
        registry: CommandRegistry,
        focus: PaneFocus,
        bar: BookmarkBar,
        effects: Vec<Effect>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                registry: CommandRegistry::with_builtins(),
                focus: PaneFocus::default(),
                bar: BookmarkBar::default(),
                effects: Vec::new(),
            }
        }

        fn run(&mut self, text: &str) -> CommandOutcome {
            self.registry
                .dispatch(text, &mut self.focus, &mut self.bar, &mut self.effects)
        }
    }

    #[test]
    fn unknown_command_names_the_verb() {
        let mut h = Harness::new();
        let outcome = h.run("foo bar baz");
        assert_eq!(
            outcome,
            CommandOutcome::Failed(CommandError::UnknownCommand("foo".into()))
        );
        assert_eq!(
            outcome.toast(),
            Some(("Unknown command: foo".to_string(), ToastKind::Error))
        );
        assert!(h.effects.is_empty());
    }

    #[test]
    fn blank_text_is_empty() {
        let mut h = Harness::new();
        assert_eq!(h.run(""), CommandOutcome::Empty);
        assert_eq!(h.run("   "), CommandOutcome::Empty);
        assert_eq!(h.run("").toast(), None);
    }

    #[test]
    fn aliases_resolve() {
        let mut h = Harness::new();
        assert_eq!(h.run("q"), CommandOutcome::Success(None));
        assert_eq!(h.effects, vec![Effect::Quit]);
        assert_eq!(h.registry.lookup("bm").map(|c| c.name), Some("bookmarks"));
        assert_eq!(h.registry.lookup("max").map(|c| c.name), Some("maximize"));
    }

    #[test]
    fn cd_joins_arguments_and_targets_active_pane() {
        let mut h = Harness::new();
        h.focus.activate(Pane::Right);
        h.run("cd /tmp/my dir");
        assert_eq!(
            h.effects,
            vec![Effect::ChangeDirectory {
                pane: Pane::Right,
                path: PathBuf::from("/tmp/my dir"),
            }]
        );
    }

    #[test]
    fn missing_argument_is_handler_failure() {
        let mut h = Harness::new();
        assert_eq!(
            h.run("cd"),
            CommandOutcome::Failed(CommandError::HandlerFailure("Usage: cd <path>".into()))
        );
        assert_eq!(
            h.run("focus"),
            CommandOutcome::Failed(CommandError::HandlerFailure(
                "Usage: focus left|right".into()
            ))
        );
        assert!(matches!(
            h.run("theme purple"),
            CommandOutcome::Failed(CommandError::HandlerFailure(_))
        ));
        assert!(h.effects.is_empty());
    }

    #[test]
    fn focus_only_reports_real_changes() {
        let mut h = Harness::new();
        h.run("focus left");
        assert!(h.effects.is_empty());
        h.run("focus right");
        assert_eq!(h.effects, vec![Effect::FocusChanged(Pane::Right)]);
        assert_eq!(h.focus.current(), Pane::Right);
    }

    #[test]
    fn bookmarks_toggles_and_persists() {
        let mut h = Harness::new();
        assert_eq!(
            h.run("bookmarks"),
            CommandOutcome::Success(Some("Bookmark bar shown".into()))
        );
        assert!(h.bar.is_visible());
        h.run("bm");
        assert!(!h.bar.is_visible());
        assert_eq!(h.effects, vec![Effect::PersistSettings, Effect::PersistSettings]);
    }

    #[test]
    fn hidden_toggle_is_saved() {
        let mut h = Harness::new();
        h.run("hidden");
        assert_eq!(h.effects, vec![Effect::ToggleHidden, Effect::PersistSettings]);
    }

    #[test]
    fn theme_accepts_known_names() {
        let mut h = Harness::new();
        h.run("theme light");
        assert_eq!(
            h.effects,
            vec![Effect::SetTheme(Theme::Light), Effect::PersistSettings]
        );
    }

    #[test]
    fn help_lists_every_verb() {
        let mut h = Harness::new();
        let CommandOutcome::Success(Some(message)) = h.run("help") else {
            panic!("help should succeed with a message");
        };
        assert_eq!(message.lines().count(), h.registry.commands().len());
        for spec in h.registry.commands() {
            let line = format!("{} - {}", spec.usage, spec.summary);
            assert!(message.lines().any(|l| l == line), "{} missing", spec.name);
        }
        assert!(message.contains("cd <path> - Change directory of the active pane"));
    }

    #[test]
    fn custom_verbs_can_be_registered() {
        fn cmd_ping(_: &mut CommandContext<'_>, args: &[&str]) -> Result<Option<String>, CommandError> {
            Ok(Some(format!("pong {}", args.len())))
        }
        let mut h = Harness::new();
        h.registry.register(CommandSpec {
            name: "ping",
            aliases: &[],
            usage: "ping",
            summary: "Reply",
            handler: cmd_ping,
        });
        assert_eq!(h.run("ping a b"), CommandOutcome::Success(Some("pong 2".into())));
    }
}
