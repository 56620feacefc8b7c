// Input handling for twincmd
// Translates egui events into the keys the engine understands

use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
}

/// Printable characters arrive as text events (so Shift+; yields ':'), named keys as key events.
pub fn keys_from_events(events: &[egui::Event]) -> Vec<Key> {
    let mut keys = Vec::new();
    for event in events {
        match event {
            egui::Event::Text(text) => {
                keys.extend(text.chars().filter(|c| !c.is_control()).map(Key::Char));
            }
            egui::Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } => {
                // Shortcuts with Ctrl/Cmd belong to the platform, not the engine.
                if modifiers.command || modifiers.ctrl {
                    continue;
                }
                if let Some(named) = named_key(*key) {
                    keys.push(named);
                }
            }
            _ => {}
        }
    }
    keys
}

fn named_key(key: egui::Key) -> Option<Key> {
    match key {
        egui::Key::Enter => Some(Key::Enter),
        egui::Key::Escape => Some(Key::Escape),
        egui::Key::Tab => Some(Key::Tab),
        egui::Key::Backspace => Some(Key::Backspace),
        egui::Key::ArrowUp => Some(Key::Up),
        egui::Key::ArrowDown => Some(Key::Down),
        egui::Key::ArrowLeft => Some(Key::Left),
        egui::Key::ArrowRight => Some(Key::Right),
        _ => None,
    }
}
