//! Input dispatch — global keys → section-specific keys, plus mouse clicks.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use archguide_core::SectionId;

use crate::app::App;

const WHEEL_ROWS: usize = 3;

/// Handle a key event.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. The help overlay consumes input first.
    if app.show_help {
        app.show_help = false;
        return;
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('?') => {
            app.show_help = true;
            return;
        }
        KeyCode::Char('q') => {
            app.quit();
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return;
        }
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            if let Some(id) = SectionId::from_index(index) {
                app.select_section(id);
            }
            return;
        }
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
            app.prev_section();
            return;
        }
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
            app.next_section();
            return;
        }
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
            app.prev_section();
            return;
        }
        KeyCode::PageDown => {
            app.scroll_down(app.page_height());
            return;
        }
        KeyCode::PageUp => {
            app.scroll_up(app.page_height());
            return;
        }
        KeyCode::Home | KeyCode::Char('g') => {
            app.scroll_to_top();
            return;
        }
        _ => {}
    }

    // 3. Section-specific keys.
    match app.selected_section() {
        SectionId::Security => handle_security_key(app, key),
        _ => handle_scroll_key(app, key),
    }
}

fn handle_security_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.focus_next_layer(),
        KeyCode::Char('k') | KeyCode::Up => app.focus_prev_layer(),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_focused_layer(),
        _ => {}
    }
}

fn handle_scroll_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(1),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(1),
        _ => {}
    }
}

/// Handle a mouse event. Left clicks resolve through the last frame's hit map.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.show_help {
        if let MouseEventKind::Down(_) = mouse.kind {
            app.show_help = false;
        }
        return;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.click(mouse.column, mouse.row),
        MouseEventKind::ScrollDown => app.scroll_down(WHEEL_ROWS),
        MouseEventKind::ScrollUp => app.scroll_up(WHEEL_ROWS),
        _ => {}
    }
}

/// Key bindings help text
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("q / Ctrl+C", "Quit"),
        ("?", "Show this help"),
        ("1-6", "Select section"),
        ("Tab/l/→, Shift+Tab/h/←", "Next / previous section"),
        ("j/k, ↓/↑", "Move layer focus (security) or scroll"),
        ("Enter / Space", "Expand or collapse focused security layer"),
        ("PgDn / PgUp", "Scroll a page"),
        ("Home / g", "Scroll to top"),
        ("Mouse click", "Select tab or toggle layer"),
    ]
}
