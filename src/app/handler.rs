use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::scheduler::Scheduler;
use crate::app::state::*;
use crate::ui::layout;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::RunCompleted { run_id } => {
            state.complete_run(run_id);
            vec![]
        }
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Only the spinner animates
            if state.is_busy() {
                state.dirty = true;
            }
            vec![]
        }
    }
}

/// Route one event through the handler and hand scheduling actions to
/// `scheduler`. Returns the actions left for the caller (currently `Quit`).
pub fn dispatch(state: &mut AppState, scheduler: &mut Scheduler, event: AppEvent) -> Vec<Action> {
    if let AppEvent::RunCompleted { run_id } = event {
        if let Some(done) = scheduler.completed(run_id) {
            tracing::trace!(run_id = done.run_id(), "completion handle released");
        }
    }

    let mut remaining = Vec::new();
    for action in handle_event(state, event) {
        match action {
            Action::ScheduleRunCompletion { run_id, delay } => {
                scheduler.schedule_completion(run_id, delay);
            }
            other => remaining.push(other),
        }
    }
    remaining
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.set_viewport(Rect::new(0, 0, width, height));
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // About panel captures all input when visible
    if state.about_visible {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            state.close_about();
        }
        return vec![];
    }

    match key.code {
        KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Char('d') => activate(state, Control::ModeToggle),
        KeyCode::Char('s') => activate(state, Control::Share),
        KeyCode::Char('r') | KeyCode::F(5) => activate(state, Control::Run),
        KeyCode::Char('c') => activate(state, Control::Clear),
        KeyCode::Char('i') | KeyCode::F(1) => activate(state, Control::About),
        KeyCode::Tab | KeyCode::Right => {
            state.focus_next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Left => {
            state.focus_prev();
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let focused = state.focus;
            activate(state, focused)
        }
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    if state.about_visible {
        state.close_about();
        return vec![];
    }
    let app_layout = layout::compute_layout(state.viewport);
    match layout::control_at(app_layout.toolbar, state, mouse.column, mouse.row) {
        Some(control) => activate(state, control),
        None => vec![],
    }
}

/// Trigger a toolbar control. Disabled controls ignore activation.
pub fn activate(state: &mut AppState, control: Control) -> Vec<Action> {
    if !state.is_enabled(control) {
        tracing::debug!(?control, "disabled control ignored");
        return vec![];
    }
    match control {
        Control::ModeToggle => state.toggle_appearance(),
        Control::Share => state.share(),
        Control::Clear => state.clear(),
        Control::About => state.open_about(),
        Control::Run => {
            if let Some(run_id) = state.invoke_run() {
                return vec![Action::ScheduleRunCompletion {
                    run_id,
                    delay: state.run_delay(),
                }];
            }
        }
    }
    vec![]
}
