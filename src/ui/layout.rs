use crate::app::state::{AppState, Control};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use unicode_width::UnicodeWidthStr;

/// Cells reserved to the right of the run button for the spinner.
pub const SPINNER_WIDTH: u16 = 2;
const BUTTON_GAP: u16 = 1;

pub struct AppLayout {
    pub toolbar: Rect,
    pub toolbar_rule: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

/// A clickable control and where it is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSlot {
    pub control: Control,
    pub area: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Toolbar
            Constraint::Length(1), // Rule under the toolbar
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        toolbar: chunks[0],
        toolbar_rule: chunks[1],
        content: chunks[2],
        status_bar: chunks[3],
    }
}

/// Left and right halves of the toolbar, with the divider column between.
pub fn toolbar_halves(toolbar: Rect) -> (Rect, u16, Rect) {
    let divider_x = toolbar.x + toolbar.width / 2;
    let left = Rect::new(toolbar.x, toolbar.y, divider_x - toolbar.x, toolbar.height);
    let right_x = (divider_x + 1).min(toolbar.right());
    let right = Rect::new(right_x, toolbar.y, toolbar.right() - right_x, toolbar.height);
    (left, divider_x, right)
}

pub fn control_label(control: Control, state: &AppState) -> &'static str {
    match control {
        Control::ModeToggle if state.appearance.is_dark() => " ☀ Light ",
        Control::ModeToggle => " ☾ Dark ",
        Control::Share => " ⇪ Share ",
        Control::Run => " ▶ Run ",
        Control::Clear => " Clear ",
        Control::About => " ⓘ Info ",
    }
}

/// Controls are right-aligned within their half: mode, share and run in the
/// left half (run followed by the spinner cells), clear and info in the right.
/// Controls that do not fit are dropped.
pub fn control_slots(toolbar: Rect, state: &AppState) -> Vec<ControlSlot> {
    let (left, _, right) = toolbar_halves(toolbar);
    let mut slots = Vec::with_capacity(Control::ALL.len());

    let left_end = left.right().saturating_sub(SPINNER_WIDTH + BUTTON_GAP);
    place_right_aligned(
        &mut slots,
        left,
        left_end,
        &[Control::Run, Control::Share, Control::ModeToggle],
        state,
    );
    place_right_aligned(
        &mut slots,
        right,
        right.right(),
        &[Control::About, Control::Clear],
        state,
    );
    slots
}

fn place_right_aligned(
    slots: &mut Vec<ControlSlot>,
    bounds: Rect,
    end: u16,
    controls: &[Control],
    state: &AppState,
) {
    let mut cursor = end;
    for &control in controls {
        let width = control_label(control, state).width() as u16;
        if cursor < bounds.x + width {
            break;
        }
        cursor -= width;
        slots.push(ControlSlot {
            control,
            area: Rect::new(cursor, bounds.y, width, bounds.height),
        });
        cursor = cursor.saturating_sub(BUTTON_GAP);
    }
}

pub fn control_at(toolbar: Rect, state: &AppState, column: u16, row: u16) -> Option<Control> {
    let position = Position::new(column, row);
    control_slots(toolbar, state)
        .into_iter()
        .find(|slot| slot.area.contains(position))
        .map(|slot| slot.control)
}
