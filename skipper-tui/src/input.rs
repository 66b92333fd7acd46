use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use skipper_core::carousel::SlotPosition;

use crate::app::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    None,
    Quit,
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{Char, Enter, Left, Right};

    // Some terminals report releases too
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    // Global quit shortcuts
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    if key.code == Char('q') && key.modifiers.is_empty() {
        return Action::Quit;
    }

    if app.view.is_loading() {
        return Action::None;
    }

    match key.code {
        Left | Char('h') => app.view.go_to_prev(),
        Right | Char('l') => app.view.go_to_next(),
        Enter | Char(' ') => app.view.select_current(),
        Char('1') => app.view.select_slot(SlotPosition::Previous),
        Char('2') => app.view.select_slot(SlotPosition::Current),
        Char('3') => app.view.select_slot(SlotPosition::Next),
        _ => {}
    }
    Action::None
}

#[cfg(test)]
mod tests {
    use skipper_core::{
        model::{Location, SkipId, SkipOffering},
        state::Transition,
    };

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded_app() -> App {
        let mut app = App::new(Location::default());
        let offerings = (1..=3)
            .map(|id| SkipOffering {
                id: SkipId(id),
                size: 4,
                price_before_vat: 200.0,
                vat: 20.0,
                hire_period_days: 14,
                allows_heavy_waste: false,
                allowed_on_road: true,
            })
            .collect();
        app.view.apply(Transition::LoadSucceeded(offerings));
        app
    }

    fn selected_id(app: &App) -> Option<SkipId> {
        app.view.selected().map(|offering| offering.id)
    }

    #[test]
    fn quit_shortcuts() {
        let mut app = loaded_app();
        assert_eq!(handle_key_event(press(KeyCode::Char('q')), &mut app), Action::Quit, "q quits");
        assert_eq!(
            handle_key_event(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &mut app
            ),
            Action::Quit,
            "ctrl-c quits"
        );
    }

    #[test]
    fn arrows_and_vim_keys_move_the_carousel() {
        let mut app = loaded_app();

        handle_key_event(press(KeyCode::Right), &mut app);
        assert_eq!(app.view.cursor(), 1, "right moves forward");
        handle_key_event(press(KeyCode::Char('l')), &mut app);
        assert_eq!(app.view.cursor(), 2, "l moves forward");
        handle_key_event(press(KeyCode::Right), &mut app);
        assert_eq!(app.view.cursor(), 0, "wraps to the start");
        handle_key_event(press(KeyCode::Char('h')), &mut app);
        assert_eq!(app.view.cursor(), 2, "h wraps to the end");
        handle_key_event(press(KeyCode::Left), &mut app);
        assert_eq!(app.view.cursor(), 1, "left moves back");
    }

    #[test]
    fn enter_and_digits_select_visible_cards() {
        let mut app = loaded_app();

        handle_key_event(press(KeyCode::Enter), &mut app);
        assert_eq!(selected_id(&app), Some(SkipId(1)), "enter picks the centre");
        handle_key_event(press(KeyCode::Char('1')), &mut app);
        assert_eq!(selected_id(&app), Some(SkipId(3)), "1 picks the left card");
        handle_key_event(press(KeyCode::Char('3')), &mut app);
        assert_eq!(selected_id(&app), Some(SkipId(2)), "3 picks the right card");
        handle_key_event(press(KeyCode::Char('2')), &mut app);
        assert_eq!(selected_id(&app), Some(SkipId(1)), "2 picks the centre");
    }

    #[test]
    fn keys_are_inert_while_loading() {
        let mut app = App::new(Location::default());

        assert_eq!(handle_key_event(press(KeyCode::Right), &mut app), Action::None, "no action");
        handle_key_event(press(KeyCode::Enter), &mut app);

        assert_eq!(app.view.cursor(), 0, "cursor untouched");
        assert!(app.view.selected().is_none(), "nothing selected");
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut app = loaded_app();
        let mut release = press(KeyCode::Right);
        release.kind = KeyEventKind::Release;

        handle_key_event(release, &mut app);

        assert_eq!(app.view.cursor(), 0, "release does not move");
    }
}
