//! Input handling (keyboard and mouse).

use std::time::Instant;

use adventure_core::InputOutcome;
use anyhow::Result;
use crossterm::event::{
    self as term_event, Event as TermEvent, KeyEvent, MouseButton, MouseEvent, MouseEventKind,
};
use tokio::time::Duration;

use super::super::EventLoop;
use crate::input::KeyAction;

impl EventLoop {
    /// Handles every event already queued by the terminal. Returns `true`
    /// when the user asked to quit.
    pub(in crate::event) fn drain_input(&mut self, now: Instant) -> Result<bool> {
        while term_event::poll(Duration::from_millis(0))? {
            if self.handle_event(term_event::read()?, now) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub(in crate::event) fn handle_event(&mut self, event: TermEvent, now: Instant) -> bool {
        match event {
            TermEvent::Key(key) => self.handle_key(key, now),
            TermEvent::Mouse(mouse) => {
                self.handle_mouse(mouse);
                false
            }
            TermEvent::FocusLost => {
                self.held.clear();
                false
            }
            // Resizes are picked up by the next render.
            _ => false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        match self.input.handle_key(key) {
            KeyAction::Quit => {
                tracing::info!("Quit requested");
                true
            }
            KeyAction::Hold(direction) => {
                self.held.press(direction, now);
                false
            }
            KeyAction::Release(direction) => {
                self.held.release(direction);
                false
            }
            KeyAction::Key(symbol) => {
                let outcome = self.manager.on_key(&symbol);
                self.apply_outcome(outcome);
                false
            }
            KeyAction::None => false,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(point) = self.viewport.to_canvas(mouse.column, mouse.row) else {
            return;
        };

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                self.manager.on_pointer_move(point);
            }
            MouseEventKind::Down(MouseButton::Left) => self.manager.on_pointer_press(point),
            MouseEventKind::Up(MouseButton::Left) => {
                let outcome = self.manager.on_pointer_release(point);
                self.apply_outcome(outcome);
            }
            _ => {}
        }
    }

    fn apply_outcome(&mut self, outcome: InputOutcome) {
        match outcome {
            InputOutcome::Reserved(_) => self.app_state.toggle_fullscreen(),
            InputOutcome::Transitioned(transition) => self.app_state.note_transition(&transition),
            InputOutcome::Ignored => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use adventure_core::{
        AdventureManager, AdventureTables, ClickableLayout, ClickableRegion, GameConfig,
        InteractionTable, MovementInput, NarrativeRoom, NarrativeSpec, Rect, RoomRegistry,
        StateDefinition, StateTable, StaticAssets,
    };
    use crossterm::event::{
        Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers,
        MouseButton, MouseEvent, MouseEventKind,
    };
    use ratatui::layout::Rect as CellRect;

    use crate::config::CliConfig;
    use crate::event::EventLoop;
    use crate::presentation::viewport::Viewport;

    fn key(code: KeyCode) -> TermEvent {
        TermEvent::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> TermEvent {
        TermEvent::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        })
    }

    fn event_loop() -> EventLoop {
        let states = StateTable::new(vec![
            StateDefinition::new("splash", "splash")
                .on_key("ENTER", "walk")
                .on_key("q", "walk"),
            StateDefinition::new("walk", "walk").with_avatar(),
        ]);
        let clickables = ClickableLayout::new(vec![
            ClickableRegion::new("play", Rect::new(540.0, 600.0, 200.0, 60.0), "Play")
                .in_state("splash")
                .leads_to("walk"),
        ]);
        let tables = AdventureTables::new(states, InteractionTable::default(), clickables);
        let rooms = RoomRegistry::new()
            .with("splash", Box::new(NarrativeRoom::new(NarrativeSpec::new("splash"))))
            .with("walk", Box::new(NarrativeRoom::new(NarrativeSpec::new("walk"))));
        let manager =
            AdventureManager::initialize(tables, rooms, GameConfig::default(), &StaticAssets::new())
                .unwrap();

        let mut event_loop = EventLoop::new(manager, CliConfig::default());
        let canvas = event_loop.manager.config().canvas;
        event_loop.viewport = Viewport::new(CellRect::new(0, 0, 128, 36), canvas);
        event_loop
    }

    #[test]
    fn symbol_keys_drive_transitions() {
        let mut event_loop = event_loop();
        assert!(!event_loop.handle_event(key(KeyCode::Enter), Instant::now()));
        assert_eq!(event_loop.manager.current_state().as_str(), "walk");

        let last = event_loop.app_state.last_transition.as_ref().unwrap();
        assert_eq!(last.from.as_str(), "splash");
    }

    #[test]
    fn reserved_key_toggles_fullscreen() {
        let mut event_loop = event_loop();
        event_loop.handle_event(key(KeyCode::Char('f')), Instant::now());
        assert!(event_loop.app_state.fullscreen);
        assert_eq!(event_loop.manager.current_state().as_str(), "splash");
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut event_loop = event_loop();
        assert!(event_loop.handle_event(key(KeyCode::Esc), Instant::now()));
    }

    #[test]
    fn q_reaches_the_state_table() {
        let mut event_loop = event_loop();
        assert!(!event_loop.handle_event(key(KeyCode::Char('q')), Instant::now()));
        assert_eq!(event_loop.manager.current_state().as_str(), "walk");
    }

    #[test]
    fn arrows_are_held_not_forwarded() {
        let mut event_loop = event_loop();
        let now = Instant::now();
        event_loop.handle_event(key(KeyCode::Left), now);
        assert_eq!(event_loop.held.sample(now), MovementInput::LEFT);

        event_loop.handle_event(TermEvent::FocusLost, now);
        assert!(event_loop.held.sample(now).is_empty());
    }

    #[test]
    fn mouse_click_on_a_region_transitions() {
        let mut event_loop = event_loop();
        // cell (60, 31) is inside the play button at (540, 600)
        let down = mouse(MouseEventKind::Down(MouseButton::Left), 60, 31);
        event_loop.handle_event(down, Instant::now());
        assert_eq!(event_loop.manager.current_state().as_str(), "splash");

        let up = mouse(MouseEventKind::Up(MouseButton::Left), 60, 31);
        event_loop.handle_event(up, Instant::now());
        assert_eq!(event_loop.manager.current_state().as_str(), "walk");
    }

    #[test]
    fn mouse_release_elsewhere_does_nothing() {
        let mut event_loop = event_loop();
        let down = mouse(MouseEventKind::Down(MouseButton::Left), 60, 31);
        event_loop.handle_event(down, Instant::now());
        event_loop.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 5, 5), Instant::now());
        assert_eq!(event_loop.manager.current_state().as_str(), "splash");
        assert_eq!(event_loop.app_state.transitions, 0);
    }
}
