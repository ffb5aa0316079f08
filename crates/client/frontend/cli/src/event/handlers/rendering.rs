//! Frame stepping and rendering handlers.

use std::time::Instant;

use adventure_core::FrameReport;
use anyhow::Result;
use ratatui::{Terminal, backend::Backend};

use super::super::EventLoop;
use crate::presentation::ui;

impl EventLoop {
    /// Advances the adventure one frame with the arrow keys held at `now`.
    pub(in crate::event) fn step(&mut self, now: Instant) -> FrameReport {
        let input = self.held.sample(now);
        let report = self.manager.on_frame(input, &mut self.scene);
        if let Some(transition) = &report.transition {
            self.app_state.note_transition(transition);
        }
        report
    }

    /// Paints the current scene and remembers the viewport for mouse mapping.
    pub(in crate::event) fn render<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<()> {
        let ctx = ui::RenderContext {
            scene: &self.scene,
            app_state: &self.app_state,
            current_state: self.manager.current_state(),
            canvas: self.manager.config().canvas,
            ui: &self.cli_config.ui,
        };
        self.viewport = ui::render(terminal, &ctx)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use adventure_core::{
        AdventureManager, AdventureTables, ClickableLayout, Edge, GameConfig, InteractionTable,
        NarrativeRoom, NarrativeSpec, Point, RoomRegistry, StateDefinition, StateTable,
        StaticAssets,
    };
    use crossterm::event::{
        Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers,
    };
    use ratatui::{Terminal, backend::TestBackend, layout::Rect as CellRect};

    use crate::config::CliConfig;
    use crate::event::EventLoop;

    fn press(code: KeyCode) -> TermEvent {
        TermEvent::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn event_loop() -> EventLoop {
        let states = StateTable::new(vec![
            StateDefinition::new("field", "field")
                .with_avatar()
                .exit(Edge::East, "town"),
            StateDefinition::new("town", "town").with_avatar(),
        ]);
        let tables = AdventureTables::new(
            states,
            InteractionTable::default(),
            ClickableLayout::default(),
        );
        let rooms = RoomRegistry::new()
            .with(
                "field",
                Box::new(NarrativeRoom::new(
                    NarrativeSpec::new("field").with_text("A quiet field"),
                )),
            )
            .with("town", Box::new(NarrativeRoom::new(NarrativeSpec::new("town"))));
        let manager =
            AdventureManager::initialize(tables, rooms, GameConfig::default(), &StaticAssets::new())
                .unwrap();
        EventLoop::new(manager, CliConfig::default())
    }

    #[test]
    fn held_arrows_move_the_player_each_frame() {
        let mut event_loop = event_loop();
        let start_x = event_loop.manager.player().position.x;
        let now = Instant::now();

        event_loop.handle_event(press(KeyCode::Right), now);
        event_loop.step(now);
        event_loop.step(now + Duration::from_millis(16));
        assert!(event_loop.manager.player().position.x > start_x);
    }

    #[test]
    fn released_arrows_stop_after_the_hold_window() {
        let mut event_loop = event_loop();
        let now = Instant::now();
        event_loop.handle_event(press(KeyCode::Right), now);
        event_loop.step(now);

        let later = now + CliConfig::default().key_hold + Duration::from_millis(1);
        event_loop.step(later);
        let x = event_loop.manager.player().position.x;
        event_loop.step(later + Duration::from_millis(16));
        assert_eq!(event_loop.manager.player().position.x, x);
    }

    #[test]
    fn frame_transitions_are_recorded() {
        let mut event_loop = event_loop();
        event_loop.manager.teleport_player(Point::new(1278.0, 360.0));
        let now = Instant::now();
        event_loop.handle_event(press(KeyCode::Right), now);

        let report = event_loop.step(now);
        assert!(report.transition.is_some());
        assert_eq!(event_loop.manager.current_state().as_str(), "town");
        assert_eq!(event_loop.app_state.transitions, 1);
    }

    #[test]
    fn render_updates_the_viewport() {
        let mut event_loop = event_loop();
        let mut terminal = Terminal::new(TestBackend::new(64, 19)).unwrap();

        event_loop.step(Instant::now());
        event_loop.render(&mut terminal).unwrap();
        assert_eq!(event_loop.viewport.area, CellRect::new(0, 0, 64, 18));

        event_loop.handle_event(press(KeyCode::Char('f')), Instant::now());
        event_loop.render(&mut terminal).unwrap();
        assert_eq!(event_loop.viewport.area, CellRect::new(0, 0, 64, 19));
    }
}
