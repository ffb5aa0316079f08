//! Scene rendering.
//!
//! Paints the display list of one frame onto the terminal: the canvas fills
//! the screen (minus an optional status bar) and every draw command is
//! scaled through a [`Viewport`].
use adventure_core::{DrawCommand, Facing, Scene, Size, StateId};
use anyhow::Result;
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect as CellRect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::{config::UiConfig, presentation::theme::RatatuiTheme, state::AppState};

use super::viewport::Viewport;

/// Everything the renderer reads for one frame.
pub struct RenderContext<'a> {
    pub scene: &'a Scene,
    pub app_state: &'a AppState,
    pub current_state: &'a StateId,
    pub canvas: Size,
    pub ui: &'a UiConfig,
}

/// Splits the screen into the canvas area and, outside fullscreen mode, a
/// status bar along the bottom.
pub fn layout(area: CellRect, fullscreen: bool, ui: &UiConfig) -> (CellRect, Option<CellRect>) {
    if fullscreen || ui.status_bar_height == 0 {
        return (area, None);
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(ui.status_bar_height),
        ])
        .split(area);
    (chunks[0], Some(chunks[1]))
}

/// Draws the scene and returns the viewport that was used, so pointer
/// events can be mapped back onto the canvas.
pub fn render<B: Backend>(terminal: &mut Terminal<B>, ctx: &RenderContext) -> Result<Viewport> {
    let theme = RatatuiTheme;
    let mut viewport = Viewport::new(CellRect::default(), ctx.canvas);

    terminal.draw(|frame| {
        let (canvas_area, status_area) = layout(frame.area(), ctx.app_state.fullscreen, ctx.ui);
        viewport = Viewport::new(canvas_area, ctx.canvas);

        for command in ctx.scene.commands() {
            draw_command(frame, &viewport, &theme, command);
        }

        if let Some(area) = status_area {
            render_status_bar(frame, area, ctx, &theme);
        }
    })?;

    Ok(viewport)
}

fn draw_command(
    frame: &mut Frame,
    viewport: &Viewport,
    theme: &RatatuiTheme,
    command: &DrawCommand,
) {
    match command {
        DrawCommand::Background { asset, tint } => {
            frame.render_widget(Clear, viewport.area);
            if let Some(art) = &asset.art {
                let art = Paragraph::new(&**art).style(theme.background(*tint));
                frame.render_widget(art, viewport.area);
            }
        }
        DrawCommand::TextBox { rect, text, style } => {
            let area = viewport.to_cells(*rect);
            let paragraph = Paragraph::new(text.as_str())
                .style(theme.text(style))
                .alignment(theme.alignment(style.align))
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, area);
        }
        DrawCommand::Prop { rect, asset, .. } => {
            let area = viewport.to_cells(*rect);
            let art = asset.art.as_deref().unwrap_or("▒");
            frame.render_widget(Paragraph::new(art).style(theme.prop()), area);
        }
        DrawCommand::Clickable {
            rect,
            label,
            visual,
            style,
            ..
        } => {
            let area = viewport.to_cells(*rect);
            let padding = area.height.saturating_sub(1) / 2;
            let mut lines = vec![Line::default(); padding as usize];
            lines.push(Line::from(label.as_str()));
            let button = Paragraph::new(lines)
                .alignment(ratatui::layout::Alignment::Center)
                .style(theme.button(style, *visual));
            frame.render_widget(button, area);
        }
        DrawCommand::Player {
            rect,
            asset,
            facing,
            ..
        } => {
            let area = viewport.to_cells(*rect);
            let art = match asset.art.as_deref() {
                Some(art) if *facing == Facing::Left => mirror(art),
                Some(art) => art.to_string(),
                None => "@".to_string(),
            };
            frame.render_widget(Paragraph::new(art).style(theme.player()), area);
        }
        DrawCommand::Dialogue {
            rect,
            asset,
            label,
            label_at,
            label_style,
            text,
            text_at,
            text_style,
        } => {
            let area = viewport.to_cells(*rect);
            frame.render_widget(Clear, area);
            let block = Block::default()
                .borders(Borders::ALL)
                .style(theme.dialogue_box());
            match &asset.art {
                Some(art) => frame.render_widget(Paragraph::new(&**art).block(block), area),
                None => frame.render_widget(block, area),
            }

            if let Some(label_area) = anchored(viewport, *label_at, area) {
                let label = Paragraph::new(Span::styled(
                    label.as_str(),
                    theme.dialogue_label(label_style),
                ));
                frame.render_widget(label, label_area);
            }
            if let Some(text_area) = anchored(viewport, *text_at, area) {
                let body = Paragraph::new(text.as_str())
                    .style(theme.text(text_style))
                    .wrap(Wrap { trim: true });
                frame.render_widget(body, text_area);
            }
        }
    }
}

/// Area from a canvas anchor to the bottom-right corner of `bounds`, kept
/// one cell inside the border.
fn anchored(viewport: &Viewport, at: adventure_core::Point, bounds: CellRect) -> Option<CellRect> {
    let (col, row) = viewport.to_cell(at)?;
    let right = bounds.right().saturating_sub(1);
    let bottom = bounds.bottom().saturating_sub(1);
    if col >= right || row >= bottom {
        return None;
    }
    Some(CellRect::new(col, row, right - col, bottom - row))
}

/// Flips ASCII art horizontally for a sprite facing left.
fn mirror(art: &str) -> String {
    let width = art.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    art.lines()
        .map(|line| {
            let pad = width - line.chars().count();
            let flipped: String = line.chars().rev().map(mirror_char).collect();
            format!("{}{}", " ".repeat(pad), flipped)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn mirror_char(ch: char) -> char {
    match ch {
        '/' => '\\',
        '\\' => '/',
        '(' => ')',
        ')' => '(',
        '<' => '>',
        '>' => '<',
        '[' => ']',
        ']' => '[',
        '{' => '}',
        '}' => '{',
        other => other,
    }
}

fn render_status_bar(frame: &mut Frame, area: CellRect, ctx: &RenderContext, theme: &RatatuiTheme) {
    let mut spans = vec![
        Span::raw(ctx.ui.title.as_str()),
        Span::raw("│ "),
        Span::raw(ctx.current_state.as_str()),
    ];
    if let Some(transition) = &ctx.app_state.last_transition {
        spans.push(Span::raw(format!("  (from {} by {})", transition.from, transition.cause)));
    }
    spans.push(Span::raw("   f: fullscreen  Esc: quit"));

    let bar = Paragraph::new(Text::from(Line::from(spans))).style(theme.status_bar());
    frame.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use adventure_core::{Asset, AssetKey, Rect, TextStyle};
    use ratatui::backend::TestBackend;

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_scene(scene: &Scene, app_state: &AppState) -> (Terminal<TestBackend>, Viewport) {
        let mut terminal = Terminal::new(TestBackend::new(128, 37)).unwrap();
        let ui = UiConfig::default();
        let state = StateId::new("splash");
        let ctx = RenderContext {
            scene,
            app_state,
            current_state: &state,
            canvas: Size::new(1280.0, 720.0),
            ui: &ui,
        };
        let viewport = render(&mut terminal, &ctx).unwrap();
        (terminal, viewport)
    }

    #[test]
    fn status_bar_shows_state_unless_fullscreen() {
        let scene = Scene::new();
        let mut app_state = AppState::new();

        let (terminal, viewport) = render_scene(&scene, &app_state);
        assert_eq!(viewport.area, CellRect::new(0, 0, 128, 36));
        assert!(screen(&terminal).contains("splash"));

        app_state.toggle_fullscreen();
        let (terminal, viewport) = render_scene(&scene, &app_state);
        assert_eq!(viewport.area, CellRect::new(0, 0, 128, 37));
        assert!(!screen(&terminal).contains("splash"));
    }

    #[test]
    fn text_boxes_and_buttons_are_painted() {
        let mut scene = Scene::new();
        scene.push(DrawCommand::TextBox {
            rect: Rect::new(100.0, 100.0, 600.0, 200.0),
            text: "Sweetfield City is in DANGER!".to_string(),
            style: TextStyle::default(),
        });
        scene.push(DrawCommand::Clickable {
            id: "play_game".into(),
            rect: Rect::new(540.0, 600.0, 200.0, 60.0),
            label: "Play".to_string(),
            visual: Default::default(),
            style: Default::default(),
        });

        let (terminal, _) = render_scene(&scene, &AppState::new());
        let text = screen(&terminal);
        assert!(text.contains("Sweetfield City is in DANGER!"));
        assert!(text.contains("Play"));
    }

    #[test]
    fn dialogue_shows_label_and_text() {
        let mut scene = Scene::new();
        scene.push(DrawCommand::Dialogue {
            rect: Rect::new(160.0, 230.0, 960.0, 260.0),
            asset: Asset::placeholder(AssetKey::new("dialogue_box")),
            label: "Level 1".to_string(),
            label_at: adventure_core::Point::new(310.0, 330.0),
            label_style: TextStyle::default(),
            text: "Find some food".to_string(),
            text_at: adventure_core::Point::new(310.0, 380.0),
            text_style: TextStyle::default(),
        });

        let (terminal, _) = render_scene(&scene, &AppState::new());
        let text = screen(&terminal);
        assert!(text.contains("Level 1"));
        assert!(text.contains("Find some food"));
    }

    #[test]
    fn mirror_flips_lines_and_brackets() {
        assert_eq!(mirror("(o>\n/|"), "<o)\n |\\");
    }
}
