//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Mark, RandomIndex, Square};

use crate::app::App;

const HELP: &str = "1-9 or arrows+Enter: play | r: restart | s: reset scores | c: computer | q: quit";

/// Renders the whole screen.
pub fn draw<R: RandomIndex>(frame: &mut Frame, app: &App<R>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Turn and scores
            Constraint::Min(11),   // Board
            Constraint::Length(1), // Banner
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    frame.render_widget(info_line(app), chunks[1]);

    draw_board(frame, chunks[2], app);

    if let Some(banner) = app.banner() {
        let banner = Paragraph::new(banner)
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(banner, chunks[3]);
    }

    let status = if app.is_waiting_for_computer() {
        format!("{} (computer is thinking...)", app.status_message())
    } else {
        app.status_message().to_string()
    };
    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[4]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[5]);
}

fn info_line<R: RandomIndex>(app: &App<R>) -> Paragraph<'static> {
    let engine = app.engine();
    let scores = engine.scores();
    let computer = if app.computer_enabled() {
        format!("Computer: {}", app.computer_mark())
    } else {
        "Computer: off".to_string()
    };

    Paragraph::new(Line::from(vec![
        Span::raw("Turn: "),
        Span::styled(
            engine.current_player().to_string(),
            mark_style(engine.current_player()),
        ),
        Span::raw(format!(
            "   X: {}  O: {}  Draws: {}   {}",
            scores.x(),
            scores.o(),
            scores.draws(),
            computer
        )),
    ]))
    .alignment(Alignment::Center)
}

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_board<R: RandomIndex>(frame: &mut Frame, area: Rect, app: &App<R>) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, row * 3);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row<R: RandomIndex>(frame: &mut Frame, area: Rect, app: &App<R>, first: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        draw_cell(frame, cols[col * 2], app, first + col);
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell<R: RandomIndex>(frame: &mut Frame, area: Rect, app: &App<R>, index: usize) {
    let engine = app.engine();

    let (symbol, base_style) = match engine.board().get(index) {
        Some(Square::Occupied(mark)) => (format!(" {} ", mark), mark_style(mark)),
        _ => (format!(" {} ", index + 1), Style::default().fg(Color::DarkGray)),
    };

    let on_winning_line = engine
        .winning_combo()
        .is_some_and(|combo| combo.contains(&index));

    let style = if on_winning_line {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if index == app.cursor() && app.accepts_input() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::input::Action;
    use ratatui::{Terminal, backend::TestBackend};
    use tictactoe_engine::{GameEngine, ScriptedIndex};

    fn render(app: &App<ScriptedIndex>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_scores_and_banner() {
        let config = SessionConfig::default().with_computer_enabled(false);
        let mut app = App::new(GameEngine::with_random(ScriptedIndex::new(vec![0])), &config);
        for index in [0, 3, 1, 4, 2] {
            app.handle(Action::Play(index));
        }

        let screen = render(&app);

        assert!(screen.contains("X wins!"));
        assert!(screen.contains("X: 1  O: 0  Draws: 0"));
        assert!(screen.contains("Computer: off"));
    }

    #[test]
    fn test_renders_thinking_hint() {
        let config = SessionConfig::default();
        let mut app = App::new(GameEngine::with_random(ScriptedIndex::new(vec![0])), &config);
        app.handle(Action::Play(4));

        let screen = render(&app);

        assert!(screen.contains("O's turn (computer is thinking...)"));
        assert!(!screen.contains("wins!"));
    }
}
