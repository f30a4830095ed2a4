//! Drawing the shell with ratatui.
//!
//! The frame is the render target: [`draw`] receives it and the app by
//! reference and paints one complete screen. No widget state survives
//! between frames.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Clear, Dataset, Gauge, GraphType, Paragraph, Wrap},
    Frame,
};

use super::app::RunoffApp;
use super::chart::ChartData;

const RAINFALL_COLOR: Color = Color::Cyan;
const RUNOFF_COLOR: Color = Color::Yellow;
const CONTROL_HEIGHT: u16 = 3;

/// Paint the whole screen.
pub fn draw(f: &mut Frame, app: &RunoffApp) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_title(f, rows[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(36), Constraint::Min(30)])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CONTROL_HEIGHT * 6),
            Constraint::Min(6),
        ])
        .split(body[0]);

    render_controls(f, left[0], app);
    render_annotations(f, left[1], app);
    render_chart(f, body[1], app);
    render_help(f, rows[2]);

    if let Some(message) = &app.error {
        render_error(f, f.area(), message);
    }
}

fn render_title(f: &mut Frame, area: Rect, app: &RunoffApp) {
    let name = if app.config.name.is_empty() {
        "custom"
    } else {
        app.config.name.as_str()
    };
    let (state, color) = if app.has_pending_changes() {
        ("[PENDING]", Color::Yellow)
    } else {
        ("[UP TO DATE]", Color::Green)
    };

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " RAINFALL-RUNOFF ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(name.to_string(), Style::default().fg(Color::White)),
        Span::raw(" | "),
        Span::styled(state, Style::default().fg(color)),
        Span::raw(" | "),
        Span::styled(
            format!("Renders: {}", app.render_count),
            Style::default().fg(Color::Gray),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn render_controls(f: &mut Frame, area: Rect, app: &RunoffApp) {
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CONTROL_HEIGHT); 6])
        .split(area);

    for (i, control) in app.controls.controls().iter().enumerate() {
        let selected = i == app.controls.selected();
        let border_style = if selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let label = if control.buffer.is_some() {
            format!("{}_", control.display_text())
        } else {
            control.display_text()
        };

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(control.kind.label()),
            )
            .gauge_style(Style::default().fg(Color::Blue).bg(Color::Black))
            .ratio(control.ratio())
            .label(label);
        f.render_widget(gauge, slots[i]);
    }
}

fn render_annotations(f: &mut Frame, area: Rect, app: &RunoffApp) {
    let lines: Vec<Line> = app
        .chart
        .as_ref()
        .map(ChartData::annotation_lines)
        .unwrap_or_default()
        .into_iter()
        .map(Line::from)
        .collect();

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Annotations"));
    f.render_widget(panel, area);
}

fn render_chart(f: &mut Frame, area: Rect, app: &RunoffApp) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Rainfall vs Runoff");

    let Some(chart) = &app.chart else {
        f.render_widget(Paragraph::new("No chart").block(block), area);
        return;
    };

    let datasets = vec![
        Dataset::default()
            .name("Rainfall")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(RAINFALL_COLOR))
            .data(&chart.rainfall_points),
        Dataset::default()
            .name("Runoff")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(RUNOFF_COLOR))
            .data(&chart.runoff_points),
        Dataset::default()
            .marker(symbols::Marker::Block)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(RAINFALL_COLOR))
            .data(&chart.rainfall_marker),
        Dataset::default()
            .marker(symbols::Marker::Block)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(RUNOFF_COLOR))
            .data(&chart.runoff_marker),
    ];

    let widget = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("Time [h]")
                .style(Style::default().fg(Color::Gray))
                .bounds(chart.x_bounds)
                .labels(axis_spans(chart.x_bounds)),
        )
        .y_axis(
            Axis::default()
                .title("Intensity [mm/h]")
                .style(Style::default().fg(Color::Gray))
                .bounds(chart.y_bounds)
                .labels(axis_spans(chart.y_bounds)),
        );
    f.render_widget(widget, area);
}

fn axis_spans(bounds: [f64; 2]) -> Vec<Span<'static>> {
    ChartData::axis_labels(bounds)
        .into_iter()
        .map(Span::raw)
        .collect()
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(vec![
        Span::styled("[↑/↓]", Style::default().fg(Color::Cyan)),
        Span::raw(" Select  "),
        Span::styled("[←/→]", Style::default().fg(Color::Cyan)),
        Span::raw(" Slide  "),
        Span::styled("[0-9.]", Style::default().fg(Color::Cyan)),
        Span::raw(" Type  "),
        Span::styled("[Enter/U]", Style::default().fg(Color::Cyan)),
        Span::raw(" Update  "),
        Span::styled("[R]", Style::default().fg(Color::Cyan)),
        Span::raw(" Reset  "),
        Span::styled("[Q]", Style::default().fg(Color::Cyan)),
        Span::raw(" Quit"),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

/// Rectangle of `width` x `height` centred in `area`, shrunk to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_error(f: &mut Frame, area: Rect, message: &str) {
    let popup = centered_rect(50, 7, area);
    let body = Paragraph::new(vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(Color::Gray),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title("Input Error"),
    );
    f.render_widget(Clear, popup);
    f.render_widget(body, popup);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &RunoffApp) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_screen_shows_controls_chart_and_annotations() {
        let screen = render(&RunoffApp::new());
        assert!(screen.contains("RAINFALL-RUNOFF"));
        assert!(screen.contains("Response time k_nl [h]"));
        assert!(screen.contains("Rainfall vs Runoff"));
        assert!(screen.contains("Rainfall peak: 15.00"));
        assert!(screen.contains("Lag:"));
        assert!(screen.contains("[UP TO DATE]"));
    }

    #[test]
    fn test_screen_shows_pending_state() {
        let mut app = RunoffApp::new();
        app.handle_key(KeyCode::Right);
        assert!(render(&app).contains("[PENDING]"));
    }

    #[test]
    fn test_screen_shows_error_modal() {
        let mut app = RunoffApp::new();
        app.handle_key(KeyCode::Char('-'));
        app.handle_key(KeyCode::Enter);
        let screen = render(&app);
        assert!(screen.contains("Input Error"));
        assert!(screen.contains("Press any key"));
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let backend = TestBackend::new(20, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = RunoffApp::new();
        terminal.draw(|f| draw(f, &app)).unwrap();
    }

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 100, 40);
        let r = centered_rect(50, 7, area);
        assert_eq!((r.x, r.y, r.width, r.height), (25, 16, 50, 7));
        let tiny = centered_rect(50, 7, Rect::new(0, 0, 10, 3));
        assert_eq!((tiny.width, tiny.height), (10, 3));
    }
}
