use std::io::stdout;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use gantt_plot_core::Chart;
use gantt_plot_core::views::render_gantt;
use gantt_plot_protocol::{RenderCommand, TextAlign, ThemeToken, Viewport};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    buffer::{Buffer, Cell},
    layout::Rect,
    style::{Color, Modifier},
};

const BACKGROUND: Color = Color::Black;

fn theme_to_color(token: ThemeToken) -> Color {
    match token {
        ThemeToken::BarBorder => Color::Black,
        ThemeToken::BarLabel => Color::White,
        ThemeToken::GridLine => Color::DarkGray,
        ThemeToken::AxisLine => Color::Gray,
        ThemeToken::TickLabel => Color::Gray,
        ThemeToken::AxisTitle => Color::White,
        ThemeToken::ChartTitle => Color::White,
    }
}

fn fill_to_color(fill: gantt_plot_protocol::Color) -> Color {
    Color::Rgb(fill.r, fill.g, fill.b)
}

/// Show `chart` full-screen until `q` or `Esc` is pressed.
///
/// The layout is recomputed every frame so the chart follows terminal
/// resizes. The terminal is restored even if drawing fails.
pub fn render_tui(chart: &Chart) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, chart);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    chart: &Chart,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            let viewport = Viewport::new(f64::from(area.width), f64::from(area.height));
            let cmds = render_gantt(chart, &viewport);
            draw_commands(frame.buffer_mut(), area, &cmds);
        })?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        {
            return Ok(());
        }
    }
}

/// Paint render commands into `buf`, one viewport unit per cell.
///
/// Only axis-aligned lines are supported. Bar outlines are skipped: a
/// cell is too coarse to show them.
pub fn draw_commands(buf: &mut Buffer, area: Rect, cmds: &[RenderCommand]) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            buf[(x, y)].reset();
            buf[(x, y)].set_bg(BACKGROUND);
        }
    }

    for cmd in cmds {
        match cmd {
            RenderCommand::DrawRect {
                rect, fill, label, ..
            } => {
                let bg = fill_to_color(*fill);
                let col_start = rect.x.round().max(0.0) as u16;
                let col_end = ((rect.x + rect.w).round() as u16).max(col_start + 1);
                let row_start = rect.y.round().max(0.0) as u16;
                let row_end = ((rect.y + rect.h).round() as u16).max(row_start + 1);

                for row in row_start..row_end {
                    for col in col_start..col_end {
                        if let Some(cell) = cell_at(buf, area, col, row) {
                            cell.set_char(' ').set_bg(bg);
                        }
                    }
                }

                if let Some(label) = label {
                    let width = usize::from(col_end - col_start);
                    let text: String = label.chars().take(width).collect();
                    let len = text.chars().count() as u16;
                    let col = col_start + (col_end - col_start - len) / 2;
                    let row = rect.center().y.floor().max(0.0) as u16;
                    put_text(buf, area, col, row, &text, |cell| {
                        cell.set_fg(theme_to_color(ThemeToken::BarLabel))
                            .set_bg(bg)
                            .modifier
                            .insert(Modifier::BOLD);
                    });
                }
            }
            RenderCommand::DrawLine {
                from,
                to,
                color,
                dashed,
            } => {
                let fg = theme_to_color(*color);
                let vertical = (from.x - to.x).abs() < f64::EPSILON;
                let (symbol, fixed, start, end) = if vertical {
                    (if *dashed { '┆' } else { '│' }, from.x, from.y, to.y)
                } else {
                    (if *dashed { '┄' } else { '─' }, from.y, from.x, to.x)
                };
                let fixed = fixed.round().max(0.0) as u16;
                let (start, end) = (start.min(end), start.max(end));
                for i in start.round().max(0.0) as u16..end.round().max(0.0) as u16 {
                    let (col, row) = if vertical { (fixed, i) } else { (i, fixed) };
                    if let Some(cell) = cell_at(buf, area, col, row) {
                        cell.set_char(symbol).set_fg(fg);
                    }
                }
            }
            RenderCommand::DrawText {
                position,
                text,
                color,
                align,
            } => {
                let len = text.chars().count() as f64;
                let x = match align {
                    TextAlign::Left => position.x,
                    TextAlign::Center => position.x - len / 2.0,
                    TextAlign::Right => position.x - len,
                };
                let fg = theme_to_color(*color);
                let row = position.y.floor().max(0.0) as u16;
                put_text(buf, area, x.round().max(0.0) as u16, row, text, |cell| {
                    cell.set_fg(fg);
                });
            }
        }
    }
}

fn cell_at(buf: &mut Buffer, area: Rect, col: u16, row: u16) -> Option<&mut Cell> {
    let x = area.x.checked_add(col)?;
    let y = area.y.checked_add(row)?;
    if x < area.x + area.width && y < area.y + area.height {
        Some(&mut buf[(x, y)])
    } else {
        None
    }
}

fn put_text(
    buf: &mut Buffer,
    area: Rect,
    col: u16,
    row: u16,
    text: &str,
    style: impl Fn(&mut Cell),
) {
    for (i, ch) in text.chars().enumerate() {
        let Ok(offset) = u16::try_from(i) else {
            break;
        };
        if let Some(cell) = col.checked_add(offset).and_then(|c| cell_at(buf, area, c, row)) {
            cell.set_char(ch);
            style(cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use gantt_plot_core::build_chart;
    use gantt_plot_core::layout::LayoutOptions;
    use gantt_plot_core::model::{IntervalRecord, Timeline};
    use gantt_plot_protocol::Point;

    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn rect_fills_cells_with_centered_label() {
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        let fill = gantt_plot_protocol::Color::rgb(68, 1, 84);
        let cmds = vec![RenderCommand::DrawRect {
            rect: gantt_plot_protocol::Rect::new(2.0, 1.1, 10.0, 0.8),
            fill,
            border_color: Some(ThemeToken::BarBorder),
            label: Some("P0".into()),
        }];
        draw_commands(&mut buf, area, &cmds);

        assert_eq!(row_text(&buf, 1), "      P0            ");
        assert_eq!(buf[(2, 1)].bg, Color::Rgb(68, 1, 84));
        assert_eq!(buf[(11, 1)].bg, Color::Rgb(68, 1, 84));
        assert_eq!(buf[(12, 1)].bg, BACKGROUND);
        assert_eq!(buf[(6, 1)].fg, Color::White);
        assert_eq!(buf[(2, 0)].bg, BACKGROUND);
    }

    #[test]
    fn narrow_rect_keeps_one_cell_and_truncates_label() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        let cmds = vec![RenderCommand::DrawRect {
            rect: gantt_plot_protocol::Rect::new(3.0, 0.1, 0.2, 0.8),
            fill: gantt_plot_protocol::Color::GREY,
            border_color: None,
            label: Some("IDLE".into()),
        }];
        draw_commands(&mut buf, area, &cmds);
        assert_eq!(buf[(3, 0)].symbol(), "I");
        assert_eq!(buf[(3, 0)].bg, Color::Rgb(128, 128, 128));
        assert_eq!(buf[(4, 0)].symbol(), " ");
    }

    #[test]
    fn text_alignment() {
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        let text = |x: f64, y: f64, align| RenderCommand::DrawText {
            position: Point::new(x, y),
            text: "abc".into(),
            color: ThemeToken::TickLabel,
            align,
        };
        let cmds = vec![
            text(1.0, 0.0, TextAlign::Left),
            text(6.0, 1.0, TextAlign::Center),
            text(12.0, 2.0, TextAlign::Right),
        ];
        draw_commands(&mut buf, area, &cmds);
        assert_eq!(row_text(&buf, 0), " abc        ");
        assert_eq!(row_text(&buf, 1), "     abc    ");
        assert_eq!(row_text(&buf, 2), "         abc");
    }

    #[test]
    fn lines_and_clipping() {
        let area = Rect::new(0, 0, 5, 4);
        let mut buf = Buffer::empty(area);
        let cmds = vec![
            RenderCommand::DrawLine {
                from: Point::new(2.0, 0.0),
                to: Point::new(2.0, 3.0),
                color: ThemeToken::GridLine,
                dashed: true,
            },
            RenderCommand::DrawLine {
                from: Point::new(0.0, 3.0),
                to: Point::new(40.0, 3.0),
                color: ThemeToken::AxisLine,
                dashed: false,
            },
        ];
        draw_commands(&mut buf, area, &cmds);
        assert_eq!(row_text(&buf, 0), "  ┆  ");
        assert_eq!(row_text(&buf, 2), "  ┆  ");
        assert_eq!(row_text(&buf, 3), "─────");
    }

    #[test]
    fn full_chart_shows_rows_bottom_up() {
        let (timeline, _) = Timeline::from_records([
            IntervalRecord::new(0, 0.0, 4.0),
            IntervalRecord::new(-1, 4.0, 6.0),
            IntervalRecord::new(1, 6.0, 10.0),
        ]);
        let chart = build_chart(&timeline, "t.csv", &LayoutOptions::default()).unwrap();
        let area = Rect::new(0, 0, 60, 8);
        let mut buf = Buffer::empty(area);
        draw_commands(&mut buf, area, &render_gantt(&chart, &Viewport::new(60.0, 8.0)));

        // Plot rows 2..5 hold P1, P0, IDLE from top to bottom.
        assert!(row_text(&buf, 2).trim_start().starts_with("P1"));
        assert!(row_text(&buf, 3).trim_start().starts_with("P0"));
        assert!(row_text(&buf, 4).trim_start().starts_with("IDLE"));
        assert!(row_text(&buf, 0).contains("Gráfico de Gantt"));
        assert!(row_text(&buf, 7).contains("Tempo"));
    }
}
