//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Widget},
};
use tictac_engine::{GameState, Outcome, Player, Position, Square};
use unicode_width::UnicodeWidthStr;

use super::app::App;
use super::clock::rate;
use super::glyphs::Glyphs;
use super::layout::{BoardLayout, CELL_HEIGHT, CELL_WIDTH};

const HELP_TEXT: &str = "←↑↓→ move · Enter place · r reset · q quit";

/// Draws one frame.
pub fn draw(frame: &mut Frame, app: &App, glyphs: &Glyphs) {
    let area = frame.area();
    match app.layout_for(area) {
        Some(layout) => {
            let board = BoardWidget {
                game: app.game(),
                glyphs,
                layout: &layout,
                blink_on: app.blink_on(),
            };
            frame.render_widget(board, layout.outer);
            draw_footer(frame, app.game(), &layout);
        }
        None => draw_too_small(frame.buffer_mut(), area, app.min_size()),
    }

    if app.show_stats() {
        draw_stats(frame, app, area);
    }
}

/// The bordered board with every cell.
struct BoardWidget<'a> {
    game: &'a GameState,
    glyphs: &'a Glyphs,
    layout: &'a BoardLayout,
    blink_on: bool,
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::bordered()
            .border_type(BorderType::Plain)
            .border_style(Style::default().fg(Color::DarkGray))
            .render(area, buf);

        let board = self.game.board();
        let columns = board.width() as u16;
        let rows = board.height() as u16;
        let separator = Style::default().fg(Color::DarkGray);
        let inner = self.layout.inner;

        // Vertical separators between columns, horizontal ones between rows.
        for column in 1..columns {
            let x = inner.x + column * (CELL_WIDTH + 1) - 1;
            for y in inner.top()..inner.bottom() {
                set_char(buf, x, y, '│', separator);
            }
        }
        for row in 1..rows {
            let y = inner.y + row * (CELL_HEIGHT + 1) - 1;
            for x in inner.left()..inner.right() {
                let on_column = (1..columns).any(|c| x == inner.x + c * (CELL_WIDTH + 1) - 1);
                set_char(buf, x, y, if on_column { '┼' } else { '─' }, separator);
            }
        }

        for (x, y) in board.positions() {
            let square = *board.must_get(x, y);
            let rect = self.layout.cell_rect(x as u16, y as u16);
            let style = self.cell_style(Position::new(x, y), square);
            buf.set_style(rect, style);

            let glyph = self.glyphs.for_square(square);
            for (gx, gy) in glyph.positions() {
                let ch = *glyph.must_get(gx, gy);
                set_char(buf, rect.x + 1 + gx as u16, rect.y + gy as u16, ch, style);
            }
        }
    }
}

impl BoardWidget<'_> {
    fn cell_style(&self, position: Position, square: Square) -> Style {
        let mut style = match square {
            Square::Empty => Style::default().fg(Color::DarkGray),
            Square::Occupied(player) => player_style(player),
        };
        if self.blink_on && self.game.is_winning_square(position) {
            style = style.bg(Color::Yellow).fg(Color::Black);
        }
        if *self.game.focus() == position {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }
}

fn player_style(player: Player) -> Style {
    match player {
        Player::X => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Player::O => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

fn set_char(buf: &mut Buffer, x: u16, y: u16, ch: char, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_char(ch).set_style(style);
    }
}

fn draw_footer(frame: &mut Frame, game: &GameState, layout: &BoardLayout) {
    let status_style = match game.outcome() {
        Outcome::InProgress => player_style(*game.current_player()),
        Outcome::Won(player) => player_style(*player).add_modifier(Modifier::UNDERLINED),
        Outcome::Tie => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    };
    let status = Line::from(Span::styled(game.status_text(), status_style)).centered();
    frame.render_widget(status, layout.status);

    let help = Line::from(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray))).centered();
    frame.render_widget(help, layout.help);
}

/// Shown instead of the board when the terminal is below the minimum size.
fn draw_too_small(buf: &mut Buffer, area: Rect, (min_w, min_h): (u16, u16)) {
    let mid_x = area.x + area.width / 2;
    let mid_y = area.y + area.height / 2;

    let base = Style::default();
    let dimension = |value: u16, min: u16| {
        let color = if value < min { Color::Red } else { Color::Green };
        Span::styled(value.to_string(), base.fg(color).add_modifier(Modifier::BOLD))
    };

    set_centered_spans(buf, area, mid_x, mid_y, &[Span::styled("Screen too small!", base)]);
    set_centered_spans(
        buf,
        area,
        mid_x,
        mid_y.saturating_add(1),
        &[
            Span::styled("Current: ", base),
            dimension(area.width, min_w),
            Span::styled(" x ", base),
            dimension(area.height, min_h),
        ],
    );
}

/// Writes `spans` so that together they are centered on column `x`.
fn set_centered_spans(buf: &mut Buffer, area: Rect, x: u16, y: u16, spans: &[Span<'_>]) {
    if y >= area.bottom() {
        return;
    }
    let total: usize = spans.iter().map(|s| s.content.width()).sum();
    let mut column = x.saturating_sub((total / 2) as u16).max(area.x);
    for span in spans {
        if column >= area.right() {
            break;
        }
        let max_width = (area.right() - column) as usize;
        let (end, _) = buf.set_stringn(column, y, &span.content, max_width, span.style);
        column = end;
    }
}

fn draw_stats(frame: &mut Frame, app: &App, area: Rect) {
    let clock = app.clock();
    let lines = [
        format!("Render: {:.2}/s", app.stats().render_rate()),
        format!("Update: {:.2}/s", rate(clock.step())),
        format!("Lag: {:.2} ms", clock.lag().as_secs_f64() * 1000.0),
        format!("Resolution: {} {}", area.width, area.height),
    ];
    let style = Style::default().fg(Color::DarkGray);
    for (row, text) in lines.iter().enumerate() {
        let row = row as u16;
        if row >= area.height {
            break;
        }
        let line_area = Rect::new(area.x, area.y + row, area.width, 1);
        frame.render_widget(Line::from(Span::styled(text.as_str(), style)), line_area);
    }
}
