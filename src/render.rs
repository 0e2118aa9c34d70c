use crate::consts;
use crate::game::direction::Direction;
use crate::game::grid::Cell;
use crate::game::{Phase, Snapshot};
use crate::util::center_rect;
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Terminal,
};
use std::io;

/// Somewhere game frames are drawn
pub(crate) trait RenderSink {
    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()>;
}

impl<B: Backend> RenderSink for Terminal<B> {
    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        self.draw(|frame| frame.render_widget(snapshot, frame.area()))?;
        Ok(())
    }
}

impl Widget for &Snapshot {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [status_area, board_area, msg_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);
        Line::styled(
            format!(" Length: {}", self.chain_positions.len()),
            consts::STATUS_BAR_STYLE,
        )
        .render(status_area, buf);

        let side = self.grid_size.saturating_add(2);
        let block_area = center_rect(board_area, Size::new(side, side));
        Block::bordered().render(block_area, buf);
        let mut grid = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        for &cell in self.chain_positions.iter().skip(1) {
            grid.draw_cell(cell, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        grid.draw_cell(self.food_position, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        // Draw the head last so that, on a collision, it overwrites whatever it
        // ran into
        if let Some(&head) = self.chain_positions.first() {
            if self.phase == Phase::GameOver {
                grid.draw_cell(head, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
            } else {
                grid.draw_cell(head, head_symbol(self.heading), consts::SNAKE_STYLE);
            }
        }

        if self.phase == Phase::GameOver {
            Line::from_iter([
                Span::raw(" GAME OVER — Restart ("),
                Span::styled("r", consts::KEY_STYLE),
                Span::raw(") — Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ])
            .render(msg_area, buf);
        }
    }
}

fn head_symbol(heading: Direction) -> char {
    match heading {
        Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
        Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
        Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
        Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
    }
}

/// The grid's interior, addressed in grid cells
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Draw `symbol` at `cell`.  Cells outside the canvas (such as where a
    /// snake that has left the grid now has its head) are skipped.
    fn draw_cell(&mut self, cell: Cell, symbol: char, style: Style) {
        let (Ok(cx), Ok(cy)) = (u16::try_from(cell.x), u16::try_from(cell.y)) else {
            return;
        };
        if cx >= self.area.width || cy >= self.area.height {
            return;
        }
        let Some(x) = self.area.x.checked_add(cx) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(cy) else {
            return;
        };
        if let Some(c) = self.buf.cell_mut((x, y)) {
            c.set_char(symbol);
            c.set_style(Style::reset().patch(style));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn snapshot(
        cells: &[(i32, i32)],
        heading: Direction,
        food: (i32, i32),
        phase: Phase,
    ) -> Snapshot {
        Snapshot {
            chain_positions: cells.iter().map(|&(x, y)| Cell::new(x, y)).collect(),
            heading,
            food_position: Cell::new(food.0, food.1),
            grid_size: 5,
            phase,
        }
    }

    #[test]
    fn playing() {
        let snap = snapshot(
            &[(2, 2), (2, 3), (2, 4)],
            Direction::Up,
            (4, 0),
            Phase::Playing,
        );
        let area = Rect::new(0, 0, 41, 9);
        let mut buffer = Buffer::empty(area);
        snap.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            " Length: 3",
            "                 ┌─────┐                 ",
            "                 │    ●│                 ",
            "                 │     │                 ",
            "                 │  v  │                 ",
            "                 │  ⚬  │                 ",
            "                 │  ⚬  │                 ",
            "                 └─────┘                 ",
            "",
        ]);
        expected.set_style(Rect::new(0, 0, 41, 1), consts::STATUS_BAR_STYLE);
        expected.set_style(Rect::new(22, 2, 1, 1), consts::FOOD_STYLE);
        expected.set_style(Rect::new(20, 4, 1, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(20, 5, 1, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(20, 6, 1, 1), consts::SNAKE_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn game_over_on_terminal() {
        let snap = snapshot(
            &[(4, 2), (3, 2), (2, 2)],
            Direction::Right,
            (0, 0),
            Phase::GameOver,
        );
        let mut terminal =
            Terminal::new(TestBackend::new(41, 9)).expect("test backend should not fail");
        RenderSink::render(&mut terminal, &snap).expect("rendering should not fail");
        let mut expected = Buffer::with_lines([
            " Length: 3",
            "                 ┌─────┐                 ",
            "                 │●    │                 ",
            "                 │     │                 ",
            "                 │  ⚬⚬×│                 ",
            "                 │     │                 ",
            "                 │     │                 ",
            "                 └─────┘                 ",
            " GAME OVER — Restart (r) — Quit (q)",
        ]);
        expected.set_style(Rect::new(0, 0, 41, 1), consts::STATUS_BAR_STYLE);
        expected.set_style(Rect::new(18, 2, 1, 1), consts::FOOD_STYLE);
        expected.set_style(Rect::new(20, 4, 1, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(21, 4, 1, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(22, 4, 1, 1), consts::COLLISION_STYLE);
        expected.set_style(Rect::new(22, 8, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(33, 8, 1, 1), consts::KEY_STYLE);
        pretty_assertions::assert_eq!(terminal.backend().buffer(), &expected);
    }

    #[test]
    fn head_off_grid_is_not_drawn() {
        let snap = snapshot(
            &[(2, -1), (2, 0), (2, 1)],
            Direction::Up,
            (4, 4),
            Phase::GameOver,
        );
        let area = Rect::new(0, 0, 41, 9);
        let mut buffer = Buffer::empty(area);
        snap.render(area, &mut buffer);
        let mut utf8 = [0; 4];
        let collision: &str = consts::COLLISION_SYMBOL.encode_utf8(&mut utf8);
        assert!(buffer.content().iter().all(|c| c.symbol() != collision));
        let mut utf8 = [0; 4];
        let body: &str = consts::SNAKE_BODY_SYMBOL.encode_utf8(&mut utf8);
        assert_eq!(buffer[(20, 2)].symbol(), body);
        assert_eq!(buffer[(20, 3)].symbol(), body);
    }
}
