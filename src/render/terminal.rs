//! ratatui implementation of [`Renderer`].

use crate::column::ColumnSnapshot;
use crate::error::Result;
use crate::render::layout::{ColumnAreas, DashboardLayout};
use crate::render::Renderer;

use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{BarChart, Block, Borders, Paragraph, Sparkline};
use ratatui::{Frame, Terminal};
use std::io::{self, stdout, Stdout};

/// Width of each bar in the frequency chart.
const BAR_WIDTH: u16 = 10;

/// Colors cycled through the share panel entries.
const SHARE_COLORS: [Color; 6] =
    [Color::Cyan, Color::Yellow, Color::Magenta, Color::Green, Color::Blue, Color::Red];

/// Data staged for the next frame.
#[derive(Debug, Default)]
struct View {
    layout: DashboardLayout,
    columns: Vec<ColumnSnapshot>,
    throughput: Vec<u64>,
}

/// Draws the dashboard on a ratatui terminal.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    view: View,
}

impl TerminalRenderer<CrosstermBackend<Stdout>> {
    /// Switches stdout to raw mode on the alternate screen.
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;
        Self::new(CrosstermBackend::new(stdout()))
    }

    /// Restores the terminal left by [`TerminalRenderer::enter`].
    pub fn restore(mut self) -> Result<()> {
        disable_raw_mode()?;
        stdout().execute(LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl<B: Backend> TerminalRenderer<B> {
    /// Wraps an arbitrary backend.
    pub fn new(backend: B) -> Result<Self> {
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal, view: View::default() })
    }

    /// The underlying backend, for inspection in tests.
    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn set_layout(&mut self, columns: usize) -> Result<()> {
        self.view.layout = DashboardLayout::new(columns);
        self.view.columns = vec![ColumnSnapshot::default(); columns];
        Ok(())
    }

    fn relayout(&mut self, width: u16, height: u16) -> Result<()> {
        self.terminal.resize(Rect::new(0, 0, width, height))?;
        Ok(())
    }

    fn dimensions(&self) -> Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }

    fn paint_column(&mut self, index: usize, snapshot: ColumnSnapshot) -> Result<()> {
        if let Some(slot) = self.view.columns.get_mut(index) {
            *slot = snapshot;
        }
        Ok(())
    }

    fn paint_throughput(&mut self, series: &[u64]) -> Result<()> {
        self.view.throughput.clear();
        self.view.throughput.extend_from_slice(series);
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        let Self { terminal, view } = self;
        terminal.draw(|frame| draw(frame, view))?;
        Ok(())
    }
}

fn draw(frame: &mut Frame, view: &View) {
    let (throughput_area, column_areas) = view.layout.calculate(frame.area());

    draw_throughput(frame, &view.throughput, throughput_area);
    for (index, (snapshot, areas)) in view.columns.iter().zip(column_areas).enumerate() {
        draw_column(frame, index, snapshot, areas);
    }
}

fn draw_throughput(frame: &mut Frame, series: &[u64], area: Rect) {
    let block = Block::default().title(" / sec ").borders(Borders::ALL);
    // Show the newest samples that fit inside the borders.
    let visible = usize::from(area.width.saturating_sub(2));
    let tail = &series[series.len().saturating_sub(visible)..];

    let sparkline = Sparkline::default()
        .block(block)
        .style(Style::default().fg(Color::Green))
        .data(tail);
    frame.render_widget(sparkline, area);
}

fn draw_column(frame: &mut Frame, index: usize, snapshot: &ColumnSnapshot, areas: ColumnAreas) {
    let data: Vec<(&str, u64)> = snapshot.pairs().collect();
    let bars = BarChart::default()
        .block(Block::default().title(format!(" column {} ", index + 1)).borders(Borders::ALL))
        .bar_width(BAR_WIDTH)
        .bar_gap(1)
        .data(data.as_slice());
    frame.render_widget(bars, areas.bars);

    let share = Paragraph::new(share_lines(snapshot)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(share, areas.share);

    let log = Paragraph::new(snapshot.recent_text.as_str()).block(Block::default().borders(Borders::ALL));
    frame.render_widget(log, areas.log);
}

/// One `label  NN.N%` line per label, in display order.
fn share_lines(snapshot: &ColumnSnapshot) -> Vec<Line<'_>> {
    let total = snapshot.total();
    if total == 0 {
        return Vec::new();
    }

    snapshot
        .pairs()
        .enumerate()
        .map(|(i, (label, count))| {
            let percent = count as f64 * 100.0 / total as f64;
            let color = SHARE_COLORS[i % SHARE_COLORS.len()];
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(color)),
                Span::raw(format!("{label} {percent:.1}%")),
            ])
        })
        .collect()
}

impl<B: Backend> std::fmt::Debug for TerminalRenderer<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalRenderer").field("view", &self.view).finish_non_exhaustive()
    }
}

/// Whether standard input is an interactive terminal (nothing piped in).
#[must_use]
pub fn stdin_is_terminal() -> bool {
    use crossterm::tty::IsTty;
    io::stdin().is_tty()
}
