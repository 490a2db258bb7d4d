use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{DefaultTerminal, Frame};

use crate::chart::{DaysChart, render_chart};

/// Full-screen terminal view of a chart
pub struct ChartViewer {
    chart: DaysChart,
    exit: bool,
}

impl ChartViewer {
    pub fn new(chart: DaysChart) -> Self {
        Self { chart, exit: false }
    }

    /// runs the viewer's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        while !self.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    pub fn draw(&self, frame: &mut Frame) {
        render_chart(frame, frame.area(), &self.chart);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => self.exit = true,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.exit = true
            }
            KeyCode::Char('g') => {
                self.chart.grid = !self.chart.grid;
                tracing::debug!(grid = self.chart.grid, "toggled grid");
            }
            _ => {}
        }
    }
}
