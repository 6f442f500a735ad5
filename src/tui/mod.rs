//! TUI module - weekly program dashboard with ratatui

use anyhow::Result;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use std::io::{Stdout, stdout};

use crate::program::{WeeklyProgram, day_name};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// App state for TUI
pub struct App {
    program: WeeklyProgram,
    should_quit: bool,
}

impl App {
    pub fn new(program: WeeklyProgram) -> Self {
        Self { program, should_quit: false }
    }

    /// Run the TUI application
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = init_terminal()?;

        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_events()?;
        }

        restore_terminal()?;
        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
            ])
            .split(area);

        // Header
        let header = Paragraph::new("hebdofit - Programme hebdomadaire")
            .style(Style::default().fg(Color::Cyan).bold())
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        // Program table, one row per programmed exercise
        let rows: Vec<Row> = self
            .program
            .exercises
            .iter()
            .map(|p| {
                Row::new(vec![
                    Cell::from(day_name(p.day_of_week)),
                    Cell::from(p.exercise.exercise.name.clone()),
                    Cell::from(format!("{} x {}", p.sets.sets, p.sets.reps)),
                    Cell::from(format!("{}s", p.sets.rest_seconds)),
                    Cell::from(p.exercise.exercise.niveau.label()),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(10),
                Constraint::Length(24),
                Constraint::Length(10),
                Constraint::Length(8),
                Constraint::Min(12),
            ],
        )
        .header(
            Row::new(vec!["Jour", "Exercice", "Séries", "Repos", "Niveau"])
                .style(Style::default().bold()),
        )
        .block(Block::default().borders(Borders::ALL).title("Séances"));

        frame.render_widget(table, chunks[1]);

        // Footer
        let footer = Paragraph::new(format!(
            "{} jour(s)/semaine | ~{} min au total | q: quitter",
            self.program.days_per_week, self.program.total_duration
        ))
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, chunks[2]);
    }

    fn handle_events(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && key.code == KeyCode::Char('q')
        {
            self.should_quit = true;
        }
        Ok(())
    }
}

fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
