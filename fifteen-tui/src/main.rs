use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fifteen_core::{Board, Direction, MoveOutcome, Scrambler, DEFAULT_MOVES};
use log::debug;
use ratatui::{prelude::*, widgets::*};

#[derive(Parser, Debug)]
#[command(name = "fifteen", version, about = "Slide the numbered tiles into ascending order")]
struct Cli {
    /// Scramble seed. Omit for a fresh shuffle every run.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Random moves used to scramble the board.
    #[arg(short, long, default_value_t = DEFAULT_MOVES)]
    moves: usize,
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, won: bool) {
    let mut lines: Vec<Line> = vec![Line::from("")];
    for row in board.rows() {
        let mut spans: Vec<Span> = vec![Span::raw("  ")];
        for &tile in row {
            let mut style = Style::default();
            if tile.is_empty() {
                style = style.fg(Color::DarkGray);
            } else if won {
                style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(tile.to_string(), style));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    let block = Block::default().borders(Borders::ALL).title("Fifteen");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    debug!("scrambling with {} moves, seed {:?}", cli.moves, cli.seed);

    let mut scrambler = Scrambler::new(cli.seed);
    let mut board = Board::new();
    scrambler.scramble(&mut board, cli.moves);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut board, &mut scrambler, cli.moves);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err:#}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    board: &mut Board,
    scrambler: &mut Scrambler,
    scramble_moves: usize,
) -> Result<()> {
    let mut won = board.is_solved();
    let mut status = String::from("Scrambled. Slide tiles with w/a/s/d.");
    loop {
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(ratatui::layout::Direction::Vertical)
                .constraints([Constraint::Min(11), Constraint::Length(4)])
                .split(f.size());
            draw_board(f, chunks[0], board, won);

            let help_text = format!(
                "w/a/s/d or arrows = slide | n = new scramble | q = quit\nStatus: {}",
                status
            );
            let help =
                Paragraph::new(help_text).block(Block::default().borders(Borders::ALL).title("Help"));
            f.render_widget(help, chunks[1]);
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(k) = event::read()? {
                match k.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(())
                    }
                    KeyCode::Char('n') => {
                        *board = Board::new();
                        scrambler.scramble(board, scramble_moves);
                        won = board.is_solved();
                        status = "Scrambled.".into();
                    }
                    code => {
                        if won {
                            continue;
                        }
                        let dir = match code {
                            KeyCode::Up => Some(Direction::Up),
                            KeyCode::Down => Some(Direction::Down),
                            KeyCode::Left => Some(Direction::Left),
                            KeyCode::Right => Some(Direction::Right),
                            KeyCode::Char(ch) => Direction::try_from(ch).ok(),
                            _ => None,
                        };
                        if let Some(dir) = dir {
                            match board.apply_move(dir) {
                                MoveOutcome::Moved => {
                                    if board.is_solved() {
                                        won = true;
                                        status =
                                            "You won! Press n for a new game or q to quit.".into();
                                    } else {
                                        status = format!("Moved {}.", dir);
                                    }
                                }
                                MoveOutcome::Blocked => {
                                    status = format!("No tile can slide {}.", dir);
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
