use std::io::{self, stdout};
use std::thread;
use std::time::Duration;

use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use anagrep_search::{MatchResults, SearchPhase, SearchSession, Segment, find, segment};

use super::find::summary;

const DEMO_TEXT: &str = "ABDCKDHJABDCBDAUOQJDBADCLDLCHBCBABCBAABCDAJDBABDCABDABDBCADBCASSJGABCDAUTACBDBQWUDNCDBCADKDHABDJGBDABCBDBADCACADBADBCBAD";
const DEMO_PATTERN: &str = "ABCD";

// Short delay before the scan runs so the searching state gets a frame
// to paint, matching the original behavior.
const SEARCH_DELAY: Duration = Duration::from_millis(50);
const POLL_INTERVAL: Duration = Duration::from_millis(50);

struct SearchDone {
    generation: u64,
    results: MatchResults,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Focus {
    Text,
    Pattern,
}

struct App {
    session: SearchSession,
    text_input: String,
    pattern_input: String,
    focus: Focus,
    list_state: ListState,
    tx: flume::Sender<SearchDone>,
    rx: flume::Receiver<SearchDone>,
    should_quit: bool,
}

impl App {
    fn new() -> Self {
        let (tx, rx) = flume::unbounded();
        Self {
            session: SearchSession::new(),
            text_input: DEMO_TEXT.to_string(),
            pattern_input: DEMO_PATTERN.to_string(),
            focus: Focus::Text,
            list_state: ListState::default(),
            tx,
            rx,
            should_quit: false,
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Text => Focus::Pattern,
            Focus::Pattern => Focus::Text,
        };
    }

    fn insert_char(&mut self, c: char) {
        match self.focus {
            Focus::Text => self.text_input.push(c),
            Focus::Pattern => self.pattern_input.push(c),
        }
    }

    fn backspace(&mut self) {
        match self.focus {
            Focus::Text => self.text_input.pop(),
            Focus::Pattern => self.pattern_input.pop(),
        };
    }

    /// Kick off a deferred search on a worker thread. Disabled while a
    /// search is in flight or while either field is empty.
    fn trigger_search(&mut self) {
        self.session.set_text(&self.text_input);
        self.session.set_pattern(&self.pattern_input);
        if !self.session.can_search() {
            return;
        }
        let Some(generation) = self.session.begin_search() else {
            return;
        };
        self.list_state.select(None);

        let tx = self.tx.clone();
        let text = self.text_input.clone();
        let pattern = self.pattern_input.clone();
        thread::spawn(move || {
            thread::sleep(SEARCH_DELAY);
            let results = MatchResults::from_matches(find(&text, &pattern));
            let _ = tx.send(SearchDone {
                generation,
                results,
            });
        });
    }

    /// Feed finished searches to the session; stale generations are
    /// discarded there.
    fn drain_completions(&mut self) {
        while let Ok(done) = self.rx.try_recv() {
            if self.session.complete(done.generation, done.results) {
                self.list_state.select(self.session.results().selected());
            }
        }
    }

    fn next_match(&mut self) {
        if self.session.results().is_empty() {
            return;
        }
        self.session.next_match();
        self.list_state.select(self.session.results().selected());
    }

    fn previous_match(&mut self) {
        if self.session.results().is_empty() {
            return;
        }
        self.session.previous_match();
        self.list_state.select(self.session.results().selected());
    }
}

pub fn run() {
    if let Err(e) = run_tui() {
        eprintln!("Error: {}", e);
    }
}

fn run_tui() -> io::Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    let mut app = App::new();

    loop {
        app.drain_completions();
        terminal.draw(|f| ui(f, &mut app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Esc => app.should_quit = true,
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.should_quit = true
                        }
                        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
                        KeyCode::Enter => app.trigger_search(),
                        KeyCode::Backspace => app.backspace(),
                        KeyCode::Up => app.previous_match(),
                        KeyCode::Down => app.next_match(),
                        KeyCode::Char(c) => app.insert_char(c),
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    Ok(())
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // input string
            Constraint::Length(3), // pattern
            Constraint::Length(1), // status line
            Constraint::Min(0),    // results
        ])
        .split(f.area());

    draw_input(
        f,
        chunks[0],
        " Input String ",
        &app.text_input,
        app.focus == Focus::Text,
    );
    draw_input(
        f,
        chunks[1],
        " Pattern ",
        &app.pattern_input,
        app.focus == Focus::Pattern,
    );

    let status = match app.session.phase() {
        SearchPhase::Idle => {
            " Enter a string and a pattern, then press Enter to find patterns.".to_string()
        }
        SearchPhase::Searching => " Searching for matches...".to_string(),
        SearchPhase::Results => format!(
            " {}",
            summary(app.session.results().count(), app.session.pattern())
        ),
    };
    let status_widget = Paragraph::new(status).style(Style::default().fg(Color::Cyan));
    f.render_widget(status_widget, chunks[2]);

    if app.session.phase() != SearchPhase::Idle {
        draw_results(f, chunks[3], app);
    }

    let help_text =
        " Esc: Quit | Tab: Switch Field | Enter: Find Patterns | Up/Down: Navigate Matches ";
    let help = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));

    let help_area = Rect {
        x: 0,
        y: f.area().height.saturating_sub(1),
        width: f.area().width,
        height: 1,
    };
    f.render_widget(help, help_area);
}

fn draw_input(f: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let display = if focused {
        format!("{value}\u{2588}")
    } else {
        value.to_string()
    };

    let widget = Paragraph::new(display).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_style(Style::default().bold())
            .border_style(border_style),
    );
    f.render_widget(widget, area);
}

fn draw_results(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let highlighted = Paragraph::new(highlighted_line(app))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Highlighted String "),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(highlighted, chunks[0]);

    let occurrences_block = Block::default()
        .borders(Borders::ALL)
        .title(" Found Occurrences ");

    if app.session.is_searching() {
        let placeholder = Paragraph::new("Searching...")
            .block(occurrences_block)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(placeholder, chunks[1]);
        return;
    }

    let results = app.session.results();
    if results.is_empty() {
        let empty = Paragraph::new("No patterns found.\nTry using a different string or pattern.")
            .block(occurrences_block)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = results
        .matches()
        .iter()
        .map(|m| ListItem::new(format!("Index: {:>5}  {}", m.index, m.value)))
        .collect();

    let list = List::new(items)
        .block(occurrences_block)
        .highlight_style(Style::default().bg(Color::Rgb(60, 60, 80)).bold())
        .highlight_symbol("> ");

    f.render_stateful_widget(list, chunks[1], &mut app.list_state);
}

fn highlighted_line(app: &App) -> Line<'static> {
    // In-flight searches have no results yet, so the text renders
    // unhighlighted, same as the original's loading card.
    let spans: Vec<Span> = segment(app.session.text(), app.session.results().matches())
        .into_iter()
        .map(|seg| match seg {
            Segment::Plain(part) => Span::raw(part),
            Segment::Highlighted(part) => Span::styled(
                part,
                Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
            ),
        })
        .collect();
    Line::from(spans)
}
