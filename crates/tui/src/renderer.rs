use std::io::stdout;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use demo_state_core::catalog::{ROLES, SCENARIOS, next_option};
use demo_state_core::{DemoSession, Location, MemoryLocation, lookup};
use demo_state_protocol::{SelectionPatch, ThemeColors, ThemeToken};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

type Session = DemoSession<MemoryLocation>;

fn token_color(colors: &ThemeColors, token: ThemeToken) -> Color {
    let c = colors.resolve(token);
    Color::Rgb(c.r, c.g, c.b)
}

/// What the event loop should do after a key press.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Apply one key press to the session. Returns the flow and a status line.
fn handle_key(session: &mut Session, code: KeyCode) -> (Flow, Option<String>) {
    let current = session.selection().clone();
    let patch = match code {
        KeyCode::Char('q') | KeyCode::Esc => return (Flow::Quit, None),
        KeyCode::Char('r') => next_option(&ROLES, &current.role).map(|r| SelectionPatch::default().role(r)),
        KeyCode::Char('c') => {
            let ids: Vec<&str> = lookup::clients().iter().map(|c| c.id).collect();
            next_option(&ids, &current.client_id).map(|id| SelectionPatch::default().client_id(id))
        }
        KeyCode::Char('s') => {
            next_option(&SCENARIOS, &current.scenario).map(|s| SelectionPatch::default().scenario(s))
        }
        KeyCode::Char('v') => Some(SelectionPatch::default().version(current.version.next())),
        KeyCode::Char('t') => Some(SelectionPatch::default().theme_mode(current.theme_mode.toggled())),
        KeyCode::Char('p') => session.recent().latest().map(SelectionPatch::from),
        KeyCode::Char('0') => {
            let status = session
                .reset_to_default()
                .map_or("Already at default", |_| "Reset to default");
            return (Flow::Continue, Some(status.to_owned()));
        }
        KeyCode::Char('w') | KeyCode::Enter => {
            let status = match session.save_current_instance() {
                Some(i) => format!("Saved instance {}", i + 1),
                None => "Instance already saved".to_owned(),
            };
            return (Flow::Continue, Some(status));
        }
        KeyCode::Char(d @ '1'..='9') => {
            let index = usize::from(d as u8 - b'1');
            if index >= session.instances().len() {
                return (Flow::Continue, Some(format!("No instance {}", index + 1)));
            }
            session.go_to_instance(index);
            return (Flow::Continue, Some(format!("Instance {}", index + 1)));
        }
        _ => None,
    };
    if let Some(patch) = patch {
        session.update(patch);
    }
    (Flow::Continue, None)
}

fn draw(frame: &mut Frame, session: &Session, status: Option<&str>) {
    let store = session.store();
    let selection = store.selection();
    let colors = store.theme();
    let profile = store.user_profile();
    let primary = token_color(&colors, ThemeToken::Primary);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", store.client_name()),
            Style::default().fg(Color::Black).bg(primary).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" {} · {} ", profile.full_name(), profile.title)),
    ]));
    frame.render_widget(header, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    let field = |name: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{name:<10}"), Style::default().fg(Color::DarkGray)),
            Span::raw(value),
        ])
    };
    let mut lines = vec![
        field("role", selection.role.clone()),
        field("client", selection.client_id.clone()),
        field("scenario", selection.scenario.clone()),
        field("theme", selection.theme_mode.to_string()),
        field("version", selection.version.to_string()),
        Line::default(),
    ];
    lines.extend(ThemeToken::ALL.iter().map(|&token| {
        Line::from(vec![
            Span::styled("  ██ ", Style::default().fg(token_color(&colors, token))),
            Span::raw(token.label()),
        ])
    }));
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Selection ")),
        columns[0],
    );

    let lists = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[1]);

    let recent: Vec<ListItem> = session
        .recent()
        .entries()
        .map(|s| ListItem::new(format!("{} / {} / {} ({})", s.role, s.client_id, s.scenario, s.version)))
        .collect();
    frame.render_widget(
        List::new(recent).block(Block::default().borders(Borders::ALL).title(" Recent [p] ")),
        lists[0],
    );

    let current = session.instances().current_index();
    let instances: Vec<ListItem> = session
        .instances()
        .instances()
        .iter()
        .enumerate()
        .map(|(i, instance)| {
            let s = &instance.selection;
            let text = format!(
                "{}. {} · {} / {} / {} / {}",
                i + 1,
                instance.client_name,
                s.role,
                s.scenario,
                s.theme_mode,
                s.version
            );
            let style = if current == Some(i) {
                Style::default().fg(primary).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(text).style(style)
        })
        .collect();
    frame.render_widget(
        List::new(instances).block(Block::default().borders(Borders::ALL).title(" Instances [1-9] ")),
        lists[1],
    );

    let footer = Paragraph::new(vec![
        Line::from(session.location().href()),
        Line::from(Span::styled(
            status.unwrap_or(
                "r role | c client | s scenario | v version | t theme | w save | 0 reset | q quit",
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, rows[2]);
}

pub fn run_tui(session: &mut Session) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut status: Option<String> = None;
    loop {
        terminal.draw(|frame| draw(frame, session, status.as_deref()))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let (flow, message) = handle_key(session, key.code);
                if flow == Flow::Quit {
                    break;
                }
                status = message;
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
