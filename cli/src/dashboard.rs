use std::{io, time::Duration};

use anyhow::Result;
use chrono::{Datelike, Local};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Gauge, Padding, Paragraph},
};

use casewatch_core::{
    month_name, percentage_share, short_month_name, DashboardSnapshot, DashboardUseCase,
    StatsRepository,
};

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    cases: Color,
    reports: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan, // Highlights
    muted: Color::DarkGray,
    text: Color::White,
    cases: Color::Blue,
    reports: Color::Green,
};

pub struct DashboardApp {
    pub snapshot: DashboardSnapshot,
}

impl DashboardApp {
    pub fn new(snapshot: DashboardSnapshot) -> Self {
        Self { snapshot }
    }
}

pub fn run<R: StatsRepository>(usecase: &DashboardUseCase<R>) -> Result<()> {
    // Data setup
    let snapshot = usecase.snapshot()?;

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // App setup
    let mut app = DashboardApp::new(snapshot);

    // Main loop
    let result = loop {
        if let Err(err) = terminal.draw(|f| ui(f, &app)) {
            break Err(err.into());
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break Ok(()),
                        KeyCode::Char('r') => match usecase.snapshot() {
                            Ok(snapshot) => app.snapshot = snapshot,
                            Err(err) => break Err(err),
                        },
                        _ => {}
                    }
                }
            }
        }
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn ui(frame: &mut Frame, app: &DashboardApp) {
    let size = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Chart + Sidebar
            Constraint::Length(1), // Footer
        ])
        .split(size);

    // --- Header ---
    let now = Local::now();
    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(THEME.muted));

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24),
            Constraint::Min(1),
            Constraint::Length(30),
        ])
        .split(main_layout[0]);

    let app_title = Paragraph::new(Span::styled(
        "CASEWATCH DASHBOARD",
        Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(app_title, header_layout[0]);

    let period = Paragraph::new(Span::styled(
        format!("through {} {}", month_name(now.month()), now.year()),
        Style::default().fg(THEME.text),
    ))
    .alignment(Alignment::Right)
    .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(period, header_layout[2]);

    frame.render_widget(header_block, main_layout[0]);

    // --- Main Content Split ---
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(75), // Chart Area
            Constraint::Length(1),      // Gutter
            Constraint::Percentage(25), // Info Panel
        ])
        .split(main_layout[1]);

    draw_chart(frame, &app.snapshot, content_chunks[0]);
    draw_info_panel(frame, &app.snapshot, content_chunks[2]);

    // --- Footer ---
    let help = Line::from(vec![
        Span::styled("REFRESH: ", Style::default().fg(THEME.muted)),
        Span::styled("r", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    let footer = Paragraph::new(help)
        .alignment(Alignment::Center)
        .style(Style::default().fg(THEME.muted));
    frame.render_widget(footer, main_layout[2]);
}

fn draw_chart(frame: &mut Frame, snapshot: &DashboardSnapshot, area: Rect) {
    let mut bar_data = Vec::new();

    for record in &snapshot.combined {
        // Cases (Blue) - short label here so the pair reads as one group
        bar_data.push((
            short_month_name(record.month_number).to_string(),
            record.cases,
            THEME.cases,
        ));

        // Reports (Green)
        bar_data.push(("".to_string(), record.reports, THEME.reports));

        // Spacer
        bar_data.push(("".to_string(), 0, Color::Reset));
    }

    let max = snapshot
        .combined
        .iter()
        .map(|record| record.cases.max(record.reports))
        .max()
        .unwrap_or(0)
        .max(1);

    let bar_items: Vec<Bar> = bar_data
        .iter()
        .map(|(label, value, color)| {
            Bar::default()
                .label(label.as_str())
                .value(*value)
                .style(Style::default().fg(*color))
                .text_value(if *value > 0 {
                    value.to_string()
                } else {
                    "".to_string()
                })
        })
        .collect();

    let chart_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(" Cases vs Reports (estimated by month) ");

    let chart = BarChart::default()
        .block(chart_block)
        .bar_width(5)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bar_items))
        .max(max);

    frame.render_widget(chart, area);
}

fn draw_info_panel(frame: &mut Frame, snapshot: &DashboardSnapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(11), // Totals
            Constraint::Min(1),     // Gauge
        ])
        .split(area);

    // 1. Overview Card
    let info_text = vec![
        Line::from(vec![Span::styled(
            "Totals",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Cases:     ", Style::default().fg(THEME.muted)),
            Span::styled(
                snapshot.total_cases.to_string(),
                Style::default().fg(THEME.cases).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("This month:", Style::default().fg(THEME.muted)),
            Span::styled(
                format!(" {} ({:+.1}%)", snapshot.cases_this_month, snapshot.cases_growth),
                Style::default().fg(THEME.text),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Reports:   ", Style::default().fg(THEME.muted)),
            Span::styled(
                snapshot.total_reports.to_string(),
                Style::default()
                    .fg(THEME.reports)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("This month:", Style::default().fg(THEME.muted)),
            Span::styled(
                format!(
                    " {} ({:+.1}%)",
                    snapshot.reports_this_month, snapshot.reports_growth
                ),
                Style::default().fg(THEME.text),
            ),
        ]),
    ];

    let info_block = Paragraph::new(info_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME.muted))
            .title(" Summary "),
    );
    frame.render_widget(info_block, chunks[0]);

    // 2. Current-month share of all cases
    let share = percentage_share(snapshot.cases_this_month, snapshot.total_cases);
    let label = format!("{:.0}% of all cases", share);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" This Month ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME.muted)),
        )
        .gauge_style(Style::default().fg(THEME.primary))
        .ratio((share / 100.0).min(1.0))
        .label(label);

    frame.render_widget(gauge, chunks[1]);
}
