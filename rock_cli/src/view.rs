use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, Paragraph, Tabs},
    Frame,
};

use rock_core::calculations::{rmr_contributions, InputField, QQuality, SupportAdvice};
use rock_core::equations::ClassColor;

use crate::app::{App, Tab};
use crate::report::format_hours;

// --- Color Helpers ---
fn class_color(color: ClassColor) -> Color {
    match color {
        ClassColor::Green => Color::Green,
        ClassColor::Blue => Color::Blue,
        ClassColor::Yellow => Color::Yellow,
        ClassColor::Orange => Color::Rgb(255, 165, 0),
        ClassColor::Red => Color::Red,
    }
}

fn quality_color(quality: QQuality) -> Color {
    match quality {
        QQuality::VeryPoor => Color::Red,
        QQuality::Fair => Color::Yellow,
        QQuality::Good => Color::Green,
    }
}

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Render the whole dashboard.
pub fn render(app: &App, frame: &mut Frame) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Key help
        ])
        .split(frame.area());

    render_header(app, frame, outer[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(outer[1]);

    render_inputs(app, frame, body[0]);
    render_results(app, frame, body[1]);

    let help = Paragraph::new(Line::from(
        " ←/→ change  Shift+←/→ RQD ±10  ↑/↓ select  Tab switch  [/] span  q quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, outer[2]);
}

// --- Header ---
fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let results = app.state.results();
    let content = Line::from(vec![
        Span::styled(" RockRate ", bold()),
        Span::raw(" | RMR "),
        Span::styled(format!("{}", results.rmr_score), bold()),
        Span::raw("  Q "),
        Span::styled(format!("{}", results.q_value), bold()),
        Span::raw("  GSI "),
        Span::styled(format!("{}", results.gsi), bold()),
        Span::raw(format!(" | changes: {}", app.recalcs())),
    ]);

    let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

// --- Input Panel ---
fn render_inputs(app: &App, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let tabs = Tabs::new(Tab::ALL.iter().map(|tab| tab.title()))
        .select(app.tab.index())
        .highlight_style(bold().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL).title(" Inputs "));
    frame.render_widget(tabs, layout[0]);

    let mut items: Vec<ListItem> = app
        .tab
        .fields()
        .into_iter()
        .enumerate()
        .map(|(row, field)| {
            let style = if row == app.selected {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            ListItem::new(vec![
                Line::from(Span::styled(field.label(), bold())),
                Line::from(format!("  {}", choice_text(app, field))),
            ])
            .style(style)
        })
        .collect();

    if app.tab == Tab::QSystem {
        items.push(ListItem::new(Line::from(Span::styled(
            format!("RQD {} % (set on the RMR89 tab)", app.state.inputs().rqd),
            Style::default().fg(Color::DarkGray),
        ))));
    }

    let list = List::new(items).block(Block::default().borders(Borders::ALL));
    frame.render_widget(list, layout[1]);
}

/// Text shown for a field's current value
fn choice_text(app: &App, field: InputField) -> String {
    let value = app.state.inputs().get(field);
    match (field.table(), app.cursor(field)) {
        (Some(table), Some(row)) if table.entries[row].value == value => {
            let entry = &table.entries[row];
            match entry.description {
                Some(description) => format!("{} - {}", table.display_label(entry), description),
                None => table.display_label(entry),
            }
        }
        (Some(_), _) => format!("{} (not in table)", value),
        (None, _) => format!("{} %", value),
    }
}

// --- Results Panel ---
fn render_results(app: &App, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Cards
            Constraint::Length(6), // Support design
            Constraint::Min(8),    // Contribution chart
        ])
        .split(area);

    let advice = SupportAdvice::from_results(app.state.results(), app.span);
    render_cards(app, &advice, frame, layout[0]);
    render_support(&advice, frame, layout[1]);
    render_contributions(app, frame, layout[2]);
}

fn render_cards(app: &App, advice: &SupportAdvice, frame: &mut Frame, area: Rect) {
    let results = app.state.results();
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let class = &advice.rock_class;
    let rmr = Paragraph::new(vec![
        Line::from(Span::styled(format!("{}", results.rmr_score), bold())),
        Line::from(Span::styled(
            format!("Class {}", class.class),
            bold().fg(class_color(class.color)),
        )),
        Line::from(class.description),
        Line::from(format!("RQD points: {}", results.rqd_points)),
    ])
    .block(Block::default().borders(Borders::ALL).title(" RMR89 "));
    frame.render_widget(rmr, cards[0]);

    let q = Paragraph::new(vec![
        Line::from(Span::styled(format!("{}", results.q_value), bold())),
        Line::from(Span::styled(
            advice.q_quality.label(),
            Style::default().fg(quality_color(advice.q_quality)),
        )),
    ])
    .block(Block::default().borders(Borders::ALL).title(" Q-System "));
    frame.render_widget(q, cards[1]);

    let gsi = Paragraph::new(vec![
        Line::from(Span::styled(format!("{}", results.gsi), bold())),
        Line::from("approx. from RMR"),
    ])
    .block(Block::default().borders(Borders::ALL).title(" GSI "));
    frame.render_widget(gsi, cards[2]);
}

fn render_support(advice: &SupportAdvice, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(format!("Span: {} m", advice.span.0)),
        Line::from(format!("Bolt length: {:.2} m", advice.bolt_length.0)),
        Line::from(vec![Span::raw("Support: "), Span::styled(advice.support.description(), bold())]),
        Line::from(format!("Stand-up time: {}", format_hours(advice.stand_up_time))),
    ];
    let panel = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Support Design "));
    frame.render_widget(panel, area);
}

fn render_contributions(app: &App, frame: &mut Frame, area: Rect) {
    let contributions = rmr_contributions(app.state.inputs(), app.state.results());
    let bars: Vec<Bar> = contributions
        .iter()
        .map(|c| {
            let color = if c.is_weak() { Color::Red } else { Color::Green };
            Bar::default()
                .value(c.value.max(0.0).round() as u64)
                .text_value(format!("{}/{}", c.value, c.full))
                .label(Line::from(c.name))
                .style(Style::default().fg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(" RMR Parameter Contributions "))
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(2)
        .max(30);
    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Action;
    use ratatui::{backend::TestBackend, Terminal};
    use rock_core::calculations::DEFAULT_SPAN;
    use rock_core::settings::EngineSettings;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_default_dashboard() {
        let app = App::new(EngineSettings::default(), DEFAULT_SPAN);
        let text = screen(&app);
        assert!(text.contains("142.5"));
        assert!(text.contains("Class I"));
        assert!(text.contains("Very Good Rock"));
        assert!(text.contains("Unsupported / Minimal Scaling"));
        assert!(text.contains("Span: 5 m"));
        assert!(text.contains("> 250 MPa - Extremely Strong"));
    }

    #[test]
    fn test_q_tab_shows_values_in_labels() {
        let mut app = App::new(EngineSettings::default(), DEFAULT_SPAN);
        app.dispatch(Action::SwitchTab);
        let text = screen(&app);
        assert!(text.contains("One joint set (2)"));
        assert!(text.contains("RQD 95 % (set on the RMR89 tab)"));
    }
}
