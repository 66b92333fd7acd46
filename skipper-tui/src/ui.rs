use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use skipper_core::{
    carousel::{CarouselSlot, SlotPosition},
    model::SkipOffering,
    pricing::PriceBreakdown,
    state::Selection,
    wizard::{CURRENT_STEP, StepStatus, WizardStep},
};

use crate::app::App;

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    // Outer layout: progress, heading, carousel, confirmation, status line
    let confirmation_height = if app.view.selected().is_some() { 4 } else { 0 };
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(confirmation_height),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [
        header_area,
        heading_area,
        carousel_area,
        confirmation_area,
        status_area,
    ] = chunks
    else {
        return;
    };

    draw_header(frame, *header_area);
    draw_heading(frame, *heading_area);

    if app.view.is_loading() {
        let paragraph = Paragraph::new(format!("Loading skips for {}…", app.location))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Skips"))
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(paragraph, *carousel_area);
    } else {
        draw_carousel(frame, app, *carousel_area);
    }

    if let Selection::Holding(selected) = app.view.selection() {
        draw_confirmation(frame, selected, *confirmation_area);
    }

    // Status bar
    let nav_hint = "←/→ browse · Enter select · 1/2/3 pick a card · q/Ctrl-C quit";
    let status_text = if app.view.is_loading() {
        format!("Loading… · {nav_hint}")
    } else if app.view.offerings().is_empty() {
        nav_hint.to_owned()
    } else {
        format!(
            "Skip {} of {} · {nav_hint}",
            app.view.cursor() + 1,
            app.view.offerings().len()
        )
    };

    let status_style = if app.view.is_loading() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(status_style)
        .wrap(Wrap { trim: true });

    frame.render_widget(status, *status_area);
}

fn draw_header(frame: &mut Frame<'_>, area: Rect) {
    let mut spans = Vec::new();
    for (idx, step) in WizardStep::ALL.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" → ", Style::default().fg(Color::DarkGray)));
        }
        let (marker, style) = match step.status(CURRENT_STEP) {
            StepStatus::Completed => ("✓", Style::default().fg(Color::Green)),
            StepStatus::Active => (
                "●",
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ),
            StepStatus::Pending => ("○", Style::default().fg(Color::Gray)),
        };
        spans.push(Span::styled(
            format!("{marker} {}. {}", step.number(), step.label()),
            style,
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("We Want Waste")
                .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(header, area);
}

fn draw_heading(frame: &mut Frame<'_>, area: Rect) {
    let heading = Paragraph::new(vec![
        Line::styled(
            "Choose Your Skip Size",
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "Select the skip size that best suits your needs",
            Style::default().fg(Color::Gray),
        ),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(heading, area);
}

fn draw_carousel(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(window) = app.view.window() else {
        let paragraph = Paragraph::new(format!(
            "No skips are currently available for {}.",
            app.location
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Skips"))
        .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(area);

    // Cards are keyed by slot: one offering may fill all three
    for (slot, column) in window.slots().iter().zip(columns.iter()) {
        draw_card(frame, app, slot, *column);
    }
}

fn draw_card(frame: &mut Frame<'_>, app: &App, slot: &CarouselSlot<'_>, area: Rect) {
    let offering = slot.offering;
    let is_selected = app.view.is_selected(offering);
    let is_center = slot.position == SlotPosition::Current;
    let price = PriceBreakdown::of(offering);

    let mut lines = vec![
        Line::styled(
            format!("{} Yards", offering.size),
            Style::default().fg(Color::LightBlue).add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::from(format!("Hire period: {} days", offering.hire_period_days)),
    ];
    if offering.allows_heavy_waste {
        lines.push(Line::from("Heavy waste allowed"));
    }
    if !offering.allowed_on_road {
        lines.push(Line::styled(
            "⚠ Not allowed on road",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }
    lines.push(Line::default());
    lines.push(Line::styled(
        price.total_label(),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::styled(
        price.detail_label(),
        Style::default().fg(Color::DarkGray),
    ));
    lines.push(Line::default());
    lines.push(if is_selected {
        Line::styled(
            "✔ Selected",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    } else {
        Line::styled(
            format!("[{}] Select this skip", slot_key(slot.position)),
            Style::default().fg(Color::LightGreen),
        )
    });

    let border_style = if is_selected {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else if is_center {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let border_type = if is_center {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style)
                .title(format!("Skip {} Yards", offering.size)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(card, area);
}

fn draw_confirmation(frame: &mut Frame<'_>, selected: &SkipOffering, area: Rect) {
    let price = PriceBreakdown::of(selected);
    let next_step = CURRENT_STEP
        .next()
        .map_or_else(String::new, |step| format!("Next up: {}", step.label()));

    let paragraph = Paragraph::new(vec![
        Line::from(format!(
            "You have chosen the {} Yards skip for {}",
            selected.size,
            price.total_label()
        )),
        Line::styled(next_step, Style::default().fg(Color::Gray)),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title("Skip selected!"),
    );

    frame.render_widget(paragraph, area);
}

fn slot_key(position: SlotPosition) -> char {
    match position {
        SlotPosition::Previous => '1',
        SlotPosition::Current => '2',
        SlotPosition::Next => '3',
    }
}
