use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate, Utc};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Bar, BarChart, BarGroup, Block, Borders, Gauge, List, ListItem, ListState, Paragraph,
        Tabs, Wrap,
    },
    Frame, Terminal,
};
use std::io;

use crate::board::{Board, BoardCommand, MoveRequest, TaskFilter};
use crate::data;
use crate::models::{
    CalendarEvent, ChatChannel, ChatKind, ChatMessage, ChatUser, DashboardStats, PopupMode,
    Priority, Status, Tag, WeeklyPerformance,
};

const TAB_TITLES: [&str; 6] = [
    "Dashboard",
    "Tarefas",
    "Projetos",
    "Calendário",
    "Clientes",
    "Chat",
];

/// A card picked up on the Projetos view. Indices address the board's
/// column list directly.
#[derive(Debug, Clone)]
pub struct DragState {
    pub task_id: u64,
    pub source_column: usize,
    pub source_index: usize,
    pub dest_column: usize,
    pub dest_index: usize,
}

pub struct App {
    pub board: Board,
    pub current_tab: usize,
    pub should_quit: bool,
    // Tarefas view
    pub filter: TaskFilter,
    // Projetos view
    pub board_query: String,
    pub selected_column: usize,
    pub selected_card: usize,
    pub drag: Option<DragState>,
    // Calendário view
    pub visible_month: NaiveDate,
    pub events: Vec<CalendarEvent>,
    // Clientes view
    pub client_list_state: ListState,
    // Chat view
    pub channels: Vec<ChatChannel>,
    pub chat_users: Vec<ChatUser>,
    pub messages: Vec<ChatMessage>,
    pub chat_kind: ChatKind,
    pub chat_list_state: ListState,
    pub next_message_id: u64,
    // Dashboard view
    pub stats: DashboardStats,
    pub weekly: Vec<WeeklyPerformance>,
    pub tags: Vec<Tag>,
    // Popup state
    pub popup_mode: PopupMode,
    pub input_buffer: String,
}

impl App {
    pub fn new(board: Board) -> Self {
        let today = Utc::now().date_naive();
        let visible_month =
            NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);
        let messages = data::chat_messages();
        let next_message_id = messages.iter().map(|m| m.id).max().unwrap_or(0);

        let mut chat_list_state = ListState::default();
        chat_list_state.select(Some(0));

        App {
            board,
            current_tab: 0,
            should_quit: false,
            filter: TaskFilter::default(),
            board_query: String::new(),
            selected_column: 0,
            selected_card: 0,
            drag: None,
            visible_month,
            events: data::calendar_events(),
            client_list_state: ListState::default(),
            channels: data::chat_channels(),
            chat_users: data::chat_users(),
            messages,
            chat_kind: ChatKind::Clients,
            chat_list_state,
            next_message_id,
            stats: data::dashboard_stats(),
            weekly: data::weekly_performance(),
            tags: data::tags(),
            popup_mode: PopupMode::None,
            input_buffer: String::new(),
        }
    }

    pub fn next_tab(&mut self) {
        self.current_tab = (self.current_tab + 1) % TAB_TITLES.len();
    }

    pub fn previous_tab(&mut self) {
        self.current_tab = if self.current_tab == 0 {
            TAB_TITLES.len() - 1
        } else {
            self.current_tab - 1
        };
    }

    fn column_len(&self, index: usize) -> usize {
        self.board
            .columns()
            .get(index)
            .map(|c| c.task_ids.len())
            .unwrap_or(0)
    }

    fn clamp_card(&mut self) {
        let len = self.column_len(self.selected_column);
        if len == 0 {
            self.selected_card = 0;
        } else if self.selected_card >= len {
            self.selected_card = len - 1;
        }
    }

    pub fn next_column(&mut self) {
        let count = self.board.columns().len();
        if count == 0 {
            return;
        }
        self.selected_column = (self.selected_column + 1) % count;
        self.clamp_card();
    }

    pub fn previous_column(&mut self) {
        let count = self.board.columns().len();
        if count == 0 {
            return;
        }
        self.selected_column = if self.selected_column == 0 {
            count - 1
        } else {
            self.selected_column - 1
        };
        self.clamp_card();
    }

    pub fn next_card(&mut self) {
        let len = self.column_len(self.selected_column);
        if len == 0 {
            return;
        }
        self.selected_card = if self.selected_card >= len - 1 {
            0
        } else {
            self.selected_card + 1
        };
    }

    pub fn previous_card(&mut self) {
        let len = self.column_len(self.selected_column);
        if len == 0 {
            return;
        }
        self.selected_card = if self.selected_card == 0 {
            len - 1
        } else {
            self.selected_card - 1
        };
    }

    pub fn grab_card(&mut self) {
        let len = self.column_len(self.selected_column);
        if len == 0 {
            return;
        }
        let index = self.selected_card.min(len - 1);
        let Some(task_id) = self
            .board
            .columns()
            .get(self.selected_column)
            .and_then(|c| c.task_ids.get(index))
            .copied()
        else {
            return;
        };
        self.drag = Some(DragState {
            task_id,
            source_column: self.selected_column,
            source_index: index,
            dest_column: self.selected_column,
            dest_index: index,
        });
    }

    // Insertion slots in a lane while dragging: one past the end, minus the
    // grabbed card when hovering its own lane
    fn drag_slots(&self, drag: &DragState, column: usize) -> usize {
        let len = self.column_len(column);
        if column == drag.source_column {
            len.saturating_sub(1)
        } else {
            len
        }
    }

    pub fn drag_left(&mut self) {
        let count = self.board.columns().len();
        let Some(mut drag) = self.drag.clone() else {
            return;
        };
        if count == 0 {
            return;
        }
        drag.dest_column = if drag.dest_column == 0 {
            count - 1
        } else {
            drag.dest_column - 1
        };
        drag.dest_index = drag.dest_index.min(self.drag_slots(&drag, drag.dest_column));
        self.drag = Some(drag);
    }

    pub fn drag_right(&mut self) {
        let count = self.board.columns().len();
        let Some(mut drag) = self.drag.clone() else {
            return;
        };
        if count == 0 {
            return;
        }
        drag.dest_column = (drag.dest_column + 1) % count;
        drag.dest_index = drag.dest_index.min(self.drag_slots(&drag, drag.dest_column));
        self.drag = Some(drag);
    }

    pub fn drag_up(&mut self) {
        if let Some(drag) = &mut self.drag {
            drag.dest_index = drag.dest_index.saturating_sub(1);
        }
    }

    pub fn drag_down(&mut self) {
        let Some(mut drag) = self.drag.clone() else {
            return;
        };
        let slots = self.drag_slots(&drag, drag.dest_column);
        drag.dest_index = (drag.dest_index + 1).min(slots);
        self.drag = Some(drag);
    }

    /// Commit the grab as a completed gesture.
    pub fn drop_card(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let columns = self.board.columns();
        let Some(source) = columns.get(drag.source_column).map(|c| c.lane.clone()) else {
            return;
        };
        let Some(dest) = columns.get(drag.dest_column).map(|c| c.lane.clone()) else {
            return;
        };
        let changed = self.board.apply(BoardCommand::Move(MoveRequest {
            task_id: drag.task_id,
            source,
            source_index: drag.source_index,
            dest: Some((dest, drag.dest_index)),
        }));
        if changed {
            self.selected_column = drag.dest_column;
            self.selected_card = drag
                .dest_index
                .min(self.column_len(drag.dest_column).saturating_sub(1));
        }
    }

    /// Abandon the grab. The cancelled gesture still flows through the
    /// reducer, as a destination-less move.
    pub fn cancel_drag(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let Some(source) = self
            .board
            .columns()
            .get(drag.source_column)
            .map(|c| c.lane.clone())
        else {
            return;
        };
        self.board.apply(BoardCommand::Move(MoveRequest {
            task_id: drag.task_id,
            source,
            source_index: drag.source_index,
            dest: None,
        }));
    }

    pub fn open_popup(&mut self, mode: PopupMode) {
        self.input_buffer.clear();
        match mode {
            PopupMode::BoardSearch => self.input_buffer = self.board_query.clone(),
            PopupMode::TaskSearch => self.input_buffer = self.filter.query.clone(),
            _ => {}
        }
        self.popup_mode = mode;
    }

    pub fn close_popup(&mut self) {
        self.popup_mode = PopupMode::None;
        self.input_buffer.clear();
    }

    pub fn handle_backspace(&mut self) {
        self.input_buffer.pop();
    }

    pub fn handle_popup_input(&mut self, c: char) {
        match self.popup_mode {
            PopupMode::ClientFilter => {
                if let Some(digit) = c.to_digit(10) {
                    if digit == 0 {
                        self.filter.client_id = None;
                        self.close_popup();
                    } else if let Some(client) = self.board.clients().get(digit as usize - 1) {
                        self.filter.client_id = Some(client.id);
                        self.close_popup();
                    }
                }
            }
            PopupMode::StatusFilter => {
                if let Some(digit) = c.to_digit(10) {
                    if digit == 0 {
                        self.filter.status = None;
                        self.close_popup();
                    } else if let Some(status) = Status::ALL.get(digit as usize - 1) {
                        self.filter.status = Some(*status);
                        self.close_popup();
                    }
                }
            }
            PopupMode::NewColumn
            | PopupMode::BoardSearch
            | PopupMode::TaskSearch
            | PopupMode::ChatInput => {
                self.input_buffer.push(c);
            }
            PopupMode::None => {}
        }
    }

    pub fn submit_popup(&mut self) {
        match self.popup_mode {
            PopupMode::NewColumn => {
                // Blank titles are silently ignored by the board
                self.board.apply(BoardCommand::AddColumn {
                    title: self.input_buffer.clone(),
                });
            }
            PopupMode::BoardSearch => {
                self.board_query = self.input_buffer.trim().to_string();
            }
            PopupMode::TaskSearch => {
                self.filter.query = self.input_buffer.trim().to_string();
            }
            PopupMode::ChatInput => {
                self.send_message();
            }
            _ => {}
        }
        self.close_popup();
    }

    pub fn next_client(&mut self) {
        let count = self.board.clients().len();
        if count == 0 {
            return;
        }
        let i = match self.client_list_state.selected() {
            Some(i) => {
                if i >= count - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.client_list_state.select(Some(i));
    }

    pub fn previous_client(&mut self) {
        let count = self.board.clients().len();
        if count == 0 {
            return;
        }
        let i = match self.client_list_state.selected() {
            Some(i) => {
                if i == 0 {
                    count - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.client_list_state.select(Some(i));
    }

    pub fn visible_channels(&self) -> Vec<usize> {
        self.channels
            .iter()
            .enumerate()
            .filter(|(_, c)| c.kind == self.chat_kind)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn cycle_chat_kind(&mut self) {
        let position = ChatKind::ALL
            .iter()
            .position(|&k| k == self.chat_kind)
            .unwrap_or(0);
        self.chat_kind = ChatKind::ALL[(position + 1) % ChatKind::ALL.len()];
        let selection = if self.visible_channels().is_empty() {
            None
        } else {
            Some(0)
        };
        self.chat_list_state.select(selection);
    }

    pub fn next_channel(&mut self) {
        let count = self.visible_channels().len();
        if count == 0 {
            return;
        }
        let i = match self.chat_list_state.selected() {
            Some(i) => {
                if i >= count - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.chat_list_state.select(Some(i));
    }

    pub fn previous_channel(&mut self) {
        let count = self.visible_channels().len();
        if count == 0 {
            return;
        }
        let i = match self.chat_list_state.selected() {
            Some(i) => {
                if i == 0 {
                    count - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.chat_list_state.select(Some(i));
    }

    pub fn toggle_mute(&mut self) {
        let Some(selected) = self.chat_list_state.selected() else {
            return;
        };
        let Some(channel_id) = self
            .visible_channels()
            .get(selected)
            .and_then(|&i| self.channels.get(i))
            .map(|c| c.id)
        else {
            return;
        };
        if let Some(channel) = self.channels.iter_mut().find(|c| c.id == channel_id) {
            channel.is_muted = !channel.is_muted;
        }
    }

    pub fn send_message(&mut self) {
        let content = self.input_buffer.trim().to_string();
        if content.is_empty() {
            return;
        }
        self.next_message_id += 1;
        self.messages.push(ChatMessage {
            id: self.next_message_id,
            user_id: 1,
            content,
            timestamp: Utc::now(),
            attachments: Vec::new(),
            reactions: Vec::new(),
        });
    }

    pub fn previous_month(&mut self) {
        self.visible_month = month_add(self.visible_month, -1);
    }

    pub fn next_month(&mut self) {
        self.visible_month = month_add(self.visible_month, 1);
    }

    pub fn go_to_today(&mut self) {
        let today = Utc::now().date_naive();
        self.visible_month =
            NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);
    }
}

pub fn run_tui(board: Board) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(board);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if app.popup_mode != PopupMode::None {
                    match key.code {
                        KeyCode::Esc => app.close_popup(),
                        KeyCode::Enter => app.submit_popup(),
                        KeyCode::Backspace => app.handle_backspace(),
                        KeyCode::Char(c) => app.handle_popup_input(c),
                        _ => {}
                    }
                } else if app.drag.is_some() {
                    match key.code {
                        KeyCode::Esc => app.cancel_drag(),
                        KeyCode::Enter | KeyCode::Char(' ') => app.drop_card(),
                        KeyCode::Left | KeyCode::Char('h') => app.drag_left(),
                        KeyCode::Right | KeyCode::Char('l') => app.drag_right(),
                        KeyCode::Up | KeyCode::Char('k') => app.drag_up(),
                        KeyCode::Down | KeyCode::Char('j') => app.drag_down(),
                        _ => {}
                    }
                } else {
                    match key.code {
                        KeyCode::Char('q') => {
                            app.should_quit = true;
                        }
                        KeyCode::Tab => {
                            app.next_tab();
                        }
                        KeyCode::BackTab => {
                            app.previous_tab();
                        }
                        code => handle_view_key(app, code),
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

fn handle_view_key(app: &mut App, code: KeyCode) {
    match app.current_tab {
        // Tarefas
        1 => match code {
            KeyCode::Char('c') => app.open_popup(PopupMode::ClientFilter),
            KeyCode::Char('s') => app.open_popup(PopupMode::StatusFilter),
            KeyCode::Char('/') => app.open_popup(PopupMode::TaskSearch),
            KeyCode::Char('x') => app.filter = TaskFilter::default(),
            _ => {}
        },
        // Projetos
        2 => match code {
            KeyCode::Left | KeyCode::Char('h') => app.previous_column(),
            KeyCode::Right | KeyCode::Char('l') => app.next_column(),
            KeyCode::Up | KeyCode::Char('k') => app.previous_card(),
            KeyCode::Down | KeyCode::Char('j') => app.next_card(),
            KeyCode::Enter | KeyCode::Char(' ') => app.grab_card(),
            KeyCode::Char('n') => app.open_popup(PopupMode::NewColumn),
            KeyCode::Char('/') => app.open_popup(PopupMode::BoardSearch),
            _ => {}
        },
        // Calendário
        3 => match code {
            KeyCode::Left | KeyCode::Char('p') => app.previous_month(),
            KeyCode::Right | KeyCode::Char('n') => app.next_month(),
            KeyCode::Char('t') => app.go_to_today(),
            _ => {}
        },
        // Clientes
        4 => match code {
            KeyCode::Down => app.next_client(),
            KeyCode::Up => app.previous_client(),
            _ => {}
        },
        // Chat
        5 => match code {
            KeyCode::Down => app.next_channel(),
            KeyCode::Up => app.previous_channel(),
            KeyCode::Char('f') => app.cycle_chat_kind(),
            KeyCode::Char('m') => app.toggle_mute(),
            KeyCode::Char('i') => app.open_popup(PopupMode::ChatInput),
            _ => {}
        },
        _ => {}
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)].as_ref())
        .split(f.area());

    let titles: Vec<Line> = TAB_TITLES.iter().cloned().map(Line::from).collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title("Pauta"))
        .select(app.current_tab)
        .style(Style::default().fg(Color::Cyan))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::Black),
        );

    f.render_widget(tabs, chunks[0]);

    match app.current_tab {
        0 => render_dashboard(f, app, chunks[1]),
        1 => render_tasks(f, app, chunks[1]),
        2 => render_projects(f, app, chunks[1]),
        3 => render_calendar(f, app, chunks[1]),
        4 => render_clients(f, app, chunks[1]),
        5 => render_chat(f, app, chunks[1]),
        _ => {}
    }

    render_popup(f, app);
}

fn render_dashboard(f: &mut Frame, app: &mut App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(4),
                Constraint::Min(10),
                Constraint::Length(8),
            ]
            .as_ref(),
        )
        .split(area);

    // Stat tiles
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 6); 6].as_ref())
        .split(rows[0]);

    let stats = &app.stats;
    let tile_values = [
        (stats.total_tasks, "Total de tarefas"),
        (stats.completed_tasks, "Concluídas"),
        (stats.in_progress_tasks, "Em andamento"),
        (stats.pending_tasks, "Pendentes"),
        (stats.tasks_this_week, "Nesta semana"),
        (stats.clients_active, "Clientes ativos"),
    ];
    for (i, (value, label)) in tile_values.iter().enumerate() {
        let tile = Paragraph::new(vec![
            Line::from(Span::styled(
                value.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                label.to_string(),
                Style::default().fg(Color::Gray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(tile, tiles[i]);
    }

    // Weekly bar chart + completion gauge + type distribution
    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(rows[1]);

    // One group per week: total de tarefas ao lado das concluídas
    let mut chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Performance semanal"),
        )
        .bar_width(4)
        .bar_gap(1)
        .group_gap(3);
    for w in &app.weekly {
        chart = chart.data(
            BarGroup::default().label(Line::from(w.week.as_str())).bars(&[
                Bar::default()
                    .value(w.tasks)
                    .style(Style::default().fg(Color::Gray)),
                Bar::default()
                    .value(w.completed)
                    .style(Style::default().fg(Color::Green)),
            ]),
        );
    }
    f.render_widget(chart, middle[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)].as_ref())
        .split(middle[1]);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Taxa de conclusão"),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .label(format!("{:.1}%", stats.completion_rate))
        .ratio((stats.completion_rate / 100.0).clamp(0.0, 1.0));
    f.render_widget(gauge, right[0]);

    let type_items: Vec<ListItem> = stats
        .tasks_by_type
        .iter()
        .map(|t| {
            ListItem::new(Line::from(vec![
                Span::styled("■ ", Style::default().fg(hex_color(&t.color))),
                Span::raw(format!("{} ({})", t.content_type.as_str(), t.count)),
            ]))
        })
        .collect();
    let type_list = List::new(type_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Distribuição por tipo"),
    );
    f.render_widget(type_list, right[1]);

    // Recent activity + top performers
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)].as_ref())
        .split(rows[2]);

    let now = Utc::now();
    let activity_items: Vec<ListItem> = stats
        .recent_activity
        .iter()
        .map(|a| {
            let hours = (now - a.timestamp).num_hours().max(0);
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(a.user.clone(), Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(format!(" {} ", a.kind.verb()), Style::default().fg(Color::Gray)),
                    Span::raw(a.subject.clone()),
                ]),
                Line::from(Span::styled(
                    format!("{}, há {}h", a.kind.badge(), hours),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();
    let activity_list = List::new(activity_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Atividades recentes"),
    );
    f.render_widget(activity_list, bottom[0]);

    let performer_items: Vec<ListItem> = stats
        .top_performers
        .iter()
        .map(|p| {
            let filled = (p.completion / 10) as usize;
            ListItem::new(vec![
                Line::from(format!("{} ({} tarefas)", p.name, p.tasks)),
                Line::from(Span::styled(
                    format!("{} {}%", "█".repeat(filled), p.completion),
                    Style::default().fg(Color::Green),
                )),
            ])
        })
        .collect();
    let performer_list = List::new(performer_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Top performers"),
    );
    f.render_widget(performer_list, bottom[1]);
}

fn render_tasks(f: &mut Frame, app: &mut App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)].as_ref())
        .split(area);

    let client_label = app
        .filter
        .client_id
        .and_then(|id| app.board.client(id))
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Todos".to_string());
    let status_label = app
        .filter
        .status
        .map(|s| s.label().to_string())
        .unwrap_or_else(|| "Todos".to_string());
    let query_label = if app.filter.query.is_empty() {
        "-".to_string()
    } else {
        app.filter.query.clone()
    };

    let filter_title = if app.filter.is_active() {
        "Filtros (ativos)"
    } else {
        "Filtros"
    };
    let filter_bar = Paragraph::new(format!(
        "Cliente: {} | Status: {} | Busca: {}   (c cliente, s status, / buscar, x limpar)",
        client_label, status_label, query_label
    ))
    .block(Block::default().borders(Borders::ALL).title(filter_title));
    f.render_widget(filter_bar, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4].as_ref())
        .split(rows[1]);

    for (i, status) in Status::ALL.iter().enumerate() {
        let tasks: Vec<_> = app
            .board
            .tasks_by_status(*status)
            .into_iter()
            .filter(|t| app.filter.matches(t, app.board.clients()))
            .collect();
        let count = tasks.len();

        let mut items: Vec<ListItem> = tasks
            .iter()
            .map(|task| {
                let client = app
                    .board
                    .client(task.client_id)
                    .map(|c| c.name.clone())
                    .unwrap_or_default();
                ListItem::new(vec![
                    Line::from(task.title.clone()),
                    Line::from(vec![
                        Span::styled(client, Style::default().fg(Color::Gray)),
                        Span::styled(
                            format!(" [{}]", task.priority.label()),
                            Style::default().fg(priority_color(task.priority)),
                        ),
                        Span::styled(
                            format!(" {}", task.due_date.format("%d/%m")),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]),
                    Line::from(""),
                ])
            })
            .collect();
        if items.is_empty() {
            items.push(ListItem::new(Line::from(Span::styled(
                "Nenhuma tarefa neste status",
                Style::default().fg(Color::DarkGray),
            ))));
        }

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} ({})", status.label(), count))
                .border_style(Style::default().fg(status_color(*status))),
        );
        f.render_widget(list, columns[i]);
    }
}

fn render_projects(f: &mut Frame, app: &mut App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(6),
            ]
            .as_ref(),
        )
        .split(area);

    let header_text = if let Some(drag) = &app.drag {
        let title = app
            .board
            .task(drag.task_id)
            .map(|t| t.title.clone())
            .unwrap_or_default();
        format!(
            "Movendo: {}   (setas posicionam, Enter solta, Esc cancela)",
            title
        )
    } else {
        let query = if app.board_query.is_empty() {
            "-".to_string()
        } else {
            app.board_query.clone()
        };
        format!(
            "Busca: {}   (setas navegam, Enter pega, n nova coluna, / buscar)",
            query
        )
    };
    let header = Paragraph::new(header_text)
        .block(Block::default().borders(Borders::ALL).title("Projetos"));
    f.render_widget(header, rows[0]);

    let column_count = app.board.columns().len();
    if column_count == 0 {
        return;
    }
    let lanes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, column_count as u32); column_count])
        .split(rows[1]);

    let query = app.board_query.to_lowercase();
    for (ci, column) in app.board.columns().iter().enumerate() {
        let mut items: Vec<ListItem> = Vec::new();

        for (i, &task_id) in column.task_ids.iter().enumerate() {
            // Drop slot marker while a card is grabbed
            if let Some(drag) = &app.drag {
                if ci == drag.dest_column && i == drag.dest_index {
                    items.push(ListItem::new(Line::from(Span::styled(
                        ">>> soltar aqui",
                        Style::default().fg(Color::Cyan),
                    ))));
                }
            }

            let Some(task) = app.board.task(task_id) else {
                continue;
            };
            let client = app.board.client(task.client_id);
            let client_name = client.map(|c| c.name.clone()).unwrap_or_default();
            let client_color = client
                .map(|c| hex_color(&c.primary_color))
                .unwrap_or(Color::White);

            let dimmed = !query.is_empty()
                && !task.title.to_lowercase().contains(&query)
                && !client_name.to_lowercase().contains(&query);
            let grabbed = app
                .drag
                .as_ref()
                .map(|d| d.task_id == task_id)
                .unwrap_or(false);
            let selected =
                app.drag.is_none() && ci == app.selected_column && i == app.selected_card;

            let title_style = if grabbed {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC)
            } else if selected {
                Style::default()
                    .bg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD)
            } else if dimmed {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            let detail_style = if dimmed || grabbed {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Gray)
            };

            items.push(ListItem::new(vec![
                Line::from(Span::styled(task.title.clone(), title_style)),
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(client_color)),
                    Span::styled(client_name, detail_style),
                    Span::styled(
                        format!(" [{}]", task.priority.label()),
                        Style::default().fg(priority_color(task.priority)),
                    ),
                    Span::styled(
                        format!(" {}", task.due_date.format("%d/%m")),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(""),
            ]));
        }

        // Slot past the last card
        if let Some(drag) = &app.drag {
            if ci == drag.dest_column && drag.dest_index >= column.task_ids.len() {
                items.push(ListItem::new(Line::from(Span::styled(
                    ">>> soltar aqui",
                    Style::default().fg(Color::Cyan),
                ))));
            }
        }

        let is_dest = app
            .drag
            .as_ref()
            .map(|d| d.dest_column == ci)
            .unwrap_or(false);
        let border_style = if is_dest {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if app.drag.is_none() && ci == app.selected_column {
            Style::default()
                .fg(hex_color(&column.color))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(hex_color(&column.color))
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} ({})", column.title, column.task_ids.len()))
                .border_style(border_style),
        );
        f.render_widget(list, lanes[ci]);
    }

    render_card_detail(f, app, rows[2]);
}

fn render_card_detail(f: &mut Frame, app: &App, area: Rect) {
    let task = app
        .drag
        .as_ref()
        .map(|d| d.task_id)
        .or_else(|| {
            app.board
                .columns()
                .get(app.selected_column)
                .and_then(|c| c.task_ids.get(app.selected_card))
                .copied()
        })
        .and_then(|id| app.board.task(id));

    let Some(task) = task else {
        let empty = Paragraph::new("Nenhuma tarefa selecionada")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("Detalhes"));
        f.render_widget(empty, area);
        return;
    };

    let mut lines = vec![Line::from(Span::raw(task.description.clone()))];

    let tag_names: Vec<Span> = task
        .tag_ids
        .iter()
        .filter_map(|id| app.tags.iter().find(|t| t.id == *id))
        .flat_map(|tag| {
            vec![
                Span::styled(tag.name.clone(), Style::default().fg(hex_color(&tag.color))),
                Span::raw("  "),
            ]
        })
        .collect();
    if !tag_names.is_empty() {
        let mut spans = vec![Span::styled("Tags: ", Style::default().fg(Color::Gray))];
        spans.extend(tag_names);
        lines.push(Line::from(spans));
    }

    for comment in task.comments.iter().take(2) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", comment.user),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(comment.message.clone()),
            Span::styled(
                format!(" ({})", comment.timestamp.format("%d/%m")),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Detalhes: {} ({})", task.title, task.assigned_to)),
        );
    f.render_widget(detail, area);
}

fn render_calendar(f: &mut Frame, app: &mut App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)].as_ref())
        .split(area);

    let header = Paragraph::new(format!(
        "{} {}   (p mês anterior, n próximo mês, t hoje)",
        month_name_pt(app.visible_month.month()),
        app.visible_month.year()
    ))
    .block(Block::default().borders(Borders::ALL).title("Calendário"));
    f.render_widget(header, rows[0]);

    let weekday_cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 7); 7].as_ref())
        .split(rows[1]);
    for (i, name) in ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"].iter().enumerate() {
        let label = Paragraph::new(*name)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(label, weekday_cells[i]);
    }

    let week_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 6); 6].as_ref())
        .split(rows[2]);

    let days = calendar_days(app.visible_month);
    let today = Utc::now().date_naive();

    for week in 0..6 {
        let day_cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 7); 7].as_ref())
            .split(week_rows[week]);

        for col in 0..7 {
            let day = &days[week * 7 + col];
            let events: Vec<_> = app
                .events
                .iter()
                .filter(|e| e.date.date_naive() == day.date)
                .collect();

            let day_style = if day.date == today {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if day.in_month {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let mut lines = vec![Line::from(Span::styled(
                format!("{}", day.date.day()),
                day_style,
            ))];
            for event in events.iter().take(2) {
                let color = app
                    .board
                    .client(event.client_id)
                    .map(|c| hex_color(&c.primary_color))
                    .unwrap_or(Color::White);
                lines.push(Line::from(Span::styled(
                    format!("{} {}", event.time, event.title),
                    Style::default().fg(color),
                )));
            }
            if events.len() > 2 {
                lines.push(Line::from(Span::styled(
                    format!("+{} mais", events.len() - 2),
                    Style::default().fg(Color::DarkGray),
                )));
            }

            let cell = Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
            f.render_widget(cell, day_cells[col]);
        }
    }
}

fn render_clients(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)].as_ref())
        .split(area);

    let client_items: Vec<ListItem> = app
        .board
        .clients()
        .iter()
        .map(|client| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(hex_color(&client.primary_color))),
                    Span::raw(client.name.clone()),
                ]),
                Line::from(Span::styled(
                    format!("  {}", client.industry),
                    Style::default().fg(Color::Gray),
                )),
            ])
        })
        .collect();

    let client_list = List::new(client_items)
        .block(Block::default().borders(Borders::ALL).title("Clientes"))
        .highlight_style(
            Style::default()
                .bg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    f.render_stateful_widget(client_list, chunks[0], &mut app.client_list_state);

    let selected_client = app
        .client_list_state
        .selected()
        .and_then(|i| app.board.clients().get(i));

    if let Some(client) = selected_client {
        let mut lines = vec![
            Line::from(Span::styled(
                client.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("Setor: {}", client.industry)),
            Line::from(format!("Posts por semana: {}", client.posts_per_week)),
            Line::from(vec![
                Span::raw("Cores: "),
                Span::styled("■ ", Style::default().fg(hex_color(&client.primary_color))),
                Span::raw(client.primary_color.clone()),
                Span::styled("  ■ ", Style::default().fg(hex_color(&client.secondary_color))),
                Span::raw(client.secondary_color.clone()),
            ]),
            Line::from(format!("Tags: {}", client.tags.join(", "))),
            Line::from(""),
            Line::from(Span::styled(
                "Tarefas",
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];

        for task in app.board.tasks_by_client(client.id) {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("[{}] ", task.status.label()),
                    Style::default().fg(status_color(task.status)),
                ),
                Span::raw(task.title.clone()),
            ]));
        }

        let profile = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Perfil do cliente"),
            );
        f.render_widget(profile, chunks[1]);
    } else {
        let info = Paragraph::new(
            "Nenhum cliente selecionado\n\nControles:\n• ↑/↓: Navegar\n• Tab: Trocar de aba\n• q: Sair",
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Perfil do cliente"),
        );
        f.render_widget(info, chunks[1]);
    }
}

fn render_chat(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(area);

    let visible = app.visible_channels();
    let channel_items: Vec<ListItem> = visible
        .iter()
        .filter_map(|&i| app.channels.get(i))
        .map(|channel| {
            let mut title_spans = vec![Span::raw(channel.name.clone())];
            if channel.unread_count > 0 {
                title_spans.push(Span::styled(
                    format!(" ({})", channel.unread_count),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            if channel.is_muted {
                title_spans.push(Span::styled(
                    " [mudo]",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            let last = channel.last_message.clone().unwrap_or_default();
            ListItem::new(vec![
                Line::from(title_spans),
                Line::from(Span::styled(
                    format!("  {}", last),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let channel_list = List::new(channel_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Canais: {} (f alterna)", app.chat_kind.label())),
        )
        .highlight_style(
            Style::default()
                .bg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    f.render_stateful_widget(channel_list, chunks[0], &mut app.chat_list_state);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(chunks[1]);

    let channel_name = app
        .chat_list_state
        .selected()
        .and_then(|i| visible.get(i))
        .and_then(|&i| app.channels.get(i))
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Mensagens".to_string());

    let mut message_lines: Vec<Line> = Vec::new();
    for message in &app.messages {
        let author = app
            .chat_users
            .iter()
            .find(|u| u.id == message.user_id)
            .map(|u| u.name.clone())
            .unwrap_or_else(|| "Usuário".to_string());
        message_lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", message.timestamp.format("%H:%M")),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(author, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(": {}", message.content)),
        ]));
        for attachment in &message.attachments {
            message_lines.push(Line::from(Span::styled(
                format!("  anexo ({}): {}", attachment.kind, attachment.name),
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        for reaction in &message.reactions {
            message_lines.push(Line::from(Span::styled(
                format!("  {} {}", reaction.emoji, reaction.count),
                Style::default().fg(Color::Gray),
            )));
        }
    }

    let messages = Paragraph::new(message_lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(channel_name));
    f.render_widget(messages, right[0]);

    let input_text = if app.popup_mode == PopupMode::ChatInput {
        format!("{}_", app.input_buffer)
    } else {
        "i para escrever, m silencia, f alterna canais".to_string()
    };
    let input_style = if app.popup_mode == PopupMode::ChatInput {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let input = Paragraph::new(input_text)
        .style(input_style)
        .block(Block::default().borders(Borders::ALL).title("Mensagem"));
    f.render_widget(input, right[1]);
}

fn render_popup(f: &mut Frame, app: &mut App) {
    match app.popup_mode {
        PopupMode::NewColumn => {
            let popup_area = centered_rect(50, 20, f.area());
            let block = Block::default()
                .title("Nova coluna")
                .borders(Borders::ALL)
                .style(Style::default().bg(Color::DarkGray));
            let content = Paragraph::new(format!(
                "Nome da coluna:\n\n{}\n\nPress ENTER para criar\nPress ESC para cancelar",
                app.input_buffer
            ))
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White));
            f.render_widget(content, popup_area);
        }
        PopupMode::BoardSearch | PopupMode::TaskSearch => {
            let popup_area = centered_rect(50, 20, f.area());
            let block = Block::default()
                .title("Buscar tarefas")
                .borders(Borders::ALL)
                .style(Style::default().bg(Color::DarkGray));
            let content = Paragraph::new(format!(
                "Título ou cliente:\n\n{}\n\nPress ENTER para aplicar\nPress ESC para cancelar",
                app.input_buffer
            ))
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White));
            f.render_widget(content, popup_area);
        }
        PopupMode::ClientFilter => {
            let popup_area = centered_rect(50, 30, f.area());
            let block = Block::default()
                .title("Filtrar por cliente")
                .borders(Borders::ALL)
                .style(Style::default().bg(Color::DarkGray));
            let mut text = String::from("0. Todos os clientes\n");
            for (i, client) in app.board.clients().iter().enumerate() {
                text.push_str(&format!("{}. {}\n", i + 1, client.name));
            }
            text.push_str("\nPress ESC para cancelar");
            let content = Paragraph::new(text)
                .block(block)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::White));
            f.render_widget(content, popup_area);
        }
        PopupMode::StatusFilter => {
            let popup_area = centered_rect(50, 30, f.area());
            let block = Block::default()
                .title("Filtrar por status")
                .borders(Borders::ALL)
                .style(Style::default().bg(Color::DarkGray));
            let mut text = String::from("0. Todos os status\n");
            for (i, status) in Status::ALL.iter().enumerate() {
                text.push_str(&format!("{}. {}\n", i + 1, status.label()));
            }
            text.push_str("\nPress ESC para cancelar");
            let content = Paragraph::new(text)
                .block(block)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::White));
            f.render_widget(content, popup_area);
        }
        PopupMode::ChatInput | PopupMode::None => {}
    }
}

// Helper function to create centered rectangles for popups
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Color::White;
    }
    let parsed = (
        u8::from_str_radix(&hex[0..2], 16),
        u8::from_str_radix(&hex[2..4], 16),
        u8::from_str_radix(&hex[4..6], 16),
    );
    match parsed {
        (Ok(r), Ok(g), Ok(b)) => Color::Rgb(r, g, b),
        _ => Color::White,
    }
}

fn status_color(status: Status) -> Color {
    match status {
        Status::Todo => Color::Gray,
        Status::Doing => Color::Blue,
        Status::Review => Color::Yellow,
        Status::Done => Color::Green,
    }
}

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Low => Color::Blue,
        Priority::Medium => Color::Yellow,
        Priority::High => Color::Rgb(255, 152, 0),
        Priority::Urgent => Color::Red,
    }
}

pub fn month_add(month: NaiveDate, delta: i32) -> NaiveDate {
    let total = month.year() * 12 + month.month0() as i32 + delta;
    NaiveDate::from_ymd_opt(total.div_euclid(12), total.rem_euclid(12) as u32 + 1, 1)
        .unwrap_or(month)
}

pub fn month_name_pt(month: u32) -> &'static str {
    match month {
        1 => "Janeiro",
        2 => "Fevereiro",
        3 => "Março",
        4 => "Abril",
        5 => "Maio",
        6 => "Junho",
        7 => "Julho",
        8 => "Agosto",
        9 => "Setembro",
        10 => "Outubro",
        11 => "Novembro",
        12 => "Dezembro",
        _ => "",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub in_month: bool,
}

// 42-cell grid starting on Sunday, like the original month view
pub fn calendar_days(month: NaiveDate) -> Vec<CalendarDay> {
    let leading = month.weekday().num_days_from_sunday() as i64;
    let start = month - Duration::days(leading);
    (0..42)
        .map(|offset| {
            let date = start + Duration::days(offset);
            CalendarDay {
                date,
                in_month: date.month() == month.month() && date.year() == month.year(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::LaneId;

    #[test]
    fn calendar_grid_covers_the_whole_month() {
        let february = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let days = calendar_days(february);
        assert_eq!(days.len(), 42);
        // February 2024 starts on a Thursday; the grid opens on Sunday Jan 28
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 1, 28).unwrap());
        assert!(!days[0].in_month);
        assert_eq!(days[4].date, february);
        assert!(days[4].in_month);
        assert_eq!(days.iter().filter(|d| d.in_month).count(), 29);
    }

    #[test]
    fn month_add_wraps_across_years() {
        let january = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(month_add(january, 1), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(month_add(january, -1), NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
        assert_eq!(month_add(january, 13), NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
    }

    #[test]
    fn hex_color_parses_brand_colors() {
        assert_eq!(hex_color("#4CAF50"), Color::Rgb(76, 175, 80));
        assert_eq!(hex_color("#6B7280"), Color::Rgb(107, 114, 128));
        assert_eq!(hex_color("sem cor"), Color::White);
    }

    #[test]
    fn grab_and_drop_moves_the_card_through_the_board() {
        let mut app = App::new(data::seed_board());
        app.current_tab = 2;
        app.selected_column = 0;
        app.selected_card = 0;

        app.grab_card();
        assert!(app.drag.is_some());
        app.drag_right();
        app.drop_card();

        assert!(app.drag.is_none());
        let doing = app.board.column(&LaneId::Status(Status::Doing)).unwrap();
        assert_eq!(doing.task_ids[0], 2);
        assert_eq!(app.board.task(2).map(|t| t.status), Some(Status::Doing));
        assert_eq!(app.selected_column, 1);
    }

    #[test]
    fn cancelled_grab_leaves_the_board_alone() {
        let mut app = App::new(data::seed_board());
        let before = app.board.clone();
        app.selected_column = 0;
        app.selected_card = 0;

        app.grab_card();
        app.drag_right();
        app.cancel_drag();

        assert!(app.drag.is_none());
        assert_eq!(app.board.columns(), before.columns());
        assert_eq!(app.board.tasks(), before.tasks());
    }

    #[test]
    fn new_column_popup_feeds_the_reducer() {
        let mut app = App::new(data::seed_board());
        let before = app.board.columns().len();

        app.open_popup(PopupMode::NewColumn);
        for c in "Launch".chars() {
            app.handle_popup_input(c);
        }
        app.submit_popup();
        assert_eq!(app.board.columns().len(), before + 1);
        assert_eq!(app.popup_mode, PopupMode::None);

        // Whitespace-only input creates nothing
        app.open_popup(PopupMode::NewColumn);
        app.handle_popup_input(' ');
        app.submit_popup();
        assert_eq!(app.board.columns().len(), before + 1);
    }

    #[test]
    fn chat_kind_cycle_filters_channels() {
        let mut app = App::new(data::seed_board());
        assert_eq!(app.chat_kind, ChatKind::Clients);
        let clients: Vec<usize> = app.visible_channels();
        assert_eq!(clients.len(), 2);

        app.cycle_chat_kind();
        assert_eq!(app.chat_kind, ChatKind::Projects);
        assert_eq!(app.visible_channels().len(), 2);
    }

    #[test]
    fn sending_a_blank_message_is_ignored() {
        let mut app = App::new(data::seed_board());
        let before = app.messages.len();
        app.open_popup(PopupMode::ChatInput);
        app.handle_popup_input(' ');
        app.submit_popup();
        assert_eq!(app.messages.len(), before);

        app.open_popup(PopupMode::ChatInput);
        for c in "Combinado!".chars() {
            app.handle_popup_input(c);
        }
        app.submit_popup();
        assert_eq!(app.messages.len(), before + 1);
    }
}
