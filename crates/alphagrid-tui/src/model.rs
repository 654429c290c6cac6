//! TUI application model (Elm architecture).

use std::io;
use std::time::Duration;

use alphagrid_core::{GridCommands, GridDataSource, GridError, GridPresenter, StyleAction};
use crossbeam_channel::Receiver;
use crossterm::event::{self, Event};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{event::DisableMouseCapture, event::EnableMouseCapture, execute};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use crate::context_menu::{render_context_menu, ContextMenu};
use crate::error::TuiError;
use crate::footer::render_footer;
use crate::geometry::GridGeometry;
use crate::grid::{render_grid, GridView};
use crate::header::{render_header, HeaderInfo};
use crate::keymap::{map_key, map_mouse, KeyAction, MouseAction};
use crate::labels::LabelCache;
use crate::messages::TuiMessage;
use crate::scroll::GridScrollState;
use crate::styles::ColorTheme;

/// Rows scrolled per mouse wheel notch.
const WHEEL_ROWS: u16 = 3;

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Grid state and layout policy.
    presenter: GridPresenter,
    /// Label treatments as signalled by the presenter.
    pub labels: LabelCache,
    /// Keyboard focus.
    pub cursor: usize,
    /// Open context menu, if any.
    pub menu: Option<ContextMenu>,
    /// Content scroll position.
    pub scroll: GridScrollState,
    /// Status line text.
    pub status: String,
    /// Message receiver.
    rx: Receiver<TuiMessage>,
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
    theme: ColorTheme,
    tick_rate: Duration,
    mouse_capture: bool,
}

impl TuiApp {
    /// Create a new TUI app.
    #[must_use]
    pub fn new(rx: Receiver<TuiMessage>) -> Self {
        let presenter = GridPresenter::new();
        let labels = LabelCache::from_source(&presenter);
        Self {
            should_quit: false,
            presenter,
            labels,
            cursor: 0,
            menu: None,
            scroll: GridScrollState::new(),
            status: String::from("Ready"),
            rx,
            terminal_width: 80,
            terminal_height: 24,
            theme: ColorTheme::default(),
            tick_rate: Duration::from_millis(250),
            mouse_capture: true,
        }
    }

    /// Start from an existing presenter, e.g. one with start-up styles applied.
    #[must_use]
    pub fn with_presenter(mut self, presenter: GridPresenter) -> Self {
        self.labels = LabelCache::from_source(&presenter);
        self.cursor = presenter.selected_index().unwrap_or(0);
        self.presenter = presenter;
        self.reveal_cursor();
        self
    }

    /// Set the event poll interval.
    #[must_use]
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Enable or disable mouse capture.
    #[must_use]
    pub fn with_mouse_capture(mut self, enabled: bool) -> Self {
        self.mouse_capture = enabled;
        self
    }

    /// The grid presenter.
    #[must_use]
    pub fn presenter(&self) -> &GridPresenter {
        &self.presenter
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) -> Result<(), GridError> {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg)?;
        }
        Ok(())
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) -> Result<(), GridError> {
        match msg {
            TuiMessage::KeyPress(action) => self.handle_key_action(action)?,
            TuiMessage::Mouse {
                column,
                row,
                action,
            } => self.handle_mouse(column, row, action)?,
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
                let (content_height, viewport) = self.scroll_extent();
                self.scroll.clamp(content_height, viewport);
                self.reveal_cursor();
            }
            TuiMessage::Tick => {
                // Tick triggers re-render, nothing to update in model
            }
            TuiMessage::Status(text) => {
                self.status = text;
            }
            TuiMessage::Quit => {
                self.should_quit = true;
            }
        }
        Ok(())
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) -> Result<(), GridError> {
        if self.menu.is_some() {
            return self.handle_menu_key(action);
        }

        match action {
            KeyAction::Quit | KeyAction::Cancel => {
                self.should_quit = true;
            }
            KeyAction::Up => self.move_cursor(|cursor, columns, _| cursor.checked_sub(columns)),
            KeyAction::Down => {
                self.move_cursor(|cursor, columns, count| {
                    Some(cursor + columns).filter(|&next| next < count)
                });
            }
            KeyAction::Left => {
                self.move_cursor(|cursor, columns, _| {
                    (cursor % columns > 0).then(|| cursor - 1)
                });
            }
            KeyAction::Right => {
                self.move_cursor(|cursor, columns, count| {
                    (cursor % columns + 1 < columns && cursor + 1 < count).then_some(cursor + 1)
                });
            }
            KeyAction::Select => self.select(self.cursor)?,
            KeyAction::ToggleSelect => {
                if self.presenter.selected_index() == Some(self.cursor) {
                    self.deselect(self.cursor)?;
                } else {
                    self.select(self.cursor)?;
                }
            }
            KeyAction::Deselect => self.deselect(self.cursor)?,
            KeyAction::OpenMenu => self.open_menu(self.cursor)?,
            KeyAction::Bold => self.apply_style(self.cursor, StyleAction::Bold)?,
            KeyAction::Italic => self.apply_style(self.cursor, StyleAction::Italic)?,
            KeyAction::PageUp => {
                let (_, viewport) = self.scroll_extent();
                self.scroll.scroll_up(viewport.max(1));
            }
            KeyAction::PageDown => {
                let (content_height, viewport) = self.scroll_extent();
                self.scroll.scroll_down(viewport.max(1), content_height, viewport);
            }
            KeyAction::Home => {
                self.cursor = 0;
                self.scroll.home();
            }
            KeyAction::End => {
                self.cursor = self.presenter.item_count().saturating_sub(1);
                let (content_height, viewport) = self.scroll_extent();
                self.scroll.end(content_height, viewport);
            }
            KeyAction::None => {}
        }
        Ok(())
    }

    fn handle_menu_key(&mut self, action: KeyAction) -> Result<(), GridError> {
        let Some(menu) = self.menu.as_mut() else {
            return Ok(());
        };
        match action {
            KeyAction::Up | KeyAction::Left => menu.previous(),
            KeyAction::Down | KeyAction::Right => menu.next(),
            KeyAction::Select | KeyAction::ToggleSelect => {
                let (index, chosen) = (menu.index, menu.current());
                self.menu = None;
                self.apply_style(index, chosen)?;
            }
            KeyAction::Bold | KeyAction::Italic => {
                let index = menu.index;
                self.menu = None;
                let chosen = if action == KeyAction::Bold {
                    StyleAction::Bold
                } else {
                    StyleAction::Italic
                };
                self.apply_style(index, chosen)?;
            }
            KeyAction::Quit | KeyAction::OpenMenu => {
                self.menu = None;
            }
            KeyAction::Cancel => {
                self.should_quit = true;
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle a pointer action at a screen position.
    pub fn handle_mouse(
        &mut self,
        column: u16,
        row: u16,
        action: MouseAction,
    ) -> Result<(), GridError> {
        let (_, content, _) = Self::compute_layout(self.area());

        if let Some(menu) = self.menu.take() {
            match action {
                MouseAction::Primary => {
                    if let Some(chosen) = menu.hit_test(content, column, row) {
                        self.apply_style(menu.index, chosen)?;
                    }
                    return Ok(());
                }
                MouseAction::Secondary => {}
                MouseAction::ScrollUp | MouseAction::ScrollDown => {
                    self.menu = Some(menu);
                    return Ok(());
                }
            }
        }

        match action {
            MouseAction::ScrollUp => self.scroll.scroll_up(WHEEL_ROWS),
            MouseAction::ScrollDown => {
                let (content_height, viewport) = self.scroll_extent();
                self.scroll
                    .scroll_down(WHEEL_ROWS, content_height, viewport);
            }
            MouseAction::Primary | MouseAction::Secondary => {
                let Some(index) = self.item_at_screen(content, column, row) else {
                    return Ok(());
                };
                self.cursor = index;
                if action == MouseAction::Primary {
                    self.select(index)?;
                } else {
                    self.open_menu(index)?;
                }
            }
        }
        Ok(())
    }

    fn item_at_screen(&self, content: Rect, column: u16, row: u16) -> Option<usize> {
        if column < content.x
            || column >= content.right()
            || row < content.y
            || row >= content.bottom()
        {
            return None;
        }
        let x = column - content.x;
        let y = (row - content.y).checked_add(self.scroll.offset)?;
        self.geometry(content.width).hit_test(x, y)
    }

    fn select(&mut self, index: usize) -> Result<(), GridError> {
        self.presenter.on_select(index, &mut self.labels)?;
        self.status = format!("Selected {}", self.glyph(index)?);
        Ok(())
    }

    fn deselect(&mut self, index: usize) -> Result<(), GridError> {
        let was_selected = self.presenter.selected_index() == Some(index);
        self.presenter.on_deselect(index, &mut self.labels)?;
        if was_selected {
            self.status = format!("Deselected {}", self.glyph(index)?);
        }
        Ok(())
    }

    fn apply_style(&mut self, index: usize, action: StyleAction) -> Result<(), GridError> {
        self.presenter
            .request_style_action(index, action, &mut self.labels)?;
        self.status = format!("{} set to {}", self.glyph(index)?, action.title());
        Ok(())
    }

    fn open_menu(&mut self, index: usize) -> Result<(), GridError> {
        let actions = self.presenter.context_menu_actions(index)?;
        let glyph = self.glyph(index)?.to_string();
        tracing::debug!(index, "open context menu");
        self.menu = Some(ContextMenu::new(index, glyph, actions));
        Ok(())
    }

    fn glyph(&self, index: usize) -> Result<&str, GridError> {
        Ok(self.presenter.item_at(index)?.glyph.as_str())
    }

    fn move_cursor(&mut self, step: impl Fn(usize, usize, usize) -> Option<usize>) {
        let (_, content, _) = Self::compute_layout(self.area());
        let geometry = self.geometry(content.width);
        let columns = geometry.columns.max(1);
        if let Some(next) = step(self.cursor, columns, self.presenter.item_count()) {
            self.cursor = next;
        }
        self.reveal_cursor();
    }

    /// Scroll just enough to show the cursor's cell.
    fn reveal_cursor(&mut self) {
        let (_, content, _) = Self::compute_layout(self.area());
        if let Some(rect) = self.geometry(content.width).cell_rect(self.cursor) {
            self.scroll.ensure_visible(rect.y, rect.height, content.height);
        }
    }

    fn geometry(&self, width: u16) -> GridGeometry {
        GridGeometry::compute(&self.presenter, width)
    }

    fn area(&self) -> Rect {
        Rect::new(0, 0, self.terminal_width, self.terminal_height)
    }

    /// Content height and viewport height at the current terminal size.
    fn scroll_extent(&self) -> (u16, u16) {
        let (_, content, _) = Self::compute_layout(self.area());
        (self.geometry(content.width).content_height(), content.height)
    }

    /// Compute the title / content / footer layout.
    ///
    /// Returns (header, content, footer) rects.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(1),    // grid content
                Constraint::Length(3), // footer
            ])
            .split(area);

        (outer[0], outer[1], outer[2])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header_area, content_area, footer_area) = Self::compute_layout(frame.area());

        let cursor_glyph = self.glyph(self.cursor).unwrap_or("?");
        let selected_glyph = self
            .presenter
            .selected_index()
            .and_then(|i| self.glyph(i).ok());
        let style = self
            .presenter
            .style_of(self.cursor)
            .map(|s| format!("{s:?}"))
            .unwrap_or_default();
        let info = HeaderInfo {
            cursor: cursor_glyph,
            selected: selected_glyph,
            style: &style,
            status: &self.status,
        };
        render_header(frame, header_area, &info);

        let view = GridView {
            source: &self.presenter,
            labels: &self.labels,
            cursor: self.cursor,
            scroll_offset: self.scroll.offset,
            theme: &self.theme,
        };
        render_grid(frame, content_area, &view);

        render_footer(frame, footer_area);

        if let Some(menu) = &self.menu {
            render_context_menu(frame, content_area, menu, &self.theme);
        }
    }

    /// Set up the terminal for TUI mode.
    ///
    /// Returns a configured Terminal or an error.
    pub fn setup_terminal(
        mouse_capture: bool,
    ) -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if mouse_capture {
            execute!(stdout, EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        mouse_capture: bool,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        if mouse_capture {
            execute!(terminal.backend_mut(), DisableMouseCapture)?;
        }
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// This sets up the terminal, runs the main loop (poll events, update, render),
    /// and tears down on exit.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let mut terminal = Self::setup_terminal(self.mouse_capture)?;
        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal, self.mouse_capture)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<(), TuiError> {
        let size = terminal.size()?;
        self.handle_message(TuiMessage::Resize {
            width: size.width,
            height: size.height,
        })?;

        loop {
            // Render
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                break;
            }

            // Poll for events with tick rate timeout
            let msg = if event::poll(self.tick_rate)? {
                match event::read()? {
                    Event::Key(key_event) => Some(TuiMessage::KeyPress(map_key(key_event))),
                    Event::Mouse(mouse_event) => {
                        map_mouse(mouse_event).map(|action| TuiMessage::Mouse {
                            column: mouse_event.column,
                            row: mouse_event.row,
                            action,
                        })
                    }
                    Event::Resize(width, height) => Some(TuiMessage::Resize { width, height }),
                    _ => None,
                }
            } else {
                Some(TuiMessage::Tick)
            };
            if let Some(msg) = msg {
                self.handle_message(msg)?;
            }

            // Process any pending messages from other threads
            self.update()?;
        }
        Ok(())
    }
}
