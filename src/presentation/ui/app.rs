//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use futures_util::StreamExt;
use ratatui::backend::Backend;
use tokio::time::interval;
use tracing::{debug, info, warn};

use super::hit_map::HitTarget;
use super::presenter::TerminalPresenter;
use crate::application::{PageController, PageEvent};
use crate::domain::Field;
use crate::domain::entities::ButtonId;
use crate::domain::keybinding::Action;
use crate::domain::ports::{Clock, PresentError};
use crate::presentation::commands::CommandRegistry;
use crate::presentation::events::{DoubleClickDetector, EventHandler, EventResult, key_info};

const TICK_RATE: Duration = Duration::from_millis(50);

/// Next focus stop: page, then each form field in order, then back to the page.
#[must_use]
pub fn cycle_focus(current: Option<Field>, forward: bool) -> Option<Field> {
    let stops = Field::ALL.len() + 1;
    let position = current.map_or(0, |field| field.index() + 1);
    let next = if forward {
        (position + 1) % stops
    } else {
        (position + stops - 1) % stops
    };
    next.checked_sub(1).map(|i| Field::ALL[i])
}

pub struct App<B: Backend> {
    controller: PageController,
    presenter: TerminalPresenter<B>,
    clock: Arc<dyn Clock>,
    registry: CommandRegistry,
    double_click: DoubleClickDetector,
    running: bool,
}

impl<B: Backend> App<B> {
    #[must_use]
    pub fn new(
        controller: PageController,
        presenter: TerminalPresenter<B>,
        clock: Arc<dyn Clock>,
        double_click_window: Duration,
    ) -> Self {
        Self {
            controller,
            presenter,
            clock,
            registry: CommandRegistry::new(),
            double_click: DoubleClickDetector::new(double_click_window),
            running: true,
        }
    }

    /// # Errors
    /// Returns error if reading terminal events or drawing fails.
    pub async fn run(mut self) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut tick_interval = interval(TICK_RATE);

        self.draw()?;

        while self.running {
            tokio::select! {
                _ = tick_interval.tick() => {
                    self.dispatch(PageEvent::Tick);
                }

                event = terminal_events.next() => match event {
                    Some(Ok(event)) => {
                        if self.handle_terminal_event(event) == EventResult::Exit {
                            self.running = false;
                        }
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => self.running = false,
                },
            }

            self.draw()?;
        }

        info!("Application exiting normally");
        Ok(())
    }

    fn draw(&mut self) -> Result<(), PresentError> {
        self.controller.present(&mut self.presenter)
    }

    fn dispatch(&mut self, event: PageEvent) {
        let now = self.clock.now();
        match self.controller.handle(event, now) {
            Err(e) if e.is_user_error() => debug!(error = %e, "Page event ignored"),
            Err(e) => warn!(error = %e, "Page event rejected"),
            Ok(()) => {}
        }
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }

        self.dispatch(PageEvent::KeyDown(key_info(&key)));

        if self.controller.notification().is_some() {
            self.dispatch(PageEvent::DismissNotification);
            return EventResult::Consumed;
        }

        let state = self.controller.state();
        if state.modal.is_visible() {
            if key.code == KeyCode::Esc {
                self.dispatch(PageEvent::CloseModal);
            }
            return EventResult::Consumed;
        }

        if let Some(field) = state.focused_field {
            return self.handle_field_key(field, key);
        }

        match self.registry.find_action(key) {
            Some(Action::Quit) => return EventResult::Exit,
            Some(action) => self.handle_action(action),
            None => return EventResult::Continue,
        }
        EventResult::Consumed
    }

    fn handle_field_key(&mut self, field: Field, key: KeyEvent) -> EventResult {
        match key.code {
            KeyCode::Tab => self.dispatch(PageEvent::Focus(cycle_focus(Some(field), true))),
            KeyCode::BackTab => self.dispatch(PageEvent::Focus(cycle_focus(Some(field), false))),
            KeyCode::Esc => self.dispatch(PageEvent::Focus(None)),
            _ if EventHandler::is_submit_event(&key) => self.dispatch(PageEvent::Submit),
            _ => {
                let text = self.controller.state().form.text(field).to_owned();
                match self.presenter.editor_mut().apply(field, &text, key) {
                    Some(text) => self.dispatch(PageEvent::FieldInput { field, text }),
                    None => return EventResult::Continue,
                }
            }
        }
        EventResult::Consumed
    }

    fn handle_action(&mut self, action: Action) {
        let focused = self.controller.state().focused_field;
        let event = match action {
            Action::ToggleTheme => PageEvent::ToggleTheme,
            Action::PreviousImage => PageEvent::PreviousImage,
            Action::NextImage => PageEvent::NextImage,
            Action::NextTab => PageEvent::NextTab,
            Action::PreviousTab => PageEvent::PreviousTab,
            Action::FocusNext => PageEvent::Focus(cycle_focus(focused, true)),
            Action::FocusPrevious => PageEvent::Focus(cycle_focus(focused, false)),
            Action::Submit => PageEvent::Submit,
            Action::ToggleAccordion(index) => PageEvent::ToggleAccordion(index),
            Action::Quit | Action::Cancel => return,
        };
        debug!(?action, "Key action");
        self.dispatch(event);
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> EventResult {
        let target = self.presenter.hits().target_at(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.controller.notification().is_some() {
                    self.dispatch(PageEvent::DismissNotification);
                    return EventResult::Consumed;
                }

                self.dispatch(PageEvent::PointerDown);
                if self
                    .double_click
                    .press(self.clock.now(), mouse.column, mouse.row)
                {
                    self.dispatch(PageEvent::DoubleClick);
                }
                self.handle_click(target);
            }
            MouseEventKind::Up(MouseButton::Left) => self.dispatch(PageEvent::PointerUp),
            MouseEventKind::Moved => {
                let button = target.and_then(HitTarget::hover_button);
                let hovered = self.controller.state().hover.hovered();
                match button {
                    Some(button) if hovered != Some(button) => {
                        self.dispatch(PageEvent::HoverEnter(button));
                    }
                    None if hovered.is_some() => self.dispatch(PageEvent::HoverLeave),
                    _ => return EventResult::Continue,
                }
            }
            _ => return EventResult::Continue,
        }
        EventResult::Consumed
    }

    fn handle_click(&mut self, target: Option<HitTarget>) {
        let state = self.controller.state();
        if state.focused_field.is_some() && !matches!(target, Some(HitTarget::Field(_))) {
            self.dispatch(PageEvent::Focus(None));
        }

        let event = match target {
            Some(HitTarget::Button(ButtonId::ThemeToggle)) => PageEvent::ToggleTheme,
            Some(HitTarget::Button(ButtonId::Tab(index))) => {
                match self.controller.state().tabs.tabs().get(index) {
                    Some(tab) => PageEvent::SelectTab(tab.id.clone()),
                    None => return,
                }
            }
            Some(HitTarget::Button(ButtonId::GalleryPrevious)) => PageEvent::PreviousImage,
            Some(HitTarget::Button(ButtonId::GalleryNext)) => PageEvent::NextImage,
            Some(HitTarget::Button(ButtonId::Submit)) => PageEvent::Submit,
            Some(HitTarget::Button(ButtonId::CloseModal)) => PageEvent::CloseModal,
            Some(HitTarget::Indicator(index)) => PageEvent::SelectIndicator(index),
            Some(HitTarget::AccordionHeader(index)) => PageEvent::ToggleAccordion(index),
            Some(HitTarget::Field(field)) => PageEvent::Focus(Some(field)),
            None => return,
        };
        self.dispatch(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ControllerSettings;
    use crate::domain::PageState;
    use crate::domain::entities::{HexColor, ThemeMode};
    use crate::domain::long_press::LONG_PRESS_MESSAGE;
    use crate::domain::ports::mocks::{ManualClock, MockColorSource};
    use crate::infrastructure::config::app_config::default_slides;
    use crate::presentation::content::{default_accordion, default_tabs};
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend, style::Color};

    fn build_app() -> (App<TestBackend>, Arc<ManualClock>) {
        let state = PageState::new(
            ThemeMode::Light,
            default_tabs().unwrap(),
            default_slides(),
            default_accordion(),
        )
        .unwrap();
        let mut colors = MockColorSource::new();
        colors
            .expect_random_color()
            .returning(|| HexColor::new(0xAB, 0xCD, 0xEF));
        let clock = Arc::new(ManualClock::new());
        let controller = PageController::new(
            state,
            ControllerSettings::default(),
            Box::new(colors),
            clock.now(),
        )
        .unwrap();
        let terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let presenter = TerminalPresenter::new(terminal, Color::Rgb(52, 152, 219));

        let mut app = App::new(controller, presenter, clock.clone(), Duration::from_millis(400));
        app.draw().unwrap();
        (app, clock)
    }

    fn press(app: &mut App<TestBackend>, code: KeyCode) -> EventResult {
        app.handle_terminal_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn mouse(app: &mut App<TestBackend>, kind: MouseEventKind, (column, row): (u16, u16)) {
        app.handle_terminal_event(Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }));
        app.draw().unwrap();
    }

    fn locate(app: &App<TestBackend>, target: HitTarget) -> (u16, u16) {
        (0..40u16)
            .flat_map(|y| (0..100u16).map(move |x| (x, y)))
            .find(|&(x, y)| app.presenter.hits().target_at(x, y) == Some(target))
            .unwrap()
    }

    fn click(app: &mut App<TestBackend>, at: (u16, u16)) {
        mouse(app, MouseEventKind::Down(MouseButton::Left), at);
        mouse(app, MouseEventKind::Up(MouseButton::Left), at);
    }

    #[test]
    fn test_focus_cycle_wraps_through_page() {
        assert_eq!(cycle_focus(None, true), Some(Field::Name));
        assert_eq!(cycle_focus(Some(Field::Message), true), None);
        assert_eq!(cycle_focus(None, false), Some(Field::Message));
        assert_eq!(cycle_focus(Some(Field::Name), false), None);
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, _) = build_app();
        assert_eq!(press(&mut app, KeyCode::Char('q')), EventResult::Exit);

        let (mut app, _) = build_app();
        press(&mut app, KeyCode::Tab);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_terminal_event(Event::Key(ctrl_c)), EventResult::Exit);
    }

    #[test]
    fn test_key_press_updates_key_info() {
        let (mut app, _) = build_app();
        press(&mut app, KeyCode::Char('x'));

        let state = app.controller.state();
        assert_eq!(state.key_info.as_ref().unwrap().code, "KeyX");
        assert_eq!(state.key_color, Some(HexColor::new(0xAB, 0xCD, 0xEF)));
    }

    #[test]
    fn test_typing_into_focused_field() {
        let (mut app, _) = build_app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('a'));

        let state = app.controller.state();
        assert_eq!(state.focused_field, Some(Field::Name));
        assert_eq!(state.form.text(Field::Name), "qa");
        assert!(state.form.decoration(Field::Name).unwrap().is_valid());

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.controller.state().focused_field, None);
    }

    #[test]
    fn test_click_theme_toggle() {
        let (mut app, _) = build_app();
        let at = locate(&app, HitTarget::Button(ButtonId::ThemeToggle));
        click(&mut app, at);
        assert_eq!(app.controller.state().theme, ThemeMode::Dark);
    }

    #[test]
    fn test_click_tab_and_indicator() {
        let (mut app, clock) = build_app();
        let tab = locate(&app, HitTarget::Button(ButtonId::Tab(2)));
        click(&mut app, tab);
        assert_eq!(app.controller.state().tabs.active().id, "tab3");

        clock.advance(Duration::from_millis(500));
        let dot = locate(&app, HitTarget::Indicator(3));
        click(&mut app, dot);
        assert_eq!(app.controller.state().gallery.active_index(), 3);
    }

    #[test]
    fn test_double_click_opens_modal_and_escape_closes() {
        let (mut app, clock) = build_app();
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), (0, 39));
        clock.advance(Duration::from_millis(100));
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), (0, 39));
        assert!(app.controller.state().modal.is_visible());

        press(&mut app, KeyCode::Esc);
        assert!(!app.controller.state().modal.is_visible());
    }

    #[test]
    fn test_long_press_sets_background_and_key_dismisses() {
        let (mut app, clock) = build_app();
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), (0, 39));
        clock.advance(Duration::from_millis(1000));
        app.dispatch(PageEvent::Tick);

        assert_eq!(
            app.controller.state().background,
            Some(HexColor::new(0xAB, 0xCD, 0xEF))
        );
        assert_eq!(
            app.controller.notification().map(|n| n.message.as_str()),
            Some(LONG_PRESS_MESSAGE)
        );

        assert_eq!(press(&mut app, KeyCode::Char('t')), EventResult::Consumed);
        assert!(app.controller.notification().is_none());
        assert_eq!(app.controller.state().theme, ThemeMode::Light);
    }

    #[test]
    fn test_hover_enter_and_leave() {
        let (mut app, _) = build_app();
        let at = locate(&app, HitTarget::Button(ButtonId::Submit));
        mouse(&mut app, MouseEventKind::Moved, at);
        assert_eq!(
            app.controller.state().hover.hovered(),
            Some(ButtonId::Submit)
        );

        mouse(&mut app, MouseEventKind::Moved, (0, 39));
        assert_eq!(app.controller.state().hover.hovered(), None);
    }
}
