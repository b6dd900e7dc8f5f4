//! Page event dispatch.

use std::time::Duration;

use tracing::{debug, info};

use crate::application::dto::PageEvent;
use crate::application::services::notification_manager::NotificationManager;
use crate::domain::form::SUBMIT_SUCCESS_MESSAGE;
use crate::domain::long_press::{DEFAULT_LONG_PRESS, LONG_PRESS_MESSAGE, LongPressDetector};
use crate::domain::notification::DEFAULT_NOTIFICATION_DURATION;
use crate::domain::ports::{ColorSource, PresentError, PresenterPort};
use crate::domain::timer::RepeatingTimer;
use crate::domain::{Direction, PageError, PageState, PageView, SubmitOutcome};

/// Default slideshow auto-advance period.
pub const DEFAULT_SLIDE_INTERVAL: Duration = Duration::from_millis(5000);

/// Timing knobs for the page controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerSettings {
    /// Auto-advance period of the slideshow.
    pub slide_interval: Duration,
    /// Hold time before a press counts as long.
    pub long_press: Duration,
    /// How long an acknowledgment stays on screen.
    pub notification_duration: Duration,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            slide_interval: DEFAULT_SLIDE_INTERVAL,
            long_press: DEFAULT_LONG_PRESS,
            notification_duration: DEFAULT_NOTIFICATION_DURATION,
        }
    }
}

/// Owns the page state and every timer tied to it.
///
/// Events are handled one at a time and run to completion. The slideshow
/// timer starts with the controller and stops only when it is dropped.
pub struct PageController {
    state: PageState,
    slideshow: RepeatingTimer,
    long_press: LongPressDetector,
    notifications: NotificationManager,
    colors: Box<dyn ColorSource>,
}

impl PageController {
    /// Creates a controller whose slideshow timer starts at `now`.
    ///
    /// # Errors
    /// Returns an error if the slideshow interval is zero.
    pub fn new(
        state: PageState,
        settings: ControllerSettings,
        colors: Box<dyn ColorSource>,
        now: Duration,
    ) -> Result<Self, PageError> {
        let slideshow = RepeatingTimer::start(now, settings.slide_interval)?;
        Ok(Self {
            state,
            slideshow,
            long_press: LongPressDetector::new(settings.long_press),
            notifications: NotificationManager::new(settings.notification_duration),
            colors,
        })
    }

    /// Current page state.
    #[must_use]
    pub const fn state(&self) -> &PageState {
        &self.state
    }

    /// Acknowledgment currently on screen.
    #[must_use]
    pub fn notification(&self) -> Option<&crate::domain::Notification> {
        self.notifications.current_notification()
    }

    /// Frame to draw for the current state.
    #[must_use]
    pub fn view(&self) -> PageView<'_> {
        PageView {
            state: &self.state,
            notification: self.notifications.current_notification(),
        }
    }

    /// Draws the current state through `presenter`.
    ///
    /// # Errors
    /// Returns [`PresentError`] if the presenter fails.
    pub fn present(&self, presenter: &mut dyn PresenterPort) -> Result<(), PresentError> {
        presenter.present(&self.view())
    }

    /// Handles one event observed at `now`.
    ///
    /// # Errors
    /// Returns an error for events that reference a missing tab, image or
    /// accordion section. The state is left untouched in that case.
    pub fn handle(&mut self, event: PageEvent, now: Duration) -> Result<(), PageError> {
        match event {
            PageEvent::ToggleTheme => {
                self.state.theme = self.state.theme.toggled();
                info!(theme = %self.state.theme, "Theme toggled");
            }
            PageEvent::HoverEnter(button) => self.state.hover.enter(button),
            PageEvent::HoverLeave => self.state.hover.leave(),
            PageEvent::KeyDown(key_info) => {
                debug!(key = %key_info.key, code = %key_info.code, "Key pressed");
                self.state.key_info = Some(key_info);
                self.state.key_color = Some(self.colors.random_color());
            }
            PageEvent::DoubleClick => {
                debug!("Secret modal revealed");
                self.state.modal.show();
            }
            PageEvent::CloseModal => {
                self.state.modal.hide();
            }
            PageEvent::PointerDown => self.long_press.press(now),
            PageEvent::PointerUp => {
                if self.long_press.release(now) {
                    self.fire_long_press();
                }
            }
            PageEvent::SelectTab(id) => self.state.tabs.select(&id)?,
            PageEvent::NextTab => self.state.tabs.select_next(),
            PageEvent::PreviousTab => self.state.tabs.select_previous(),
            PageEvent::PreviousImage => self.state.gallery.advance(Direction::Previous),
            PageEvent::NextImage => self.state.gallery.advance(Direction::Next),
            PageEvent::SelectIndicator(index) => self.state.gallery.select_index(index)?,
            PageEvent::ToggleAccordion(index) => {
                let len = self.state.accordion.len();
                self.state
                    .accordion
                    .toggle(index)
                    .ok_or(PageError::AccordionOutOfRange { index, len })?;
            }
            PageEvent::FieldInput { field, text } => {
                let validity = self.state.form.input(field, text);
                debug!(%field, valid = validity.valid, "Field validated");
            }
            PageEvent::Focus(field) => self.state.focused_field = field,
            PageEvent::Submit => self.submit(),
            PageEvent::DismissNotification => {
                self.notifications.dismiss();
            }
            PageEvent::Tick => self.tick(now),
        }
        Ok(())
    }

    fn submit(&mut self) {
        match self.state.form.submit() {
            SubmitOutcome::Accepted => {
                info!("Contact form accepted");
                self.notifications.success("Submitted", SUBMIT_SUCCESS_MESSAGE);
            }
            SubmitOutcome::Rejected { failed } => {
                debug!(?failed, "Contact form blocked");
            }
        }
    }

    fn tick(&mut self, now: Duration) {
        for _ in 0..self.slideshow.poll(now) {
            self.state.gallery.advance(Direction::Next);
        }
        if self.long_press.poll(now) {
            self.fire_long_press();
        }
        self.notifications.tick(now);
    }

    fn fire_long_press(&mut self) {
        let color = self.colors.random_color();
        info!(%color, "Long press detected");
        self.state.background = Some(color);
        self.notifications.info("Secret", LONG_PRESS_MESSAGE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{
        Accordion, AccordionSection, ButtonId, HexColor, KeyInfo, Slide, Tab, TabSet, ThemeMode,
    };
    use crate::domain::ports::mocks::{MockColorSource, RecordingPresenter};
    use crate::domain::{Decoration, Field, GalleryError, TabError};

    const fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn page() -> PageState {
        let tabs = TabSet::new(vec![
            Tab::new("tab1", "Intro", "intro"),
            Tab::new("tab2", "Details", "details"),
        ])
        .unwrap();
        let slides = (0..3)
            .map(|i| Slide::new(format!("Slide {i}"), ""))
            .collect();
        let accordion = Accordion::new(vec![
            AccordionSection::new("Q1", "A1"),
            AccordionSection::new("Q2", "A2"),
        ]);
        PageState::new(ThemeMode::Light, tabs, slides, accordion).unwrap()
    }

    fn colors() -> Box<MockColorSource> {
        let mut colors = MockColorSource::new();
        colors
            .expect_random_color()
            .returning(|| HexColor::new(0x12, 0x34, 0x56));
        Box::new(colors)
    }

    fn controller() -> PageController {
        PageController::new(page(), ControllerSettings::default(), colors(), Duration::ZERO)
            .unwrap()
    }

    fn input(controller: &mut PageController, field: Field, text: &str) {
        controller
            .handle(
                PageEvent::FieldInput {
                    field,
                    text: text.to_string(),
                },
                Duration::ZERO,
            )
            .unwrap();
    }

    #[test]
    fn test_zero_interval_rejected() {
        let settings = ControllerSettings {
            slide_interval: Duration::ZERO,
            ..ControllerSettings::default()
        };
        assert!(PageController::new(page(), settings, colors(), Duration::ZERO).is_err());
    }

    #[test]
    fn test_theme_toggle() {
        let mut controller = controller();
        controller.handle(PageEvent::ToggleTheme, ms(0)).unwrap();
        assert_eq!(controller.state().theme, ThemeMode::Dark);
        controller.handle(PageEvent::ToggleTheme, ms(0)).unwrap();
        assert_eq!(controller.state().theme, ThemeMode::Light);
    }

    #[test]
    fn test_auto_advance_cycles_back() {
        let mut controller = controller();
        let len = controller.state().gallery.len();

        for tick in 1..=len {
            let now = ms(5000 * tick as u64);
            controller.handle(PageEvent::Tick, now).unwrap();
        }

        assert_eq!(controller.state().gallery.active_index(), 0);
    }

    #[test]
    fn test_auto_advance_continues_after_manual_navigation() {
        let mut controller = controller();
        controller.handle(PageEvent::PreviousImage, ms(1000)).unwrap();
        assert_eq!(controller.state().gallery.active_index(), 2);

        controller.handle(PageEvent::Tick, ms(4999)).unwrap();
        assert_eq!(controller.state().gallery.active_index(), 2);
        controller.handle(PageEvent::Tick, ms(5000)).unwrap();
        assert_eq!(controller.state().gallery.active_index(), 0);
    }

    #[test]
    fn test_indicator_out_of_range_is_an_error() {
        let mut controller = controller();
        controller.handle(PageEvent::SelectIndicator(1), ms(0)).unwrap();

        let err = controller
            .handle(PageEvent::SelectIndicator(9), ms(0))
            .unwrap_err();

        assert_eq!(
            err,
            PageError::Gallery(GalleryError::IndexOutOfRange { index: 9, len: 3 })
        );
        assert!(err.is_user_error());
        assert_eq!(controller.state().gallery.active_index(), 1);
    }

    #[test]
    fn test_tab_selection() {
        let mut controller = controller();
        controller
            .handle(PageEvent::SelectTab("tab2".to_string()), ms(0))
            .unwrap();
        assert_eq!(controller.state().tabs.active_index(), 1);

        let err = controller
            .handle(PageEvent::SelectTab("nope".to_string()), ms(0))
            .unwrap_err();
        assert!(matches!(err, PageError::Tab(TabError::UnknownTab { .. })));
        assert_eq!(controller.state().tabs.active_index(), 1);
    }

    #[test]
    fn test_key_down_echoes_with_color() {
        let mut controller = controller();
        controller
            .handle(PageEvent::KeyDown(KeyInfo::new("a", "KeyA", 65)), ms(0))
            .unwrap();

        let state = controller.state();
        assert_eq!(state.key_info, Some(KeyInfo::new("a", "KeyA", 65)));
        assert_eq!(state.key_color, Some(HexColor::new(0x12, 0x34, 0x56)));
    }

    #[test]
    fn test_hover_enter_and_leave() {
        let mut controller = controller();
        controller
            .handle(PageEvent::HoverEnter(ButtonId::GalleryNext), ms(0))
            .unwrap();
        assert_eq!(
            controller.state().hover.hovered(),
            Some(ButtonId::GalleryNext)
        );
        controller.handle(PageEvent::HoverLeave, ms(0)).unwrap();
        assert_eq!(controller.state().hover.hovered(), None);
    }

    #[test]
    fn test_double_click_modal() {
        let mut controller = controller();
        controller.handle(PageEvent::DoubleClick, ms(0)).unwrap();
        assert!(controller.state().modal.is_visible());
        controller.handle(PageEvent::CloseModal, ms(0)).unwrap();
        assert!(!controller.state().modal.is_visible());
    }

    #[test]
    fn test_long_press_changes_background() {
        let mut controller = controller();
        controller.handle(PageEvent::PointerDown, ms(100)).unwrap();
        controller.handle(PageEvent::Tick, ms(1099)).unwrap();
        assert!(controller.state().background.is_none());

        controller.handle(PageEvent::Tick, ms(1100)).unwrap();
        assert_eq!(
            controller.state().background,
            Some(HexColor::new(0x12, 0x34, 0x56))
        );
        assert_eq!(
            controller.notification().map(|n| n.message.as_str()),
            Some(LONG_PRESS_MESSAGE)
        );
    }

    #[test]
    fn test_release_before_hold_cancels() {
        let mut controller = controller();
        controller.handle(PageEvent::PointerDown, ms(0)).unwrap();
        controller.handle(PageEvent::PointerUp, ms(500)).unwrap();
        controller.handle(PageEvent::Tick, ms(2000)).unwrap();

        assert!(controller.state().background.is_none());
        assert!(controller.notification().is_none());
    }

    #[test]
    fn test_release_after_missed_tick_fires_once() {
        let mut colors = MockColorSource::new();
        colors
            .expect_random_color()
            .times(1)
            .returning(|| HexColor::new(1, 2, 3));
        let mut controller = PageController::new(
            page(),
            ControllerSettings::default(),
            Box::new(colors),
            Duration::ZERO,
        )
        .unwrap();

        controller.handle(PageEvent::PointerDown, ms(0)).unwrap();
        controller.handle(PageEvent::PointerUp, ms(1500)).unwrap();
        controller.handle(PageEvent::Tick, ms(1600)).unwrap();

        assert_eq!(controller.state().background, Some(HexColor::new(1, 2, 3)));
    }

    #[test]
    fn test_accordion_toggle() {
        let mut controller = controller();
        controller.handle(PageEvent::ToggleAccordion(1), ms(0)).unwrap();
        assert!(controller.state().accordion.sections()[1].is_open());

        let err = controller
            .handle(PageEvent::ToggleAccordion(2), ms(0))
            .unwrap_err();
        assert_eq!(err, PageError::AccordionOutOfRange { index: 2, len: 2 });
    }

    #[test]
    fn test_valid_submit_clears_and_acknowledges() {
        let mut controller = controller();
        input(&mut controller, Field::Name, "Al");
        input(&mut controller, Field::Email, "a@b.com");
        input(&mut controller, Field::Password, "Longenough1");
        input(&mut controller, Field::Message, "1234567890");

        controller.handle(PageEvent::Submit, ms(0)).unwrap();

        let form = &controller.state().form;
        for field in Field::ALL {
            assert_eq!(form.text(field), "");
            assert!(form.decoration(field).is_none());
        }
        assert_eq!(
            controller.notification().map(|n| n.message.as_str()),
            Some(SUBMIT_SUCCESS_MESSAGE)
        );
    }

    #[test]
    fn test_invalid_submit_is_blocked() {
        let mut controller = controller();
        input(&mut controller, Field::Name, "Al");
        input(&mut controller, Field::Email, "a@b.com");
        input(&mut controller, Field::Password, "Longenough1");

        controller.handle(PageEvent::Submit, ms(0)).unwrap();

        let form = &controller.state().form;
        assert_eq!(form.text(Field::Name), "Al");
        assert!(form.decoration(Field::Name).unwrap().is_valid());
        assert_eq!(
            form.decoration(Field::Message),
            Some(&Decoration::Invalid(
                "Please enter a message (min 10 characters)"
            ))
        );
        assert!(controller.notification().is_none());
    }

    #[test]
    fn test_present_renders_current_state() {
        let mut controller = controller();
        let mut presenter = RecordingPresenter::default();

        controller.present(&mut presenter).unwrap();
        controller.handle(PageEvent::NextImage, ms(0)).unwrap();
        controller.handle(PageEvent::DoubleClick, ms(0)).unwrap();
        controller.present(&mut presenter).unwrap();

        assert_eq!(presenter.frames.len(), 2);
        assert_eq!(presenter.frames[0].active_image, 0);
        assert!(!presenter.frames[0].modal_visible);
        assert_eq!(presenter.frames[1].active_image, 1);
        assert!(presenter.frames[1].modal_visible);
    }
}
