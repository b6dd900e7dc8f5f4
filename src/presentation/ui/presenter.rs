//! Terminal adapter for the presenter port.

use ratatui::{Terminal, backend::Backend, style::Color};

use super::hit_map::HitMap;
use super::page_screen::PageScreen;
use crate::domain::PageView;
use crate::domain::ports::{PresentError, PresenterPort};
use crate::presentation::commands::CommandRegistry;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::InputEditor;

/// Draws page frames into a ratatui terminal.
///
/// Keeps what the event loop needs from the last frame: the clickable
/// regions and the cursor positions of the form fields.
pub struct TerminalPresenter<B: Backend> {
    terminal: Terminal<B>,
    accent: Color,
    registry: CommandRegistry,
    editor: InputEditor,
    hits: HitMap,
}

impl<B: Backend> TerminalPresenter<B> {
    #[must_use]
    pub fn new(terminal: Terminal<B>, accent: Color) -> Self {
        Self {
            terminal,
            accent,
            registry: CommandRegistry::new(),
            editor: InputEditor::new(),
            hits: HitMap::new(),
        }
    }

    /// Clickable regions of the last frame.
    #[must_use]
    pub const fn hits(&self) -> &HitMap {
        &self.hits
    }

    pub const fn editor_mut(&mut self) -> &mut InputEditor {
        &mut self.editor
    }

    #[must_use]
    pub const fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B: Backend> PresenterPort for TerminalPresenter<B> {
    fn present(&mut self, view: &PageView<'_>) -> Result<(), PresentError> {
        let theme = Theme::from_color(self.accent, view.state.theme);
        let screen = PageScreen::new(*view, &theme, &self.editor, &self.registry);
        let hits = &mut self.hits;
        self.terminal
            .draw(|frame| frame.render_stateful_widget(screen, frame.area(), hits))
            .map_err(|e| PresentError::Backend(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PageState;
    use crate::domain::entities::ThemeMode;
    use crate::infrastructure::config::app_config::default_slides;
    use crate::presentation::content::{default_accordion, default_tabs};
    use ratatui::backend::TestBackend;

    fn screen_text(presenter: &TerminalPresenter<TestBackend>) -> String {
        let buffer = presenter.terminal().backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_present_draws_page_and_records_hits() {
        let terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut presenter = TerminalPresenter::new(terminal, Color::Rgb(52, 152, 219));
        let state = PageState::new(
            ThemeMode::Light,
            default_tabs().unwrap(),
            default_slides(),
            default_accordion(),
        )
        .unwrap();

        presenter
            .present(&PageView {
                state: &state,
                notification: None,
            })
            .unwrap();

        let text = screen_text(&presenter);
        assert!(text.contains("Welcome to my JavaScript Playground"));
        assert!(text.contains("Mountains"));
        assert!(text.contains("Press any key"));
        assert!(!presenter.hits().is_empty());
    }
}
