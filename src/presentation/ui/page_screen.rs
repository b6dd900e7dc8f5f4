//! The whole page as one stateful widget.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, StatefulWidget, Widget},
};

use super::hit_map::{HitMap, HitTarget};
use super::notification_popup::NotificationPopup;
use super::secret_modal::SecretModalView;
use crate::domain::entities::ButtonId;
use crate::domain::keybinding::{Action, Keybind};
use crate::domain::{Field, PageView};
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::theme::{Theme, to_color};
use crate::presentation::widgets::{
    AccordionView, Button, FooterBar, FooterBarStyle, GalleryRegions, GalleryView, InputEditor,
    KeyInfoPanel, TabsView, TextInput,
};

const SUBMIT_LABEL: &str = "Send Message";
const INPUT_HEIGHT: u16 = 4;

/// Draws the page and records where every clickable control landed.
pub struct PageScreen<'a> {
    view: PageView<'a>,
    theme: &'a Theme,
    editor: &'a InputEditor,
    registry: &'a CommandRegistry,
}

impl<'a> PageScreen<'a> {
    #[must_use]
    pub const fn new(
        view: PageView<'a>,
        theme: &'a Theme,
        editor: &'a InputEditor,
        registry: &'a CommandRegistry,
    ) -> Self {
        Self {
            view,
            theme,
            editor,
            registry,
        }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
        let state = self.view.state;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.primary));
        let inner = block.inner(area);
        block.render(area, buf);

        let label = state.theme.toggle_label();
        let [title, toggle] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(Button::max_width(label)),
        ])
        .areas(inner);

        Line::styled(
            state.theme.header_text(),
            Style::default()
                .fg(self.theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .render(title, buf);

        Button::new(label)
            .scale(state.hover.scale(ButtonId::ThemeToggle))
            .style(self.theme.button_style())
            .hover_style(self.theme.hover_style)
            .render(toggle, buf);
        hits.push(toggle, HitTarget::Button(ButtonId::ThemeToggle));
    }

    fn render_middle(&self, area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
        let state = self.view.state;
        let [left, gallery] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);
        let [tabs, accordion] =
            Layout::vertical([Constraint::Length(7), Constraint::Fill(1)]).areas(left);

        TabsView::new(&state.tabs, &state.hover, self.theme).render(tabs, buf);
        for (i, rect) in TabsView::button_areas(tabs, &state.tabs).into_iter().enumerate() {
            hits.push(rect, HitTarget::Button(ButtonId::Tab(i)));
        }

        AccordionView::new(&state.accordion, self.theme).render(accordion, buf);
        for (i, rect) in AccordionView::header_areas(accordion, &state.accordion)
            .into_iter()
            .enumerate()
        {
            hits.push(rect, HitTarget::AccordionHeader(i));
        }

        GalleryView::new(&state.slides, &state.gallery, &state.hover, self.theme)
            .render(gallery, buf);
        let regions = GalleryRegions::compute(gallery, &state.gallery);
        hits.push(regions.previous, HitTarget::Button(ButtonId::GalleryPrevious));
        hits.push(regions.next, HitTarget::Button(ButtonId::GalleryNext));
        for (index, rect) in regions.indicators {
            hits.push(rect, HitTarget::Indicator(index));
        }
    }

    fn render_form(&self, area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
        let state = self.view.state;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.primary))
            .title(" Contact ");
        let inner = block.inner(area);
        block.render(area, buf);

        let [first, second, actions] = Layout::vertical([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(inner);
        let columns = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).spacing(1);
        let [name, email] = columns.areas(first);
        let [password, message] = columns.areas(second);

        for (field, rect) in Field::ALL.into_iter().zip([name, email, password, message]) {
            let text = state.form.text(field);
            let cursor = (state.focused_field == Some(field))
                .then(|| self.editor.cursor(field, text));
            let mut input = TextInput::new(field.label(), text)
                .cursor(cursor)
                .decoration(state.form.decoration(field))
                .border_styles(
                    Style::default().fg(self.theme.light_gray),
                    Style::default().fg(self.theme.primary),
                )
                .validity_colors(self.theme.valid, self.theme.invalid);
            if field == Field::Password {
                input = input.password();
            }
            input.render(rect, buf);
            hits.push(
                Rect {
                    height: rect.height.min(3),
                    ..rect
                },
                HitTarget::Field(field),
            );
        }

        let width = Button::max_width(SUBMIT_LABEL).min(actions.width);
        let submit = Rect::new(actions.x + (actions.width - width) / 2, actions.y, width, actions.height);
        Button::new(SUBMIT_LABEL)
            .scale(state.hover.scale(ButtonId::Submit))
            .style(self.theme.button_style())
            .hover_style(self.theme.hover_style)
            .render(submit, buf);
        hits.push(submit, HitTarget::Button(ButtonId::Submit));
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let bindings = self.get_commands(self.registry);
        let focus = self.view.state.focused_field.map_or("page", Field::label);
        FooterBar::new(&bindings)
            .focus(focus)
            .style(FooterBarStyle::from_theme(self.theme))
            .render(area, buf);
    }
}

impl HasCommands for PageScreen<'_> {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        let actions: &[(Action, &'static str)] = if self.view.state.focused_field.is_some() {
            &[
                (Action::FocusNext, "Next field"),
                (Action::Submit, "Submit"),
                (Action::Cancel, "Leave form"),
            ]
        } else {
            &[
                (Action::Quit, "Quit"),
                (Action::ToggleTheme, "Theme"),
                (Action::PreviousImage, "Prev"),
                (Action::NextImage, "Next"),
                (Action::NextTab, "Tab"),
                (Action::FocusNext, "Form"),
            ]
        };
        actions
            .iter()
            .filter_map(|&(action, label)| {
                registry
                    .get(action)
                    .map(|key| Keybind::new(key, action, label))
            })
            .collect()
    }
}

impl StatefulWidget for PageScreen<'_> {
    type State = HitMap;

    fn render(self, area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
        hits.clear();
        let state = self.view.state;

        let mut canvas = self.theme.base_style();
        if let Some(background) = state.background {
            canvas = canvas.bg(to_color(background));
        }
        buf.set_style(area, canvas);

        let [header, key_info, middle, form, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(INPUT_HEIGHT * 2 + 3),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_header(header, buf, hits);
        KeyInfoPanel::new(state.key_info.as_ref(), state.key_color, self.theme)
            .render(key_info, buf);
        self.render_middle(middle, buf, hits);
        self.render_form(form, buf, hits);
        self.render_footer(footer, buf);

        if state.modal.is_visible() {
            hits.clear();
            SecretModalView::new(&state.hover, self.theme).render(area, buf);
            let (_, close) = SecretModalView::regions(area);
            hits.push(close, HitTarget::Button(ButtonId::CloseModal));
        }

        if let Some(notification) = self.view.notification {
            NotificationPopup::new(notification, self.theme).render(area, buf);
        }
    }
}
