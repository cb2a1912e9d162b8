// SPDX-License-Identifier: MPL-2.0
//! Wrapper widget that can freeze wheel scrolling of its content.
//!
//! While the viewer overlay is open the grid underneath must hold its
//! scroll position, because the wheel is repurposed for stepping through
//! images. Wrapping the grid's scrollable in [`ScrollSuspend`] swallows
//! wheel events on demand; every other event still reaches the content,
//! so resize and redraw behave as usual.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size};

/// Creates a wrapper around `content` that drops wheel events while
/// `suspended` is set.
pub fn scroll_suspend<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    suspended: bool,
) -> ScrollSuspend<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    ScrollSuspend {
        content: content.into(),
        suspended,
    }
}

/// See [`scroll_suspend`].
pub struct ScrollSuspend<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    suspended: bool,
}

impl<Message, Theme, Renderer> ScrollSuspend<'_, Message, Theme, Renderer> {
    /// Whether this event must be withheld from the content.
    ///
    /// Only wheel scrolls are ever withheld; the overlay above consumes
    /// them for navigation, so the event is dropped rather than captured.
    fn swallows(&self, event: &Event) -> bool {
        self.suspended && matches!(event, Event::Mouse(mouse::Event::WheelScrolled { .. }))
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for ScrollSuspend<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let child = &mut tree.children[0];
        self.content.as_widget_mut().layout(child, renderer, limits)
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let child = &tree.children[0];
        self.content
            .as_widget()
            .draw(child, renderer, theme, style, layout, cursor, viewport);
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if self.swallows(event) {
            return;
        }

        let child = &mut tree.children[0];
        self.content.as_widget_mut().update(
            child, event, layout, cursor, renderer, clipboard, shell, viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let child = &tree.children[0];
        self.content
            .as_widget()
            .mouse_interaction(child, layout, cursor, viewport, renderer)
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        let child = &mut tree.children[0];
        self.content
            .as_widget_mut()
            .operate(child, layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        let child = &mut tree.children[0];
        self.content
            .as_widget_mut()
            .overlay(child, layout, renderer, viewport, translation)
    }
}

impl<'a, Message, Theme, Renderer> From<ScrollSuspend<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(widget: ScrollSuspend<'a, Message, Theme, Renderer>) -> Self {
        Self::new(widget)
    }
}
