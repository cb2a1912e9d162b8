// SPDX-License-Identifier: MPL-2.0
//! Composes the always-present gallery grid with the optional viewer
//! overlay and the toast stack.

use super::Message;
use crate::gallery::{GalleryNavigator, GalleryStore};
use crate::media::ImageData;
use crate::ui::masonry::MasonryLayout;
use crate::ui::notifications::{self, Toast};
use crate::ui::widgets::scroll_suspend::scroll_suspend;
use crate::ui::{grid, viewer};
use crate::viewport::RenderGate;
use iced::widget::Stack;
use iced::{Element, Length};

/// Borrowed slices of application state the view reads from.
pub struct ViewContext<'a> {
    pub store: &'a GalleryStore,
    pub layout: &'a MasonryLayout,
    pub gate: &'a RenderGate,
    pub navigator: &'a GalleryNavigator,
    pub notifications: &'a notifications::Manager,
    pub full_image: Option<&'a ImageData>,
    pub pulse_phase: f32,
    pub dark_mode: bool,
}

/// Renders the gallery with the viewer overlay stacked on top when open.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut stack = Stack::new().push(view_grid(&ctx));

    if let Some(overlay) = view_viewer(&ctx) {
        stack = stack.push(overlay);
    }

    stack = stack.push(Toast::view_overlay(ctx.notifications).map(Message::Notification));

    stack.width(Length::Fill).height(Length::Fill).into()
}

fn view_grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content = grid::view(grid::ViewModel {
        store: ctx.store,
        layout: ctx.layout,
        gate: ctx.gate,
        pulse_phase: ctx.pulse_phase,
        dark_mode: ctx.dark_mode,
    })
    .map(Message::Grid);

    // While the overlay is open the wheel steps through images instead of
    // scrolling the grid underneath.
    scroll_suspend(content, ctx.navigator.is_open()).into()
}

fn view_viewer<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let id = ctx.navigator.selected()?;
    let record = ctx.store.get(id)?;
    let position = ctx.navigator.position(ctx.store)?;

    let element = viewer::view(viewer::ViewModel {
        record,
        full_handle: ctx.full_image.map(|image| image.handle.clone()),
        position,
    })
    .map(Message::Viewer);

    Some(element)
}
