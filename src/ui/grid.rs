// SPDX-License-Identifier: MPL-2.0
//! Masonry grid of thumbnails with lazy cell reveal.
//!
//! Cells the render gate has revealed draw their thumbnail; the rest
//! draw a pulsing placeholder until the visible band reaches them. The
//! grid reports scroll movement so the gate can be re-evaluated.

use crate::config::defaults::{GRID_PADDING, GRID_SPACING};
use crate::gallery::{GalleryStore, LoadProgress, RecordId};
use crate::ui::design_tokens::{alpha, palette, sizing, spacing, typography};
use crate::ui::masonry::MasonryLayout;
use crate::ui::placeholder::PlaceholderCell;
use crate::ui::styles;
use crate::viewport::RenderGate;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::{AbsoluteOffset, Viewport};
use iced::widget::{button, mouse_area, Column, Container, Image, Row, Scrollable, Text};
use iced::{mouse, widget::Id, ContentFit, Element, Length, Rectangle};

/// Widget id of the grid scrollable.
pub const SCROLLABLE_ID: &str = "gallery-grid";

/// Messages produced by the grid view.
#[derive(Debug, Clone)]
pub enum Message {
    /// The folder picker should open.
    OpenFolderRequested,
    /// A revealed cell was clicked.
    CellClicked(RecordId),
    /// The grid scrolled; carries the new offset and viewport bounds.
    Scrolled {
        offset: AbsoluteOffset,
        bounds: Rectangle,
    },
}

pub struct ViewModel<'a> {
    pub store: &'a GalleryStore,
    pub layout: &'a MasonryLayout,
    pub gate: &'a RenderGate,
    /// Shared animation phase driving the placeholder pulse.
    pub pulse_phase: f32,
    pub dark_mode: bool,
}

pub fn view(model: ViewModel<'_>) -> Element<'_, Message> {
    if model.store.is_empty() && !model.store.is_loading() {
        return empty_state();
    }

    let mut columns_row = Row::new().spacing(GRID_SPACING);
    for column_indices in &model.layout.columns {
        let mut column = Column::new()
            .spacing(GRID_SPACING)
            .width(Length::Fixed(model.layout.column_width));
        for &index in column_indices {
            column = column.push(cell(&model, index));
        }
        columns_row = columns_row.push(column);
    }

    let grid = Container::new(columns_row)
        .padding(GRID_PADDING)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let scrollable = Scrollable::new(grid)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled {
            offset: viewport.absolute_offset(),
            bounds: viewport.bounds(),
        });

    let mut page = Column::new().width(Length::Fill).height(Length::Fill);
    if model.store.is_loading() {
        page = page.push(progress_line(model.store.progress()));
    }
    page.push(scrollable).into()
}

fn cell<'a>(model: &ViewModel<'a>, index: usize) -> Element<'a, Message> {
    let record = &model.store.records()[index];
    let width = model.layout.column_width;
    let height = model.layout.cell_height(index);

    if model.gate.is_revealed(record.id()) {
        let thumbnail = Image::new(record.thumbnail.handle.clone())
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover);

        mouse_area(thumbnail)
            .interaction(mouse::Interaction::Pointer)
            .on_press(Message::CellClicked(record.id()))
            .into()
    } else {
        let color = if model.dark_mode {
            palette::GRAY_DARK
        } else {
            palette::GRAY_LIGHT
        };
        PlaceholderCell::new(color, model.pulse_phase).into_element(width, height)
    }
}

fn progress_line(progress: LoadProgress) -> Element<'static, Message> {
    Container::new(
        Text::new(format!("Loading images… {}%", progress.percent())).size(typography::CAPTION),
    )
    .width(Length::Fill)
    .padding(spacing::XS)
    .align_x(Horizontal::Center)
    .into()
}

fn empty_state<'a>() -> Element<'a, Message> {
    let icon = Text::new("🖼")
        .size(sizing::NAV_BUTTON)
        .color(palette::GRAY);

    let title = Text::new("No images yet")
        .size(typography::TITLE)
        .color(palette::GRAY);

    let open_button = button(Text::new("Open folder…").size(typography::BODY_LARGE))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button_primary)
        .on_press(Message::OpenFolderRequested);

    let drop_hint = Text::new("…or drop a folder anywhere in the window")
        .size(typography::CAPTION)
        .color(iced::Color {
            a: alpha::HALF,
            ..palette::GRAY
        });

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(icon)
        .push(title)
        .push(open_button)
        .push(drop_hint);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
