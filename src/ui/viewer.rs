// SPDX-License-Identifier: MPL-2.0
//! Fullscreen viewer overlay with circular prev/next navigation.
//!
//! The overlay dims the grid behind it, centers the selected image at
//! fit-to-window size, and layers the navigation zones, close button,
//! and caption on top. Clicks on the backdrop close the viewer; clicks
//! on the image frame or the controls are captured before they reach
//! the backdrop handler.

use crate::gallery::{ImageRecord, ViewerPosition};
use crate::ui::design_tokens::{alpha, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, responsive, Column, Container, Image, Space, Stack, Text};
use iced::{ContentFit, Element, Length, Padding, Size};

/// Messages produced by the viewer overlay.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Step to the next record, wrapping at the end.
    AdvanceRequested,
    /// Step to the previous record, wrapping at the start.
    RetreatRequested,
    /// Close the overlay.
    CloseRequested,
    /// Captured so clicks on the image frame don't reach the backdrop.
    FramePressed,
}

pub struct ViewModel<'a> {
    pub record: &'a ImageRecord,
    /// Full-resolution handle once decoding finished. Until then the
    /// thumbnail handle stands in at the same display size, so the
    /// swap never moves the frame.
    pub full_handle: Option<iced::widget::image::Handle>,
    pub position: ViewerPosition,
}

pub fn view(model: ViewModel<'_>) -> Element<'_, Message> {
    responsive(move |available: Size| overlay(&model, available)).into()
}

fn overlay<'a>(model: &ViewModel<'a>, available: Size) -> Element<'a, Message> {
    let backdrop = mouse_area(
        Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::CloseRequested);

    let (display_width, display_height) =
        fit_dimensions(model.record.full.width, model.record.full.height, available);

    let handle = model
        .full_handle
        .clone()
        .unwrap_or_else(|| model.record.thumbnail.handle.clone());

    let image = Image::new(handle)
        .width(Length::Fixed(display_width))
        .height(Length::Fixed(display_height))
        .content_fit(ContentFit::Contain);

    let framed = mouse_area(image).on_press(Message::FramePressed);

    let centered_image = Container::new(framed)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let mut stack = Stack::new().push(backdrop).push(centered_image);

    if model.position.total > 1 {
        stack = stack
            .push(navigation_zone(
                "◀",
                Message::RetreatRequested,
                Horizontal::Left,
            ))
            .push(navigation_zone(
                "▶",
                Message::AdvanceRequested,
                Horizontal::Right,
            ));
    }

    stack = stack.push(close_control()).push(caption(model));

    stack.into()
}

/// Display size that fits the image inside the window, with a margin,
/// never scaling above natural size.
fn fit_dimensions(width: u32, height: u32, available: Size) -> (f32, f32) {
    if width == 0 || height == 0 || available.width <= 0.0 || available.height <= 0.0 {
        return (1.0, 1.0);
    }

    let usable_width = (available.width - 2.0 * spacing::XL).max(1.0);
    let usable_height = (available.height - 2.0 * spacing::XL).max(1.0);

    #[allow(clippy::cast_precision_loss)]
    let scale_x = usable_width / width as f32;
    #[allow(clippy::cast_precision_loss)]
    let scale_y = usable_height / height as f32;
    let scale = scale_x.min(scale_y).min(1.0);

    if !scale.is_finite() || scale <= 0.0 {
        return (1.0, 1.0);
    }

    #[allow(clippy::cast_precision_loss)]
    (width as f32 * scale, height as f32 * scale)
}

fn navigation_zone(
    glyph: &str,
    message: Message,
    side: Horizontal,
) -> Element<'static, Message> {
    let arrow = button(Text::new(glyph.to_owned()).size(sizing::ICON))
        .padding(spacing::SM)
        .style(styles::button_overlay(
            palette::WHITE,
            alpha::HALF,
            alpha::STRONG,
        ))
        .on_press(message);

    let zone = Container::new(arrow)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(side)
        .align_y(Vertical::Center);

    // The zone captures clicks around the button too, so a near miss
    // still navigates instead of closing the overlay.
    let clickable = mouse_area(zone).on_release(message);

    Container::new(clickable)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(side)
        .into()
}

fn close_control() -> Element<'static, Message> {
    let close = button(Text::new("\u{00D7}").size(sizing::ICON))
        .padding(spacing::SM)
        .style(styles::button_overlay(
            palette::WHITE,
            alpha::HALF,
            alpha::STRONG,
        ))
        .on_press(Message::CloseRequested);

    Container::new(close)
        .width(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Right)
        .into()
}

fn caption(model: &ViewModel<'_>) -> Element<'static, Message> {
    let position_text = format!("{} / {}", model.position.position, model.position.total);

    let lines = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(Text::new(model.record.file_name()).size(typography::BODY))
        .push(Text::new(position_text).size(typography::CAPTION));

    let indicator = Container::new(lines)
        .padding(Padding {
            top: spacing::XXS,
            right: spacing::SM,
            bottom: spacing::XXS,
            left: spacing::SM,
        })
        .style(styles::overlay::indicator(radius::SHEET));

    Container::new(indicator)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom)
        .into()
}
