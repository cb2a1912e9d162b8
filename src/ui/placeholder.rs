// SPDX-License-Identifier: MPL-2.0
//! Pulsing placeholder cell drawn with Canvas.
//!
//! Cells outside the reveal band show this instead of their thumbnail:
//! a rounded rectangle whose fill alpha breathes with the shared
//! animation phase, cheap enough to draw by the hundred.

use crate::ui::design_tokens::{alpha, radius};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};

/// Phase advance per animation tick, in radians.
pub const PULSE_SPEED: f32 = 0.1;

/// Placeholder tile that pulses while waiting to be revealed.
pub struct PlaceholderCell {
    cache: Cache,
    phase: f32,
    color: Color,
}

impl PlaceholderCell {
    /// Creates a placeholder with the given base color and animation phase.
    #[must_use]
    pub fn new(color: Color, phase: f32) -> Self {
        Self {
            cache: Cache::default(),
            phase,
            color,
        }
    }

    /// Creates a Canvas widget of the given cell dimensions.
    pub fn into_element<Message: 'static>(
        self,
        width: f32,
        height: f32,
    ) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .into()
    }

    /// Fill alpha for the current phase, oscillating between the two
    /// placeholder opacities.
    fn pulse_alpha(&self) -> f32 {
        let t = 0.5 + 0.5 * self.phase.sin();
        alpha::PULSE_FLOOR + (alpha::PULSE_CEIL - alpha::PULSE_FLOOR) * t
    }
}

impl<Message> canvas::Program<Message> for PlaceholderCell {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let fill_alpha = self.pulse_alpha();

        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let tile = Path::rounded_rectangle(Point::ORIGIN, frame.size(), radius::CARD.into());
                frame.fill(
                    &tile,
                    Color {
                        a: fill_alpha,
                        ..self.color
                    },
                );
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn pulse_alpha_stays_within_the_placeholder_range() {
        for step in 0..100 {
            #[allow(clippy::cast_precision_loss)]
            let phase = step as f32 * PULSE_SPEED;
            let cell = PlaceholderCell::new(palette::GRAY, phase);
            let pulse = cell.pulse_alpha();
            assert!(pulse >= alpha::PULSE_FLOOR);
            assert!(pulse <= alpha::PULSE_CEIL);
        }
    }

    #[test]
    fn pulse_alpha_actually_moves() {
        let at_rest = PlaceholderCell::new(palette::GRAY, 0.0).pulse_alpha();
        let quarter = PlaceholderCell::new(palette::GRAY, std::f32::consts::FRAC_PI_2)
            .pulse_alpha();
        assert!(quarter > at_rest);
    }
}
