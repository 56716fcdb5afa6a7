use egui::{Painter, Pos2, Rect, Shape, Stroke as EguiStroke, Vec2};

use super::Element;
use super::common;
use super::record::{CapStyle, ItemRecord, LineConfig};
use crate::color::Color;
use crate::error::FormatError;

/// Samples per curved span when smoothing a polyline
const SMOOTH_SEGMENTS: usize = 8;

/// Freehand line through two or more points
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color,
    width: f32,
    cap: CapStyle,
}

impl Stroke {
    pub fn new(points: Vec<Pos2>, color: Color, width: f32, cap: CapStyle) -> Self {
        Self {
            points,
            color,
            width,
            cap,
        }
    }

    /// Single segment as produced by a pencil drag
    pub fn segment(from: Pos2, to: Pos2, color: Color, width: f32) -> Self {
        Self::new(vec![from, to], color, width, CapStyle::Round)
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub(crate) fn from_config(coords: &[f32], config: &LineConfig) -> Result<Self, FormatError> {
        let points = common::unflatten("line", coords, 2)?;
        common::check_finite("line", &[config.width])?;
        Ok(Self::new(points, config.fill, config.width.max(0.0), config.capstyle))
    }

    /// The polyline that gets painted: the points themselves for a single
    /// segment, otherwise a parabolic spline that passes through the first
    /// and last points and is pulled towards every interior point.
    pub fn smoothed_path(&self) -> Vec<Pos2> {
        if self.points.len() < 3 {
            return self.points.clone();
        }

        let last = self.points.len() - 1;
        let mut path = vec![self.points[0]];

        for i in 1..last {
            let control = self.points[i];
            let start = if i == 1 {
                self.points[0]
            } else {
                self.points[i - 1].lerp(control, 0.5)
            };
            let end = if i == last - 1 {
                self.points[last]
            } else {
                control.lerp(self.points[i + 1], 0.5)
            };

            for step in 1..=SMOOTH_SEGMENTS {
                let t = step as f32 / SMOOTH_SEGMENTS as f32;
                let a = start.lerp(control, t);
                let b = control.lerp(end, t);
                path.push(a.lerp(b, t));
            }
        }

        path
    }
}

impl Element for Stroke {
    fn element_type(&self) -> &'static str {
        "line"
    }

    fn coords(&self) -> Vec<f32> {
        common::flatten(&self.points)
    }

    fn rect(&self) -> Rect {
        common::calculate_bounds(&self.points, self.width / 2.0)
    }

    fn draw(&self, painter: &Painter, offset: Vec2) {
        let color = self.color.to_color32();
        let path: Vec<Pos2> = self.smoothed_path().into_iter().map(|p| p + offset).collect();

        if path.len() >= 2 {
            painter.add(Shape::line(path.clone(), EguiStroke::new(self.width, color)));
        }

        // egui lines have butt ends; round caps are painted as discs
        if self.cap == CapStyle::Round {
            let radius = self.width / 2.0;
            if let (Some(first), Some(last)) = (path.first(), path.last()) {
                painter.circle_filled(*first, radius, color);
                painter.circle_filled(*last, radius, color);
            }
        }
    }

    fn to_record(&self) -> ItemRecord {
        ItemRecord::Line {
            coords: self.coords(),
            config: LineConfig {
                fill: self.color,
                width: self.width,
                capstyle: self.cap,
            },
        }
    }
}
