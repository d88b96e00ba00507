// File: crates/progress-chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use serde::Serialize;
use std::ops::{Add, Div, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point { Point::new(self.x + rhs.x, self.y + rhs.y) }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point { Point::new(self.x - rhs.x, self.y - rhs.y) }
}

impl Div<f64> for Point {
    type Output = Point;
    fn div(self, rhs: f64) -> Point { Point::new(self.x / rhs, self.y / rhs) }
}

/// Axis-aligned rectangle; the size is stored, the far edges are derived.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }
    pub fn width(&self) -> f64 { self.width }
    pub fn height(&self) -> f64 { self.height }
    pub fn right(&self) -> f64 { self.left + self.width }
    pub fn bottom(&self) -> f64 { self.top + self.height }

    /// Half-open on the right edge.
    pub fn contains_x(&self, x: f64) -> bool { x >= self.left && x < self.right() }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Line {
    pub from: Point,
    pub to: Point,
}

impl Line {
    pub const fn new(from: Point, to: Point) -> Self { Self { from, to } }
}
