use datastory_style::presets::{AnnotationStyle, ArrowHead, ArrowStyle};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::sans;

/// Draws a preset-styled callout: the text block (optionally boxed) at
/// `xytext` and a curved arrow from the block edge to `xy`. Both anchors
/// are backend pixel coordinates; translate data coordinates with
/// `ChartContext::backend_coord` first.
pub fn annotate<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    text: &str,
    xy: (i32, i32),
    xytext: (i32, i32),
    style: &AnnotationStyle,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let font = sans(style.font_size, style.weight, style.italic).color(&style.color);
    let lines: Vec<&str> = text.lines().collect();
    let line_height = (style.font_size * 1.35).round() as i32;
    let mut block_width = 0;
    for line in &lines {
        let (width, _) = root.estimate_text_size(line, &font)?;
        block_width = block_width.max(width as i32);
    }
    let block_height = line_height * lines.len() as i32;
    let (left, top) = xytext;

    if let Some(text_box) = &style.text_box {
        let pad = (text_box.padding * style.font_size).round() as i32;
        let corners = [
            (left - pad, top - pad),
            (left + block_width + pad, top + block_height + pad),
        ];
        root.draw(&Rectangle::new(corners, text_box.fill.filled()))?;
        if let Some(edge) = text_box.edge {
            let width = text_box.edge_width.round().max(1.0) as u32;
            root.draw(&Rectangle::new(corners, edge.stroke_width(width)))?;
        }
    }

    for (index, line) in lines.iter().enumerate() {
        root.draw(&Text::new(
            (*line).to_string(),
            (left, top + index as i32 * line_height),
            font.clone(),
        ))?;
    }

    if let Some(arrow) = &style.arrow {
        // a little clearance so the tail never touches the glyphs
        let block = (
            (left as f64 - 4.0, top as f64 - 4.0),
            (
                (left + block_width) as f64 + 4.0,
                (top + block_height) as f64 + 4.0,
            ),
        );
        draw_arrow(root, block, (xy.0 as f64, xy.1 as f64), arrow)?;
    }
    Ok(())
}

fn draw_arrow<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    block: ((f64, f64), (f64, f64)),
    target: (f64, f64),
    arrow: &ArrowStyle,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let tail = geometry::rect_exit_point(block, target);
    let tail = geometry::advance(tail, target, arrow.shrink_start);
    let tip = geometry::advance(target, tail, arrow.shrink_end);
    let control = geometry::control_point(tail, tip, arrow.curvature);
    let curve = geometry::quad_bezier(tail, control, tip, 24);

    let stroke = arrow.color.stroke_width(arrow.width.round().max(1.0) as u32);
    let path: Vec<(i32, i32)> = curve.iter().map(|p| geometry::to_pixel(*p)).collect();
    root.draw(&PathElement::new(path, stroke))?;

    let head_length = 4.0 + 2.5 * arrow.width;
    match arrow.head {
        ArrowHead::Plain => {}
        ArrowHead::Open => {
            draw_open_head(root, &curve, head_length, stroke)?;
        }
        ArrowHead::Filled => {
            let wings = geometry::arrow_head(tip, curve[curve.len() - 2], head_length, 25.0);
            root.draw(&Polygon::new(
                vec![
                    geometry::to_pixel(wings[0]),
                    geometry::to_pixel(tip),
                    geometry::to_pixel(wings[1]),
                ],
                arrow.color.filled(),
            ))?;
        }
        ArrowHead::Double => {
            draw_open_head(root, &curve, head_length, stroke)?;
            let reversed: Vec<(f64, f64)> = curve.iter().rev().copied().collect();
            draw_open_head(root, &reversed, head_length, stroke)?;
        }
    }
    Ok(())
}

fn draw_open_head<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    curve: &[(f64, f64)],
    length: f64,
    stroke: ShapeStyle,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let tip = curve[curve.len() - 1];
    let wings = geometry::arrow_head(tip, curve[curve.len() - 2], length, 25.0);
    for wing in wings {
        root.draw(&PathElement::new(
            vec![geometry::to_pixel(wing), geometry::to_pixel(tip)],
            stroke,
        ))?;
    }
    Ok(())
}

pub(crate) mod geometry {
    pub(crate) fn to_pixel(point: (f64, f64)) -> (i32, i32) {
        (point.0.round() as i32, point.1.round() as i32)
    }

    /// Moves `from` toward `toward` by `distance`, never past the midpoint.
    pub(crate) fn advance(from: (f64, f64), toward: (f64, f64), distance: f64) -> (f64, f64) {
        let dx = toward.0 - from.0;
        let dy = toward.1 - from.1;
        let len = (dx * dx + dy * dy).sqrt();
        if len < f64::EPSILON {
            return from;
        }
        let step = distance.min(len / 2.0) / len;
        (from.0 + dx * step, from.1 + dy * step)
    }

    /// Quadratic Bezier control point: the chord midpoint offset
    /// perpendicularly by `curvature` times the chord length.
    pub(crate) fn control_point(start: (f64, f64), end: (f64, f64), curvature: f64) -> (f64, f64) {
        let mid = ((start.0 + end.0) / 2.0, (start.1 + end.1) / 2.0);
        let dx = end.0 - start.0;
        let dy = end.1 - start.1;
        (mid.0 - dy * curvature, mid.1 + dx * curvature)
    }

    /// Inclusive sampling of a quadratic Bezier curve.
    pub(crate) fn quad_bezier(
        p0: (f64, f64),
        p1: (f64, f64),
        p2: (f64, f64),
        segments: usize,
    ) -> Vec<(f64, f64)> {
        (0..=segments)
            .map(|i| {
                let t = i as f64 / segments as f64;
                let u = 1.0 - t;
                (
                    u * u * p0.0 + 2.0 * u * t * p1.0 + t * t * p2.0,
                    u * u * p0.1 + 2.0 * u * t * p1.1 + t * t * p2.1,
                )
            })
            .collect()
    }

    /// The two wing points of an arrow head whose tip sits at `tip`,
    /// pointing away from `from`.
    pub(crate) fn arrow_head(
        tip: (f64, f64),
        from: (f64, f64),
        length: f64,
        spread_degrees: f64,
    ) -> [(f64, f64); 2] {
        let dx = tip.0 - from.0;
        let dy = tip.1 - from.1;
        let len = (dx * dx + dy * dy).sqrt().max(f64::EPSILON);
        let (ux, uy) = (dx / len, dy / len);
        let spread = spread_degrees.to_radians();
        let wing = |angle: f64| {
            let (sin, cos) = angle.sin_cos();
            (
                tip.0 - length * (ux * cos - uy * sin),
                tip.1 - length * (ux * sin + uy * cos),
            )
        };
        [wing(spread), wing(-spread)]
    }

    /// Where the ray from the rectangle's center toward `target` leaves
    /// the rectangle. A target inside the rectangle returns the center.
    pub(crate) fn rect_exit_point(
        rect: ((f64, f64), (f64, f64)),
        target: (f64, f64),
    ) -> (f64, f64) {
        let ((x0, y0), (x1, y1)) = rect;
        let center = ((x0 + x1) / 2.0, (y0 + y1) / 2.0);
        let dx = target.0 - center.0;
        let dy = target.1 - center.1;
        let half_w = (x1 - x0) / 2.0;
        let half_h = (y1 - y0) / 2.0;
        let tx = if dx.abs() < f64::EPSILON {
            f64::INFINITY
        } else {
            half_w / dx.abs()
        };
        let ty = if dy.abs() < f64::EPSILON {
            f64::INFINITY
        } else {
            half_h / dy.abs()
        };
        let t = tx.min(ty);
        if !t.is_finite() || t >= 1.0 {
            return center;
        }
        (center.0 + dx * t, center.1 + dy * t)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn close(a: (f64, f64), b: (f64, f64)) -> bool {
            (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
        }

        #[test]
        fn bezier_hits_both_endpoints() {
            let curve = quad_bezier((0.0, 0.0), (5.0, 10.0), (10.0, 0.0), 8);
            assert_eq!(curve.len(), 9);
            assert!(close(curve[0], (0.0, 0.0)));
            assert!(close(curve[8], (10.0, 0.0)));
            // apex of a symmetric arc is halfway to the control point
            assert!(close(curve[4], (5.0, 5.0)));
        }

        #[test]
        fn zero_curvature_control_is_the_midpoint() {
            assert!(close(
                control_point((0.0, 0.0), (10.0, 4.0), 0.0),
                (5.0, 2.0)
            ));
        }

        #[test]
        fn curvature_offsets_perpendicular_to_the_chord() {
            // horizontal chord: offset is purely vertical, scaled by length
            let control = control_point((0.0, 0.0), (10.0, 0.0), 0.2);
            assert!(close(control, (5.0, 2.0)));
            let flipped = control_point((0.0, 0.0), (10.0, 0.0), -0.2);
            assert!(close(flipped, (5.0, -2.0)));
        }

        #[test]
        fn advance_moves_the_requested_distance() {
            let moved = advance((0.0, 0.0), (10.0, 0.0), 3.0);
            assert!(close(moved, (3.0, 0.0)));
            // never crosses the midpoint
            let clamped = advance((0.0, 0.0), (10.0, 0.0), 100.0);
            assert!(close(clamped, (5.0, 0.0)));
            // degenerate segment stays put
            assert!(close(advance((2.0, 2.0), (2.0, 2.0), 5.0), (2.0, 2.0)));
        }

        #[test]
        fn exit_point_lands_on_the_boundary() {
            let rect = ((0.0, 0.0), (10.0, 6.0));
            // target straight to the right exits through the right edge
            assert!(close(rect_exit_point(rect, (20.0, 3.0)), (10.0, 3.0)));
            // target straight below exits through the bottom edge
            assert!(close(rect_exit_point(rect, (5.0, 30.0)), (5.0, 6.0)));
            // target inside collapses to the center
            assert!(close(rect_exit_point(rect, (6.0, 3.0)), (5.0, 3.0)));
        }

        #[test]
        fn arrow_head_wings_are_symmetric() {
            let [left, right] = arrow_head((10.0, 0.0), (0.0, 0.0), 5.0, 30.0);
            assert!((left.0 - right.0).abs() < 1e-9);
            assert!((left.1 + right.1).abs() < 1e-9);
            // wings sit behind the tip
            assert!(left.0 < 10.0 && right.0 < 10.0);
        }
    }
}
