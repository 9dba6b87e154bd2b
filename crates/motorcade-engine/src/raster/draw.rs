//! Primitive drawer: shape fills over the pixel surface.
//!
//! Shapes are sampled at pixel centers (`x + 0.5`, `y + 0.5`) with hard
//! edges, so identical inputs always touch identical pixels. Bounds are
//! clamped to the surface; fully clipped shapes are a no-op, not an error.

use crate::coords::{Rect, Vec2};
use crate::paint::Color;

use super::{DrawError, Surface};

/// Pixel rows/columns whose centers fall inside `[min, max)`, clamped to the
/// surface. `None` when the span is empty.
fn clip_span(lo: f32, hi: f32, limit: u32) -> Option<(i32, i32)> {
    let start = (lo - 0.5).ceil().max(0.0) as i32;
    let end = ((hi - 0.5).ceil()).min(limit as f32) as i32;
    if start >= end { None } else { Some((start, end)) }
}

fn ensure_finite(points: &[Vec2]) -> Result<(), DrawError> {
    if points.iter().all(|p| p.is_finite()) {
        Ok(())
    } else {
        Err(DrawError::NonFiniteGeometry)
    }
}

/// Fills an axis-aligned rectangle.
pub fn fill_rect(surface: &mut Surface, rect: Rect, color: Color) -> Result<(), DrawError> {
    surface.ensure_writable()?;
    if !rect.is_finite() {
        return Err(DrawError::NonFiniteGeometry);
    }

    let r = rect.normalized();
    let Some((x0, x1)) = clip_span(r.min().x, r.max().x, surface.width()) else {
        return Ok(());
    };
    let Some((y0, y1)) = clip_span(r.min().y, r.max().y, surface.height()) else {
        return Ok(());
    };

    for y in y0..y1 {
        for x in x0..x1 {
            surface.blend_pixel(x, y, color);
        }
    }
    Ok(())
}

/// Strokes the border of an axis-aligned rectangle, `width` pixels thick,
/// inset into the rect.
pub fn stroke_rect(
    surface: &mut Surface,
    rect: Rect,
    width: f32,
    color: Color,
) -> Result<(), DrawError> {
    surface.ensure_writable()?;
    if !rect.is_finite() || !width.is_finite() {
        return Err(DrawError::NonFiniteGeometry);
    }

    let r = rect.normalized();
    let w = width.min(r.size.x * 0.5).min(r.size.y * 0.5);
    if w <= 0.0 {
        return Ok(());
    }

    let (min, max) = (r.min(), r.max());
    fill_rect(surface, Rect::new(min.x, min.y, r.size.x, w), color)?;
    fill_rect(surface, Rect::new(min.x, max.y - w, r.size.x, w), color)?;
    fill_rect(surface, Rect::new(min.x, min.y + w, w, r.size.y - 2.0 * w), color)?;
    fill_rect(surface, Rect::new(max.x - w, min.y + w, w, r.size.y - 2.0 * w), color)?;
    Ok(())
}

/// Fills a circle.
pub fn fill_circle(
    surface: &mut Surface,
    center: Vec2,
    radius: f32,
    color: Color,
) -> Result<(), DrawError> {
    surface.ensure_writable()?;
    if !center.is_finite() || !radius.is_finite() {
        return Err(DrawError::NonFiniteGeometry);
    }
    if radius <= 0.0 {
        return Ok(());
    }

    let Some((y0, y1)) = clip_span(center.y - radius, center.y + radius, surface.height()) else {
        return Ok(());
    };
    let r2 = radius * radius;

    for y in y0..y1 {
        let dy = (y as f32 + 0.5) - center.y;
        let spread2 = r2 - dy * dy;
        if spread2 <= 0.0 {
            continue;
        }
        let spread = spread2.sqrt();
        let Some((x0, x1)) = clip_span(center.x - spread, center.x + spread, surface.width())
        else {
            continue;
        };
        for x in x0..x1 {
            surface.blend_pixel(x, y, color);
        }
    }
    Ok(())
}

/// Fills a convex polygon by scanline.
///
/// Vertices may wind either way. Fewer than 3 vertices is a no-op.
pub fn fill_convex_polygon(
    surface: &mut Surface,
    points: &[Vec2],
    color: Color,
) -> Result<(), DrawError> {
    surface.ensure_writable()?;
    ensure_finite(points)?;
    if points.len() < 3 {
        return Ok(());
    }

    let min_y = points.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
    let max_y = points.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);
    let Some((y0, y1)) = clip_span(min_y, max_y, surface.height()) else {
        return Ok(());
    };

    // A convex outline crosses a scanline at most twice.
    let mut hits: Vec<f32> = Vec::with_capacity(2);

    for y in y0..y1 {
        let cy = y as f32 + 0.5;
        hits.clear();

        for i in 0..points.len() {
            let a = points[i];
            let b = points[(i + 1) % points.len()];
            if (a.y <= cy) != (b.y <= cy) {
                let t = (cy - a.y) / (b.y - a.y);
                hits.push(a.x + t * (b.x - a.x));
            }
        }
        if hits.len() < 2 {
            continue;
        }
        hits.sort_by(f32::total_cmp);

        let Some((x0, x1)) = clip_span(hits[0], hits[hits.len() - 1], surface.width()) else {
            continue;
        };
        for x in x0..x1 {
            surface.blend_pixel(x, y, color);
        }
    }
    Ok(())
}

/// Fills a rotated rectangle with rounded corners.
///
/// `center` is the rect center in pixels, `axis` the unit direction of its
/// long side, `half_len`/`half_wid` the half extents along/across `axis`,
/// all in pixels. `corner_radius` is clamped to the half extents; pass 0 for
/// sharp corners.
///
/// Coverage is decided per pixel in the rect's local frame, so rotation
/// introduces no seams regardless of fill opacity.
pub fn fill_oriented_rect(
    surface: &mut Surface,
    center: Vec2,
    axis: Vec2,
    half_len: f32,
    half_wid: f32,
    corner_radius: f32,
    color: Color,
) -> Result<(), DrawError> {
    surface.ensure_writable()?;
    ensure_finite(&[center, axis])?;
    if !half_len.is_finite() || !half_wid.is_finite() || !corner_radius.is_finite() {
        return Err(DrawError::NonFiniteGeometry);
    }
    if half_len <= 0.0 || half_wid <= 0.0 {
        return Ok(());
    }

    let radius = corner_radius.clamp(0.0, half_len.min(half_wid));
    let perp = axis.perp();

    // Pixel-space bounding box of the rotated corners.
    let reach = Vec2::new(
        axis.x.abs() * half_len + perp.x.abs() * half_wid,
        axis.y.abs() * half_len + perp.y.abs() * half_wid,
    );
    let Some((y0, y1)) = clip_span(center.y - reach.y, center.y + reach.y, surface.height())
    else {
        return Ok(());
    };
    let Some((x0, x1)) = clip_span(center.x - reach.x, center.x + reach.x, surface.width())
    else {
        return Ok(());
    };

    let (inner_l, inner_w) = (half_len - radius, half_wid - radius);
    let r2 = radius * radius;

    for y in y0..y1 {
        for x in x0..x1 {
            let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - center;
            let lx = d.dot(axis).abs();
            let ly = d.dot(perp).abs();
            if lx > half_len || ly > half_wid {
                continue;
            }
            if lx > inner_l && ly > inner_w {
                let cx = lx - inner_l;
                let cy = ly - inner_w;
                if cx * cx + cy * cy > r2 {
                    continue;
                }
            }
            surface.blend_pixel(x, y, color);
        }
    }
    Ok(())
}

/// Blits an 8-bit coverage bitmap (e.g. a rasterized glyph) at `(x0, y0)`,
/// tinting it with `color`.
pub fn blit_coverage(
    surface: &mut Surface,
    x0: i32,
    y0: i32,
    width: usize,
    height: usize,
    coverage: &[u8],
    color: Color,
) -> Result<(), DrawError> {
    surface.ensure_writable()?;
    debug_assert_eq!(coverage.len(), width * height);

    for row in 0..height {
        for col in 0..width {
            let cov = coverage[row * width + col];
            if cov == 0 {
                continue;
            }
            let src = color.with_opacity(cov as f32 / 255.0);
            surface.blend_pixel(x0 + col as i32, y0 + row as i32, src);
        }
    }
    Ok(())
}
