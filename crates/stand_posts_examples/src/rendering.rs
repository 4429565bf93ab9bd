//! PNG rendering and shared setup for the example binaries.
use anyhow::Context;
use glam::DVec2;
use image::{Rgb, RgbImage};
use stand_posts::prelude::*;
use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber honoring `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second call in the same process keeps the first subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Three neighbouring stands in a projected foot-based reference: an irregular stand with
/// a wetland hole, a long strip along its east side, and a small triangular inclusion.
pub fn demo_stands() -> anyhow::Result<Vec<Polygon>> {
    let main = Polygon::from_exterior([
        [0.0, 0.0],
        [1450.0, 60.0],
        [1600.0, 820.0],
        [1100.0, 1300.0],
        [420.0, 1180.0],
        [-120.0, 640.0],
    ])?
    .with_ring(Ring::new([
        [520.0, 420.0],
        [830.0, 380.0],
        [900.0, 700.0],
        [560.0, 760.0],
    ])?);
    let strip = Polygon::from_exterior([
        [1450.0, 60.0],
        [1900.0, 0.0],
        [2050.0, 900.0],
        [1600.0, 820.0],
    ])?;
    let inclusion = Polygon::from_exterior([[1100.0, 1300.0], [1600.0, 820.0], [1750.0, 1350.0]])?;
    Ok(vec![main, strip, inclusion])
}

/// Image layout and colors.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    pub margin_px: u32,
    pub background: [u8; 3],
    pub grid_color: [u8; 3],
    pub stand_color: [u8; 3],
    pub post_color: [u8; 3],
    pub post_radius: i32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_size: (1000, 1000),
            margin_px: 20,
            background: [245, 245, 235],
            grid_color: [215, 215, 205],
            stand_color: [40, 100, 40],
            post_color: [200, 60, 30],
            post_radius: 4,
        }
    }
}

impl RenderConfig {
    pub fn with_post_color(mut self, color: [u8; 3]) -> Self {
        self.post_color = color;
        self
    }
}

struct Viewport {
    origin: DVec2,
    scale: f64,
    margin: f64,
    height: f64,
}

impl Viewport {
    fn fit(extent: Extent, rc: &RenderConfig) -> Self {
        let margin = rc.margin_px as f64;
        let (w, h) = (rc.image_size.0 as f64, rc.image_size.1 as f64);
        let size = extent.size().max(DVec2::splat(f64::EPSILON));
        let scale = ((w - 2.0 * margin) / size.x).min((h - 2.0 * margin) / size.y);
        Self {
            origin: extent.min,
            scale,
            margin,
            height: h,
        }
    }

    fn to_px(&self, p: DVec2) -> (f64, f64) {
        let rel = (p - self.origin) * self.scale;
        (self.margin + rel.x, self.height - self.margin - rel.y)
    }
}

fn put(img: &mut RgbImage, x: i64, y: i64, color: [u8; 3]) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, Rgb(color));
    }
}

fn draw_line(img: &mut RgbImage, a: (f64, f64), b: (f64, f64), color: [u8; 3]) {
    let steps = (b.0 - a.0).abs().max((b.1 - a.1).abs()).ceil().max(1.0) as usize;
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let x = a.0 + (b.0 - a.0) * t;
        let y = a.1 + (b.1 - a.1) * t;
        put(img, x.round() as i64, y.round() as i64, color);
    }
}

fn draw_disk(img: &mut RgbImage, c: (f64, f64), radius: i32, color: [u8; 3]) {
    let (cx, cy) = (c.0.round() as i64, c.1.round() as i64);
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                put(img, cx + dx as i64, cy + dy as i64, color);
            }
        }
    }
}

/// Renders stand outlines, the grid and the posts of `samples` to a PNG at `out_path`.
pub fn render_samples_to_png(
    stands: &[Polygon],
    samples: &SampleSet,
    rc: &RenderConfig,
    out_path: &str,
) -> anyhow::Result<()> {
    let extent = stands
        .iter()
        .map(Polygon::extent)
        .reduce(|a, b| a.union(&b))
        .context("nothing to render")?;
    let view = Viewport::fit(extent, rc);
    let mut img = RgbImage::from_pixel(rc.image_size.0, rc.image_size.1, Rgb(rc.background));

    let grid = &samples.grid;
    for col in 0..grid.columns {
        for row in 0..grid.rows {
            let r = grid.cell_rect(col, row);
            let corners = [
                r.min,
                DVec2::new(r.max.x, r.min.y),
                r.max,
                DVec2::new(r.min.x, r.max.y),
            ];
            for i in 0..4 {
                draw_line(
                    &mut img,
                    view.to_px(corners[i]),
                    view.to_px(corners[(i + 1) % 4]),
                    rc.grid_color,
                );
            }
        }
    }

    for stand in stands {
        for ring in stand.rings() {
            let pts = ring.points();
            for i in 0..pts.len() {
                let a = view.to_px(pts[i]);
                let b = view.to_px(pts[(i + 1) % pts.len()]);
                draw_line(&mut img, a, b, rc.stand_color);
            }
        }
    }

    for p in samples.points() {
        draw_disk(&mut img, view.to_px(p), rc.post_radius, rc.post_color);
    }

    img.save(out_path)
        .with_context(|| format!("writing {out_path}"))?;
    tracing::info!("Wrote {out_path} ({} posts).", samples.len());
    Ok(())
}
