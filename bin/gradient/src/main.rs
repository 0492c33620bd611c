//! Render hue, lightness and value sweeps through the conversion engine.
//!
//! Usage: `tinct-gradient [OUTPUT] [BASE_HEX]`. The image is written to
//! `out.png` by default and the sweeps that need a hue take it from the base
//! color, `#1e90ff` by default.

use anyhow::Context;
use image::{Rgb as Pixel, RgbImage};
use tinct::{Color, Component, Space};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const WIDTH: u32 = 1000;
const HEIGHT_PER_SWEEP: u32 = 100;

struct Sweep {
    name: &'static str,
    /// Space the color passes through on its way to rgb.
    via: Option<Space>,
    color: Box<dyn Fn(Component) -> Color>,
}

impl Sweep {
    fn new(
        name: &'static str,
        via: Option<Space>,
        color: impl Fn(Component) -> Color + 'static,
    ) -> Self {
        Self {
            name,
            via,
            color: Box::new(color),
        }
    }

    fn pixel(&self, t: Component) -> anyhow::Result<Pixel<u8>> {
        let color = (self.color)(t);
        let color = match self.via {
            Some(space) => color.convert(space)?,
            None => color,
        };
        let rgb = color
            .convert(Space::Rgb)?
            .as_rgb()
            .context("conversion did not produce rgb")?;

        Ok(Pixel(
            [rgb.red, rgb.green, rgb.blue].map(|c| c.clamp(0.0, 255.0) as u8),
        ))
    }
}

fn sweeps(hue: Component) -> Vec<Sweep> {
    vec![
        Sweep::new("hsl hue", None, |t| Color::hsl(t * 360.0, 1.0, 0.5)),
        Sweep::new("hsv hue", None, |t| Color::hsv(t * 360.0, 1.0, 1.0)),
        Sweep::new("hsl lightness", None, move |t| Color::hsl(hue, 1.0, t)),
        Sweep::new("hsv value", None, move |t| Color::hsv(hue, 1.0, t)),
        Sweep::new("hsv saturation via hsl", Some(Space::Hsl), move |t| {
            Color::hsv(hue, t, 1.0)
        }),
    ]
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tinct=debug,tinct_gradient=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let output = args.next().unwrap_or_else(|| "out.png".to_owned());
    let base = args.next().unwrap_or_else(|| "#1e90ff".to_owned());

    let base = tinct::parse_hex(&base).with_context(|| format!("invalid base color {base}"))?;
    let hue = base.to_hsl().hue;
    info!(base = %base.to_hex(), hue, "rendering sweeps");

    let sweeps = sweeps(hue);
    let height = sweeps.len() as u32 * HEIGHT_PER_SWEEP;
    let mut img = RgbImage::new(WIDTH, height);

    for (index, sweep) in sweeps.iter().enumerate() {
        let top = index as u32 * HEIGHT_PER_SWEEP;

        for x in 0..WIDTH {
            // Stop short of a full turn, hsv rejects a hue of 360.
            let t = x as Component / WIDTH as Component;
            let pixel = sweep
                .pixel(t)
                .with_context(|| format!("sweep {} failed at t = {t}", sweep.name))?;
            for y in top..top + HEIGHT_PER_SWEEP {
                img.put_pixel(x, y, pixel);
            }
        }

        info!(sweep = sweep.name, "rendered");
    }

    img.save(&output)
        .with_context(|| format!("could not write image to {output}"))?;
    info!(%output, "done");

    Ok(())
}
