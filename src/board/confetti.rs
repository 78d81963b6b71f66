//! Victory flourish: confetti particles over the board plus a timed cleanup.

use rand::Rng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, window};

use crate::config::GameConfig;

pub const VICTORY_CLASS: &str = "victory";
const CONFETTI_CLASS: &str = "confetti";

/// Screen rectangle the confetti falls from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub size_px: u32,
    pub color: String,
    pub left_px: f64,
    pub top_px: f64,
    pub rotation_deg: f64,
}

impl Particle {
    fn style(&self) -> String {
        format!(
            "width:{size}px; height:{size}px; background:{color}; left:{left}px; top:{top}px; transform:rotate({rot}deg);",
            size = self.size_px,
            color = self.color,
            left = self.left_px,
            top = self.top_px,
            rot = self.rotation_deg,
        )
    }
}

/// Lay out `count` particles along the top edge of `bounds`.
pub fn scatter<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    palette: &[String],
    bounds: Bounds,
) -> Vec<Particle> {
    if palette.is_empty() {
        return Vec::new();
    }
    (0..count)
        .map(|_| Particle {
            size_px: rng.gen_range(6..=15),
            color: palette[rng.gen_range(0..palette.len())].clone(),
            left_px: bounds.left + rng.gen_range(0.0..=1.0) * bounds.width,
            top_px: bounds.top + 10.0,
            rotation_deg: rng.gen_range(0.0..360.0),
        })
        .collect()
}

/// Highlight the board, drop confetti, and clear both after `victory_ms`.
pub fn celebrate<R: Rng + ?Sized>(
    doc: &Document,
    board: &Element,
    config: &GameConfig,
    rng: &mut R,
) -> Result<(), JsValue> {
    board.class_list().add_1(VICTORY_CLASS)?;

    let rect = board.get_bounding_client_rect();
    let bounds = Bounds {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
    };
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;
    let mut spawned: Vec<Element> = Vec::with_capacity(config.confetti_count);
    for particle in scatter(rng, config.confetti_count, &config.confetti_palette, bounds) {
        let el: HtmlElement = doc.create_element("div")?.dyn_into()?;
        el.set_class_name(CONFETTI_CLASS);
        el.set_attribute("style", &particle.style())?;
        body.append_child(&el)?;
        spawned.push(el.into());
    }

    let board = board.clone();
    let cleanup = Closure::once(move || {
        let _ = board.class_list().remove_1(VICTORY_CLASS);
        for el in spawned {
            el.remove();
        }
    });
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    win.set_timeout_with_callback_and_timeout_and_arguments_0(
        cleanup.as_ref().unchecked_ref(),
        config.victory_ms,
    )?;
    cleanup.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn palette() -> Vec<String> {
        GameConfig::default().confetti_palette
    }

    #[test]
    fn test_scatter_stays_inside_bounds() {
        let bounds = Bounds {
            left: 40.0,
            top: 100.0,
            width: 300.0,
        };
        let particles = scatter(&mut StdRng::seed_from_u64(1), 20, &palette(), bounds);
        assert_eq!(particles.len(), 20);
        for p in &particles {
            assert!((6..=15).contains(&p.size_px));
            assert!(palette().contains(&p.color));
            assert!(p.left_px >= 40.0 && p.left_px <= 340.0);
            assert_eq!(p.top_px, 110.0);
            assert!((0.0..360.0).contains(&p.rotation_deg));
        }
    }

    #[test]
    fn test_scatter_empty_palette() {
        let bounds = Bounds {
            left: 0.0,
            top: 0.0,
            width: 10.0,
        };
        assert!(scatter(&mut StdRng::seed_from_u64(2), 5, &[], bounds).is_empty());
    }

    #[test]
    fn test_particle_style() {
        let p = Particle {
            size_px: 8,
            color: "#ffd54f".to_string(),
            left_px: 12.5,
            top_px: 30.0,
            rotation_deg: 90.0,
        };
        assert_eq!(
            p.style(),
            "width:8px; height:8px; background:#ffd54f; left:12.5px; top:30px; transform:rotate(90deg);"
        );
    }
}
