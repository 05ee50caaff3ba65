use std::collections::HashMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Company colour registry
// ---------------------------------------------------------------------------

/// Hues cycled through before colours repeat.
const PALETTE_SIZE: usize = 12;

/// Process-lifetime, append-only company → colour assignment.
///
/// The first time a company is seen it receives the next unused palette
/// colour; the assignment never changes for the rest of the session, so
/// a company keeps its colour across every chart and every re-render.
#[derive(Debug, Clone)]
pub struct CompanyColorRegistry {
    palette: Vec<Color32>,
    assigned: HashMap<String, Color32>,
    next: usize,
}

impl Default for CompanyColorRegistry {
    fn default() -> Self {
        CompanyColorRegistry {
            palette: generate_palette(PALETTE_SIZE),
            assigned: HashMap::new(),
            next: 0,
        }
    }
}

impl CompanyColorRegistry {
    /// Colour for a company, assigning the next palette entry on first sight.
    pub fn color_for(&mut self, company: &str) -> Color32 {
        if let Some(&c) = self.assigned.get(company) {
            return c;
        }
        let color = self.palette[self.next % self.palette.len()];
        self.next += 1;
        self.assigned.insert(company.to_string(), color);
        color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_entries() {
        let colors = generate_palette(8);
        assert_eq!(colors.len(), 8);
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn palette_of_zero_is_empty() {
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn registry_assignments_are_stable() {
        let mut registry = CompanyColorRegistry::default();
        let first = registry.color_for("Alpha");
        let second = registry.color_for("Beta");
        assert_ne!(first, second);

        // Looking a company up again never re-assigns.
        assert_eq!(registry.color_for("Alpha"), first);
        assert_eq!(registry.color_for("Beta"), second);
    }

    #[test]
    fn registry_is_first_seen_ordered() {
        let mut a = CompanyColorRegistry::default();
        let mut b = CompanyColorRegistry::default();
        // Same arrival order → same colours, regardless of name ordering.
        assert_eq!(a.color_for("Zeta"), b.color_for("Zeta"));
        assert_eq!(a.color_for("Alpha"), b.color_for("Alpha"));
    }
}
