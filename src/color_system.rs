// Stable color assignment for chart series

use crate::color::Color;
use crate::palette::{category_color, palette_color, PALETTE, SENTINEL};
use log::{debug, trace};
use std::cell::RefCell;
use std::collections::HashMap;

/// Assigns each series name a color that stays fixed until [`ColorSystem::reset`].
///
/// Assignment order for a new name:
/// 1. the category color, if a category key occurs in the name and that
///    color is not already held by another series
/// 2. the first palette color not held by any series
/// 3. once all ten are taken, `PALETTE[len % 10]`, so colors repeat
///
/// Every operation is total. Empty names get [`SENTINEL`] and are not cached.
#[derive(Debug, Clone, Default)]
pub struct ColorSystem {
    cache: HashMap<String, Color>,
}

impl ColorSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every assignment, making the whole palette available again
    pub fn reset(&mut self) {
        self.cache.clear();
    }

    /// Color for a series name, assigning one on first sight.
    ///
    /// Accepts `&str` or `Option<&str>`; `None` behaves like `""`.
    pub fn get_color_for_group<'a>(&mut self, name: impl Into<Option<&'a str>>) -> Color {
        let name = match name.into() {
            Some(name) if !name.is_empty() => name,
            _ => return Color::new(SENTINEL),
        };

        if let Some(color) = self.cache.get(name) {
            return color.clone();
        }

        let color = self.pick_color(name);
        self.cache.insert(name.to_string(), color.clone());
        color
    }

    /// Snapshot of the current assignments
    pub fn get_color_cache(&self) -> HashMap<String, Color> {
        self.cache.clone()
    }

    /// Pin a series to a color, skipping category and collision checks
    pub fn set_color_for_group(&mut self, name: impl Into<String>, color: impl Into<Color>) {
        let name = name.into();
        let color = color.into();
        trace!("override {} -> {}", name, color);
        self.cache.insert(name, color);
    }

    /// Color each name in order against the current assignments
    pub fn assign_colors<S: AsRef<str>>(&mut self, names: &[S]) -> Vec<(String, Color)> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                (name.to_string(), self.get_color_for_group(name))
            })
            .collect()
    }

    /// Reset, then color each name in order
    pub fn redraw<S: AsRef<str>>(&mut self, names: &[S]) -> Vec<(String, Color)> {
        self.reset();
        self.assign_colors(names)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    fn in_use(&self, color: &Color) -> bool {
        self.cache.values().any(|held| held == color)
    }

    fn pick_color(&self, name: &str) -> Color {
        if let Some(candidate) = category_color(name) {
            if !self.in_use(&candidate) {
                debug!("'{}' takes category color {}", name, candidate);
                return candidate;
            }
            debug!("category color {} for '{}' already taken", candidate, name);
        }

        if let Some(free) = PALETTE
            .iter()
            .map(|token| Color::new(*token))
            .find(|color| !self.in_use(color))
        {
            debug!("'{}' takes free palette color {}", name, free);
            return free;
        }

        let wrapped = palette_color(self.cache.len());
        debug!(
            "palette exhausted with {} series; '{}' reuses {}",
            self.cache.len(),
            name,
            wrapped
        );
        wrapped
    }
}

thread_local! {
    static SHARED: RefCell<ColorSystem> = RefCell::new(ColorSystem::new());
}

// Shared instance for call sites that want one engine per thread,
// e.g. a rendering thread driving several charts.

pub fn reset_color_system() {
    SHARED.with(|system| system.borrow_mut().reset());
}

pub fn get_color_for_group<'a>(name: impl Into<Option<&'a str>>) -> Color {
    SHARED.with(|system| system.borrow_mut().get_color_for_group(name))
}

pub fn get_color_cache() -> HashMap<String, Color> {
    SHARED.with(|system| system.borrow().get_color_cache())
}

pub fn set_color_for_group(name: impl Into<String>, color: impl Into<Color>) {
    SHARED.with(|system| system.borrow_mut().set_color_for_group(name, color));
}
