use anyhow::Result;
use std::cell::RefCell;
use std::collections::HashMap;

/// Rendered bounding box of a piece of text, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
}

/// Measures the rendered bounding box of a string at a given font size and family.
///
/// The layout engine never measures text itself: a host environment supplies an
/// implementation (a headless text-shaping backend, pre-baked metrics, or the
/// built-in [`HeuristicMeasurer`]). A measurement failure is fatal for the whole
/// search, since a missing bounding box cannot be reasoned about.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size: f32, font_family: &str) -> Result<TextExtent>;
}

/// Deterministic measurer based on per-character advance ratios.
///
/// Good enough for layouts that are rendered with generous padding, and for
/// tests that need reproducible extents without a font stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicMeasurer;

/// Height of a rendered line relative to the font size.
const LINE_HEIGHT_RATIO: f32 = 1.18;

impl HeuristicMeasurer {
    fn advance_ratio(c: char) -> f32 {
        match c {
            'i' | 'j' | 'l' | 't' | 'f' | 'I' | '.' | ',' | '\'' | '!' | '|' | ':' | ';' => 0.30,
            'm' | 'w' | 'M' | 'W' | '@' | '%' => 0.90,
            ' ' => 0.32,
            '0'..='9' => 0.55,
            'A'..='Z' => 0.72,
            // CJK and other fullwidth glyphs occupy a full em
            c if (c as u32) >= 0x2E80 => 1.0,
            _ => 0.55,
        }
    }
}

impl TextMeasurer for HeuristicMeasurer {
    fn measure(&self, text: &str, font_size: f32, _font_family: &str) -> Result<TextExtent> {
        let advance: f32 = text.chars().map(Self::advance_ratio).sum();
        Ok(TextExtent {
            width: advance * font_size,
            height: LINE_HEIGHT_RATIO * font_size,
        })
    }
}

/// Memoizing wrapper around a [`TextMeasurer`].
///
/// Real measurers typically round-trip through a rendering surface, while the
/// scale search re-measures the same text at most once per font size. The cache
/// is scoped to one search call and never shared.
pub struct CachedMeasurer<'a, M: TextMeasurer> {
    inner: &'a M,
    cache: RefCell<HashMap<(String, u32), TextExtent>>,
}

impl<'a, M: TextMeasurer> CachedMeasurer<'a, M> {
    pub fn new(inner: &'a M) -> Self {
        CachedMeasurer {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }
}

impl<M: TextMeasurer> TextMeasurer for CachedMeasurer<'_, M> {
    fn measure(&self, text: &str, font_size: f32, font_family: &str) -> Result<TextExtent> {
        let key = (text.to_owned(), font_size.to_bits());
        if let Some(extent) = self.cache.borrow().get(&key) {
            return Ok(*extent);
        }
        let extent = self.inner.measure(text, font_size, font_family)?;
        self.cache.borrow_mut().insert(key, extent);
        Ok(extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_grows_with_font_size() {
        let m = HeuristicMeasurer;
        let small = m.measure("cloud", 12.0, "Impact").unwrap();
        let large = m.measure("cloud", 84.0, "Impact").unwrap();
        assert!(large.width > small.width);
        assert!(large.height > small.height);
    }

    #[test]
    fn cached_measurer_agrees_with_inner() {
        let inner = HeuristicMeasurer;
        let cached = CachedMeasurer::new(&inner);
        let direct = inner.measure("word", 30.0, "Impact").unwrap();
        assert_eq!(cached.measure("word", 30.0, "Impact").unwrap(), direct);
        // second call hits the cache
        assert_eq!(cached.measure("word", 30.0, "Impact").unwrap(), direct);
    }
}
