use wasm_bindgen::JsCast;

/// Design tokens consumed by the stylesheet as CSS custom properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub accent_light: &'static str,
    pub font_sans: &'static str,
    pub font_serif: &'static str,
    pub hero_image: &'static str,
    pub food_image: &'static str,
    pub interior_image: &'static str,
}

pub const THEME: Theme = Theme {
    primary: "#1a1a1a",
    secondary: "#f8f5f0",
    accent: "#b8860b",
    accent_light: "#d4af37",
    font_sans: "'Inter', sans-serif",
    font_serif: "'Playfair Display', serif",
    hero_image: "url('https://images.unsplash.com/photo-1514933651103-005eec06c04b?ixlib=rb-1.2.1&auto=format&fit=crop&w=1950&q=80')",
    food_image: "url('https://images.unsplash.com/photo-1504674900247-0877df9cc836?ixlib=rb-1.2.1&auto=format&fit=crop&w=1950&q=80')",
    interior_image: "url('https://images.unsplash.com/photo-1555396273-367ea4eb4db5?ixlib=rb-1.2.1&auto=format&fit=crop&w=1567&q=80')",
};

impl Theme {
    /// Token table as custom-property pairs, in stylesheet naming.
    pub fn css_variables(&self) -> [(&'static str, &'static str); 9] {
        [
            ("--color-primary", self.primary),
            ("--color-secondary", self.secondary),
            ("--color-accent", self.accent),
            ("--color-accent-light", self.accent_light),
            ("--font-sans", self.font_sans),
            ("--font-serif", self.font_serif),
            ("--image-hero", self.hero_image),
            ("--image-food", self.food_image),
            ("--image-interior", self.interior_image),
        ]
    }
}

/// Writes the theme's custom properties onto the document root, where the
/// stylesheet picks them up.
pub fn apply_theme(theme: &Theme) {
    if let Some(window) = web_sys::window() {
        if let Some(doc) = window.document() {
            if let Some(root) = doc.document_element() {
                if let Some(root) = root.dyn_ref::<web_sys::HtmlElement>() {
                    let style = root.style();
                    for (name, value) in theme.css_variables() {
                        let _ = style.set_property(name, value);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_tokens_are_hex() {
        let theme = THEME;
        for color in [theme.primary, theme.secondary, theme.accent, theme.accent_light] {
            assert!(color.starts_with('#') && color.len() == 7);
        }
    }

    #[test]
    fn test_css_variables_cover_every_token() {
        let vars = THEME.css_variables();
        assert_eq!(vars.len(), 9);
        for (name, value) in vars {
            assert!(name.starts_with("--"));
            assert!(!value.is_empty());
        }
    }

    #[test]
    fn test_background_tokens_are_urls() {
        for image in [THEME.hero_image, THEME.food_image, THEME.interior_image] {
            assert!(image.starts_with("url('https://") && image.ends_with("')"));
        }
    }
}
