//! Inline style (`element.style`)

/// Ordered inline style declarations of one element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CSSStyleDeclaration {
    declarations: Vec<(String, String)>,
}

impl CSSStyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of declared properties
    pub fn length(&self) -> usize {
        self.declarations.len()
    }

    /// Get a property value
    pub fn get_property_value(&self, property: &str) -> Option<&str> {
        let property = property.trim().to_ascii_lowercase();
        self.declarations
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Set a property; an empty value removes it
    pub fn set_property(&mut self, property: &str, value: &str) {
        let property = property.trim().to_ascii_lowercase();
        let value = value.trim();
        if value.is_empty() {
            self.remove_property(&property);
            return;
        }
        match self.declarations.iter_mut().find(|(name, _)| *name == property) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.declarations.push((property, value.to_string())),
        }
    }

    /// Remove a property, returning the old value
    pub fn remove_property(&mut self, property: &str) -> Option<String> {
        let property = property.trim().to_ascii_lowercase();
        let pos = self.declarations.iter().position(|(name, _)| *name == property)?;
        Some(self.declarations.remove(pos).1)
    }

    /// Serialize as `name: value;` pairs
    pub fn css_text(&self) -> String {
        self.declarations
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Replace all declarations from a `style` attribute value
    pub fn set_css_text(&mut self, text: &str) {
        self.declarations.clear();
        for decl in text.split(';') {
            if let Some((name, value)) = decl.split_once(':') {
                self.set_property(name, value);
            }
        }
    }
}
