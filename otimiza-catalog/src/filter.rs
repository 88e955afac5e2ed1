/// Optional text predicate parsed from a query parameter.
///
/// A missing or empty parameter matches everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFilter(Option<String>);

impl TextFilter {
    pub fn from_param(param: Option<&str>) -> Self {
        Self(param.filter(|p| !p.is_empty()).map(str::to_lowercase))
    }

    pub fn is_active(&self) -> bool {
        self.0.is_some()
    }

    /// `matcher` receives the lowercased field and the lowercased needle.
    pub fn accepts(&self, field: &str, matcher: fn(&str, &str) -> bool) -> bool {
        match &self.0 {
            Some(needle) => matcher(&field.to_lowercase(), needle),
            None => true,
        }
    }
}

pub fn exact(field: &str, needle: &str) -> bool {
    field == needle
}

pub fn substring(field: &str, needle: &str) -> bool {
    field.contains(needle)
}
