use crate::{Directive, DirectiveKind, Format};

/// DirectiveSet keeps at most one directive per [`DirectiveKind`].
///
/// Directives are kept in the order their kind was first inserted.
/// Inserting a directive whose kind is already present replaces the old one
/// in place, so the rendered path only changes where the value changed.
///
/// `format` directives never enter the list. They are held in a dedicated
/// slot because they end up as the source URL extension instead of a path
/// segment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectiveSet {
    directives: Vec<Directive>,
    format: Option<Format>,
}

impl DirectiveSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a directive, returning the one it replaced.
    pub fn insert(&mut self, directive: Directive) -> Option<Directive> {
        if let Some(format) = directive.as_format() {
            return self.format.replace(format).map(Directive::format);
        }

        let kind = directive.kind();
        match self.directives.iter_mut().find(|d| d.kind() == kind) {
            Some(existing) => Some(std::mem::replace(existing, directive)),
            None => {
                self.directives.push(directive);
                None
            }
        }
    }

    /// Get the active directive of `kind`.
    pub fn get(&self, kind: DirectiveKind) -> Option<&Directive> {
        self.directives.iter().find(|d| d.kind() == kind)
    }

    /// Active format, if any.
    pub fn format(&self) -> Option<Format> {
        self.format
    }

    /// Iterate directives in render order. The format slot is not included.
    pub fn iter(&self) -> impl Iterator<Item = &Directive> {
        self.directives.iter()
    }

    /// Number of directives, not counting the format slot.
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    /// Check if there is no directive and no format.
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty() && self.format.is_none()
    }

    /// Copy of this set with `directives` inserted on top.
    ///
    /// `self` is left untouched.
    pub fn overlay<'a>(&self, directives: impl IntoIterator<Item = &'a Directive>) -> Self {
        let mut set = self.clone();
        set.extend(directives.into_iter().cloned());
        set
    }
}

impl Extend<Directive> for DirectiveSet {
    fn extend<T: IntoIterator<Item = Directive>>(&mut self, iter: T) {
        for directive in iter {
            self.insert(directive);
        }
    }
}

impl FromIterator<Directive> for DirectiveSet {
    fn from_iter<T: IntoIterator<Item = Directive>>(iter: T) -> Self {
        let mut set = DirectiveSet::new();
        set.extend(iter);
        set
    }
}
