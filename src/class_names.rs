use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::Direction;

/// An unordered set of class names, kept in insertion order for stable output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassNames(Vec<String>);

impl ClassNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name`. Empty names and duplicates are ignored.
    pub fn push(&mut self, name: impl Into<String>) {
        let name = name.into();
        if name.is_empty() || self.contains(&name) {
            return;
        }
        self.0.push(name);
    }

    /// Adds `name` only when `on` is set.
    pub fn push_if(&mut self, on: bool, name: impl Into<String>) {
        if on {
            self.push(name);
        }
    }

    /// Adds every whitespace-separated class in `names`.
    pub fn extend_from_str(&mut self, names: &str) {
        for name in names.split_whitespace() {
            self.push(name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Same-set comparison, ignoring order.
    pub fn same_set(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|n| other.contains(n))
    }

    pub fn to_class_string(&self) -> String {
        self.0.join(" ")
    }
}

impl<S: Into<String>> FromIterator<S> for ClassNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut out = Self::new();
        for name in iter {
            out.push(name);
        }
        out
    }
}

impl core::fmt::Display for ClassNames {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

/// UI state that shows up as classes on the tree root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleFlags {
    pub show_icon: bool,
    pub block_node: bool,
    pub selectable: bool,
    pub direction: Direction,
}

impl Default for StyleFlags {
    fn default() -> Self {
        Self {
            show_icon: false,
            block_node: false,
            selectable: true,
            direction: Direction::Ltr,
        }
    }
}

/// Composes the root classes for the given flags.
///
/// `base` classes (context and caller supplied, whitespace separated) are kept alongside the
/// state classes.
pub fn compose_class_names<'a>(
    prefix_cls: &str,
    flags: StyleFlags,
    base: impl IntoIterator<Item = &'a str>,
) -> ClassNames {
    if prefix_cls.is_empty() {
        awarn!("compose_class_names: empty prefix, state classes will be unscoped");
    }

    let mut out = ClassNames::new();
    out.push_if(!flags.show_icon, format!("{prefix_cls}-icon-hide"));
    out.push_if(flags.block_node, format!("{prefix_cls}-block-node"));
    out.push_if(!flags.selectable, format!("{prefix_cls}-unselectable"));
    out.push_if(flags.direction.is_rtl(), format!("{prefix_cls}-rtl"));
    for names in base {
        out.extend_from_str(names);
    }
    out
}
