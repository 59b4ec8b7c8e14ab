use core::fmt;

/// Raw sentinel for a view whose length is only known at runtime.
pub const DYNAMIC_EXTENT: usize = usize::MAX;

/// The extent of a view: fixed by its type, or decided when it is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extent {
    Static(usize),
    Dynamic,
}

impl Extent {
    pub const fn from_raw(raw: usize) -> Self {
        if raw == DYNAMIC_EXTENT {
            Extent::Dynamic
        } else {
            Extent::Static(raw)
        }
    }

    pub const fn as_raw(self) -> usize {
        match self {
            Extent::Static(n) => n,
            Extent::Dynamic => DYNAMIC_EXTENT,
        }
    }

    pub const fn is_dynamic(self) -> bool {
        matches!(self, Extent::Dynamic)
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extent::Static(n) => write!(f, "{n}"),
            Extent::Dynamic => f.write_str("dynamic"),
        }
    }
}
