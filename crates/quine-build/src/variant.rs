//! The debug/release build-type selection.

use std::fmt;

/// A build variant. The name doubles as the output directory and the
/// CMake `CMAKE_BUILD_TYPE` value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    Debug,
    #[default]
    Release,
}

impl Variant {
    /// Both variants, in cleanup order.
    pub const ALL: [Variant; 2] = [Variant::Debug, Variant::Release];

    /// The variant a debug flag selects.
    pub fn select(debug: bool) -> Self {
        if debug {
            Variant::Debug
        } else {
            Variant::Release
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Debug => "debug",
            Variant::Release => "release",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
