//! Generation options.

use crate::constants::DEFAULT_MAX_OUTPUTS;
use crate::digits::WindowPolicy;

/// Options applied to every generator invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Maximum number of records a single call may produce (0 = default).
    pub max_outputs: u64,
    /// What to do when a square/product is shorter than the digit window.
    pub window_policy: WindowPolicy,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_outputs: DEFAULT_MAX_OUTPUTS,
            window_policy: WindowPolicy::Reject,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.max_outputs == 0 {
            self.max_outputs = DEFAULT_MAX_OUTPUTS;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = Options::default();
        assert_eq!(opts.max_outputs, DEFAULT_MAX_OUTPUTS);
        assert_eq!(opts.window_policy, WindowPolicy::Reject);
    }

    #[test]
    fn normalize_zero_cap() {
        let opts = Options {
            max_outputs: 0,
            ..Default::default()
        };
        assert_eq!(opts.normalize().max_outputs, DEFAULT_MAX_OUTPUTS);
    }

    #[test]
    fn normalize_keeps_explicit_cap() {
        let opts = Options {
            max_outputs: 16,
            window_policy: WindowPolicy::ZeroPad,
        };
        assert_eq!(opts.normalize(), opts);
    }
}
