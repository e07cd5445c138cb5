/// Turns a caller-supplied color string into one the viewer accepts
///
/// Applied to the payload at export time; stored features keep the string
/// they were given.
pub trait ColorNormalizer {
    fn normalize(&self, color: &str) -> String;
}

/// Lowercases and strips hyphens, so `"Light-Blue"` becomes `"lightblue"`
///
/// Hex strings pass through apart from case. Names that need a hyphen do
/// not survive; use [`PassthroughColors`] or a closure for those.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssColorNormalizer;

impl ColorNormalizer for CssColorNormalizer {
    fn normalize(&self, color: &str) -> String {
        color.to_lowercase().replace('-', "")
    }
}

/// Leaves colors untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughColors;

impl ColorNormalizer for PassthroughColors {
    fn normalize(&self, color: &str) -> String {
        color.to_string()
    }
}

impl<F> ColorNormalizer for F
where
    F: Fn(&str) -> String,
{
    fn normalize(&self, color: &str) -> String {
        self(color)
    }
}
