use nutype::nutype;

/// Slider value clamped to `0..=100`, used for wallpaper blur and
/// overlay opacity.
#[nutype(
    sanitize(with = |v: u8| v.min(100)),
    default = 0,
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        Default,
        From,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Percent(u8);
