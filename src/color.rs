/// `rgba(r, g, b, a)` CSS string for a `[0, 1]` colour.
pub fn css_rgba(color: [f32; 4]) -> String {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {:.3})",
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        color[3].clamp(0.0, 1.0)
    )
}

#[inline]
pub fn with_alpha(color: [f32; 4], factor: f32) -> [f32; 4] {
    [color[0], color[1], color[2], color[3] * factor]
}

/// Linear fog: 1 at `near` or closer, 0 at `far` or beyond.
#[inline]
pub fn fog_factor(depth: f32, near: f32, far: f32) -> f32 {
    if far <= near {
        return 1.0;
    }
    (1.0 - (depth - near) / (far - near)).clamp(0.0, 1.0)
}
