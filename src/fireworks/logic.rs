use bevy::color::Color;
use pyrotechnics::color::Rgba;

/// World size of something `pixels` tall on screen at `distance` from a
/// perspective camera with vertical `fov` in radians.
pub fn pixel_size_at_distance(pixels: f32, distance: f32, fov: f32, viewport_height: f32) -> f32 {
    if viewport_height <= 0.0 {
        return 0.0;
    }
    pixels * 2.0 * distance.max(0.0) * (fov * 0.5).tan() / viewport_height
}

/// Radius of the visible disc of a particle sprite `image_pixels` wide.
pub fn particle_radius(
    image_pixels: f32,
    fill_ratio: f32,
    distance: f32,
    fov: f32,
    viewport_height: f32,
) -> f32 {
    0.5 * pixel_size_at_distance(image_pixels * fill_ratio, distance, fov, viewport_height)
}

pub fn to_bevy_color(color: Rgba) -> Color {
    Color::srgba(color.red, color.green, color.blue, color.alpha)
}
