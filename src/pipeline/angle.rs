/// Number of rotation states the front-end cycles through.
pub const ROTATION_STEPS: u32 = 40;

/// Degrees between consecutive rotation indices.
pub const DEGREES_PER_STEP: u32 = 9;

const FULL_TURN: u32 = 360;

/// Clockwise angle encoded in the asset filename for a counter-clockwise
/// rotation index.
///
/// Indices wrap modulo [`ROTATION_STEPS`], so 40 is the same state as 0.
pub fn clockwise_angle(index: u32) -> u32 {
    (FULL_TURN - (index % ROTATION_STEPS) * DEGREES_PER_STEP) % FULL_TURN
}

/// Asset filename for a rotation index, e.g. `arrow_351.png` for index 1.
pub fn asset_filename(index: u32) -> String {
    format!("arrow_{:03}.png", clockwise_angle(index))
}
