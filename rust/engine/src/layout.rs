use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

/// A point in the local 2D space of the container being laid out.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Vec2 {
        Vec2 { x, y }
    }
}

/// Where one item goes: a local position and a rotation in degrees around
/// the facing axis.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Vec2,
    pub rotation: f32,
}

/// The five arrangement algorithms.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum LayoutMode {
    /// Cards spread on an arc, like a hand held in front of a player.
    Fan,
    /// Evenly spaced along the x axis, centered.
    Line,
    /// Diagonal offset per depth, like a squared-up pile.
    Stack,
    /// Rows of a fixed column count; a partial last row is centered on its
    /// own item count.
    Grid,
    /// Seeded random placement inside a square region.
    Scattered,
}

/// Pure input to [`arrange`]; build one per call, no state outlives it.
/// Fields that a mode does not use are ignored by that mode.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRequest {
    pub item_count: usize,
    pub mode: LayoutMode,
    /// Distance between neighboring items (Line, and Grid columns).
    pub spacing: f32,
    /// Degrees of arc between neighboring fan items, before the total
    /// spread is capped at [`MAX_FAN_SPREAD`].
    pub arc_angle: f32,
    /// Radius of the fan's circle.
    pub arc_radius: f32,
    pub grid_columns: usize,
    pub grid_row_spacing: f32,
    /// Offset applied per depth step in a stack.
    pub stack_step: f32,
    /// Side length of the square the scattered mode places items in.
    pub scatter_extent: f32,
    /// Explicit random source for the scattered mode; everything else is
    /// closed-form and ignores it.
    pub seed: u64,
}

impl Default for LayoutRequest {
    fn default() -> LayoutRequest {
        LayoutRequest {
            item_count: 0,
            mode: LayoutMode::Line,
            spacing: 40.0,
            arc_angle: 7.0,
            arc_radius: 400.0,
            grid_columns: 5,
            grid_row_spacing: 60.0,
            stack_step: 2.0,
            scatter_extent: 120.0,
            seed: 0,
        }
    }
}

/// Cap on a fan's total angular spread, in degrees.
pub const MAX_FAN_SPREAD: f32 = 60.0;

/// Degrees of rotational jitter either way in the scattered mode.
const SCATTER_TILT: f32 = 15.0;

/// Maps a request to one [`Placement`] per item index.
///
/// Purely functional: no live container state is consulted, so
/// presentation code can lay out any count it likes. A zero count yields
/// an empty vector for every mode.
///
/// # Examples
///
/// ```
/// use talon_engine::layout::{arrange, LayoutMode, LayoutRequest};
///
/// let request = LayoutRequest {
///     item_count: 3,
///     mode: LayoutMode::Line,
///     spacing: 10.0,
///     ..LayoutRequest::default()
/// };
/// let placements = arrange(&request);
/// assert_eq!(placements.len(), 3);
/// assert_eq!(placements[0].position.x, -10.0);
/// assert_eq!(placements[1].position.x, 0.0);
/// assert_eq!(placements[2].position.x, 10.0);
/// ```
pub fn arrange(request: &LayoutRequest) -> Vec<Placement> {
    if request.item_count == 0 {
        return Vec::new();
    }
    match request.mode {
        LayoutMode::Fan => fan(request),
        LayoutMode::Line => line(request),
        LayoutMode::Stack => stack(request),
        LayoutMode::Grid => grid(request),
        LayoutMode::Scattered => scattered(request),
    }
}

fn fan(request: &LayoutRequest) -> Vec<Placement> {
    let count = request.item_count;
    let total = (request.arc_angle * (count - 1) as f32).min(MAX_FAN_SPREAD);
    // count == 1 gets a zero spread; the max(1) keeps the step finite.
    let step = total / (count - 1).max(1) as f32;
    let start = total / 2.0;
    (0..count)
        .map(|i| {
            let angle = start - step * i as f32;
            let rad = angle.to_radians();
            // Point on the arc, shifted so the arc's center card sits at
            // the local origin.
            let position = Vec2::new(
                rad.sin() * request.arc_radius,
                rad.cos() * request.arc_radius - request.arc_radius,
            );
            Placement {
                position,
                rotation: angle,
            }
        })
        .collect()
}

fn line(request: &LayoutRequest) -> Vec<Placement> {
    let count = request.item_count;
    let half = (count - 1) as f32 * request.spacing / 2.0;
    (0..count)
        .map(|i| Placement {
            position: Vec2::new(i as f32 * request.spacing - half, 0.0),
            rotation: 0.0,
        })
        .collect()
}

fn stack(request: &LayoutRequest) -> Vec<Placement> {
    (0..request.item_count)
        .map(|i| {
            let offset = i as f32 * request.stack_step;
            Placement {
                position: Vec2::new(offset, offset),
                rotation: 0.0,
            }
        })
        .collect()
}

fn grid(request: &LayoutRequest) -> Vec<Placement> {
    let count = request.item_count;
    let columns = request.grid_columns.max(1);
    let rows = count.div_ceil(columns);
    let block_half = (rows - 1) as f32 * request.grid_row_spacing / 2.0;
    let mut placements = Vec::with_capacity(count);
    for row in 0..rows {
        // A partial last row is centered on its own item count, not on the
        // full column width.
        let items_in_row = columns.min(count - row * columns);
        let row_half = (items_in_row - 1) as f32 * request.spacing / 2.0;
        for col in 0..items_in_row {
            placements.push(Placement {
                position: Vec2::new(
                    col as f32 * request.spacing - row_half,
                    row as f32 * request.grid_row_spacing - block_half,
                ),
                rotation: 0.0,
            });
        }
    }
    placements
}

fn scattered(request: &LayoutRequest) -> Vec<Placement> {
    let mut rng = ChaCha20Rng::seed_from_u64(request.seed);
    let half = request.scatter_extent.abs() / 2.0;
    (0..request.item_count)
        .map(|_| Placement {
            position: Vec2::new(
                rng.random_range(-half..=half),
                rng.random_range(-half..=half),
            ),
            rotation: rng.random_range(-SCATTER_TILT..=SCATTER_TILT),
        })
        .collect()
}
