/// Collision detection for Roadway Surfers
///
/// Everything on the road is an axis-aligned box: the player sprite and each
/// car. A crash is simply an AABB overlap between the player and any car.
///
/// # Architecture
///
/// - `Collidable` trait: implemented by `Player` and `Car`
/// - `aabb_intersect`: pure rectangle overlap test
/// - `check_collisions_with_collection`: one entity against a list
use sdl2::rect::Rect;

/// Trait for entities that take part in collision detection.
///
/// # Example
///
/// ```rust
/// impl Collidable for Car {
///     fn get_bounds(&self) -> Rect {
///         Rect::new(self.x, self.y, self.width, self.height)
///     }
/// }
/// ```
pub trait Collidable {
    /// Returns the axis-aligned bounding box for this entity.
    ///
    /// Must match where the sprite is drawn on screen.
    fn get_bounds(&self) -> Rect;
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// Overlap is strict on both axes, so boxes that only share an edge do not
/// collide. For a player at `(px, py)` of size `pw x ph` and a car at
/// `(cx, cy)` of size `cw x ch` this is the same as
/// `cx - pw < px < cx + cw && cy - ph < py < cy + ch`.
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x() < b.x() + b.width() as i32 && a.x() + a.width() as i32 > b.x();
    let y_overlap = a.y() < b.y() + b.height() as i32 && a.y() + a.height() as i32 > b.y();

    x_overlap && y_overlap
}

/// Checks collision between a single entity and a collection of others.
///
/// Returns the indices into `entities` that overlap `entity`, in order.
///
/// # Example
///
/// ```rust
/// let hits = check_collisions_with_collection(&player, &cars);
/// if !hits.is_empty() {
///     // crash
/// }
/// ```
pub fn check_collisions_with_collection<T: Collidable>(
    entity: &impl Collidable,
    entities: &[T],
) -> Vec<usize> {
    let entity_bounds = entity.get_bounds();

    entities
        .iter()
        .enumerate()
        .filter(|(_, other)| aabb_intersect(&entity_bounds, &other.get_bounds()))
        .map(|(index, _)| index)
        .collect()
}
