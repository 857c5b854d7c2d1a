//! Implementation details of the `distance` function.

pub use self::distance_collider_collider::distance;
pub use self::distance_support_map_support_map::{
    distance_support_map_support_map, distance_support_map_support_map_with_params,
};

mod distance_collider_collider;
mod distance_support_map_support_map;
