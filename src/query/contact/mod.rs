//! Contact records and their storage.

pub use self::contact_ball_ball::contact_ball_ball;
pub use self::contact_collider_collider::contact;
pub use self::contact_info::ContactInfo;
pub use self::contact_pool::{ContactId, ContactPool};

mod contact_ball_ball;
mod contact_collider_collider;
mod contact_info;
mod contact_pool;
