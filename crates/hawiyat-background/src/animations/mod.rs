//! Stateful simulators. Each owns its random state and paints through a
//! [`Surface`](crate::Surface).

pub mod embers;
pub mod icons;
pub mod particles;
