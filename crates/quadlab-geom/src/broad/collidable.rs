// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use quadlab_math::Vec2;

use crate::types::{aabb::Aabb2, extent::Extent};

/// Anything the broad phase can sort and sweep.
///
/// The broad phase only reads [`bounds`](Collidable::bounds) and writes the
/// candidate flag; it never moves or resizes an object.
pub trait Collidable {
    /// Current bounding box.
    fn bounds(&self) -> Aabb2;
    /// Whether the last sweep flagged this object.
    fn is_collision_candidate(&self) -> bool;
    /// Overwrites the candidate flag.
    fn set_collision_candidate(&mut self, candidate: bool);

    /// Left edge of [`bounds`](Collidable::bounds); the sort key.
    fn left(&self) -> f32 {
        self.bounds().left()
    }
}

// Lets a frame snapshot of borrowed objects (`Vec<&mut T>`) be sorted and
// swept without taking ownership.
impl<T: Collidable + ?Sized> Collidable for &mut T {
    fn bounds(&self) -> Aabb2 {
        (**self).bounds()
    }

    fn is_collision_candidate(&self) -> bool {
        (**self).is_collision_candidate()
    }

    fn set_collision_candidate(&mut self, candidate: bool) {
        (**self).set_collision_candidate(candidate);
    }

    fn left(&self) -> f32 {
        (**self).left()
    }
}

/// A bare box with an id and a candidate flag.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Candidate {
    id: usize,
    center: Vec2,
    extent: Extent,
    flagged: bool,
}

impl Candidate {
    /// Creates an unflagged candidate centred at `center`.
    pub const fn new(id: usize, center: Vec2, extent: Extent) -> Self {
        Self {
            id,
            center,
            extent,
            flagged: false,
        }
    }

    /// Caller-assigned identifier.
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Moves the box so its centre sits at `center`, keeping its size.
    pub fn move_to(&mut self, center: Vec2) {
        self.center = center;
    }
}

impl Collidable for Candidate {
    fn bounds(&self) -> Aabb2 {
        Aabb2::from_center_extent(self.center, self.extent)
    }

    fn is_collision_candidate(&self) -> bool {
        self.flagged
    }

    fn set_collision_candidate(&mut self, candidate: bool) {
        self.flagged = candidate;
    }
}
