use glam::Vec3;
use smallvec::SmallVec;

use super::scene::TrackedObject;

/// Easing curves applied to normalized tween progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    /// Cubic ease-in (`t^3`).
    Power2In,
    /// Cubic ease-out.
    Power2Out,
    /// Cubic ease-in for the first half, ease-out for the second.
    Power2InOut,
}

impl Easing {
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power2In => t * t * t,
            Easing::Power2Out => 1.0 - (1.0 - t).powi(3),
            Easing::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Property a tween drives, addressed by section index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenTarget {
    Rotation(usize),
}

impl TweenTarget {
    #[inline]
    pub fn object_index(&self) -> usize {
        match *self {
            TweenTarget::Rotation(i) => i,
        }
    }
}

/// Relative animation: add `delta` to the target over `duration` seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenRequest {
    pub target: TweenTarget,
    pub delta: Vec3,
    pub duration: f32,
    pub easing: Easing,
}

/// Fire-and-forget sink for tween requests.
pub trait Animator {
    fn animate(&mut self, request: TweenRequest);
}

/// Collects requests without running them.
impl Animator for Vec<TweenRequest> {
    fn animate(&mut self, request: TweenRequest) {
        self.push(request);
    }
}

#[derive(Clone, Debug)]
struct ActiveTween {
    request: TweenRequest,
    elapsed: f32,
}

/// Runs tween requests against tracked objects, one step per frame.
///
/// Each step adds `delta * (ease(t1) - ease(t0))`, so a finished tween has
/// added exactly `delta` and overlapping tweens on one property accumulate.
#[derive(Clone, Debug, Default)]
pub struct Tweener {
    active: SmallVec<[ActiveTween; 4]>,
}

impl Tweener {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    pub fn advance(&mut self, dt: f32, objects: &mut [TrackedObject]) {
        let dt = dt.max(0.0);
        self.active.retain(|tween| {
            let req = tween.request;
            let (t0, t1) = if req.duration > 0.0 {
                let t0 = (tween.elapsed / req.duration).min(1.0);
                tween.elapsed += dt;
                (t0, (tween.elapsed / req.duration).min(1.0))
            } else {
                (0.0, 1.0)
            };
            let step = req.delta * (req.easing.apply(t1) - req.easing.apply(t0));
            if let Some(obj) = objects.get_mut(req.target.object_index()) {
                match req.target {
                    TweenTarget::Rotation(_) => obj.rotation += step,
                }
            }
            t1 < 1.0
        });
    }
}

impl Animator for Tweener {
    fn animate(&mut self, request: TweenRequest) {
        self.active.push(ActiveTween {
            request,
            elapsed: 0.0,
        });
    }
}
