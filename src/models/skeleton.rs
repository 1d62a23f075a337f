// src/models/skeleton.rs
//
// The six tracked body parts and the shared per-part pose state.

use std::sync::Mutex;

/// One tracked joint of the mocap suit. The display name doubles as the
/// middle segment of the OSC address the tracker publishes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyPart {
    LeftLowerLeg,
    ChestBottom,
    RightLowerLeg,
    RightForeArm,
    LeftForeArm,
    Head,
}

impl BodyPart {
    pub const ALL: [BodyPart; 6] = [
        BodyPart::LeftLowerLeg,
        BodyPart::ChestBottom,
        BodyPart::RightLowerLeg,
        BodyPart::RightForeArm,
        BodyPart::LeftForeArm,
        BodyPart::Head,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BodyPart::LeftLowerLeg => "LeftLowerLeg",
            BodyPart::ChestBottom => "ChestBottom",
            BodyPart::RightLowerLeg => "RightLowerLeg",
            BodyPart::RightForeArm => "RightForeArm",
            BodyPart::LeftForeArm => "LeftForeArm",
            BodyPart::Head => "Head",
        }
    }

    /// The OSC address this part's pose messages arrive on,
    /// e.g. "/notch/Head/all".
    pub fn topic(&self, namespace: &str) -> String {
        format!("/{}/{}/all", namespace, self.name())
    }

    /// Maps an OSC address back to a body part. Returns None for anything
    /// that isn't `/<namespace>/<PartName>/all`.
    pub fn from_topic(addr: &str, namespace: &str) -> Option<BodyPart> {
        let mut segments = addr.strip_prefix('/')?.split('/');
        if segments.next() != Some(namespace) {
            return None;
        }
        let part = segments.next()?;
        if segments.next() != Some("all") || segments.next().is_some() {
            return None;
        }
        BodyPart::ALL.iter().copied().find(|p| p.name() == part)
    }

    fn index(&self) -> usize {
        match self {
            BodyPart::LeftLowerLeg => 0,
            BodyPart::ChestBottom => 1,
            BodyPart::RightLowerLeg => 2,
            BodyPart::RightForeArm => 3,
            BodyPart::LeftForeArm => 4,
            BodyPart::Head => 5,
        }
    }
}

/// Most-recent decoded value sequence per body part, shared between the OSC
/// controller (writer) and the renderer (reader).
///
/// Each slot is locked independently and replaced wholesale, so a reader can
/// never observe a partially-updated sequence. Last write wins; there is no
/// history and no correlation between slots. An empty vector means the part
/// has never received data.
#[derive(Debug, Default)]
pub struct SkeletonState {
    slots: [Mutex<Vec<f32>>; 6],
}

impl SkeletonState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the slot for `part` with `values`.
    pub fn set(&self, part: BodyPart, values: Vec<f32>) {
        // Lock poisoning only happens if a holder panicked; the stale value
        // is still fine to overwrite.
        let mut slot = self.slots[part.index()]
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        *slot = values;
    }

    /// Clones out the current sequence for `part`. Empty if no message has
    /// arrived yet.
    pub fn get(&self, part: BodyPart) -> Vec<f32> {
        self.slots[part.index()]
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
